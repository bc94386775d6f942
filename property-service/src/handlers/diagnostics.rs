use axum::Json;
use serde_json::{json, Value};

use crate::utils::AppJson;

pub async fn index() -> &'static str {
    "Hello, this is the GET request test!"
}

/// Echo whatever JSON the caller posted.
pub async fn echo(AppJson(data): AppJson<Value>) -> Json<Value> {
    Json(json!({
        "message": "POST request received!",
        "data_received": data
    }))
}
