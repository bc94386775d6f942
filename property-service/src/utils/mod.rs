pub mod validation;

pub use validation::{AppJson, ValidatedJson, MISSING_REQUIRED_INFORMATION};
