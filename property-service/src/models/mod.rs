pub mod lead;
pub mod property;
pub mod viewing;

pub use lead::Lead;
pub use property::Property;
pub use viewing::{PropertyId, Viewing};
