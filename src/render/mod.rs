//! Rendering module for presenting extracted records.

mod json;
mod pretty;

pub use json::{record_to_json, to_json, JsonFormat};
pub use pretty::{record_to_pretty, to_pretty};
