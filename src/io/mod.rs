mod error;
mod json;

pub use json::reader::read as read_json_document;
pub use json::writer::write as write_json_document;

pub use error::Error;
