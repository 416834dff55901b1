use crate::io::error::Error;
use crate::model::document::Document;
use std::io::BufRead;

/// Deserializes one structural document from a buffered JSON stream.
///
/// Unknown top-level and per-chain fields are retained verbatim on the
/// document so they survive a later write unchanged.
pub fn read<R: BufRead>(reader: R) -> Result<Document, Error> {
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            Error::from_io(e.into(), None)
        } else {
            let (line, column) = (e.line(), e.column());
            Error::parse(None, line, column, strip_location(e.to_string()))
        }
    })
}

// serde_json appends its own " at line L column C" suffix; the location is
// carried structurally instead.
fn strip_location(message: String) -> String {
    match message.find(" at line ") {
        Some(index) => message[..index].to_string(),
        None => message,
    }
}
