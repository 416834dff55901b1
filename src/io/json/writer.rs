use crate::io::error::Error;
use crate::model::document::Document;
use std::io::Write;

/// Serializes the document as pretty-printed JSON followed by a trailing
/// newline. Field order follows the document's insertion order, so fields
/// carried through from a read come back out where they were.
pub fn write<W: Write>(mut writer: W, document: &Document) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| {
        if e.is_io() {
            Error::from_io(e.into(), None)
        } else {
            Error::serialize(None, e.to_string())
        }
    })?;
    writer
        .write_all(b"\n")
        .map_err(|e| Error::from_io(e, None))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn output_ends_with_a_newline() {
        let document: Document = serde_json::from_value(json!({
            "sequences": [ { "protein": { "id": "A", "sequence": "MK" } } ]
        }))
        .unwrap();
        let mut buffer = Vec::new();

        write(&mut buffer, &document).unwrap();

        assert_eq!(buffer.last(), Some(&b'\n'));
    }

    #[test]
    fn written_document_reads_back_identically() {
        let document: Document = serde_json::from_value(json!({
            "name": "complex",
            "modelSeeds": [42],
            "sequences": [
                { "protein": { "id": "A", "sequence": "MKVLA" } },
                { "ligand": { "id": "X", "ccdCodes": ["HEM"] } }
            ],
            "bondedAtomPairs": [ [["A", 1, "N"], ["X", 1, "FE"]] ]
        }))
        .unwrap();
        let mut buffer = Vec::new();

        write(&mut buffer, &document).unwrap();
        let reread = crate::io::json::reader::read(&buffer[..]).unwrap();

        assert_eq!(reread, document);
    }

    #[test]
    fn empty_bond_list_is_omitted_from_output() {
        let document: Document = serde_json::from_value(json!({
            "sequences": [ { "protein": { "id": "A", "sequence": "MK" } } ]
        }))
        .unwrap();
        let mut buffer = Vec::new();

        write(&mut buffer, &document).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(!text.contains("bondedAtomPairs"));
    }
}
