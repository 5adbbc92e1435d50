//! Mapping documents: the flat JSON object the mapping is saved to and loaded from.
//!
//! ```json
//! {
//!   "A": "A",
//!   "X": "CRight",
//!   "CStick Up": "None"
//! }
//! ```

use std::io::{self, Read, Write};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    buttons::SourceButton,
    mapping::{Mapping, Target},
};

/// GameCube button name to N64 button name (`"None"` when unassigned).
pub type MappingDocument = IndexMap<String, String>;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("could not load mapping: {0}")]
    Structural(#[source] serde_json::Error),
    #[error("could not read mapping document")]
    Read(#[source] io::Error),
    #[error("could not write mapping document")]
    Write(#[source] io::Error),
    #[error("could not encode mapping document")]
    Encode(#[source] serde_json::Error),
}

pub fn encode(mapping: &Mapping) -> MappingDocument {
    let mut document: MappingDocument = mapping
        .entries()
        .map(|(source, target)| (source.name().to_owned(), target.name().to_owned()))
        .collect();

    for (key, value) in mapping.extra_entries() {
        document.insert(key.to_owned(), value.to_owned());
    }

    document
}

/// Build a fresh mapping from a document. Buttons missing from it keep their defaults.
pub fn from_document(document: MappingDocument) -> Mapping {
    let mut mapping = Mapping::new();

    for (key, value) in document {
        match SourceButton::parse(&key) {
            Ok(source) => mapping.set(source, Target::parse(&value)),
            Err(_) => {
                debug!("Keeping unrecognized mapping key `{key}`");
                mapping.set_extra(key, value);
            }
        }
    }

    mapping
}

pub fn decode(bytes: &[u8]) -> Result<Mapping, DocumentError> {
    let document =
        serde_json::from_slice::<MappingDocument>(bytes).map_err(DocumentError::Structural)?;
    Ok(from_document(document))
}

/// Read `reader` to the end and decode what was read.
pub fn read_from(mut reader: impl Read) -> Result<Mapping, DocumentError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(DocumentError::Read)?;
    decode(&bytes)
}

/// Pretty printed with two space indentation.
pub fn to_json(mapping: &Mapping) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(&encode(mapping)).map_err(DocumentError::Encode)
}

pub fn write_to(mut writer: impl Write, mapping: &Mapping) -> Result<(), DocumentError> {
    let json = to_json(mapping)?;
    writer.write_all(json.as_bytes()).map_err(DocumentError::Write)?;
    writer.flush().map_err(DocumentError::Write)?;
    Ok(())
}
