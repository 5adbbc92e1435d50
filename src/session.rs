use std::io::{Read, Write};

use tracing::debug;

use crate::{
    buttons::SourceButton,
    codegen,
    document::{self, DocumentError},
    mapping::{Mapping, Target},
};

/// Owns the mapping one user is editing.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mapping: Mapping,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mapping: Mapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn get(&self, source: SourceButton) -> Target {
        self.mapping.get(source)
    }

    pub fn set(&mut self, source: SourceButton, target: impl Into<Target>) {
        self.mapping.set(source, target);
    }

    pub fn reset(&mut self) {
        self.mapping.reset();
    }

    pub fn generate(&self) -> String {
        codegen::generate(&self.mapping)
    }

    /// Replace the whole mapping with the document read from `reader`.
    /// On error the current mapping is left as it was.
    pub fn load(&mut self, reader: impl Read) -> Result<(), DocumentError> {
        let mapping = document::read_from(reader)?;
        debug!("Loaded mapping document");
        self.mapping = mapping;
        Ok(())
    }

    pub fn save(&self, writer: impl Write) -> Result<(), DocumentError> {
        document::write_to(writer, &self.mapping)
    }
}
