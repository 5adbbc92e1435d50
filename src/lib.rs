//! Compiles a GameCube to N64 button mapping into the `mapGamecubeToN64()` function
//! of a controller adapter sketch, and saves/loads the mapping as JSON.

pub mod buttons;
pub mod codegen;
pub mod config;
pub mod constants;
pub mod document;
pub mod mapping;
pub mod session;

pub use buttons::{DestButton, SourceButton};
pub use document::DocumentError;
pub use mapping::{Mapping, Target};
pub use session::Session;
