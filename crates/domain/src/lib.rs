//! Domain layer for text2speech
//!
//! Closed value types for the language tag, voice gender and audio encoding,
//! plus the voice selection table. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
