//! Application services - Use case implementations

mod audio_writer;
mod conversion_service;
pub mod output_policy;

pub use audio_writer::AudioWriter;
pub use conversion_service::{
    ConversionOutcome, ConversionPlan, ConversionRequest, ConversionService,
};
pub use output_policy::{choose_encoding, default_file_name, resolve_output_path};
