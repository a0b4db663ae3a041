//! text2speech command-line front-end
//!
//! Parses arguments, resolves the input text, loads configuration and runs
//! one conversion.

pub mod cli;
pub mod input;
pub mod settings;

use std::io::Write;
use std::sync::Arc;

use ai_speech::GoogleSpeechProvider;
use anyhow::Context;
use application::{ApplicationError, ConversionPlan, ConversionRequest, ConversionService};
use clap::CommandFactory;

pub use cli::{Cli, InputSource};

/// Exit status for argument and input problems
pub const USAGE_EXIT_CODE: u8 = 2;

/// Exit status for every other failure
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Map a failed run to the process exit status
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ApplicationError>() {
        Some(app_err) if app_err.is_usage_error() => USAGE_EXIT_CODE,
        _ => FAILURE_EXIT_CODE,
    }
}

/// Run one invocation, writing user-facing output to `out`
///
/// Without `-text` or `-file` the help text is written and an
/// `InvalidArguments` error is returned.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let Some(source) = cli.input_source() else {
        writeln!(out, "{}", Cli::command().render_help())?;
        return Err(ApplicationError::InvalidArguments(
            "either -text or -file is required".to_string(),
        )
        .into());
    };

    let text = input::read_input(source).await?;

    let mut request = ConversionRequest::new(text)
        .with_gender(cli.gender)
        .with_encoding(cli.flag_encoding());
    if let Some(output) = cli.output {
        request = request.with_output(output);
    }

    let plan = ConversionPlan::for_request(&request)?;

    if cli.dry_run {
        writeln!(out, "Language: {}", plan.voice.language)?;
        writeln!(out, "Voice: {} ({})", plan.voice.name, plan.voice.gender)?;
        writeln!(out, "Encoding: {}", plan.encoding)?;
        writeln!(out, "Output: {}", plan.output_path.display())?;
        return Ok(());
    }

    let config = settings::load_speech_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let provider = GoogleSpeechProvider::new(config)
        .context("Failed to initialize the Google Cloud Text-to-Speech client")?;
    let service = ConversionService::new(Arc::new(provider));

    let outcome = service.convert(&request).await?;

    writeln!(
        out,
        "Audio content written to file \"{}\"",
        outcome.output_path().display()
    )?;

    Ok(())
}
