//! Command-line arguments
//!
//! Accepts the historical single-dash long flags (`-text`, `-wav`, ...)
//! alongside the usual `--text` spelling.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser};
use domain::{AudioEncoding, VoiceGender};

/// Long options that take a value and may be spelled with one dash
const LEGACY_VALUE_FLAGS: [&str; 4] = ["text", "file", "gender", "output"];

/// Long switches that may be spelled with one dash
const LEGACY_SWITCHES: [&str; 2] = ["wav", "mp3"];

/// Double-dash-only options that take a value
const VALUE_FLAGS: [&str; 1] = ["config"];

/// text2speech CLI
#[derive(Debug, Parser)]
#[command(name = "text2speech")]
#[command(author, version, about = "This program converts text to mp3/wav voice files.", long_about = None)]
pub struct Cli {
    /// Text string to speech
    #[arg(long, value_name = "TEXT", conflicts_with = "file", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// File contents to speech
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Voice gender
    #[arg(long, default_value = "FEMALE", ignore_case = true, value_parser = gender_parser())]
    pub gender: VoiceGender,

    /// Output mp3/wav filename (derived from the text when omitted)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Use wav file format
    #[arg(long, overrides_with = "mp3")]
    pub wav: bool,

    /// Use mp3 file format (default)
    #[arg(long, overrides_with = "wav")]
    pub mp3: bool,

    /// Show the voice, encoding and output file without calling the service
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file (default: ./text2speech.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Given inline with `-text`
    Text(String),
    /// Read from the file given with `-file`
    File(PathBuf),
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Parse the given arguments, accepting single-dash long flags
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(args))
    }

    /// Encoding implied by `-mp3`/`-wav`; the last one given wins
    pub const fn flag_encoding(&self) -> AudioEncoding {
        AudioEncoding::from_compressed(!self.wav)
    }

    /// The input source, if one was given
    pub fn input_source(&self) -> Option<InputSource> {
        match (&self.text, &self.file) {
            (Some(text), _) => Some(InputSource::Text(text.clone())),
            (None, Some(path)) => Some(InputSource::File(path.clone())),
            (None, None) => None,
        }
    }
}

fn gender_parser() -> impl TypedValueParser<Value = VoiceGender> {
    PossibleValuesParser::new(VoiceGender::all().map(|g| g.as_str()))
        .try_map(|s| s.parse::<VoiceGender>())
}

/// Rewrite `-text` style flags to `--text` so clap understands them
///
/// Values following a value-taking option are passed through untouched,
/// so `-text -wav` speaks the word "-wav". Everything after `--` is left
/// alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        if index == 0 || passthrough || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(token) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if token == "--" {
            passthrough = true;
        } else if let Some(name) = token.strip_prefix("--") {
            expect_value = LEGACY_VALUE_FLAGS.contains(&name) || VALUE_FLAGS.contains(&name);
        } else if let Some(rest) = token.strip_prefix('-') {
            let (name, inline_value) = match rest.split_once('=') {
                Some((name, _)) => (name, true),
                None => (rest, false),
            };

            let is_value_flag = LEGACY_VALUE_FLAGS.contains(&name);
            if is_value_flag || (LEGACY_SWITCHES.contains(&name) && !inline_value) {
                expect_value = is_value_flag && !inline_value;
                normalized.push(OsString::from(format!("-{token}")));
                continue;
            }
        }

        normalized.push(arg);
    }

    normalized
}
