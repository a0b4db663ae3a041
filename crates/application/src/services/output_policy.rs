//! Output policy - audio encoding and output file naming
//!
//! Two independent decisions:
//! - which encoding to request, given the format flag and an optional
//!   explicit output path
//! - which file name to use when no output path was given

use std::path::{Path, PathBuf};

use domain::{AudioEncoding, VoiceGender};
use md5::{Digest, Md5};
use tracing::warn;

/// Number of hex digits of the digest used for default file names
pub const DEFAULT_NAME_HEX_LEN: usize = 12;

/// Extension of the final path component, without the dot
///
/// Unlike [`Path::extension`], a bare dot-name such as `.wav` yields `wav`.
fn extension_of(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .rsplit_once('.')
        .map(|(_, ext)| ext)
}

/// Resolve the encoding to request
///
/// An explicit output path whose extension is `mp3` or `wav`
/// (case-insensitive) decides the encoding. Any other extension, or no
/// output path at all, falls back to `default`, which comes from the
/// `-mp3`/`-wav` flags.
#[must_use]
pub fn choose_encoding(default: AudioEncoding, output: Option<&Path>) -> AudioEncoding {
    output
        .and_then(extension_of)
        .and_then(AudioEncoding::from_extension)
        .unwrap_or(default)
}

/// Deterministic file name for `text` spoken with `gender`
///
/// The first 12 hex digits of MD5(text ++ gender name), plus the extension
/// implied by `encoding`.
#[must_use]
pub fn default_file_name(text: &str, gender: VoiceGender, encoding: AudioEncoding) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    hasher.update(gender.as_str().as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!(
        "{}.{}",
        &digest[..DEFAULT_NAME_HEX_LEN],
        encoding.extension()
    )
}

/// Resolve the path the audio is written to
///
/// An explicit path is used verbatim. A warning is logged when its
/// extension does not name `encoding`, since the file contents will not
/// match what the name suggests.
#[must_use]
pub fn resolve_output_path(
    output: Option<&Path>,
    text: &str,
    gender: VoiceGender,
    encoding: AudioEncoding,
) -> PathBuf {
    match output {
        Some(path) => {
            if extension_of(path).and_then(AudioEncoding::from_extension) != Some(encoding) {
                warn!(
                    path = %path.display(),
                    encoding = %encoding,
                    "Output file extension does not match the audio encoding"
                );
            }
            path.to_path_buf()
        },
        None => PathBuf::from(default_file_name(text, gender, encoding)),
    }
}
