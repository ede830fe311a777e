//! Photo codec
//!
//! Photos cross three boundaries: browser file input (data URI), HTTP JSON
//! bodies, and the relational store. The canonical form is bare base64 text
//! with no data-URI prefix; that is the only form ever persisted and the only
//! form on the wire. The display form re-adds a `data:image/...;base64,`
//! prefix and exists purely for rendering.
//!
//! All transforms here are pure, deterministic string functions.

/// Marker that identifies an inbound value as a data URI.
const DATA_URI_MARKER: &str = "data:image";

/// Prefix prepended to canonical text for rendering. The original upload's
/// media type is not stored, so display always advertises JPEG; browsers
/// sniff the real format from the payload.
pub const DISPLAY_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhotoFormatError {
    /// The value starts with `data:image` but has no comma, so there is no
    /// base64 payload to extract. Persisting it would store the prefix as if
    /// it were image data, so it is rejected instead of passed through.
    #[error("data URI is missing a base64 payload")]
    MissingBase64Payload,
}

/// Convert an inbound photo value to canonical storage form.
///
/// `None` and empty input are returned unchanged. A data URI yields
/// everything after its first comma. Any other value is already canonical
/// and passes through untouched.
pub fn to_canonical(input: Option<&str>) -> Result<Option<String>, PhotoFormatError> {
    let Some(value) = input else { return Ok(None) };
    if value.is_empty() {
        return Ok(Some(String::new()));
    }
    if value.starts_with(DATA_URI_MARKER) {
        return match value.split_once(',') {
            Some((_, payload)) => Ok(Some(payload.to_string())),
            None => Err(PhotoFormatError::MissingBase64Payload),
        };
    }
    Ok(Some(value.to_string()))
}

/// Convert a canonical photo value to display form.
///
/// `None` and empty input become the empty string. A value that already
/// carries a data-URI prefix is returned unchanged.
pub fn to_display(input: Option<&str>) -> String {
    match input {
        None => String::new(),
        Some("") => String::new(),
        Some(value) if value.starts_with(DATA_URI_MARKER) => value.to_string(),
        Some(value) => format!("{}{}", DISPLAY_PREFIX, value),
    }
}

/// Normalize a stored photo column to canonical text.
///
/// The photo column holds canonical base64 text, but rows written by earlier
/// tooling may surface as raw bytes. Either physical representation decodes
/// to the same canonical string; applying this to already-textual data is a
/// no-op.
pub fn normalize_stored(stored: Option<Vec<u8>>) -> Option<String> {
    stored.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
