//! Resolution of a binary's filesystem path from its location hints
//!
//! The primary location wins when it is not blank. Otherwise the code base URI
//! is turned into a local path. Blank hints, invalid characters and overlong
//! paths all resolve to `None`; callers treat that as "no documentation".

use std::path::{Path, PathBuf};

use url::Url;

use super::constants::{FILE_SCHEME, MAX_PATH_COMPONENT_LENGTH, MAX_PATH_LENGTH};
use super::entity::AssemblyLocationHint;

/// Resolve the path of the binary described by `hint`
pub fn resolve_assembly_path(hint: &AssemblyLocationHint) -> Option<PathBuf> {
    let location = match non_blank(hint.location.as_deref()) {
        Some(location) => location.to_string(),
        None => {
            let code_base = non_blank(hint.code_base.as_deref())?;
            if has_invalid_path_chars(code_base) {
                return None;
            }
            code_base_to_path(code_base)?
        }
    };

    if location.trim().is_empty() || has_invalid_path_chars(&location) {
        return None;
    }

    let path = PathBuf::from(location);
    if exceeds_path_limits(&path) {
        return None;
    }

    Some(path)
}

/// Convert a code base URI into a local path string
///
/// `file:` URIs go through [`Url::to_file_path`]; anything else uses the
/// percent-decoded URI path, which strips the scheme and authority.
pub fn code_base_to_path(code_base: &str) -> Option<String> {
    match Url::parse(code_base) {
        // `C:\Libs\Lib.dll` parses with `c` as the scheme
        Ok(url) if url.scheme().len() == 1 => decode(code_base),
        Ok(url) if url.scheme() == FILE_SCHEME => match url.to_file_path() {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(()) => decode(url.path()),
        },
        Ok(url) => decode(url.path()),
        Err(_) => decode(code_base),
    }
}

fn decode(value: &str) -> Option<String> {
    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Whether `value` contains characters that can never appear in a path
pub fn has_invalid_path_chars(value: &str) -> bool {
    value.chars().any(is_invalid_path_char)
}

#[cfg(windows)]
fn is_invalid_path_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|') || (c as u32) < 32
}

#[cfg(not(windows))]
fn is_invalid_path_char(c: char) -> bool {
    c == '\0'
}

fn exceeds_path_limits(path: &Path) -> bool {
    path.as_os_str().len() > MAX_PATH_LENGTH
        || path
            .components()
            .any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH)
}
