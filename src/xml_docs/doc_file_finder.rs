//! Locating the documentation file that belongs to a binary
//!
//! `Lib.dll` is documented by `Lib.xml` in the same directory. When that file
//! is missing the culture subdirectories are searched, most specific culture
//! first: for `en-GB` that is `en-GB/Lib.xml`, then `en/Lib.xml`.

use std::path::{Path, PathBuf};

use super::constants::XML_EXTENSION;
use super::culture::Culture;

/// Find the documentation file for the binary at `assembly_path`
pub fn find_documentation_file(assembly_path: &Path, culture: &Culture) -> Option<PathBuf> {
    let assembly_directory = assembly_path.parent().unwrap_or_else(|| Path::new(""));
    let documentation_name = documentation_file_name(assembly_path)?;

    let side_by_side = assembly_directory.join(&documentation_name);
    if side_by_side.is_file() {
        return Some(side_by_side);
    }

    culture
        .fallback_chain()
        .into_iter()
        .map(|culture_name| assembly_directory.join(culture_name).join(&documentation_name))
        .find(|candidate| candidate.is_file())
}

/// `Lib.dll` -> `Lib.xml`
pub fn documentation_file_name(assembly_path: &Path) -> Option<PathBuf> {
    let file_name = assembly_path.file_name()?;
    Some(Path::new(file_name).with_extension(XML_EXTENSION))
}
