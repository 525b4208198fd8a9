//! Test utilities shared across the codebase

use std::fs;
use std::path::{Path, PathBuf};

use crate::xml_docs::entity::{AssemblyLocationHint, PropertyMetadata, TypeMetadata};

/// Full name of the documented fixture type
pub const DOCUMENTED_TYPE_NAME: &str =
    "Microsoft.AspNet.Razor.Runtime.TagHelpers.DocumentedTagHelper";

/// Full name of a fixture type that has no documentation entry
pub const UNDOCUMENTED_TYPE_NAME: &str =
    "Microsoft.AspNet.Razor.Runtime.TagHelpers.SingleAttributeTagHelper";

/// Documentation file content for [`DOCUMENTED_TYPE_NAME`]
///
/// Every text is prefixed with `prefix` so localized copies can be told apart.
pub fn documented_tag_helper_xml(prefix: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>Microsoft.AspNet.Razor.Runtime.Test</name>
    </assembly>
    <members>
        <member name="T:{ty}">
            <summary>
            {prefix}The summary for the type.
            </summary>
            <remarks>
            {prefix}The remarks for the type.
            </remarks>
        </member>
        <member name="P:{ty}.SummaryProperty">
            <summary>
            {prefix}The summary for a property.
            </summary>
        </member>
        <member name="P:{ty}.RemarksProperty">
            <remarks>
            {prefix}The remarks for a property.
            </remarks>
        </member>
        <member name="P:{ty}.RemarksAndSummaryProperty">
            <summary>
            {prefix}The summary for a property with remarks.
            </summary>
            <remarks>
            {prefix}The remarks for a property with summary.
            </remarks>
        </member>
        <member name="P:{ty}.UndocumentedProperty">
        </member>
    </members>
</doc>
"#,
        ty = DOCUMENTED_TYPE_NAME,
        prefix = prefix
    )
}

/// Write `content` to `dir/relative_path`, creating parent directories
pub fn write_file(dir: &Path, relative_path: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// The documented fixture type owned by a binary with the given hints
pub fn documented_type(location: Option<String>, code_base: Option<String>) -> TypeMetadata {
    TypeMetadata::new(DOCUMENTED_TYPE_NAME, AssemblyLocationHint::new(location, code_base))
}

/// A property of the documented fixture type
pub fn documented_property(
    name: &str,
    location: Option<String>,
    code_base: Option<String>,
) -> PropertyMetadata {
    PropertyMetadata::new(name, documented_type(location, code_base))
}

/// `file://` URI for `path`
pub fn code_base_for(path: &Path) -> String {
    url::Url::from_file_path(path)
        .expect("Fixture paths are absolute")
        .to_string()
}
