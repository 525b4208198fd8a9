//! Constants for the XML documentation file format and lookup rules

/// Element grouping all documented members below the document root
///
/// Example: `<doc><members>...</members></doc>`
pub const MEMBERS_ELEMENT: &str = "members";

/// Element describing one documented member
///
/// Example: `<member name="T:Namespace.TypeName">...</member>`
pub const MEMBER_ELEMENT: &str = "member";

/// Attribute of a member element holding its identifier
pub const NAME_ATTRIBUTE: &str = "name";

/// Element holding the summary text of a member
pub const SUMMARY_ELEMENT: &str = "summary";

/// Element holding the remarks text of a member
pub const REMARKS_ELEMENT: &str = "remarks";

/// Identifier prefix for types
pub const TYPE_ID_PREFIX: &str = "T:";

/// Identifier prefix for properties
pub const PROPERTY_ID_PREFIX: &str = "P:";

/// Separator the runtime uses between a nested type and its declaring type
///
/// Example: `Namespace.Outer+Inner`
pub const NESTED_TYPE_SEPARATOR: char = '+';

/// Separator used in documentation identifiers
pub const NAMESPACE_SEPARATOR: char = '.';

/// File extension of documentation files
pub const XML_EXTENSION: &str = "xml";

/// URI scheme of local file code bases
pub const FILE_SCHEME: &str = "file";

/// Longest path accepted before the location is considered unresolvable
#[cfg(windows)]
pub const MAX_PATH_LENGTH: usize = 260;

/// Longest path accepted before the location is considered unresolvable
#[cfg(not(windows))]
pub const MAX_PATH_LENGTH: usize = 4096;

/// Longest single path component accepted
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;

// Environment variables consulted for the current culture, in priority order

/// Explicit culture override for this tool
pub const CULTURE_ENV_VAR: &str = "USAGE_DOCS_CULTURE";

/// POSIX locale variables
pub const POSIX_LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];
