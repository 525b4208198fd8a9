//! XML documentation lookup
//!
//! This module resolves the summary and remarks of a type or property from the
//! XML documentation file that ships next to the binary declaring it.
//!
//! The lookup runs in four steps:
//! 1. Build the member identifier (`T:Ns.Type` or `P:Ns.Type.Property`)
//! 2. Resolve the binary path from its location or code base
//! 3. Find `<Binary>.xml` beside it or in a culture subdirectory
//! 4. Load the file and read the member's summary and remarks

pub mod assembly_location;
pub mod constants;
pub mod culture;
pub mod doc_file_finder;
pub mod documentation_store;
pub mod entity;
pub mod error;
pub mod member_id;
pub mod usage_descriptor;
pub mod usage_descriptor_factory;

pub use culture::Culture;
pub use documentation_store::{DocumentationStore, MemberDocs};
pub use entity::{
    AssemblyLocationHint, PropertyMetadata, ReflectedProperty, ReflectedType, TypeMetadata,
};
pub use error::{DocsError, DocsResult};
pub use member_id::MemberId;
pub use usage_descriptor::UsageDescriptor;
pub use usage_descriptor_factory::{
    UsageDescriptorFactory, create_descriptor, create_property_descriptor,
};
