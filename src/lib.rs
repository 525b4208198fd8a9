//! Usage Docs Library
//!
//! This library resolves design-time usage documentation (summary and remarks)
//! for types and properties from the XML documentation files shipped next to
//! their binaries.

pub mod xml_docs;
#[cfg(test)]
mod test_utils;

pub use xml_docs::{UsageDescriptor, UsageDescriptorFactory};
