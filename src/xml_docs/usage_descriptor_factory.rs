//! Factory for usage descriptors of types and properties
//!
//! For each request the owning binary is located, its documentation file is
//! searched beside it and in the culture directories, and the member's summary
//! and remarks are read. Nothing is cached between requests.

use super::assembly_location::resolve_assembly_path;
use super::culture::Culture;
use super::doc_file_finder::find_documentation_file;
use super::documentation_store::DocumentationStore;
use super::entity::{AssemblyLocationHint, ReflectedProperty, ReflectedType};
use super::error::DocsResult;
use super::member_id::MemberId;
use super::usage_descriptor::UsageDescriptor;

/// Creates [`UsageDescriptor`]s for a fixed culture
#[derive(Debug, Clone)]
pub struct UsageDescriptorFactory {
    culture: Culture,
}

impl UsageDescriptorFactory {
    pub fn new(culture: Culture) -> Self {
        Self { culture }
    }

    /// Factory for the culture of the current environment
    pub fn for_current_culture() -> Self {
        Self::new(Culture::current())
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Describe the given type
    ///
    /// Returns `Ok(None)` when the binary or its documentation file cannot be
    /// found, or when the file has no summary or remarks for the type. A
    /// documentation file that exists but cannot be parsed is an error.
    pub fn create_descriptor(&self, ty: &dyn ReflectedType) -> DocsResult<Option<UsageDescriptor>> {
        let id = MemberId::for_type(ty);
        self.create_descriptor_core(&ty.assembly_location(), &id)
    }

    /// Describe the given property, looked up in its declaring type's binary
    pub fn create_property_descriptor(
        &self,
        property: &dyn ReflectedProperty,
    ) -> DocsResult<Option<UsageDescriptor>> {
        let id = MemberId::for_property(property);
        self.create_descriptor_core(&property.declaring_type().assembly_location(), &id)
    }

    fn create_descriptor_core(
        &self,
        hint: &AssemblyLocationHint,
        id: &MemberId,
    ) -> DocsResult<Option<UsageDescriptor>> {
        let Some(assembly_path) = resolve_assembly_path(hint) else {
            return Ok(None);
        };
        let Some(documentation_file) = find_documentation_file(&assembly_path, &self.culture) else {
            return Ok(None);
        };

        let docs = DocumentationStore::load(&documentation_file)?;
        let summary = docs.get_summary(id.as_str()).map(str::to_string);
        let remarks = docs.get_remarks(id.as_str()).map(str::to_string);

        Ok(UsageDescriptor::new(summary, remarks))
    }
}

/// Describe a type using the current culture
pub fn create_descriptor(ty: &dyn ReflectedType) -> DocsResult<Option<UsageDescriptor>> {
    UsageDescriptorFactory::for_current_culture().create_descriptor(ty)
}

/// Describe a property using the current culture
pub fn create_property_descriptor(
    property: &dyn ReflectedProperty,
) -> DocsResult<Option<UsageDescriptor>> {
    UsageDescriptorFactory::for_current_culture().create_property_descriptor(property)
}

#[cfg(test)]
#[path = "usage_descriptor_factory_tests.rs"]
mod tests;
