//! Documentation identifiers for types and properties
//!
//! Identifiers follow the documentation file convention: `T:` followed by the
//! full type name, or `P:` followed by the declaring type's full name and the
//! property name. Nested types are written with `.` instead of the runtime's `+`.

use std::fmt;

use super::constants::{
    NAMESPACE_SEPARATOR, NESTED_TYPE_SEPARATOR, PROPERTY_ID_PREFIX, TYPE_ID_PREFIX,
};
use super::entity::{ReflectedProperty, ReflectedType};

/// Key of a `<member name="...">` entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(String);

impl MemberId {
    /// Identifier of a type, e.g. `T:Ns.Outer.Inner`
    pub fn for_type(ty: &dyn ReflectedType) -> Self {
        MemberId(format!("{}{}", TYPE_ID_PREFIX, unnested_full_name(ty)))
    }

    /// Identifier of a property, e.g. `P:Ns.Outer.Inner.Name`
    pub fn for_property(property: &dyn ReflectedProperty) -> Self {
        MemberId(format!(
            "{}{}{}{}",
            PROPERTY_ID_PREFIX,
            unnested_full_name(property.declaring_type()),
            NAMESPACE_SEPARATOR,
            property.name()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn unnested_full_name(ty: &dyn ReflectedType) -> String {
    ty.full_name().replace(NESTED_TYPE_SEPARATOR, ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml_docs::entity::{AssemblyLocationHint, PropertyMetadata, TypeMetadata};

    fn type_named(full_name: &str) -> TypeMetadata {
        TypeMetadata::new(full_name, AssemblyLocationHint::default())
    }

    #[test]
    fn test_type_id() {
        let ty = type_named("Microsoft.AspNet.Razor.DocumentedTagHelper");
        assert_eq!(
            MemberId::for_type(&ty).as_str(),
            "T:Microsoft.AspNet.Razor.DocumentedTagHelper"
        );
    }

    #[test]
    fn test_nested_type_id_uses_dots() {
        let ty = type_named("Ns.Outer+Inner+Innermost");
        assert_eq!(MemberId::for_type(&ty).as_str(), "T:Ns.Outer.Inner.Innermost");
    }

    #[test]
    fn test_property_id() {
        let declaring_type = type_named("Ns.DocumentedTagHelper");
        let property = PropertyMetadata::new("SummaryProperty", declaring_type);
        assert_eq!(
            MemberId::for_property(&property).as_str(),
            "P:Ns.DocumentedTagHelper.SummaryProperty"
        );
    }

    #[test]
    fn test_property_id_on_nested_type() {
        let property = PropertyMetadata::new("Value", type_named("Ns.Outer+Inner"));
        assert_eq!(MemberId::for_property(&property).to_string(), "P:Ns.Outer.Inner.Value");
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        let lower = MemberId::for_type(&type_named("ns.tagHelper"));
        let upper = MemberId::for_type(&type_named("Ns.TagHelper"));
        assert_ne!(lower, upper);
    }
}
