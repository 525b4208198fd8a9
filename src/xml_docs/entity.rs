//! Reflection capability consumed by the descriptor factory
//!
//! The host introspection layer implements these traits for its own type and
//! property handles. [`TypeMetadata`] and [`PropertyMetadata`] are plain data
//! implementations for hosts that already have the values at hand.

use serde::{Deserialize, Serialize};

/// Location hints for the binary that owns a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyLocationHint {
    /// Filesystem path of the loaded binary, may be empty
    pub location: Option<String>,
    /// URI the binary was loaded from (e.g. `file:///opt/app/Lib.dll`), may be empty
    pub code_base: Option<String>,
}

impl AssemblyLocationHint {
    pub fn new(location: Option<String>, code_base: Option<String>) -> Self {
        Self { location, code_base }
    }

    /// Hint carrying only a filesystem path
    pub fn from_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            code_base: None,
        }
    }

    /// Hint carrying only a code base URI
    pub fn from_code_base(code_base: impl Into<String>) -> Self {
        Self {
            location: None,
            code_base: Some(code_base.into()),
        }
    }
}

/// A type as seen through the host's reflection layer
pub trait ReflectedType {
    /// Fully qualified name, nested types joined with `+` (e.g. `Ns.Outer+Inner`)
    fn full_name(&self) -> &str;

    /// Location hints of the binary declaring this type
    fn assembly_location(&self) -> AssemblyLocationHint;
}

/// A property as seen through the host's reflection layer
pub trait ReflectedProperty {
    /// Simple property name
    fn name(&self) -> &str;

    /// Type declaring this property
    fn declaring_type(&self) -> &dyn ReflectedType;
}

/// Plain type description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    pub full_name: String,
    pub assembly: AssemblyLocationHint,
}

impl TypeMetadata {
    pub fn new(full_name: impl Into<String>, assembly: AssemblyLocationHint) -> Self {
        Self {
            full_name: full_name.into(),
            assembly,
        }
    }
}

impl ReflectedType for TypeMetadata {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn assembly_location(&self) -> AssemblyLocationHint {
        self.assembly.clone()
    }
}

/// Plain property description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub name: String,
    pub declaring_type: TypeMetadata,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>, declaring_type: TypeMetadata) -> Self {
        Self {
            name: name.into(),
            declaring_type,
        }
    }
}

impl ReflectedProperty for PropertyMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> &dyn ReflectedType {
        &self.declaring_type
    }
}
