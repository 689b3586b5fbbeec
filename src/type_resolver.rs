//! Type resolver - resolves type name tokens to structured type handles.
//!
//! The configuration layer deals in names: substitution rules and ignorable
//! parameter types are registered long before any scanned type definitions
//! exist. The resolver closes that gap once scanning has run, turning each
//! name into the [`ResolvedType`] handle the rest of the pipeline works with.

use crate::alternate::ResolvedType;
use log::debug;
use std::collections::HashMap;

/// Resolves type name tokens against the definitions discovered by scanning.
pub struct TypeResolver {
    /// Known type definitions indexed by name
    definitions: HashMap<String, ResolvedType>,
}

impl TypeResolver {
    /// Create a resolver with no known definitions
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Create a resolver pre-loaded with known definitions
    pub fn with_definitions(definitions: impl IntoIterator<Item = ResolvedType>) -> Self {
        let mut resolver = Self::new();
        for definition in definitions {
            resolver.register(definition);
        }
        resolver
    }

    /// Register a discovered type definition
    pub fn register(&mut self, definition: ResolvedType) {
        debug!("Registering type definition: {}", definition);
        self.definitions.insert(definition.name.clone(), definition);
    }

    /// Resolve a type name to a handle.
    ///
    /// Unknown names resolve to a plain non-generic handle rather than failing:
    /// a name the scanner never saw is still a documentable opaque type.
    pub fn resolve(&self, name: &str) -> ResolvedType {
        match self.definitions.get(name) {
            Some(definition) => definition.clone(),
            None => {
                debug!("No definition for '{}', resolving as opaque type", name);
                ResolvedType::named(name)
            }
        }
    }

    /// Resolve a parameterized form of a container type with the given arguments
    pub fn resolve_parameterized(
        &self,
        container: &str,
        type_params: Vec<ResolvedType>,
    ) -> ResolvedType {
        let base = self.resolve(container);
        ResolvedType::parameterized(base.name, type_params)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether any definitions are registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new()
    }
}
