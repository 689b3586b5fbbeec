//! Alternate type rules: policies that render one model type as another.
//!
//! Rules cannot be resolved when they are registered, because concrete type
//! handles only exist once the pipeline's [`TypeResolver`] has been built from
//! the scanned sources. Registration therefore stores a [`PendingRule`]
//! descriptor which is resolved later, once per pipeline run.

use crate::type_resolver::TypeResolver;
use log::debug;
use serde::{Deserialize, Serialize};

/// Name of the wildcard placeholder matching any type
const WILDCARD: &str = "*";

/// A resolved, possibly parameterized type handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    /// The base type name (e.g., "String", "User", "Page")
    pub name: String,
    /// Type parameters, empty for non-generic types
    pub type_params: Vec<ResolvedType>,
}

impl ResolvedType {
    /// Create a handle for a non-generic type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
        }
    }

    /// Create a handle for a parameterized type
    pub fn parameterized(name: impl Into<String>, type_params: Vec<ResolvedType>) -> Self {
        Self {
            name: name.into(),
            type_params,
        }
    }

    /// The placeholder handle matching any type
    pub fn wildcard() -> Self {
        Self::named(WILDCARD)
    }

    /// Whether this handle is the wildcard placeholder
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }

    /// Whether `other` is covered by this handle, treating wildcards as
    /// matching any type
    fn covers(&self, other: &ResolvedType) -> bool {
        if self.is_wildcard() {
            return true;
        }
        if self.name != other.name || self.type_params.len() != other.type_params.len() {
            return false;
        }
        self.type_params
            .iter()
            .zip(&other.type_params)
            .all(|(own, theirs)| own.covers(theirs))
    }
}

impl std::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.type_params.is_empty() {
            return write!(f, "{}", self.name);
        }
        let params: Vec<String> = self.type_params.iter().map(|p| p.to_string()).collect();
        write!(f, "{}<{}>", self.name, params.join(", "))
    }
}

/// A policy stating that `original` should be documented as `alternate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateTypeRule {
    /// The type as it appears in the scanned model
    pub original: ResolvedType,
    /// The type to document instead
    pub alternate: ResolvedType,
}

impl AlternateTypeRule {
    /// Create a rule replacing `original` with `alternate`
    pub fn new(original: ResolvedType, alternate: ResolvedType) -> Self {
        Self {
            original,
            alternate,
        }
    }

    /// Whether this rule applies to the given type
    pub fn applies_to(&self, candidate: &ResolvedType) -> bool {
        self.original.covers(candidate)
    }

    /// The replacement for `candidate`, or `None` when the rule does not apply
    pub fn alternate_for(&self, candidate: &ResolvedType) -> Option<ResolvedType> {
        if self.applies_to(candidate) {
            Some(self.alternate.clone())
        } else {
            None
        }
    }
}

/// A substitution rule registered before type resolution is possible.
///
/// Resolved into an [`AlternateTypeRule`] once a [`TypeResolver`] exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRule {
    /// Replace one named type with another
    DirectSubstitution {
        /// Name of the type to replace
        from: String,
        /// Name of the replacement type
        to: String,
    },
    /// Collapse a generic container down to its unparameterized shape,
    /// e.g. document `Page<T>` as the wildcard for any `T`
    GenericUnwrap {
        /// Name of the generic container type
        container: String,
    },
    /// A rule supplied fully formed at registration time
    Fixed(AlternateTypeRule),
}

impl PendingRule {
    /// Resolve this descriptor into a concrete rule
    pub fn resolve(&self, resolver: &TypeResolver) -> AlternateTypeRule {
        match self {
            PendingRule::DirectSubstitution { from, to } => {
                let rule =
                    AlternateTypeRule::new(resolver.resolve(from), resolver.resolve(to));
                debug!("Resolved substitution {} -> {}", rule.original, rule.alternate);
                rule
            }
            PendingRule::GenericUnwrap { container } => {
                let original = resolver
                    .resolve_parameterized(container, vec![ResolvedType::wildcard()]);
                debug!("Resolved generic unwrap for {}", original);
                AlternateTypeRule::new(original, ResolvedType::wildcard())
            }
            PendingRule::Fixed(rule) => rule.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direct_rule_applies_by_name() {
        let rule = AlternateTypeRule::new(
            ResolvedType::named("NaiveDate"),
            ResolvedType::named("String"),
        );

        assert!(rule.applies_to(&ResolvedType::named("NaiveDate")));
        assert!(!rule.applies_to(&ResolvedType::named("NaiveDateTime")));
        assert_eq!(
            rule.alternate_for(&ResolvedType::named("NaiveDate")),
            Some(ResolvedType::named("String"))
        );
        assert_eq!(rule.alternate_for(&ResolvedType::named("Uuid")), None);
    }

    #[test]
    fn test_wildcard_param_covers_any_argument() {
        let rule = AlternateTypeRule::new(
            ResolvedType::parameterized("Page", vec![ResolvedType::wildcard()]),
            ResolvedType::wildcard(),
        );

        let page_of_user =
            ResolvedType::parameterized("Page", vec![ResolvedType::named("User")]);
        let page_of_pages = ResolvedType::parameterized(
            "Page",
            vec![ResolvedType::parameterized(
                "Page",
                vec![ResolvedType::named("User")],
            )],
        );

        assert!(rule.applies_to(&page_of_user));
        assert!(rule.applies_to(&page_of_pages));
        assert!(!rule.applies_to(&ResolvedType::named("Page")));
        assert!(!rule.applies_to(&ResolvedType::parameterized(
            "Envelope",
            vec![ResolvedType::named("User")]
        )));
    }

    #[test]
    fn test_arity_must_match() {
        let rule = AlternateTypeRule::new(
            ResolvedType::parameterized("Map", vec![ResolvedType::wildcard()]),
            ResolvedType::wildcard(),
        );

        let two_params = ResolvedType::parameterized(
            "Map",
            vec![ResolvedType::named("String"), ResolvedType::named("User")],
        );
        assert!(!rule.applies_to(&two_params));
    }

    #[test]
    fn test_display_of_parameterized_type() {
        let t = ResolvedType::parameterized(
            "Page",
            vec![ResolvedType::named("User"), ResolvedType::wildcard()],
        );
        assert_eq!(t.to_string(), "Page<User, *>");
    }
}
