//! Name-keyed merging of entity collections.
//!
//! Scanners frequently see the same logical entity declared twice, e.g. an
//! operation parameter declared both on a handler and on its enclosing type.
//! [`merge_by_name`] collapses two such collections into one, with the
//! destination side taking precedence on every name collision.

use crate::model::Parameter;
use log::debug;
use std::collections::HashSet;

/// An entity identified by a string name within a merge operation.
pub trait Named {
    /// The merge key
    fn name(&self) -> &str;
}

impl Named for Parameter {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Merge two collections of named entities, deduplicated by name.
///
/// Every entity of `destination` survives. An entity of `source` survives only
/// when no destination entity carries the same name; on a collision the source
/// entity is dropped whole rather than merged field by field. If a single
/// input contains duplicate names, the first occurrence wins.
///
/// The result is a set: callers must not rely on the order of the returned
/// entities.
pub fn merge_by_name<T: Named + Clone>(destination: &[T], source: &[T]) -> Vec<T> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(destination.len() + source.len());

    for entity in destination {
        if seen.insert(entity.name()) {
            merged.push(entity.clone());
        }
    }

    for entity in source {
        if seen.contains(entity.name()) {
            debug!("Dropping source entity '{}' shadowed by destination", entity.name());
            continue;
        }
        seen.insert(entity.name());
        merged.push(entity.clone());
    }

    merged
}
