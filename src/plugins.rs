//! Plugin selection: picking the right configuration for a requested format.
//!
//! Several configurations may be registered at once, each targeting one
//! documentation type. The registry runs every enabled plugin supporting the
//! requested type against a fresh context builder, and falls back to an
//! all-defaults [`Docket`] when nothing was registered at all.

use crate::context::{DocumentationContext, DocumentationContextBuilder};
use crate::docket::Docket;
use crate::error::{Error, Result};
use crate::model::DocumentationType;
use log::{debug, warn};

/// A source of documentation configuration selectable by documentation type.
pub trait DocumentationPlugin {
    /// The documentation type this plugin targets
    fn documentation_type(&self) -> &DocumentationType;

    /// Whether this plugin participates in documentation generation
    fn is_enabled(&self) -> bool;

    /// Whether this plugin is the configuration for the queried type
    fn supports(&self, delimiter: &DocumentationType) -> bool {
        self.documentation_type() == delimiter
    }

    /// Resolve this plugin's configuration through the given builder
    fn configure(&mut self, builder: DocumentationContextBuilder) -> DocumentationContext;
}

/// Registry of configuration plugins, one or more per documentation type.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn DocumentationPlugin>>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: Box<dyn DocumentationPlugin>) {
        debug!(
            "Registering documentation plugin for '{}'",
            plugin.documentation_type()
        );
        self.plugins.push(plugin);
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Resolve every enabled plugin supporting the requested type.
    ///
    /// An empty registry resolves a default [`Docket`] for the requested type
    /// instead, so an application without explicit configuration still gets a
    /// documented surface. A non-empty registry where nothing matches is an
    /// error.
    pub fn configure_all(
        &mut self,
        delimiter: &DocumentationType,
    ) -> Result<Vec<DocumentationContext>> {
        if self.plugins.is_empty() {
            warn!(
                "No documentation plugins registered, falling back to defaults for '{}'",
                delimiter
            );
            let mut fallback = Docket::new(delimiter.clone());
            let context = DocumentationPlugin::configure(
                &mut fallback,
                DocumentationContextBuilder::new(delimiter.clone()),
            );
            return Ok(vec![context]);
        }

        let mut contexts = Vec::new();
        for plugin in &mut self.plugins {
            if !plugin.is_enabled() {
                debug!(
                    "Skipping disabled plugin for '{}'",
                    plugin.documentation_type()
                );
                continue;
            }
            if plugin.supports(delimiter) {
                contexts.push(plugin.configure(DocumentationContextBuilder::new(
                    delimiter.clone(),
                )));
            }
        }

        if contexts.is_empty() {
            return Err(Error::NoConfigurationFound(delimiter.clone()));
        }
        Ok(contexts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn registry_with(dockets: Vec<Docket>) -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        for docket in dockets {
            registry.register(Box::new(docket));
        }
        registry
    }

    #[test]
    fn test_selects_matching_plugin() {
        let mut registry = registry_with(vec![
            Docket::new(DocumentationType::swagger_12()).group_name("legacy"),
            Docket::new(DocumentationType::swagger_2()).group_name("current"),
        ]);

        let contexts = registry
            .configure_all(&DocumentationType::swagger_2())
            .unwrap();

        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].group_name(), "current");
    }

    #[test]
    fn test_multiple_groups_for_one_type() {
        let mut registry = registry_with(vec![
            Docket::new(DocumentationType::swagger_2()).group_name("billing"),
            Docket::new(DocumentationType::swagger_2()).group_name("shipping"),
        ]);

        let contexts = registry
            .configure_all(&DocumentationType::swagger_2())
            .unwrap();

        let mut names: Vec<&str> = contexts.iter().map(|c| c.group_name()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["billing", "shipping"]);
    }

    #[test]
    fn test_disabled_plugin_is_skipped() {
        let mut registry = registry_with(vec![
            Docket::new(DocumentationType::swagger_2()).enable(false),
        ]);

        let err = registry
            .configure_all(&DocumentationType::swagger_2())
            .unwrap_err();
        match err {
            Error::NoConfigurationFound(dt) => {
                assert_eq!(dt, DocumentationType::swagger_2());
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_no_supporting_plugin_is_an_error() {
        let mut registry = registry_with(vec![Docket::new(DocumentationType::swagger_12())]);

        assert!(registry
            .configure_all(&DocumentationType::openapi_30())
            .is_err());
    }

    #[test]
    fn test_empty_registry_falls_back_to_default_docket() {
        let mut registry = PluginRegistry::new();
        let contexts = registry
            .configure_all(&DocumentationType::openapi_30())
            .unwrap();

        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].group_name(), "default");
        assert_eq!(
            contexts[0].documentation_type(),
            &DocumentationType::openapi_30()
        );
    }

    #[test]
    fn test_registry_len() {
        let registry = registry_with(vec![
            Docket::new(DocumentationType::swagger_2()),
            Docket::new(DocumentationType::openapi_30()),
        ]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
