//! The primary configuration interface of the crate.
//!
//! A [`Docket`] accumulates documentation policy through chained setters and
//! resolves it into a [`DocumentationContext`] via [`Docket::configure`].
//! Setters never validate their input; anything questionable surfaces later,
//! when the pipeline interprets the resolved context.
//!
//! Setter semantics differ by axis and callers depend on both behaviors:
//!
//! | Axis | Semantics |
//! |------|-----------|
//! | `group_name`, `api_info`, `path_provider`, `authorization_context`, `authorization_types`, `pattern_matcher`, the three orderings, `use_default_response_messages`, `enable` | replace |
//! | `include_patterns` | replace |
//! | `exclude_annotations`, `ignored_parameter_types`, `produces`, `consumes`, `protocols`, `alternate_type_rules`, `direct_model_substitute`, `generic_model_substitutes` | append |
//! | `global_response_message` | replaces the entry for that method only |
//!
//! A docket may be built by one thread and then shared with a concurrent
//! startup sequence. Only the first-resolution race is guarded (default
//! filling runs exactly once); interleaving setter calls with `configure` is
//! the caller's responsibility.

use crate::alternate::{AlternateTypeRule, PendingRule};
use crate::context::{Comparator, DocumentationContext, DocumentationContextBuilder};
use crate::defaults;
use crate::matcher::PathMatcher;
use crate::model::{
    ApiDescription, ApiInfo, ApiListingReference, AuthorizationContext, AuthorizationType,
    DocumentationType, HttpMethod, Operation, ResponseMessage,
};
use crate::paths::PathProvider;
use crate::plugins::DocumentationPlugin;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Fluent builder accumulating the configuration of one documentation group.
pub struct Docket {
    documentation_type: DocumentationType,
    enabled: bool,
    initialized: AtomicBool,
    group_name: Option<String>,
    api_info: Option<ApiInfo>,
    path_provider: Option<Arc<dyn PathProvider>>,
    authorization_context: Option<AuthorizationContext>,
    authorization_types: Vec<AuthorizationType>,
    apply_default_response_messages: bool,
    response_messages: HashMap<HttpMethod, Vec<ResponseMessage>>,
    pattern_matcher: Option<Arc<dyn PathMatcher>>,
    pending_rules: Vec<PendingRule>,
    include_patterns: Vec<String>,
    exclude_annotations: Vec<String>,
    ignored_parameter_types: HashSet<String>,
    protocols: HashSet<String>,
    produces: HashSet<String>,
    consumes: HashSet<String>,
    listing_reference_ordering: Option<Comparator<ApiListingReference>>,
    api_description_ordering: Option<Comparator<ApiDescription>>,
    operation_ordering: Option<Comparator<Operation>>,
}

impl Docket {
    /// Create a docket targeting the given documentation type
    pub fn new(documentation_type: DocumentationType) -> Self {
        Self {
            documentation_type,
            enabled: true,
            initialized: AtomicBool::new(false),
            group_name: None,
            api_info: None,
            path_provider: None,
            authorization_context: None,
            authorization_types: Vec::new(),
            apply_default_response_messages: true,
            response_messages: HashMap::new(),
            pattern_matcher: None,
            pending_rules: Vec::new(),
            include_patterns: vec![defaults::MATCH_ALL_PATTERN.to_string()],
            exclude_annotations: Vec::new(),
            ignored_parameter_types: HashSet::new(),
            protocols: HashSet::new(),
            produces: HashSet::new(),
            consumes: HashSet::new(),
            listing_reference_ordering: None,
            api_description_ordering: None,
            operation_ordering: None,
        }
    }

    /// Sets the api meta information included in the generated resource listing
    pub fn api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = Some(api_info);
        self
    }

    /// Sets the unique name of this group. When several dockets are
    /// registered each must carry a distinct group name. Defaults to
    /// "default" at resolution time.
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Sets the strategy determining the documented URLs. Relative URLs are
    /// generated when no provider is supplied.
    pub fn path_provider(mut self, path_provider: impl PathProvider + 'static) -> Self {
        self.path_provider = Some(Arc::new(path_provider));
        self
    }

    /// Sets the global authorization schemes applicable to the api operations
    pub fn authorization_types(mut self, authorization_types: Vec<AuthorizationType>) -> Self {
        self.authorization_types = authorization_types;
        self
    }

    /// Scopes which operations the global authorization schemes apply to
    pub fn authorization_context(mut self, authorization_context: AuthorizationContext) -> Self {
        self.authorization_context = Some(authorization_context);
        self
    }

    /// Adds annotations whose presence excludes a mapping from the generated
    /// document. Repeated calls accumulate.
    pub fn exclude_annotations<I, S>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_annotations
            .extend(annotations.into_iter().map(Into::into));
        self
    }

    /// Sets the patterns selecting which mappings are documented. Patterns are
    /// interpreted by the active matcher; the default matcher treats them as
    /// regular expressions. Repeated calls replace the prior list. When never
    /// called, the single pattern ".*?" includes every mapping.
    pub fn include_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the response messages for one HTTP method. Repeated calls for
    /// the same method replace that method's messages; operation-level
    /// overrides are out of this builder's hands.
    pub fn global_response_message(
        mut self,
        method: HttpMethod,
        response_messages: Vec<ResponseMessage>,
    ) -> Self {
        self.response_messages.insert(method, response_messages);
        self
    }

    /// Adds parameter types that never appear in the generated document.
    /// Repeated calls accumulate on top of the built-in ignorable set.
    pub fn ignored_parameter_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_parameter_types
            .extend(types.into_iter().map(Into::into));
        self
    }

    /// Adds produced media types. Repeated calls accumulate.
    pub fn produces<I, S>(mut self, produces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces.extend(produces.into_iter().map(Into::into));
        self
    }

    /// Adds consumed media types. Repeated calls accumulate.
    pub fn consumes<I, S>(mut self, consumes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consumes.extend(consumes.into_iter().map(Into::into));
        self
    }

    /// Adds supported protocols. Repeated calls accumulate.
    pub fn protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protocols.extend(protocols.into_iter().map(Into::into));
        self
    }

    /// Adds fully formed substitution rules. Repeated calls accumulate.
    pub fn alternate_type_rules(mut self, rules: Vec<AlternateTypeRule>) -> Self {
        self.pending_rules
            .extend(rules.into_iter().map(PendingRule::Fixed));
        self
    }

    /// Registers a rule documenting `from` as `to`, e.g. substituting
    /// `NaiveDate` with `String`. The rule resolves once the pipeline's type
    /// resolver exists.
    pub fn direct_model_substitute(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.pending_rules.push(PendingRule::DirectSubstitution {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Registers rules collapsing each generic container to its
    /// unparameterized shape, e.g. documenting `Page<T>` as `T`'s wildcard
    /// placeholder for any `T`.
    pub fn generic_model_substitutes<I, S>(mut self, containers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for container in containers {
            self.pending_rules.push(PendingRule::GenericUnwrap {
                container: container.into(),
            });
        }
        self
    }

    /// Controls whether the built-in per-method response messages apply
    pub fn use_default_response_messages(mut self, apply: bool) -> Self {
        self.apply_default_response_messages = apply;
        self
    }

    /// Sets how api listing references are sorted within the resource listing
    pub fn listing_reference_ordering(
        mut self,
        ordering: Comparator<ApiListingReference>,
    ) -> Self {
        self.listing_reference_ordering = Some(ordering);
        self
    }

    /// Sets how api descriptions are sorted within a listing
    pub fn api_description_ordering(mut self, ordering: Comparator<ApiDescription>) -> Self {
        self.api_description_ordering = Some(ordering);
        self
    }

    /// Sets how operations are sorted within a description
    pub fn operation_ordering(mut self, ordering: Comparator<Operation>) -> Self {
        self.operation_ordering = Some(ordering);
        self
    }

    /// Sets the strategy interpreting the include patterns
    pub fn pattern_matcher(mut self, matcher: impl PathMatcher + 'static) -> Self {
        self.pattern_matcher = Some(Arc::new(matcher));
        self
    }

    /// Externally controls whether this docket participates in documentation
    /// generation at all
    pub fn enable(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Resolves the accumulated configuration into an immutable context.
    ///
    /// The first call fills the unset group name and api info; the atomic
    /// guard ensures that filling runs exactly once even when the first calls
    /// race. Every call, first or not, hands each field to the builder and
    /// returns the built context.
    pub fn configure(&mut self, mut builder: DocumentationContextBuilder) -> DocumentationContext {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.configure_defaults();
        }
        if let Some(provider) = &self.path_provider {
            builder = builder.path_provider(Arc::clone(provider));
        }
        if let Some(matcher) = &self.pattern_matcher {
            builder = builder.path_matcher(Arc::clone(matcher));
        }
        if let Some(context) = &self.authorization_context {
            builder = builder.authorization_context(context.clone());
        }
        builder
            .group_name(self.group_name.clone().unwrap_or_default())
            .api_info(self.api_info.clone().unwrap_or_default())
            .apply_default_response_messages(self.apply_default_response_messages)
            .additional_response_messages(self.response_messages.clone())
            .additional_ignorable_types(self.ignored_parameter_types.clone())
            .excluded_annotations(self.exclude_annotations.clone())
            .include_patterns(self.include_patterns.clone())
            .pending_rules(self.pending_rules.clone())
            .listing_reference_ordering(self.listing_reference_ordering.clone())
            .api_description_ordering(self.api_description_ordering.clone())
            .operation_ordering(self.operation_ordering.clone())
            .authorization_types(self.authorization_types.clone())
            .produces(self.produces.clone())
            .consumes(self.consumes.clone())
            .protocols(self.protocols.clone())
            .build()
    }

    fn configure_defaults(&mut self) {
        debug!(
            "Filling configuration defaults for '{}'",
            self.documentation_type
        );
        let blank = self
            .group_name
            .as_deref()
            .map_or(true, |name| name.trim().is_empty());
        if blank {
            self.group_name = Some(defaults::DEFAULT_GROUP_NAME.to_string());
        }
        if self.api_info.is_none() {
            self.api_info = Some(ApiInfo::default());
        }
    }
}

impl DocumentationPlugin for Docket {
    fn documentation_type(&self) -> &DocumentationType {
        &self.documentation_type
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn configure(&mut self, builder: DocumentationContextBuilder) -> DocumentationContext {
        Docket::configure(self, builder)
    }
}
