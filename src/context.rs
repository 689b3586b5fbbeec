//! The resolved documentation context and its builder.
//!
//! A [`DocumentationContext`] is the immutable output of configuration
//! resolution: every axis a [`Docket`](crate::docket::Docket) accumulates ends
//! up here, with unset axes filled from [`defaults`](crate::defaults). The
//! scanning and rendering stages read from the context and never write back.

use crate::alternate::{AlternateTypeRule, PendingRule};
use crate::defaults;
use crate::error::Result;
use crate::matcher::{PathMatcher, RegexPathMatcher};
use crate::model::{
    ApiDescription, ApiInfo, ApiListingReference, AuthorizationContext, AuthorizationType,
    DocumentationType, HttpMethod, Operation, ResponseMessage,
};
use crate::paths::{PathProvider, RelativePathProvider};
use crate::type_resolver::TypeResolver;
use log::debug;
use std::cmp;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// An ordering strategy over values of `T`.
///
/// Stored behind an `Arc` so a single configured ordering can be handed to any
/// number of resolution runs.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> cmp::Ordering + Send + Sync>;

/// Builder collecting resolved configuration fields one setter at a time.
///
/// Created per resolution run; [`build`](Self::build) consumes the builder and
/// fills every still-unset axis from the crate defaults.
pub struct DocumentationContextBuilder {
    documentation_type: DocumentationType,
    group_name: Option<String>,
    api_info: Option<ApiInfo>,
    path_provider: Option<Arc<dyn PathProvider>>,
    authorization_context: Option<AuthorizationContext>,
    authorization_types: Vec<AuthorizationType>,
    apply_default_response_messages: bool,
    additional_response_messages: HashMap<HttpMethod, Vec<ResponseMessage>>,
    additional_ignorable_types: HashSet<String>,
    excluded_annotations: Vec<String>,
    include_patterns: Vec<String>,
    pending_rules: Vec<PendingRule>,
    path_matcher: Option<Arc<dyn PathMatcher>>,
    listing_reference_ordering: Option<Comparator<ApiListingReference>>,
    api_description_ordering: Option<Comparator<ApiDescription>>,
    operation_ordering: Option<Comparator<Operation>>,
    produces: HashSet<String>,
    consumes: HashSet<String>,
    protocols: HashSet<String>,
}

impl DocumentationContextBuilder {
    /// Create a builder for the given documentation type
    pub fn new(documentation_type: DocumentationType) -> Self {
        Self {
            documentation_type,
            group_name: None,
            api_info: None,
            path_provider: None,
            authorization_context: None,
            authorization_types: Vec::new(),
            apply_default_response_messages: true,
            additional_response_messages: HashMap::new(),
            additional_ignorable_types: HashSet::new(),
            excluded_annotations: Vec::new(),
            include_patterns: Vec::new(),
            pending_rules: Vec::new(),
            path_matcher: None,
            listing_reference_ordering: None,
            api_description_ordering: None,
            operation_ordering: None,
            produces: HashSet::new(),
            consumes: HashSet::new(),
            protocols: HashSet::new(),
        }
    }

    /// Set the group name
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Set the api meta information
    pub fn api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = Some(api_info);
        self
    }

    /// Set the path provider
    pub fn path_provider(mut self, path_provider: Arc<dyn PathProvider>) -> Self {
        self.path_provider = Some(path_provider);
        self
    }

    /// Set the authorization context
    pub fn authorization_context(mut self, context: AuthorizationContext) -> Self {
        self.authorization_context = Some(context);
        self
    }

    /// Set the global authorization types
    pub fn authorization_types(mut self, types: Vec<AuthorizationType>) -> Self {
        self.authorization_types = types;
        self
    }

    /// Control whether the default response messages are applied
    pub fn apply_default_response_messages(mut self, apply: bool) -> Self {
        self.apply_default_response_messages = apply;
        self
    }

    /// Set the per-method response message overrides
    pub fn additional_response_messages(
        mut self,
        messages: HashMap<HttpMethod, Vec<ResponseMessage>>,
    ) -> Self {
        self.additional_response_messages = messages;
        self
    }

    /// Set parameter types to ignore on top of the built-in set
    pub fn additional_ignorable_types(mut self, types: HashSet<String>) -> Self {
        self.additional_ignorable_types = types;
        self
    }

    /// Set annotations whose presence excludes a mapping
    pub fn excluded_annotations(mut self, annotations: Vec<String>) -> Self {
        self.excluded_annotations = annotations;
        self
    }

    /// Set the include patterns
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.include_patterns = patterns;
        self
    }

    /// Set the deferred alternate type rules
    pub fn pending_rules(mut self, rules: Vec<PendingRule>) -> Self {
        self.pending_rules = rules;
        self
    }

    /// Set the path matching strategy
    pub fn path_matcher(mut self, matcher: Arc<dyn PathMatcher>) -> Self {
        self.path_matcher = Some(matcher);
        self
    }

    /// Set the ordering of api listing references
    pub fn listing_reference_ordering(
        mut self,
        ordering: Option<Comparator<ApiListingReference>>,
    ) -> Self {
        self.listing_reference_ordering = ordering;
        self
    }

    /// Set the ordering of api descriptions
    pub fn api_description_ordering(
        mut self,
        ordering: Option<Comparator<ApiDescription>>,
    ) -> Self {
        self.api_description_ordering = ordering;
        self
    }

    /// Set the ordering of operations
    pub fn operation_ordering(mut self, ordering: Option<Comparator<Operation>>) -> Self {
        self.operation_ordering = ordering;
        self
    }

    /// Set the produced media types
    pub fn produces(mut self, produces: HashSet<String>) -> Self {
        self.produces = produces;
        self
    }

    /// Set the consumed media types
    pub fn consumes(mut self, consumes: HashSet<String>) -> Self {
        self.consumes = consumes;
        self
    }

    /// Set the supported protocols
    pub fn protocols(mut self, protocols: HashSet<String>) -> Self {
        self.protocols = protocols;
        self
    }

    /// Build the immutable context, filling unset axes from the defaults.
    ///
    /// When default response messages apply, per-method overrides replace that
    /// method's default list; other methods keep their defaults.
    pub fn build(self) -> DocumentationContext {
        debug!(
            "Building documentation context for '{}'",
            self.documentation_type
        );

        let mut response_messages = if self.apply_default_response_messages {
            defaults::default_response_messages()
        } else {
            HashMap::new()
        };
        response_messages.extend(self.additional_response_messages);

        let mut ignorable_parameter_types = defaults::default_ignorable_parameter_types();
        ignorable_parameter_types.extend(self.additional_ignorable_types);

        let include_patterns = if self.include_patterns.is_empty() {
            vec![defaults::MATCH_ALL_PATTERN.to_string()]
        } else {
            self.include_patterns
        };

        DocumentationContext {
            documentation_type: self.documentation_type,
            group_name: self
                .group_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| defaults::DEFAULT_GROUP_NAME.to_string()),
            api_info: self.api_info.unwrap_or_default(),
            path_provider: self
                .path_provider
                .unwrap_or_else(|| Arc::new(RelativePathProvider)),
            authorization_context: self.authorization_context,
            authorization_types: self.authorization_types,
            response_messages,
            ignorable_parameter_types,
            excluded_annotations: self.excluded_annotations,
            include_patterns,
            pending_rules: self.pending_rules,
            path_matcher: self
                .path_matcher
                .unwrap_or_else(|| Arc::new(RegexPathMatcher)),
            listing_reference_ordering: self
                .listing_reference_ordering
                .unwrap_or_else(defaults::listing_reference_ordering),
            api_description_ordering: self
                .api_description_ordering
                .unwrap_or_else(defaults::api_description_ordering),
            operation_ordering: self
                .operation_ordering
                .unwrap_or_else(defaults::operation_ordering),
            produces: self.produces,
            consumes: self.consumes,
            protocols: self.protocols,
        }
    }
}

/// The immutable, fully-defaulted configuration consumed by the pipeline.
pub struct DocumentationContext {
    documentation_type: DocumentationType,
    group_name: String,
    api_info: ApiInfo,
    path_provider: Arc<dyn PathProvider>,
    authorization_context: Option<AuthorizationContext>,
    authorization_types: Vec<AuthorizationType>,
    response_messages: HashMap<HttpMethod, Vec<ResponseMessage>>,
    ignorable_parameter_types: HashSet<String>,
    excluded_annotations: Vec<String>,
    include_patterns: Vec<String>,
    pending_rules: Vec<PendingRule>,
    path_matcher: Arc<dyn PathMatcher>,
    listing_reference_ordering: Comparator<ApiListingReference>,
    api_description_ordering: Comparator<ApiDescription>,
    operation_ordering: Comparator<Operation>,
    produces: HashSet<String>,
    consumes: HashSet<String>,
    protocols: HashSet<String>,
}

impl std::fmt::Debug for DocumentationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("DocumentationContext")
            .field("documentation_type", &self.documentation_type)
            .field("group_name", &self.group_name)
            .field("api_info", &self.api_info)
            .field("include_patterns", &self.include_patterns)
            .finish_non_exhaustive()
    }
}

impl DocumentationContext {
    /// The documentation type this context targets
    pub fn documentation_type(&self) -> &DocumentationType {
        &self.documentation_type
    }

    /// The resolved group name
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// The resolved api meta information
    pub fn api_info(&self) -> &ApiInfo {
        &self.api_info
    }

    /// The path provider in effect
    pub fn path_provider(&self) -> &Arc<dyn PathProvider> {
        &self.path_provider
    }

    /// The authorization context, when one was configured
    pub fn authorization_context(&self) -> Option<&AuthorizationContext> {
        self.authorization_context.as_ref()
    }

    /// The global authorization types
    pub fn authorization_types(&self) -> &[AuthorizationType] {
        &self.authorization_types
    }

    /// The response messages in effect, keyed by method
    pub fn response_messages(&self) -> &HashMap<HttpMethod, Vec<ResponseMessage>> {
        &self.response_messages
    }

    /// Parameter types the scanners must not document
    pub fn ignorable_parameter_types(&self) -> &HashSet<String> {
        &self.ignorable_parameter_types
    }

    /// Annotations whose presence excludes a mapping
    pub fn excluded_annotations(&self) -> &[String] {
        &self.excluded_annotations
    }

    /// The include patterns in effect
    pub fn include_patterns(&self) -> &[String] {
        &self.include_patterns
    }

    /// The path matching strategy in effect
    pub fn path_matcher(&self) -> &Arc<dyn PathMatcher> {
        &self.path_matcher
    }

    /// Ordering of api listing references
    pub fn listing_reference_ordering(&self) -> &Comparator<ApiListingReference> {
        &self.listing_reference_ordering
    }

    /// Ordering of api descriptions
    pub fn api_description_ordering(&self) -> &Comparator<ApiDescription> {
        &self.api_description_ordering
    }

    /// Ordering of operations
    pub fn operation_ordering(&self) -> &Comparator<Operation> {
        &self.operation_ordering
    }

    /// Produced media types
    pub fn produces(&self) -> &HashSet<String> {
        &self.produces
    }

    /// Consumed media types
    pub fn consumes(&self) -> &HashSet<String> {
        &self.consumes
    }

    /// Supported protocols
    pub fn protocols(&self) -> &HashSet<String> {
        &self.protocols
    }

    /// Whether a discovered path belongs to the documented surface
    pub fn path_included(&self, path: &str) -> Result<bool> {
        self.path_matcher.any_match(&self.include_patterns, path)
    }

    /// Resolve the registered substitution rules against scanned definitions
    pub fn resolve_alternate_rules(&self, resolver: &TypeResolver) -> Vec<AlternateTypeRule> {
        self.pending_rules
            .iter()
            .map(|pending| pending.resolve(resolver))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alternate::ResolvedType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_builder_fills_every_default() {
        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2()).build();

        assert_eq!(context.group_name(), "default");
        assert_eq!(context.api_info(), &ApiInfo::default());
        assert_eq!(context.include_patterns(), [".*?".to_string()]);
        assert_eq!(context.path_provider().application_base_path(), "/");
        assert!(context.authorization_context().is_none());
        assert!(context.produces().is_empty());
    }

    #[test]
    fn test_blank_group_name_falls_back_to_default() {
        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .group_name("   ")
            .build();
        assert_eq!(context.group_name(), "default");
    }

    #[test]
    fn test_default_response_messages_overlaid_by_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert(
            HttpMethod::Get,
            vec![ResponseMessage::new(418, "I'm a teapot")],
        );

        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .additional_response_messages(overrides)
            .build();

        let get_messages = &context.response_messages()[&HttpMethod::Get];
        assert_eq!(get_messages.len(), 1);
        assert_eq!(get_messages[0].code, 418);
        // Other methods keep the full default list
        assert_eq!(context.response_messages()[&HttpMethod::Post].len(), 4);
    }

    #[test]
    fn test_defaults_suppressed_when_flag_off() {
        let mut overrides = HashMap::new();
        overrides.insert(HttpMethod::Get, vec![ResponseMessage::new(200, "OK")]);

        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .apply_default_response_messages(false)
            .additional_response_messages(overrides)
            .build();

        assert_eq!(context.response_messages().len(), 1);
        assert!(context.response_messages().contains_key(&HttpMethod::Get));
    }

    #[test]
    fn test_additional_ignorable_types_merged_with_builtins() {
        let mut additional = HashSet::new();
        additional.insert("ConnectionPool".to_string());

        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .additional_ignorable_types(additional)
            .build();

        assert!(context.ignorable_parameter_types().contains("ConnectionPool"));
        assert!(context.ignorable_parameter_types().contains("State"));
    }

    #[test]
    fn test_path_included_uses_configured_patterns() {
        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .include_patterns(vec!["^/api/.*".to_string()])
            .build();

        assert!(context.path_included("/api/users").unwrap());
        assert!(!context.path_included("/internal/metrics").unwrap());
    }

    #[test]
    fn test_resolve_alternate_rules() {
        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .pending_rules(vec![PendingRule::DirectSubstitution {
                from: "Uuid".to_string(),
                to: "String".to_string(),
            }])
            .build();

        let rules = context.resolve_alternate_rules(&TypeResolver::new());
        assert_eq!(rules.len(), 1);
        assert!(rules[0].applies_to(&ResolvedType::named("Uuid")));
    }

    #[test]
    fn test_custom_ordering_preserved() {
        let reversed: Comparator<ApiDescription> =
            Arc::new(|left, right| right.path.cmp(&left.path));

        let context = DocumentationContextBuilder::new(DocumentationType::swagger_2())
            .api_description_ordering(Some(reversed))
            .build();

        let ordering = context.api_description_ordering();
        let a = ApiDescription::new("/a");
        let b = ApiDescription::new("/b");
        assert_eq!(ordering(&a, &b), cmp::Ordering::Greater);
    }
}
