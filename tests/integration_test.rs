use openapi_docket::{
    alternate::ResolvedType,
    context::DocumentationContextBuilder,
    docket::Docket,
    merger::merge_by_name,
    model::{
        ApiInfo, AuthorizationContext, AuthorizationType, DocumentationType, HttpMethod,
        Parameter, ResponseMessage,
    },
    paths::PathProvider,
    plugins::{DocumentationPlugin, PluginRegistry},
    type_resolver::TypeResolver,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Path provider documenting the API behind a versioned gateway prefix
struct GatewayPathProvider;

impl PathProvider for GatewayPathProvider {
    fn application_base_path(&self) -> String {
        "/gateway/v2".to_string()
    }
}

#[test]
fn test_end_to_end_configuration_flow() {
    init_logging();

    // Step 1: Accumulate policy on a docket
    let docket = Docket::new(DocumentationType::openapi_30())
        .group_name("billing")
        .api_info(ApiInfo::new("Billing API", "Invoices and payments", "2.0"))
        .path_provider(GatewayPathProvider)
        .include_patterns(["^/api/.*"])
        .exclude_annotations(["doc_hidden"])
        .ignored_parameter_types(["ConnectionPool"])
        .produces(["application/json"])
        .consumes(["application/json"])
        .protocols(["https"])
        .direct_model_substitute("NaiveDate", "String")
        .generic_model_substitutes(["Page"])
        .global_response_message(
            HttpMethod::Delete,
            vec![ResponseMessage::new(409, "Conflict")],
        )
        .authorization_context(AuthorizationContext::for_all(vec![
            AuthorizationType::new("api_key", "apiKey"),
        ]));

    // Step 2: Register it and resolve for the requested format
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(docket));

    let contexts = registry
        .configure_all(&DocumentationType::openapi_30())
        .expect("Should resolve a context");
    assert_eq!(contexts.len(), 1);
    let context = &contexts[0];

    // Step 3: Resolved fields carry the configured policy
    assert_eq!(context.group_name(), "billing");
    assert_eq!(context.api_info().title, "Billing API");
    assert_eq!(context.excluded_annotations(), ["doc_hidden".to_string()]);
    assert!(context.produces().contains("application/json"));
    assert!(context.authorization_context().is_some());

    // Configured ignorables sit alongside the built-in set
    assert!(context.ignorable_parameter_types().contains("ConnectionPool"));
    assert!(context.ignorable_parameter_types().contains("State"));

    // Step 4: Path filtering and URL derivation
    assert!(context.path_included("/api/invoices").unwrap());
    assert!(!context.path_included("/internal/status").unwrap());
    assert_eq!(
        context.path_provider().operation_path("/invoices/{id}"),
        "/gateway/v2/invoices/{id}"
    );

    // Step 5: Response messages: override for DELETE, defaults elsewhere
    let delete_messages = &context.response_messages()[&HttpMethod::Delete];
    assert_eq!(delete_messages.len(), 1);
    assert_eq!(delete_messages[0].code, 409);
    assert_eq!(context.response_messages()[&HttpMethod::Get].len(), 4);

    // Step 6: Substitution rules resolve once scanned definitions exist
    let resolver = TypeResolver::with_definitions(vec![ResolvedType::parameterized(
        "Page",
        vec![ResolvedType::wildcard()],
    )]);
    let rules = context.resolve_alternate_rules(&resolver);
    assert_eq!(rules.len(), 2);
    assert!(rules[0].applies_to(&ResolvedType::named("NaiveDate")));
    assert!(rules[1].applies_to(&ResolvedType::parameterized(
        "Page",
        vec![ResolvedType::named("Invoice")]
    )));
}

#[test]
fn test_registry_resolves_one_context_per_group() {
    init_logging();

    let mut registry = PluginRegistry::new();
    registry.register(Box::new(
        Docket::new(DocumentationType::swagger_2()).group_name("billing"),
    ));
    registry.register(Box::new(
        Docket::new(DocumentationType::swagger_2()).group_name("shipping"),
    ));
    registry.register(Box::new(
        Docket::new(DocumentationType::openapi_30()).group_name("modern"),
    ));

    let contexts = registry
        .configure_all(&DocumentationType::swagger_2())
        .expect("Should resolve swagger 2.0 contexts");

    let mut names: Vec<&str> = contexts.iter().map(|c| c.group_name()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["billing", "shipping"]);
}

#[test]
fn test_resolution_is_repeatable() {
    init_logging();

    let mut docket = Docket::new(DocumentationType::swagger_2());
    let first = docket.configure(DocumentationContextBuilder::new(
        DocumentationType::swagger_2(),
    ));
    let second = docket.configure(DocumentationContextBuilder::new(
        DocumentationType::swagger_2(),
    ));

    // Default filling happened once; both contexts see the same values
    assert_eq!(first.group_name(), "default");
    assert_eq!(second.group_name(), "default");
    assert_eq!(first.api_info(), second.api_info());
    assert_eq!(first.include_patterns(), second.include_patterns());
}

#[test]
fn test_overlapping_declarations_merge_destination_first() {
    init_logging();

    // Parameters declared on the handler itself
    let method_level = vec![
        Parameter::new("id", "path", true).describe("invoice id"),
        Parameter::new("expand", "query", false).describe("expand line items"),
    ];
    // Parameters declared on the enclosing type
    let type_level = vec![
        Parameter::new("expand", "query", true).describe("legacy expand flag"),
        Parameter::new("tenant", "header", true).describe("tenant id"),
    ];

    let merged = merge_by_name(&method_level, &type_level);

    assert_eq!(merged.len(), 3);
    let expand = merged
        .iter()
        .find(|p| p.name == "expand")
        .expect("expand parameter present");
    // The handler-level declaration wins the collision outright
    assert_eq!(expand.description, Some("expand line items".to_string()));
    assert!(!expand.required);
    assert!(merged.iter().any(|p| p.name == "tenant"));
}

#[test]
fn test_disabled_docket_excluded_from_resolution() {
    init_logging();

    let mut registry = PluginRegistry::new();
    registry.register(Box::new(
        Docket::new(DocumentationType::swagger_2())
            .group_name("visible")
            .enable(true),
    ));
    registry.register(Box::new(
        Docket::new(DocumentationType::swagger_2())
            .group_name("hidden")
            .enable(false),
    ));

    let contexts = registry
        .configure_all(&DocumentationType::swagger_2())
        .expect("Should resolve the enabled docket");

    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].group_name(), "visible");
}

#[test]
fn test_plugin_supports_drives_selection() {
    init_logging();

    let docket = Docket::new(DocumentationType::swagger_12());
    assert!(docket.supports(&DocumentationType::swagger_12()));
    assert!(!docket.supports(&DocumentationType::swagger_2()));

    let mut registry = PluginRegistry::new();
    registry.register(Box::new(docket));
    assert!(registry
        .configure_all(&DocumentationType::swagger_2())
        .is_err());
}
