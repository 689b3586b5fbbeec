//! OpenAPI Docket - Fluent configuration layer for documentation pipelines.
//!
//! This library is the configuration front-end of an OpenAPI documentation
//! generator: callers describe *what* should be documented (groups, path
//! patterns, type substitutions, response-message overrides, orderings)
//! through a chained builder, and the library resolves that policy into an
//! immutable context consumed by the scanning and rendering stages.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`docket`] - The `Docket` builder accumulating configuration policy
//! 2. [`context`] - The immutable resolved `DocumentationContext` and its builder
//! 3. [`plugins`] - Plugin trait and registry selecting configurations by type
//! 4. [`defaults`] - Built-in response messages, ignorable types, and orderings
//! 5. [`matcher`] - Include-pattern matching strategies (regex by default)
//! 6. [`paths`] - Path providers determining the documented URLs
//! 7. [`alternate`] - Deferred type-substitution rules
//! 8. [`type_resolver`] - Resolution of type name tokens to type handles
//! 9. [`merger`] - Name-keyed merging of overlapping entity declarations
//! 10. [`model`] - The service data model shared with downstream stages
//!
//! # Example Usage
//!
//! ```
//! use openapi_docket::{
//!     context::DocumentationContextBuilder,
//!     docket::Docket,
//!     model::{ApiInfo, DocumentationType, HttpMethod, ResponseMessage},
//! };
//!
//! let mut docket = Docket::new(DocumentationType::openapi_30())
//!     .group_name("billing")
//!     .api_info(ApiInfo::new("Billing API", "Invoices and payments", "2.0"))
//!     .include_patterns(["^/api/.*"])
//!     .direct_model_substitute("NaiveDate", "String")
//!     .generic_model_substitutes(["Page"])
//!     .global_response_message(
//!         HttpMethod::Delete,
//!         vec![ResponseMessage::new(409, "Conflict")],
//!     );
//!
//! let builder = DocumentationContextBuilder::new(DocumentationType::openapi_30());
//! let context = docket.configure(builder);
//!
//! assert_eq!(context.group_name(), "billing");
//! assert!(context.path_included("/api/invoices").unwrap());
//! assert!(!context.path_included("/internal/status").unwrap());
//! ```

pub mod alternate;
pub mod context;
pub mod defaults;
pub mod docket;
pub mod error;
pub mod matcher;
pub mod merger;
pub mod model;
pub mod paths;
pub mod plugins;
pub mod type_resolver;
