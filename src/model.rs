//! Service data model shared by the configuration layer and downstream scanners.
//!
//! These types carry no behavior beyond construction helpers: they are the
//! vocabulary the [`Docket`](crate::docket::Docket) accumulates and the
//! resolved [`DocumentationContext`](crate::context::DocumentationContext)
//! hands to the rest of the pipeline.

use serde::{Deserialize, Serialize};

/// Identifies which output format a configuration instance targets.
///
/// When several configurations are registered at once, each one is selected
/// by matching its documentation type against the requested one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentationType {
    /// Format family (e.g., "swagger", "openapi")
    pub name: String,
    /// Format version (e.g., "2.0", "3.0")
    pub version: String,
}

impl DocumentationType {
    /// Create a documentation type from a family name and version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Swagger 1.2 resource listings
    pub fn swagger_12() -> Self {
        Self::new("swagger", "1.2")
    }

    /// Swagger 2.0 documents
    pub fn swagger_2() -> Self {
        Self::new("swagger", "2.0")
    }

    /// OpenAPI 3.0 documents
    pub fn openapi_30() -> Self {
        Self::new("openapi", "3.0")
    }
}

impl std::fmt::Display for DocumentationType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// HTTP methods a response-message override can be keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP PATCH method
    Patch,
    /// HTTP OPTIONS method
    Options,
    /// HTTP HEAD method
    Head,
    /// HTTP TRACE method
    Trace,
}

impl HttpMethod {
    /// All methods, in the order defaults are generated
    pub fn all() -> [HttpMethod; 8] {
        [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
            HttpMethod::Patch,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Trace,
        ]
    }
}

/// API meta information included in the generated resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// API title
    pub title: String,
    /// API description
    pub description: String,
    /// API version string
    pub version: String,
    /// Terms of service URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<String>,
    /// Contact name or address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// License name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// License URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
}

impl ApiInfo {
    /// Create api info with the required fields only
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            version: version.into(),
            terms_of_service_url: None,
            contact: None,
            license: None,
            license_url: None,
        }
    }
}

impl Default for ApiInfo {
    /// The fixed fallback used when no api info was supplied before resolution
    fn default() -> Self {
        Self::new("Api Documentation", "Api Documentation", "1.0")
    }
}

/// A response message documented for an HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// HTTP status code
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Name of the model returned with this status, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_model: Option<String>,
}

impl ResponseMessage {
    /// Create a response message without a response model
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            response_model: None,
        }
    }

    /// Create a response message carrying a response model name
    pub fn with_model(code: u16, message: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            response_model: Some(model.into()),
        }
    }
}

/// A global authorization scheme applicable to some or all operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationType {
    /// Scheme name (e.g., "api_key", "oauth2")
    pub name: String,
    /// Scheme kind discriminator
    #[serde(rename = "type")]
    pub kind: String,
}

impl AuthorizationType {
    /// Create an authorization type
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Scopes which operations the global authorization types apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationContext {
    /// The authorization schemes in effect
    pub authorizations: Vec<AuthorizationType>,
    /// Regex patterns selecting the operations they apply to
    pub include_patterns: Vec<String>,
}

impl AuthorizationContext {
    /// Apply the given schemes to every operation
    pub fn for_all(authorizations: Vec<AuthorizationType>) -> Self {
        Self {
            authorizations,
            include_patterns: vec![".*?".to_string()],
        }
    }
}

/// A single operation parameter as produced by the scanning components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, the merge key
    pub name: String,
    /// Parameter description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the parameter is read from (path, query, header, body)
    #[serde(rename = "in")]
    pub parameter_type: String,
    /// Name of the parameter's data type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Whether the parameter is required
    pub required: bool,
}

impl Parameter {
    /// Create a parameter with the required fields only
    pub fn new(name: impl Into<String>, parameter_type: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameter_type: parameter_type.into(),
            data_type: None,
            required,
        }
    }

    /// Set the description, consuming and returning the parameter
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single documented API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// HTTP method of the operation
    pub method: HttpMethod,
    /// Operation summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Unique operation name within its listing
    pub nickname: String,
    /// Relative position used by position-based ordering
    pub position: i32,
    /// Operation parameters
    pub parameters: Vec<Parameter>,
    /// Response messages for the operation
    pub response_messages: Vec<ResponseMessage>,
}

impl Operation {
    /// Create an operation with no parameters or response messages
    pub fn new(method: HttpMethod, nickname: impl Into<String>, position: i32) -> Self {
        Self {
            method,
            summary: None,
            nickname: nickname.into(),
            position,
            parameters: Vec::new(),
            response_messages: Vec::new(),
        }
    }
}

/// Description of one path and the operations available on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescription {
    /// The documented path
    pub path: String,
    /// Description of the path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operations on this path
    pub operations: Vec<Operation>,
}

impl ApiDescription {
    /// Create a description with no operations
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: None,
            operations: Vec::new(),
        }
    }
}

/// Reference to one api listing within the resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiListingReference {
    /// Path of the referenced listing
    pub path: String,
    /// Description of the referenced listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Relative position used by position-based ordering
    pub position: i32,
}

impl ApiListingReference {
    /// Create a listing reference
    pub fn new(path: impl Into<String>, position: i32) -> Self {
        Self {
            path: path.into(),
            description: None,
            position,
        }
    }
}
