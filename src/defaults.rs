//! Built-in defaults applied when the configuration leaves an axis unset.

use crate::context::Comparator;
use crate::model::{
    ApiDescription, ApiListingReference, HttpMethod, Operation, ResponseMessage,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// The group name used when none was configured
pub const DEFAULT_GROUP_NAME: &str = "default";

/// The include pattern matching every path
pub const MATCH_ALL_PATTERN: &str = ".*?";

/// Default response messages, keyed by HTTP method.
///
/// Every method documents the common authorization and lookup failures; the
/// success code follows the method's conventional semantics.
pub fn default_response_messages() -> HashMap<HttpMethod, Vec<ResponseMessage>> {
    let mut messages = HashMap::new();
    for method in HttpMethod::all() {
        let success = match method {
            HttpMethod::Post => ResponseMessage::new(201, "Created"),
            HttpMethod::Delete | HttpMethod::Options => {
                ResponseMessage::new(204, "No Content")
            }
            _ => ResponseMessage::new(200, "OK"),
        };
        messages.insert(
            method,
            vec![
                success,
                ResponseMessage::new(401, "Unauthorized"),
                ResponseMessage::new(403, "Forbidden"),
                ResponseMessage::new(404, "Not Found"),
            ],
        );
    }
    messages
}

/// Parameter types the scanners never document.
///
/// These are framework plumbing injected into handler signatures rather than
/// part of the API surface.
pub fn default_ignorable_parameter_types() -> HashSet<String> {
    ["State", "Extension", "Request", "Response"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Default ordering of api listing references: by position, then by path
pub fn listing_reference_ordering() -> Comparator<ApiListingReference> {
    Arc::new(|left, right| {
        left.position
            .cmp(&right.position)
            .then_with(|| left.path.cmp(&right.path))
    })
}

/// Default ordering of api descriptions: lexicographic by path
pub fn api_description_ordering() -> Comparator<ApiDescription> {
    Arc::new(|left, right| left.path.cmp(&right.path))
}

/// Default ordering of operations: by position, then by nickname
pub fn operation_ordering() -> Comparator<Operation> {
    Arc::new(|left, right| {
        left.position
            .cmp(&right.position)
            .then_with(|| left.nickname.cmp(&right.nickname))
    })
}
