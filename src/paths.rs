//! Path providers determining the URLs written into generated documents.

/// Strategy for deriving the documented URLs of the API.
///
/// By default relative URLs are generated; deployments behind a gateway or a
/// servlet-style context path supply their own implementation.
pub trait PathProvider: Send + Sync {
    /// Base path every operation path is joined onto
    fn application_base_path(&self) -> String;

    /// Full documented path for one operation
    fn operation_path(&self, operation_path: &str) -> String {
        join(&self.application_base_path(), operation_path)
    }
}

/// Default provider: documents paths relative to the application root.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelativePathProvider;

impl PathProvider for RelativePathProvider {
    fn application_base_path(&self) -> String {
        "/".to_string()
    }
}

/// Join a base path and an operation path with exactly one separating slash
fn join(base: &str, operation: &str) -> String {
    let base = base.trim_end_matches('/');
    let operation = operation.trim_start_matches('/');
    format!("{}/{}", base, operation)
}
