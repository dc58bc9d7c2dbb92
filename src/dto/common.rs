//! Shared response payloads.

use serde::Serialize;
use utoipa::ToSchema;

/// Descriptor for one API endpoint, returned by the index route.
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointDescriptor {
    /// Path template of the endpoint.
    pub href: String,
    /// HTTP methods the endpoint accepts.
    pub methods: Vec<String>,
}

impl EndpointDescriptor {
    /// Describe an endpoint by its path template and accepted methods.
    pub fn new(href: &str, methods: &[&str]) -> Self {
        Self {
            href: href.to_owned(),
            methods: methods.iter().map(|method| (*method).to_owned()).collect(),
        }
    }
}
