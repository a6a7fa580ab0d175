// Shared mock transports for pipeline integration tests
use std::future::Future;
use std::pin::Pin;

pub use ingesta_core::{
    pipeline, HttpClient, HttpError, HttpResponse, IngestConfig, PipelineError,
};
pub use ingesta_warehouse::{NewRecord, Warehouse, WarehouseConfig};
pub use std::sync::Arc;

/// Transport that always answers with a fixed status and body.
pub struct StaticHttpClient {
    pub status: u16,
    pub body: &'static str,
}

impl HttpClient for StaticHttpClient {
    fn get<'a>(
        &'a self,
        _url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = HttpResponse {
            status: self.status,
            body: self.body.to_string(),
        };
        Box::pin(async move { Ok(response) })
    }
}

/// Transport that fails every request at the connection level.
pub struct FailingHttpClient;

impl HttpClient for FailingHttpClient {
    fn get<'a>(
        &'a self,
        _url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move { Err(HttpError::new("connection refused")) })
    }
}
