use super::error::GenerateError;
use contracts::usecases::u501_generate_project::{is_success_status, REQUEST_CONTENT_TYPE};
use gloo_net::http::Request;

/// Sends schema text to the generator and returns the archive bytes.
#[allow(async_fn_in_trait)]
pub trait CodegenTransport {
    async fn generate(&self, schema_text: &str) -> Result<Vec<u8>, GenerateError>;
}

/// `fetch`-based client of the generate endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl CodegenTransport for HttpTransport {
    async fn generate(&self, schema_text: &str) -> Result<Vec<u8>, GenerateError> {
        // Текст уходит как есть, без повторной сериализации
        let response = Request::post(&self.endpoint)
            .header("Content-Type", REQUEST_CONTENT_TYPE)
            .body(schema_text)
            .map_err(|e| GenerateError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        if !is_success_status(status) {
            return Err(GenerateError::Status {
                status,
                status_text: response.status_text(),
            });
        }

        response
            .binary()
            .await
            .map_err(|e| GenerateError::Body(e.to_string()))
    }
}
