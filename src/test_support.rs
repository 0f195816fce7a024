//! Shared test helpers: an in-process AnythingLLM stand-in.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Router, extract::Request, middleware::Next};
use rmcp::model::{CallToolResult, RawContent};
use tokio::net::TcpListener;

use crate::core::api::AnythingLlmClient;
use crate::core::config::ApiConfig;

/// A mock AnythingLLM server bound to an ephemeral local port.
pub struct MockBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Serve `router` in the background, counting every routed request.
    pub async fn start(router: Router) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = router.layer(axum::middleware::from_fn(
            move |request: Request, next: Next| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    next.run(request).await
                }
            },
        ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
        }
    }

    /// Number of requests the backend has received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// A client pointed at this backend with a valid key.
    pub fn client(&self) -> AnythingLlmClient {
        AnythingLlmClient::new(api_config(&self.base_url, "test-token")).unwrap()
    }
}

/// API configuration with a short timeout for tests.
pub fn api_config(base_url: &str, api_key: &str) -> ApiConfig {
    ApiConfig::new(base_url, api_key).with_timeout_secs(5)
}

/// A client with no API key configured.
pub fn client_without_key(base_url: &str) -> AnythingLlmClient {
    AnythingLlmClient::new(api_config(base_url, "")).unwrap()
}

/// Base URL of a local port that nothing listens on.
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Extract the text of a single-content tool result.
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

/// Whether a tool result carries the error flag.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
