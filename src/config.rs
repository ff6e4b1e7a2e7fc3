//! Configuration options for the tracker client

use std::time::Duration;

/// Base URL the backend listens on when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Configuration options for the tracker client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Page size used when listing subscriptions
    pub page_size: u32,

    /// Whether to send the session cookie with every request
    pub send_credentials: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            page_size: 20,
            send_credentials: true,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the page size used when listing subscriptions
    pub fn with_page_size(mut self, value: u32) -> Self {
        self.page_size = value;
        self
    }

    /// Set whether to send the session cookie with every request
    pub fn with_send_credentials(mut self, value: bool) -> Self {
        self.send_credentials = value;
        self
    }
}
