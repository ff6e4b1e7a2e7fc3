//! Subscription tracker client
//!
//! A typed client for a personal subscription-tracking backend, plus the
//! pure engines the display layers are built on: billing-cycle
//! normalization ([`billing`]), renewal projection ([`renewal`]),
//! spend aggregation ([`stats`]) and list/calendar views ([`view`]).
//! Demo mode runs entirely locally through [`store`] and [`dashboard`].

pub mod auth;
pub mod billing;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod model;
pub mod permissions;
pub mod renewal;
pub mod sample;
pub mod stats;
pub mod store;
pub mod subscriptions;
pub mod validate;
pub mod view;

use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::auth::{AuthClient, SessionState, SharedSession};
use crate::config::ClientOptions;
use crate::error::Error;
use crate::permissions::PermissionsClient;
use crate::subscriptions::SubscriptionsClient;

/// The main entry point for the tracker client
pub struct Tracker {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// HTTP client used for requests; carries the session cookie
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
    session: SharedSession,
}

impl Tracker {
    /// Create a new tracker client against a backend base URL.
    ///
    /// # Example
    ///
    /// ```
    /// use subtrack::config::DEFAULT_BASE_URL;
    /// use subtrack::Tracker;
    ///
    /// let tracker = Tracker::new(DEFAULT_BASE_URL)?;
    /// # Ok::<(), subtrack::error::Error>(())
    /// ```
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new tracker client with custom options
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Result<Self, Error> {
        let mut builder = Client::builder().cookie_store(options.send_credentials);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            options,
            session: Arc::new(Mutex::new(None)),
        })
    }

    /// Client for the auth endpoints
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Client for the guest-permission endpoints
    pub fn permissions(&self) -> PermissionsClient {
        PermissionsClient::new(&self.base_url, self.http_client.clone())
    }

    /// Client for the subscription endpoints, scoped to the active owner
    /// context
    pub fn subscriptions(&self) -> SubscriptionsClient {
        SubscriptionsClient::new(
            &self.base_url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.page_size,
        )
    }

    /// Snapshot of the current session, if signed in
    pub fn session(&self) -> Option<SessionState> {
        let guard = self.session.lock().unwrap();
        guard.clone()
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, FormField};
    pub use crate::model::{
        BillingCycle, Currency, PaymentMethod, Subscription, SubscriptionStatus, TimeUnit,
    };
    pub use crate::Tracker;
}
