//! Subscription CRUD against the backend
//!
//! Every operation is scoped to the active owner context; records cross
//! the boundary in wire shape (see [`crate::model::wire`]).

use reqwest::Client;
use serde::Deserialize;

use crate::auth::{context_owner_id, SharedSession};
use crate::error::Error;
use crate::fetch::Fetch;
use crate::model::wire::SubscriptionRecord;
use crate::model::Subscription;

/// One page of a listing
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Client for the backend's subscription endpoints
pub struct SubscriptionsClient {
    base_url: String,
    client: Client,
    session: SharedSession,
    page_size: u32,
}

impl SubscriptionsClient {
    pub(crate) fn new(
        base_url: &str,
        client: Client,
        session: SharedSession,
        page_size: u32,
    ) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
            page_size,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/subscriptions{}", self.base_url, path)
    }

    fn context_id(&self) -> Result<i64, Error> {
        context_owner_id(&self.session).ok_or_else(|| Error::auth("no active session"))
    }

    /// Fetch one page of the owner context's subscriptions.
    pub async fn list(&self, page: u32) -> Result<Page<SubscriptionRecord>, Error> {
        let context_id = self.context_id()?;
        Fetch::get(&self.client, &self.endpoint(""))
            .query_pair("contextUserId", context_id)
            .query_pair("page", page)
            .query_pair("size", self.page_size)
            .execute::<Page<SubscriptionRecord>>()
            .await
    }

    /// Fetch every page and map the records to the in-memory shape.
    pub async fn list_all(&self) -> Result<Vec<Subscription>, Error> {
        let mut subscriptions = Vec::new();
        let mut page = 0;

        loop {
            let result = self.list(page).await?;
            for record in result.content {
                subscriptions.push(record.into_subscription()?);
            }
            page += 1;
            if page >= result.total_pages {
                break;
            }
        }

        Ok(subscriptions)
    }

    /// Create a subscription in the owner context. The backend assigns
    /// the id and returns the stored record.
    pub async fn create(&self, record: &SubscriptionRecord) -> Result<SubscriptionRecord, Error> {
        let context_id = self.context_id()?;
        Fetch::post(&self.client, &self.endpoint(""))
            .query_pair("contextUserId", context_id)
            .json(record)?
            .execute::<SubscriptionRecord>()
            .await
    }

    /// Replace a subscription.
    pub async fn update(
        &self,
        id: i64,
        record: &SubscriptionRecord,
    ) -> Result<SubscriptionRecord, Error> {
        let context_id = self.context_id()?;
        Fetch::put(&self.client, &self.endpoint(""))
            .query_pair("id", id)
            .query_pair("contextUserId", context_id)
            .json(record)?
            .execute::<SubscriptionRecord>()
            .await
    }

    /// Delete a subscription.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let context_id = self.context_id()?;
        Fetch::delete(&self.client, &self.endpoint(&format!("/{id}")))
            .query_pair("contextUserId", context_id)
            .execute_empty()
            .await
    }
}
