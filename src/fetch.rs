//! HTTP request plumbing shared by the auth, permissions and subscriptions clients

use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::error::Error;

/// Error body the backend attaches to non-2xx responses.
///
/// `code` is the structured rejection code display layers route on;
/// older deployments may send a bare message without one.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: String,
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method,
            headers,
            query_params: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add a single query parameter to the request
    pub fn query_pair<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.query_params.insert(key.to_string(), value.to_string());
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Add a plain text body to the request
    pub fn text(mut self, body: &str) -> Self {
        self.headers
            .insert("Content-Type", HeaderValue::from_static("text/plain"));
        self.body = Some(body.as_bytes().to_vec());
        self
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let mut url = Url::parse(&self.url)?;

        if !self.query_params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query_params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Execute the request and parse the response as JSON
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let req = self.build()?;
        debug!("{} {}", self.method, self.url);
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(decode_rejection(status.as_u16(), response).await);
        }

        let result = response.json::<T>().await?;
        Ok(result)
    }

    /// Execute the request and discard any response body
    pub async fn execute_empty(&self) -> Result<(), Error> {
        let req = self.build()?;
        debug!("{} {}", self.method, self.url);
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(decode_rejection(status.as_u16(), response).await);
        }

        Ok(())
    }
}

/// Turn a non-2xx response into an [`Error::Api`], preserving the backend's
/// structured code when the body carries one.
async fn decode_rejection(status: u16, response: reqwest::Response) -> Error {
    let text = match response.text().await {
        Ok(text) => text,
        Err(err) => return Error::Http(err),
    };

    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => {
            warn!("request rejected ({status}): {}", body.message);
            Error::Api {
                status,
                code: body.code,
                message: body.message,
            }
        }
        Err(_) => {
            warn!("request rejected ({status}): {text}");
            Error::Api {
                status,
                code: None,
                message: text,
            }
        }
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}
