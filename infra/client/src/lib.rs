//! # Client
//!
//! Thin `reqwest` wrapper for the dashboard backend. Every call is a single
//! request: no retries, no local timeout unless `api.timeout_seconds` is set,
//! and every failure is mapped to a [`ClientError`] that can produce a
//! user-facing sentence through [`ClientError::user_message`].
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), depot_client::ClientError> {
//! use depot_client::ApiClient;
//! use depot_domain::config::ApiConfig;
//! use depot_domain::models::Truck;
//! use depot_kernel::range::DateRange;
//!
//! let client = ApiClient::new(&ApiConfig::default())?;
//! let today = chrono::Local::now().date_naive();
//! let trucks: Vec<Truck> = client.list_by_range("truck", &DateRange::last_days(today, 1)).await?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod message;

pub use crate::error::{ClientError, ClientErrorExt};
pub use crate::message::extract_error_message;

use chrono::{Local, TimeZone};
use depot_domain::config::ApiConfig;
use depot_kernel::range::DateRange;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// Shared HTTP client bound to the backend base URL. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client from the `[api]` configuration section.
    ///
    /// # Errors
    /// [`ClientError::Url`] when `base_url` does not parse, [`ClientError::Transport`]
    /// when the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = normalize_base(&config.base_url).context("api.base_url")?;

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build().context("Building HTTP client")?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a path relative to the base (`"truck/available"`).
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path.trim_start_matches('/')).context(format!("Joining '{path}'"))
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, path)?;
        self.send_json(path, request).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path)?.query(query);
        self.send_json(path, request).await
    }

    /// `GET path?startDate=..&endDate=..` covering whole local days.
    pub async fn list_by_range<T>(&self, path: &str, range: &DateRange) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        self.list_by_range_in(path, range, &Local).await
    }

    /// [`Self::list_by_range`] with day boundaries taken in `tz`.
    pub async fn list_by_range_in<T, Tz>(
        &self,
        path: &str,
        range: &DateRange,
        tz: &Tz,
    ) -> Result<Vec<T>, ClientError>
    where
        T: DeserializeOwned,
        Tz: TimeZone,
    {
        let query = range.query_params(tz);
        self.get_with_query(path, &query).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.send_json(path, request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body);
        self.send_json(path, request).await
    }

    pub async fn put_with_query<B, Q, T>(
        &self,
        path: &str,
        body: &B,
        query: &Q,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.query(query).json(body);
        self.send_json(path, request).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PATCH, path)?.json(body);
        self.send_json(path, request).await
    }

    /// `PATCH` without a body, for toggles.
    pub async fn patch_empty<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::PATCH, path)?;
        self.send_json(path, request).await
    }

    /// `DELETE`; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, path)?;
        self.send(path, request).await.map(drop)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "API request");
        Ok(self.http.request(method, url))
    }

    async fn send_json<T>(&self, path: &str, request: RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(path, request).await?;
        let body = response.bytes().await.context(format!("Reading response of '{path}'"))?;
        serde_json::from_slice::<T>(&body).context(format!("Decoding response of '{path}'"))
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|source| {
            error!(path, error = %source, "API request failed without a response");
            ClientError::Transport { source, context: Some(format!("Sending '{path}'").into()) }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status.as_u16(), &body);
        warn!(path, status = status.as_u16(), %message, "API request rejected");
        Err(ClientError::Api { status: status.as_u16(), message, context: Some(path.to_owned().into()) })
    }
}

/// Parses the base URL and makes sure it ends with `/` so relative joins keep its path.
fn normalize_base(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') { Url::parse(trimmed) } else { Url::parse(&format!("{trimmed}/")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig { base_url: base.to_owned(), timeout_seconds: Some(5) }).unwrap()
    }

    #[test]
    fn base_path_is_kept_when_joining() {
        let api = client("http://localhost:5000/api");
        assert_eq!(api.base_url().as_str(), "http://localhost:5000/api/");
        assert_eq!(api.endpoint("truck").unwrap().as_str(), "http://localhost:5000/api/truck");
        assert_eq!(
            api.endpoint("/driver/toggle-status/d-1").unwrap().as_str(),
            "http://localhost:5000/api/driver/toggle-status/d-1"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new(&ApiConfig { base_url: "not a url".to_owned(), timeout_seconds: None })
            .unwrap_err();
        assert!(matches!(err, ClientError::Url { context: Some(_), .. }));
    }
}
