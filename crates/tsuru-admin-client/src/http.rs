//! HTTP client for the tsuru API

use std::borrow::Cow;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};

/// Ordered form body; `set` replaces every value of a key, `add` appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values of `key` with a single value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Append a value for `key`, keeping existing ones
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// First value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Percent-encode a user-supplied value for use as one path segment
#[must_use]
pub fn escape(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// HTTP client for communicating with the tsuru API server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// A target without a scheme is treated as plain `http`.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    ///
    /// # Example
    /// ```no_run
    /// use tsuru_admin_client::HttpClient;
    ///
    /// let client = HttpClient::new("http://localhost:8080")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let raw = base_url.as_ref().trim();
        let base_url = if raw.contains("://") {
            Url::parse(raw)?
        } else {
            Url::parse(&format!("http://{raw}"))?
        };
        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attach a token sent as `Authorization: bearer <token>`
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then(|| token.trim().to_string());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a full URL from a path, keeping any prefix in the target
    pub fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}")).map_err(ClientError::Url)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, "sending request");
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("bearer {token}"));
        }
        Ok(request)
    }

    /// Send a request and turn non-2xx statuses into `ClientError::Api`
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let status = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status,
                message: message.trim().to_string(),
            });
        }

        Ok(response)
    }

    /// Perform a GET request and decode a JSON array
    ///
    /// An empty body (or 204) decodes as an empty list.
    ///
    /// # Errors
    /// Returns an error if the request fails, the server returns an error
    /// status, or the body is not a JSON array of `T`.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self.execute(self.request(Method::GET, path)?).await?;
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send an `application/x-www-form-urlencoded` body
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error status.
    pub async fn send_form(&self, method: Method, path: &str, form: &Form) -> Result<Response> {
        let request = self.request(method, path)?.form(form.pairs());
        self.execute(request).await
    }

    /// Send a JSON body
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error status.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response> {
        let request = self.request(method, path)?.json(body);
        self.execute(request).await
    }

    /// Perform a DELETE request without a body
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error status.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path)?).await?;
        Ok(())
    }
}
