//! tsuru-admin-client: HTTP client library for the tsuru API
//!
//! Resolves the configured target, attaches the auth token and maps error
//! statuses into [`ClientError::Api`].
//!
//! # Examples
//!
//! ```no_run
//! use tsuru_admin_client::{Form, HttpClient, Method};
//! use tsuru_admin_client::api::Machine;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:8080")?.with_token("abc123");
//!
//! // List machines
//! let machines: Vec<Machine> = client.get_list("/iaas/machines").await?;
//!
//! // Register a pool
//! let mut form = Form::new();
//! form.set("name", "pool1").set("public", "false");
//! client.send_form(Method::POST, "/pools", &form).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;

pub use error::{ClientError, Result};
pub use http::{Form, HttpClient, escape};
pub use reqwest::{Method, Response};
pub use tsuru_admin_api as api;
