//! Backend Command Wrappers
//!
//! HTTP bindings to the storefront API, organized by domain.

mod admin;
mod cart;

use gloo_net::http::{RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::config::{AppConfig, Credentials};
use crate::error::{SyncError, SyncResult};
use crate::models::ProductId;

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_segment(id: &ProductId) -> String {
    utf8_percent_encode(id.as_str(), PATH_SEGMENT).to_string()
}

/// `application/json` or any `+json` media type
fn is_json(content_type: Option<&str>) -> bool {
    let Some(ct) = content_type else { return false };
    let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// Per-page API handle
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            credentials: config.credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        gloo_net::http::Request::get(&self.url(path))
            .credentials(self.credentials.to_web())
            .header("Accept", "application/json")
    }

    fn post(&self, path: &str) -> RequestBuilder {
        gloo_net::http::Request::post(&self.url(path))
            .credentials(self.credentials.to_web())
            .header("Accept", "application/json")
    }
}

/// Reject non-2xx and non-JSON responses before decoding the body
async fn read_json<T: DeserializeOwned>(resp: Response) -> SyncResult<T> {
    let status = resp.status();
    let content_type = resp.headers().get("content-type");
    if !resp.ok() || !is_json(content_type.as_deref()) {
        return Err(SyncError::InvalidResponse {
            status,
            content_type,
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json() {
        assert!(is_json(Some("application/json")));
        assert!(is_json(Some("application/json; charset=utf-8")));
        assert!(is_json(Some("application/problem+json")));
        assert!(!is_json(Some("text/html; charset=utf-8")));
        assert!(!is_json(None));
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment(&ProductId::from(42)), "42");
        assert_eq!(encode_segment(&ProductId::new("a/b c").unwrap()), "a%2Fb%20c");
    }

    #[test]
    fn test_client_url_uses_base() {
        let config = AppConfig {
            api_base: "https://shop.example".into(),
            ..Default::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url(cart::CART_COUNT_PATH), "https://shop.example/api/cart_count");
    }
}
