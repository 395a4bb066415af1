/*
[INPUT]:  API key and client options (timeout, debug, redirects)
[OUTPUT]: Configured reqwest client bound to one regional base URL
[POS]:    HTTP layer - request dispatcher
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url, redirect};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::http::error::{MailchimpError, Result};

/// Host shared by every regional endpoint
const API_HOST: &str = "api.mailchimp.com";
/// API version segment of the base URL
const API_VERSION: &str = "3.0";
/// Datacenter assumed when the API key carries no suffix
const DEFAULT_DATACENTER: &str = "us1";
/// Username half of the basic-auth pair; the API only reads the password
const BASIC_AUTH_USER: &str = "noname";
const USER_AGENT: &str = concat!("mailchimp-adapter/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full request timeout, connect included
    pub timeout: Duration,
    /// Emit verbose transport tracing for every round trip
    pub debug: bool,
    /// Follow HTTP redirects instead of returning them
    pub follow_redirects: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            follow_redirects: false,
        }
    }
}

/// Request dispatcher for the Mailchimp Marketing API
///
/// Resolves the regional base URL from the API key once at construction and
/// turns each [`call`](Self::call) into exactly one HTTP round trip. The
/// underlying `reqwest::Client` pools connections and is safe to share
/// across tasks.
#[derive(Debug)]
pub struct MailchimpClient {
    http_client: Client,
    base_url: Url,
    debug: bool,
}

impl MailchimpClient {
    /// Create a new client with default configuration
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        let base_url = regional_base_url(api_key)?;
        Self::build(api_key, config, base_url)
    }

    /// Create a client pointed at an alternate server, for tests
    pub fn with_config_and_base_url(
        api_key: &str,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        Self::build(api_key, config, base_url)
    }

    fn build(api_key: &str, config: ClientConfig, base_url: Url) -> Result<Self> {
        if api_key.is_empty() {
            return Err(MailchimpError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        let token = BASE64.encode(format!("{BASIC_AUTH_USER}:{api_key}"));
        let mut auth = HeaderValue::from_str(&format!("Basic {token}"))
            .map_err(|e| MailchimpError::Config(format!("API key is not header-safe: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let redirect_policy = if config.follow_redirects {
            redirect::Policy::limited(10)
        } else {
            redirect::Policy::none()
        };

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout)
            .redirect(redirect_policy)
            .build()
            .map_err(|e| MailchimpError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            debug: config.debug,
        })
    }

    /// The regional base URL every path is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one API round trip
    ///
    /// `params` serialize to a JSON body attached whenever they are
    /// non-empty, regardless of method. Success bodies come back as parsed
    /// JSON verbatim; an empty success body is `Value::Null`. A 4xx/5xx
    /// status maps to [`MailchimpError::Api`], a failed exchange to
    /// [`MailchimpError::Transport`]. Nothing is retried.
    pub async fn call<P>(&self, path: &str, params: &P, method: Method) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let params = serde_json::to_value(params)?;
        let url = self.base_url.join(path)?;
        let has_body = has_params(&params);

        if self.debug {
            debug!(method = %method, url = %url, has_body, "dispatching Mailchimp API request");
        }

        let mut builder = self.http_client.request(method, url);
        if has_body {
            builder = builder.json(&params);
        }

        let response = builder.send().await.map_err(|source| MailchimpError::Transport {
            path: path.to_string(),
            source,
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|source| MailchimpError::Transport {
            path: path.to_string(),
            source,
        })?;

        if self.debug {
            debug!(status = status.as_u16(), body_bytes = body.len(), path, "received Mailchimp API response");
        }

        if status.as_u16() >= 400 {
            return Err(MailchimpError::api(status, &body));
        }

        parse_body(path, &body)
    }
}

/// Everything after the first dash names the datacenter; `us1` when the
/// suffix is absent or empty.
fn datacenter(api_key: &str) -> &str {
    match api_key.split_once('-') {
        Some((_, dc)) if !dc.is_empty() => dc,
        _ => DEFAULT_DATACENTER,
    }
}

fn regional_base_url(api_key: &str) -> Result<Url> {
    let dc = datacenter(api_key);
    Ok(Url::parse(&format!("https://{dc}.{API_HOST}/{API_VERSION}/"))?)
}

/// An empty parameter set sends no body at all
fn has_params(params: &Value) -> bool {
    match params {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn parse_body(path: &str, body: &str) -> Result<Value> {
    // 204-style responses carry no body at all
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(|source| MailchimpError::InvalidResponseBody {
        path: path.to_string(),
        source,
    })
}
