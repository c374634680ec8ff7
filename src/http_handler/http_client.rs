use tokio::sync::RwLock;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the InstaDrive backend.
/// It sets a fixed timeout, stores the bearer token of the current session
/// and allows easy reuse of the HTTP client infrastructure.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Bearer token attached to requests while a session is authenticated.
    bearer_token: RwLock<Option<String>>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// This client has a default request timeout of 10 seconds.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8080/api"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap(),
            base_url: String::from(base_url),
            bearer_token: RwLock::new(None),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Returns a clone of the current bearer token, if one is set.
    pub(crate) async fn bearer_token(&self) -> Option<String> {
        self.bearer_token.read().await.clone()
    }

    /// Replaces the bearer token attached to subsequent requests.
    pub(crate) async fn set_bearer_token(&self, token: &str) {
        *self.bearer_token.write().await = Some(String::from(token));
    }

    /// Removes the bearer token so subsequent requests go out unauthenticated.
    pub(crate) async fn clear_bearer_token(&self) {
        *self.bearer_token.write().await = None;
    }
}
