use crate::http_handler::http_client::HTTPClient;
use crate::persist::fallback_store::FallbackStore;
use crate::persist::token_store::TokenStore;
use crate::session::Session;
use std::path::Path;
use std::sync::Arc;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, the session state machine and the local
/// fallback booking list.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The session owning authentication state and the persisted token.
    session: Arc<Session>,
    /// The locally cached fallback booking records.
    fallback: Arc<FallbackStore>,
}

impl Keychain {
    /// Creates a new instance of `Keychain`.
    ///
    /// # Arguments
    /// - `url`: The base URL to initialize the HTTP client.
    /// - `data_dir`: Directory holding the persisted token and fallback list.
    pub fn new<P: AsRef<Path>>(url: &str, data_dir: P) -> Self {
        let client = Arc::new(HTTPClient::new(url));
        let session =
            Arc::new(Session::new(Arc::clone(&client), TokenStore::new(data_dir.as_ref())));
        let fallback = Arc::new(FallbackStore::new(data_dir.as_ref()));
        Self { client, session, fallback }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the session.
    pub fn session(&self) -> Arc<Session> { Arc::clone(&self.session) }

    /// Provides a cloned reference to the fallback booking store.
    pub fn fallback(&self) -> Arc<FallbackStore> { Arc::clone(&self.fallback) }
}
