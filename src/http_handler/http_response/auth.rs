use crate::http_handler::common::Role;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Body returned by the login and register endpoints: the bearer token plus
/// the essentials of the account it belongs to.
#[derive(serde::Deserialize, Debug)]
pub struct AuthResponse {
    token: String,
    email: String,
    name: String,
    role: Role,
}

impl SerdeJSONBodyHTTPResponseType for AuthResponse {}

impl AuthResponse {
    pub fn token(&self) -> &str { &self.token }
    pub fn email(&self) -> &str { &self.email }
    pub fn name(&self) -> &str { &self.name }
    pub fn role(&self) -> Role { self.role }
}
