use serde::{Deserialize, Serialize};

/// The static login/password pair that guards every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub login: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// The well-known development pair. Used only when the operator
    /// explicitly opts in on the command line; deployments supply a
    /// credentials file instead.
    pub fn insecure_default() -> Self {
        Self::new("admin", "P4ssword")
    }

    /// Exact match on both halves of the pair.
    pub fn authorize(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }
}
