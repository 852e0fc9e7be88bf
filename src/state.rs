//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;

/// Credentials accepted by the basic-auth middleware on write endpoints.
#[derive(Clone)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Constructed once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, credentials: BasicCredentials) -> Self {
        Self {
            url_service,
            credentials: Arc::new(credentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_match() {
        let creds = BasicCredentials::new("admin", "secret");

        assert!(creds.matches("admin", Some("secret")));
        assert!(!creds.matches("admin", Some("wrong")));
        assert!(!creds.matches("admin", None));
        assert!(!creds.matches("other", Some("secret")));
    }

    #[test]
    fn test_credentials_debug_masks_password() {
        let creds = BasicCredentials::new("admin", "secret");
        let rendered = format!("{:?}", creds);

        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("secret"));
    }
}
