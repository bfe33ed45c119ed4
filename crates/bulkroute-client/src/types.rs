use serde::Deserialize;

/// Production endpoint of the bulk route management API.
pub const DEFAULT_BASE_URL: &str = "https://api.pobox.com/v2/";

/// Account credentials for HTTP basic auth.
#[derive(Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account GUID.
    #[serde(default)]
    pub user: String,
    /// API key.
    #[serde(default)]
    pub pass: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self { user: user.into(), pass: pass.into() }
    }
}

// Never print the API key.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("user", &self.user).field("pass", &"***").finish()
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            timeout_secs: 60,
        }
    }
}
