pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_OWNER: &str = "Pratham";

/// Email configuration read from the environment.
///
/// Sender and recipient stay optional here: a server without them still
/// serves the site, and the contact route fails closed per request.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub api_key: Option<String>,
    pub api_url: String,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub owner: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            sender: None,
            recipient: None,
            owner: DEFAULT_OWNER.to_string(),
        }
    }
}

impl ContactSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            api_key: get("RESEND_API_KEY"),
            api_url: get("RESEND_API_URL").unwrap_or(defaults.api_url),
            sender: get("EMAIL_SENDER"),
            recipient: get("EMAIL_RECIPIENT"),
            owner: get("SITE_OWNER").unwrap_or(defaults.owner),
        }
    }

    /// Names of required variables that are not set.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("RESEND_API_KEY", self.api_key.is_none()),
            ("EMAIL_SENDER", self.sender.is_none()),
            ("EMAIL_RECIPIENT", self.recipient.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}
