use std::fmt;

use base64::prelude::{BASE64_STANDARD, Engine as _};

/// Connection details for the issue tracker, held only for the process lifetime.
#[derive(Clone)]
pub struct Credentials {
    base_url: String,
    email: String,
    api_token: String,
}

impl Credentials {
    pub fn new(base_url: &str, email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Service root with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_header(&self) -> String {
        build_auth_header(&self.email, &self.api_token)
    }

    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    pub fn masked_token(&self) -> String {
        mask_secret(&self.api_token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &self.masked_token())
            .finish()
    }
}

pub fn build_auth_header(email: &str, api_token: &str) -> String {
    let credentials = format!("{email}:{api_token}");
    let encoded = BASE64_STANDARD.encode(credentials);
    format!("Basic {encoded}")
}

pub fn mask_secret(token: &str) -> String {
    let chars = token.chars().collect::<Vec<_>>();
    if chars.len() > 6 {
        let prefix = chars[..3].iter().collect::<String>();
        let suffix = chars[chars.len() - 3..].iter().collect::<String>();
        format!("{prefix}***{suffix}")
    } else if !chars.is_empty() {
        "***".to_string()
    } else {
        "<not set>".to_string()
    }
}
