pub const LOCAL_API_URL: &str = "http://localhost:3000";
pub const PRODUCTION_API_URL: &str = "https://filmbox-backend-production.up.railway.app";

const IMAGE_PROXY_PATH: &str = "/api/image/w500";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(PRODUCTION_API_URL)
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Local backend when the page is served from this machine, the
    /// production backend otherwise.
    pub fn for_hostname(hostname: &str) -> Self {
        match hostname {
            "localhost" | "127.0.0.1" => Self::new(LOCAL_API_URL),
            _ => Self::new(PRODUCTION_API_URL),
        }
    }

    /// Explicit base URL when given and non-blank, otherwise production.
    pub fn from_override(api_base: Option<&str>) -> Self {
        match api_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::default(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Prefix for proxied poster and backdrop images.
    pub fn image_base(&self) -> String {
        self.url(IMAGE_PROXY_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_selects_backend() {
        assert_eq!(ClientConfig::for_hostname("localhost").api_base(), LOCAL_API_URL);
        assert_eq!(ClientConfig::for_hostname("127.0.0.1").api_base(), LOCAL_API_URL);
        assert_eq!(
            ClientConfig::for_hostname("filmbox.example.com").api_base(),
            PRODUCTION_API_URL
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://127.0.0.1:9000/");
        assert_eq!(config.url("/api/orders"), "http://127.0.0.1:9000/api/orders");
        assert_eq!(config.image_base(), "http://127.0.0.1:9000/api/image/w500");
    }

    #[test]
    fn blank_override_uses_production() {
        assert_eq!(ClientConfig::from_override(Some("  ")), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_override(Some("http://localhost:3000")).api_base(),
            LOCAL_API_URL
        );
    }
}
