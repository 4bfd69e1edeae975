use anyhow::{Context, Result};
use url::Url;

use crate::models::Credentials;

// Runtime settings for one fetch run: where the portal lives and who logs in.
#[derive(Debug, Clone)]
pub struct Config {
    pub login_url: Url,
    pub result_url: Url,
    pub credentials: Credentials,
}

impl Config {
    // Reads portal endpoints and credentials from the environment.
    pub fn from_env() -> Result<Self> {
        let login_url = env_url("PORTAL_LOGIN_URL")?;
        let result_url = env_url("PORTAL_RESULT_URL")?;
        let username = std::env::var("PORTAL_USERNAME")
            .context("PORTAL_USERNAME environment variable not found")?;
        let password = std::env::var("PORTAL_PASSWORD")
            .context("PORTAL_PASSWORD environment variable not found")?;

        Ok(Self {
            login_url,
            result_url,
            credentials: Credentials { username, password },
        })
    }
}

fn env_url(name: &str) -> Result<Url> {
    let raw = std::env::var(name)
        .with_context(|| format!("{} environment variable not found", name))?;
    Url::parse(&raw).with_context(|| format!("{} is not a valid URL", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_settings_from_environment() {
        std::env::set_var("PORTAL_LOGIN_URL", "https://portal.example.edu/Account/Login");
        std::env::set_var("PORTAL_RESULT_URL", "https://portal.example.edu/Students/Grades");
        std::env::set_var("PORTAL_USERNAME", "student@example.edu");
        std::env::set_var("PORTAL_PASSWORD", "hunter2");

        let config = Config::from_env().unwrap();
        assert_eq!(config.login_url.path(), "/Account/Login");
        assert_eq!(config.result_url.path(), "/Students/Grades");
        assert_eq!(config.credentials.username, "student@example.edu");
    }

    #[test]
    fn rejects_invalid_url() {
        std::env::set_var("PORTAL_BAD_URL_TEST", "not a url");
        assert!(env_url("PORTAL_BAD_URL_TEST").is_err());
        assert!(env_url("PORTAL_UNSET_URL_TEST").is_err());
    }
}
