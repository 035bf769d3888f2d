use anyhow::{anyhow, bail, Context};
use std::env;

pub const DEFAULT_BOT_LOGIN: &str = "sqrthree";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub token: String,
    /// Events sent by this login are ignored so the bot never reacts to itself.
    pub bot_login: String,
    pub api_url: Option<String>,
    pub ip: String,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow!("Missing {} Environment Variable", key))
        };

        let port: u16 = match lookup("APP_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("Invalid APP_PORT {:?}", port))?,
            None => 3000,
        };

        let debug = match lookup("DEBUG").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => bail!("Invalid DEBUG {:?}, expected true/false/1/0", other),
        };

        Ok(Self {
            owner: required("GITHUB_OWNER")?,
            repo: required("GITHUB_REPO")?,
            token: required("GITHUB_TOKEN")?,
            bot_login: lookup("GITHUB_BOT_LOGIN")
                .filter(|login| !login.is_empty())
                .unwrap_or_else(|| DEFAULT_BOT_LOGIN.to_string()),
            api_url: lookup("GITHUB_API_URL").filter(|url| !url.is_empty()),
            ip: lookup("APP_IP").unwrap_or("0.0.0.0".to_string()),
            port,
            debug,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
