//! Environment-driven configuration.
//!
//! Values come from the process environment, after `.env` has been loaded by
//! the binary. Every setting has a default so a bare `cargo run` works.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_X_TOKEN: &str = "fake-super-secret-token";
pub const DEFAULT_X_KEY: &str = "fake-super-secret-key";

/// Cost bounds accepted by bcrypt
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which demo API the process serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoApp {
    /// Shared extractors, cookies, header guards, redirects, file responses
    Hello,
    /// Body, query and path validation for a person model
    People,
    /// Users and tweets persisted to JSON files
    Twitter,
}

impl FromStr for DemoApp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(DemoApp::Hello),
            "people" => Ok(DemoApp::People),
            "twitter" => Ok(DemoApp::Twitter),
            other => Err(format!(
                "unknown demo '{}', expected hello, people or twitter",
                other
            )),
        }
    }
}

impl fmt::Display for DemoApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoApp::Hello => write!(f, "hello"),
            DemoApp::People => write!(f, "people"),
            DemoApp::Twitter => write!(f, "twitter"),
        }
    }
}

/// Header values the decorated hello endpoint demands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSecrets {
    pub x_token: String,
    pub x_key: String,
}

impl Default for HeaderSecrets {
    fn default() -> Self {
        Self {
            x_token: DEFAULT_X_TOKEN.to_string(),
            x_key: DEFAULT_X_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub demo: DemoApp,
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding `users.json` and `tweets.json`
    pub data_dir: PathBuf,
    /// Directory holding `cat.jpg`
    pub images_dir: PathBuf,
    pub secrets: HeaderSecrets,
    pub bcrypt_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoApp::Twitter,
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            data_dir: PathBuf::from("."),
            images_dir: PathBuf::from("images"),
            secrets: HeaderSecrets::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Self {
            demo: parse_or(&lookup, "DEMO_APP", defaults.demo)?,
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            images_dir: lookup("IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            secrets: HeaderSecrets {
                x_token: lookup("X_TOKEN").unwrap_or(defaults.secrets.x_token),
                x_key: lookup("X_KEY").unwrap_or(defaults.secrets.x_key),
            },
            bcrypt_cost: parse_bcrypt_cost(&lookup, defaults.bcrypt_cost)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn tweets_file(&self) -> PathBuf {
        self.data_dir.join("tweets.json")
    }

    pub fn cat_picture(&self) -> PathBuf {
        self.images_dir.join("cat.jpg")
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_bcrypt_cost<F>(lookup: &F, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cost: u32 = parse_or(lookup, "BCRYPT_COST", default)?;
    if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        Ok(cost)
    } else {
        Err(ConfigError::Invalid {
            key: "BCRYPT_COST",
            value: cost.to_string(),
            reason: format!(
                "must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            ),
        })
    }
}
