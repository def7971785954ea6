use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line flags. Each one overrides the matching config file entry.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Terminal object browser for MinIO-style servers")]
pub struct Args {
    /// Server endpoint, e.g. http://localhost:9000
    #[arg(long, env = "MBROWSE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Access key used to log in
    #[arg(long, env = "MBROWSE_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// Secret key used to log in
    #[arg(long, env = "MBROWSE_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Directory downloads are written to
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Alternate config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file (defaults to mbrowse.log next to the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Persist the effective settings to the config file before starting
    #[arg(long)]
    pub save_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareExpiry {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Default for ShareExpiry {
    fn default() -> Self {
        Self {
            days: 5,
            hours: 0,
            minutes: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub share_expiry: ShareExpiry,
}

fn default_endpoint() -> String {
    "http://localhost:9000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: None,
            secret_key: None,
            download_dir: None,
            share_expiry: ShareExpiry::default(),
        }
    }
}

impl AppConfig {
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_key, &self.secret_key) {
            (Some(access), Some(secret)) if !access.is_empty() => {
                Some((access.as_str(), secret.as_str()))
            }
            _ => None,
        }
    }

    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub app_config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .context("Could not find home directory")?
            .join(".config")
            .join("mbrowse")
            .join("config.json"))
    }

    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        let app_config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?
        } else {
            AppConfig::default()
        };

        Ok(Self {
            config_path,
            app_config,
        })
    }

    /// Loads the config file named by `args` (or the default one) and layers
    /// the flags on top.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut manager = match &args.config {
            Some(path) => Self::load_from(path.clone())?,
            None => Self::new()?,
        };
        manager.apply_args(args);
        Ok(manager)
    }

    pub fn apply_args(&mut self, args: &Args) {
        let config = &mut self.app_config;
        if let Some(endpoint) = &args.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(access_key) = &args.access_key {
            config.access_key = Some(access_key.clone());
        }
        if let Some(secret_key) = &args.secret_key {
            config.secret_key = Some(secret_key.clone());
        }
        if let Some(dir) = &args.download_dir {
            config.download_dir = Some(dir.clone());
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_path(&self, args: &Args) -> PathBuf {
        args.log_file.clone().unwrap_or_else(|| {
            self.config_path
                .parent()
                .map(|dir| dir.join("mbrowse.log"))
                .unwrap_or_else(|| PathBuf::from("mbrowse.log"))
        })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.app_config)?;
        fs::write(&self.config_path, json)?;
        Ok(())
    }
}
