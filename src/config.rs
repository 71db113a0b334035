use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::classify::{Thresholds, NEW_BELOW, POPULAR_ABOVE};
use crate::render::{Renderer, DEFAULT_TITLE};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub popular_above: Option<u64>,
    #[serde(default)]
    pub new_below: Option<u64>,
    /// Base for relative video sources.
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Hosts video frames may embed from; `None` allows all.
    #[serde(default)]
    pub allowed_hosts: Option<Vec<String>>,
    /// Feed file rendered when none is given on the command line.
    #[serde(default)]
    pub feed: Option<PathBuf>,
}

impl FeedConfig {
    /// Explicit path, else `config.toml` in the platform config dir, else defaults.
    /// Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let mut cfg: FeedConfig = toml::from_str(&s)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        // Feed paths are relative to the config file.
        if let (Some(feed), Some(dir)) = (cfg.feed.as_mut(), path.parent()) {
            if feed.is_relative() { *feed = dir.join(&*feed); }
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    // Unparsable values are ignored.
    fn apply_env<F>(&mut self, var: F)
    where F: Fn(&str) -> Option<String> {
        if let Some(v) = var("MEDIAFEED_POPULAR_ABOVE").and_then(|s| s.trim().parse().ok()) { self.popular_above = Some(v); }
        if let Some(v) = var("MEDIAFEED_NEW_BELOW").and_then(|s| s.trim().parse().ok()) { self.new_below = Some(v); }
        if let Some(v) = var("MEDIAFEED_TITLE").filter(|s| !s.trim().is_empty()) { self.title = Some(v); }
    }

    pub fn validate(&self) -> Result<()> {
        let t = self.thresholds();
        if t.new_below > t.popular_above {
            bail!(
                "new_below ({}) must not exceed popular_above ({})",
                t.new_below,
                t.popular_above
            );
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            popular_above: self.popular_above.unwrap_or(POPULAR_ABOVE),
            new_below: self.new_below.unwrap_or(NEW_BELOW),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.thresholds(), self.title())
    }

    fn normalized_hosts(&self) -> Option<Vec<String>> {
        self.allowed_hosts.as_ref().map(|v|
            v.iter().map(|h| h.trim().to_ascii_lowercase()).filter(|h| !h.is_empty()).collect()
        )
    }

    /// Whether a video frame may embed `url`. Only absolute http(s) urls can match a list.
    pub fn embed_allowed(&self, url: &str) -> bool {
        match self.normalized_hosts() {
            None => true,
            Some(list) => {
                if list.is_empty() { return false; }
                let Ok(parsed) = Url::parse(url) else { return false; };
                match parsed.scheme() { "http" | "https" => {}, _ => return false }
                let Some(host) = parsed.host_str() else { return false; };
                let host = host.to_ascii_lowercase();
                list.iter().any(|allowed| {
                    let a = allowed.as_str();
                    if let Some(stripped) = a.strip_prefix("*.") {
                        host == stripped || host.ends_with(&format!(".{}", stripped))
                    } else { host == a }
                })
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "mediafeed", "mediafeed").map(|p| p.config_dir().join("config.toml"))
}
