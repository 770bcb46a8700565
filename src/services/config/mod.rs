//! Optional TOML configuration for the festival page.
//!
//! Lookup order: the path in `SPARK_FEST_CONFIG`, then `spark-fest.toml` in
//! the platform config directory, then built-in defaults. Tick intervals are
//! deliberately not configurable.

use crate::models::carousel::ImageRef;
use crate::models::festival::{default_gallery, FestivalContent};
use crate::utils::date::resolve_local;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "SPARK_FEST_CONFIG";
pub const CONFIG_FILE_NAME: &str = "spark-fest.toml";
const DEFAULT_CAPTION: &str = "Event shot";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse festival config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown time zone '{0}'")]
    UnknownTimezone(String),
    #[error("countdown target {target} does not exist exactly once in {timezone}")]
    AmbiguousTarget {
        target: NaiveDateTime,
        timezone: String,
    },
    #[error("gallery needs at least one image")]
    EmptyGallery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalSection {
    pub name: String,
    pub tagline: String,
    pub venue: String,
}

impl Default for FestivalSection {
    fn default() -> Self {
        let content = FestivalContent::default();
        Self {
            name: content.name,
            tagline: content.tagline,
            venue: content.venue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSection {
    /// Wall-clock opening time in `timezone`
    pub target: NaiveDateTime,
    /// IANA zone name
    pub timezone: String,
}

impl Default for CountdownSection {
    fn default() -> Self {
        Self {
            target: NaiveDate::from_ymd_opt(2025, 3, 15)
                .and_then(|date| date.and_hms_opt(9, 0, 0))
                .expect("valid default festival date"),
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

/// One gallery entry: either a bare URI or a `{ uri, caption }` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryEntry {
    Uri(String),
    Captioned { uri: String, caption: String },
}

impl GalleryEntry {
    pub fn uri(&self) -> &str {
        match self {
            GalleryEntry::Uri(uri) | GalleryEntry::Captioned { uri, .. } => uri.trim(),
        }
    }

    /// Explicit caption, else one derived from the file name.
    pub fn caption(&self) -> String {
        match self {
            GalleryEntry::Captioned { caption, .. } if !caption.trim().is_empty() => {
                caption.trim().to_string()
            }
            _ => caption_from_uri(self.uri()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    pub images: Vec<GalleryEntry>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            images: default_gallery()
                .into_iter()
                .map(|image| GalleryEntry::Captioned {
                    uri: image.uri,
                    caption: image.caption,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalConfig {
    pub festival: FestivalSection,
    pub countdown: CountdownSection,
    pub gallery: GallerySection,
}

impl FestivalConfig {
    /// Parse and validate a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: FestivalConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.images.iter().all(|entry| entry.uri().is_empty()) {
            return Err(ConfigError::EmptyGallery);
        }
        self.target_instant().map(|_| ())
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.countdown
            .timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.countdown.timezone.clone()))
    }

    /// The countdown target as a UTC instant.
    pub fn target_instant(&self) -> Result<DateTime<Utc>, ConfigError> {
        let tz = self.timezone()?;
        resolve_local(self.countdown.target, tz).ok_or_else(|| ConfigError::AmbiguousTarget {
            target: self.countdown.target,
            timezone: self.countdown.timezone.clone(),
        })
    }

    pub fn gallery_images(&self) -> Vec<ImageRef> {
        self.gallery
            .images
            .iter()
            .filter(|entry| !entry.uri().is_empty())
            .map(|entry| ImageRef::new(entry.uri(), entry.caption()))
            .collect()
    }

    /// Page content with the configured festival name, tagline and venue.
    pub fn content(&self) -> FestivalContent {
        FestivalContent {
            name: self.festival.name.clone(),
            tagline: self.festival.tagline.clone(),
            venue: self.festival.venue.clone(),
            ..FestivalContent::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the first config found, or defaults when none exists or it is broken.
    pub fn load_or_default() -> Self {
        let Some(path) = resolve_config_path() else {
            log::info!("No festival config found; using built-in defaults");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded festival config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err:#}; using built-in defaults");
                Self::default()
            }
        }
    }
}

/// `file:///shots/robo-war_finals.jpg?w=800` becomes "Robo war finals".
fn caption_from_uri(uri: &str) -> String {
    let path = uri.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit('/').next().unwrap_or_default();
    let stem = match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    };
    let words: Vec<&str> = stem
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .collect();

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => DEFAULT_CAPTION.to_string(),
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("in", "SVCollege", "SparkFest")?;
    let path = dirs.config_dir().join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}
