// SPDX-License-Identifier: MPL-2.0
//! Site content: everything the brochure displays.
//!
//! A default description is embedded from `assets/content/site.toml`. A
//! `content.toml` placed in the config directory replaces it entirely. Lists
//! that are empty simply hide the matching section.

use crate::error::ContentError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

const BUNDLED_FILE: &str = "site.toml";
const OVERRIDE_FILE: &str = "content.toml";

/// Practice identity shown in the hero, about section and footer.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FirmInfo {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub phone_display: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
}

/// One carousel card.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Specialty {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One accordion panel of the blog screen.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    pub body: String,
    /// Whether the panel ends with a consultation call to action.
    #[serde(default)]
    pub read_more: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// Credibility badge.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Animated number of the results section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Counter {
    pub target: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Metric {
    pub value: String,
    pub label: String,
    /// Extra delay before this item pops in (ms).
    #[serde(default)]
    pub delay_ms: u64,
}

/// Case distribution bar.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub percent: f32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Option of the contact form's case type selector.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseType {
    pub value: String,
    pub label: String,
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteContent {
    #[serde(default)]
    pub firm: FirmInfo,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub counter: Option<Counter>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub bars: Vec<Bar>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub case_types: Vec<CaseType>,
}

impl SiteContent {
    /// Parses a content description.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent =
            toml::from_str(source).map_err(|err| ContentError::Malformed(err.to_string()))?;
        if content.specialties.is_empty() && content.articles.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(content)
    }

    /// Content embedded in the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        let file = ContentAsset::get(BUNDLED_FILE).ok_or(ContentError::MissingBundle)?;
        Self::from_toml_str(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Loads the override from `config_dir` when present, otherwise the
    /// bundled content.
    ///
    /// Returns the i18n key of a warning when something had to be skipped.
    pub fn load(config_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (bundled, mut warning) = match Self::bundled() {
            Ok(content) => (content, None),
            Err(err) => {
                tracing::error!(error = %err, "bundled content unusable");
                (Self::default(), Some(err.i18n_key().to_string()))
            }
        };

        let Some(path) = config_dir.map(|dir| dir.join(OVERRIDE_FILE)) else {
            return (bundled, warning);
        };
        if !path.exists() {
            return (bundled, warning);
        }

        match Self::load_from_path(&path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), "using content override");
                (content, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring content override");
                warning = Some(err.i18n_key().to_string());
                (bundled, warning)
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let source =
            fs::read_to_string(path).map_err(|err| ContentError::Malformed(err.to_string()))?;
        Self::from_toml_str(&source)
    }

    /// Human label of a case type value; unknown values are shown as-is.
    #[must_use]
    pub fn case_type_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.case_types
            .iter()
            .find(|case| case.value == value)
            .map_or(value, |case| case.label.as_str())
    }

    /// Label of a blog category id.
    #[must_use]
    pub fn category_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map_or(id, |category| category.label.as_str())
    }
}

/// Resolves an image file name against the media directory.
#[must_use]
pub fn image_path(media_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    media_dir.map(|dir| dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::bundled().expect("bundled content must parse");
        assert!(!content.specialties.is_empty());
        assert_eq!(content.articles.len(), 6);
        assert!(content.counter.is_some());
    }

    #[test]
    fn case_type_labels_follow_content() {
        let content = SiteContent::bundled().expect("bundled content must parse");
        assert_eq!(content.case_type_label("defesa-crm"), "Defesa Ética - CRM/CRO");
        assert_eq!(
            content.case_type_label("planos-saude"),
            "Ações contra Planos de Saúde"
        );
        assert_eq!(content.case_type_label("outro"), "Outro");
        assert_eq!(content.case_type_label("desconhecido"), "desconhecido");
    }

    #[test]
    fn empty_content_is_rejected() {
        let result = SiteContent::from_toml_str("[firm]\nname = \"X\"\n");
        assert!(matches!(result, Err(ContentError::Empty)));
    }

    #[test]
    fn malformed_content_is_reported() {
        let result = SiteContent::from_toml_str("[[specialties]\n");
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }

    #[test]
    fn valid_override_replaces_bundled_content() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join(OVERRIDE_FILE),
            "[[specialties]]\ntitle = \"Só uma\"\nsummary = \"Resumo\"\n",
        )
        .expect("write failed");

        let (content, warning) = SiteContent::load(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(content.specialties.len(), 1);
        assert!(content.articles.is_empty());
    }

    #[test]
    fn broken_override_falls_back_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(OVERRIDE_FILE), "not toml at all [").expect("write failed");

        let (content, warning) = SiteContent::load(Some(dir.path().to_path_buf()));

        assert_eq!(warning.as_deref(), Some("notification-content-malformed"));
        assert_eq!(content, SiteContent::bundled().expect("bundled"));
    }

    #[test]
    fn image_path_requires_media_dir() {
        assert_eq!(image_path(None, "a.png"), None);
        assert_eq!(
            image_path(Some(Path::new("/media")), "a.png"),
            Some(PathBuf::from("/media/a.png"))
        );
    }
}
