//! Configuration loading for the folio page.
//!
//! Looks for `folio.toml` in the user config directory. When the file
//! is missing the built-in sample content is used, so the binary
//! always has a page to show. A `[content]` table in the file replaces
//! the sample wholesale; it is not merged field by field.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::{ColorTheme, PortfolioContent, Project, TimelineEntry};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ColorTheme,
    pub content: PortfolioContent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            content: sample_content(),
        }
    }
}

/// Path of the user config file, if a home directory can be resolved.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("folio.toml"))
}

/// Load the configuration, falling back to the built-in sample when no
/// config file exists.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// The built-in sample content.
pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        years_building: 2,
        focus_areas: ["AI Assistants", "Voice UX", "Automation"]
            .map(String::from)
            .to_vec(),
        skills: [
            "Python",
            "FastAPI",
            "Flet",
            "WebSockets",
            "Ollama",
            "Faster-Whisper",
            "SQLite",
            "GitHub Actions",
            "HTML/CSS/JS",
        ]
        .map(String::from)
        .to_vec(),
        projects: vec![
            Project {
                name: "Personal AI Assistant (Jarvis)".into(),
                summary: "Offline-first assistant with wake-word voice flow, memory, \
                          desktop UI, and local LLM responses."
                    .into(),
                status: "Active".into(),
                impact: "Daily personal productivity assistant".into(),
            },
            Project {
                name: "Desktop Voice Control Deck".into(),
                summary: "Custom Flet interface with live voice-state feedback so \
                          speaking timing is clear and reliable."
                    .into(),
                status: "Shipped".into(),
                impact: "Reduced command timing confusion".into(),
            },
            Project {
                name: "Memory + Task Engine".into(),
                summary: "Persistent notes, profile memory, and actionable task \
                          commands with local SQLite storage."
                    .into(),
                status: "Shipped".into(),
                impact: "Useful continuity across sessions".into(),
            },
        ],
        timeline: vec![
            TimelineEntry {
                date: "2026-02".into(),
                text: "Built wake-word session flow and improved barge-in handling.".into(),
            },
            TimelineEntry {
                date: "2026-02".into(),
                text: "Added desktop 'Speak now' and processing visual states.".into(),
            },
            TimelineEntry {
                date: "2026-02".into(),
                text: "Set up docs and backup workflow across GitHub.".into(),
            },
        ],
        status_feed: [
            "Deploy pipeline active",
            "Offline AI assistant in production",
            "Voice UX latency tuning in progress",
            "Automation roadmap execution",
            "GitHub Pages synced to main",
        ]
        .map(String::from)
        .to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_content_is_non_empty() {
        let content = sample_content();
        assert!(!content.focus_areas.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.timeline.is_empty());
        assert!(!content.status_feed.is_empty());
        assert!(content.years_building > 0);
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, ColorTheme::default());
        assert_eq!(config.content, sample_content());
    }

    #[test]
    fn theme_only_file_keeps_sample_content() {
        let config: Config = toml::from_str("theme = \"ember\"").unwrap();
        assert_eq!(config.theme, ColorTheme::Ember);
        assert_eq!(config.content, sample_content());
    }

    #[test]
    fn content_table_replaces_the_sample() {
        let raw = r#"
            [content]
            years_building = 5
            skills = ["Rust"]

            [[content.projects]]
            name = "Folio"
            summary = "Terminal portfolio page."
            status = "Active"
            impact = "This page"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.content.years_building, 5);
        assert_eq!(config.content.skills, vec!["Rust".to_string()]);
        assert_eq!(config.content.projects.len(), 1);
        // Unlisted collections default to empty, not to the sample.
        assert!(config.content.timeline.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let raw = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back.content, config.content);
        assert_eq!(back.theme, config.theme);
    }
}
