//! The portfolio content model.

use serde::{Deserialize, Serialize};

/// A single project, rendered as one card.
///
/// All fields are required free-form text. Projects carry no identity
/// beyond their name and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    pub status: String,
    pub impact: String,
}

/// A dated entry in the activity timeline.
///
/// `date` is a free-form label such as "2026-02" and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub text: String,
}

/// The full content driving the page.
///
/// Constructed once at startup and never mutated afterwards; renderers
/// take it by shared reference. Empty sequences render as empty
/// sections rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub years_building: u32,
    pub focus_areas: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineEntry>,
    pub status_feed: Vec<String>,
}
