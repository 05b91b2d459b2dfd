//! Core types for the folio portfolio page.
//!
//! This crate holds the content model driving everything rendered on the
//! page, the section identifiers shared between the renderer and the
//! application shell, the accent color themes, and the one-way reveal
//! tracking for sections scrolling into view.

mod content;
mod reveal;
mod theme;

pub use content::{PortfolioContent, Project, TimelineEntry};
pub use reveal::{REVEAL_THRESHOLD, RevealTracker, visible_ratio};
pub use theme::ColorTheme;

/// Identifier for a named section of the page.
///
/// The renderer assigns fragments into sections by id; the application
/// shell observes them for the reveal effect. Lookups by id tolerate
/// absent sections rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Stats,
    Projects,
    Skills,
    Timeline,
    Footer,
}
