//! One-way reveal tracking for sections scrolling into view.
//!
//! Sections start dimmed and switch to their full style the first time
//! enough of them is visible. The marker is one-way: scrolling a
//! section back out of view never un-reveals it.

use std::collections::HashSet;

use crate::SectionId;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Fraction of a section's rows currently inside the viewport.
///
/// The section occupies rows `[top, top + height)` in page space; the
/// viewport shows rows `[scroll, scroll + viewport)`. A zero-height
/// section is never visible.
pub fn visible_ratio(top: usize, height: usize, scroll: usize, viewport: usize) -> f32 {
    if height == 0 || viewport == 0 {
        return 0.0;
    }
    let section_end = top + height;
    let view_end = scroll + viewport;
    let overlap = section_end.min(view_end).saturating_sub(top.max(scroll));
    overlap as f32 / height as f32
}

/// Tracks which sections have been revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<SectionId>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility observation for a section.
    ///
    /// Marks the section revealed once its visible ratio reaches
    /// [`REVEAL_THRESHOLD`]; observations below the threshold (including
    /// zero) never remove the marker.
    pub fn observe(&mut self, id: SectionId, ratio: f32) {
        if ratio >= REVEAL_THRESHOLD {
            self.revealed.insert(id);
        }
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }
}
