//! Content rendering for the folio portfolio page.
//!
//! Pure functions that project the content model into styled text
//! fragments, and the [`Page`] structure the fragments are assigned
//! into. Nothing here touches the terminal; the binary lays the page
//! out over the starfield and scrolls it.
//!
//! Every function is synchronous and idempotent: equal inputs produce
//! equal fragments. Content fields are carried verbatim as span text
//! and never parsed as markup.

use folio_core::{PortfolioContent, Project, SectionId, TimelineEntry};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

/// A named section of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub title: Option<String>,
    pub body: Vec<Line<'static>>,
}

/// The rendered page: an ordered list of sections.
///
/// Sections are looked up by id; assignments into an absent section
/// are no-ops rather than failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    sections: Vec<Section>,
}

impl Page {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }
}

/// Assemble the full page from the content model.
///
/// The stats and footer sections start empty; [`render_stats`] and
/// [`render_footer_year`] fill them in, mirroring the startup sequence
/// of the page.
pub fn render_page(content: &PortfolioContent, accent: Color) -> Page {
    Page::new(vec![
        Section {
            id: SectionId::Hero,
            title: None,
            body: hero_lines(content, accent),
        },
        Section {
            id: SectionId::Stats,
            title: None,
            body: Vec::new(),
        },
        Section {
            id: SectionId::Projects,
            title: Some("Projects".into()),
            body: project_cards(&content.projects, accent),
        },
        Section {
            id: SectionId::Skills,
            title: Some("Skills".into()),
            body: skill_lines(&content.skills, accent),
        },
        Section {
            id: SectionId::Timeline,
            title: Some("Timeline".into()),
            body: timeline_items(&content.timeline, accent),
        },
        Section {
            id: SectionId::Footer,
            title: None,
            body: Vec::new(),
        },
    ])
}

fn hero_lines(content: &PortfolioContent, accent: Color) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(
        Span::styled("Portfolio", Style::new().fg(accent)).bold(),
    )];
    if !content.focus_areas.is_empty() {
        lines.push(Line::from(content.focus_areas.join("  ·  ")).dark_gray());
    }
    lines
}

/// One card per project, in input order.
pub fn project_cards(projects: &[Project], accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for project in projects {
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::new().fg(accent)),
            Span::styled(project.name.clone(), Style::new().fg(accent)).bold(),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::raw(project.summary.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::raw(project.status.clone()).dark_gray(),
            Span::raw("  ·  ").dark_gray(),
            Span::raw(project.impact.clone()).dark_gray(),
        ]));
        lines.push(Line::default());
    }
    lines
}

/// One chip span per skill on a single wrappable line.
///
/// Each chip's content is exactly the skill string; separators are
/// unstyled spans so chips can be counted by style.
pub fn skill_chips(skills: &[String], accent: Color) -> Line<'static> {
    let chip_style = Style::new().fg(accent).bg(Color::Rgb(24, 34, 44));
    let mut spans = Vec::new();
    for (i, skill) in skills.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(skill.clone(), chip_style));
    }
    Line::from(spans)
}

fn skill_lines(skills: &[String], accent: Color) -> Vec<Line<'static>> {
    if skills.is_empty() {
        return Vec::new();
    }
    vec![skill_chips(skills, accent)]
}

/// One timeline item per entry: date label plus text.
pub fn timeline_items(entries: &[TimelineEntry], accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(Line::from(
            Span::styled(entry.date.clone(), Style::new().fg(accent)).bold(),
        ));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::raw(entry.text.clone()),
        ]));
    }
    lines
}

/// The three derived stats, stringified: project count, years
/// building, focus-area count.
pub fn stat_values(content: &PortfolioContent) -> [String; 3] {
    [
        content.projects.len().to_string(),
        content.years_building.to_string(),
        content.focus_areas.len().to_string(),
    ]
}

/// Write the derived stats into the stats section.
///
/// A page without a stats section is left untouched.
pub fn render_stats(page: &mut Page, content: &PortfolioContent, accent: Color) {
    let Some(section) = page.section_mut(SectionId::Stats) else {
        return;
    };
    let [projects, years, focus] = stat_values(content);
    section.body = vec![Line::from(vec![
        Span::raw("Projects ").dark_gray(),
        Span::styled(projects, Style::new().fg(accent)).bold(),
        Span::raw("    Years building ").dark_gray(),
        Span::styled(years, Style::new().fg(accent)).bold(),
        Span::raw("    Focus areas ").dark_gray(),
        Span::styled(focus, Style::new().fg(accent)).bold(),
    ])];
}

/// Write the calendar year into the footer section.
///
/// Guarded the same way as the stats: absent section, no-op.
pub fn render_footer_year(page: &mut Page, year: i32) {
    let Some(section) = page.section_mut(SectionId::Footer) else {
        return;
    };
    section.body = vec![Line::from(format!("© {year}")).dark_gray()];
}

/// The marquee track: the status feed doubled and joined, so a window
/// sliding over one copy loops seamlessly into the other.
pub fn marquee_track(feed: &[String]) -> String {
    feed.iter()
        .chain(feed.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("  •  ")
}

/// Columns the marquee advances per second.
const MARQUEE_COLS_PER_SEC: u64 = 8;

/// The status-feed ticker, windowed by elapsed time.
///
/// Empty feed or zero width renders an empty line.
pub fn marquee_line(feed: &[String], elapsed_ms: u64, width: u16, accent: Color) -> Line<'static> {
    if feed.is_empty() || width == 0 {
        return Line::default();
    }
    let track: Vec<char> = format!("{}  •  ", marquee_track(feed)).chars().collect();
    let offset = (elapsed_ms * MARQUEE_COLS_PER_SEC / 1000) as usize % track.len();
    let window: String = (0..width as usize)
        .map(|i| track[(offset + i) % track.len()])
        .collect();
    Line::from(Span::styled(window, Style::new().fg(accent)))
}
