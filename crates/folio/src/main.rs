use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chrono::{Datelike, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_background::Starfield;
use folio_config::Config;
use folio_core::{ColorTheme, PortfolioContent, RevealTracker, SectionId, visible_ratio};
use folio_render::{Page, marquee_line, render_footer_year, render_page, render_stats};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widest the content column gets on large terminals.
const CONTENT_MAX_WIDTH: u16 = 76;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = folio_config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The content driving the page; never mutated after startup.
    content: PortfolioContent,
    /// Current accent color theme.
    theme: ColorTheme,
    /// The rendered page.
    page: Page,
    /// Ambient background animation.
    starfield: Starfield,
    /// One-way reveal state for sections scrolled into view.
    reveal: RevealTracker,
    /// Scroll offset into the page, in rows.
    scroll: u16,
    /// Start instant driving the marquee.
    started: Instant,
}

/// A section placed into page row space.
struct LaidSection {
    id: SectionId,
    top: usize,
    lines: Vec<Line<'static>>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let Config { theme, content } = config;
        let page = build_page(&content, theme);

        // Seed from system time; the starfield is sized on first draw.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u32)
            .unwrap_or(1);

        Self {
            running: false,
            content,
            theme,
            page,
            starfield: Starfield::new(0, 0, seed),
            reveal: RevealTracker::new(),
            scroll: 0,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let accent = self.theme.color();

        // Re-measure on the first frame and after terminal resizes.
        if area.width != self.starfield.width() || area.height != self.starfield.height() {
            self.starfield.resize(area.width, area.height);
        }
        self.starfield.step();
        self.starfield.render(frame);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Status marquee
            Constraint::Fill(1),   // Page
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let marquee = marquee_line(
            &self.content.status_feed,
            elapsed_ms,
            chunks[0].width,
            accent,
        );
        frame.render_widget(Paragraph::new(marquee), chunks[0]);

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(CONTENT_MAX_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(chunks[1]);

        let sections = self.layout_page(accent);
        let total_rows = sections
            .last()
            .map(|s| s.top + s.lines.len())
            .unwrap_or(0);
        let viewport = column.height as usize;

        let max_scroll = total_rows.saturating_sub(viewport);
        if self.scroll as usize > max_scroll {
            self.scroll = max_scroll as u16;
        }

        // Observe visibility first, then draw with the updated markers.
        for section in &sections {
            let ratio = visible_ratio(
                section.top,
                section.lines.len(),
                self.scroll as usize,
                viewport,
            );
            self.reveal.observe(section.id, ratio);
        }

        let mut lines = Vec::with_capacity(total_rows);
        for section in sections {
            if self.reveal.is_revealed(section.id) {
                lines.extend(section.lines);
            } else {
                lines.extend(section.lines.iter().map(dimmed));
            }
        }

        let body = Paragraph::new(lines).scroll((self.scroll, 0));
        frame.render_widget(body, column);

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "↑/↓".bold().fg(accent),
            " scroll  ".dark_gray(),
            "c".bold().fg(accent),
            " theme".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[2]);
    }

    /// Place the page's sections into row space: optional title line,
    /// body, one blank separator row.
    fn layout_page(&self, accent: Color) -> Vec<LaidSection> {
        let mut sections = Vec::new();
        let mut top = 0;
        for section in self.page.sections() {
            if section.title.is_none() && section.body.is_empty() {
                continue;
            }
            let mut lines = Vec::new();
            if let Some(title) = &section.title {
                lines.push(Line::from(
                    Span::styled(title.clone(), Style::new().fg(accent))
                        .bold()
                        .underlined(),
                ));
            }
            lines.extend(section.body.iter().cloned());
            lines.push(Line::default());

            let height = lines.len();
            sections.push(LaidSection {
                id: section.id,
                top,
                lines,
            });
            top += height;
        }
        sections
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so the starfield keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(width, height) => self.starfield.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll = self.scroll.saturating_sub(1),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll = self.scroll.saturating_add(1),
            (_, KeyCode::PageUp) => self.scroll = self.scroll.saturating_sub(10),
            (_, KeyCode::PageDown) => self.scroll = self.scroll.saturating_add(10),
            (_, KeyCode::Home) => self.scroll = 0,
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Cycle the accent theme and re-render the page with it.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
        self.page = build_page(&self.content, self.theme);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// One-shot startup rendering sequence: page, stats, footer year.
fn build_page(content: &PortfolioContent, theme: ColorTheme) -> Page {
    let accent = theme.color();
    let mut page = render_page(content, accent);
    render_stats(&mut page, content, accent);
    render_footer_year(&mut page, Local::now().year());
    page
}

/// Restyle a line for a not-yet-revealed section.
fn dimmed(line: &Line<'static>) -> Line<'static> {
    let spans: Vec<Span> = line
        .spans
        .iter()
        .map(|s| Span::styled(s.content.clone(), Style::new().fg(Color::Rgb(70, 80, 90))))
        .collect();
    Line::from(spans)
}
