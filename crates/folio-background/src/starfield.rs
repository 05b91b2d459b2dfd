//! Drifting starfield animation (stateful).

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::rng::SimpleRng;

/// Number of stars on the surface, regardless of its size.
pub const STAR_COUNT: usize = 140;

/// Rows a star falls per step, before the depth factor.
pub const FALL_RATE: f32 = 0.18;

/// Where a star restarts after falling off the bottom edge.
pub const WRAP_RESET_Y: f32 = -4.0;

const DEPTH_MIN: f32 = 0.2;
const DEPTH_SPAN: f32 = 1.2;

/// A single particle in the starfield.
///
/// `z` is the depth factor in `[0.2, 1.4)`: nearer stars fall faster
/// and draw larger and brighter.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// The starfield engine.
///
/// Owns its surface dimensions and star collection. The application
/// loop calls [`step`](Self::step) once per drawn frame and
/// [`resize`](Self::resize) when the terminal changes size; there is no
/// hidden timer or self-rescheduling.
#[derive(Debug)]
pub struct Starfield {
    width: u16,
    height: u16,
    stars: Vec<Star>,
    rng: SimpleRng,
}

impl Starfield {
    /// Create a starfield for the given surface.
    ///
    /// A zero-area surface gets no stars and every operation becomes a
    /// no-op.
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        let mut field = Self {
            width,
            height,
            stars: Vec::new(),
            rng: SimpleRng::new(seed),
        };
        field.init_stars();
        field
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub(crate) fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    /// Re-measure the surface and regenerate the whole star collection.
    ///
    /// Old positions are deliberately discarded rather than scaled into
    /// the new bounds.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.init_stars();
    }

    fn init_stars(&mut self) {
        self.stars.clear();
        if self.width == 0 || self.height == 0 {
            return;
        }
        let w = self.width as f32;
        let h = self.height as f32;
        for _ in 0..STAR_COUNT {
            self.stars.push(Star {
                x: self.rng.next_f32() * w,
                y: self.rng.next_f32() * h,
                z: DEPTH_MIN + self.rng.next_f32() * DEPTH_SPAN,
            });
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Each star falls by `FALL_RATE * z`; a star past the bottom edge
    /// restarts just above the top at a freshly sampled column.
    pub fn step(&mut self) {
        let h = self.height as f32;
        let w = self.width as f32;
        for star in &mut self.stars {
            star.y += FALL_RATE * star.z;
            if star.y > h {
                star.y = WRAP_RESET_Y;
                star.x = self.rng.next_f32() * w;
            }
        }
    }

    /// Draw the starfield over the whole frame.
    pub fn render(&self, frame: &mut Frame) {
        if self.stars.is_empty() {
            return;
        }
        let area = frame.area();
        let width = self.width as usize;
        let height = self.height as usize;

        let mut cells: Vec<Option<(char, Color)>> = vec![None; width * height];
        for star in &self.stars {
            if star.y < 0.0 {
                continue;
            }
            let x = star.x as usize;
            let y = star.y as usize;
            if x < width && y < height {
                cells[y * width + x] = Some(star_glyph(star.z));
            }
        }

        let lines: Vec<Line> = (0..height)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| match cells[y * width + x] {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Glyph and color for a star at the given depth.
///
/// The depth factor stands in for the size and translucency of the
/// original square: far stars draw as a dim dot, near stars as a
/// bright sparkle in the pale ice blue of the field.
fn star_glyph(z: f32) -> (char, Color) {
    if z < 0.6 {
        ('·', Color::Rgb(70, 100, 120))
    } else if z < 1.0 {
        ('•', Color::Rgb(110, 155, 180))
    } else {
        ('✦', Color::Rgb(157, 220, 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_populates_star_count_within_bounds() {
        let field = Starfield::new(80, 24, 42);
        assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            assert!((0.0..80.0).contains(&star.x));
            assert!((0.0..24.0).contains(&star.y));
            assert!((0.2..1.4).contains(&star.z));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = Starfield::new(80, 24, 7);
        let b = Starfield::new(80, 24, 7);
        for (sa, sb) in a.stars().iter().zip(b.stars()) {
            assert_eq!(sa.x, sb.x);
            assert_eq!(sa.y, sb.y);
            assert_eq!(sa.z, sb.z);
        }
    }

    #[test]
    fn step_advances_by_depth_scaled_rate() {
        let mut field = Starfield::new(80, 24, 42);
        // Pin a star away from the bottom edge so it cannot wrap.
        field.stars_mut()[0].y = 1.0;
        let z = field.stars()[0].z;
        field.step();
        let y = field.stars()[0].y;
        assert!((y - (1.0 + FALL_RATE * z)).abs() < 1e-5);
    }

    #[test]
    fn star_past_bottom_wraps_with_fresh_column() {
        let mut field = Starfield::new(80, 24, 42);
        field.stars_mut()[0].y = 25.0;
        field.step();
        let star = &field.stars()[0];
        assert_eq!(star.y, WRAP_RESET_Y);
        assert!(star.y < 0.0);
        assert!((0.0..80.0).contains(&star.x));
    }

    #[test]
    fn resize_regenerates_in_new_bounds() {
        let mut field = Starfield::new(80, 24, 42);
        field.resize(10, 5);
        assert_eq!(field.width(), 10);
        assert_eq!(field.height(), 5);
        assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            assert!((0.0..10.0).contains(&star.x));
            assert!((0.0..5.0).contains(&star.y));
        }
    }

    #[test]
    fn zero_area_surface_is_a_no_op() {
        let mut field = Starfield::new(0, 24, 42);
        assert!(field.stars().is_empty());
        field.step();
        assert!(field.stars().is_empty());
    }
}
