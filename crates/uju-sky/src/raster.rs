//! Span-grid rasterization of particle populations.
//!
//! Particles live in fractional cell coordinates; each frame they are
//! painted into a [`CellGrid`] that becomes one full-frame `Paragraph`.
//! Later writes overwrite earlier ones, so callers draw layers in z-order.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use uju_core::{Particle, Rgb};

/// Terminal cells are roughly twice as tall as they are wide; vertical
/// distances are doubled when measuring circles.
const CELL_ASPECT: f32 = 2.0;

/// Characters for a filled dot, from faint to heavy.
const DOT_CHARS: &[char] = &['·', '*', '✦', '●'];

/// Particles below this opacity paint nothing.
const MIN_VISIBLE_OPACITY: f32 = 0.05;

/// A frame-sized grid of styled characters.
pub(crate) struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<(char, Rgb)>>,
}

impl CellGrid {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Write one cell; coordinates outside the grid are ignored.
    fn set(&mut self, x: i32, y: i32, ch: char, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = Some((ch, color));
    }

    #[cfg(test)]
    fn get(&self, x: u16, y: u16) -> Option<(char, Rgb)> {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Consume the grid into paragraph lines, blank cells as spaces.
    pub(crate) fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width as usize;
        let mut rows = self.cells.chunks(width);
        (0..self.height)
            .map(|_| {
                let row = rows.next().unwrap_or(&[]);
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(to_color(*color)))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Paint a star or spark as a single dot, heavier the larger it is.
pub(crate) fn draw_dot(grid: &mut CellGrid, p: &Particle) {
    if p.opacity < MIN_VISIBLE_OPACITY {
        return;
    }
    let idx = ((p.size / 0.9) as usize).min(DOT_CHARS.len() - 1);
    grid.set(
        p.x.round() as i32,
        p.y.round() as i32,
        DOT_CHARS[idx],
        p.color.dim(p.opacity),
    );
}

/// Paint a meteor as a streak drawn backward along its velocity vector,
/// length proportional to speed, alpha falling off toward the tail.
pub(crate) fn draw_streak(grid: &mut CellGrid, p: &Particle) {
    if p.opacity < MIN_VISIBLE_OPACITY {
        return;
    }
    let dx = p.speed_x * 5.0;
    let dy = p.speed_y * 5.0;
    let steps = dx.abs().max(dy.abs() * CELL_ASPECT).ceil().max(1.0) as i32;
    let ch = streak_char(p.speed_x, p.speed_y);

    for i in (0..=steps).rev() {
        let t = i as f32 / steps as f32;
        let x = (p.x - dx * t).round() as i32;
        let y = (p.y - dy * t).round() as i32;
        if i == 0 {
            // Bright head.
            grid.set(x, y, '✦', p.color.dim(p.opacity));
        } else {
            grid.set(x, y, ch, p.color.dim(p.opacity * (1.0 - t * 0.8)));
        }
    }
}

/// Trail character matching the direction of travel.
fn streak_char(speed_x: f32, speed_y: f32) -> char {
    if speed_x.abs() > 2.0 * speed_y.abs() {
        '─'
    } else if speed_y.abs() > 2.0 * speed_x.abs() {
        '│'
    } else if (speed_x > 0.0) == (speed_y > 0.0) {
        '╲'
    } else {
        '╱'
    }
}

/// Paint a nebula blob: a soft disc fading from its tint at the center to
/// nothing at radius `size`, kept dim so text stays readable above it.
pub(crate) fn draw_glow(grid: &mut CellGrid, p: &Particle) {
    let radius = p.size;
    if radius < 1.0 || p.opacity < MIN_VISIBLE_OPACITY {
        return;
    }
    let center_x = p.x.round() as i32;
    let center_y = p.y.round() as i32;
    let row_reach = (radius / CELL_ASPECT).ceil() as i32;
    let col_reach = radius.ceil() as i32;

    for row in -row_reach..=row_reach {
        for col in -col_reach..=col_reach {
            let dist = ((col as f32).powi(2) + (row as f32 * CELL_ASPECT).powi(2)).sqrt();
            let t = 1.0 - dist / radius;
            if t <= 0.12 {
                continue;
            }
            let ch = if t > 0.75 {
                '▒'
            } else if t > 0.45 {
                '░'
            } else {
                '·'
            };
            grid.set(
                center_x + col,
                center_y + row,
                ch,
                p.color.dim((0.12 + 0.30 * t) * p.opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, size: f32) -> Particle {
        Particle {
            x,
            y,
            size,
            speed_x: 0.5,
            speed_y: 1.0,
            opacity: 1.0,
            color: Rgb::WHITE,
        }
    }

    #[test]
    fn test_dot_lands_on_rounded_cell() {
        let mut grid = CellGrid::new(10, 5);
        draw_dot(&mut grid, &particle(3.6, 2.2, 0.5));
        assert!(grid.get(4, 2).is_some());
        assert!(grid.get(3, 2).is_none());
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut grid = CellGrid::new(10, 5);
        draw_dot(&mut grid, &particle(-3.0, 2.0, 0.5));
        draw_dot(&mut grid, &particle(40.0, 2.0, 0.5));
        assert!(grid.cells.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_faded_particles_paint_nothing() {
        let mut grid = CellGrid::new(10, 5);
        let mut p = particle(5.0, 2.0, 1.0);
        p.opacity = 0.0;
        draw_streak(&mut grid, &p);
        assert!(grid.cells.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_streak_head_is_brightest() {
        let mut grid = CellGrid::new(40, 20);
        let mut p = particle(20.0, 10.0, 1.0);
        p.speed_x = 1.0;
        p.speed_y = 1.0;
        draw_streak(&mut grid, &p);
        let (head_ch, head_color) = grid.get(20, 10).unwrap();
        assert_eq!(head_ch, '✦');
        let (_, tail_color) = grid.get(15, 5).unwrap();
        assert!(tail_color.0 < head_color.0);
    }

    #[test]
    fn test_glow_fades_with_distance_from_center() {
        let mut grid = CellGrid::new(60, 30);
        let blob = particle(30.0, 15.0, 12.0);
        draw_glow(&mut grid, &blob);
        let (_, center) = grid.get(30, 15).unwrap();
        let (_, rim) = grid.get(40, 15).unwrap();
        assert!(center.0 > rim.0);
        // Beyond the radius nothing is painted.
        assert!(grid.get(30 + 13, 15).is_none());
    }

    #[test]
    fn test_into_lines_covers_full_frame() {
        let grid = CellGrid::new(8, 3);
        let lines = grid.into_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans.len(), 8);
    }
}
