//! Page composition.
//!
//! The main view is a virtual column of three pages (home, explore,
//! timeline), each exactly one screen tall, built as one list of lines and
//! rendered as a single scrolled `Paragraph` over the particle layers.
//! Only cells with text overwrite the sky behind them.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use uju_core::{Rgb, Section};

use crate::content::TIMELINE;

/// Pages in scroll order.
pub const PAGE_HOME: usize = 0;
pub const PAGE_EXPLORE: usize = 1;
pub const PAGE_TIMELINE: usize = 2;
pub const PAGE_COUNT: usize = 3;

/// Milliseconds between banner letters popping in.
const LETTER_STAGGER_MS: u64 = 150;

/// Explore hint fade: 2 s delay, 1 s fade.
const HINT_DELAY_MS: u64 = 2000;
const HINT_FADE_MS: u64 = 1000;

/// Section title fade duration on reveal or navigation.
const TITLE_FADE_MS: u64 = 800;

/// Facts fade in staggered: `200 + index * 200` ms delay, 600 ms fade.
const FACT_BASE_DELAY_MS: u64 = 200;
const FACT_STAGGER_MS: u64 = 200;
const FACT_FADE_MS: u64 = 600;

/// Timeline entries: `index * 200` ms delay, 800 ms slide-in.
const ENTRY_STAGGER_MS: u64 = 200;
const ENTRY_FADE_MS: u64 = 800;

/// Columns an unrevealed timeline entry is offset to the left of center.
const ENTRY_SLIDE_COLS: f32 = 8.0;

const TITLE_COLOR: Rgb = Rgb(255, 255, 255);
const FACT_COLOR: Rgb = Rgb(220, 220, 235);
const HINT_COLOR: Rgb = Rgb(150, 150, 170);

/// Everything the document builder needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub width: u16,
    pub height: u16,
    /// Animation clock.
    pub now_ms: u64,
    /// When the main view appeared (end of intro).
    pub main_since_ms: u64,
    /// The section currently selected by the navigator.
    pub section: Section,
    /// Last section navigation (or main view start, whichever is later).
    pub section_changed_ms: u64,
    /// Set while the explore page is scrolled into view.
    pub explore_revealed_ms: Option<u64>,
    /// Set once the timeline page first scrolls into view.
    pub timeline_revealed_ms: Option<u64>,
    /// Eased pointer position mapped to -1.0..1.0.
    pub parallax_x: f32,
    pub parallax_y: f32,
}

/// Build the full document: three pages of exactly `height` lines each.
pub fn build_document(ctx: &PageContext) -> Vec<Line<'static>> {
    let height = ctx.height as usize;
    let mut lines = Vec::with_capacity(height * PAGE_COUNT);
    lines.extend(fit(home_page(ctx), height));
    lines.extend(fit(explore_page(ctx), height));
    lines.extend(fit(timeline_page(ctx), height));
    lines
}

/// Home: the staggered SPACE banner with pointer parallax, plus hints.
fn home_page(ctx: &PageContext) -> Vec<Line<'static>> {
    let elapsed = ctx.now_ms.saturating_sub(ctx.main_since_ms);
    let visible_letters = (elapsed / LETTER_STAGGER_MS) as usize + 1;
    let banner = uju_fonts::build_banner_masked("SPACE", visible_letters);
    let banner_width = banner.first().map(|l| l.chars().count()).unwrap_or(0);

    let height = ctx.height as usize;
    let body_rows = uju_fonts::GLYPH_HEIGHT + 4;
    let shift_y = ctx.parallax_y.round() as isize;
    let top_pad = ((height.saturating_sub(body_rows) / 2) as isize + shift_y).max(0) as usize;

    let shift_x = (ctx.parallax_x * 3.0).round() as isize;
    let left_pad =
        ((ctx.width as usize).saturating_sub(banner_width) as isize / 2 + shift_x).max(0) as usize;

    let mut lines = blank_lines(top_pad);
    let banner_style = Style::new()
        .fg(color(TITLE_COLOR))
        .add_modifier(Modifier::BOLD);
    for row in banner {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(left_pad)),
            Span::styled(row, banner_style),
        ]));
    }

    lines.extend(blank_lines(2));
    let hint_alpha = reveal_alpha(ctx.now_ms, ctx.main_since_ms, HINT_DELAY_MS, HINT_FADE_MS);
    lines.push(centered(
        ctx.width,
        "press e to explore".to_string(),
        fade(TITLE_COLOR, hint_alpha),
    ));
    lines.push(Line::default());
    lines.push(centered(
        ctx.width,
        "q quit  |  up/down pages  |  left/right sections".to_string(),
        fade(HINT_COLOR, 1.0),
    ));
    lines
}

/// Explore: the current section, hidden unless scrolled into view.
fn explore_page(ctx: &PageContext) -> Vec<Line<'static>> {
    let Some(revealed_ms) = ctx.explore_revealed_ms else {
        // Out of view: the page rests in its hidden state.
        return Vec::new();
    };
    let start = revealed_ms.max(ctx.section_changed_ms);
    let facts = ctx.section.facts;

    let height = ctx.height as usize;
    let body_rows = facts.len() + 6;
    let mut lines = blank_lines(height.saturating_sub(body_rows) / 2);

    let title_alpha = reveal_alpha(ctx.now_ms, start, 0, TITLE_FADE_MS);
    lines.push(centered(
        ctx.width,
        ctx.section.title.to_string(),
        fade(TITLE_COLOR, title_alpha).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());

    for (index, fact) in facts.iter().enumerate() {
        let delay = FACT_BASE_DELAY_MS + index as u64 * FACT_STAGGER_MS;
        let alpha = reveal_alpha(ctx.now_ms, start, delay, FACT_FADE_MS);
        lines.push(centered(
            ctx.width,
            (*fact).to_string(),
            fade(FACT_COLOR, alpha),
        ));
    }

    lines.push(Line::default());
    lines.push(centered(
        ctx.width,
        "< left    switch section    right >".to_string(),
        fade(HINT_COLOR, title_alpha),
    ));
    lines
}

/// Timeline: reveals once, entries sliding in left to right.
fn timeline_page(ctx: &PageContext) -> Vec<Line<'static>> {
    let Some(revealed_ms) = ctx.timeline_revealed_ms else {
        return Vec::new();
    };

    let height = ctx.height as usize;
    let body_rows = TIMELINE.len() * 2 + 1;
    let mut lines = blank_lines(height.saturating_sub(body_rows) / 2);

    let heading_alpha = reveal_alpha(ctx.now_ms, revealed_ms, 0, ENTRY_FADE_MS);
    lines.push(centered(
        ctx.width,
        "Space Timeline".to_string(),
        fade(TITLE_COLOR, heading_alpha).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());

    for (index, entry) in TIMELINE.iter().enumerate() {
        let delay = index as u64 * ENTRY_STAGGER_MS;
        let alpha = reveal_alpha(ctx.now_ms, revealed_ms, delay, ENTRY_FADE_MS);
        let slide = ((1.0 - alpha) * ENTRY_SLIDE_COLS) as usize;

        let text = format!("{}  {}", entry.year, entry.event);
        let text_width = text.chars().count();
        let pad = ((ctx.width as usize).saturating_sub(text_width) / 2).saturating_sub(slide);
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(entry.year.to_string(), fade(TITLE_COLOR, alpha).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(entry.event.to_string(), fade(FACT_COLOR, alpha)),
        ]));
        if index + 1 < TIMELINE.len() {
            lines.push(Line::default());
        }
    }
    lines
}

/// Pad or truncate a page to exactly `height` lines.
fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.truncate(height);
    while lines.len() < height {
        lines.push(Line::default());
    }
    lines
}

fn blank_lines(count: usize) -> Vec<Line<'static>> {
    vec![Line::default(); count]
}

/// A line centered by explicit left padding, so the sky shows through
/// everywhere the text is not.
fn centered(width: u16, text: String, style: Style) -> Line<'static> {
    let text_width = text.chars().count();
    let pad = (width as usize).saturating_sub(text_width) / 2;
    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
}

/// Fade progress for something that starts `delay_ms` after `start_ms` and
/// ramps over `duration_ms`. Returns 0.0 before the delay, 1.0 when done.
fn reveal_alpha(now_ms: u64, start_ms: u64, delay_ms: u64, duration_ms: u64) -> f32 {
    let begin = start_ms.saturating_add(delay_ms);
    if now_ms <= begin {
        return 0.0;
    }
    if duration_ms == 0 {
        return 1.0;
    }
    ((now_ms - begin) as f32 / duration_ms as f32).min(1.0)
}

/// Style a color at the given opacity against the black background.
fn fade(base: Rgb, alpha: f32) -> Style {
    Style::new().fg(color(base.dim(alpha)))
}

fn color(rgb: Rgb) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(rgb.0, rgb.1, rgb.2)
}
