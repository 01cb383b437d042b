//! uju: a decorative space tour for the terminal.
//!
//! An intro splash, then three scrollable pages rendered over animated
//! particle skies: the home banner, navigable fact sections, and a space
//! timeline.

mod content;
mod pages;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use uju_config::Config;
use uju_core::{Eased, SectionNavigator};
use uju_sky::{SkyState, SkyView};

use crate::pages::{PAGE_COUNT, PAGE_EXPLORE, PAGE_HOME, PAGE_TIMELINE, PageContext};

/// Event poll timeout; also the effective frame interval.
const FRAME_POLL: Duration = Duration::from_millis(16);

/// Page scroll animation duration.
const SCROLL_MS: u64 = 600;

/// Pointer smoothing duration.
const POINTER_MS: u64 = 500;

/// How close (in page units) the scroll must be for a page to count as
/// scrolled into view.
const IN_VIEW_MARGIN: f32 = 0.25;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);
    let result = App::new(config).run(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The welcome splash; dismissed on a fixed timer, not by input.
    Intro,
    /// The scrollable main document.
    Main { since_ms: u64 },
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Animation clock origin.
    started: Instant,
    phase: Phase,
    /// The four particle populations.
    sky: SkyState,
    /// Cyclic index over the fact sections.
    navigator: SectionNavigator,
    /// Scroll position in page units (0.0 = home, 2.0 = timeline).
    scroll: Eased,
    /// The page the scroll is heading toward.
    current_page: usize,
    /// Smoothed fractional pointer position for parallax.
    pointer_x: Eased,
    pointer_y: Eased,
    /// Last frame size, for mapping pointer events to fractions.
    last_size: (u16, u16),
    /// Animation clock of the last section navigation.
    section_changed_ms: u64,
    /// Set while the explore page is in view; cleared when it leaves.
    explore_revealed_ms: Option<u64>,
    /// Set once the timeline page first comes into view.
    timeline_revealed_ms: Option<u64>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let phase = if config.show_intro {
            Phase::Intro
        } else {
            Phase::Main { since_ms: 0 }
        };
        Self {
            running: false,
            sky: SkyState::new(config.meteor_cap),
            navigator: SectionNavigator::new(content::SECTIONS.len()),
            scroll: Eased::new(PAGE_HOME as f32, SCROLL_MS),
            current_page: PAGE_HOME,
            pointer_x: Eased::new(0.5, POINTER_MS),
            pointer_y: Eased::new(0.5, POINTER_MS),
            last_size: (0, 0),
            phase,
            config,
            started: Instant::now(),
            section_changed_ms: 0,
            explore_revealed_ms: None,
            timeline_revealed_ms: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.tick(self.elapsed_ms());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since startup; the single animation clock.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Per-frame state transitions.
    fn tick(&mut self, now_ms: u64) {
        if self.phase == Phase::Intro && now_ms >= self.config.intro_ms {
            self.phase = Phase::Main { since_ms: now_ms };
        }

        if matches!(self.phase, Phase::Main { .. }) {
            let position = self.scroll.value_at(now_ms);

            // Explore reveals while in view and resets when it leaves.
            if (position - PAGE_EXPLORE as f32).abs() < IN_VIEW_MARGIN {
                if self.explore_revealed_ms.is_none() {
                    self.explore_revealed_ms = Some(now_ms);
                }
            } else {
                self.explore_revealed_ms = None;
            }

            // The timeline reveals once and stays revealed.
            if (position - PAGE_TIMELINE as f32).abs() < IN_VIEW_MARGIN
                && self.timeline_revealed_ms.is_none()
            {
                self.timeline_revealed_ms = Some(now_ms);
            }
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.last_size = (area.width, area.height);

        let now = self.elapsed_ms();
        match self.phase {
            Phase::Intro => self.render_intro(frame, now),
            Phase::Main { since_ms } => self.render_main(frame, now, since_ms),
        }
    }

    /// The welcome splash: stars and a big banner.
    fn render_intro(&mut self, frame: &mut Frame, now_ms: u64) {
        self.sky
            .render(frame, SkyView::Intro, now_ms, self.config.animation);

        let banner: Vec<Line> = uju_fonts::build_banner("WELCOME!")
            .into_iter()
            .map(|row| Line::from(row).style(Style::new().white().bold()))
            .collect();

        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(uju_fonts::GLYPH_HEIGHT as u16),
            Constraint::Fill(1),
        ])
        .split(frame.area());
        frame.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            chunks[1],
        );
    }

    /// The scrollable main document over the page-appropriate sky.
    fn render_main(&mut self, frame: &mut Frame, now_ms: u64, since_ms: u64) {
        let area = frame.area();
        let position = self.scroll.value_at(now_ms);

        let view = if position < 0.5 {
            SkyView::Cosmos
        } else if position < 1.5 {
            SkyView::Explore
        } else {
            SkyView::Dark
        };
        self.sky.render(frame, view, now_ms, self.config.animation);

        let ctx = PageContext {
            width: area.width,
            height: area.height,
            now_ms,
            main_since_ms: since_ms,
            section: content::SECTIONS[self.navigator.index()],
            section_changed_ms: self.section_changed_ms.max(since_ms),
            explore_revealed_ms: self.explore_revealed_ms,
            timeline_revealed_ms: self.timeline_revealed_ms,
            parallax_x: self.pointer_x.value_at(now_ms) * 2.0 - 1.0,
            parallax_y: self.pointer_y.value_at(now_ms) * 2.0 - 1.0,
        };
        let document = pages::build_document(&ctx);
        let offset = (position * area.height as f32).round().max(0.0) as u16;
        frame.render_widget(Paragraph::new(document).scroll((offset, 0)), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let now = self.elapsed_ms();
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            // The intro dismisses on its own timer, not on input.
            _ if self.phase == Phase::Intro => {}
            (_, KeyCode::Right | KeyCode::Char('l')) => {
                self.navigator.advance();
                self.section_changed_ms = now;
            }
            (_, KeyCode::Left | KeyCode::Char('h')) => {
                self.navigator.retreat();
                self.section_changed_ms = now;
            }
            (_, KeyCode::Char('e') | KeyCode::Enter) => self.go_to_page(PAGE_EXPLORE, now),
            (_, KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown) => {
                self.go_to_page(self.current_page + 1, now);
            }
            (_, KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp) => {
                self.go_to_page(self.current_page.saturating_sub(1), now);
            }
            (_, KeyCode::Home | KeyCode::Char('g')) => self.go_to_page(PAGE_HOME, now),
            (_, KeyCode::End | KeyCode::Char('t')) => self.go_to_page(PAGE_TIMELINE, now),
            _ => {}
        }
    }

    /// Track pointer movement as eased fractional coordinates.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Moved {
            return;
        }
        let (width, height) = self.last_size;
        if width == 0 || height == 0 {
            return;
        }
        let now = self.elapsed_ms();
        self.pointer_x
            .set_target(mouse.column as f32 / width as f32, now);
        self.pointer_y
            .set_target(mouse.row as f32 / height as f32, now);
    }

    /// Smoothly scroll to a page.
    fn go_to_page(&mut self, page: usize, now_ms: u64) {
        let page = page.min(PAGE_COUNT - 1);
        self.current_page = page;
        self.scroll.set_target(page as f32, now_ms);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_intro_gives_way_to_main_on_schedule() {
        let mut app = app();
        app.tick(2999);
        assert_eq!(app.phase, Phase::Intro);
        app.tick(3000);
        assert_eq!(app.phase, Phase::Main { since_ms: 3000 });
    }

    #[test]
    fn test_intro_can_be_disabled() {
        let config = Config {
            show_intro: false,
            ..Config::default()
        };
        let app = App::new(config);
        assert_eq!(app.phase, Phase::Main { since_ms: 0 });
    }

    #[test]
    fn test_explore_reveal_resets_when_out_of_view() {
        let mut app = app();
        app.phase = Phase::Main { since_ms: 0 };

        app.go_to_page(PAGE_EXPLORE, 0);
        // Once the scroll settles on the explore page it is revealed.
        app.tick(SCROLL_MS + 10);
        assert!(app.explore_revealed_ms.is_some());

        // Scrolling away hides it again.
        app.go_to_page(PAGE_HOME, SCROLL_MS + 20);
        app.tick(2 * SCROLL_MS + 40);
        assert!(app.explore_revealed_ms.is_none());
    }

    #[test]
    fn test_timeline_reveal_is_sticky() {
        let mut app = app();
        app.phase = Phase::Main { since_ms: 0 };

        app.go_to_page(PAGE_TIMELINE, 0);
        app.tick(SCROLL_MS + 10);
        let revealed = app.timeline_revealed_ms;
        assert!(revealed.is_some());

        app.go_to_page(PAGE_HOME, SCROLL_MS + 20);
        app.tick(2 * SCROLL_MS + 40);
        assert_eq!(app.timeline_revealed_ms, revealed);
    }

    #[test]
    fn test_page_target_is_clamped() {
        let mut app = app();
        app.go_to_page(99, 0);
        assert_eq!(app.current_page, PAGE_COUNT - 1);
        assert_eq!(app.scroll.target(), (PAGE_COUNT - 1) as f32);
    }
}
