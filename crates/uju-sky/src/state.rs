//! Sky state: owns the particle populations and renders them each frame.

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{Frame, widgets::Paragraph};
use uju_core::{AnimationSpeed, Bounds, ParticleSystem};

use crate::effects;
use crate::raster::{CellGrid, draw_dot, draw_glow, draw_streak};

/// Which particle layers the current view wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyView {
    /// Intro splash: stars only.
    Intro,
    /// Home page: nebulas behind stars behind meteors.
    Cosmos,
    /// Explore page: foreground sparks only.
    Explore,
    /// No particle layers at all (timeline page).
    Dark,
}

/// Particle effect state for the whole application.
///
/// Each population owns its own array and is advanced only from the frame
/// loop, so there is no shared mutable state between effects. Populations
/// are rebuilt whenever the terminal dimensions change.
#[derive(Debug)]
pub struct SkyState {
    /// Drifting background stars.
    stars: Option<ParticleSystem>,
    /// Meteor streaks, spawned on their own timer.
    meteors: Option<ParticleSystem>,
    /// Large nebula glows.
    nebulas: Option<ParticleSystem>,
    /// Foreground sparks for the explore page.
    sparks: Option<ParticleSystem>,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
    /// Seed captured at initialization for randomness.
    init_seed: u64,
    /// Hard cap on live meteors.
    meteor_cap: usize,
}

impl SkyState {
    /// Create an empty sky; populations spawn on first render.
    pub fn new(meteor_cap: usize) -> Self {
        // Capture system time as seed for randomness.
        let init_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            stars: None,
            meteors: None,
            nebulas: None,
            sparks: None,
            last_width: 0,
            last_height: 0,
            init_seed,
            meteor_cap,
        }
    }

    /// Advance and render the layers the view asks for.
    ///
    /// A zero-area frame means the surface is not usable yet; the render is
    /// skipped silently rather than treated as an error.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        view: SkyView,
        elapsed_ms: u64,
        speed: AnimationSpeed,
    ) {
        if view == SkyView::Dark {
            return;
        }
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        if area.width != self.last_width || area.height != self.last_height {
            self.reinit(area.width, area.height);
        }

        let bounds = Bounds::new(area.width as f32, area.height as f32);
        let scale = speed.velocity_scale();
        let mut grid = CellGrid::new(area.width, area.height);

        match view {
            SkyView::Intro => {
                if let Some(stars) = &mut self.stars {
                    stars.update(elapsed_ms, bounds, scale);
                    for p in stars.particles() {
                        draw_dot(&mut grid, p);
                    }
                }
            }
            SkyView::Cosmos => {
                if let Some(nebulas) = &mut self.nebulas {
                    nebulas.update(elapsed_ms, bounds, scale);
                    for p in nebulas.particles() {
                        draw_glow(&mut grid, p);
                    }
                }
                if let Some(stars) = &mut self.stars {
                    stars.update(elapsed_ms, bounds, scale);
                    for p in stars.particles() {
                        draw_dot(&mut grid, p);
                    }
                }
                if let Some(meteors) = &mut self.meteors {
                    meteors.update(elapsed_ms, bounds, scale);
                    for p in meteors.particles() {
                        draw_streak(&mut grid, p);
                    }
                }
            }
            SkyView::Explore => {
                if let Some(sparks) = &mut self.sparks {
                    sparks.update(elapsed_ms, bounds, scale);
                    for p in sparks.particles() {
                        draw_dot(&mut grid, p);
                    }
                }
            }
            SkyView::Dark => {}
        }

        frame.render_widget(Paragraph::new(grid.into_lines()), area);
    }

    /// Rebuild every population for new dimensions.
    fn reinit(&mut self, width: u16, height: u16) {
        let bounds = Bounds::new(width as f32, height as f32);
        let seed = self.init_seed;
        self.stars = Some(ParticleSystem::new(effects::stars(bounds), bounds, seed));
        self.meteors = Some(ParticleSystem::new(
            effects::meteors(self.meteor_cap),
            bounds,
            seed.wrapping_add(1),
        ));
        self.nebulas = Some(ParticleSystem::new(
            effects::nebulas(bounds),
            bounds,
            seed.wrapping_add(2),
        ));
        self.sparks = Some(ParticleSystem::new(
            effects::sparks(bounds),
            bounds,
            seed.wrapping_add(3),
        ));
        self.last_width = width;
        self.last_height = height;
    }
}
