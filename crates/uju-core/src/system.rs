//! The particle population engine.
//!
//! A [`ParticleSystem`] owns one population and advances it one frame at a
//! time: timed spawning, position updates, the boundary policy, opacity
//! decay, and culling. Every sky effect is an instance of this engine with
//! a different [`EffectConfig`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::particle::{
    BoundaryPolicy, EffectConfig, OpacityPolicy, Particle, Rgb, SpawnOrigin, SpawnPolicy,
};

/// Surface extent in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface too small to animate on. Updates are skipped entirely
    /// rather than treated as an error.
    pub fn is_degenerate(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}

/// One particle population plus the rules that drive it.
#[derive(Debug)]
pub struct ParticleSystem {
    config: EffectConfig,
    particles: Vec<Particle>,
    /// Deadline for the next timed spawn, in animation-clock milliseconds.
    next_spawn_ms: u64,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create a system and, for fixed populations, spawn all members inside
    /// `bounds`.
    pub fn new(config: EffectConfig, bounds: Bounds, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = match config.spawn {
            SpawnPolicy::FixedAtStart(count) => (0..count)
                .map(|_| spawn_particle(&config, bounds, &mut rng))
                .collect(),
            SpawnPolicy::Timed { .. } => Vec::new(),
        };
        Self {
            config,
            particles,
            next_spawn_ms: 0,
            rng,
        }
    }

    /// Create a system with an explicit starting population.
    pub fn with_particles(config: EffectConfig, particles: Vec<Particle>, seed: u64) -> Self {
        Self {
            config,
            particles,
            next_spawn_ms: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The live population.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Deadline of the next timed spawn, in animation-clock milliseconds.
    pub fn next_spawn_at(&self) -> u64 {
        self.next_spawn_ms
    }

    /// Advance the population by one frame.
    ///
    /// `now_ms` is the animation clock used for timed spawning;
    /// `velocity_scale` multiplies per-frame movement without affecting
    /// fade rates or spawn timing.
    pub fn update(&mut self, now_ms: u64, bounds: Bounds, velocity_scale: f32) {
        if bounds.is_degenerate() {
            return;
        }

        if let SpawnPolicy::Timed {
            min_delay_ms,
            max_delay_ms,
        } = self.config.spawn
            && now_ms >= self.next_spawn_ms
        {
            if self.particles.len() < self.config.max_population {
                let p = spawn_particle(&self.config, bounds, &mut self.rng);
                self.particles.push(p);
            }
            self.next_spawn_ms = now_ms + sample_delay(&mut self.rng, min_delay_ms, max_delay_ms);
        }

        for p in &mut self.particles {
            p.x += p.speed_x * velocity_scale;
            p.y += p.speed_y * velocity_scale;
            apply_boundary(p, self.config.boundary, bounds);
            if let OpacityPolicy::Fading { per_frame } = self.config.opacity {
                p.opacity -= per_frame;
            }
        }

        if matches!(self.config.opacity, OpacityPolicy::Fading { .. }) {
            self.particles.retain(|p| p.opacity > 0.0);
        }
    }
}

/// Apply the boundary policy to one particle, per axis independently.
fn apply_boundary(p: &mut Particle, policy: BoundaryPolicy, bounds: Bounds) {
    let margin = match policy {
        BoundaryPolicy::Reflect => 0.0,
        BoundaryPolicy::ReflectOutside => p.size,
        BoundaryPolicy::Unbounded => return,
    };
    if p.x < -margin || p.x > bounds.width + margin {
        p.speed_x = -p.speed_x;
    }
    if p.y < -margin || p.y > bounds.height + margin {
        p.speed_y = -p.speed_y;
    }
}

/// Spawn one particle with attributes randomized per the configuration.
fn spawn_particle(config: &EffectConfig, bounds: Bounds, rng: &mut StdRng) -> Particle {
    let (x, y) = match config.origin {
        SpawnOrigin::Anywhere => (
            sample(rng, 0.0, bounds.width),
            sample(rng, 0.0, bounds.height),
        ),
        SpawnOrigin::TopEdge => (sample(rng, 0.0, bounds.width), 0.0),
    };
    let opacity = match config.opacity {
        OpacityPolicy::Constant(o) => o,
        OpacityPolicy::RandomStatic => rng.random_range(0.0..1.0),
        OpacityPolicy::Fading { .. } => 1.0,
    };
    let color = match config.palette.len() {
        0 => Rgb::WHITE,
        1 => config.palette[0],
        n => config.palette[rng.random_range(0..n)],
    };
    Particle {
        x,
        y,
        size: sample(rng, config.size.0, config.size.1),
        speed_x: sample(rng, config.speed_x.0, config.speed_x.1),
        speed_y: sample(rng, config.speed_y.0, config.speed_y.1),
        opacity,
        color,
    }
}

/// Sample a float from `[lo, hi)`, tolerating a collapsed range.
fn sample(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Sample a spawn delay from `[lo, hi)`, tolerating a collapsed range.
fn sample_delay(rng: &mut StdRng, lo: u64, hi: u64) -> u64 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: &[Rgb] = &[Rgb::WHITE];

    fn drifting(count: usize, boundary: BoundaryPolicy) -> EffectConfig {
        EffectConfig {
            spawn: SpawnPolicy::FixedAtStart(count),
            origin: SpawnOrigin::Anywhere,
            boundary,
            opacity: OpacityPolicy::Constant(1.0),
            size: (0.5, 2.0),
            speed_x: (-0.5, 0.5),
            speed_y: (-0.5, 0.5),
            palette: WHITE,
            max_population: count,
        }
    }

    fn one_particle(x: f32, y: f32, size: f32, speed_x: f32, speed_y: f32) -> Particle {
        Particle {
            x,
            y,
            size,
            speed_x,
            speed_y,
            opacity: 1.0,
            color: Rgb::WHITE,
        }
    }

    #[test]
    fn test_fixed_population_spawns_inside_bounds() {
        let bounds = Bounds::new(100.0, 40.0);
        let system = ParticleSystem::new(drifting(120, BoundaryPolicy::Reflect), bounds, 7);
        assert_eq!(system.len(), 120);
        for p in system.particles() {
            assert!(p.x >= 0.0 && p.x < 100.0);
            assert!(p.y >= 0.0 && p.y < 40.0);
        }
    }

    #[test]
    fn test_reflection_flips_speed_at_edge() {
        // A particle just inside the right edge moving outward must flip
        // its horizontal speed on the next update.
        let bounds = Bounds::new(100.0, 40.0);
        let config = drifting(1, BoundaryPolicy::Reflect);
        let start = one_particle(bounds.width - 0.1, 20.0, 1.0, 0.5, 0.0);
        let mut system = ParticleSystem::with_particles(config, vec![start], 0);

        system.update(0, bounds, 1.0);
        assert_eq!(system.particles()[0].speed_x, -0.5);
        assert_eq!(system.particles()[0].speed_y, 0.0);
    }

    #[test]
    fn test_reflection_is_per_axis() {
        let bounds = Bounds::new(100.0, 40.0);
        let config = drifting(1, BoundaryPolicy::Reflect);
        let start = one_particle(50.0, 39.9, 1.0, 0.2, 0.5);
        let mut system = ParticleSystem::with_particles(config, vec![start], 0);

        system.update(0, bounds, 1.0);
        let p = &system.particles()[0];
        assert_eq!(p.speed_x, 0.2);
        assert_eq!(p.speed_y, -0.5);
    }

    #[test]
    fn test_reflection_keeps_particles_confined() {
        let bounds = Bounds::new(80.0, 30.0);
        let mut system = ParticleSystem::new(drifting(60, BoundaryPolicy::Reflect), bounds, 42);

        // Positions may exceed the edge by at most one frame of travel
        // before the reflected velocity brings them back.
        let slack = 0.5;
        for frame in 0..2_000 {
            system.update(frame * 16, bounds, 1.0);
            for p in system.particles() {
                assert!(p.x >= -slack && p.x <= bounds.width + slack);
                assert!(p.y >= -slack && p.y <= bounds.height + slack);
            }
        }
        assert_eq!(system.len(), 60);
    }

    #[test]
    fn test_blob_reflects_only_past_its_own_size() {
        let bounds = Bounds::new(100.0, 40.0);
        let mut config = drifting(1, BoundaryPolicy::ReflectOutside);
        config.size = (250.0, 250.0);

        // Still inside the margin after the update: no reflection.
        let inside = one_particle(-249.0, 20.0, 250.0, -0.5, 0.0);
        let mut system = ParticleSystem::with_particles(config.clone(), vec![inside], 0);
        system.update(0, bounds, 1.0);
        assert_eq!(system.particles()[0].speed_x, -0.5);

        // Crossing -size flips the velocity.
        let outside = one_particle(-249.6, 20.0, 250.0, -0.5, 0.0);
        let mut system = ParticleSystem::with_particles(config, vec![outside], 0);
        system.update(0, bounds, 1.0);
        assert_eq!(system.particles()[0].speed_x, 0.5);
    }

    #[test]
    fn test_fading_is_monotonic_and_culls_at_zero() {
        let bounds = Bounds::new(100.0, 40.0);
        let config = EffectConfig {
            spawn: SpawnPolicy::FixedAtStart(0),
            origin: SpawnOrigin::TopEdge,
            boundary: BoundaryPolicy::Unbounded,
            opacity: OpacityPolicy::Fading { per_frame: 0.25 },
            size: (1.0, 1.0),
            speed_x: (0.0, 0.0),
            speed_y: (1.0, 1.0),
            palette: WHITE,
            max_population: 16,
        };
        let meteor = one_particle(50.0, 0.0, 1.0, 1.0, 2.0);
        let mut system = ParticleSystem::with_particles(config, vec![meteor], 0);

        let mut last = 1.0_f32;
        for frame in 0..3 {
            system.update(frame * 16, bounds, 1.0);
            assert_eq!(system.len(), 1);
            let opacity = system.particles()[0].opacity;
            assert!(opacity < last);
            assert!(opacity > 0.0);
            last = opacity;
        }

        // Fourth frame takes opacity to zero; the meteor must be gone and
        // nothing with non-positive opacity may remain.
        system.update(64, bounds, 1.0);
        assert!(system.is_empty());
    }

    #[test]
    fn test_timed_spawn_delays_stay_in_range() {
        let bounds = Bounds::new(100.0, 40.0);
        let config = EffectConfig {
            spawn: SpawnPolicy::Timed {
                min_delay_ms: 2000,
                max_delay_ms: 5000,
            },
            origin: SpawnOrigin::TopEdge,
            boundary: BoundaryPolicy::Unbounded,
            opacity: OpacityPolicy::Fading { per_frame: 0.01 },
            size: (1.0, 3.0),
            speed_x: (-2.0, 2.0),
            speed_y: (2.0, 6.0),
            palette: WHITE,
            max_population: 128,
        };
        let mut system = ParticleSystem::new(config, bounds, 9);

        // First spawn is immediate.
        let mut now = 0;
        system.update(now, bounds, 1.0);
        assert_eq!(system.len(), 1);

        for _ in 0..50 {
            let deadline = system.next_spawn_at();
            let delay = deadline - now;
            assert!((2000..5000).contains(&delay), "delay {delay} out of range");
            now = deadline;
            system.update(now, bounds, 1.0);
        }
    }

    #[test]
    fn test_timed_spawn_respects_population_cap() {
        let bounds = Bounds::new(100.0, 40.0);
        let config = EffectConfig {
            spawn: SpawnPolicy::Timed {
                min_delay_ms: 10,
                max_delay_ms: 20,
            },
            origin: SpawnOrigin::TopEdge,
            boundary: BoundaryPolicy::Unbounded,
            // Effectively immortal for the length of this test.
            opacity: OpacityPolicy::Fading {
                per_frame: 0.000_001,
            },
            size: (1.0, 1.0),
            speed_x: (0.0, 0.0),
            speed_y: (1.0, 2.0),
            palette: WHITE,
            max_population: 5,
        };
        let mut system = ParticleSystem::new(config, bounds, 3);

        let mut now = 0;
        for _ in 0..200 {
            system.update(now, bounds, 1.0);
            now = system.next_spawn_at();
        }
        assert!(system.len() <= 5);
    }

    #[test]
    fn test_degenerate_bounds_skip_update() {
        let bounds = Bounds::new(100.0, 40.0);
        let mut system = ParticleSystem::new(drifting(10, BoundaryPolicy::Reflect), bounds, 1);
        let before: Vec<(f32, f32)> = system.particles().iter().map(|p| (p.x, p.y)).collect();

        system.update(0, Bounds::new(0.0, 0.0), 1.0);
        let after: Vec<(f32, f32)> = system.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
    }
}
