//! The four sky effect configurations.
//!
//! One population engine, four parameter sets. Counts and sizes scale with
//! the surface so small terminals stay uncluttered and large ones stay
//! filled.

use uju_core::{
    BoundaryPolicy, Bounds, EffectConfig, OpacityPolicy, Rgb, SpawnOrigin, SpawnPolicy,
};

/// Background stars and meteor streaks are plain white.
const WHITE: &[Rgb] = &[Rgb::WHITE];

/// Foreground sparks on the explore page: pastel pink.
const SPARK_PALETTE: &[Rgb] = &[Rgb(255, 182, 193)];

/// Nebula tints: light blue, medium purple, light pink.
const NEBULA_PALETTE: &[Rgb] = &[Rgb(173, 216, 230), Rgb(147, 112, 219), Rgb(255, 182, 193)];

/// Milliseconds between meteor spawns, sampled uniformly.
const METEOR_DELAY_MS: (u64, u64) = (2000, 5000);

/// Opacity lost per frame by a live meteor (~100 frames to fade out).
const METEOR_FADE_PER_FRAME: f32 = 0.01;

/// Drifting background stars: a fixed population bouncing at the edges.
pub(crate) fn stars(bounds: Bounds) -> EffectConfig {
    let count = population_for(bounds, 32.0, 40, 160);
    EffectConfig {
        spawn: SpawnPolicy::FixedAtStart(count),
        origin: SpawnOrigin::Anywhere,
        boundary: BoundaryPolicy::Reflect,
        opacity: OpacityPolicy::Constant(1.0),
        size: (0.2, 2.8),
        speed_x: (-0.12, 0.12),
        speed_y: (-0.06, 0.06),
        palette: WHITE,
        max_population: count,
    }
}

/// Meteors: spawned at the top edge on a random timer, never reflected,
/// culled once their streak has faded out.
pub(crate) fn meteors(max_population: usize) -> EffectConfig {
    EffectConfig {
        spawn: SpawnPolicy::Timed {
            min_delay_ms: METEOR_DELAY_MS.0,
            max_delay_ms: METEOR_DELAY_MS.1,
        },
        origin: SpawnOrigin::TopEdge,
        boundary: BoundaryPolicy::Unbounded,
        opacity: OpacityPolicy::Fading {
            per_frame: METEOR_FADE_PER_FRAME,
        },
        size: (1.0, 3.0),
        speed_x: (-1.0, 1.0),
        speed_y: (0.4, 1.2),
        palette: WHITE,
        max_population,
    }
}

/// Nebula blobs: a handful of slow radial glows, reflected only once fully
/// off screen so the gradient never pops at the edge.
pub(crate) fn nebulas(bounds: Bounds) -> EffectConfig {
    // Radius in column units; rows count double (cell aspect).
    let extent = bounds.width.min(bounds.height * 2.0).max(8.0);
    EffectConfig {
        spawn: SpawnPolicy::FixedAtStart(5),
        origin: SpawnOrigin::Anywhere,
        boundary: BoundaryPolicy::ReflectOutside,
        opacity: OpacityPolicy::Constant(1.0),
        size: (extent * 0.35, extent * 0.7),
        speed_x: (-0.02, 0.02),
        speed_y: (-0.01, 0.01),
        palette: NEBULA_PALETTE,
        max_population: 5,
    }
}

/// Foreground sparks on the explore page: like stars, but tinted and with
/// a random static opacity per particle.
pub(crate) fn sparks(bounds: Bounds) -> EffectConfig {
    let count = population_for(bounds, 64.0, 20, 80);
    EffectConfig {
        spawn: SpawnPolicy::FixedAtStart(count),
        origin: SpawnOrigin::Anywhere,
        boundary: BoundaryPolicy::Reflect,
        opacity: OpacityPolicy::RandomStatic,
        size: (0.8, 2.8),
        speed_x: (-0.12, 0.12),
        speed_y: (-0.06, 0.06),
        palette: SPARK_PALETTE,
        max_population: count,
    }
}

/// Scale a population count with surface area, clamped to sane limits.
fn population_for(bounds: Bounds, cells_per_particle: f32, min: usize, max: usize) -> usize {
    let area = bounds.width * bounds.height;
    ((area / cells_per_particle) as usize).clamp(min, max)
}
