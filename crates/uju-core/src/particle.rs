//! The particle model and effect configuration.

/// An RGB color carried by a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Scale brightness by `alpha` (clamped to 0.0..=1.0).
    pub fn dim(self, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f32 * a) as u8,
            (self.1 as f32 * a) as u8,
            (self.2 as f32 * a) as u8,
        )
    }
}

/// A minimal animated point entity.
///
/// Positions and sizes are in surface cell coordinates; velocities are in
/// cells per frame.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Visual radius, also the off-screen margin under
    /// [`BoundaryPolicy::ReflectOutside`].
    pub size: f32,
    /// Horizontal velocity per frame.
    pub speed_x: f32,
    /// Vertical velocity per frame.
    pub speed_y: f32,
    /// Current opacity (0.0 - 1.0).
    pub opacity: f32,
    /// Base color, picked from the effect palette at spawn time.
    pub color: Rgb,
}

/// How a population is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// Spawn the full population at initialization; it never grows.
    FixedAtStart(usize),
    /// Spawn one particle per timer expiry, then re-arm the timer with a
    /// uniform random delay in `[min_delay_ms, max_delay_ms)`.
    Timed { min_delay_ms: u64, max_delay_ms: u64 },
}

/// What happens when a particle crosses a surface edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Invert the velocity component at the edge itself, per axis.
    Reflect,
    /// Invert only once the particle is fully outside, using its own size
    /// as the off-screen margin. Large soft blobs use this so their glow
    /// never visibly pops at the edge.
    ReflectOutside,
    /// Never reflect; the particle travels freely and is culled by opacity.
    Unbounded,
}

/// How a particle's opacity behaves over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpacityPolicy {
    /// Fixed opacity for every particle.
    Constant(f32),
    /// Each particle gets a random opacity at spawn and keeps it.
    RandomStatic,
    /// Opacity decreases by a fixed amount every frame; the particle is
    /// removed from the population once it reaches zero.
    Fading { per_frame: f32 },
}

/// Where new particles appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOrigin {
    /// Anywhere inside the surface bounds.
    Anywhere,
    /// Random horizontal position at the top edge.
    TopEdge,
}

/// Configuration for one particle population.
///
/// One engine parameterized by this struct drives every sky effect; the
/// four effects differ only in their configuration values.
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// Population fill policy.
    pub spawn: SpawnPolicy,
    /// Spawn position rule.
    pub origin: SpawnOrigin,
    /// Edge behavior.
    pub boundary: BoundaryPolicy,
    /// Opacity behavior.
    pub opacity: OpacityPolicy,
    /// Size range `[min, max)` sampled per particle.
    pub size: (f32, f32),
    /// Horizontal velocity range `[min, max)` per particle.
    pub speed_x: (f32, f32),
    /// Vertical velocity range `[min, max)` per particle.
    pub speed_y: (f32, f32),
    /// Colors to pick from at spawn time.
    pub palette: &'static [Rgb],
    /// Hard cap on the live population for timed spawning.
    pub max_population: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_scales_channels() {
        assert_eq!(Rgb(200, 100, 50).dim(0.5), Rgb(100, 50, 25));
        assert_eq!(Rgb::WHITE.dim(0.0), Rgb(0, 0, 0));
        assert_eq!(Rgb::WHITE.dim(2.0), Rgb::WHITE);
    }
}
