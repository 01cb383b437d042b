//! Core types for the uju space tour.
//!
//! This crate holds the pure logic shared by the effect layer and the
//! application: the particle model and the parameterized population engine
//! that drives every sky effect, cyclic section navigation, and time-eased
//! scalar values for pointer smoothing and scrolling.

mod easing;
mod navigator;
mod particle;
mod speed;
mod system;

pub use easing::Eased;
pub use navigator::{Section, SectionNavigator};
pub use particle::{
    BoundaryPolicy, EffectConfig, OpacityPolicy, Particle, Rgb, SpawnOrigin, SpawnPolicy,
};
pub use speed::AnimationSpeed;
pub use system::{Bounds, ParticleSystem};
