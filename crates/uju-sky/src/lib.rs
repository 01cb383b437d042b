//! Particle sky effects for the uju space tour.
//!
//! This crate owns the four particle populations (background stars, meteor
//! streaks, nebula glows, foreground sparks) and rasterizes them into a
//! full-frame span grid each frame. All four are instances of the single
//! population engine in `uju-core`, differing only in configuration.

mod effects;
mod raster;
mod state;

pub use state::{SkyState, SkyView};
