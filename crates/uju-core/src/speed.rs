//! Animation speed settings.

use serde::{Deserialize, Serialize};

/// Global animation speed multiplier, settable from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to per-frame particle velocities.
    pub fn velocity_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(AnimationSpeed::default(), AnimationSpeed::Medium);
        assert_eq!(AnimationSpeed::default().velocity_scale(), 1.0);
    }
}
