//! Time-eased scalar values.
//!
//! Pointer tracking and page scrolling animate toward their targets over a
//! short duration instead of snapping. The value is a pure function of the
//! animation clock, so there is nothing to tick and nothing to cancel.

/// A scalar that eases toward its target with a smoothstep curve.
#[derive(Debug, Clone, Copy)]
pub struct Eased {
    start: f32,
    target: f32,
    started_ms: u64,
    duration_ms: u64,
}

impl Eased {
    /// Create a settled value.
    pub fn new(value: f32, duration_ms: u64) -> Self {
        Self {
            start: value,
            target: value,
            started_ms: 0,
            duration_ms,
        }
    }

    /// Begin animating toward `target` from wherever the value currently
    /// is. Retargeting mid-flight never jumps.
    pub fn set_target(&mut self, target: f32, now_ms: u64) {
        self.start = self.value_at(now_ms);
        self.target = target;
        self.started_ms = now_ms;
    }

    /// The value the animation is heading toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// The eased value at the given animation-clock time.
    pub fn value_at(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return self.target;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms) as f32;
        let t = (elapsed / self.duration_ms as f32).min(1.0);
        let t = t * t * (3.0 - 2.0 * t);
        self.start + (self.target - self.start) * t
    }

    /// Whether the animation has reached its target.
    pub fn settled_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= self.duration_ms
    }
}
