//! Per-session timestamp continuity.

use eyerec_core::Timestamp;

/// Assumed capture interval in milliseconds (~60 fps) used when the
/// caller supplies no timestamp.
pub const FRAME_INTERVAL_MS: Timestamp = 16.67;

/// Monotonic-as-configured timestamp state for one tracking session.
///
/// Created at the session's construction and destroyed with it; this is
/// the only mutable state in the boundary layer. An explicit non-negative
/// timestamp is authoritative and applied unconditionally (external
/// sources may rewind or jump); an absent one advances the clock by
/// [`FRAME_INTERVAL_MS`] from the last observed value.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionClock {
    current: Timestamp,
}

impl SessionClock {
    /// A fresh clock, logically "before the first frame".
    pub fn new() -> Self {
        Self { current: 0.0 }
    }

    /// Produce the timestamp for the next call.
    ///
    /// `Some(t)` with `t >= 0` sets the clock to `t`. `None`, or a
    /// negative value (the caller-facing "absent" sentinel), advances by
    /// the synthetic interval instead.
    pub fn advance(&mut self, explicit: Option<Timestamp>) -> Timestamp {
        match explicit {
            Some(timestamp) if timestamp >= 0.0 => self.current = timestamp,
            _ => self.current += FRAME_INTERVAL_MS,
        }
        self.current
    }

    /// Last observed timestamp.
    pub fn current(&self) -> Timestamp {
        self.current
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}
