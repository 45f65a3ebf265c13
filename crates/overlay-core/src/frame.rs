/// Per-tick timing snapshot handed to UI panels.
///
/// `dt` is already sanitized: a host-reported zero becomes 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub dt: f32,
    pub time: f64,
}

impl Frame {
    #[inline]
    pub fn first() -> Self {
        Self {
            index: 0,
            dt: 0.0,
            time: 0.0,
        }
    }

    /// Advance to the next tick using the host-reported delta.
    #[inline]
    pub fn advance(&self, host_dt: f32) -> Self {
        let dt = sanitize_dt(host_dt);
        Self {
            index: self.index.wrapping_add(1),
            dt,
            time: self.time + dt as f64,
        }
    }
}

/// Paused hosts report zero; downstream UI timing divides by dt.
#[inline]
pub fn sanitize_dt(host_dt: f32) -> f32 {
    if host_dt == 0.0 || !host_dt.is_finite() {
        1.0
    } else {
        host_dt
    }
}
