use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// Damped harmonic oscillator driven from rest at 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    pub fn validate(self) -> ScrollfxResult<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ScrollfxError::animation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ScrollfxError::animation("spring damping must be >= 0"));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ScrollfxError::animation("spring mass must be > 0"));
        }
        Ok(())
    }

    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }

    /// Displacement at `secs` after release, with x(0) = 0 and v(0) = 0.
    ///
    /// Underdamped springs overshoot past 1 before settling.
    pub fn step(self, secs: f64) -> f64 {
        if secs.is_nan() || secs <= 0.0 {
            return 0.0;
        }
        if secs.is_infinite() {
            return 1.0;
        }
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);

        let w0 = (k / m).sqrt();
        if w0 == 0.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio();
        let t = secs;

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            let k = zeta / (1.0 - zeta * zeta).sqrt();
            1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
        } else {
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        }
    }

    /// Earliest sampled time (at `step_secs` resolution) after which the displacement
    /// stays within `epsilon` of rest, searching up to `max_secs`.
    pub fn settle_time(self, epsilon: f64, step_secs: f64, max_secs: f64) -> Option<f64> {
        if !(step_secs.is_finite() && step_secs > 0.0)
            || !(max_secs.is_finite() && max_secs >= 0.0)
        {
            return None;
        }
        let steps = (max_secs / step_secs).ceil() as u64;
        let mut settled_since: Option<f64> = None;
        for i in 0..=steps {
            let t = (i as f64) * step_secs;
            if (self.step(t) - 1.0).abs() <= epsilon {
                settled_since.get_or_insert(t);
            } else {
                settled_since = None;
            }
        }
        settled_since
    }
}
