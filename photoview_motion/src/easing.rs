// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Timing curve mapping linear progress in `[0, 1]` onto eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerates out of the start and decelerates into the end
    /// (`3t² − 2t³`).
    #[default]
    SmoothStep,
}

impl Easing {
    /// Applies the curve to `t`, clamped into `[0, 1]`.
    ///
    /// Both curves map `0.0` to `0.0` and `1.0` to `1.0` exactly.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
