// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Upper bound of the normalized zoom slider.
pub const SLIDER_MAX: f64 = 100.0;

/// Inclusive zoom range shared by the main view, the zoom buttons and the slider.
///
/// The range is normalized on construction so that `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates a zoom range, swapping the bounds if they are reversed.
    ///
    /// Non-finite or non-positive bounds fall back to the default range.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0) {
            return Self::default();
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max }
    }

    /// Returns the smallest permitted zoom factor.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the largest permitted zoom factor.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into the range.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Maps a slider position in `[0, 100]` linearly onto the zoom range.
    ///
    /// Positions outside the slider range are clamped first.
    #[must_use]
    pub fn from_fraction(&self, value: f64) -> f64 {
        let t = value.clamp(0.0, SLIDER_MAX) / SLIDER_MAX;
        self.min + t * (self.max - self.min)
    }

    /// Inverse of [`ZoomLimits::from_fraction`]: the slider position for `zoom`.
    ///
    /// A degenerate range (`min == max`) reports the slider start.
    #[must_use]
    pub fn fraction_of(&self, zoom: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp(zoom) - self.min) / span * SLIDER_MAX
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.3, max: 3.0 }
    }
}
