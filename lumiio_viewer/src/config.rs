// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use lumiio_viewport::{VirtualSlide, ZoomLimits};

/// Static configuration for a viewer session.
///
/// Every field has a default matching the stock slide set; hosts override
/// only what they need through the `with_*` setters. With the `serde`
/// feature enabled, missing fields in serialized input also take their
/// defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Width of every virtual slide in slide units.
    pub slide_width: f64,
    /// Height of every virtual slide in slide units.
    pub slide_height: f64,
    /// Smallest zoom factor.
    pub zoom_min: f64,
    /// Largest zoom factor.
    pub zoom_max: f64,
    /// Zoom change applied by the zoom in/out buttons.
    pub button_step: f64,
    /// Zoom change applied per wheel notch.
    pub wheel_step: f64,
    /// Pixel width of the mini-map navigator.
    pub minimap_width: f64,
    /// Number of slides in the thumbnail strip.
    pub slide_count: usize,
    /// Number of cell markers per slide.
    pub markers_per_slide: usize,
    /// Objective magnification shown at unit zoom.
    pub base_magnification: f64,
    /// Window width assumed until the first resize event.
    pub initial_viewport_width: f64,
    /// Window height assumed until the first resize event.
    pub initial_viewport_height: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            slide_width: 3000.0,
            slide_height: 2000.0,
            zoom_min: 0.3,
            zoom_max: 3.0,
            button_step: 0.1,
            wheel_step: 0.1,
            minimap_width: 200.0,
            slide_count: 4,
            markers_per_slide: 40,
            base_magnification: 100.0,
            initial_viewport_width: 800.0,
            initial_viewport_height: 600.0,
        }
    }
}

impl ViewerConfig {
    /// Sets the virtual slide dimensions.
    #[must_use]
    pub fn with_slide_size(mut self, width: f64, height: f64) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    /// Sets the zoom range.
    #[must_use]
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Self {
        self.zoom_min = min;
        self.zoom_max = max;
        self
    }

    /// Sets the button and wheel zoom steps.
    #[must_use]
    pub fn with_zoom_steps(mut self, button: f64, wheel: f64) -> Self {
        self.button_step = button;
        self.wheel_step = wheel;
        self
    }

    /// Sets the mini-map width in pixels.
    #[must_use]
    pub fn with_minimap_width(mut self, width: f64) -> Self {
        self.minimap_width = width;
        self
    }

    /// Sets the number of slides and markers per slide.
    #[must_use]
    pub fn with_slides(mut self, slide_count: usize, markers_per_slide: usize) -> Self {
        self.slide_count = slide_count;
        self.markers_per_slide = markers_per_slide;
        self
    }

    /// Sets the window size assumed before the first resize.
    #[must_use]
    pub fn with_initial_viewport(mut self, width: f64, height: f64) -> Self {
        self.initial_viewport_width = width;
        self.initial_viewport_height = height;
        self
    }

    /// The virtual slide described by this configuration.
    #[must_use]
    pub fn slide(&self) -> VirtualSlide {
        VirtualSlide::new(self.slide_width, self.slide_height)
    }

    /// The zoom range described by this configuration.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.zoom_min, self.zoom_max)
    }

    /// The initial window size.
    #[must_use]
    pub fn initial_viewport(&self) -> Size {
        Size::new(self.initial_viewport_width, self.initial_viewport_height)
    }
}
