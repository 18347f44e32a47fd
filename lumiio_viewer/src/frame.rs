// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size};
use lumiio_viewport::{MarkerCategory, ViewportState};

/// A marker placed in some target space (screen or mini-map pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedMarker {
    /// Marker id within its slide.
    pub id: usize,
    /// Position in the target space.
    pub position: Point,
    /// Classification tag.
    pub category: MarkerCategory,
}

/// Everything a renderer needs to draw one frame of the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerFrame {
    /// Viewport state the frame was built from.
    pub state: ViewportState,
    /// Slide-to-screen transform for the slide layer.
    pub slide_to_screen: Affine,
    /// Index of the active slide.
    pub active_slide: usize,
    /// Whether a drag is in progress (for cursor feedback).
    pub dragging: bool,
    /// Pixel size of the mini-map.
    pub minimap_size: Size,
    /// Highlight rectangle in mini-map pixels.
    pub indicator: Rect,
    /// Every marker of the active slide in mini-map pixels.
    pub minimap_markers: Vec<PlacedMarker>,
    /// Markers inside the main view, in screen pixels.
    pub visible_markers: Vec<PlacedMarker>,
    /// Slider position in `[0, 100]` matching the current zoom.
    pub slider_value: f64,
    /// Objective magnification at the current zoom.
    pub magnification: u32,
}

impl ViewerFrame {
    /// Magnification readout, for example `"100x"`.
    #[must_use]
    pub fn magnification_label(&self) -> String {
        format!("{}x", self.magnification)
    }
}

/// Rounds `base * zoom` to the nearest whole magnification.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to int cast is the intended rounding"
)]
pub(crate) fn magnification(base: f64, zoom: f64) -> u32 {
    let m = base * zoom;
    if !(m.is_finite() && m > 0.0) {
        return 0;
    }
    (m + 0.5) as u32
}
