// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Discrete input consumed by [`ViewerSession`](crate::ViewerSession).
///
/// Hosts translate their native pointer, wheel, slider and button callbacks
/// into these values; the session never sees a UI toolkit type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerEvent {
    /// Primary button pressed over the main view.
    PointerDown,
    /// Pointer moved by `delta` screen pixels since the previous sample.
    PointerMove {
        /// Signed movement since the last sample.
        delta: Vec2,
    },
    /// Primary button released.
    PointerUp,
    /// Pointer left the main view, with or without a release.
    PointerLeave,
    /// Wheel scrolled. Positive `delta` scrolls down, which zooms out.
    Wheel {
        /// Raw wheel delta; only its sign is used.
        delta: f64,
    },
    /// Zoom slider moved to `value` in `[0, 100]`.
    SliderSet {
        /// Slider position.
        value: f64,
    },
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// Reset-view button.
    ResetView,
    /// Thumbnail `index` chosen in the slide strip.
    SlideSelected {
        /// Catalog index of the chosen slide.
        index: usize,
    },
    /// The main view container changed size.
    Resize {
        /// New pixel size of the main view.
        size: Size,
    },
    /// Mini-map pressed at `point`, in mini-map pixels.
    MiniMapPressed {
        /// Press location relative to the mini-map's top-left corner.
        point: Point,
    },
}

/// What the host should do after an event has been applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Something the renderer reads changed; redraw.
    pub changed: bool,
    /// Suppress the host's default handling (page scroll for wheel events).
    pub prevent_default: bool,
}
