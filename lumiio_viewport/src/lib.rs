// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lumiio Viewport: the pan/zoom engine behind the slide viewer.
//!
//! This crate provides a small, headless model of a microscope slide viewer
//! whose window is measured in screen pixels. It focuses on:
//! - Viewport state (pan + zoom + window size) with bound-preserving updates.
//! - Coordinate conversion between slide space and screen space.
//! - Projection of the slide and the visible window onto a mini-map.
//! - Deterministic placement of mock cell markers.
//!
//! It does **not** render anything or interpret input devices. Callers are
//! expected to:
//! - Draw the slide layer with [`SlideViewport::slide_to_screen`].
//! - Draw the mini-map highlight from [`MiniMapProjection::indicator_rect`].
//! - Translate pointer, wheel and slider input into viewport calls (see the
//!   `lumiio_viewer` crate for an event-driven session built on this one).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use lumiio_viewport::{MiniMapProjection, SlideViewport, VirtualSlide};
//!
//! let slide = VirtualSlide::new(3000.0, 2000.0);
//! let mut view = SlideViewport::new(slide, Size::new(800.0, 600.0));
//!
//! // Dragging past the right edge stops at the edge.
//! view.pan_by(Vec2::new(-3000.0, 0.0));
//! assert_eq!(view.pan(), Vec2::new(-2200.0, 0.0));
//!
//! // The mini-map highlight always stays inside the mini-map.
//! let map = MiniMapProjection::new(&slide, 200.0);
//! let indicator = map.indicator_rect(&view.state());
//! assert!(indicator.x1 <= map.map_size().width);
//! ```
//!
//! ## Design notes
//!
//! - Pan is the top-left offset of the window into the scaled slide and is
//!   always `<= 0` on both axes; the window never shows area off the slide
//!   unless the whole slide fits inside it.
//! - Zoom is uniform and anchored at the slide origin.
//! - Invalid input is clamped or ignored, never reported. There is no error
//!   type in this crate.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod limits;
mod markers;
mod minimap;
mod slide;
mod viewport;

pub use limits::{SLIDER_MAX, ZoomLimits};
pub use markers::{
    ATYPICAL_THRESHOLD, MARKER_SPREAD, MarkerCategory, SlideMarker, generate_slide_markers,
};
pub use minimap::MiniMapProjection;
pub use slide::VirtualSlide;
pub use viewport::{PanBounds, SlideViewport, ViewportState};
