// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lumiio Viewer: an event-driven slide viewer session.
//!
//! This crate sits on top of `lumiio_viewport` and turns discrete input events
//! into viewport updates. It owns the pieces of a viewer that are stateful
//! across events:
//!
//! - [`gesture`]: the `Idle`/`Dragging` pointer state machine
//! - [`ViewerSession`]: the active slide, its viewport and the drag gesture
//! - [`SlideCatalog`]: the deterministic mock slide set shown as thumbnails
//! - [`ViewerFrame`]: a render-ready snapshot of everything a renderer draws
//!
//! The crate does not assume any UI toolkit. Hosts translate their pointer,
//! wheel, slider, button and resize callbacks into [`ViewerEvent`]s and draw
//! whatever [`ViewerSession::frame`] returns.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use lumiio_viewer::{ViewerConfig, ViewerEvent, ViewerSession};
//!
//! let mut session = ViewerSession::new(ViewerConfig::default());
//!
//! // The host reports its container size once mounted.
//! session.apply(ViewerEvent::Resize { size: Size::new(1024.0, 768.0) });
//!
//! // Wheel events must have the page scroll suppressed.
//! let outcome = session.apply(ViewerEvent::Wheel { delta: 120.0 });
//! assert!(outcome.prevent_default);
//!
//! // Drag to pan.
//! session.apply(ViewerEvent::PointerDown);
//! session.apply(ViewerEvent::PointerMove { delta: Vec2::new(-40.0, -25.0) });
//! session.apply(ViewerEvent::PointerUp);
//!
//! let frame = session.frame();
//! assert_eq!(frame.state.pan, Vec2::new(-40.0, -25.0));
//! assert!(frame.indicator.x1 <= frame.minimap_size.width);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewerConfig`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod catalog;
mod config;
mod event;
mod frame;
pub mod gesture;
mod session;

pub use catalog::{SlideCatalog, SlideEntry};
pub use config::ViewerConfig;
pub use event::{EventOutcome, ViewerEvent};
pub use frame::{PlacedMarker, ViewerFrame};
pub use session::ViewerSession;
