// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state machine: gate pointer motion into pan deltas.
//!
//! ## Usage
//!
//! 1) Enter [`DragGesture::Dragging`] with [`DragGesture::begin`] on pointer-down.
//! 2) Feed each pointer-move delta through [`DragGesture::motion`]; it is passed
//!    through only while dragging.
//! 3) Leave with [`DragGesture::end`] on pointer-up, or [`DragGesture::cancel`]
//!    when the pointer leaves the tracked surface.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use lumiio_viewer::gesture::DragGesture;
//!
//! let mut drag = DragGesture::default();
//!
//! // Motion while idle is ignored.
//! assert_eq!(drag.motion(Vec2::new(4.0, 0.0)), None);
//!
//! drag.begin();
//! assert_eq!(drag.motion(Vec2::new(5.0, 5.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.total_offset(), Some(Vec2::new(5.0, 5.0)));
//!
//! // Leaving the surface mid-drag forces the gesture back to idle.
//! assert!(drag.cancel());
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Vec2;

/// Two-state drag machine driven by pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragGesture {
    /// No button held; pointer motion is ignored.
    #[default]
    Idle,
    /// Button held over the surface.
    Dragging {
        /// Sum of all motion deltas since the drag began.
        travelled: Vec2,
    },
}

impl DragGesture {
    /// Start tracking a new drag. Restarts the running offset if already dragging.
    pub fn begin(&mut self) {
        *self = Self::Dragging {
            travelled: Vec2::ZERO,
        };
    }

    /// Pass a pointer-move delta through, returning it only while dragging.
    pub fn motion(&mut self, delta: Vec2) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { travelled } => {
                *travelled += delta;
                Some(delta)
            }
        }
    }

    /// Finish the drag on pointer release. Returns `true` if a drag was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }

    /// Abort the drag because the pointer left the surface.
    ///
    /// Without a release event the drag would otherwise stay stuck on. Returns
    /// `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        self.end()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Total motion since the drag began, or `None` while idle.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { travelled } => Some(*travelled),
        }
    }
}
