// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Logical dimensions of a virtual slide in slide-space units.
///
/// A slide is immutable for the lifetime of a viewer session; switching slides
/// replaces the whole value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualSlide {
    size: Size,
}

impl VirtualSlide {
    /// Creates a slide of the given width and height.
    ///
    /// Negative or non-finite extents collapse to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(sanitize_extent(width), sanitize_extent(height)),
        }
    }

    /// Returns the slide width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the slide height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Returns the slide dimensions.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the slide-space bounds, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }
}

impl Default for VirtualSlide {
    fn default() -> Self {
        Self::new(3000.0, 2000.0)
    }
}

pub(crate) fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::VirtualSlide;

    #[test]
    fn bounds_start_at_origin() {
        let slide = VirtualSlide::new(3000.0, 2000.0);
        assert_eq!(slide.bounds(), Rect::new(0.0, 0.0, 3000.0, 2000.0));
    }

    #[test]
    fn degenerate_extents_collapse_to_zero() {
        let slide = VirtualSlide::new(-10.0, f64::NAN);
        assert_eq!(slide.width(), 0.0);
        assert_eq!(slide.height(), 0.0);
    }
}
