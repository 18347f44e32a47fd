// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::slide::{VirtualSlide, sanitize_extent};
use crate::viewport::ViewportState;

/// Fixed-ratio scale-down of a [`VirtualSlide`] used by the overview navigator.
///
/// The projection is derived from the mini-map's pixel width; its height
/// follows from the slide's aspect ratio. Nothing here is stored per session,
/// so a projection can be rebuilt freely whenever the slide changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiniMapProjection {
    ratio: f64,
    map_size: Size,
}

impl MiniMapProjection {
    /// Creates a projection that fits `slide` into a mini-map `map_width` pixels wide.
    ///
    /// A zero-width slide produces a zero ratio, collapsing every point onto
    /// the mini-map origin.
    #[must_use]
    pub fn new(slide: &VirtualSlide, map_width: f64) -> Self {
        let map_width = sanitize_extent(map_width);
        let ratio = if slide.width() > 0.0 {
            map_width / slide.width()
        } else {
            0.0
        };
        Self {
            ratio,
            map_size: Size::new(map_width, slide.height() * ratio),
        }
    }

    /// Returns the slide-to-mini-map scale factor.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the pixel size of the mini-map.
    #[must_use]
    pub fn map_size(&self) -> Size {
        self.map_size
    }

    /// Projects a slide-space point into mini-map pixels.
    #[must_use]
    pub fn project_point(&self, pt: Point) -> Point {
        Point::new(pt.x * self.ratio, pt.y * self.ratio)
    }

    /// Projects a slide-space rectangle into mini-map pixels.
    #[must_use]
    pub fn project_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.project_point(rect.origin()),
            self.project_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a mini-map pixel back into slide space.
    ///
    /// The input is clamped to the mini-map first, so a press on the border
    /// never resolves to a point outside the slide.
    #[must_use]
    pub fn unproject_point(&self, map_pt: Point) -> Point {
        if self.ratio <= 0.0 {
            return Point::ORIGIN;
        }
        let x = map_pt.x.clamp(0.0, self.map_size.width);
        let y = map_pt.y.clamp(0.0, self.map_size.height);
        Point::new(x / self.ratio, y / self.ratio)
    }

    /// Computes the highlight rectangle for the current viewport.
    ///
    /// The visible window, `viewport_size / zoom` slide units wide and tall and
    /// offset by `|pan| / zoom`, is projected into the mini-map. The result is
    /// then clamped to the mini-map bounds on its own: the pan clamp alone does
    /// not cover a slide smaller than the window, nor floating-point rounding.
    ///
    /// A state whose zoom is not finite and positive sees an unbounded window,
    /// so it highlights the whole mini-map.
    ///
    /// The returned rectangle always satisfies `0 <= x0`, `0 <= y0`,
    /// `x1 <= map width` and `y1 <= map height`.
    #[must_use]
    pub fn indicator_rect(&self, state: &ViewportState) -> Rect {
        if !(state.zoom.is_finite() && state.zoom > 0.0) {
            return self.map_size.to_rect();
        }
        let raw = self.project_rect(visible_window(state));
        self.clamp_rect(raw)
    }

    /// Clamps a rectangle so it fits inside the mini-map, keeping its size
    /// where possible and shrinking it only when it is larger than the map.
    ///
    /// A non-finite extent fills the map on that axis; a non-finite origin
    /// snaps to the map edge.
    #[must_use]
    pub fn clamp_rect(&self, rect: Rect) -> Rect {
        let map = self.map_size;
        let width = finite_or(rect.width(), map.width).clamp(0.0, map.width);
        let height = finite_or(rect.height(), map.height).clamp(0.0, map.height);
        let x = finite_or(rect.x0, 0.0).clamp(0.0, map.width - width);
        let y = finite_or(rect.y0, 0.0).clamp(0.0, map.height - height);
        // `x + width` can land one ulp past the edge after the subtraction above.
        Rect::new(x, y, (x + width).min(map.width), (y + height).min(map.height))
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Slide-space window for `state`, without reference to any slide bounds.
fn visible_window(state: &ViewportState) -> Rect {
    let zoom = state.zoom;
    let size = state.viewport_size;
    Rect::from_origin_size(
        Point::new(state.pan.x.abs() / zoom, state.pan.y.abs() / zoom),
        Size::new(size.width / zoom, size.height / zoom),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::MiniMapProjection;
    use crate::{SlideViewport, ViewportState, VirtualSlide};

    fn slide() -> VirtualSlide {
        VirtualSlide::new(3000.0, 2000.0)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn map_height_follows_aspect_ratio() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        assert_close(map.ratio(), 0.05);
        assert_close(map.map_size().height, 100.0);
    }

    #[test]
    fn project_point_scales_by_ratio() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let p = map.project_point(Point::new(1200.0, 800.0));
        assert_close(p.x, 60.0);
        assert_close(p.y, 40.0);
    }

    #[test]
    fn unproject_inverts_projection_and_clamps() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let back = map.unproject_point(map.project_point(Point::new(1234.0, 567.0)));
        assert_close(back.x, 1234.0);
        assert_close(back.y, 567.0);

        let edge = map.unproject_point(Point::new(-20.0, 500.0));
        assert_close(edge.x, 0.0);
        assert_close(edge.y, 2000.0);
    }

    #[test]
    fn indicator_at_unit_zoom() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let mut vp = SlideViewport::new(slide(), Size::new(800.0, 600.0));
        vp.pan_by(Vec2::new(-1000.0, -500.0));

        let rect = map.indicator_rect(&vp.state());
        assert_close(rect.x0, 50.0);
        assert_close(rect.y0, 25.0);
        assert_close(rect.width(), 40.0);
        assert_close(rect.height(), 30.0);
    }

    #[test]
    fn indicator_shrinks_when_zoomed_in() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let mut vp = SlideViewport::new(slide(), Size::new(800.0, 600.0));
        vp.set_zoom(2.0);
        let rect = map.indicator_rect(&vp.state());
        assert_close(rect.width(), 20.0);
        assert_close(rect.height(), 15.0);
    }

    #[test]
    fn indicator_is_clamped_when_slide_fits_in_window() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let state = ViewportState {
            pan: Vec2::ZERO,
            zoom: 0.2,
            viewport_size: Size::new(800.0, 600.0),
        };
        // 800 / 0.2 = 4000 slide units, wider than the 3000 unit slide.
        let rect = map.indicator_rect(&state);
        assert_eq!(rect.origin(), Point::ORIGIN);
        assert_close(rect.x1, map.map_size().width);
        assert_close(rect.y1, map.map_size().height);
    }

    #[test]
    fn clamp_rect_slides_overhanging_rect_back_inside() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let rect = map.clamp_rect(Rect::new(140.0, 95.0, 160.0, 105.0));
        assert_close(rect.x1, 150.0);
        assert_close(rect.y1, 100.0);
        assert_close(rect.width(), 20.0);
        assert_close(rect.height(), 10.0);
    }

    #[test]
    fn degenerate_zoom_highlights_whole_map() {
        let map = MiniMapProjection::new(&slide(), 200.0);
        for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let state = ViewportState {
                pan: Vec2::ZERO,
                zoom,
                viewport_size: Size::new(800.0, 600.0),
            };
            let rect = map.indicator_rect(&state);
            assert_eq!(rect, map.map_size().to_rect(), "zoom {zoom}");
        }
    }

    #[test]
    fn clamp_rect_tolerates_non_finite_edges() {
        let map = MiniMapProjection::new(&slide(), 150.0);
        let rect = map.clamp_rect(Rect::new(f64::NAN, 10.0, 40.0, f64::INFINITY));
        assert_eq!(rect.x0, 0.0);
        assert_close(rect.width(), 150.0);
        assert_eq!(rect.y0, 0.0);
        assert_close(rect.y1, map.map_size().height);
    }

    #[test]
    fn zero_width_slide_collapses_projection() {
        let map = MiniMapProjection::new(&VirtualSlide::new(0.0, 10.0), 150.0);
        assert_eq!(map.ratio(), 0.0);
        assert_eq!(map.unproject_point(Point::new(3.0, 3.0)), Point::ORIGIN);
    }
}
