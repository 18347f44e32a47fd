// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::ZoomLimits;
use crate::slide::{VirtualSlide, sanitize_extent};

/// Snapshot of the mutable viewer state: pan, zoom and viewport size.
///
/// `pan` is the top-left offset of the visible window into the scaled slide,
/// expressed in screen pixels. Both components are always `<= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Current pan offset in screen pixels.
    pub pan: Vec2,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Pixel size of the visible window.
    pub viewport_size: Size,
}

impl ViewportState {
    /// The state of a freshly opened viewer: no pan, unit zoom.
    #[must_use]
    pub fn new(viewport_size: Size) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            viewport_size,
        }
    }
}

/// Valid pan range for both axes. Each axis ranges over `[min, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Most negative permitted horizontal pan.
    pub min_x: f64,
    /// Most negative permitted vertical pan.
    pub min_y: f64,
}

impl PanBounds {
    /// Computes the pan range for a slide scaled by `zoom` inside `viewport`.
    ///
    /// For each axis the minimum is `min(0, viewport - zoom * slide)`, so a
    /// slide that fits entirely inside the viewport cannot be panned at all.
    #[must_use]
    pub fn new(slide: Size, zoom: f64, viewport: Size) -> Self {
        Self {
            min_x: (viewport.width - zoom * slide.width).min(0.0),
            min_y: (viewport.height - zoom * slide.height).min(0.0),
        }
    }

    /// Clamps each axis of `pan` independently into the range.
    #[must_use]
    pub fn clamp(&self, pan: Vec2) -> Vec2 {
        Vec2::new(pan.x.clamp(self.min_x, 0.0), pan.y.clamp(self.min_y, 0.0))
    }

    /// Returns `true` if `pan` lies within the range, allowing `eps` of slack.
    #[must_use]
    pub fn contains(&self, pan: Vec2, eps: f64) -> bool {
        pan.x <= eps && pan.y <= eps && pan.x >= self.min_x - eps && pan.y >= self.min_y - eps
    }
}

/// Pan/zoom viewport over a single virtual slide.
///
/// `SlideViewport` owns the [`ViewportState`] of one viewer session together
/// with the slide it is looking at and the zoom range. Every mutation
/// re-establishes the pan bound invariant before returning, so the state
/// read back through [`SlideViewport::state`] is always renderable.
///
/// Zoom is anchored at the slide's top-left origin: changing zoom never
/// tries to keep the point under the cursor fixed. The only pan change a
/// zoom causes is the re-clamp against the new valid range.
///
/// Inputs are never rejected. Out-of-range values are clamped and non-finite
/// values are ignored.
#[derive(Clone, Debug)]
pub struct SlideViewport {
    slide: VirtualSlide,
    limits: ZoomLimits,
    state: ViewportState,
    slide_to_screen: Affine,
    screen_to_slide: Affine,
}

impl SlideViewport {
    /// Creates a viewport over `slide` showing a window of `viewport_size` pixels.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial pan is zero (slide origin at the top-left of the window).
    /// - Zoom is clamped to [`ZoomLimits::default`].
    #[must_use]
    pub fn new(slide: VirtualSlide, viewport_size: Size) -> Self {
        let viewport_size = Size::new(
            sanitize_extent(viewport_size.width),
            sanitize_extent(viewport_size.height),
        );
        let mut vp = Self {
            slide,
            limits: ZoomLimits::default(),
            state: ViewportState::new(viewport_size),
            slide_to_screen: Affine::IDENTITY,
            screen_to_slide: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Replaces the zoom range, clamping the current zoom into it.
    #[must_use]
    pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
        self.set_zoom_limits(limits);
        self
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Returns the slide being viewed.
    #[must_use]
    pub fn slide(&self) -> VirtualSlide {
        self.slide
    }

    /// Returns the zoom range.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.state.pan
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Returns the pixel size of the visible window.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.state.viewport_size
    }

    /// Returns the valid pan range for the current zoom and viewport size.
    #[must_use]
    pub fn pan_bounds(&self) -> PanBounds {
        PanBounds::new(self.slide.size(), self.state.zoom, self.state.viewport_size)
    }

    /// Sets the zoom range and re-clamps the current zoom and pan.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.state.zoom = limits.clamp(self.state.zoom);
        self.clamp_pan();
    }

    /// Updates the pixel size of the rendering surface.
    ///
    /// Called on mount and whenever the container resizes. The pan is
    /// re-clamped against the new size at the current zoom.
    pub fn set_viewport_size(&mut self, size: Size) {
        if !(size.width.is_finite() && size.height.is_finite()) {
            return;
        }
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        if self.state.viewport_size == size {
            return;
        }
        self.state.viewport_size = size;
        self.clamp_pan();
    }

    /// Pans by a screen-space pointer delta.
    ///
    /// Inside the valid range, pan follows the pointer 1:1. Each axis stops
    /// at the slide edge independently; there is no overscroll.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.state.pan += delta;
        self.clamp_pan();
        tracing::trace!(
            dx = delta.x,
            dy = delta.y,
            pan_x = self.state.pan.x,
            pan_y = self.state.pan.y,
            "pan"
        );
    }

    /// Sets the zoom factor, clamping it into the zoom range.
    ///
    /// The existing pan is re-clamped against the range implied by the new
    /// zoom so the window never shows area outside the slide.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let clamped = self.limits.clamp(zoom);
        if self.state.zoom == clamped {
            return;
        }
        self.state.zoom = clamped;
        self.clamp_pan();
        tracing::trace!(requested = zoom, zoom = clamped, "zoom");
    }

    /// Adds `delta` to the current zoom factor.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.state.zoom + delta);
    }

    /// Sets the zoom from a slider position in `[0, 100]`.
    ///
    /// See [`ZoomLimits::from_fraction`] for the mapping.
    pub fn set_zoom_from_slider_fraction(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.set_zoom(self.limits.from_fraction(value));
    }

    /// Returns the slider position in `[0, 100]` that matches the current zoom.
    #[must_use]
    pub fn slider_fraction(&self) -> f64 {
        self.limits.fraction_of(self.state.zoom)
    }

    /// Restores unit zoom and zero pan.
    pub fn reset_view(&mut self) {
        // Zero pan is in range at every zoom. Custom limits that exclude unit
        // zoom still win over the reset.
        self.state.zoom = self.limits.clamp(1.0);
        self.state.pan = Vec2::ZERO;
        self.rebuild_transforms();
    }

    /// Switches to a different slide, resetting pan and keeping zoom.
    pub fn set_slide(&mut self, slide: VirtualSlide) {
        self.slide = slide;
        self.state.pan = Vec2::ZERO;
        self.clamp_pan();
    }

    /// Pans so that `slide_pt` sits at the center of the window, then clamps.
    pub fn center_on(&mut self, slide_pt: Point) {
        let size = self.state.viewport_size;
        let view_center = Point::new(size.width / 2.0, size.height / 2.0);
        let delta = view_center - self.slide_to_screen_point(slide_pt);
        self.pan_by(delta);
    }

    /// Converts a slide-space point into screen pixels.
    #[must_use]
    pub fn slide_to_screen_point(&self, pt: Point) -> Point {
        self.slide_to_screen * pt
    }

    /// Converts a screen-space point into slide-space coordinates.
    #[must_use]
    pub fn screen_to_slide_point(&self, pt: Point) -> Point {
        self.screen_to_slide * pt
    }

    /// Returns the slide-space rectangle currently visible through the window.
    ///
    /// When the scaled slide is smaller than the window this rectangle extends
    /// past the slide bounds.
    #[must_use]
    pub fn visible_slide_rect(&self) -> Rect {
        let origin = self.screen_to_slide_point(Point::ORIGIN);
        let zoom = self.state.zoom;
        let size = self.state.viewport_size;
        Rect::from_origin_size(origin, Size::new(size.width / zoom, size.height / zoom))
    }

    /// Returns `true` if the slide-space point is inside the visible window.
    #[must_use]
    pub fn is_visible(&self, slide_pt: Point) -> bool {
        let visible = self.visible_slide_rect();
        slide_pt.x >= visible.x0
            && slide_pt.x <= visible.x1
            && slide_pt.y >= visible.y0
            && slide_pt.y <= visible.y1
    }

    /// Returns the affine transform from slide space to screen pixels.
    ///
    /// Renderers apply this to the slide layer.
    #[must_use]
    pub fn slide_to_screen(&self) -> Affine {
        self.slide_to_screen
    }

    fn rebuild_transforms(&mut self) {
        // Slide -> screen: scale by zoom, then translate by pan.
        self.slide_to_screen = Affine::translate(self.state.pan) * Affine::scale(self.state.zoom);
        self.screen_to_slide = self.slide_to_screen.inverse();
    }

    fn clamp_pan(&mut self) {
        let bounds = self.pan_bounds();
        let clamped = bounds.clamp(self.state.pan);
        if clamped != self.state.pan {
            tracing::trace!(
                from_x = self.state.pan.x,
                from_y = self.state.pan.y,
                to_x = clamped.x,
                to_y = clamped.y,
                "pan clamped"
            );
            self.state.pan = clamped;
        }
        self.rebuild_transforms();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{PanBounds, SlideViewport};
    use crate::{VirtualSlide, ZoomLimits};

    fn viewer() -> SlideViewport {
        SlideViewport::new(VirtualSlide::new(3000.0, 2000.0), Size::new(800.0, 600.0))
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn new_viewport_starts_at_origin_with_unit_zoom() {
        let vp = viewer();
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn pan_bounds_at_unit_zoom() {
        let bounds = viewer().pan_bounds();
        assert_eq!(bounds.min_x, -2200.0);
        assert_eq!(bounds.min_y, -1400.0);
    }

    #[test]
    fn pan_past_the_right_edge_is_clamped() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(-3000.0, 0.0));
        assert_eq!(vp.pan(), Vec2::new(-2200.0, 0.0));
    }

    #[test]
    fn pan_inside_bounds_tracks_pointer_exactly() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(-120.0, -45.5));
        vp.pan_by(Vec2::new(20.0, 5.5));
        assert_eq!(vp.pan(), Vec2::new(-100.0, -40.0));
    }

    #[test]
    fn pan_axes_clamp_independently() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(50.0, -100.0));
        assert_eq!(vp.pan(), Vec2::new(0.0, -100.0));
    }

    #[test]
    fn zooming_out_reclamps_pan() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(-2200.0, -1400.0));
        assert_eq!(vp.pan(), Vec2::new(-2200.0, -1400.0));

        vp.set_zoom(0.3);
        // 0.3 * 3000 = 900 leaves 100 px of horizontal travel; 0.3 * 2000 fits exactly.
        assert_close(vp.pan().x, -100.0);
        assert_close(vp.pan().y, 0.0);
        assert!(vp.pan_bounds().contains(vp.pan(), 1e-9));
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut vp = viewer();
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom(), 3.0);
        vp.set_zoom(0.01);
        assert_eq!(vp.zoom(), 0.3);
    }

    #[test]
    fn zoom_applies_smallest_representable_change() {
        let mut vp = viewer();
        vp.set_zoom(0.5);
        let next = f64::from_bits(0.5_f64.to_bits() + 1);
        vp.set_zoom(next);
        assert_eq!(vp.zoom(), next);
    }

    #[test]
    fn zoom_by_accumulates_and_clamps() {
        let mut vp = viewer();
        vp.zoom_by(0.5);
        assert_close(vp.zoom(), 1.5);
        vp.zoom_by(-5.0);
        assert_eq!(vp.zoom(), 0.3);
    }

    #[test]
    fn zoom_is_anchored_at_slide_origin() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(-100.0, -100.0));
        let before = vp.screen_to_slide_point(Point::ORIGIN);
        vp.set_zoom(2.0);
        let after = vp.screen_to_slide_point(Point::ORIGIN);
        // Pan was valid at both zoom levels, so it is untouched.
        assert_eq!(vp.pan(), Vec2::new(-100.0, -100.0));
        assert_close(before.x, 100.0);
        assert_close(after.x, 50.0);
    }

    #[test]
    fn slider_fraction_sets_zoom() {
        let mut vp = viewer();
        vp.set_zoom_from_slider_fraction(50.0);
        assert_close(vp.zoom(), 1.65);
        assert_close(vp.slider_fraction(), 50.0);
    }

    #[test]
    fn reset_view_restores_defaults() {
        let mut vp = viewer();
        vp.set_zoom(2.5);
        vp.pan_by(Vec2::new(-500.0, -300.0));
        vp.reset_view();
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.pan(), Vec2::ZERO);
        let pt = vp.screen_to_slide_point(Point::new(10.0, 10.0));
        assert_close(pt.x, 10.0);
        assert_close(pt.y, 10.0);
    }

    #[test]
    fn switching_slide_resets_pan_keeps_zoom() {
        let mut vp = viewer();
        vp.set_zoom(2.0);
        vp.pan_by(Vec2::new(-400.0, -400.0));
        vp.set_slide(VirtualSlide::new(1000.0, 1000.0));
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn shrinking_slide_range_on_resize_reclamps() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(-2200.0, 0.0));
        vp.set_viewport_size(Size::new(1000.0, 600.0));
        assert_eq!(vp.pan(), Vec2::new(-2000.0, 0.0));
    }

    #[test]
    fn non_finite_inputs_are_ignored() {
        let mut vp = viewer();
        vp.pan_by(Vec2::new(-10.0, -10.0));
        vp.pan_by(Vec2::new(f64::NAN, 0.0));
        vp.set_zoom(f64::INFINITY);
        vp.set_zoom_from_slider_fraction(f64::NAN);
        vp.set_viewport_size(Size::new(f64::NAN, 10.0));
        assert_eq!(vp.pan(), Vec2::new(-10.0, -10.0));
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.viewport_size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn screen_and_slide_points_roundtrip() {
        let mut vp = viewer();
        vp.set_zoom(1.7);
        vp.pan_by(Vec2::new(-321.0, -123.0));
        let slide_pt = Point::new(812.0, 455.0);
        let back = vp.screen_to_slide_point(vp.slide_to_screen_point(slide_pt));
        assert_close(back.x, slide_pt.x);
        assert_close(back.y, slide_pt.y);
    }

    #[test]
    fn visible_rect_and_culling() {
        let mut vp = viewer();
        vp.set_zoom(2.0);
        vp.pan_by(Vec2::new(-200.0, -100.0));
        let visible = vp.visible_slide_rect();
        assert_close(visible.x0, 100.0);
        assert_close(visible.y0, 50.0);
        assert_close(visible.width(), 400.0);
        assert_close(visible.height(), 300.0);
        assert!(vp.is_visible(Point::new(300.0, 200.0)));
        assert!(!vp.is_visible(Point::new(50.0, 200.0)));
    }

    #[test]
    fn center_on_clamps_at_edges() {
        let mut vp = viewer();
        vp.center_on(Point::new(1500.0, 1000.0));
        assert_eq!(vp.pan(), Vec2::new(-1100.0, -700.0));

        vp.center_on(Point::new(0.0, 0.0));
        assert_eq!(vp.pan(), Vec2::ZERO);

        vp.center_on(Point::new(3000.0, 2000.0));
        assert_eq!(vp.pan(), Vec2::new(-2200.0, -1400.0));
    }

    #[test]
    fn narrowing_limits_reclamps_zoom() {
        let mut vp = viewer();
        vp.set_zoom(2.5);
        vp.set_zoom_limits(ZoomLimits::new(0.5, 2.0));
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn pan_bounds_never_positive() {
        let bounds = PanBounds::new(Size::new(100.0, 100.0), 1.0, Size::new(800.0, 600.0));
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.clamp(Vec2::new(-50.0, 20.0)), Vec2::ZERO);
    }
}
