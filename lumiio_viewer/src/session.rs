// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;
use lumiio_viewport::{MiniMapProjection, SlideViewport, ViewportState};

use crate::catalog::{SlideCatalog, SlideEntry};
use crate::config::ViewerConfig;
use crate::event::{EventOutcome, ViewerEvent};
use crate::frame::{PlacedMarker, ViewerFrame, magnification};
use crate::gesture::DragGesture;

/// One open slide viewer: the active slide, its viewport and the drag gesture.
///
/// A session is created when the viewer opens and dropped when it closes;
/// nothing is persisted. All input arrives as [`ViewerEvent`]s and every
/// event leaves the viewport inside its pan and zoom bounds.
///
/// ```rust
/// use kurbo::Vec2;
/// use lumiio_viewer::{ViewerConfig, ViewerEvent, ViewerSession};
///
/// let session = ViewerSession::new(ViewerConfig::default())
///     .reduce(ViewerEvent::PointerDown)
///     .reduce(ViewerEvent::PointerMove { delta: Vec2::new(-3000.0, 0.0) })
///     .reduce(ViewerEvent::PointerUp);
///
/// assert_eq!(session.state().pan, Vec2::new(-2200.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct ViewerSession {
    config: ViewerConfig,
    catalog: SlideCatalog,
    active: usize,
    viewport: SlideViewport,
    minimap: MiniMapProjection,
    drag: DragGesture,
}

impl ViewerSession {
    /// Opens a session on the first slide of the catalog built from `config`.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        let catalog = SlideCatalog::generate(&config);
        let slide = catalog.get(0).map_or_else(|| config.slide(), SlideEntry::slide);
        let viewport = SlideViewport::new(slide, config.initial_viewport())
            .with_zoom_limits(config.zoom_limits());
        let minimap = MiniMapProjection::new(&slide, config.minimap_width);
        tracing::debug!(slides = catalog.len(), "viewer session opened");
        Self {
            config,
            catalog,
            active: 0,
            viewport,
            minimap,
            drag: DragGesture::Idle,
        }
    }

    /// Applies `event` and returns the updated session.
    #[must_use]
    pub fn reduce(mut self, event: ViewerEvent) -> Self {
        self.apply(event);
        self
    }

    /// Applies `event` in place.
    pub fn apply(&mut self, event: ViewerEvent) -> EventOutcome {
        let before = (self.viewport.state(), self.active, self.drag.is_dragging());
        let mut prevent_default = false;

        match event {
            ViewerEvent::PointerDown => {
                self.drag.begin();
                tracing::debug!("drag began");
            }
            ViewerEvent::PointerMove { delta } => {
                if let Some(delta) = self.drag.motion(delta) {
                    self.viewport.pan_by(delta);
                }
            }
            ViewerEvent::PointerUp => {
                if self.drag.end() {
                    tracing::debug!("drag ended");
                }
            }
            ViewerEvent::PointerLeave => {
                if self.drag.cancel() {
                    tracing::debug!("drag cancelled: pointer left the view");
                }
            }
            ViewerEvent::Wheel { delta } => {
                prevent_default = true;
                let step = self.config.wheel_step;
                if delta > 0.0 {
                    self.viewport.zoom_by(-step);
                } else if delta < 0.0 {
                    self.viewport.zoom_by(step);
                }
            }
            ViewerEvent::SliderSet { value } => {
                self.viewport.set_zoom_from_slider_fraction(value);
            }
            ViewerEvent::ZoomIn => self.viewport.zoom_by(self.config.button_step),
            ViewerEvent::ZoomOut => self.viewport.zoom_by(-self.config.button_step),
            ViewerEvent::ResetView => {
                self.viewport.reset_view();
                tracing::debug!("view reset");
            }
            ViewerEvent::SlideSelected { index } => self.switch_slide(index),
            ViewerEvent::Resize { size } => {
                let previous = self.viewport.viewport_size();
                self.viewport.set_viewport_size(size);
                let current = self.viewport.viewport_size();
                if current != previous {
                    tracing::debug!(width = current.width, height = current.height, "viewport resized");
                }
            }
            ViewerEvent::MiniMapPressed { point } => {
                let target = self.minimap.unproject_point(point);
                self.viewport.center_on(target);
            }
        }

        let after = (self.viewport.state(), self.active, self.drag.is_dragging());
        EventOutcome {
            changed: before != after,
            prevent_default,
        }
    }

    fn switch_slide(&mut self, index: usize) {
        let Some(entry) = self.catalog.get(index) else {
            tracing::debug!(index, slides = self.catalog.len(), "ignoring unknown slide");
            return;
        };
        let slide = entry.slide();
        self.active = index;
        // Pan resets; zoom carries over to the new slide.
        self.viewport.set_slide(slide);
        self.minimap = MiniMapProjection::new(&slide, self.config.minimap_width);
        tracing::debug!(index, zoom = self.viewport.zoom(), "slide switched");
    }

    /// Returns the current viewport state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.viewport.state()
    }

    /// Returns the viewport engine.
    #[must_use]
    pub fn viewport(&self) -> &SlideViewport {
        &self.viewport
    }

    /// Returns the configuration the session was opened with.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the slide catalog.
    #[must_use]
    pub fn catalog(&self) -> &SlideCatalog {
        &self.catalog
    }

    /// Returns the index of the active slide.
    #[must_use]
    pub fn active_slide(&self) -> usize {
        self.active
    }

    /// Returns the active catalog entry, or `None` for an empty catalog.
    #[must_use]
    pub fn active_entry(&self) -> Option<&SlideEntry> {
        self.catalog.get(self.active)
    }

    /// Returns the drag gesture state.
    #[must_use]
    pub fn drag(&self) -> DragGesture {
        self.drag
    }

    /// Returns the mini-map projection for the active slide.
    #[must_use]
    pub fn minimap(&self) -> MiniMapProjection {
        self.minimap
    }

    /// Returns the mini-map highlight rectangle for the current view.
    #[must_use]
    pub fn indicator_rect(&self) -> Rect {
        self.minimap.indicator_rect(&self.viewport.state())
    }

    /// Builds the read model for the current state.
    #[must_use]
    pub fn frame(&self) -> ViewerFrame {
        let markers = self.active_entry().map(SlideEntry::markers).unwrap_or_default();

        let minimap_markers = markers
            .iter()
            .map(|m| PlacedMarker {
                id: m.id,
                position: self.minimap.project_point(m.position),
                category: m.category,
            })
            .collect();

        let visible_markers: Vec<PlacedMarker> = markers
            .iter()
            .filter(|m| self.viewport.is_visible(m.position))
            .map(|m| PlacedMarker {
                id: m.id,
                position: self.viewport.slide_to_screen_point(m.position),
                category: m.category,
            })
            .collect();

        let state = self.viewport.state();
        ViewerFrame {
            state,
            slide_to_screen: self.viewport.slide_to_screen(),
            active_slide: self.active,
            dragging: self.drag.is_dragging(),
            minimap_size: self.minimap.map_size(),
            indicator: self.minimap.indicator_rect(&state),
            minimap_markers,
            visible_markers,
            slider_value: self.viewport.slider_fraction(),
            magnification: magnification(self.config.base_magnification, state.zoom),
        }
    }
}
