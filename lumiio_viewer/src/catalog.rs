// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use lumiio_viewport::{MiniMapProjection, SlideMarker, VirtualSlide, generate_slide_markers};

use crate::config::ViewerConfig;

/// One slide in the thumbnail strip.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideEntry {
    index: usize,
    label: String,
    slide: VirtualSlide,
    markers: Vec<SlideMarker>,
}

impl SlideEntry {
    /// Position of this entry in the catalog.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display label, for example `"Slide 1"`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Slide dimensions.
    #[must_use]
    pub fn slide(&self) -> VirtualSlide {
        self.slide
    }

    /// Cell markers on this slide, in generation order.
    #[must_use]
    pub fn markers(&self) -> &[SlideMarker] {
        &self.markers
    }

    /// Marker positions projected into a thumbnail `thumb_width` pixels wide.
    #[must_use]
    pub fn thumbnail_markers(&self, thumb_width: f64) -> Vec<Point> {
        let projection = MiniMapProjection::new(&self.slide, thumb_width);
        self.markers
            .iter()
            .map(|m| projection.project_point(m.position))
            .collect()
    }
}

/// The ordered set of slides a session can switch between.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideCatalog {
    entries: Vec<SlideEntry>,
}

impl SlideCatalog {
    /// Builds the mock slide set described by `config`.
    ///
    /// Entry `i` carries the markers from
    /// [`generate_slide_markers`]`(i, ..)`, so rebuilding the catalog always
    /// yields the same slides.
    #[must_use]
    pub fn generate(config: &ViewerConfig) -> Self {
        let slide = config.slide();
        let entries = (0..config.slide_count)
            .map(|index| SlideEntry {
                index,
                label: format!("Slide {}", index + 1),
                slide,
                markers: generate_slide_markers(
                    index,
                    slide.width(),
                    slide.height(),
                    config.markers_per_slide,
                ),
            })
            .collect();
        Self { entries }
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SlideEntry> {
        self.entries.get(index)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the slides in order.
    pub fn iter(&self) -> impl Iterator<Item = &SlideEntry> {
        self.entries.iter()
    }
}
