// Copyright 2025 the Lumiio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic cell markers for mock slides.
//!
//! Markers are placed by a stateless integer hash of the slide index and a
//! running counter. No external random source is involved, so the same slide
//! index always yields the same markers on every platform.

use alloc::vec::Vec;

use kurbo::Point;

/// Probability that a marker is tagged [`MarkerCategory::Atypical`].
pub const ATYPICAL_THRESHOLD: f64 = 0.2;

/// Fraction of each slide axis that markers are spread over.
///
/// Markers are drawn with their top-left corner at the position, so the far
/// tenth of each axis is left free for the marker body.
pub const MARKER_SPREAD: f64 = 0.9;

/// Classification tag carried by a [`SlideMarker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    /// Ordinary cell.
    Typical,
    /// Cell flagged for review.
    Atypical,
}

/// A point of interest on a slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMarker {
    /// Index of the marker within its slide.
    pub id: usize,
    /// Position in slide space.
    pub position: Point,
    /// Classification tag.
    pub category: MarkerCategory,
}

/// Generates `count` markers for the slide at `slide_index`.
///
/// Each marker draws three values in `[0, 1)`: the first two place it inside
/// `width x height` (scaled by [`MARKER_SPREAD`]) and the third selects the
/// category against [`ATYPICAL_THRESHOLD`].
///
/// ```rust
/// use lumiio_viewport::generate_slide_markers;
///
/// let a = generate_slide_markers(5, 3000.0, 2000.0, 40);
/// let b = generate_slide_markers(5, 3000.0, 2000.0, 40);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn generate_slide_markers(
    slide_index: usize,
    width: f64,
    height: f64,
    count: usize,
) -> Vec<SlideMarker> {
    let seed = slide_seed(slide_index);
    (0..count)
        .map(|id| {
            let base = (id as u64).wrapping_mul(3);
            let rx = unit(seed, base);
            let ry = unit(seed, base + 1);
            let rc = unit(seed, base + 2);
            SlideMarker {
                id,
                position: Point::new(rx * width * MARKER_SPREAD, ry * height * MARKER_SPREAD),
                category: if rc < ATYPICAL_THRESHOLD {
                    MarkerCategory::Atypical
                } else {
                    MarkerCategory::Typical
                },
            }
        })
        .collect()
}

fn slide_seed(slide_index: usize) -> u64 {
    splitmix64((slide_index as u64).wrapping_add(1).wrapping_mul(0xA076_1D64_78BD_642F))
}

/// Uniform value in `[0, 1)` for the `counter`th draw of `seed`.
fn unit(seed: u64, counter: u64) -> f64 {
    let bits = splitmix64(seed ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    // Top 53 bits fill an f64 mantissa exactly.
    (bits >> 11) as f64 / (1_u64 << 53) as f64
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
