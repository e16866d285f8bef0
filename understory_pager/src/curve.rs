// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page transition curves.
//!
//! A [`TransitionCurve`] maps the pager's continuous scroll value to concrete
//! per-panel visuals: a static layout [`position`](TransitionCurve::position),
//! the container's native scroll offset, and a per-panel translate, opacity,
//! and scale. Curves are pure: everything they need about the pager is passed
//! in through a [`CurveContext`], so they can be evaluated (and tested) without
//! a pager at all.
//!
//! ```
//! use understory_pager::{CurveContext, DefaultCurve, PagerAxis, TransitionCurve};
//!
//! let cx = CurveContext {
//!     axis: PagerAxis::Horizontal,
//!     extent: 800.0,
//!     page_count: 3,
//!     use_overscroll: false,
//! };
//! let curve = DefaultCurve;
//!
//! // The page under the scroll value is fully opaque, its neighbours are not.
//! assert_eq!(curve.opacity(&cx, 1.0, 1), 1.0);
//! assert_eq!(curve.opacity(&cx, 1.0, 2), 0.0);
//! // One page of scrolling moves the container by an eighth of its extent.
//! assert_eq!(curve.scroll_offset(&cx, 1.0), 100.0);
//! ```

use core::fmt;

use crate::options::PagerAxis;

mod depth;
mod zoom_out;

pub use depth::DepthCurve;
pub use zoom_out::ZoomOutCurve;

/// Animation duration used by every bundled curve, in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 320;

/// A length along the pager's primary axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Percentage of the container extent.
    Percent(f64),
    /// Absolute length in pixels.
    Pixels(f64),
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Self = Self::Percent(0.0);

    /// Resolves this offset to pixels for a container of the given extent.
    #[must_use]
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Percent(p) => extent * p / 100.0,
            Self::Pixels(px) => px,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Formats as a CSS length (`12.5%`, `10px`).
impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Pager state a curve may consult.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveContext {
    /// Primary scroll axis.
    ///
    /// The bundled curves work in axis-relative lengths and ignore it; curves
    /// whose visuals differ per axis (a vertical-only tilt, say) read it here.
    pub axis: PagerAxis,
    /// Container extent along the primary axis, in pixels.
    pub extent: f64,
    /// Raw page count, sentinels included.
    pub page_count: usize,
    /// Whether sentinel overscroll pages are present.
    pub use_overscroll: bool,
}

impl CurveContext {
    /// Smallest raw index of a real (non-sentinel) page.
    #[must_use]
    pub fn valid_min(&self) -> f64 {
        if self.use_overscroll { 1.0 } else { 0.0 }
    }

    /// Largest raw index of a real (non-sentinel) page.
    #[must_use]
    pub fn valid_max(&self) -> f64 {
        let sentinels = if self.use_overscroll { 2 } else { 1 };
        self.page_count.saturating_sub(sentinels) as f64
    }
}

/// Maps a scroll value to per-panel visuals.
///
/// `value` is the raw fractional scroll value in `[0, page_count - 1]` and
/// `index` is a raw panel index (sentinels included).
pub trait TransitionCurve: fmt::Debug {
    /// Static layout offset of the panel at `index` along the primary axis.
    fn position(&self, index: usize) -> Offset;

    /// Native scroll offset of the container, in pixels.
    fn scroll_offset(&self, cx: &CurveContext, value: f64) -> f64;

    /// Per-panel translation along the primary axis.
    fn translate(&self, cx: &CurveContext, value: f64, index: usize) -> Offset;

    /// Per-panel opacity in `[0, 1]`.
    fn opacity(&self, cx: &CurveContext, value: f64, index: usize) -> f64;

    /// Per-panel scale factor; `1.0` is the natural size.
    fn scale(&self, cx: &CurveContext, value: f64, index: usize) -> f64;

    /// How long an animated page transition takes, in milliseconds.
    fn duration_ms(&self) -> u32 {
        DEFAULT_DURATION_MS
    }
}

/// The default curve: a slight parallax scroll with a triangular cross-fade.
///
/// Panels are pre-positioned an eighth of the container apart and the container
/// itself scrolls with an 8th-order ease-in-out, so most of the motion happens
/// around the midpoint between two pages. Opacity falls off linearly, reaching
/// zero half a page away from the scroll value.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCurve;

impl DefaultCurve {
    /// Number of pages' worth of container extent that make up one full
    /// container scroll.
    pub const SCROLL_AMOUNT: f64 = 8.0;
}

impl TransitionCurve for DefaultCurve {
    fn position(&self, index: usize) -> Offset {
        Offset::Percent(index as f64 * (100.0 / Self::SCROLL_AMOUNT))
    }

    fn scroll_offset(&self, cx: &CurveContext, value: f64) -> f64 {
        let per_page = cx.extent / Self::SCROLL_AMOUNT;
        soft_limited_offset(cx, per_page, value, ease_in_out_octic)
    }

    fn translate(&self, _cx: &CurveContext, _value: f64, _index: usize) -> Offset {
        Offset::ZERO
    }

    fn opacity(&self, cx: &CurveContext, value: f64, index: usize) -> f64 {
        let index = index as f64;
        let (min, max) = (cx.valid_min(), cx.valid_max());
        let opacity = if value < min {
            // Entering overscroll: keep the first real page up.
            2.0 - index
        } else if value > max {
            index - max + 1.0
        } else {
            1.0 - 2.0 * libm::fabs(value - index)
        };
        opacity.clamp(0.0, 1.0)
    }

    fn scale(&self, _cx: &CurveContext, _value: f64, _index: usize) -> f64 {
        1.0
    }
}

/// Scroll offset with eased motion between pages and quarter-page soft limits
/// inside the overscroll sentinels.
pub(crate) fn soft_limited_offset(
    cx: &CurveContext,
    per_page: f64,
    value: f64,
    ease: fn(f64) -> f64,
) -> f64 {
    let whole = libm::floor(value);
    let frac = value - whole;
    if cx.use_overscroll && value < 1.0 {
        per_page * (whole + 0.75 + frac / 4.0)
    } else if cx.use_overscroll && value > cx.page_count as f64 - 2.0 {
        per_page * (whole + frac / 4.0)
    } else {
        per_page * (whole + ease(frac))
    }
}

/// 8th-order ease-in-out over `[0, 1]`.
pub(crate) fn ease_in_out_octic(t: f64) -> f64 {
    if t >= 0.5 {
        1.0 - 128.0 * libm::pow(t - 1.0, 8.0)
    } else {
        128.0 * libm::pow(t, 8.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn cx(page_count: usize, use_overscroll: bool) -> CurveContext {
        CurveContext {
            axis: PagerAxis::Horizontal,
            extent: 800.0,
            page_count,
            use_overscroll,
        }
    }

    #[test]
    fn offsets_format_as_css_lengths() {
        assert_eq!(Offset::Percent(12.5).to_string(), "12.5%");
        assert_eq!(Offset::ZERO.to_string(), "0%");
        assert_eq!(Offset::Pixels(10.0).to_string(), "10px");
        assert_eq!(Offset::Percent(-50.0).resolve(200.0), -100.0);
    }

    #[test]
    fn positions_are_an_eighth_apart() {
        assert_eq!(DefaultCurve.position(0), Offset::Percent(0.0));
        assert_eq!(DefaultCurve.position(1), Offset::Percent(12.5));
        assert_eq!(DefaultCurve.position(4), Offset::Percent(50.0));
    }

    #[test]
    fn octic_ease_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_octic(0.0), 0.0);
        assert_eq!(ease_in_out_octic(0.5), 0.5);
        assert_eq!(ease_in_out_octic(1.0), 1.0);
        assert!(ease_in_out_octic(0.2) < 0.001, "slow start");
        assert!(ease_in_out_octic(0.8) > 0.999, "slow finish");
    }

    #[test]
    fn scroll_offset_is_linear_in_whole_pages() {
        let cx = cx(5, false);
        assert_eq!(DefaultCurve.scroll_offset(&cx, 0.0), 0.0);
        assert_eq!(DefaultCurve.scroll_offset(&cx, 3.0), 300.0);
        assert_eq!(DefaultCurve.scroll_offset(&cx, 2.5), 250.0);
    }

    #[test]
    fn overscroll_is_soft_limited() {
        let cx = cx(6, true);
        // Entering overscroll only covers the last quarter of the sentinel page.
        assert_eq!(DefaultCurve.scroll_offset(&cx, 0.0), 75.0);
        assert_eq!(DefaultCurve.scroll_offset(&cx, 0.5), 87.5);
        assert_eq!(DefaultCurve.scroll_offset(&cx, 1.0), 100.0);
        // Past the last real page (raw 4) only a quarter page of travel remains.
        assert_eq!(DefaultCurve.scroll_offset(&cx, 4.5), 412.5);
        assert_eq!(DefaultCurve.scroll_offset(&cx, 5.0), 500.0);
    }

    #[test]
    fn opacity_is_triangular_within_valid_range() {
        let cx = cx(4, false);
        for index in 0..4 {
            assert_eq!(DefaultCurve.opacity(&cx, index as f64, index), 1.0);
        }
        assert_eq!(DefaultCurve.opacity(&cx, 1.25, 1), 0.5);
        assert_eq!(DefaultCurve.opacity(&cx, 1.5, 1), 0.0);
        assert_eq!(DefaultCurve.opacity(&cx, 1.5, 2), 0.0);
        assert_eq!(DefaultCurve.opacity(&cx, 3.0, 1), 0.0);
    }

    #[test]
    fn opacity_fades_through_overscroll_sentinels() {
        let cx = cx(5, true);
        // Before the first real page: sentinel and first page stay visible.
        assert_eq!(DefaultCurve.opacity(&cx, 0.5, 0), 1.0);
        assert_eq!(DefaultCurve.opacity(&cx, 0.5, 1), 1.0);
        assert_eq!(DefaultCurve.opacity(&cx, 0.5, 2), 0.0);
        // Past the last real page (raw 3): it and the trailing sentinel stay up.
        assert_eq!(DefaultCurve.opacity(&cx, 3.5, 3), 1.0);
        assert_eq!(DefaultCurve.opacity(&cx, 3.5, 4), 1.0);
        assert_eq!(DefaultCurve.opacity(&cx, 3.5, 2), 0.0);
    }

    #[test]
    fn default_curve_never_translates_or_scales() {
        let cx = cx(3, false);
        assert_eq!(DefaultCurve.translate(&cx, 1.3, 2), Offset::ZERO);
        assert_eq!(DefaultCurve.scale(&cx, 1.3, 2), 1.0);
        assert_eq!(DefaultCurve.duration_ms(), DEFAULT_DURATION_MS);
    }
}
