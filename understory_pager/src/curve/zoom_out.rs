// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{CurveContext, Offset, TransitionCurve, soft_limited_offset};

/// Full-width pages that zoom out and dim while moving between them.
///
/// Panels sit side by side one container extent apart and the container scrolls
/// with a quartic ease-in-out. Halfway between two pages the whole strip is
/// scaled down to [`MIN_SCALE`](Self::MIN_SCALE) and both neighbouring panels
/// dim to [`MIN_OPACITY`](Self::MIN_OPACITY).
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomOutCurve;

impl ZoomOutCurve {
    /// Scale at the midpoint of a transition.
    pub const MIN_SCALE: f64 = 0.95;
    /// Opacity of both panels at the midpoint of a transition.
    pub const MIN_OPACITY: f64 = 0.55;

    /// How far into a transition `value` is: `0` on a page, `1` halfway between.
    fn transition_depth(value: f64) -> f64 {
        let frac = value - libm::floor(value);
        1.0 - libm::fabs(2.0 * frac - 1.0)
    }

    fn in_valid_range(cx: &CurveContext, value: f64) -> bool {
        value >= cx.valid_min() && value <= cx.valid_max()
    }
}

impl TransitionCurve for ZoomOutCurve {
    fn position(&self, index: usize) -> Offset {
        Offset::Percent(index as f64 * 100.0)
    }

    fn scroll_offset(&self, cx: &CurveContext, value: f64) -> f64 {
        soft_limited_offset(cx, cx.extent, value, ease_in_out_quartic)
    }

    fn translate(&self, _cx: &CurveContext, _value: f64, _index: usize) -> Offset {
        Offset::ZERO
    }

    fn opacity(&self, cx: &CurveContext, value: f64, index: usize) -> f64 {
        let distance = libm::fabs(value - index as f64);
        if distance >= 1.0 {
            return 0.0;
        }
        if !Self::in_valid_range(cx, value) {
            return 1.0;
        }
        1.0 - (1.0 - Self::MIN_OPACITY) * Self::transition_depth(value)
    }

    fn scale(&self, cx: &CurveContext, value: f64, _index: usize) -> f64 {
        if !Self::in_valid_range(cx, value) {
            return 1.0;
        }
        1.0 - (1.0 - Self::MIN_SCALE) * Self::transition_depth(value)
    }
}

/// 4th-order ease-in-out over `[0, 1]`.
fn ease_in_out_quartic(t: f64) -> f64 {
    if t >= 0.5 {
        1.0 - 8.0 * libm::pow(t - 1.0, 4.0)
    } else {
        8.0 * libm::pow(t, 4.0)
    }
}
