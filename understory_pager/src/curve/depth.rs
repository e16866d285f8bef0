// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{CurveContext, Offset, TransitionCurve};

/// Stacked pages: the outgoing page slides away over the incoming one.
///
/// All panels share the same slot and the container never scrolls. The page
/// before the scroll value (higher in z-order) translates out along the axis
/// while the page after it fades in and grows from
/// [`MIN_SCALE`](Self::MIN_SCALE) underneath.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthCurve;

impl DepthCurve {
    /// Scale of the incoming page at the start of a transition.
    pub const MIN_SCALE: f64 = 0.75;
}

impl TransitionCurve for DepthCurve {
    fn position(&self, _index: usize) -> Offset {
        Offset::ZERO
    }

    fn scroll_offset(&self, _cx: &CurveContext, _value: f64) -> f64 {
        0.0
    }

    fn translate(&self, _cx: &CurveContext, value: f64, index: usize) -> Offset {
        let d = index as f64 - value;
        if d < 0.0 {
            Offset::Percent(d.max(-1.0) * 100.0)
        } else {
            Offset::ZERO
        }
    }

    fn opacity(&self, _cx: &CurveContext, value: f64, index: usize) -> f64 {
        let d = index as f64 - value;
        if d <= -1.0 || d >= 1.0 {
            0.0
        } else if d <= 0.0 {
            1.0
        } else {
            1.0 - d
        }
    }

    fn scale(&self, _cx: &CurveContext, value: f64, index: usize) -> f64 {
        let d = index as f64 - value;
        if d > 0.0 && d < 1.0 {
            Self::MIN_SCALE + (1.0 - Self::MIN_SCALE) * (1.0 - d)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PagerAxis;

    const CX: CurveContext = CurveContext {
        axis: PagerAxis::Horizontal,
        extent: 400.0,
        page_count: 3,
        use_overscroll: false,
    };

    #[test]
    fn container_never_scrolls() {
        assert_eq!(DepthCurve.scroll_offset(&CX, 0.0), 0.0);
        assert_eq!(DepthCurve.scroll_offset(&CX, 1.7), 0.0);
        assert_eq!(DepthCurve.position(2), Offset::ZERO);
    }

    #[test]
    fn outgoing_page_slides_away() {
        assert_eq!(DepthCurve.translate(&CX, 0.25, 0), Offset::Percent(-25.0));
        assert_eq!(DepthCurve.translate(&CX, 2.0, 0), Offset::Percent(-100.0));
        assert_eq!(DepthCurve.opacity(&CX, 0.25, 0), 1.0);
        assert_eq!(DepthCurve.scale(&CX, 0.25, 0), 1.0);
    }

    #[test]
    fn incoming_page_fades_and_grows() {
        assert_eq!(DepthCurve.translate(&CX, 0.5, 1), Offset::ZERO);
        assert_eq!(DepthCurve.opacity(&CX, 0.5, 1), 0.5);
        assert_eq!(DepthCurve.scale(&CX, 0.5, 1), 0.875);
        assert_eq!(DepthCurve.opacity(&CX, 0.5, 2), 0.0);
    }

    #[test]
    fn settled_page_is_plain() {
        assert_eq!(DepthCurve.opacity(&CX, 1.0, 1), 1.0);
        assert_eq!(DepthCurve.scale(&CX, 1.0, 1), 1.0);
        assert_eq!(DepthCurve.translate(&CX, 1.0, 1), Offset::ZERO);
    }
}
