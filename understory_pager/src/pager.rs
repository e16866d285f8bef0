// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size};

use crate::animator::{AnimationStep, Animator};
use crate::curve::{CurveContext, DefaultCurve, TransitionCurve};
use crate::gesture::GestureTracker;
use crate::listeners::Listeners;
use crate::options::{PagerAxis, PagerOptions};
use crate::pages::{PageLookup, PageSet, Panel};

/// How far (in pages) a gesture must move the scroll value away from the
/// selected page before releasing it commits to a neighbour.
pub const SNAP_THRESHOLD: f64 = 0.1;

/// Errors reported by [`Pager`] operations.
///
/// Most invalid calls are silently ignored; only these are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerError {
    /// A pager needs at least one page.
    NoPages,
    /// The last remaining page cannot be removed.
    LastPage,
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPages => f.write_str("a pager needs at least one page"),
            Self::LastPage => f.write_str("cannot remove the last remaining page"),
        }
    }
}

impl core::error::Error for PagerError {}

/// A swipeable pager over host panels.
///
/// The pager keeps a continuous scroll value (a fractional raw page index) and
/// a discrete selected page. Every accepted scroll evaluates the active
/// [`TransitionCurve`] for each panel and stores the result in the panel's
/// [`PanelStyle`](crate::PanelStyle); hosts read [`Pager::panels`] and
/// [`Pager::container_offset`] back after each call.
///
/// Invalid input never panics: out-of-range indices, calls while
/// [locked](Pager::lock), and overlapping animations are ignored.
#[derive(Debug)]
pub struct Pager<H> {
    pages: PageSet<H>,
    options: PagerOptions,
    size: Size,
    curve: Box<dyn TransitionCurve>,
    listeners: Listeners,
    scroll_value: f64,
    container_offset: f64,
    selected: usize,
    notified: usize,
    locked: bool,
    animation: Option<Animator>,
    gesture: GestureTracker,
}

impl<H> Pager<H> {
    /// Creates a pager over `panels` (in page order) inside a container of
    /// the given size, and selects the first page.
    ///
    /// Fails with [`PagerError::NoPages`] if `panels` is empty.
    pub fn new(
        panels: impl IntoIterator<Item = Panel<H>>,
        size: Size,
        options: PagerOptions,
    ) -> Result<Self, PagerError> {
        let pages = PageSet::new(panels, options.use_overscroll);
        if pages.valid_page_count() == 0 {
            return Err(PagerError::NoPages);
        }
        let mut pager = Self {
            pages,
            options,
            size,
            curve: Box::new(DefaultCurve),
            listeners: Listeners::default(),
            scroll_value: 0.0,
            container_offset: 0.0,
            selected: 0,
            notified: 0,
            locked: false,
            animation: None,
            gesture: GestureTracker::default(),
        };
        pager.pages.relayout(pager.curve.as_ref());
        pager.select(0, false);
        Ok(pager)
    }

    /// Listener registry for page, scroll, and page-set notifications.
    #[must_use]
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> PagerOptions {
        self.options
    }

    /// Last measured container size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The page set, sentinels included.
    #[must_use]
    pub fn pages(&self) -> &PageSet<H> {
        &self.pages
    }

    /// All panels in raw order, with their current styles.
    #[must_use]
    pub fn panels(&self) -> &[Panel<H>] {
        self.pages.panels()
    }

    /// Raw page count, sentinels included.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    /// Number of real pages.
    #[must_use]
    pub fn valid_page_count(&self) -> usize {
        self.pages.valid_page_count()
    }

    /// Visible index of the selected page.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.pages.visible_index(self.selected)
    }

    /// Raw index of the selected page.
    #[must_use]
    pub fn selected_raw(&self) -> usize {
        self.selected
    }

    /// Raw fractional scroll value.
    #[must_use]
    pub fn scroll_value(&self) -> f64 {
        self.scroll_value
    }

    /// Native scroll offset of the container along the primary axis, in pixels.
    #[must_use]
    pub fn container_offset(&self) -> f64 {
        self.container_offset
    }

    /// Title of the page at visible `index`.
    #[must_use]
    pub fn page_title(&self, index: usize) -> Option<&str> {
        self.pages.title(index)
    }

    /// The active transition curve.
    #[must_use]
    pub fn transition(&self) -> &dyn TransitionCurve {
        self.curve.as_ref()
    }

    /// The current gesture state.
    #[must_use]
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Freezes the pager: selection, scrolling, and page mutation are ignored
    /// until [`unlock`](Self::unlock).
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Lifts a [`lock`](Self::lock).
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Returns `true` while locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns `true` while an animated transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Selects the page at visible `index`, optionally animating there.
    pub fn select(&mut self, index: usize, animate: bool) {
        if self.locked || index >= self.valid_page_count() {
            return;
        }
        let raw = self.pages.raw_index(index);
        if animate {
            self.animate_to(raw);
        } else {
            self.set_page_immediate(raw);
        }
    }

    /// Selects the page after the current one.
    pub fn select_next(&mut self, animate: bool) {
        self.select(self.selected_index() + 1, animate);
    }

    /// Selects the page before the current one.
    pub fn select_prev(&mut self, animate: bool) {
        if let Some(index) = self.selected_index().checked_sub(1) {
            self.select(index, animate);
        }
    }

    /// Scrolls to a raw fractional `value` in `[0, page_count - 1]`.
    ///
    /// Applies the transition curve to every panel and the container, then
    /// notifies scroll listeners with the visible value. Ignored while locked,
    /// outside the domain, or while a gesture is locked across the pager axis.
    pub fn scroll_to(&mut self, value: f64) {
        if self.locked || !value.is_finite() {
            return;
        }
        let max = self.page_count().saturating_sub(1) as f64;
        if value < 0.0 || value > max || self.gesture.suppresses_scroll() {
            return;
        }

        let cx = self.curve_context();
        let curve = self.curve.as_ref();
        self.container_offset = curve.scroll_offset(&cx, value);
        for (index, panel) in self.pages.panels_mut().iter_mut().enumerate() {
            let style = panel.style_mut();
            style.translate = curve.translate(&cx, value, index);
            style.scale = curve.scale(&cx, value, index);
            style.opacity = curve.opacity(&cx, value, index);
        }
        self.scroll_value = value;

        let visible = if self.options.use_overscroll {
            value - 1.0
        } else {
            value
        };
        self.listeners.notify_scroll_changed(visible);
    }

    /// Jumps to the real page at `raw` without animating, stopping any
    /// animation in flight.
    ///
    /// Ignored while locked or if `raw` is a sentinel or out of range.
    pub fn set_page_immediate(&mut self, raw: usize) {
        if self.locked || !self.is_valid_raw(raw) {
            return;
        }
        self.cancel_animation();
        self.scroll_to(raw as f64);
        self.selected = raw;
        self.commit_selection();
    }

    /// Starts an animated transition to the real page at `raw`.
    ///
    /// The selection (and the page-changed notification) is committed right
    /// away; the scroll value follows over the curve's duration as the host
    /// calls [`tick`](Self::tick). Ignored while locked, while another
    /// animation runs, or if `raw` is a sentinel or out of range.
    pub fn animate_to(&mut self, raw: usize) {
        if self.locked || self.is_animating() || !self.is_valid_raw(raw) {
            return;
        }
        tracing::trace!(from = self.scroll_value, to = raw, "page animation started");
        self.animation = Some(Animator::new(
            self.scroll_value,
            raw as f64,
            self.curve.duration_ms(),
        ));
        self.advance_animation();
        self.selected = raw;
        self.commit_selection();
    }

    /// Advances an in-flight animation by one step.
    ///
    /// Hosts call this every [`STEP_MS`](crate::STEP_MS) milliseconds while
    /// [`is_animating`](Self::is_animating). Returns `true` if more steps
    /// follow.
    pub fn tick(&mut self) -> bool {
        self.advance_animation()
    }

    /// Stops an in-flight animation where it is. The selection stays on the
    /// page the animation was heading to.
    pub fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            tracing::trace!(value = self.scroll_value, "page animation cancelled");
        }
    }

    /// Records the container size and re-applies the current selection.
    ///
    /// Call on window resize and load.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.select(self.selected_index(), false);
    }

    /// Replaces the transition curve, re-positions every panel, and re-applies
    /// the current selection.
    pub fn set_transition(&mut self, curve: impl TransitionCurve + 'static) {
        self.curve = Box::new(curve);
        self.pages.relayout(self.curve.as_ref());
        self.select(self.selected_index(), false);
    }

    /// Changes the primary axis, drops any active gesture, and re-applies the
    /// current selection.
    ///
    /// Ignored while locked.
    pub fn set_axis(&mut self, axis: PagerAxis) {
        if self.locked || self.options.axis == axis {
            return;
        }
        self.options.axis = axis;
        self.gesture.up();
        self.select(self.selected_index(), false);
    }

    /// Enables or disables gesture handling. Disabling drops any active gesture.
    pub fn set_pointer_events(&mut self, enabled: bool) {
        self.options.use_pointer_events = enabled;
        if !enabled {
            self.gesture.up();
        }
    }

    /// Adds or removes the overscroll sentinels, keeping the visible selection.
    ///
    /// Ignored while locked.
    pub fn set_overscroll(&mut self, enabled: bool) {
        if self.locked || self.options.use_overscroll == enabled {
            return;
        }
        let visible = self.selected_index();
        self.cancel_animation();
        self.options.use_overscroll = enabled;
        self.pages.set_overscroll(enabled);
        self.pages.relayout(self.curve.as_ref());

        // Same page, new raw index: not a page change.
        let raw = self.pages.raw_index(visible);
        self.selected = raw;
        self.notified = raw;
        self.scroll_value = raw as f64;
        self.set_page_immediate(raw);
    }

    /// Inserts `panel` at visible `index`; indices past the end append.
    ///
    /// The selection follows the page the user was looking at when the
    /// insertion happens before it, and stays on the same index otherwise.
    pub fn insert(&mut self, index: usize, panel: Panel<H>) {
        if self.locked {
            return;
        }
        let selected = self.selected_index();
        // An in-flight animation targets a raw index that may now name another panel.
        self.cancel_animation();
        self.pages.insert(index, panel);
        self.pages.relayout(self.curve.as_ref());
        self.notify_page_set();

        let raw = if index >= selected {
            self.selected
        } else {
            self.selected + 1
        };
        self.set_page_immediate(raw);
    }

    /// Removes the page at visible `index` and returns its host handle.
    ///
    /// Returns `Ok(None)` without changes when locked or when `index` is out of
    /// range, and [`PagerError::LastPage`] when only one page is left.
    pub fn remove(&mut self, index: usize) -> Result<Option<H>, PagerError> {
        if self.locked {
            return Ok(None);
        }
        if self.valid_page_count() == 1 {
            tracing::error!(index, "refusing to remove the last remaining page");
            return Err(PagerError::LastPage);
        }
        let selected = self.selected_index();
        let Some(panel) = self.pages.remove(index) else {
            return Ok(None);
        };
        self.cancel_animation();
        self.pages.relayout(self.curve.as_ref());
        self.notify_page_set();

        let raw = if index >= selected {
            self.selected.min(self.pages.max_raw())
        } else {
            self.selected - 1
        };
        self.set_page_immediate(raw);
        Ok(panel.into_handle())
    }

    /// Starts a gesture at `pos`.
    ///
    /// Ignored while animating or when pointer events are disabled.
    pub fn pointer_down(&mut self, pos: Point) {
        if !self.options.use_pointer_events || self.is_animating() {
            return;
        }
        self.gesture.down(pos);
    }

    /// Follows the pointer: the scroll value moves one page per container
    /// extent of travel along the pager axis.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.options.use_pointer_events || self.is_animating() {
            return;
        }
        let Some(travel) = self.gesture.update(pos, self.options.axis) else {
            return;
        };
        let extent = self.options.axis.extent(self.size);
        self.scroll_to(self.selected as f64 + travel / extent);
    }

    /// Ends a gesture and snaps to the nearest page.
    ///
    /// Moving more than [`SNAP_THRESHOLD`] of a page away from the selected
    /// page commits to the neighbour in that direction (if there is one);
    /// anything less springs back.
    pub fn pointer_up(&mut self) {
        if !self.gesture.is_down() {
            return;
        }
        if !self.is_animating() {
            let target = self.snap_target();
            self.animate_to(target);
        }
        self.gesture.up();
    }

    /// Abandons a gesture and springs back to the selected page.
    pub fn pointer_cancel(&mut self) {
        if !self.gesture.is_down() {
            return;
        }
        self.gesture.up();
        if !self.is_animating() {
            self.animate_to(self.selected);
        }
    }

    /// Raw page a gesture released at the current scroll value settles on.
    #[must_use]
    pub fn snap_target(&self) -> usize {
        let delta = self.selected as f64 - self.scroll_value;
        if delta > SNAP_THRESHOLD && self.selected != self.pages.min_raw() {
            self.selected - 1
        } else if delta < -SNAP_THRESHOLD && self.selected != self.pages.max_raw() {
            self.selected + 1
        } else {
            self.selected
        }
    }

    fn curve_context(&self) -> CurveContext {
        CurveContext {
            axis: self.options.axis,
            extent: self.options.axis.extent(self.size),
            page_count: self.page_count(),
            use_overscroll: self.options.use_overscroll,
        }
    }

    fn is_valid_raw(&self, raw: usize) -> bool {
        (self.pages.min_raw()..=self.pages.max_raw()).contains(&raw)
    }

    fn advance_animation(&mut self) -> bool {
        let Some(animator) = self.animation.as_mut() else {
            return false;
        };
        match animator.step() {
            AnimationStep::Value(value) => {
                self.scroll_to(value);
                true
            }
            AnimationStep::Last(value) => {
                self.scroll_to(value);
                self.animation = None;
                tracing::trace!(value, "page animation finished");
                false
            }
            AnimationStep::Complete => {
                self.animation = None;
                false
            }
        }
    }

    fn commit_selection(&mut self) {
        if self.selected != self.notified {
            self.notified = self.selected;
            let page = self.selected_index();
            tracing::debug!(page, "selected page changed");
            self.listeners.notify_page_changed(page);
        }
        let selected = self.selected;
        for (index, panel) in self.pages.panels_mut().iter_mut().enumerate() {
            panel.style_mut().interactive = index == selected;
        }
    }

    fn notify_page_set(&self) {
        tracing::debug!(pages = self.valid_page_count(), "page set changed");
        self.listeners.notify_page_set_changed(&self.pages);
    }
}
