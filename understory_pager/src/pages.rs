// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered panel storage with optional overscroll sentinels.
//!
//! A [`PageSet`] distinguishes two index spaces:
//!
//! - **raw** indices cover every stored panel, including the empty sentinel
//!   panels added at both ends when overscroll is enabled;
//! - **visible** indices cover only real panels and are what callers see.
//!
//! With overscroll enabled, raw index = visible index + 1.

use alloc::string::String;
use alloc::vec::Vec;

use crate::curve::{Offset, TransitionCurve};

/// Read-only view of the real pages of a pager.
///
/// Page-set listeners receive this so they can rebuild derived UI (tabs,
/// indicators) without calling back into the pager.
pub trait PageLookup {
    /// Number of real pages.
    fn valid_page_count(&self) -> usize;

    /// Title of the page at visible `index`, if it has one.
    fn title(&self, index: usize) -> Option<&str>;
}

/// Visual state of one panel, recomputed by the pager.
///
/// Hosts copy these onto their own elements after each pager call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    /// Static layout offset along the primary axis.
    pub position: Offset,
    /// Stacking order; the first panel is topmost.
    pub z_index: i32,
    /// Per-frame translation along the primary axis.
    pub translate: Offset,
    /// Per-frame scale factor.
    pub scale: f64,
    /// Per-frame opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the panel receives pointer input (only the selected one does).
    pub interactive: bool,
    /// Whether the panel's own content may scroll; sentinels never do.
    pub scrollable: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            position: Offset::ZERO,
            z_index: 0,
            translate: Offset::ZERO,
            scale: 1.0,
            opacity: 1.0,
            interactive: false,
            scrollable: true,
        }
    }
}

/// A page of the pager.
///
/// `H` is the host's handle for the element that renders the page; the pager
/// never looks inside it.
#[derive(Clone, Debug)]
pub struct Panel<H> {
    handle: Option<H>,
    title: Option<String>,
    style: PanelStyle,
}

impl<H> Panel<H> {
    /// Creates an untitled panel for the given host element.
    #[must_use]
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
            title: None,
            style: PanelStyle::default(),
        }
    }

    /// Returns this panel with a title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn sentinel() -> Self {
        Self {
            handle: None,
            title: None,
            style: PanelStyle::default(),
        }
    }

    /// Host handle, or `None` for an overscroll sentinel.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Page title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns `true` for the empty panels that back overscroll.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.handle.is_none()
    }

    /// Current visual state.
    #[must_use]
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    pub(crate) fn style_mut(&mut self) -> &mut PanelStyle {
        &mut self.style
    }

    pub(crate) fn into_handle(self) -> Option<H> {
        self.handle
    }
}

/// Ordered panels, sentinels included.
#[derive(Clone, Debug)]
pub struct PageSet<H> {
    panels: Vec<Panel<H>>,
    overscroll: bool,
}

impl<H> PageSet<H> {
    /// Creates a page set, adding sentinels at both ends if `overscroll` is set.
    pub fn new(panels: impl IntoIterator<Item = Panel<H>>, overscroll: bool) -> Self {
        let mut set = Self {
            panels: panels.into_iter().collect(),
            overscroll: false,
        };
        set.set_overscroll(overscroll);
        set
    }

    /// Adds or removes the overscroll sentinels.
    ///
    /// Returns `true` if the set changed.
    pub fn set_overscroll(&mut self, enabled: bool) -> bool {
        if self.overscroll == enabled {
            return false;
        }
        if enabled {
            self.panels.insert(0, Panel::sentinel());
            self.panels.push(Panel::sentinel());
        } else {
            self.panels.retain(|panel| !panel.is_sentinel());
        }
        self.overscroll = enabled;
        true
    }

    /// Whether overscroll sentinels are present.
    #[must_use]
    pub fn has_overscroll(&self) -> bool {
        self.overscroll
    }

    /// Raw panel count, sentinels included.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.panels.len()
    }

    /// Maps a visible index to a raw index.
    #[must_use]
    pub fn raw_index(&self, visible: usize) -> usize {
        visible + usize::from(self.overscroll)
    }

    /// Maps a raw index to a visible index, saturating at the leading sentinel.
    #[must_use]
    pub fn visible_index(&self, raw: usize) -> usize {
        raw.saturating_sub(usize::from(self.overscroll))
    }

    /// Smallest raw index of a real panel.
    #[must_use]
    pub fn min_raw(&self) -> usize {
        self.raw_index(0)
    }

    /// Largest raw index of a real panel.
    #[must_use]
    pub fn max_raw(&self) -> usize {
        self.raw_index(self.valid_page_count().saturating_sub(1))
    }

    /// All panels in raw order.
    #[must_use]
    pub fn panels(&self) -> &[Panel<H>] {
        &self.panels
    }

    pub(crate) fn panels_mut(&mut self) -> &mut [Panel<H>] {
        &mut self.panels
    }

    /// Panel at visible `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Panel<H>> {
        if index >= self.valid_page_count() {
            return None;
        }
        self.panels.get(self.raw_index(index))
    }

    /// Inserts `panel` at visible `index` and returns the raw slot it landed in.
    ///
    /// Indices at or past the end append after the last real panel.
    pub fn insert(&mut self, index: usize, panel: Panel<H>) -> usize {
        let raw = if index >= self.valid_page_count() {
            self.panels.len() - usize::from(self.overscroll)
        } else {
            self.raw_index(index)
        };
        self.panels.insert(raw, panel);
        raw
    }

    /// Removes and returns the panel at visible `index`.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Panel<H>> {
        if index >= self.valid_page_count() {
            return None;
        }
        Some(self.panels.remove(self.raw_index(index)))
    }

    /// Recomputes static layout: positions from `curve`, z-order (topmost
    /// first), and which panels may scroll their own content.
    pub fn relayout(&mut self, curve: &dyn TransitionCurve) {
        let count = self.panels.len();
        let overscroll = self.overscroll;
        for (index, panel) in self.panels.iter_mut().enumerate() {
            let style = panel.style_mut();
            style.position = curve.position(index);
            style.z_index = i32::try_from(count - index).unwrap_or(i32::MAX);
            style.scrollable = !(overscroll && (index == 0 || index + 1 == count));
        }
    }
}

impl<H> PageLookup for PageSet<H> {
    fn valid_page_count(&self) -> usize {
        self.panels.len() - 2 * usize::from(self.overscroll)
    }

    fn title(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Panel::title)
    }
}
