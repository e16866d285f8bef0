// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager_tabs --heading-base-level=0

//! Understory Pager Tabs: a tab strip bound to an [`understory_pager::Pager`].
//!
//! A [`TabStrip`] keeps one tab per real page of a pager and mirrors the pager's
//! selection:
//! - On page changes, exactly one tab is marked active.
//! - On page-set changes (insert/remove), the tabs are rebuilt from the pager's
//!   page titles.
//! - Clicking a tab marks it active right away and starts an animated
//!   transition to its page.
//!
//! What a tab *is* is up to the host: a [`TabTemplate`] creates tabs and toggles
//! their active presentation. [`LabelTemplate`] is a plain-data template for
//! hosts that render tabs themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_pager::{Pager, PagerOptions, Panel};
//! use understory_pager_tabs::{LabelTemplate, TabStrip};
//!
//! let panels = ["Inbox", "Drafts", "Sent"].map(|t| Panel::new(t).with_title(t));
//! let mut pager = Pager::new(panels, Size::new(400.0, 300.0), PagerOptions::default()).unwrap();
//! let tabs = TabStrip::attach(&pager, LabelTemplate);
//! assert_eq!(tabs.active(), Some(0));
//!
//! // The tab goes active immediately; the pager animates behind it.
//! assert!(tabs.click(2, &mut pager));
//! assert_eq!(tabs.active(), Some(2));
//! assert_eq!(pager.selected_index(), 2);
//! tabs.with_tabs(|labels| assert_eq!(labels[2].title.as_deref(), Some("Sent")));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use understory_pager::{ListenerId, Listeners, PageLookup, Pager};

/// Creates tabs and switches their active presentation.
pub trait TabTemplate {
    /// One instantiated tab.
    type Tab;

    /// Creates the tab for the page at visible `index`.
    fn instantiate(&mut self, index: usize, title: Option<&str>) -> Self::Tab;

    /// Shows `tab` as active or inactive.
    fn set_active(&mut self, tab: &mut Self::Tab, active: bool);
}

/// A tab as plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// Visible page index.
    pub index: usize,
    /// Page title, if the page has one.
    pub title: Option<String>,
    /// Whether this is the active tab.
    pub active: bool,
}

/// Template producing [`Label`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelTemplate;

impl TabTemplate for LabelTemplate {
    type Tab = Label;

    fn instantiate(&mut self, index: usize, title: Option<&str>) -> Label {
        Label {
            index,
            title: title.map(ToString::to_string),
            active: false,
        }
    }

    fn set_active(&mut self, tab: &mut Label, active: bool) {
        tab.active = active;
    }
}

struct TabState<T: TabTemplate> {
    template: T,
    tabs: Vec<T::Tab>,
    active: Option<usize>,
}

impl<T: TabTemplate> TabState<T> {
    fn rebuild(&mut self, pages: &dyn PageLookup, active: usize) {
        let template = &mut self.template;
        self.tabs = (0..pages.valid_page_count())
            .map(|index| template.instantiate(index, pages.title(index)))
            .collect();
        self.active = None;
        tracing::debug!(tabs = self.tabs.len(), "tab strip rebuilt");
        self.toggle(active.min(self.tabs.len().saturating_sub(1)));
    }

    /// Deactivates every tab, then activates the one at `index`.
    fn toggle(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            self.template.set_active(tab, i == index);
        }
        self.active = Some(index);
    }
}

/// A tab strip kept in sync with one pager.
///
/// The strip registers two listeners on the pager; they are removed by
/// [`detach`](Self::detach) or when the strip is dropped.
pub struct TabStrip<T: TabTemplate> {
    state: Rc<RefCell<TabState<T>>>,
    registration: Option<(Listeners, [ListenerId; 2])>,
}

impl<T: TabTemplate> fmt::Debug for TabStrip<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TabStrip")
            .field("tabs", &state.tabs.len())
            .field("active", &state.active)
            .field("attached", &self.registration.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> TabStrip<T>
where
    T: TabTemplate + 'static,
    T::Tab: 'static,
{
    /// Builds one tab per page of `pager` and starts following it.
    pub fn attach<H>(pager: &Pager<H>, template: T) -> Self {
        let state = Rc::new(RefCell::new(TabState {
            template,
            tabs: Vec::new(),
            active: None,
        }));
        state
            .borrow_mut()
            .rebuild(pager.pages(), pager.selected_index());

        let listeners = pager.listeners().clone();
        let on_page = Rc::clone(&state);
        let page_changed = listeners.on_page_changed(move |index| {
            on_page.borrow_mut().toggle(index);
        });
        let on_page_set = Rc::clone(&state);
        let page_set_changed = listeners.on_page_set_changed(move |pages| {
            let mut state = on_page_set.borrow_mut();
            // The pager re-selects after notifying; keep the old index until it does.
            let active = state.active.unwrap_or(0);
            state.rebuild(pages, active);
        });

        Self {
            state,
            registration: Some((listeners, [page_changed, page_set_changed])),
        }
    }
}

impl<T: TabTemplate> TabStrip<T> {
    /// Handles a click on the tab at `index`.
    ///
    /// Marks the tab active and starts an animated transition to its page.
    /// Ignored (returning `false`) while the pager is animating or if `index`
    /// is out of range.
    pub fn click<H>(&self, index: usize, pager: &mut Pager<H>) -> bool {
        if pager.is_animating() || index >= self.len() {
            return false;
        }
        // Release the borrow first: selecting notifies our own listener.
        self.state.borrow_mut().toggle(index);
        pager.select(index, true);
        true
    }

    /// Rebuilds every tab from `pager`'s current pages and selection.
    pub fn refresh<H>(&self, pager: &Pager<H>) {
        self.state
            .borrow_mut()
            .rebuild(pager.pages(), pager.selected_index());
    }

    /// Stops following the pager. The tabs keep their last state.
    pub fn detach(&mut self) {
        if let Some((listeners, ids)) = self.registration.take() {
            for id in ids {
                listeners.remove(id);
            }
        }
    }

    /// Returns `true` while the strip follows a pager.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Index of the active tab, or `None` if there are no tabs.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.state.borrow().active
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().tabs.len()
    }

    /// Returns `true` if there are no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` with the current tabs.
    ///
    /// `f` must not call back into the pager this strip follows.
    pub fn with_tabs<R>(&self, f: impl FnOnce(&[T::Tab]) -> R) -> R {
        f(&self.state.borrow().tabs)
    }
}

impl<T: TabTemplate> Drop for TabStrip<T> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pages(&'static [&'static str]);

    impl PageLookup for Pages {
        fn valid_page_count(&self) -> usize {
            self.0.len()
        }

        fn title(&self, index: usize) -> Option<&str> {
            self.0.get(index).copied()
        }
    }

    fn state() -> TabState<LabelTemplate> {
        TabState {
            template: LabelTemplate,
            tabs: Vec::new(),
            active: None,
        }
    }

    fn actives(state: &TabState<LabelTemplate>) -> Vec<bool> {
        state.tabs.iter().map(|tab| tab.active).collect()
    }

    #[test]
    fn toggle_keeps_exactly_one_active() {
        let mut state = state();
        state.rebuild(&Pages(&["a", "b", "c"]), 0);
        state.toggle(2);
        assert_eq!(actives(&state), [false, false, true]);
        state.toggle(1);
        assert_eq!(actives(&state), [false, true, false]);
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut state = state();
        state.rebuild(&Pages(&["a", "b"]), 1);
        state.toggle(5);
        assert_eq!(state.active, Some(1));
        assert_eq!(actives(&state), [false, true]);
    }

    #[test]
    fn rebuild_clamps_active_to_new_length() {
        let mut state = state();
        state.rebuild(&Pages(&["a", "b", "c"]), 2);
        state.rebuild(&Pages(&["a"]), 2);
        assert_eq!(state.active, Some(0));
        assert_eq!(state.tabs[0].title.as_deref(), Some("a"));
    }

    #[test]
    fn empty_rebuild_has_no_active_tab() {
        let mut state = state();
        state.rebuild(&Pages(&[]), 0);
        assert!(state.tabs.is_empty());
        assert_eq!(state.active, None);
    }
}
