// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: a headless, swipeable pager (carousel) engine.
//!
//! A [`Pager`] turns an ordered set of host panels into pages along one axis.
//! It tracks:
//! - A continuous **scroll value**: a fractional raw page index that
//!   interpolates between pages while dragging or animating.
//! - A discrete **selected page**, committed on selection or gesture release.
//! - Per-panel visuals ([`PanelStyle`]) computed by a pluggable
//!   [`TransitionCurve`] each time the scroll value changes.
//!
//! It does **not** render anything or own a timer. Callers are expected to:
//! - Copy [`Pager::panels`] styles and [`Pager::container_offset`] onto their
//!   own elements after each call.
//! - Forward pointer/touch input to [`Pager::pointer_down`],
//!   [`Pager::pointer_move`], and [`Pager::pointer_up`].
//! - Call [`Pager::tick`] every [`STEP_MS`] milliseconds while
//!   [`Pager::is_animating`].
//! - Call [`Pager::resize`] when the container is resized or first laid out.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_pager::{Pager, PagerOptions, Panel};
//!
//! // Panels wrap whatever handle the host uses for its elements.
//! let panels = ["inbox", "drafts", "sent"]
//!     .into_iter()
//!     .map(|id| Panel::new(id).with_title(id.to_uppercase()));
//! let mut pager = Pager::new(panels, Size::new(400.0, 300.0), PagerOptions::default()).unwrap();
//!
//! // Drag a third of the container to the left and let go.
//! pager.pointer_down(Point::new(300.0, 150.0));
//! pager.pointer_move(Point::new(166.0, 152.0));
//! pager.pointer_up();
//!
//! // The selection commits on release; the scroll value catches up on ticks.
//! assert_eq!(pager.selected_index(), 1);
//! while pager.tick() {}
//! assert_eq!(pager.scroll_value(), 1.0);
//! assert_eq!(pager.page_title(1), Some("DRAFTS"));
//! ```
//!
//! ## Overscroll
//!
//! With [`PagerOptions::use_overscroll`], an empty sentinel panel is kept at
//! each end so the first and last pages can be dragged a little past their
//! resting point before springing back. Sentinels count towards
//! [`Pager::page_count`] (the **raw** index space) but never towards
//! [`Pager::valid_page_count`] or any **visible** index.
//!
//! ## Notifications
//!
//! [`Pager::listeners`] exposes three listener lists: page changes
//! (edge-triggered, fired when a selection is committed), scroll changes (every
//! accepted scroll step), and page-set changes (after insert/remove).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod curve;
mod gesture;
mod listeners;
mod options;
mod pager;
mod pages;

pub use animator::{AnimationStep, Animator, STEP_MS};
pub use curve::{
    CurveContext, DEFAULT_DURATION_MS, DefaultCurve, DepthCurve, Offset, TransitionCurve,
    ZoomOutCurve,
};
pub use gesture::{AXIS_LOCK_THRESHOLD, AxisLock, GestureTracker};
pub use listeners::{ListenerId, ListenerKind, Listeners};
pub use options::{PagerAxis, PagerOptions, ParseAxisError};
pub use pager::{Pager, PagerError, SNAP_THRESHOLD};
pub use pages::{PageLookup, PageSet, Panel, PanelStyle};
