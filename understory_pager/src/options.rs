// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Size, Vec2};

/// The axis a [`Pager`](crate::Pager) scrolls along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PagerAxis {
    /// Pages are laid out left to right.
    #[default]
    Horizontal,
    /// Pages are laid out top to bottom.
    Vertical,
}

impl PagerAxis {
    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn primary(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the component of `v` orthogonal to this axis.
    #[must_use]
    pub fn secondary(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.y,
            Self::Vertical => v.x,
        }
    }

    /// Returns the container extent along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

impl FromStr for PagerAxis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseAxisError),
        }
    }
}

/// Error returned when parsing a [`PagerAxis`] from an unrecognized string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseAxisError;

impl fmt::Display for ParseAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pager axis must be \"horizontal\" or \"vertical\"")
    }
}

impl core::error::Error for ParseAxisError {}

/// Construction options for a [`Pager`](crate::Pager).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerOptions {
    /// Adds an empty sentinel page at both ends so the pager can be dragged
    /// slightly past the first and last real page.
    pub use_overscroll: bool,
    /// Enables pointer/touch gesture handling.
    pub use_pointer_events: bool,
    /// Primary scroll axis.
    pub axis: PagerAxis,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            use_overscroll: false,
            use_pointer_events: true,
            axis: PagerAxis::Horizontal,
        }
    }
}

impl PagerOptions {
    /// Returns these options with overscroll sentinels enabled or disabled.
    #[must_use]
    pub fn with_overscroll(mut self, enabled: bool) -> Self {
        self.use_overscroll = enabled;
        self
    }

    /// Returns these options with gesture handling enabled or disabled.
    #[must_use]
    pub fn with_pointer_events(mut self, enabled: bool) -> Self {
        self.use_pointer_events = enabled;
        self
    }

    /// Returns these options with the given primary axis.
    #[must_use]
    pub fn with_axis(mut self, axis: PagerAxis) -> Self {
        self.axis = axis;
        self
    }
}
