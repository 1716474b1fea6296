// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager_dots --heading-base-level=0

//! Understory Pager Dots: headless state for pagination-dot indicators.
//!
//! This crate models the bookkeeping behind an animated carousel/onboarding
//! dot strip: given the current page and the page count, which dots are
//! visible, where each one sits, how big and which color it should be, and how
//! the visible window slides as the user pages back and forth.
//!
//! The core pieces are:
//!
//! - [`DotStyle`]: immutable visual configuration (sizes, margin, colors, and
//!   how many dots fit on screen).
//! - [`PaginationWindowController`]: owns the [`VisibleWindow`] and per-dot
//!   targets, and updates them one page at a time via
//!   [`PaginationWindowController::advance_to`].
//! - [`ScrollTargetCalculator`]: an alternate heuristic for hosts that render
//!   the dots in a scrolling row and only need a dot index to scroll to.
//!
//! This crate does **not** paint anything or run animations. Host frameworks
//! are responsible for:
//!
//! - Owning the authoritative page index and calling
//!   [`PaginationWindowController::advance_to`] when it changes.
//! - Reading [`DotState`] targets back after each call and animating towards
//!   them with whatever easing and duration they like.
//! - Mapping taps to pages, optionally with [`PaginationWindowController::dot_at`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_pager_dots::{DotStyle, PaginationWindowController};
//!
//! // Seven pages, five dots on screen, starting on page 2.
//! let mut dots = PaginationWindowController::new(7, DotStyle::default(), 2)
//!     .unwrap()
//!     .with_render_size(Size::new(120.0, 24.0));
//!
//! dots.advance_to(3).unwrap();
//! assert_eq!(dots.visible_window().unwrap().range(), 0..=4);
//!
//! // Page 4 is the last-but-one visible slot: the window slides towards the end.
//! dots.advance_to(4).unwrap();
//! assert_eq!(dots.visible_window().unwrap().range(), 2..=6);
//!
//! for dot in dots.dots().filter(|dot| dot.visible) {
//!     // Host code would animate towards `dot.size`, `dot.color` and `dot.offset`.
//!     assert!(dot.size.width > 0.0);
//! }
//! ```
//!
//! All extents and offsets live in the caller's logical coordinate space.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod error;
mod scroll_target;
mod style;
mod window;

pub use controller::{
    AdvanceOutcome, DEFAULT_SCROLL_STEP, DotState, PaginationWindowController, StepDirection,
};
pub use error::{ConfigError, PagerDotsError};
pub use scroll_target::{ScrollTargetCalculator, ScrollTargetConfig};
pub use style::DotStyle;
pub use window::VisibleWindow;
