// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block-aligned scroll targets for hosts that virtualize the dot row.
//!
//! [`PaginationWindowController`](crate::PaginationWindowController) moves
//! dots by translating their offsets. Hosts that instead render the dots in a
//! scrolling row only need to know which dot index to scroll to. This module
//! answers that: the current dot is kept near a preferred slot and the start
//! index is snapped to a multiple of [`ScrollTargetConfig::block_size`], so a
//! run of single-page advances produces a few larger scroll jumps rather than
//! one scroll per page.
//!
//! ```rust
//! use understory_pager_dots::{ScrollTargetCalculator, ScrollTargetConfig};
//!
//! let mut scroll = ScrollTargetCalculator::new(ScrollTargetConfig::default()).unwrap();
//! assert_eq!(scroll.update(0, 20), Some(0));
//!
//! // Pages 1 to 4 stay within the first block.
//! for page in 1..5 {
//!     assert_eq!(scroll.update(page, 20), None);
//! }
//! // Page 5 would fall off the estimated window: jump a whole block.
//! assert_eq!(scroll.update(5, 20), Some(3));
//! ```

use crate::{ConfigError, PagerDotsError};

/// Parameters of the block-aligned scroll heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTargetConfig {
    /// Preferred slot of the current dot within the window.
    pub position_of_current: usize,
    /// Scroll targets are snapped down to multiples of this.
    pub block_size: usize,
    /// Number of dots the host expects to fit in its viewport.
    pub visible_estimate: usize,
}

impl Default for ScrollTargetConfig {
    fn default() -> Self {
        Self {
            position_of_current: 3,
            block_size: 3,
            visible_estimate: 5,
        }
    }
}

impl ScrollTargetConfig {
    /// Checks that blocks and the window are non-empty and that the preferred
    /// slot lies inside the window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroStep {
                field: "block_size",
            });
        }
        if self.visible_estimate == 0 {
            return Err(ConfigError::ZeroStep {
                field: "visible_estimate",
            });
        }
        if self.position_of_current >= self.visible_estimate {
            return Err(ConfigError::PositionOutsideWindow {
                position: self.position_of_current,
                visible_estimate: self.visible_estimate,
            });
        }
        Ok(())
    }

    /// Largest start index that still fills the estimated window.
    #[must_use]
    pub fn max_page_start(&self, count: usize) -> usize {
        count.saturating_sub(self.visible_estimate)
    }

    /// Index of the dot the host should scroll to so `current` stays visible.
    ///
    /// The result is always in `0..count` (or `0` for an empty row) and, for a
    /// valid config, `current` lies within `visible_estimate` dots of it.
    #[must_use]
    pub fn scroll_target(&self, current: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let max_start = self.max_page_start(count);
        let page_start = current
            .saturating_sub(self.position_of_current)
            .min(max_start);

        let mut aligned = page_start / self.block_size * self.block_size;
        if current >= aligned + self.visible_estimate {
            aligned = (aligned + self.block_size).min(max_start);
        }
        aligned.min(count - 1)
    }
}

/// Tracks the last scroll target so hosts only scroll when it moves.
#[derive(Clone, Debug)]
pub struct ScrollTargetCalculator {
    config: ScrollTargetConfig,
    previous_index: Option<usize>,
    page_count: usize,
    target: Option<usize>,
}

impl ScrollTargetCalculator {
    /// Creates a calculator with no history.
    ///
    /// Fails with [`PagerDotsError::InvalidConfig`] if the config is invalid.
    pub fn new(config: ScrollTargetConfig) -> Result<Self, PagerDotsError> {
        config.validate()?;
        Ok(Self {
            config,
            previous_index: None,
            page_count: 0,
            target: None,
        })
    }

    /// The config in use.
    #[must_use]
    pub fn config(&self) -> &ScrollTargetConfig {
        &self.config
    }

    /// Most recent target, `None` before the first update.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Index passed to the most recent update or reset.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.previous_index
    }

    /// Records `current` and returns the new scroll target if it moved.
    ///
    /// Returns `None` when the host can leave its scroll position alone.
    pub fn update(&mut self, current: usize, count: usize) -> Option<usize> {
        if self.previous_index == Some(current) && self.page_count == count {
            return None;
        }
        self.previous_index = Some(current);
        self.page_count = count;

        let target = self.config.scroll_target(current, count);
        if self.target == Some(target) {
            return None;
        }
        log::debug!("pager dots scroll target -> {target} (current {current} of {count})");
        self.target = Some(target);
        Some(target)
    }

    /// Re-seeds the calculator after the page count changed, without
    /// reporting a jump.
    pub fn reset(&mut self, current: usize, count: usize) {
        self.previous_index = Some(current);
        self.page_count = count;
        self.target = Some(self.config.scroll_target(current, count));
    }
}
