// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for controller construction and transitions.

use core::fmt;

/// Describes why a configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// [`DotStyle::visible_count`](crate::DotStyle::visible_count) must be greater than 2.
    VisibleCountTooSmall {
        /// The rejected visible count.
        visible_count: usize,
    },
    /// A size or margin was zero, negative, or not finite.
    NonPositiveExtent {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The start index does not address a page.
    StartIndexOutOfRange {
        /// The rejected start index.
        start_index: usize,
        /// Number of pages the index was checked against.
        page_count: usize,
    },
    /// A step or block size was zero.
    ZeroStep {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The preferred slot of the current dot does not fit in the window.
    PositionOutsideWindow {
        /// The rejected slot.
        position: usize,
        /// Estimated number of visible dots.
        visible_estimate: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VisibleCountTooSmall { visible_count } => {
                write!(f, "visible dot count must be greater than 2, got {visible_count}")
            }
            Self::NonPositiveExtent { field, value } => {
                write!(f, "{field} must be finite and greater than 0, got {value}")
            }
            Self::StartIndexOutOfRange {
                start_index,
                page_count,
            } => write!(f, "start index {start_index} is outside 0..{page_count}"),
            Self::ZeroStep { field } => write!(f, "{field} must be at least 1"),
            Self::PositionOutsideWindow {
                position,
                visible_estimate,
            } => write!(
                f,
                "preferred slot {position} does not fit in a window of {visible_estimate} dots"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned by [`PaginationWindowController`](crate::PaginationWindowController)
/// and [`ScrollTargetCalculator`](crate::ScrollTargetCalculator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagerDotsError {
    /// Construction parameters were rejected; no controller was produced.
    InvalidConfig(ConfigError),
    /// An advance or reset target does not address a page.
    ///
    /// The controller state is left exactly as it was before the call.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of pages the index was checked against.
        page_count: usize,
    },
}

impl From<ConfigError> for PagerDotsError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl fmt::Display for PagerDotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid pager dots configuration: {err}"),
            Self::IndexOutOfRange { index, page_count } => {
                write!(f, "page index {index} is outside 0..{page_count}")
            }
        }
    }
}

impl core::error::Error for PagerDotsError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::error::Error;

    use super::{ConfigError, PagerDotsError};

    #[test]
    fn display_names_the_offending_value() {
        let err = PagerDotsError::IndexOutOfRange {
            index: 9,
            page_count: 4,
        };
        assert_eq!(err.to_string(), "page index 9 is outside 0..4");

        let err = ConfigError::VisibleCountTooSmall { visible_count: 2 };
        assert_eq!(
            err.to_string(),
            "visible dot count must be greater than 2, got 2"
        );
    }

    #[test]
    fn invalid_config_exposes_source() {
        let err = PagerDotsError::from(ConfigError::ZeroStep {
            field: "scroll_step",
        });
        assert!(err.source().is_some());
        assert!(
            PagerDotsError::IndexOutOfRange {
                index: 0,
                page_count: 0
            }
            .source()
            .is_none()
        );
    }
}
