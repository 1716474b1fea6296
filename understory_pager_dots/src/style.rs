// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration of a dot strip.

use peniko::Color;

use crate::ConfigError;

/// Immutable visual configuration shared by every dot of a strip.
///
/// All extents are in the same logical units as the render size handed to
/// [`PaginationWindowController`](crate::PaginationWindowController).
/// The invariants are checked by [`DotStyle::validate`], which the controller
/// calls on construction.
#[derive(Clone, Copy, Debug)]
pub struct DotStyle {
    /// Diameter of an idle dot; also the height of the selected pill.
    pub unselected_size: f64,
    /// Width of the selected pill.
    pub selected_width: f64,
    /// Gap between the edges of two adjacent idle dots.
    pub margin: f64,
    /// Number of dots shown at once. Must be greater than 2.
    pub visible_count: usize,
    /// Color of the selected dot.
    pub selected_color: Color,
    /// Color of every other dot.
    pub idle_color: Color,
}

impl DotStyle {
    /// Default number of dots visible at once.
    pub const DEFAULT_VISIBLE_COUNT: usize = 5;
    /// Default idle dot diameter.
    pub const DEFAULT_UNSELECTED_SIZE: f64 = 8.0;
    /// Default selected pill width.
    pub const DEFAULT_SELECTED_WIDTH: f64 = 16.0;
    /// Default gap between dots.
    pub const DEFAULT_MARGIN: f64 = 4.0;

    /// Checks the style invariants.
    ///
    /// Every extent must be finite and strictly positive, and more than two
    /// dots must be visible so that a window shift always leaves a dot on
    /// each side of the selection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_count <= 2 {
            return Err(ConfigError::VisibleCountTooSmall {
                visible_count: self.visible_count,
            });
        }
        for (field, value) in [
            ("unselected_size", self.unselected_size),
            ("selected_width", self.selected_width),
            ("margin", self.margin),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveExtent { field, value });
            }
        }
        Ok(())
    }

    /// Distance between the centers of two adjacent dots.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.unselected_size + self.margin
    }

    /// Width of a row of `dots` idle dots, edge to edge.
    #[must_use]
    pub fn strip_width(&self, dots: usize) -> f64 {
        if dots == 0 {
            return 0.0;
        }
        let dots = dots as f64;
        dots * self.unselected_size + (dots - 1.0) * self.margin
    }
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            unselected_size: Self::DEFAULT_UNSELECTED_SIZE,
            selected_width: Self::DEFAULT_SELECTED_WIDTH,
            margin: Self::DEFAULT_MARGIN,
            visible_count: Self::DEFAULT_VISIBLE_COUNT,
            selected_color: Color::from_rgba8(0x0d, 0x6e, 0xfd, 0xff),
            idle_color: Color::from_rgba8(0x6c, 0x75, 0x7d, 0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DotStyle;
    use crate::ConfigError;

    #[test]
    fn default_style_is_valid() {
        let style = DotStyle::default();
        assert_eq!(style.validate(), Ok(()));
        assert!((style.pitch() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_two_visible_dots() {
        let style = DotStyle {
            visible_count: 2,
            ..DotStyle::default()
        };
        assert_eq!(
            style.validate(),
            Err(ConfigError::VisibleCountTooSmall { visible_count: 2 })
        );
    }

    #[test]
    fn rejects_non_positive_or_nan_extents() {
        let zero_margin = DotStyle {
            margin: 0.0,
            ..DotStyle::default()
        };
        assert!(matches!(
            zero_margin.validate(),
            Err(ConfigError::NonPositiveExtent { field: "margin", .. })
        ));

        let nan_width = DotStyle {
            selected_width: f64::NAN,
            ..DotStyle::default()
        };
        assert!(matches!(
            nan_width.validate(),
            Err(ConfigError::NonPositiveExtent {
                field: "selected_width",
                ..
            })
        ));
    }

    #[test]
    fn strip_width_counts_inner_margins_only() {
        let style = DotStyle::default();
        assert!((style.strip_width(0) - 0.0).abs() < f64::EPSILON);
        assert!((style.strip_width(1) - 8.0).abs() < f64::EPSILON);
        // 5 * 8 + 4 * 4
        assert!((style.strip_width(5) - 56.0).abs() < f64::EPSILON);
    }
}
