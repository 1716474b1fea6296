// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

/// Inclusive range `[start, end]` of dots currently rendered.
///
/// A window always holds `min(visible_count, page_count)` dots and never
/// extends past the last page. Windows only exist for non-empty strips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    start: usize,
    end: usize,
}

impl VisibleWindow {
    /// The window anchored at the first page.
    ///
    /// Returns `None` when `page_count` is zero.
    pub(crate) fn leading(page_count: usize, visible_count: usize) -> Option<Self> {
        let len = visible_count.min(page_count);
        (len > 0).then(|| Self {
            start: 0,
            end: len - 1,
        })
    }

    /// First visible index.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last visible index (inclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of visible dots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: a window holds at least one dot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `index` lies inside the window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// The window as an inclusive index range.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Slides the window towards the last page by up to `step` dots.
    ///
    /// The start is clamped so that the window stays full; callers only shift
    /// forward when the window is not already pinned at the end.
    pub(crate) fn shifted_forward(
        self,
        step: usize,
        page_count: usize,
        visible_count: usize,
    ) -> Self {
        let start = (self.start + step).min(page_count.saturating_sub(visible_count));
        Self::from_start(start, page_count, visible_count)
    }

    /// Slides the window towards the first page by up to `step` dots.
    pub(crate) fn shifted_backward(
        self,
        step: usize,
        page_count: usize,
        visible_count: usize,
    ) -> Self {
        let start = self.start.saturating_sub(step);
        Self::from_start(start, page_count, visible_count)
    }

    fn from_start(start: usize, page_count: usize, visible_count: usize) -> Self {
        let end = (start + visible_count - 1).min(page_count - 1);
        Self { start, end }
    }
}

impl From<VisibleWindow> for RangeInclusive<usize> {
    fn from(window: VisibleWindow) -> Self {
        window.range()
    }
}

#[cfg(test)]
mod tests {
    use super::VisibleWindow;

    #[test]
    fn leading_window_is_capped_by_page_count() {
        assert_eq!(VisibleWindow::leading(0, 5), None);

        let short = VisibleWindow::leading(3, 5).unwrap();
        assert_eq!((short.start(), short.end()), (0, 2));
        assert_eq!(short.len(), 3);

        let long = VisibleWindow::leading(20, 5).unwrap();
        assert_eq!(long.range(), 0..=4);
    }

    #[test]
    fn forward_shift_clamps_to_last_full_window() {
        let window = VisibleWindow::leading(7, 5).unwrap();
        let shifted = window.shifted_forward(3, 7, 5);
        assert_eq!(shifted.range(), 2..=6);
        assert_eq!(shifted.len(), 5);
    }

    #[test]
    fn backward_shift_clamps_to_first_page() {
        let window = VisibleWindow::leading(20, 5)
            .unwrap()
            .shifted_forward(3, 20, 5)
            .shifted_forward(3, 20, 5);
        assert_eq!(window.range(), 6..=10);

        let back = window.shifted_backward(3, 20, 5);
        assert_eq!(back.range(), 3..=7);
        assert_eq!(back.shifted_backward(3, 20, 5).range(), 0..=4);
        assert_eq!(
            back.shifted_backward(3, 20, 5)
                .shifted_backward(3, 20, 5)
                .range(),
            0..=4
        );
    }

    #[test]
    fn contains_is_inclusive() {
        let window = VisibleWindow::leading(20, 5)
            .unwrap()
            .shifted_forward(3, 20, 5);
        assert!(!window.contains(2));
        assert!(window.contains(3));
        assert!(window.contains(7));
        assert!(!window.contains(8));
    }
}
