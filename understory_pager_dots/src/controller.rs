// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sliding-window pagination controller.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::{ConfigError, DotStyle, PagerDotsError, VisibleWindow};

/// Number of dots the window moves in one shift unless configured otherwise.
pub const DEFAULT_SCROLL_STEP: usize = 3;

/// Direction of a unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Towards higher page indices.
    Forward,
    /// Towards lower page indices.
    Backward,
}

/// Summary of one [`PaginationWindowController::advance_to`] call.
///
/// Hosts can use `direction` and `window_shifts` to pick the direction of the
/// strip's slide animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// Number of unit steps applied. Zero for a no-op.
    pub steps: usize,
    /// Direction of travel, `None` for a no-op.
    pub direction: Option<StepDirection>,
    /// How many of those steps also slid the visible window.
    pub window_shifts: usize,
}

/// Visual target of a single dot.
#[derive(Clone, Copy, Debug)]
pub struct DotState {
    /// Target size; [`Size::ZERO`] for dots outside the window.
    pub size: Size,
    /// Target color.
    pub color: Color,
    /// Center of the dot's slot in render coordinates.
    pub offset: Point,
    /// Whether the dot lies inside the visible window.
    pub visible: bool,
}

impl DotState {
    /// Target bounds of the dot, centered on its slot.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.offset, self.size)
    }
}

/// Owns the visible window and per-dot visual targets of a pagination strip.
///
/// The host keeps the authoritative page index and calls
/// [`advance_to`](Self::advance_to) whenever it changes; the controller walks
/// there one page at a time, sliding the window by
/// [`scroll_step`](Self::scroll_step) dots whenever the selection is about to
/// reach the trailing (or leading) visible slot. After every call the host
/// reads the targets back and animates towards them on its own schedule.
///
/// A controller with zero pages is valid and empty: it has no selection, no
/// window, and every index is out of range.
///
/// ```rust
/// use understory_pager_dots::{DotStyle, PaginationWindowController};
///
/// let mut dots = PaginationWindowController::new(20, DotStyle::default(), 0).unwrap();
/// assert_eq!(dots.visible_window().unwrap().range(), 0..=4);
///
/// // Reaching the last-but-one slot slides the window by three dots.
/// let outcome = dots.advance_to(4).unwrap();
/// assert_eq!(outcome.window_shifts, 1);
/// assert_eq!(dots.visible_window().unwrap().range(), 3..=7);
/// ```
#[derive(Clone, Debug)]
pub struct PaginationWindowController {
    style: DotStyle,
    scroll_step: usize,
    render_size: Size,
    page_count: usize,
    selected: usize,
    window: Option<VisibleWindow>,
    offsets: Vec<Point>,
    size_targets: Vec<Size>,
    color_targets: Vec<Color>,
    revision: u64,
}

impl PaginationWindowController {
    /// Creates a controller for `page_count` dots with `start_index` selected.
    ///
    /// The window starts at the first page and the selection is walked forward
    /// to `start_index`, so the result is the same as advancing a fresh
    /// controller from page 0. The render size starts at [`Size::ZERO`]; see
    /// [`with_render_size`](Self::with_render_size).
    ///
    /// Fails with [`PagerDotsError::InvalidConfig`] if the style is invalid or
    /// `start_index` does not address a page of a non-empty strip.
    pub fn new(
        page_count: usize,
        style: DotStyle,
        start_index: usize,
    ) -> Result<Self, PagerDotsError> {
        style.validate()?;
        if page_count > 0 && start_index >= page_count {
            return Err(ConfigError::StartIndexOutOfRange {
                start_index,
                page_count,
            }
            .into());
        }

        let mut controller = Self {
            style,
            scroll_step: DEFAULT_SCROLL_STEP,
            render_size: Size::ZERO,
            page_count: 0,
            selected: 0,
            window: None,
            offsets: Vec::new(),
            size_targets: Vec::new(),
            color_targets: Vec::new(),
            revision: 0,
        };
        controller.rebuild(page_count, start_index);
        log::trace!("pager dots created: {page_count} pages, start {start_index}");
        Ok(controller)
    }

    /// Sets how many dots a window shift moves, rebuilding the state at the
    /// current selection.
    ///
    /// Steps larger than `visible_count - 2` are capped to that value when
    /// shifting, so the selection always keeps a visible neighbour on the side
    /// it is moving towards.
    ///
    /// Fails with [`PagerDotsError::InvalidConfig`] if `step` is zero.
    pub fn with_scroll_step(mut self, step: usize) -> Result<Self, PagerDotsError> {
        if step == 0 {
            return Err(ConfigError::ZeroStep {
                field: "scroll_step",
            }
            .into());
        }
        self.scroll_step = step;
        self.rebuild(self.page_count, self.selected);
        Ok(self)
    }

    /// Sets the render size the strip is centered in.
    #[must_use]
    pub fn with_render_size(mut self, size: Size) -> Self {
        self.render_size = size;
        self.layout_offsets();
        self
    }

    /// Updates the render size and re-centers the offsets for the current window.
    pub fn set_render_size(&mut self, size: Size) {
        if self.render_size == size {
            return;
        }
        self.render_size = size;
        self.layout_offsets();
        self.bump_revision();
    }

    /// Moves the selection to `target`, one page at a time.
    ///
    /// Each unit step may slide the window on its own, so a jump of several
    /// pages can shift the window several times. Selecting the current page is
    /// a no-op.
    ///
    /// Fails with [`PagerDotsError::IndexOutOfRange`] if `target` does not
    /// address a page; the state is left untouched.
    pub fn advance_to(&mut self, target: usize) -> Result<AdvanceOutcome, PagerDotsError> {
        if target >= self.page_count {
            return Err(PagerDotsError::IndexOutOfRange {
                index: target,
                page_count: self.page_count,
            });
        }
        if target == self.selected {
            return Ok(AdvanceOutcome::default());
        }

        let (direction, steps) = if target > self.selected {
            (StepDirection::Forward, target - self.selected)
        } else {
            (StepDirection::Backward, self.selected - target)
        };
        let mut window_shifts = 0;
        for _ in 0..steps {
            let shifted = match direction {
                StepDirection::Forward => self.step_forward(),
                StepDirection::Backward => self.step_backward(),
            };
            window_shifts += usize::from(shifted);
        }
        self.bump_revision();

        Ok(AdvanceOutcome {
            steps,
            direction: Some(direction),
            window_shifts,
        })
    }

    /// Reinitializes the controller for a new page count, keeping style,
    /// scroll step and render size.
    ///
    /// Fails with [`PagerDotsError::IndexOutOfRange`] if `index` does not
    /// address a page of a non-empty strip; the state is left untouched.
    pub fn reset(&mut self, index: usize, page_count: usize) -> Result<(), PagerDotsError> {
        if page_count > 0 && index >= page_count {
            return Err(PagerDotsError::IndexOutOfRange { index, page_count });
        }
        log::debug!(
            "pager dots reset: {} -> {page_count} pages, selected {index}",
            self.page_count
        );
        self.rebuild(page_count, index);
        self.bump_revision();
        Ok(())
    }

    /// Total number of dots.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns `true` if the strip has no dots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Index of the selected dot, `None` for an empty strip.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.window.map(|_| self.selected)
    }

    /// The visible window, `None` for an empty strip.
    #[must_use]
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Number of dots hidden before and after the visible window.
    #[must_use]
    pub fn hidden_counts(&self) -> (usize, usize) {
        self.window.map_or((0, 0), |window| {
            (window.start(), self.page_count - 1 - window.end())
        })
    }

    /// Visual target of dot `index`, `None` if it does not exist.
    #[must_use]
    pub fn dot_state(&self, index: usize) -> Option<DotState> {
        (index < self.page_count).then(|| self.state_of(index))
    }

    /// Visual targets of every dot in index order.
    pub fn dots(&self) -> impl ExactSizeIterator<Item = DotState> + '_ {
        (0..self.page_count).map(|index| self.state_of(index))
    }

    /// Per-dot slot centers.
    #[must_use]
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    /// Per-dot target sizes.
    #[must_use]
    pub fn size_targets(&self) -> &[Size] {
        &self.size_targets
    }

    /// Per-dot target colors.
    #[must_use]
    pub fn color_targets(&self) -> &[Color] {
        &self.color_targets
    }

    /// Returns the visible dot whose slot contains `point`.
    ///
    /// Slots are one pitch wide and one pitch tall, centered on each dot's
    /// offset, so taps in the margin between two dots resolve to the nearer one.
    #[must_use]
    pub fn dot_at(&self, point: Point) -> Option<usize> {
        let window = self.window?;
        let half = self.style.pitch() * 0.5;
        window.range().find(|&index| {
            let center = self.offsets[index];
            point.x >= center.x - half
                && point.x < center.x + half
                && (point.y - center.y).abs() <= half
        })
    }

    /// The style the controller was built with.
    #[must_use]
    pub fn style(&self) -> &DotStyle {
        &self.style
    }

    /// Number of dots one window shift moves.
    #[must_use]
    pub fn scroll_step(&self) -> usize {
        self.scroll_step
    }

    /// Render size the strip is centered in.
    #[must_use]
    pub fn render_size(&self) -> Size {
        self.render_size
    }

    /// Returns the current revision counter.
    ///
    /// Bumped whenever a call changes the selection, window, page count or
    /// layout. No-op calls leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Dots moved by one shift.
    ///
    /// A shift must leave the new selection at least one slot away from either
    /// edge of the window, so the step never exceeds `visible_count - 2`.
    fn shift_step(&self) -> usize {
        self.scroll_step.min(self.style.visible_count - 2)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn rebuild(&mut self, page_count: usize, start_index: usize) {
        self.page_count = page_count;
        self.selected = 0;
        self.window = VisibleWindow::leading(page_count, self.style.visible_count);
        self.layout_offsets();
        self.retarget_all();
        if page_count == 0 {
            return;
        }
        for _ in 0..start_index {
            self.step_forward();
        }
    }

    /// Advances the selection by one. Returns `true` if the window slid.
    fn step_forward(&mut self) -> bool {
        let Some(window) = self.window else {
            return false;
        };
        debug_assert!(
            self.selected + 1 < self.page_count,
            "step_forward past the last page"
        );
        let next = self.selected + 1;
        if next == window.end() && window.end() != self.page_count - 1 {
            let visible = self.style.visible_count;
            let shifted = window.shifted_forward(self.shift_step(), self.page_count, visible);
            log::debug!("pager dots window {:?} -> {:?}", window.range(), shifted.range());
            self.window = Some(shifted);
            self.selected = next;
            self.layout_offsets();
            self.retarget_all();
            true
        } else {
            let previous = self.selected;
            self.selected = next;
            self.retarget(previous);
            self.retarget(next);
            false
        }
    }

    /// Moves the selection back by one. Returns `true` if the window slid.
    fn step_backward(&mut self) -> bool {
        let Some(window) = self.window else {
            return false;
        };
        debug_assert!(self.selected > 0, "step_backward before the first page");
        let next = self.selected - 1;
        if next == window.start() && window.start() != 0 {
            let visible = self.style.visible_count;
            let shifted = window.shifted_backward(self.shift_step(), self.page_count, visible);
            log::debug!("pager dots window {:?} -> {:?}", window.range(), shifted.range());
            self.window = Some(shifted);
            self.selected = next;
            self.layout_offsets();
            self.retarget_all();
            true
        } else {
            let previous = self.selected;
            self.selected = next;
            self.retarget(previous);
            self.retarget(next);
            false
        }
    }

    /// Lays the strip out so the visible window is centered in the render size.
    ///
    /// The strip translates rigidly: moving the window by `n` dots moves every
    /// offset by `n` pitches.
    fn layout_offsets(&mut self) {
        self.offsets.clear();
        let Some(window) = self.window else {
            return;
        };
        let pitch = self.style.pitch();
        let first_x = (self.render_size.width - self.style.strip_width(window.len())) * 0.5
            + self.style.unselected_size * 0.5;
        let y = self.render_size.height * 0.5;
        let start = window.start() as f64;
        self.offsets.extend(
            (0..self.page_count)
                .map(|index| Point::new(first_x + (index as f64 - start) * pitch, y)),
        );
    }

    fn retarget_all(&mut self) {
        let sizes: Vec<Size> = (0..self.page_count)
            .map(|index| self.size_for(index))
            .collect();
        let colors: Vec<Color> = (0..self.page_count)
            .map(|index| self.color_for(index))
            .collect();
        self.size_targets = sizes;
        self.color_targets = colors;
    }

    fn retarget(&mut self, index: usize) {
        self.size_targets[index] = self.size_for(index);
        self.color_targets[index] = self.color_for(index);
    }

    fn size_for(&self, index: usize) -> Size {
        let dot = self.style.unselected_size;
        if index == self.selected {
            Size::new(self.style.selected_width, dot)
        } else if self.is_visible(index) {
            Size::new(dot, dot)
        } else {
            Size::ZERO
        }
    }

    fn color_for(&self, index: usize) -> Color {
        if index == self.selected {
            self.style.selected_color
        } else {
            self.style.idle_color
        }
    }

    fn is_visible(&self, index: usize) -> bool {
        self.window.is_some_and(|window| window.contains(index))
    }

    fn state_of(&self, index: usize) -> DotState {
        DotState {
            size: self.size_targets[index],
            color: self.color_targets[index],
            offset: self.offsets[index],
            visible: self.is_visible(index),
        }
    }
}
