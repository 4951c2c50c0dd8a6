//! Sub-view state machine and command surface of the range picker.
//!
//! The presentation layer turns gestures into the commands below, re-reads
//! the queries when notified, and renders whatever [`ViewController::current_view`]
//! reports. Nothing here touches a rendering surface.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Local, Weekday};

use crate::error::PickerError;
use crate::models::date_value::DateValue;
use crate::models::range::{RangeSelection, RangeSnapshot, RangeState};
use crate::models::settings::PickerConfig;
use crate::models::side::Side;
use crate::services::persistence::SavedState;

use super::highlight::{highlighted_days, is_highlighted};
use super::listeners::{ChangeNotifier, ListenerId, RangeResultListener};
use super::view::PickerView;

/// Lifecycle of the dialog the controller belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Open,
    Confirmed,
    Cancelled,
}

pub struct ViewController {
    config: PickerConfig,
    range: RangeState,
    /// Restored on cancel.
    committed: RangeSnapshot,
    view: PickerView,
    /// Side edited by the current view. In the duration view this is the
    /// side that moves; the other side is the anchor.
    focus: Side,
    highlighted: Vec<DateValue>,
    notifier: ChangeNotifier,
    result_listener: Option<Box<dyn RangeResultListener>>,
    phase: DialogPhase,
}

impl ViewController {
    /// Build a picker; missing initial dates default to today.
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        let today = DateValue::from_naive(Local::now().date_naive());
        Self::with_today(config, today)
    }

    pub fn with_today(config: PickerConfig, today: DateValue) -> Result<Self, PickerError> {
        let range = Self::initial_range(&config, today)?;
        let side = if range.is_enabled(Side::Start) {
            Side::Start
        } else {
            Side::End
        };

        log::debug!(
            "Opening range picker: start={}, end={}, view={}",
            range.start(),
            range.end(),
            PickerView::day(side)
        );

        Ok(Self::assemble(config, range, PickerView::day(side), side))
    }

    /// Rebuild a picker suspended with [`ViewController::save_state`].
    pub fn from_saved(saved: &SavedState) -> Result<Self, PickerError> {
        saved.config.validate()?;
        let bounds = saved.config.bounds()?;
        let mut range = RangeState::from_snapshot(saved.range, bounds)?;
        range.set_pad(saved.duration_pad);

        let fallback = if range.is_enabled(Side::Start) {
            Side::Start
        } else {
            Side::End
        };
        let mut controller =
            Self::assemble(saved.config.clone(), range, PickerView::day(fallback), fallback);
        controller.committed = saved.committed;

        if controller.is_view_available(saved.view) {
            controller.view = saved.view;
            controller.focus = saved.view.side().unwrap_or(saved.focus);
        } else {
            log::warn!(
                "Saved view {} is no longer reachable, showing {}",
                saved.view,
                controller.view
            );
        }

        Ok(controller)
    }

    /// Range described by the initial-selection fields of `config`; a
    /// missing start falls back to `today`.
    fn initial_range(config: &PickerConfig, today: DateValue) -> Result<RangeState, PickerError> {
        config.validate()?;
        let bounds = config.bounds()?;

        let start = config.start_date.unwrap_or(today);
        let end = config.end_date.unwrap_or(start);
        let range = RangeState::new(start, end, bounds)
            .with_enabled(config.start_enabled, config.end_enabled)?;
        Ok(range)
    }

    fn assemble(config: PickerConfig, range: RangeState, view: PickerView, focus: Side) -> Self {
        let committed = range.snapshot();
        let highlighted = highlighted_days(&committed);
        Self {
            config,
            range,
            committed,
            view,
            focus,
            highlighted,
            notifier: ChangeNotifier::new(),
            result_listener: None,
            phase: DialogPhase::Open,
        }
    }

    // ---- listeners ---------------------------------------------------------

    /// Register a change listener, called once after every successful command.
    ///
    /// Listeners run before the command returns, while the controller is still
    /// mutably borrowed. A host keeping the controller in `Rc<RefCell<_>>`
    /// cannot borrow it from inside the callback: set a flag there and re-read
    /// the queries once the command has returned.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Shared handle to the notifier, e.g. for listeners that remove themselves.
    pub fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }

    pub fn set_result_listener(&mut self, listener: Box<dyn RangeResultListener>) {
        self.result_listener = Some(listener);
    }

    // ---- commands ----------------------------------------------------------

    /// A year was picked in `side`'s year list; returns to that side's day grid.
    pub fn select_year(&mut self, side: Side, year: i32) -> Result<(), PickerError> {
        self.ensure_open()?;
        self.ensure_enabled(side)?;

        let date = self.range.date(side).with_year(year);
        self.range.set_date(side, date);
        self.show(PickerView::day(side));

        log::debug!("Selected {} year {} -> {}", side, year, self.range.date(side));
        self.refresh();
        Ok(())
    }

    /// A day was tapped in `side`'s grid. `month` is zero-based.
    ///
    /// Picking the start day moves on to the end grid when the end is enabled.
    pub fn select_day(
        &mut self,
        side: Side,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<(), PickerError> {
        self.ensure_open()?;
        self.ensure_enabled(side)?;

        self.range.set_date(side, DateValue::new(year, month, day));
        let next = match side {
            Side::Start if self.range.is_enabled(Side::End) => PickerView::EndDay,
            _ => PickerView::day(side),
        };
        self.show(next);

        log::debug!(
            "Selected {} day -> start={}, end={}",
            side,
            self.range.start(),
            self.range.end()
        );
        self.refresh();
        Ok(())
    }

    /// Flip a side's enable switch. The last enabled side cannot be turned off.
    pub fn toggle_enabled(&mut self, side: Side) -> Result<(), PickerError> {
        self.ensure_open()?;

        let enable = !self.range.is_enabled(side);
        if let Err(err) = self.range.set_enabled(side, enable) {
            log::warn!("Rejected toggle of {} date: {}", side, err);
            return Err(err);
        }

        if !enable && (self.view.side() == Some(side) || self.view == PickerView::Duration) {
            self.show(PickerView::day(side.other()));
        }

        log::debug!(
            "{} date {}",
            side,
            if enable { "enabled" } else { "disabled" }
        );
        self.refresh();
        Ok(())
    }

    /// Switch sub-view. Entering the duration pad keeps the current side as
    /// the moving side and shows the current duration ready to be replaced.
    pub fn request_view(&mut self, view: PickerView) -> Result<(), PickerError> {
        self.ensure_open()?;
        if !self.is_view_available(view) {
            log::warn!("Rejected switch to unavailable {} view", view);
            return Err(PickerError::ViewUnavailable(view));
        }

        if view == PickerView::Duration {
            self.range.begin_duration_entry();
        }
        self.show(view);

        log::debug!("Showing {} view (focus on {})", self.view, self.focus);
        self.refresh();
        Ok(())
    }

    /// The arrow next to the duration: on the pad it swaps which side moves,
    /// elsewhere it opens the pad.
    pub fn tap_duration_arrow(&mut self) -> Result<(), PickerError> {
        if self.view != PickerView::Duration {
            return self.request_view(PickerView::Duration);
        }
        self.ensure_open()?;

        self.focus = self.focus.other();
        self.range.begin_duration_entry();

        log::debug!("Duration now moves the {} date", self.focus);
        self.refresh();
        Ok(())
    }

    pub fn enter_duration_digit(&mut self, digit: u8) -> Result<(), PickerError> {
        self.ensure_duration_entry()?;
        if digit > 9 {
            return Err(PickerError::InvalidDigit(digit));
        }

        let applied = self.range.append_digit(digit, self.duration_anchor());
        log::debug!("Duration entry {} -> {} days", digit, applied);
        self.refresh();
        Ok(())
    }

    pub fn duration_backspace(&mut self) -> Result<(), PickerError> {
        self.ensure_duration_entry()?;
        let applied = self.range.backspace(self.duration_anchor());
        log::debug!("Duration backspace -> {} days", applied);
        self.refresh();
        Ok(())
    }

    pub fn duration_clear(&mut self) -> Result<(), PickerError> {
        self.ensure_duration_entry()?;
        self.range.clear_all(self.duration_anchor());
        log::debug!("Duration cleared");
        self.refresh();
        Ok(())
    }

    /// Close the dialog with the current selection.
    pub fn confirm(&mut self) -> Result<RangeSelection, PickerError> {
        self.ensure_open()?;

        let selection = self.range.selection();
        self.committed = self.range.snapshot();
        self.phase = DialogPhase::Confirmed;

        log::info!(
            "Range confirmed: start={:?}, end={:?}",
            selection.start.map(|d| d.to_string()),
            selection.end.map(|d| d.to_string())
        );
        if let Some(listener) = &self.result_listener {
            listener.on_range_set(&selection);
        }
        Ok(selection)
    }

    /// Dismiss without confirming; edits since the last commit are dropped.
    /// Calling it on a closed dialog does nothing.
    pub fn cancel(&mut self) {
        if !self.is_open() {
            return;
        }

        self.range.restore(self.committed);
        self.phase = DialogPhase::Cancelled;

        log::info!("Range picker cancelled");
        self.refresh();
        if let Some(listener) = &self.result_listener {
            listener.on_cancel();
        }
    }

    /// Caller-side setter; the value becomes the state `cancel` returns to.
    pub fn set_start_date(&mut self, date: DateValue) -> Result<(), PickerError> {
        self.ensure_open()?;
        self.range.set_start_date(date);
        self.committed = self.range.snapshot();
        self.refresh();
        Ok(())
    }

    /// Caller-side setter; the value becomes the state `cancel` returns to.
    pub fn set_end_date(&mut self, date: DateValue) -> Result<(), PickerError> {
        self.ensure_open()?;
        self.range.set_end_date(date);
        self.committed = self.range.snapshot();
        self.refresh();
        Ok(())
    }

    /// Replace the configuration.
    ///
    /// When the initial dates or enable flags differ from the current
    /// configuration the selection is rebuilt from them, as on construction
    /// (a missing start keeps the current start), and becomes the committed
    /// state. Otherwise current and committed dates are only re-clamped into
    /// the new bounds.
    pub fn reconfigure(&mut self, config: PickerConfig) -> Result<(), PickerError> {
        config.validate()?;
        let bounds = config.bounds()?;

        if self.changes_initial_selection(&config) {
            let range = Self::initial_range(&config, self.range.start())?;
            self.committed = range.snapshot();
            self.range = range;
            self.config = config;
            self.show(PickerView::day(self.first_enabled_side()));

            log::debug!(
                "Picker reconfigured with new selection: start={}, end={}",
                self.range.start(),
                self.range.end()
            );
            self.refresh();
            return Ok(());
        }

        let range = RangeState::from_snapshot(self.range.snapshot(), bounds.clone())?;
        let committed = RangeState::from_snapshot(self.committed, bounds)?.snapshot();

        self.config = config;
        self.range = range;
        self.committed = committed;
        if !self.is_view_available(self.view) {
            self.show(PickerView::day(self.first_enabled_side()));
        }

        log::debug!("Picker reconfigured, showing {} view", self.view);
        self.refresh();
        Ok(())
    }

    /// Host is pausing. Returns the state to restore later, or `None` when
    /// the picker is configured to dismiss itself instead.
    pub fn suspend(&mut self) -> Option<SavedState> {
        if !self.is_open() {
            return None;
        }
        if self.config.dismiss_on_pause {
            log::info!("Dismissing range picker on pause");
            self.cancel();
            return None;
        }
        Some(self.save_state())
    }

    pub fn save_state(&self) -> SavedState {
        SavedState {
            config: self.config.clone(),
            range: self.range.snapshot(),
            committed: self.committed,
            view: self.view,
            focus: self.focus,
            duration_pad: self.range.pad(),
            presentation: BTreeMap::new(),
        }
    }

    // ---- queries -----------------------------------------------------------

    pub fn current_view(&self) -> PickerView {
        self.view
    }

    pub fn focused_side(&self) -> Side {
        self.focus
    }

    /// Side held fixed while the duration is edited.
    pub fn duration_anchor(&self) -> Side {
        self.focus.other()
    }

    /// Sorted; see [`highlighted_days`].
    pub fn highlighted_dates(&self) -> &[DateValue] {
        &self.highlighted
    }

    pub fn is_highlighted(&self, date: DateValue) -> bool {
        is_highlighted(&self.highlighted, date)
    }

    /// Years the given side's year list should offer. The end list starts no
    /// earlier than the selected start date while the start is enabled.
    pub fn selectable_year_range(&self, side: Side) -> RangeInclusive<i32> {
        let bounds = self.range.bounds();
        bounds.effective_min_year(self.side_floor(side))..=bounds.effective_max_year()
    }

    pub fn min_selectable_date(&self, side: Side) -> DateValue {
        self.range.bounds().min_selectable_date(self.side_floor(side))
    }

    pub fn max_selectable_date(&self) -> DateValue {
        self.range.bounds().latest()
    }

    pub fn is_selectable(&self, date: DateValue) -> bool {
        self.range.bounds().is_selectable(date)
    }

    pub fn is_enabled(&self, side: Side) -> bool {
        self.range.is_enabled(side)
    }

    pub fn snapshot(&self) -> RangeSnapshot {
        self.range.snapshot()
    }

    pub fn duration(&self) -> i64 {
        self.range.duration()
    }

    pub fn duration_buffer(&self) -> i64 {
        self.range.duration_buffer()
    }

    /// Day the grid should center on: the focused side's date.
    pub fn selected_day(&self) -> DateValue {
        self.range.date(self.focus)
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.config.week_start()
    }

    pub fn is_duration_available(&self) -> bool {
        self.config.show_duration && self.range.both_enabled()
    }

    pub fn is_view_available(&self, view: PickerView) -> bool {
        match view.side() {
            Some(side) => self.range.is_enabled(side),
            None => self.is_duration_available(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    // ---- internals ---------------------------------------------------------

    fn show(&mut self, view: PickerView) {
        self.view = view;
        if let Some(side) = view.side() {
            self.focus = side;
        }
    }

    fn refresh(&mut self) {
        self.highlighted = highlighted_days(&self.range.snapshot());
        self.notifier.notify();
    }

    fn changes_initial_selection(&self, config: &PickerConfig) -> bool {
        self.config.start_date != config.start_date
            || self.config.end_date != config.end_date
            || self.config.start_enabled != config.start_enabled
            || self.config.end_enabled != config.end_enabled
    }

    fn side_floor(&self, side: Side) -> Option<DateValue> {
        match side {
            Side::End if self.range.is_enabled(Side::Start) => Some(self.range.start()),
            _ => None,
        }
    }

    fn first_enabled_side(&self) -> Side {
        if self.range.is_enabled(Side::Start) {
            Side::Start
        } else {
            Side::End
        }
    }

    fn ensure_open(&self) -> Result<(), PickerError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(PickerError::Closed)
        }
    }

    fn ensure_enabled(&self, side: Side) -> Result<(), PickerError> {
        if self.range.is_enabled(side) {
            Ok(())
        } else {
            log::warn!("Ignoring edit of disabled {} date", side);
            Err(PickerError::SideDisabled(side))
        }
    }

    fn ensure_duration_entry(&self) -> Result<(), PickerError> {
        self.ensure_open()?;
        if self.view == PickerView::Duration {
            Ok(())
        } else {
            Err(PickerError::ViewUnavailable(PickerView::Duration))
        }
    }
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("range", &self.range)
            .field("view", &self.view)
            .field("focus", &self.focus)
            .field("phase", &self.phase)
            .field("listeners", &self.notifier.len())
            .finish()
    }
}
