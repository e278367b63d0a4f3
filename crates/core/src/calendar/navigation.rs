//! Calendar navigation state machine
//!
//! Holds the `(anchor, view)` pair and nothing else. Navigation moves
//! the anchor by one unit of the current granularity; the visible range
//! is always recomputed from the pair, never cached here.

use cadence_domain::{CalendarDay, CalendarPolicy, ViewType};
use chrono::{Days, Months, NaiveDate};

use crate::calendar::range::compute_range;
use crate::scheduling::ports::Clock;

/// Navigation state for the scheduling calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNavigator {
    anchor: NaiveDate,
    view: ViewType,
}

impl CalendarNavigator {
    pub fn new(anchor: NaiveDate, view: ViewType) -> Self {
        Self { anchor, view }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    /// Advance the anchor by one unit of the current granularity.
    ///
    /// Month steps use calendar arithmetic: stepping from Jan 31 lands
    /// on the last valid day of February, not an invalid date.
    pub fn next(&mut self) {
        self.anchor = match self.view {
            ViewType::Day => self.anchor + Days::new(1),
            ViewType::Week => self.anchor + Days::new(7),
            ViewType::Month => {
                self.anchor.checked_add_months(Months::new(1)).unwrap_or(self.anchor)
            }
        };
    }

    /// Move the anchor back by one unit of the current granularity.
    pub fn prev(&mut self) {
        self.anchor = match self.view {
            ViewType::Day => self.anchor - Days::new(1),
            ViewType::Week => self.anchor - Days::new(7),
            ViewType::Month => {
                self.anchor.checked_sub_months(Months::new(1)).unwrap_or(self.anchor)
            }
        };
    }

    /// Switch granularity; the anchor is preserved.
    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    /// Reset the anchor to the current date, keeping the view.
    pub fn go_to_today(&mut self, clock: &dyn Clock) {
        self.anchor = clock.today();
    }

    /// The date range currently visible for this navigation state.
    pub fn visible_range(&self, policy: &CalendarPolicy) -> Vec<CalendarDay> {
        compute_range(self.anchor, self.view, policy)
    }
}
