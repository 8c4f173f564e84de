//! Calendar view state: the displayed month, the event source, and the
//! current selection.
//!
//! The selection lives behind an `Rc<RefCell<..>>` because the view's
//! outside-click handler, registered with [`ClickListeners`], needs to clear
//! it. Everything runs on one thread.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::detail::DetailRow;
use crate::error::LaunchCalError;
use crate::event::LaunchEvent;
use crate::grid::{Grid, build};
use crate::listener::{ClickListeners, ClickTarget, Subscription};
use crate::month::YearMonth;
use crate::route::{Route, resolve_month};
use crate::source::EventSource;

/// Identifies one full-size image preload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImageToken(u64);

#[derive(Debug)]
struct SelectionState {
    selected: Option<LaunchEvent>,
    image_loading: bool,
    image_token: u64,
    month_changed: bool,
}

impl SelectionState {
    fn clear(&mut self) {
        self.selected = None;
        self.image_loading = true;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState {
            selected: None,
            image_loading: true,
            image_token: 0,
            month_changed: false,
        }
    }
}

pub struct CalendarView {
    month: YearMonth,
    source: EventSource,
    selection: Rc<RefCell<SelectionState>>,
    listeners: ClickListeners,
    _outside_click: Subscription,
}

impl CalendarView {
    /// Create the view and register its outside-click handler with
    /// `listeners`. The handler is removed when the view is dropped.
    pub fn mount(month: YearMonth, source: EventSource, listeners: &ClickListeners) -> Self {
        let selection = Rc::new(RefCell::new(SelectionState::default()));

        let state = Rc::clone(&selection);
        let outside_click = listeners.subscribe(move |target| {
            if *target != ClickTarget::DetailPanel {
                state.borrow_mut().clear();
            }
        });

        CalendarView {
            month,
            source,
            selection,
            listeners: listeners.clone(),
            _outside_click: outside_click,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn source(&self) -> &EventSource {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut EventSource {
        &mut self.source
    }

    /// Move by `offset` months. Out-of-range targets land on the month of
    /// `today`. The selection is dropped either way.
    pub fn navigate(&mut self, offset: i32, today: NaiveDate) -> Route {
        let route = resolve_month(self.month.offset(offset), today);
        self.month = route.month();

        let mut state = self.selection.borrow_mut();
        state.clear();
        state.month_changed = true;
        route
    }

    /// Route a click. Day clicks are handled here and stop there; anything
    /// else goes to the global listeners.
    pub fn click(&self, target: ClickTarget) -> Option<ImageToken> {
        match target {
            ClickTarget::Day(date) => self.click_day(date),
            other => {
                self.listeners.dispatch(other);
                None
            }
        }
    }

    /// Select the first event on `date`. A day without events is a no-op.
    ///
    /// Returns the token for the full-size image preload the caller should
    /// start, if an event was selected.
    pub fn click_day(&self, date: NaiveDate) -> Option<ImageToken> {
        if YearMonth::containing(date) != self.month {
            debug!(%date, "Ignoring click outside displayed month");
            return None;
        }

        let Some(event) = self
            .source
            .events()
            .iter()
            .find(|e| e.launch_date.date() == date)
        else {
            debug!(%date, "No event on clicked day");
            return None;
        };

        let mut state = self.selection.borrow_mut();
        state.selected = Some(event.clone());
        state.image_loading = true;
        state.image_token += 1;
        state.month_changed = false;
        Some(ImageToken(state.image_token))
    }

    pub fn clear_selection(&self) {
        self.selection.borrow_mut().clear();
    }

    pub fn selected(&self) -> Option<LaunchEvent> {
        self.selection.borrow().selected.clone()
    }

    pub fn image_loading(&self) -> bool {
        self.selection.borrow().image_loading
    }

    /// The full-size image for `token` finished loading.
    ///
    /// Returns false if the selection moved on since the preload started.
    pub fn image_loaded(&self, token: ImageToken) -> bool {
        let mut state = self.selection.borrow_mut();
        if token.0 != state.image_token || state.selected.is_none() {
            debug!(token = token.0, latest = state.image_token, "Discarding stale image load");
            return false;
        }
        state.image_loading = false;
        true
    }

    /// The preload for `token` failed. The text is revealed anyway.
    pub fn image_failed(&self, token: ImageToken, error: &LaunchCalError) -> bool {
        let applied = self.image_loaded(token);
        if applied {
            warn!(%error, "Failed to preload event image");
        }
        applied
    }

    /// The detail row to show, if any.
    pub fn detail(&self) -> Option<DetailRow> {
        let state = self.selection.borrow();
        if state.month_changed {
            return None;
        }
        state.selected.as_ref().map(|event| DetailRow {
            event: event.clone(),
            revealed: !state.image_loading,
        })
    }

    pub fn grid(&self) -> Grid {
        build(self.month, self.source.events(), self.detail().as_ref())
    }
}
