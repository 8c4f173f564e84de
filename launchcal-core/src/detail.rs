//! The expanded detail panel for a selected event.

use std::fmt;

use chrono::Datelike;

use crate::event::LaunchEvent;

/// Buttons on the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LearnMore,
    PreOrder,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::LearnMore => "Learn More",
            Action::PreOrder => "Pre-Order Now",
        }
    }

    /// The link this action opens for `event`.
    pub fn link<'a>(&self, event: &'a LaunchEvent) -> &'a str {
        match self {
            Action::LearnMore => &event.learn_more_link,
            Action::PreOrder => &event.purchase_link,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The row spliced into the middle of the grid while an event is selected.
///
/// The background image is always known; title, summary and actions are
/// withheld until the full-size image has loaded (`revealed`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub event: LaunchEvent,
    pub revealed: bool,
}

impl DetailRow {
    pub fn background(&self) -> &str {
        &self.event.image_filename_full
    }

    /// Long date, e.g. "January 15th, 2021".
    pub fn launch_date_long(&self) -> String {
        let date = self.event.launch_date.date();
        format!(
            "{} {}{}, {}",
            date.format("%B"),
            date.day(),
            ordinal_suffix(date.day()),
            date.year()
        )
    }

    /// Actions available once the text is revealed.
    pub fn actions(&self) -> &'static [Action] {
        if self.revealed {
            &[Action::LearnMore, Action::PreOrder]
        } else {
            &[]
        }
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
