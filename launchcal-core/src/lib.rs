//! Core of the launch calendar.
//!
//! - `event`: launch event records and payload parsing
//! - `month` / `route`: month arithmetic and `/{year}/{month}` resolution
//! - `grid`: the pure month grid builder
//! - `source`: the events endpoint adapter
//! - `view` / `listener`: selection state and scoped click listeners

pub mod config;
pub mod detail;
pub mod error;
pub mod event;
pub mod grid;
pub mod listener;
pub mod month;
pub mod route;
pub mod source;
pub mod view;

pub use detail::{Action, DetailRow};
pub use error::{LaunchCalError, LaunchCalResult};
pub use event::{LaunchDate, LaunchEvent};
pub use grid::{DayCell, Grid, GridRow, WeekRow, build};
pub use month::YearMonth;
