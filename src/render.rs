//! Terminal rendering for launchcal types.
//!
//! Cells are padded before they are coloured so ANSI escapes never throw
//! the columns off.

use launchcal_core::detail::{Action, DetailRow};
use launchcal_core::grid::{DAYS_PER_WEEK, DayCell, Grid, GridRow, WeekRow};
use launchcal_core::month::WEEKDAY_NAMES;
use owo_colors::OwoColorize;

/// Width of one day column.
const CELL_WIDTH: usize = 11;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Grid {
    fn render(&self) -> String {
        let width = CELL_WIDTH * DAYS_PER_WEEK;
        let mut lines = Vec::new();

        let title = format!("<  {}  >", self.month.title());
        lines.push(format!("{:^width$}", title).bold().to_string());
        lines.push(String::new());

        let header: String = WEEKDAY_NAMES
            .iter()
            .map(|name| format!("{:^width$}", name, width = CELL_WIDTH))
            .collect();
        lines.push(header.dimmed().to_string());

        for row in &self.rows {
            match row {
                GridRow::Week(week) => lines.push(week.render()),
                GridRow::Detail(detail) => lines.push(detail.render()),
            }
        }

        lines.join("\n")
    }
}

impl Render for WeekRow {
    fn render(&self) -> String {
        let numbers: String = self.cells.iter().map(render_day_number).collect();
        let titles: String = self.cells.iter().map(render_day_title).collect();

        if self.cells.iter().any(DayCell::has_event) {
            format!("{}\n{}", numbers, titles)
        } else {
            numbers
        }
    }
}

fn render_day_number(cell: &DayCell) -> String {
    let Some(date) = cell.date() else {
        return " ".repeat(CELL_WIDTH);
    };

    let label = if cell.has_event() {
        format!("{} *", date.format("%-d"))
    } else {
        date.format("%-d").to_string()
    };
    let padded = format!("{:^width$}", label, width = CELL_WIDTH);

    if cell.has_event() {
        padded.green().bold().to_string()
    } else {
        padded
    }
}

fn render_day_title(cell: &DayCell) -> String {
    match cell.first_event() {
        Some(event) => {
            let title = truncate(&event.title, CELL_WIDTH - 2);
            format!("{:^width$}", title, width = CELL_WIDTH).green().to_string()
        }
        None => " ".repeat(CELL_WIDTH),
    }
}

impl Render for DetailRow {
    fn render(&self) -> String {
        let bar = "│".cyan().to_string();
        let mut lines = vec![format!("  {}", "┌".cyan())];

        if self.revealed {
            lines.push(format!("  {} {}", bar, self.event.title.bold()));
            lines.push(format!("  {} {}", bar, self.launch_date_long().bold()));
            lines.push(format!("  {} {}", bar, self.event.summary));
            lines.push(format!("  {}", bar));
            for action in self.actions() {
                lines.push(format!("  {} {}", bar, render_action(*action, self)));
            }
        } else {
            lines.push(format!("  {} {}", bar, "Loading...".dimmed()));
        }

        lines.push(format!(
            "  {} {}",
            bar,
            format!("image: {}", self.background()).dimmed()
        ));
        lines.push(format!("  {}", "└".cyan()));
        lines.join("\n")
    }
}

fn render_action(action: Action, detail: &DetailRow) -> String {
    let label = format!("[{}]", action.label());
    let label = match action {
        Action::LearnMore => label.blue().bold().to_string(),
        Action::PreOrder => label.magenta().bold().to_string(),
    };
    format!("{} {}", label, action.link(&detail.event).underline())
}

/// Shorten to at most `max` characters, marking the cut with "~".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('~');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchcal_core::event::LaunchDate;
    use launchcal_core::{LaunchEvent, YearMonth, build};

    fn event(title: &str, date: &str) -> LaunchEvent {
        LaunchEvent {
            title: title.to_string(),
            summary: "Back in original colours".to_string(),
            launch_date: LaunchDate::parse(date).unwrap(),
            image_filename_thumb: "https://img.example.com/thumb.jpg".to_string(),
            image_filename_full: "https://img.example.com/full.jpg".to_string(),
            learn_more_link: "https://example.com/more".to_string(),
            purchase_link: "https://shop.example.com/buy".to_string(),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Air Max", 9), "Air Max");
        assert_eq!(truncate("Air Jordan 1 Retro", 9), "Air Jord~");
    }

    #[test]
    fn test_grid_has_title_and_weekdays() {
        let grid = build(YearMonth::new(2021, 1).unwrap(), &[], None);
        let out = grid.render();

        assert!(out.contains("January 2021"));
        for name in WEEKDAY_NAMES {
            assert!(out.contains(name));
        }
        assert!(out.contains("31"));
    }

    #[test]
    fn test_event_day_is_marked() {
        let events = vec![event("Air Max", "2021-01-15")];
        let grid = build(YearMonth::new(2021, 1).unwrap(), &events, None);
        let out = grid.render();

        assert!(out.contains("15 *"));
        assert!(out.contains("Air Max"));
    }

    #[test]
    fn test_detail_withheld_until_revealed() {
        let mut detail = DetailRow {
            event: event("Air Max", "2021-01-15"),
            revealed: false,
        };
        let out = detail.render();
        assert!(out.contains("Loading..."));
        assert!(!out.contains("Air Max"));
        assert!(out.contains("https://img.example.com/full.jpg"));

        detail.revealed = true;
        let out = detail.render();
        assert!(out.contains("Air Max"));
        assert!(out.contains("January 15th, 2021"));
        assert!(out.contains("[Learn More]"));
        assert!(out.contains("[Pre-Order Now]"));
        assert!(out.contains("https://shop.example.com/buy"));
    }

    #[test]
    fn test_empty_cells_keep_column_width() {
        let grid = build(YearMonth::new(2021, 1).unwrap(), &[], None);
        let first = grid.weeks().next().unwrap();
        let line = first.render();
        // Five blank cells before the centred "1".
        assert!(line.starts_with(&" ".repeat(CELL_WIDTH * 5)));
        assert!(!line.starts_with(&" ".repeat(CELL_WIDTH * 6)));
    }
}
