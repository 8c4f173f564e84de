pub mod config;
pub mod open;
pub mod show;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use launchcal_core::LaunchCalResult;
use launchcal_core::config::LaunchCalConfig;
use launchcal_core::listener::ClickListeners;
use launchcal_core::route;
use launchcal_core::source::{EventSource, HttpFetcher};
use launchcal_core::view::CalendarView;
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use crate::utils::tui::create_spinner;

/// Where a command should look: route path, month offset and event source.
pub struct Target {
    pub path: Option<String>,
    pub offset: i32,
    pub url: Option<String>,
}

/// Resolve the month, mount the view and load its events.
///
/// A failed fetch is reported inline; the view is still returned so the
/// grid can render without events.
pub async fn load_view(
    target: Target,
    listeners: &ClickListeners,
) -> Result<(CalendarView, HttpFetcher)> {
    let today = Local::now().date_naive();

    let resolved = route::resolve(target.path.as_deref().unwrap_or("/"), today);
    let url = resolve_events_url(target.url, LaunchCalConfig::load);
    let mut view = CalendarView::mount(resolved.month(), EventSource::new(url), listeners);

    if target.offset != 0 {
        view.navigate(target.offset, today);
    }
    debug!(month = %view.month(), url = view.source().url(), "Showing month");

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;

    let spinner = create_spinner("Loading events".to_string());
    view.source_mut().activate(&fetcher).await;
    spinner.finish_and_clear();

    if let Some(e) = view.source().error() {
        println!("{}", format!("Failed to load events: {}", e).red());
    }

    Ok((view, fetcher))
}

/// An explicit `--url` wins without touching the config file. Otherwise the
/// configured URL is used, falling back to the default if the config can't
/// be loaded.
pub fn resolve_events_url(
    url: Option<String>,
    load: impl FnOnce() -> LaunchCalResult<LaunchCalConfig>,
) -> String {
    if let Some(url) = url {
        return url;
    }
    match load() {
        Ok(config) => config.events_url,
        Err(e) => {
            warn!(error = %e, "Failed to load configuration, using default events URL");
            LaunchCalConfig::default().events_url
        }
    }
}

/// The date of `day` within the view's month.
pub fn day_in_month(view: &CalendarView, day: u32) -> Result<NaiveDate> {
    let month = view.month();
    month
        .first_day()
        .with_day(day)
        .with_context(|| format!("{} has no day {}", month.title(), day))
}
