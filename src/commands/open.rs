use anyhow::Result;
use launchcal_core::LaunchCalError;
use launchcal_core::detail::Action;
use launchcal_core::listener::ClickListeners;
use owo_colors::OwoColorize;
use tracing::debug;

use super::{Target, day_in_month, load_view};

pub async fn run(target: Target, day: u32, action: Action) -> Result<()> {
    let listeners = ClickListeners::new();
    let (view, _) = load_view(target, &listeners).await?;

    let date = day_in_month(&view, day)?;
    view.click_day(date);
    let event = view
        .selected()
        .ok_or_else(|| LaunchCalError::NoEventOnDay(date.to_string()))?;

    let link = action.link(&event);
    debug!(%action, link, "Opening in browser");
    println!("{} {}", action.label().bold(), link.dimmed());

    if open::that(link).is_err() {
        println!("Could not open a browser. Visit:\n  {}", link);
    }

    Ok(())
}
