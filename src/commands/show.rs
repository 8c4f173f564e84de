use anyhow::Result;
use launchcal_core::listener::ClickListeners;
use owo_colors::OwoColorize;

use super::{Target, day_in_month, load_view};
use crate::render::Render;
use crate::utils::tui::create_spinner;

pub async fn run(target: Target, day: Option<u32>) -> Result<()> {
    let listeners = ClickListeners::new();
    let (view, fetcher) = load_view(target, &listeners).await?;

    if let Some(day) = day {
        let date = day_in_month(&view, day)?;

        match view.click_day(date) {
            Some(token) => {
                let full = view
                    .selected()
                    .map(|e| e.image_filename_full)
                    .unwrap_or_default();

                let spinner = create_spinner("Loading image".to_string());
                let result = fetcher.preload_image(&full).await;
                spinner.finish_and_clear();

                match result {
                    Ok(_) => view.image_loaded(token),
                    Err(e) => view.image_failed(token, &e),
                };
            }
            None => println!("{}", format!("No launch on {}", date).dimmed()),
        }
    }

    println!("{}", view.grid().render());
    Ok(())
}
