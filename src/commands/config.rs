use anyhow::Result;
use launchcal_core::config::LaunchCalConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let path = LaunchCalConfig::config_path()?;
    let config = LaunchCalConfig::load()?;

    println!("{}", path.display().to_string().dimmed());
    print!("{}", config.to_toml()?);
    Ok(())
}
