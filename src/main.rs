mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commands::Target;
use launchcal_core::detail::Action;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "launchcal")]
#[command(about = "Browse product launches on a monthly calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month with its launches
    Show {
        /// Month path, e.g. "/2021/1" (defaults to the current month)
        path: Option<String>,

        /// Shift the month, e.g. -1 for the previous one
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Expand the first launch on this day of the month
        #[arg(short, long)]
        day: Option<u32>,

        /// Events endpoint (overrides events_url from config)
        #[arg(long)]
        url: Option<String>,
    },
    /// Open a launch link in the browser
    Open {
        /// Month path, e.g. "/2021/1"
        path: Option<String>,

        /// Day of the month whose first launch to open
        #[arg(short, long)]
        day: u32,

        /// Which link to open
        #[arg(short, long, value_enum, default_value_t = Link::LearnMore)]
        link: Link,

        /// Events endpoint (overrides events_url from config)
        #[arg(long)]
        url: Option<String>,
    },
    /// Show the configuration file path and effective values
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum Link {
    LearnMore,
    PreOrder,
}

impl From<Link> for Action {
    fn from(link: Link) -> Self {
        match link {
            Link::LearnMore => Action::LearnMore,
            Link::PreOrder => Action::PreOrder,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            path,
            offset,
            day,
            url,
        } => commands::show::run(Target { path, offset, url }, day).await,
        Commands::Open {
            path,
            day,
            link,
            url,
        } => {
            let target = Target {
                path,
                offset: 0,
                url,
            };
            commands::open::run(target, day, link.into()).await
        }
        Commands::Config => commands::config::run(),
    }
}
