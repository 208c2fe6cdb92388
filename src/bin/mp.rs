extern crate monthpage as lib;

use flexi_logger::{FileSpec, Logger};
use lib::grid::TodayMarker;
use lib::page::Page;
use lib::render::{self, Format};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mp",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Monthpage - renders a static month page."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "f",
        long = "format",
        default_value = "text",
        help = "output format (text, html)"
    )]
    pub format: Format,

    #[structopt(
        short = "o",
        long = "output",
        help = "write page to file instead of stdout",
        parse(from_os_str)
    )]
    pub output: Option<PathBuf>,

    #[structopt(
        long = "today",
        allow_hyphen_values = true,
        help = "day of month to highlight as today"
    )]
    pub today: Option<i64>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    std::panic::set_hook(Box::new(|info| {
        eprintln!("Monthpage ran into a fatal error!");
        eprintln!(
            "Consider filing an issue with the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        eprintln!("{}", info);
        eprintln!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let mut page = Page::from_config(&config)?;
    if let Some(today) = args.today {
        page = page.with_today(TodayMarker::new(today));
    }

    let rendered = render::render(&page, &config.theme, args.format)?;

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            log::info!("Wrote {} page to {}", args.format, path.display());
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
