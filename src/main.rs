use ahora_diary::application::{init::init, ConfigService, Dashboard};
use ahora_diary::cli::{self, Cli, Commands};
use ahora_diary::domain::entry::parse_iso_date;
use ahora_diary::domain::feed::entry_feed;
use ahora_diary::domain::Selection;
use ahora_diary::error::{DiaryError, Result};
use ahora_diary::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr; `--verbose` forces debug, otherwise RUST_LOG or warn
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn discover(recursive: bool) -> Result<FileSystemRepository> {
    Ok(FileSystemRepository::discover()?.with_recursive(recursive))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value.map(parse_iso_date).transpose()
}

fn run(cli: Cli) -> std::result::Result<(), DiaryError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized ahora site at {}", path.display());
            println!("Add diary entries to content/diary/*.mdx");
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(discover(cli.recursive)?);

            if list {
                let config = service.list()?;
                for key in ["project_start", "counters_mode", "mvp_months", "overall_months"] {
                    println!("{} = {}", key, config.get(key)?);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: ahora config [--list | <key> [<value>]]");
                println!("Valid keys: project_start, counters_mode, mvp_months, overall_months");
                Ok(())
            }
        }
        Some(Commands::Dashboard {
            day,
            week,
            all,
            json,
            today,
        }) => {
            let repo = discover(cli.recursive)?;
            let mut dashboard = Dashboard::load(&repo)?;

            let day = parse_optional_date(day.as_deref())?;
            if all {
                dashboard.clear_selection();
            } else {
                dashboard.apply(week, day)?;
            }

            let today = parse_optional_date(today.as_deref())?
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let view = dashboard.view(today)?;

            if json {
                print_json(&view)
            } else {
                print!("{}", cli::format_dashboard(&view));
                Ok(())
            }
        }
        Some(Commands::Timeline { json }) => {
            let repo = discover(cli.recursive)?;
            let dashboard = Dashboard::load(&repo)?;
            let timeline = dashboard.timeline_view();

            if json {
                print_json(&timeline)
            } else {
                println!("{}", cli::format_timeline(&timeline).trim_end());
                Ok(())
            }
        }
        Some(Commands::Entries { day, json }) => {
            let repo = discover(cli.recursive)?;
            let entries = repo.load_entries()?;
            let selection = Selection::parse(None, day.as_deref())?;
            let has_day = selection.day.is_some();
            let cards = entry_feed(&entries, has_day.then_some(&selection))?;

            if json {
                print_json(&cards)
            } else {
                println!("{}", cli::format_entry_cards(&cards).trim_end());
                Ok(())
            }
        }
        Some(Commands::Color { percent }) => {
            println!("{}", cli::format_color(percent));
            Ok(())
        }
        None => {
            println!("ahora - Build-in-public diary dashboard");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
