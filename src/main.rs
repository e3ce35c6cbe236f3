mod config;
mod export;
mod ical;
mod pass;
mod request;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Settings;
use crate::export::{ExportError, ExportOutcome, Exporter};
use crate::ical::ExportFormat;
use crate::pass::TimeZoneMode;
use crate::request::ExportRequest;

#[derive(Parser)]
#[command(name = "pass-ical")]
#[command(about = "Export predicted satellite passes as iCalendar files")]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a pass request file
    Validate { request: PathBuf },
    /// Save the passes of a request file as a calendar
    Export {
        request: PathBuf,
        /// Folder to save in (defaults to the last one used)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// File name without extension
        #[arg(long)]
        name: Option<String>,
        /// Tag times as UTC
        #[arg(long, conflicts_with = "local")]
        utc: bool,
        /// Use floating local time
        #[arg(long)]
        local: bool,
        /// Output format selector
        #[arg(long)]
        format: Option<String>,
        /// Print the calendar instead of saving it
        #[arg(long)]
        stdout: bool,
    },
}

struct ExportArgs {
    request: PathBuf,
    dir: Option<PathBuf>,
    name: Option<String>,
    tz_override: Option<TimeZoneMode>,
    format: Option<String>,
    stdout: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli.config.or_else(Settings::default_path);

    match cli.command {
        Commands::Validate { request } => validate(&request),
        Commands::Export {
            request,
            dir,
            name,
            utc,
            local,
            format,
            stdout,
        } => {
            let tz_override = match (utc, local) {
                (true, _) => Some(TimeZoneMode::Utc),
                (_, true) => Some(TimeZoneMode::Local),
                _ => None,
            };
            let args = ExportArgs {
                request,
                dir,
                name,
                tz_override,
                format,
                stdout,
            };
            export(config_path.as_deref(), args)
        }
    }
}

fn validate(path: &Path) -> ExitCode {
    match ExportRequest::from_file(path) {
        Ok(request) => {
            println!(
                "Request is valid ({} passes of {}, observer {} at {}, {})",
                request.passes.len(),
                request.satellite,
                request.observer.name.as_deref().unwrap_or("unnamed"),
                request.observer.latitude_deg,
                request.observer.longitude_deg
            );
            for (i, pass) in request.passes.iter().enumerate() {
                println!(
                    "  {}: {} orbit {} AOS {:.6} LOS {:.6} max el {:.1}°",
                    i + 1,
                    pass.satellite_name,
                    pass.orbit_number,
                    pass.aos,
                    pass.los,
                    pass.max_elevation_deg
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn export(config_path: Option<&Path>, args: ExportArgs) -> ExitCode {
    let mut settings = match config_path {
        Some(path) => match Settings::load_or_default(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading settings {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let request = match ExportRequest::from_file(&args.request) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tz_mode = args.tz_override.unwrap_or_else(|| settings.tz_mode());
    let format = args.format.unwrap_or_else(|| settings.format.clone());
    let export_format = match ExportFormat::from_selector(&format) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.stdout {
        let text = match export_format {
            ExportFormat::Ics => match request.passes.as_slice() {
                [pass] => ical::encode_single(pass, &request.observer, tz_mode, &request.satellite),
                passes => {
                    ical::encode_multiple(passes, &request.observer, tz_mode, &request.satellite)
                }
            },
        };
        print!("{}", text);
        return ExitCode::SUCCESS;
    }

    let stem = match args.name {
        Some(name) => match export::sanitize_stem(&name) {
            Ok(stem) => stem,
            Err(e) => {
                eprintln!("Invalid file name {:?}: {}", name, e);
                return ExitCode::FAILURE;
            }
        },
        None => match request.passes.as_slice() {
            [pass] => export::default_single_stem(&request.satellite, pass.orbit_number),
            _ => export::default_multi_stem(&request.satellite),
        },
    };

    let dir = args.dir.unwrap_or_else(|| settings.effective_save_dir());
    let destination = export::destination(&dir, &stem, export_format);

    let exporter = Exporter::<export::FsSink>::default();
    let result: Result<ExportOutcome, ExportError> = match request.passes.as_slice() {
        [pass] => exporter.export_single(
            pass,
            &request.observer,
            tz_mode,
            &request.satellite,
            export_format,
            &destination,
        ),
        passes => exporter.export_multiple(
            passes,
            &request.observer,
            tz_mode,
            &request.satellite,
            export_format,
            &destination,
        ),
    };

    match result {
        Ok(outcome) => {
            println!(
                "Saved {} pass(es) to {} ({} bytes)",
                outcome.events,
                outcome.path.display(),
                outcome.bytes_written
            );
            settings.remember_save_dir(&dir);
            if let Some(path) = config_path {
                if let Err(e) = settings.save(path) {
                    log::warn!("Failed to store settings {}: {}", path.display(), e);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            log::debug!("{} bytes were encoded but not saved", e.content.len());
            eprintln!("Choose another folder with --dir, or use --stdout");
            ExitCode::FAILURE
        }
    }
}
