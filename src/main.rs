//! SGF to GIF CLI - Render a game record as an animated GIF.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{error, info};

use sgf_gif::{Error, RenderConfig, pipeline};

#[derive(Parser)]
#[command(
    version,
    about = "Render an SGF game record as an animated GIF, one frame per move"
)]
struct Args {
    /// SGF game record to read
    #[arg(required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// GIF file to write
    #[arg(required_unless_present = "print_config")]
    output: Option<PathBuf>,

    /// JSON render configuration (board size, stone diameter, delay, palette)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the default render configuration as JSON and exit
    #[arg(long, exclusive = true)]
    print_config: bool,
}

fn main() -> ExitCode {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.print_config {
        return print_default_config();
    }

    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "both an input SGF file and an output GIF file are required",
            )
            .exit();
    };

    match run(input, output, args.config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path, config_path: Option<&Path>) -> Result<(), Error> {
    let config = match config_path {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };

    let stats = pipeline::convert(input, output, &config)?;
    info!("wrote {}: {}", output.display(), stats);
    Ok(())
}

fn print_default_config() -> ExitCode {
    match serde_json::to_string_pretty(&RenderConfig::default()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("cannot serialize config: {err}");
            ExitCode::FAILURE
        }
    }
}
