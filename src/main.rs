use clap::Parser;
use nucleus::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nucleus", about = "Worldbuilding in the terminal")]
struct Args {
    /// Page to open first (defaults to the first page)
    #[arg(short, long)]
    start_page: Option<String>,

    /// Directory holding data.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is loaded or saved
    #[arg(long)]
    ephemeral: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists, so failures are reported after init.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::NucleusConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_page: args.start_page,
            data_dir: args.data_dir,
            ephemeral: args.ephemeral,
            log_level: args.log_level,
        },
    );

    // Initialize file logger - writes to nucleus.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("nucleus.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Nucleus starting up (data dir {}, ephemeral={})",
        resolved.data_dir.display(),
        resolved.ephemeral
    );

    nucleus::tui::run(resolved)
}
