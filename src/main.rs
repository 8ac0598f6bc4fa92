use anyhow::Result;
use clap::Parser;

use intake::app::IntakeApp;
use intake::config::Config;
use intake::logging;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Multi-step terminal intake form for portfolio briefs")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Where to write the submission JSON (overrides config)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.submission.output = output;
    }

    let logging_handle = logging::init(&config, cli.debug)?;

    let mut app = IntakeApp::new(config);
    let result = app.run();

    // Point at the session log on exit if anything was written
    if let Some(log_path) = logging_handle.log_file_path {
        if log_path.exists() {
            if let Ok(metadata) = log_path.metadata() {
                if metadata.len() > 0 {
                    eprintln!("Session log: {}", log_path.display());
                }
            }
        }
    }

    result
}
