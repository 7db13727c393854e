use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use spheregrid_core::geometry::Size;
use spheregrid_runtime::GridConfig;

use crate::{HarnessError, Scenario, Summary};

#[derive(Debug, Parser)]
#[command(
    name = "spheregrid-harness",
    about = "Drive a SphereGrid scene headlessly and print a JSON summary",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a fixed number of frames against a headless host.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// TOML or JSON config file. Flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub pool_size: Option<usize>,

    /// Active item count.
    #[arg(long)]
    pub active: Option<usize>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1920.0)]
    pub width: f32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1080.0)]
    pub height: f32,

    #[arg(long, default_value_t = 60)]
    pub frames: u64,

    /// Frame step in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub dt_ms: u64,

    /// Start a master opacity transition after the first frame.
    #[arg(long)]
    pub lerp_all: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    pub json_logs: bool,
}

impl RunArgs {
    /// Resolve the effective config: file first, then flag overrides.
    pub fn load_config(&self) -> Result<GridConfig, HarnessError> {
        let mut config = match &self.config {
            Some(path) => GridConfig::from_path(path)?,
            None => GridConfig::default(),
        };
        if let Some(pool_size) = self.pool_size {
            config.pool_size = pool_size;
        }
        if let Some(active) = self.active {
            config.active_spheres = active;
        }
        Ok(config.validated()?)
    }

    pub fn scenario(&self) -> Result<Scenario, HarnessError> {
        let mut scenario = Scenario::new(self.load_config()?, Size::new(self.width, self.height));
        scenario.frames = self.frames;
        scenario.dt = Duration::from_millis(self.dt_ms);
        scenario.lerp_all = self.lerp_all;
        Ok(scenario)
    }
}

pub fn run_from_env() -> Result<(), HarnessError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), HarnessError> {
    match cli.command {
        Commands::Run(args) => {
            spheregrid_core::logging::init_subscriber(args.json_logs);
            let summary = execute(&args)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}

/// Run without printing, for callers that want the summary value.
pub fn execute(args: &RunArgs) -> Result<Summary, HarnessError> {
    args.scenario()?.run()
}
