use clap::{Args, Parser, Subcommand};

use crate::render::Style;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "sparkline",
    version,
    about = "Single-line unicode sparklines from numeric series"
)]
pub struct Cli {
    /// Emit debug diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render numbers from a file or stdin
    Render(RenderArgs),
    /// Render a random walk
    Demo(DemoArgs),
    /// Show every style on a sample ramp
    Styles,
    /// Print example invocations
    Examples,
}

/// Options shared by every command that draws.
#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    /// `blocks` or `dots`
    #[arg(long, default_value_t = Style::Blocks)]
    pub style: Style,

    /// Lower bound of the range (auto if omitted)
    #[arg(long, requires = "max", allow_hyphen_values = true)]
    pub min: Option<f64>,
    /// Upper bound of the range (auto if omitted)
    #[arg(long, requires = "min", allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Keep only the most recent samples that fit the terminal width
    #[arg(long)]
    pub fit: bool,
}

/// `sparkline render …`
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub draw: DrawArgs,
}

/// `sparkline demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 60)]
    pub steps: usize,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub mu: f64,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    /// Fixed seed for a reproducible walk
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub draw: DrawArgs,
}
