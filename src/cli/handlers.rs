use std::{
    io::{Write, stdout},
    time::Instant,
};

use tracing::debug;

use crate::{
    core::{
        bounds::{fit_tail, terminal_width},
        config::Config,
        data::read_samples_from_path,
        error::{ConfigError, SparkError},
        rng::Lcg,
    },
    render::{Style, render},
};

use super::parse::{DemoArgs, DrawArgs, RenderArgs};

/// Resolve draw flags into a render configuration.
fn config_for(a: &DrawArgs) -> Result<Config<f64>, ConfigError> {
    let range = match (a.min, a.max) {
        (Some(low), Some(high)) if low > high => {
            return Err(ConfigError::InvalidRange { low, high });
        }
        (Some(low), Some(high)) => Some((low, high)),
        _ => None,
    };
    Ok(Config::builder().style(a.style).range_opt(range).build())
}

/// Render `data` under `a` and print one line.
fn draw(data: &[f64], a: &DrawArgs) -> Result<(), SparkError> {
    let cfg = config_for(a)?;

    let data = if a.fit {
        let cols = terminal_width();
        let tail = fit_tail(data, cols, a.style);
        debug!(cols, kept = tail.len(), dropped = data.len() - tail.len(), "fit to terminal");
        tail
    } else {
        data
    };

    let t_render = Instant::now();
    let line = render(data, &cfg);
    debug!(
        samples = data.len(),
        chars = a.style.chars_for(data.len()),
        render_us = t_render.elapsed().as_micros(),
        "rendered"
    );

    let mut out = stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}

pub fn render_file(a: &RenderArgs) -> Result<(), SparkError> {
    let t_ingest = Instant::now();
    let data = read_samples_from_path(&a.file)?;
    debug!(
        file = %a.file,
        rows = data.len(),
        ingest_us = t_ingest.elapsed().as_micros(),
        "ingested"
    );
    draw(&data, &a.draw)
}

pub fn demo(a: &DemoArgs) -> Result<(), SparkError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let data = rng.walk(a.steps, a.mu, a.sigma);
    debug!(steps = a.steps, mu = a.mu, sigma = a.sigma, seed = ?a.seed, "random walk");
    draw(&data, &a.draw)
}

/// Show every style on the same ramp.
pub fn styles() {
    let ramp: Vec<u8> = (0..16).collect();
    println!("\nAvailable styles:");
    for style in Style::ALL {
        let line = render(&ramp, &Config::builder().style(style).build());
        println!(
            "  {:<7} {line}   ({} levels, {} sample(s) per char)",
            style.name(),
            style.levels(),
            style.samples_per_char()
        );
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "sparkline";
    println!(
        "
Example invocations
-------------------
• From a file      : {bin} render data.txt
• From stdin       : seq 1 8 | {bin} render
• Braille dots     : seq 1 20 | {bin} render --style dots
• Fixed range      : echo 0 1 2 3 | {bin} render --min 0 --max 100
• Fit the terminal : {bin} render long_series.csv --fit
• Random walk      : {bin} demo --steps 80 --sigma 0.7 --seed 42
• Debug timings    : {bin} --debug render data.txt
"
    );
}
