use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hull2d::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use report::{CompareReport, HullReport};

#[derive(Parser)]
#[command(name = "hull-cli")]
#[command(about = "Planar convex hulls: compute, compare, report")]
struct Cmd {
    /// Seed for random point clouds
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull and print it (or write it to --out with a provenance sidecar)
    Hull {
        /// gift-wrapping, graham-scan, monotone-chain or quickhull
        #[arg(long, default_value = "quickhull")]
        algo: Algorithm,
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run all four algorithms on the same points and check that they agree
    Compare {
        #[command(flatten)]
        source: Source,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Where the points come from: a CSV/Parquet table, or a uniform random cloud.
#[derive(Args)]
struct Source {
    /// Table with `x` and `y` columns; overrides the random cloud
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = 100)]
    count: usize,
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
    lo: f64,
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    hi: f64,
}

impl Source {
    fn load(&self, seed: u64) -> Result<Vec<Point>> {
        match &self.input {
            Some(path) => input::read_points(path),
            None => {
                let cfg = PointCloudCfg {
                    count: self.count,
                    lo: self.lo,
                    hi: self.hi,
                };
                Ok(draw_uniform(cfg, ReplayToken::new(seed)))
            }
        }
    }

    fn params(&self, seed: u64) -> serde_json::Value {
        match &self.input {
            Some(path) => serde_json::json!({ "input": path }),
            None => serde_json::json!({
                "seed": seed,
                "count": self.count,
                "lo": self.lo,
                "hi": self.hi
            }),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { algo, source, out } => hull(algo, &source, out.as_deref(), cmd.seed),
        Action::Compare { source } => compare(&source, cmd.seed),
        Action::Report => report(),
    }
}

fn hull(algo: Algorithm, source: &Source, out: Option<&Path>, seed: u64) -> Result<()> {
    let points = source.load(seed)?;
    tracing::info!(algo = %algo, points = points.len(), "hull");
    let report = HullReport::build(algo, &points).with_context(|| format!("{algo} hull"))?;
    tracing::info!(algo = %algo, vertices = report.vertex_count(), "hull_done");

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    };
    let prov = provenance::write_hull_report(out, &report, source.params(seed))?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn compare(source: &Source, seed: u64) -> Result<()> {
    let points = source.load(seed)?;
    let report = CompareReport::build(&points).context("input points")?;
    for c in &report.counts {
        tracing::info!(algo = c.algo, count = c.count, "hull");
    }
    if !report.agree {
        tracing::warn!(points = points.len(), "hull algorithms disagree");
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "version": hull2d::VERSION,
        "algorithms": Algorithm::ALL.map(Algorithm::name),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
