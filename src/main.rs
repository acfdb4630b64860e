//! Command-line front end: solve a bicycle and print it as JSON.
//!
//! ```text
//! bikegeo                          # built-in reference bicycle
//! bikegeo --params bike.json       # parameters from a file
//! bikegeo --stage leveled --pretty # one intermediate stage's points
//! ```
//!
//! Logging goes to stderr and is filtered with `RUST_LOG`
//! (e.g. `RUST_LOG=bikegeo=debug`).

use anyhow::{Context, Result};
use bikegeo::solver::{Stage, stage_points};
use bikegeo::{Geometry, Parameters};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StageArg {
    Primary,
    Axles,
    Drivetrain,
    Gears,
    Leveled,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Primary => Stage::Primary,
            StageArg::Axles => Stage::Axles,
            StageArg::Drivetrain => Stage::Drivetrain,
            StageArg::Gears => Stage::Gears,
            StageArg::Leveled => Stage::Leveled,
        }
    }
}

/// Parametric bicycle geometry solver
#[derive(Parser)]
#[command(name = "bikegeo")]
#[command(about = "Solve a parametric bicycle frame into a leveled 3D skeleton", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding every parameter; defaults to the reference bicycle
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print only the points of an intermediate pipeline stage
    #[arg(long, value_enum)]
    stage: Option<StageArg>,
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize output")
}

/// Solves `params` as far as the command line asks and renders the JSON.
fn render(cli: &Cli, params: &Parameters) -> Result<String> {
    match cli.stage {
        Some(stage) => {
            let points = stage_points(params, stage.into()).context("stage solve failed")?;
            to_json(&points, cli.pretty)
        },
        None => {
            let geometry = Geometry::compute(params).context("geometry solve failed")?;
            to_json(&geometry, cli.pretty)
        },
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "bikegeo=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let params = match &cli.params {
        Some(path) => Parameters::from_json_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => Parameters::default(),
    };

    println!("{}", render(&cli, &params)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn run(args: &[&str]) -> Value {
        let cli = Cli::try_parse_from(args).unwrap();
        let output = render(&cli, &Parameters::default()).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn stage_flag_prints_that_stage_only() {
        let primary = run(&["bikegeo", "--stage", "primary"]);
        assert_eq!(primary["B_start"], serde_json::json!([0.0, 2.0, 0.0]));
        assert!(primary.get("Crank_End").is_none());

        let leveled = run(&["bikegeo", "--stage", "leveled"]);
        let ground_y = leveled["groundTangentFront"][1].as_f64().unwrap();
        assert!(ground_y.abs() < 1e-9);
        assert!(leveled.get("points").is_none());
    }

    #[test]
    fn every_stage_name_maps_to_its_checkpoint() {
        for (name, stage) in [
            ("primary", Stage::Primary),
            ("axles", Stage::Axles),
            ("drivetrain", Stage::Drivetrain),
            ("gears", Stage::Gears),
            ("leveled", Stage::Leveled),
        ] {
            let cli = Cli::try_parse_from(["bikegeo", "--stage", name]).unwrap();
            assert_eq!(cli.stage.map(Stage::from), Some(stage));
        }
        assert!(Cli::try_parse_from(["bikegeo", "--stage", "spokes"]).is_err());
    }

    #[test]
    fn without_a_stage_the_full_record_is_printed() {
        let geometry = run(&["bikegeo", "--pretty"]);
        for key in ["points", "sizes", "rotations", "frameMembers", "spokePatterns", "params"] {
            assert!(geometry.get(key).is_some(), "{key} missing");
        }
    }
}
