//! plane-align CLI — run plane alignments from JSON requests.

use std::fs;
use std::path::{Path, PathBuf};

use align_kernel::{compute_alignment_with, transforms_equal, AlignConfig, AlignmentRequest, RigidTransform};
use clap::{Args, Parser, Subcommand};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

/// Report file written next to the working directory when none is named.
const DEFAULT_DEBUG_FILE: &str = "mesh_align_debug.txt";

#[derive(Parser)]
#[command(name = "plane-align")]
#[command(about = "Compute rigid transforms that align a body's reference planes onto target planes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the alignment described by a request file.
    Align(AlignArgs),

    /// Check whether two transforms are the same map.
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Args)]
struct AlignArgs {
    /// Path to the alignment request (JSON).
    #[arg(long)]
    request: PathBuf,

    /// Path to write the alignment result (JSON).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to write the text report. Implied when the request sets `debug`.
    #[arg(long)]
    debug_out: Option<PathBuf>,

    /// Path to an alignment config (JSON). Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Distance from the aligned origin to the flip hinge.
    #[arg(long)]
    hinge_offset: Option<f64>,

    /// Per-coordinate tolerance for the already-aligned check.
    #[arg(long)]
    tolerance: Option<f64>,
}

#[derive(Debug, Clone, Args)]
struct CompareArgs {
    /// First transform (JSON).
    #[arg(long)]
    a: PathBuf,

    /// Second transform (JSON).
    #[arg(long)]
    b: PathBuf,

    /// Per-coordinate tolerance.
    #[arg(long, default_value = "1e-6")]
    tolerance: f64,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Align(args) => run_align(&args),
        Commands::Compare(args) => run_compare(&args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&text).map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    Ok(value)
}

fn resolve_config(args: &AlignArgs) -> CliResult<AlignConfig> {
    let mut config = match &args.config {
        Some(path) => read_json::<AlignConfig>(path)?,
        None => AlignConfig::default(),
    };
    if let Some(hinge_offset) = args.hinge_offset {
        config = config.with_hinge_offset(hinge_offset);
    }
    if let Some(tolerance) = args.tolerance {
        config = config.with_equivalence_tolerance(tolerance);
    }
    Ok(config)
}

/// Where to write the text report, if anywhere.
fn debug_report_path(args: &AlignArgs, request: &AlignmentRequest) -> Option<PathBuf> {
    match &args.debug_out {
        Some(path) => Some(path.clone()),
        None if request.debug => Some(PathBuf::from(DEFAULT_DEBUG_FILE)),
        None => None,
    }
}

fn run_align(args: &AlignArgs) -> CliResult<()> {
    tracing::info!("Loading request: {}", args.request.display());
    let request: AlignmentRequest = read_json(&args.request)?;
    let config = resolve_config(args)?;

    let result = compute_alignment_with(&request, &config)?;

    if result.identity {
        println!("Source plane already aligned to target plane. No action taken.");
    } else {
        let moves = result.transforms_to_apply();
        println!("Alignment: {} ({} move(s) to apply)", result.report.strategy, moves.len());
        for (i, t) in moves.iter().enumerate() {
            let d = t.translation();
            println!(
                "  move {}: rotation {:.3}°, translation ({:.3}, {:.3}, {:.3})",
                i + 1,
                t.rotation_angle().to_degrees(),
                d.x,
                d.y,
                d.z
            );
        }
    }

    if let Some(out) = &args.out {
        fs::write(out, serde_json::to_string_pretty(&result)?)?;
        tracing::info!("Result written to {}", out.display());
    }

    if let Some(path) = debug_report_path(args, &request) {
        fs::write(&path, result.report.to_string())?;
        tracing::info!("Debug report written to {}", path.display());
    }

    Ok(())
}

fn run_compare(args: &CompareArgs) -> CliResult<()> {
    let a: RigidTransform = read_json(&args.a)?;
    let b: RigidTransform = read_json(&args.b)?;
    let equal = transforms_equal(&a, &b, args.tolerance);
    tracing::info!(equal, tolerance = args.tolerance, "compared transforms");
    println!("{}", if equal { "equivalent" } else { "different" });
    Ok(())
}
