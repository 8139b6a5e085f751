use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use launch_window_optimizer::config::{Catalog, load_catalog};
use launch_window_optimizer::export;
use launch_window_optimizer::schedule::HttpScheduleSource;
use launch_window_optimizer::transfer::{
    Constraints, MissionParameters, OptimizationResult, RankedWindow, Summary,
    TransferWindowEngine, build_manifest, summarize,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Interplanetary transfer-window planner")]
struct Cli {
    /// Origin body name (case-insensitive)
    #[arg(long)]
    from: String,

    /// Destination body name (case-insensitive)
    #[arg(long)]
    to: String,

    /// Launch site code
    #[arg(long, default_value = "KSC")]
    site: String,

    /// First candidate launch date (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// Last candidate launch date (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,

    /// Vehicle name from the catalog
    #[arg(long, default_value = "Falcon Heavy", overrides_with = "vehicle")]
    vehicle: String,

    /// Payload mass in kilograms
    #[arg(long, default_value_t = 1_000.0)]
    payload_kg: f64,

    /// Mission type tag (reporting only)
    #[arg(long, default_value = "orbiter")]
    mission_type: String,

    /// Maximum acceptable flight time in days
    #[arg(long)]
    max_flight_time: Option<f64>,

    /// Maximum acceptable delta-v in km/s
    #[arg(long)]
    max_delta_v: Option<f64>,

    /// Minimum acceptable composite score
    #[arg(long)]
    min_score: Option<u32>,

    /// Base seed for the sampled scoring stages (omit for fresh entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding bodies.yaml, sites.yaml, and vehicles.yaml
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// URL of a JSON launch schedule feed to merge into the result
    #[arg(long)]
    schedule_url: Option<String>,

    /// Write ranked windows as CSV ('-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full result as JSON ('-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the mission manifest for the best window
    #[arg(long, default_value_t = false)]
    manifest: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog_dir {
        Some(dir) => load_catalog(dir)?,
        None => Catalog::builtin(),
    };

    let mut engine = TransferWindowEngine::new(catalog);
    if let Some(seed) = cli.seed {
        engine = engine.with_seed(seed);
    }
    if let Some(url) = &cli.schedule_url {
        engine = engine.with_schedule_source(Box::new(HttpScheduleSource::new(url.clone())?));
    }

    let params = MissionParameters {
        origin: cli.from.clone(),
        destination: cli.to.clone(),
        site_code: cli.site.clone(),
        start_date: cli.start,
        end_date: cli.end,
        mission_type: cli.mission_type.clone(),
        payload_mass_kg: cli.payload_kg,
        vehicle: cli.vehicle.clone(),
        constraints: Constraints {
            max_flight_time_days: cli.max_flight_time,
            max_delta_v_km_s: cli.max_delta_v,
            min_score: cli.min_score,
        },
    };

    let result = engine.optimize(&params)?;

    println!("=== Launch Window Report ===");
    println!("Route           : {} -> {}", cli.from, cli.to);
    println!("Vehicle         : {} ({:.0} kg payload)", cli.vehicle, cli.payload_kg);
    match summarize(&result) {
        Summary::Viable(summary) => {
            println!("Best launch     : {}", summary.best_launch_date);
            println!(
                "Flight time     : {:.1} days (arrival {})",
                summary.flight_time_days,
                result.optimal_windows[0].candidate.trajectory.arrival_date
            );
            println!("Total cost      : ${:.0}", summary.total_cost_usd);
            println!(
                "Feasibility     : {} (score {})",
                summary.feasibility, summary.score
            );
            println!("Windows analyzed: {}", summary.windows_analyzed);
            println!("Recommendation  : {}", summary.recommendation);
        }
        Summary::NoViableWindows { suggestion } => {
            println!("No viable windows: {suggestion}");
        }
    }

    print_windows("Optimal windows", &result.optimal_windows);
    print_windows("Alternative windows", &result.alternative_windows);

    if !result.real_launches.is_empty() {
        println!("\nScheduled launches in range:");
        for launch in &result.real_launches {
            println!(
                "  {}  {}  {} ({}, {})",
                launch.scheduled_date, launch.name, launch.rocket, launch.agency, launch.status
            );
        }
    }

    if cli.manifest {
        if let Some(best) = result.optimal_windows.first() {
            let manifest = build_manifest(&params, best, engine.catalog());
            println!("\n=== Mission Manifest ===");
            println!("Mission         : {}", manifest.mission_name);
            println!("Type            : {}", manifest.mission_type);
            println!("Launch site     : {}", manifest.launch_site);
            println!(
                "Launch / arrival: {} / {}",
                manifest.launch_date, manifest.arrival_date
            );
            println!("Delta-v         : {:.2} km/s", manifest.delta_v_km_s);
            println!("Objectives:");
            for objective in &manifest.objectives {
                println!("  - {objective}");
            }
            println!("Assessment      : {}", manifest.recommendation);
        }
    }

    if let Some(path) = &cli.csv {
        export_csv(path, &result)?;
    }
    if let Some(path) = &cli.json {
        let mut writer = export::windows::writer_for_path(path)?;
        export::json::write_pretty(writer.as_mut(), &result)?;
        writer.flush()?;
    }

    Ok(())
}

fn print_windows(title: &str, windows: &[RankedWindow]) {
    if windows.is_empty() {
        return;
    }
    println!("\n{title}:");
    println!(
        "{:<4} {:<12} {:<12} {:>9} {:>9} {:>6} {:>14} {:>8}",
        "#", "Launch", "Arrival", "TOF (d)", "dv (km/s)", "Score", "Cost (USD)", "Feas."
    );
    for (idx, window) in windows.iter().enumerate() {
        println!(
            "{:<4} {:<12} {:<12} {:>9.1} {:>9.2} {:>6} {:>14.0} {:>8}",
            idx + 1,
            window.candidate.launch_date.to_string(),
            window.candidate.trajectory.arrival_date.to_string(),
            window.candidate.trajectory.flight_time_days,
            window.candidate.trajectory.delta_v_km_s,
            window.candidate.score,
            window.cost.total_cost_usd,
            window.feasibility.category.to_string(),
        );
    }
}

fn export_csv(path: &Path, result: &OptimizationResult) -> anyhow::Result<()> {
    let mut writer = export::windows::writer_for_path(path)?;
    export::windows::write_header(writer.as_mut())?;
    let windows = result
        .optimal_windows
        .iter()
        .chain(result.alternative_windows.iter());
    for (idx, window) in windows.enumerate() {
        let launch_date = window.candidate.launch_date.to_string();
        let arrival_date = window.candidate.trajectory.arrival_date.to_string();
        let category = window.feasibility.category.to_string();
        export::windows::Record {
            rank: idx + 1,
            launch_date: &launch_date,
            arrival_date: &arrival_date,
            flight_time_days: window.candidate.trajectory.flight_time_days,
            delta_v_km_s: window.candidate.trajectory.delta_v_km_s,
            alignment_score: window.candidate.trajectory.alignment_score,
            weather_probability: window.candidate.requirements.weather_probability,
            seasonal_score: window.candidate.requirements.seasonal_score,
            score: window.candidate.score,
            launch_cost_usd: window.cost.launch_cost_usd,
            total_cost_usd: window.cost.total_cost_usd,
            technical: window.feasibility.technical,
            economic: window.feasibility.economic,
            schedule: window.feasibility.schedule,
            risk: window.feasibility.risk,
            overall: window.feasibility.overall,
            category: &category,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;
    Ok(())
}
