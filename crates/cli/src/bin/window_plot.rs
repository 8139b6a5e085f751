use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a metric-by-launch-date chart from an exported windows CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/windows.png")]
    output: PathBuf,
    #[arg(long, default_value = "score")]
    metric: String,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

struct Sample {
    launch_date: NaiveDate,
    value: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut samples = read_samples(&cli.input, &cli.metric)?;
    if samples.is_empty() {
        return Err(anyhow::anyhow!(
            "No rows with a finite '{}' value in the provided CSV",
            cli.metric
        ));
    }
    samples.sort_by_key(|s| s.launch_date);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let first = samples[0].launch_date;
    let last = samples[samples.len() - 1].launch_date;
    let span_days = ((last - first).num_days() as f64).max(1.0);
    let max_value = samples
        .iter()
        .map(|s| s.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("Launch windows by {}", cli.metric), caption_font)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..span_days + 0.5, 0.0..max_value * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Launch Date")
        .y_desc(cli.metric.clone())
        .label_style(label_font)
        .x_labels(8)
        .y_labels(6)
        .x_label_formatter(&|offset| fmt_date_label(first, *offset))
        .draw()?;

    let bar_half_width = (span_days / samples.len() as f64 * 0.3).clamp(0.5, 3.5);
    for sample in &samples {
        let x = (sample.launch_date - first).num_days() as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - bar_half_width, 0.0), (x + bar_half_width, sample.value)],
            BLUE.mix(0.5).filled(),
        )))?;
    }
    chart.draw_series(LineSeries::new(
        samples
            .iter()
            .map(|s| ((s.launch_date - first).num_days() as f64, s.value)),
        &BLACK,
    ))?;

    root.present()?;
    Ok(())
}

fn read_samples(path: &str, metric: &str) -> anyhow::Result<Vec<Sample>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("launch_date"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'launch_date' column"))?;
    let metric_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(metric))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{metric}' column"))?;

    let mut samples = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let launch_date = match r.get(date_idx).and_then(|v| v.parse::<NaiveDate>().ok()) {
            Some(d) => d,
            None => continue,
        };
        let value: f64 = r.get(metric_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if value.is_finite() {
            samples.push(Sample { launch_date, value });
        }
    }
    Ok(samples)
}

fn fmt_date_label(first: NaiveDate, offset: f64) -> String {
    first
        .checked_add_days(Days::new(offset.max(0.0).round() as u64))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
