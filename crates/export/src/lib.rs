//! Export helpers for CSV and JSON artifacts.

pub mod windows {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "rank,launch_date,arrival_date,flight_time_days,delta_v_km_s,alignment_score,weather_probability,seasonal_score,score,launch_cost_usd,total_cost_usd,technical,economic,schedule,risk,overall,category";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard ranked-window CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted for one ranked window.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub rank: usize,
        pub launch_date: &'a str,
        pub arrival_date: &'a str,
        pub flight_time_days: f64,
        pub delta_v_km_s: f64,
        pub alignment_score: f64,
        pub weather_probability: f64,
        pub seasonal_score: f64,
        pub score: u32,
        pub launch_cost_usd: f64,
        pub total_cost_usd: f64,
        pub technical: f64,
        pub economic: f64,
        pub schedule: f64,
        pub risk: f64,
        pub overall: f64,
        pub category: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{:.3},{:.6},{:.3},{:.3},{:.3},{},{:.2},{:.2},{:.3},{:.3},{:.3},{:.3},{:.3},{}",
                self.rank,
                self.launch_date,
                self.arrival_date,
                self.flight_time_days,
                self.delta_v_km_s,
                self.alignment_score,
                self.weather_probability,
                self.seasonal_score,
                self.score,
                self.launch_cost_usd,
                self.total_cost_usd,
                self.technical,
                self.economic,
                self.schedule,
                self.risk,
                self.overall,
                self.category,
            )
        }
    }

}

pub mod json {
    use std::io::{self, Write};

    use serde::Serialize;

    /// Serialize any export payload as pretty-printed JSON with a trailing
    /// newline.
    pub fn write_pretty<T: Serialize>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value).map_err(io::Error::other)?;
        writeln!(writer)
    }
}
