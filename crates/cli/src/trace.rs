//! Per-frame animation trace, exported as CSV or Parquet.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use arcgauge::Gauge;
use polars::prelude::*;
use serde::Serialize;

/// One sampled frame of a gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub t_ms: f64,
    pub progress: f64,
    pub reached_start: f64,
    pub reached_sweep: f64,
    pub outline_start: f64,
    pub outline_sweep: f64,
    pub direction: &'static str,
    pub animating: bool,
}

impl Frame {
    pub fn sample(t: Duration, gauge: &Gauge) -> Self {
        let s = gauge.sweep();
        Self {
            t_ms: t.as_secs_f64() * 1000.0,
            progress: gauge.progress(),
            reached_start: s.reached_start,
            reached_sweep: s.reached_sweep,
            outline_start: s.outline_start,
            outline_sweep: s.outline_sweep,
            direction: gauge.direction().as_str(),
            animating: gauge.is_animating(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FrameTrace {
    frames: Vec<Frame>,
}

impl FrameTrace {
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[cfg(test)]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let values = |f: fn(&Frame) -> f64| self.frames.iter().map(f).collect::<Vec<f64>>();
        df!(
            "t_ms" => values(|f| f.t_ms),
            "progress" => values(|f| f.progress),
            "reached_start" => values(|f| f.reached_start),
            "reached_sweep" => values(|f| f.reached_sweep),
            "outline_start" => values(|f| f.outline_start),
            "outline_sweep" => values(|f| f.outline_sweep),
            "direction" => self.frames.iter().map(|f| f.direction).collect::<Vec<&str>>(),
            "animating" => self.frames.iter().map(|f| f.animating).collect::<Vec<bool>>(),
        )
    }

    /// Write by extension: `.parquet`, or `.csv` with a header row.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut df = self.to_frame()?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("parquet") => {
                ParquetWriter::new(File::create(path)?).finish(&mut df)?;
            }
            Some("csv") => {
                let mut file = File::create(path)?;
                CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
            }
            other => bail!("unsupported trace format {:?}; use .csv or .parquet", other),
        }
        Ok(())
    }
}

/// Headline numbers for an exported trace.
#[derive(Debug, Serialize)]
pub struct TraceSummary {
    pub frames: f64,
    pub duration_ms: f64,
    pub final_progress: f64,
    pub max_reached_sweep: f64,
}

/// Lazily scan a previously written trace and reduce it to a summary.
pub fn summarize(path: &Path) -> Result<TraceSummary> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        Some("csv") => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        other => bail!("unsupported trace format {:?}; use .csv or .parquet", other),
    };
    let df = lf
        .select([
            len().cast(DataType::Float64).alias("frames"),
            col("t_ms").max().cast(DataType::Float64).alias("duration_ms"),
            col("progress").last().cast(DataType::Float64).alias("final_progress"),
            col("reached_sweep").max().cast(DataType::Float64).alias("max_reached_sweep"),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), cols = df.width(), "trace_summary");
    let scalar = |name: &str| -> Result<f64> {
        df.column(name)?
            .get(0)?
            .extract::<f64>()
            .with_context(|| format!("column `{name}` is empty"))
    };
    Ok(TraceSummary {
        frames: scalar("frames")?,
        duration_ms: scalar("duration_ms")?,
        final_progress: scalar("final_progress")?,
        max_reached_sweep: scalar("max_reached_sweep")?,
    })
}
