//! Console rendering of grid reports.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::nodes::Node;
use crate::sim::report::GridReport;

const RULE_WIDTH: usize = 70;

/// A rounded megawatt figure in its shortest exact form, keeping one decimal
/// for whole numbers (`40.0`, `55.5`, `60.25`).
struct Mw(f64);

impl fmt::Display for Mw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Presents driver progress and per-iteration reports.
///
/// Only `render` is required; the lifecycle hooks default to printing nothing.
pub trait ReportRenderer {
    /// Called once per node as the grid is assembled.
    fn node_added(&mut self, _node: &Node) -> Result<()> {
        Ok(())
    }

    /// Called before the first iteration.
    fn start(&mut self, _iterations: usize) -> Result<()> {
        Ok(())
    }

    fn render(&mut self, iteration: usize, report: &GridReport) -> Result<()>;

    /// Called after the last iteration.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Human-readable block report.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportRenderer for TextRenderer<W> {
    fn node_added(&mut self, node: &Node) -> Result<()> {
        writeln!(self.out, "Added {} node: {}", node.kind(), node.id())?;
        Ok(())
    }

    fn start(&mut self, iterations: usize) -> Result<()> {
        writeln!(
            self.out,
            "\nStarting grid monitoring (will run for {iterations} iterations)..."
        )?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn render(&mut self, iteration: usize, r: &GridReport) -> Result<()> {
        let out = &mut self.out;
        writeln!(out, "\nIteration {iteration} - Timestamp: {}", r.timestamp)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

        writeln!(out, "POWER GENERATION:")?;
        writeln!(out, "Solar Power: {} MW", Mw(r.solar_power_mw))?;
        writeln!(out, "Wind Power: {} MW", Mw(r.wind_power_mw))?;
        writeln!(out, "Total Generation: {} MW", Mw(r.total_generation_mw))?;

        writeln!(out, "\nPOWER CONSUMPTION:")?;
        for reading in r.consumer_readings.iter() {
            writeln!(out, "{}: {} MW", reading.id, Mw(reading.power_mw))?;
        }
        writeln!(out, "Total Consumption: {} MW", Mw(r.total_consumption_mw))?;

        writeln!(out, "\nGRID STATUS:")?;
        writeln!(out, "Power Balance: {} MW", Mw(r.balance_mw))?;
        writeln!(out, "Grid Stability: {}", r.status)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.out, "\nMonitoring complete!")?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    iteration: usize,
    #[serde(flatten)]
    report: &'a GridReport,
}

/// One JSON object per iteration, newline-delimited.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportRenderer for JsonRenderer<W> {
    fn render(&mut self, iteration: usize, report: &GridReport) -> Result<()> {
        serde_json::to_writer(&mut self.out, &JsonLine { iteration, report })?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Builds the renderer for `format` over `out`.
pub fn renderer_for<'a, W: Write + 'a>(
    format: OutputFormat,
    out: W,
) -> Box<dyn ReportRenderer + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(out)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}
