//! Order summary output.

use std::io::Write;

use pizza_core::OrderSummary;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Writes the summary in the configured format.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &OrderSummary,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => write_text(out, summary),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(out: &mut W, summary: &OrderSummary) -> CliResult<()> {
    writeln!(out)?;
    writeln!(out, "Your Pizza Order Summary:")?;
    writeln!(out, "Description: {}", summary.description)?;
    for line in &summary.lines {
        writeln!(out, "  {:<28}{:>10}", line.name, line.price.to_string())?;
    }
    if let Some(scale) = summary.scale {
        writeln!(out, "  {:<28}{:>10}", "Size multiplier", scale.to_string())?;
    }
    writeln!(out, "Total Price: {}", summary.total)?;
    Ok(())
}
