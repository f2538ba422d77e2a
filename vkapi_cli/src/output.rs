use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Body bytes exactly as received.
    Raw,
    /// Pretty-printed JSON, falling back to raw for non-JSON bodies.
    Json,
}

pub fn write_body(out: &mut impl Write, body: &[u8], format: OutputFormat) -> Result<()> {
    out.write_all(&render(body, format))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub fn write_error_body(out: &mut impl Write, body: &[u8]) -> Result<()> {
    out.write_all(body)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn render(body: &[u8], format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Raw => body.to_vec(),
        OutputFormat::Json => match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => match serde_json::to_vec_pretty(&value) {
                Ok(pretty) => pretty,
                Err(_) => body.to_vec(),
            },
            Err(_) => body.to_vec(),
        },
    }
}
