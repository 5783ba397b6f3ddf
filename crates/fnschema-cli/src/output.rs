use std::io::Write;
use std::path::Path;

use anyhow::Context;
use fnschema_core::FunctionDetails;

use crate::cli::OutputFormat;

/// Render the document in the requested format, newline-terminated.
pub fn render(details: &FunctionDetails, format: OutputFormat) -> anyhow::Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(details)?,
        OutputFormat::Raw => serde_json::to_string(details)?,
    };
    rendered.push('\n');
    Ok(rendered)
}

/// Write the document to `destination`; `-` means standard output.
pub fn write(details: &FunctionDetails, format: OutputFormat, destination: &Path) -> anyhow::Result<()> {
    let rendered = render(details, format)?;
    if destination == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write to standard output")?;
        return Ok(());
    }
    std::fs::write(destination, rendered)
        .with_context(|| format!("failed to write {}", destination.display()))
}
