//! Export command handler.
//!
//! Writes the high-rated translations as the same pretty-printed JSON array
//! the HTTP export returns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use ekitrans_core::export_filename;

use crate::bootstrap::CliContext;

/// Write the export to `output`, or to the dated default file name in the
/// current directory. Returns the path written.
pub async fn execute(ctx: &CliContext, output: Option<&Path>) -> Result<PathBuf> {
    let entries = ctx.core.reviews().export().await?;
    let path = output.map_or_else(
        || PathBuf::from(export_filename(Utc::now().date_naive())),
        Path::to_path_buf,
    );

    let json = serde_json::to_string_pretty(&entries)?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Exported {} translation(s) to {}", entries.len(), path.display());
    Ok(path)
}
