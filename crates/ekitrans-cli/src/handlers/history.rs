//! History command handler.

use anyhow::Result;
use ekitrans_core::{HistoryQuery, TranslationRecord};

use crate::bootstrap::CliContext;

const PREVIEW_CHARS: usize = 40;

pub async fn execute(ctx: &CliContext, query: HistoryQuery) -> Result<()> {
    let page = ctx.core.reviews().history(query).await?;

    if page.translations.is_empty() {
        println!("No translations found.");
        return Ok(());
    }

    for record in &page.translations {
        println!("{}", format_line(record));
    }
    let p = &page.pagination;
    println!(
        "\nPage {} of {} ({} translations)",
        p.current_page, p.total_pages, p.total_items
    );
    Ok(())
}

fn format_line(record: &TranslationRecord) -> String {
    let rating = record
        .rating
        .map_or_else(|| "-".to_string(), |r| r.to_string());
    format!(
        "{}  [{}]  {}  {}\n    {}",
        record.created_at.format("%Y-%m-%d %H:%M"),
        rating,
        record.id,
        truncate(&record.japanese),
        truncate(&record.english),
    )
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}
