//! Translate command handler.

use anyhow::Result;
use ekitrans_core::TranslationResult;

use crate::bootstrap::CliContext;

/// Translate `text` through the credential pool and record it.
pub async fn execute(ctx: &CliContext, text: &str) -> Result<()> {
    let result = ctx.core.translations().translate(Some(text)).await?;
    println!("{}", render(&result));
    Ok(())
}

fn render(result: &TranslationResult) -> String {
    let english = if result.english_translation.is_empty() {
        "(no translation returned)"
    } else {
        result.english_translation.as_str()
    };
    match &result.translation_id {
        Some(id) => format!("{english}\n\nSaved as {id}"),
        None => format!("{english}\n\nNot saved"),
    }
}
