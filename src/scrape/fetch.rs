// src/scrape/fetch.rs
use tracing::{debug, warn};

use crate::core::ArticleSource;
use crate::data::{ArticleRecord, ArticleReference, ResultTable};
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::article;

/// Fetch and parse every article, in order. One try each; a failure costs that
/// row and a warning, nothing more.
pub fn fetch_articles<A>(
    references: &[ArticleReference],
    source: &A,
    progress: &mut dyn Progress,
) -> ResultTable
where
    A: ArticleSource + ?Sized,
{
    let total = references.len();
    let mut table = ResultTable::new();
    progress.begin(total);

    for (i, reference) in references.iter().enumerate() {
        match fetch_one(source, reference) {
            Ok(record) => {
                debug!(url = %reference, "article parsed");
                table.push(record);
            }
            Err(e) => {
                warn!(url = %reference, "article skipped: {e}");
                progress.warn(&format!("Failed to fetch article {reference}: {e}"));
            }
        }
        progress.item_done(reference.as_str());
        progress.advance((i + 1) as f32 / total as f32);
    }

    table
}

fn fetch_one<A>(source: &A, reference: &ArticleReference) -> Result<ArticleRecord>
where
    A: ArticleSource + ?Sized,
{
    let html = source.get(reference.as_str())?;
    article::parse(&html, reference.as_str())
}
