//! Feed index updater.
//!
//! The persisted `index.html` carries a section delimited by two literal
//! markers. Each run inserts its card immediately after the start marker, so
//! the feed reads most-recent-first. Everything else in the document is left
//! byte-for-byte unchanged. The rewrite is atomic; when a marker is missing
//! or out of order the file is not touched.
//!
//! There is no deduplication and no cap on the number of cards.

use crate::config::FeedSettings;
use crate::error::{AutoconceptError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;
use tracing::info;


/// The literal start/end pair delimiting the feed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedMarkers<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> From<&'a FeedSettings> for FeedMarkers<'a> {
    fn from(settings: &'a FeedSettings) -> Self {
        Self {
            start: &settings.start_marker,
            end: &settings.end_marker,
        }
    }
}

/// Byte offset right after the start marker, where new cards go.
///
/// Fails when the start marker is absent, when the end marker is absent, or
/// when the end marker only appears before the start marker.
pub fn insertion_point(document: &str, markers: FeedMarkers<'_>) -> Result<usize> {
    let start = document.find(markers.start).ok_or_else(|| {
        AutoconceptError::PreconditionError(format!(
            "feed start marker '{}' not found",
            markers.start
        ))
    })?;
    let after_start = start + markers.start.len();

    if document[after_start..].contains(markers.end) {
        return Ok(after_start);
    }

    if document.contains(markers.end) {
        Err(AutoconceptError::PreconditionError(format!(
            "feed end marker '{}' appears before the start marker '{}'",
            markers.end, markers.start
        )))
    } else {
        Err(AutoconceptError::PreconditionError(format!(
            "feed end marker '{}' not found",
            markers.end
        )))
    }
}

/// Return `document` with `card` inserted right after the start marker.
pub fn insert_card(document: &str, card: &str, markers: FeedMarkers<'_>) -> Result<String> {
    let at = insertion_point(document, markers)?;

    let mut updated = String::with_capacity(document.len() + card.len());
    updated.push_str(&document[..at]);
    updated.push_str(card);
    updated.push_str(&document[at..]);
    Ok(updated)
}

fn read_index(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        AutoconceptError::PreconditionError(format!(
            "failed to read feed index '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Verify the index exists and carries both markers in order.
///
/// Called before any image is requested so a malformed index aborts the run
/// without side effects.
pub fn check_index(path: &Path, markers: FeedMarkers<'_>) -> Result<()> {
    let document = read_index(path)?;
    insertion_point(&document, markers).map(|_| ())
}

/// Insert `card` into the index file at `path` and rewrite it atomically.
pub fn update_index(path: &Path, card: &str, markers: FeedMarkers<'_>) -> Result<()> {
    let document = read_index(path)?;
    let updated = insert_card(&document, card, markers)?;
    atomic_write_file(path, &updated)?;
    info!("feed updated: {}", path.display());
    Ok(())
}

/// A minimal index page with an empty feed section.
pub fn scaffold_index(site_title: &str, markers: FeedMarkers<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
</head>
<body>
  <main>
    <h1>{title}</h1>
    <section class="feed">
      {start}
      {end}
    </section>
  </main>
</body>
</html>
"#,
        title = site_title,
        start = markers.start,
        end = markers.end
    )
}
