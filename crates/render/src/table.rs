//! Tabular paginator.
//!
//! Takes a canonical table (title, headers, row records), estimates each
//! row's rendered height from column width and text length, and splits the
//! rows greedily into page-sized chunks. The first chunk lands on the page
//! holding the marker; every further chunk gets a fresh page cloned from the
//! same layout.

use crate::error::RenderError;
use crate::theme;
use deckbrief_format::scalar_text;
use deckbrief_heuristics::flatten_pairs;
use deckbrief_sink::{DocumentSink, RenderedLine};
use itertools::Itertools;
use serde_json::{Map, Value};

/// Canonical table shape: `title`, ordered unique `headers`, and row records
/// mapping header names to payload nodes. Missing headers render as empty
/// cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl TableSpec {
    /// Parses a payload already in canonical form (a mapping with `headers`
    /// and `rows` keys). Returns `None` when the payload is some other
    /// shape, so callers can fall back to the value-map transform.
    pub fn from_canonical(value: &Value, default_title: &str) -> Option<Self> {
        let map = value.as_object()?;
        let headers = map
            .get("headers")?
            .as_array()?
            .iter()
            .map(|h| h.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        let rows = map
            .get("rows")?
            .as_array()?
            .iter()
            .filter_map(|r| r.as_object().cloned())
            .collect();
        let title = map
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(default_title)
            .to_string();
        Some(Self { title, headers, rows })
    }
}

/// Estimated rendered height of one row in points.
///
/// Characters-per-line is approximated from the column width and an average
/// character width; each cell contributes the number of wrapped lines its
/// content needs, and the row takes the tallest cell (at least one line).
pub fn estimate_row_height(
    row: &Map<String, Value>,
    headers: &[String],
    line_height_pt: f32,
    col_width_pt: f32,
) -> f32 {
    let chars_per_line = ((col_width_pt / theme::AVG_CHAR_WIDTH_PT) as usize).max(1);
    let max_lines = headers
        .iter()
        .map(|h| row.get(h).map_or(0, |v| cell_line_count(v, chars_per_line)))
        .max()
        .unwrap_or(0)
        .max(1);
    max_lines as f32 * line_height_pt
}

fn cell_line_count(value: &Value, chars_per_line: usize) -> usize {
    let wrapped = |text: &str| text.chars().count().div_ceil(chars_per_line);
    match value {
        Value::Array(items) if items.first().is_some_and(Value::is_object) => items
            .iter()
            .map(|item| match item {
                Value::Object(record) => wrapped(&flatten_pairs(record)),
                other => wrapped(&scalar_text(other)),
            })
            .sum(),
        Value::Array(items) => items.iter().map(|item| wrapped(&scalar_text(item))).sum(),
        Value::String(s) => s.lines().map(wrapped).sum(),
        other => wrapped(&scalar_text(other)),
    }
}

/// Greedy single-pass chunking: rows accumulate while the cumulative
/// estimated height fits; a row that would overflow starts the next chunk. A
/// single row taller than the whole page still forms its own chunk, so the
/// partition always makes progress and loses nothing.
pub fn partition_rows<'a>(
    rows: &'a [Map<String, Value>],
    headers: &[String],
    available_height_pt: f32,
    line_height_pt: f32,
    col_width_pt: f32,
) -> Vec<&'a [Map<String, Value>]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (i, row) in rows.iter().enumerate() {
        let height = estimate_row_height(row, headers, line_height_pt, col_width_pt);
        if i > start && used + height > available_height_pt {
            chunks.push(&rows[start..i]);
            start = i;
            used = 0.0;
        }
        used += height;
    }
    if start < rows.len() {
        chunks.push(&rows[start..]);
    }
    chunks
}

/// Renders a table into the document, paginating across cloned pages.
///
/// A missing marker is a hard error; an empty table (no headers or no rows)
/// is skipped with a warning and produces nothing.
pub fn render_table<S: DocumentSink>(
    sink: &mut S,
    marker: &str,
    spec: &TableSpec,
) -> Result<(), RenderError> {
    let (page, container) = sink
        .find_container_with_marker(marker)
        .ok_or_else(|| RenderError::MarkerNotFound(marker.to_string()))?;

    if spec.headers.is_empty() || spec.rows.is_empty() {
        log::warn!(
            "table '{}' has no headers or rows; skipping section",
            spec.title
        );
        return Ok(());
    }

    let frame = sink.bounding_box(container)?;
    let cols = spec.headers.len();
    let col_width = frame.width / cols as f32;
    // One capacity for every page: the header row is repeated on each, and
    // the title band is reserved once up front so continuation pages are
    // never over-filled.
    let content_height = (frame.height - theme::TABLE_HEADER_ROW_PT - theme::TABLE_TITLE_BAND_PT)
        .max(theme::TABLE_LINE_HEIGHT_PT);
    let chunks = partition_rows(
        &spec.rows,
        &spec.headers,
        content_height,
        theme::TABLE_LINE_HEIGHT_PT,
        col_width,
    );
    log::debug!(
        "table '{}': {} rows over {} page(s)",
        spec.title,
        spec.rows.len(),
        chunks.len()
    );

    // The marker container becomes the title holder on the first page; the
    // table itself starts below the title band.
    sink.clear_container(container)?;
    sink.append_line(
        container,
        RenderedLine::heading(spec.title.clone(), theme::BULLET_PT),
    )?;
    let first_frame = frame.inset_top(theme::TABLE_TITLE_BAND_PT);

    for (index, chunk) in chunks.iter().enumerate() {
        let (target, table_frame) = if index == 0 {
            (page, first_frame)
        } else {
            // Continuation pages repeat no title, so the table reclaims the
            // title band.
            (sink.clone_page(page)?, frame)
        };
        let table = sink.append_table(target, chunk.len() + 1, cols, table_frame)?;
        for (col, header) in spec.headers.iter().enumerate() {
            sink.set_cell(table, 0, col, header)?;
            sink.set_cell_style(table, 0, col, &theme::header_cell_style())?;
        }
        for (r, row) in chunk.iter().enumerate() {
            for (c, header) in spec.headers.iter().enumerate() {
                let content = cell_text(row.get(header));
                sink.set_cell(table, r + 1, c, &content)?;
            }
        }
    }
    Ok(())
}

/// Flattens one cell value to display text, one rendered line per item.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) if items.first().is_some_and(Value::is_object) => items
            .iter()
            .map(|item| match item {
                Value::Object(record) => flatten_pairs(record),
                other => scalar_text(other),
            })
            .join("\n"),
        Some(Value::Array(items)) => items.iter().map(scalar_text).join("\n"),
        Some(Value::String(s)) => s.clone(),
        Some(other) => scalar_text(other),
    }
}
