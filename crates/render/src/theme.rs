//! Read-only visual constants shared by the renderers.

use deckbrief_sink::{Alignment, CellStyle};
use deckbrief_types::Color;

/// Section header lines.
pub const HEADER_PT: f32 = 18.0;
/// Top-level bullets and narrative sentences.
pub const BULLET_PT: f32 = 14.0;
/// Nested bullets.
pub const SUB_BULLET_PT: f32 = 12.0;
/// Link lines under a bullet.
pub const LINK_PT: f32 = 11.0;

/// One rendered text line inside a table cell, at 10pt body text.
pub const TABLE_LINE_HEIGHT_PT: f32 = 12.0;
/// Approximate average character width at 10pt, used to estimate wrapping.
pub const AVG_CHAR_WIDTH_PT: f32 = 6.0;
/// Reserved height for the styled header row.
pub const TABLE_HEADER_ROW_PT: f32 = 24.0;
/// Vertical band reserved for the table title on the first page.
pub const TABLE_TITLE_BAND_PT: f32 = 22.0;

pub const TABLE_HEADER_BG: Color = Color::rgb(31, 78, 121);
pub const TABLE_HEADER_FG: Color = Color::rgb(255, 255, 255);

pub fn header_cell_style() -> CellStyle {
    CellStyle {
        background: Some(TABLE_HEADER_BG),
        text_color: Some(TABLE_HEADER_FG),
        bold: true,
        alignment: Alignment::Center,
    }
}
