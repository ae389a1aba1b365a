use crate::error::SinkError;
use crate::line::RenderedLine;
use deckbrief_types::{Color, ContainerId, PageId, Rect, TableId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Styling for one table cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub bold: bool,
    pub alignment: Alignment,
}

/// The primitive operations a slide backend must provide.
///
/// Handles are opaque; each implementation issues its own. A render call owns
/// the sink exclusively for its duration, so the trait is free to mutate the
/// underlying document in place.
pub trait DocumentSink {
    /// Locates the first container anywhere in the document whose text
    /// contains `marker`, searching pages and containers in document order.
    fn find_container_with_marker(&self, marker: &str) -> Option<(PageId, ContainerId)>;

    /// Replaces every occurrence of `token` in every text container of the
    /// document.
    fn replace_text_everywhere(&mut self, token: &str, value: &str);

    /// Drops all existing text from a container, keeping its frame.
    fn clear_container(&mut self, container: ContainerId) -> Result<(), SinkError>;

    fn append_line(&mut self, container: ContainerId, line: RenderedLine) -> Result<(), SinkError>;

    /// Creates an empty `rows` x `cols` table at `frame` on the given page.
    fn append_table(
        &mut self,
        page: PageId,
        rows: usize,
        cols: usize,
        frame: Rect,
    ) -> Result<TableId, SinkError>;

    fn set_cell(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        content: &str,
    ) -> Result<(), SinkError>;

    fn set_cell_style(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        style: &CellStyle,
    ) -> Result<(), SinkError>;

    /// Appends a new page cloned from `layout`, with the cloned containers'
    /// placeholder text cleared so continuation content can use the space.
    fn clone_page(&mut self, layout: PageId) -> Result<PageId, SinkError>;

    /// Removes a container from its page, returning the bounding box it
    /// occupied so replacement content can be placed there.
    fn remove_container(&mut self, container: ContainerId) -> Result<Rect, SinkError>;

    fn bounding_box(&self, container: ContainerId) -> Result<Rect, SinkError>;
}
