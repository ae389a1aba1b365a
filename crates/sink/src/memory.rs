//! In-memory reference implementation of [`DocumentSink`].
//!
//! Pages hold text shapes in z-order; shapes hold rendered lines. Removed
//! shapes keep their arena slot so previously issued handles stay valid.
//! Used by the test suites and by callers that want to inspect generated
//! content without a concrete slide backend.

use crate::error::SinkError;
use crate::line::RenderedLine;
use crate::traits::{CellStyle, DocumentSink};
use deckbrief_types::{ContainerId, PageId, Rect, TableId};

#[derive(Debug, Clone)]
pub struct MemoryShape {
    pub page: usize,
    pub frame: Rect,
    pub lines: Vec<RenderedLine>,
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryTable {
    pub page: PageId,
    pub frame: Rect,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<String>>,
    pub styles: Vec<Vec<Option<CellStyle>>>,
}

#[derive(Debug, Default)]
pub struct MemoryDeck {
    pages: Vec<Vec<usize>>,
    shapes: Vec<MemoryShape>,
    tables: Vec<MemoryTable>,
}

impl MemoryDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self) -> PageId {
        self.pages.push(Vec::new());
        PageId::new(self.pages.len() - 1)
    }

    /// Adds a text shape seeded with one line of placeholder text.
    pub fn add_text_shape(
        &mut self,
        page: PageId,
        frame: Rect,
        text: &str,
    ) -> Result<ContainerId, SinkError> {
        let slots = self
            .pages
            .get_mut(page.index())
            .ok_or(SinkError::UnknownPage(page))?;
        let shape = MemoryShape {
            page: page.index(),
            frame,
            lines: vec![RenderedLine::text(text, 0, 14.0)],
            removed: false,
        };
        self.shapes.push(shape);
        let id = ContainerId::new(self.shapes.len() - 1);
        slots.push(id.index());
        Ok(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn tables(&self) -> &[MemoryTable] {
        &self.tables
    }

    pub fn tables_on(&self, page: PageId) -> impl Iterator<Item = &MemoryTable> {
        self.tables.iter().filter(move |t| t.page == page)
    }

    pub fn shape(&self, container: ContainerId) -> Option<&MemoryShape> {
        self.shapes.get(container.index())
    }

    pub fn lines(&self, container: ContainerId) -> &[RenderedLine] {
        self.shapes
            .get(container.index())
            .map(|s| s.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Plain text of every live shape on a page, lines joined by newlines.
    pub fn page_text(&self, page: PageId) -> String {
        let Some(slots) = self.pages.get(page.index()) else {
            return String::new();
        };
        slots
            .iter()
            .filter_map(|&i| self.shapes.get(i))
            .filter(|s| !s.removed)
            .flat_map(|s| s.lines.iter().map(RenderedLine::plain_text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plain text of the whole document, pages in order.
    pub fn document_text(&self) -> String {
        (0..self.pages.len())
            .map(|i| self.page_text(PageId::new(i)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn live_shape_mut(&mut self, container: ContainerId) -> Result<&mut MemoryShape, SinkError> {
        let shape = self
            .shapes
            .get_mut(container.index())
            .ok_or(SinkError::UnknownContainer(container))?;
        if shape.removed {
            return Err(SinkError::ContainerRemoved(container));
        }
        Ok(shape)
    }

    fn table_cell_mut(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
    ) -> Result<&mut MemoryTable, SinkError> {
        let t = self
            .tables
            .get_mut(table.index())
            .ok_or(SinkError::UnknownTable(table))?;
        if row >= t.rows || col >= t.cols {
            return Err(SinkError::CellOutOfBounds { table, row, col });
        }
        Ok(t)
    }
}

impl DocumentSink for MemoryDeck {
    fn find_container_with_marker(&self, marker: &str) -> Option<(PageId, ContainerId)> {
        for (page_index, slots) in self.pages.iter().enumerate() {
            for &shape_index in slots {
                let shape = &self.shapes[shape_index];
                if shape.removed {
                    continue;
                }
                if shape
                    .lines
                    .iter()
                    .any(|line| line.plain_text().contains(marker))
                {
                    return Some((PageId::new(page_index), ContainerId::new(shape_index)));
                }
            }
        }
        None
    }

    fn replace_text_everywhere(&mut self, token: &str, value: &str) {
        for shape in self.shapes.iter_mut().filter(|s| !s.removed) {
            for line in &mut shape.lines {
                for segment in &mut line.segments {
                    if segment.text.contains(token) {
                        segment.text = segment.text.replace(token, value);
                    }
                }
            }
        }
    }

    fn clear_container(&mut self, container: ContainerId) -> Result<(), SinkError> {
        self.live_shape_mut(container)?.lines.clear();
        Ok(())
    }

    fn append_line(&mut self, container: ContainerId, line: RenderedLine) -> Result<(), SinkError> {
        self.live_shape_mut(container)?.lines.push(line);
        Ok(())
    }

    fn append_table(
        &mut self,
        page: PageId,
        rows: usize,
        cols: usize,
        frame: Rect,
    ) -> Result<TableId, SinkError> {
        if page.index() >= self.pages.len() {
            return Err(SinkError::UnknownPage(page));
        }
        self.tables.push(MemoryTable {
            page,
            frame,
            rows,
            cols,
            cells: vec![vec![String::new(); cols]; rows],
            styles: vec![vec![None; cols]; rows],
        });
        Ok(TableId::new(self.tables.len() - 1))
    }

    fn set_cell(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        content: &str,
    ) -> Result<(), SinkError> {
        let t = self.table_cell_mut(table, row, col)?;
        t.cells[row][col] = content.to_string();
        Ok(())
    }

    fn set_cell_style(
        &mut self,
        table: TableId,
        row: usize,
        col: usize,
        style: &CellStyle,
    ) -> Result<(), SinkError> {
        let t = self.table_cell_mut(table, row, col)?;
        t.styles[row][col] = Some(style.clone());
        Ok(())
    }

    fn clone_page(&mut self, layout: PageId) -> Result<PageId, SinkError> {
        let slots = self
            .pages
            .get(layout.index())
            .ok_or(SinkError::UnknownPage(layout))?
            .clone();
        let new_page = self.pages.len();
        let mut new_slots = Vec::with_capacity(slots.len());
        for shape_index in slots {
            let source = &self.shapes[shape_index];
            if source.removed {
                continue;
            }
            // Placeholder text is not carried onto continuation pages.
            let clone = MemoryShape {
                page: new_page,
                frame: source.frame,
                lines: Vec::new(),
                removed: false,
            };
            self.shapes.push(clone);
            new_slots.push(self.shapes.len() - 1);
        }
        self.pages.push(new_slots);
        log::debug!("cloned page {} -> page {}", layout.index(), new_page);
        Ok(PageId::new(new_page))
    }

    fn remove_container(&mut self, container: ContainerId) -> Result<Rect, SinkError> {
        let shape = self.live_shape_mut(container)?;
        shape.removed = true;
        shape.lines.clear();
        Ok(shape.frame)
    }

    fn bounding_box(&self, container: ContainerId) -> Result<Rect, SinkError> {
        self.shapes
            .get(container.index())
            .map(|s| s.frame)
            .ok_or(SinkError::UnknownContainer(container))
    }
}
