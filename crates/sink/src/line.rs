/// One run of text within a rendered line, optionally hyperlinked.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    pub text: String,
    pub link: Option<String>,
    pub bold: bool,
}

impl TextSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
            bold: false,
        }
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
            bold: true,
        }
    }
}

/// One visual output unit: an indented, styled line of text runs.
///
/// Lines are immutable once emitted; their emission order is their display
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine {
    pub indent: u8,
    pub size_pt: f32,
    pub segments: Vec<TextSegment>,
}

impl RenderedLine {
    pub fn text(text: impl Into<String>, indent: u8, size_pt: f32) -> Self {
        Self {
            indent,
            size_pt,
            segments: vec![TextSegment::plain(text)],
        }
    }

    pub fn heading(text: impl Into<String>, size_pt: f32) -> Self {
        Self {
            indent: 0,
            size_pt,
            segments: vec![TextSegment::bold(text)],
        }
    }

    pub fn from_segments(segments: Vec<TextSegment>, indent: u8, size_pt: f32) -> Self {
        Self {
            indent,
            size_pt,
            segments,
        }
    }

    /// Concatenated text of all segments, links flattened to their text.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}
