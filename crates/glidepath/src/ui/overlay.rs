//! Pointer overlay widget.
//!
//! Draws an `OverlayFrame` on top of an already-rendered screen: the icon
//! glyph centered on the pointer box, then the note bubble.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::page::CellMetrics;
use crate::pointer::{NoteFrame, OverlayFrame};

/// Smallest bubble that still fits a border and one cell of text.
const MIN_NOTE_CELLS: u16 = 3;

/// Renders a pointer overlay snapshot into a ratatui buffer.
#[derive(Debug, Clone, Copy)]
pub struct PointerOverlay<'a> {
    frame: &'a OverlayFrame,
    metrics: CellMetrics,
}

impl<'a> PointerOverlay<'a> {
    pub fn new(frame: &'a OverlayFrame, metrics: CellMetrics) -> Self {
        Self { frame, metrics }
    }

    /// Cell holding the icon glyph, relative to `area`.
    pub fn icon_cell(&self, area: Rect) -> (u16, u16) {
        let half = self.frame.style.pointer_size / 2.0;
        (
            area.x.saturating_add(self.metrics.col(self.frame.pointer.x + half)),
            area.y.saturating_add(self.metrics.row(self.frame.pointer.y + half)),
        )
    }

    /// Cell rect of the note bubble, clipped to `area`.
    pub fn note_rect(&self, note: &NoteFrame, area: Rect) -> Rect {
        Rect::new(
            area.x.saturating_add(self.metrics.col(note.position.x)),
            area.y.saturating_add(self.metrics.row(note.position.y)),
            self.metrics.cols_for(note.width).max(MIN_NOTE_CELLS),
            self.metrics.rows_for(note.height).max(MIN_NOTE_CELLS),
        )
        .intersection(area)
    }

    fn render_note(&self, note: &NoteFrame, area: Rect, buf: &mut Buffer) {
        let rect = self.note_rect(note, area);
        if rect.is_empty() {
            return;
        }

        let mut border_style = Style::default().fg(self.frame.style.color);
        let border_type = if note.focused {
            border_style = border_style.add_modifier(Modifier::BOLD);
            BorderType::Double
        } else {
            BorderType::Plain
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style);

        Clear.render(rect, buf);
        Paragraph::new(note.text.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(rect, buf);
    }
}

impl Widget for PointerOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.frame.visible {
            return;
        }

        let (col, row) = self.icon_cell(area);
        if col < area.right() && row < area.bottom() {
            let glyph = self.frame.style.glyph(self.frame.transform);
            let style = Style::default()
                .fg(self.frame.style.color)
                .add_modifier(Modifier::BOLD);
            buf.set_string(col, row, glyph, style);
        }

        if let Some(note) = &self.frame.note {
            self.render_note(note, area, buf);
        }
    }
}
