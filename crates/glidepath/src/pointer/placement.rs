//! Pointer and note placement against the viewport.
//!
//! Responsibilities:
//! - Estimate the rendered size of a note from its text and font size.
//! - Anchor the pointer at the target's right corner region.
//! - Flip the note above / to the left when it would overflow, then clamp.
//!
//! Invariants:
//! - Returned pointer and note boxes lie within the viewport margins whenever
//!   they fit at all; oversized boxes pin to the top/left margin.
//! - Placement is a pure function of its inputs.

use glidepath_config::constants::{NOTE_GAP_PX, NOTE_MAX_WIDTH_PX, NOTE_PADDING_PX};

use crate::geometry::{Point, Rect, Viewport};

/// Average glyph advance relative to the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Line height relative to the font size.
const LINE_HEIGHT_RATIO: f64 = 1.4;

/// Estimated outer size of a note bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSize {
    pub width: f64,
    pub height: f64,
}

/// Estimate the bubble size for `text`, wrapping greedily at word boundaries.
pub fn estimate_note_size(text: &str, font_size_px: f64) -> NoteSize {
    let char_width = font_size_px * CHAR_WIDTH_RATIO;
    let line_height = font_size_px * LINE_HEIGHT_RATIO;
    let inner_width = NOTE_MAX_WIDTH_PX - 2.0 * NOTE_PADDING_PX;
    let max_chars = ((inner_width / char_width).floor() as usize).max(1);

    let mut lines = 0usize;
    let mut widest = 0usize;
    for paragraph in text.lines() {
        let mut current = 0usize;
        lines += 1;
        for word in paragraph.split_whitespace() {
            let mut len = word.chars().count();
            let needed = if current == 0 { len } else { current + 1 + len };
            if needed <= max_chars {
                current = needed;
                continue;
            }
            if current > 0 {
                widest = widest.max(current);
                lines += 1;
            }
            // Words longer than a line break mid-word.
            while len > max_chars {
                widest = max_chars;
                lines += 1;
                len -= max_chars;
            }
            current = len;
        }
        widest = widest.max(current);
    }
    let lines = lines.max(1);

    NoteSize {
        width: (widest as f64 * char_width).min(inner_width) + 2.0 * NOTE_PADDING_PX,
        height: lines as f64 * line_height + 2.0 * NOTE_PADDING_PX,
    }
}

/// Inputs to [`place`].
#[derive(Debug, Clone, Copy)]
pub struct PlacementInput {
    pub target: Rect,
    pub viewport: Viewport,
    pub pointer_size: f64,
    pub note: Option<NoteSize>,
    pub margin: f64,
}

/// Where the pointer and note end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner of the pointer icon.
    pub pointer: Point,
    /// Top-left corner of the note, if a note is shown.
    pub note: Option<Point>,
    pub flipped_above: bool,
    pub flipped_left: bool,
}

/// Compute the pointer and note positions for a target.
pub fn place(input: PlacementInput) -> Placement {
    let PlacementInput {
        target,
        viewport,
        pointer_size: size,
        note,
        margin,
    } = input;
    let half = size / 2.0;

    let space_below = viewport.height - target.bottom();
    let flipped_above = note.is_some_and(|n| n.height + size + NOTE_GAP_PX > space_below);

    let anchor_y = if flipped_above {
        target.top()
    } else {
        target.bottom()
    };
    let pointer = Point::new(
        viewport.clamp_x(target.right() - half, size, margin),
        viewport.clamp_y(anchor_y - half, size, margin),
    );

    let mut flipped_left = false;
    let note_position = note.map(|n| {
        let mut x = pointer.x + half;
        if x + n.width > viewport.width - margin {
            x = pointer.x + half - n.width;
            flipped_left = true;
        }
        let y = if flipped_above {
            pointer.y - NOTE_GAP_PX - n.height
        } else {
            pointer.y + size + NOTE_GAP_PX
        };
        Point::new(
            viewport.clamp_x(x, n.width, margin),
            viewport.clamp_y(y, n.height, margin),
        )
    });

    Placement {
        pointer,
        note: note_position,
        flipped_above,
        flipped_left,
    }
}
