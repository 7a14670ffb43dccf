//! Row layout: wrapping a row descriptor into terminal lines.
//!
//! The number of lines a row wraps into is its measured extent.

use crate::presenter::{Affordance, Extent, RowDescriptor};
use crate::view::styles::RowStyles;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Columns of left inset per indentation level.
pub const INDENT_COLUMNS: usize = 4;

/// Per-row highlight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowFlags {
    pub selected: bool,
    /// Row was inserted by the most recent toggle.
    pub inserted: bool,
}

/// Hard-wrap `text` into chunks no wider than `width` columns.
///
/// Always returns at least one chunk. Characters wider than `width` get a
/// chunk of their own.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += ch_width;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Lines for one row at the given viewport width.
pub fn layout_row(
    row: &RowDescriptor,
    width: u16,
    styles: &RowStyles,
    flags: RowFlags,
) -> Vec<Line<'static>> {
    let inset = INDENT_COLUMNS * row.indent as usize;
    // Never inset past the point where no text fits
    let inset = inset.min((width as usize).saturating_sub(1));
    let available = (width as usize).saturating_sub(inset);
    let pad = " ".repeat(inset);

    let mut base = if row.indent == 0 {
        styles.comment
    } else {
        styles.reply
    };
    if flags.inserted {
        base = base.patch(styles.inserted);
    }

    let mut lines: Vec<Line<'static>> = wrap_to_width(&row.text, available)
        .into_iter()
        .map(|chunk| Line::from(vec![Span::raw(pad.clone()), Span::styled(chunk, base)]))
        .collect();

    if let Affordance::Visible { label, expanded } = &row.affordance {
        let marker = if *expanded { "▾ " } else { "▸ " };
        let control = format!("{}{}", marker, label);
        lines.extend(wrap_to_width(&control, available).into_iter().map(|chunk| {
            Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(chunk, styles.affordance),
            ])
        }));
    }

    if flags.selected {
        lines = lines
            .into_iter()
            .map(|line| line.patch_style(styles.selected))
            .collect();
    }
    lines
}

/// Number of lines the row occupies at `width`.
pub fn measure_row(row: &RowDescriptor, width: u16) -> Extent {
    let lines = layout_row(row, width, &RowStyles::default(), RowFlags::default()).len();
    Extent::try_from(lines).unwrap_or(Extent::MAX)
}
