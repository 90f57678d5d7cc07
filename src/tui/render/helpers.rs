use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::model::task::TaskStatus;

/// Status tag for each task status (markdown checkbox style)
pub(super) fn status_symbol(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "[ ]",
        TaskStatus::InProgress => "[>]",
        TaskStatus::Done => "[x]",
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Truncate to `max_cells` terminal cells, appending `…` if anything was cut
pub(super) fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if s.width() <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        width += g.width();
        if width > budget {
            break;
        }
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Leading graphemes of `s` that fit in `max_cells`, without an ellipsis
pub(super) fn take_width(s: &str, max_cells: usize) -> &str {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        width += g.width();
        if width > max_cells {
            return &s[..i];
        }
    }
    s
}
