//! Plain-text table rendering.

use artic_lib::TableSession;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Column headers and widths, after the selection and row-number columns.
const COLUMNS: [(&str, usize); 6] = [
    ("Title", 28),
    ("Place of Origin", 16),
    ("Artist", 28),
    ("Inscriptions", 18),
    ("Date Start", 10),
    ("Date End", 8),
];

const SEPARATOR: &str = " │ ";

/// Renders the resident page, its selection marks and the pager line.
pub fn render_table(session: &TableSession) -> String {
    let mut out = String::new();

    let mut header = format!("{:<3}{SEPARATOR}{:>2}", "", "#");
    for (name, width) in COLUMNS {
        header.push_str(SEPARATOR);
        header.push_str(&pad(name, width));
    }
    let rule = "─".repeat(header.width());
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    if session.records().is_empty() {
        out.push_str("  No records\n");
    }

    for (index, artwork) in session.records().iter().enumerate() {
        let mark = if session.is_row_selected(index) { "[x]" } else { "[ ]" };
        let mut line = format!("{mark}{SEPARATOR}{:>2}", index + 1);
        for ((_, width), cell) in COLUMNS.iter().zip(artwork.cells()) {
            line.push_str(SEPARATOR);
            line.push_str(&pad(&single_line(&cell), *width));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&status_line(session));
    out
}

/// Pager and selection summary.
pub fn status_line(session: &TableSession) -> String {
    let pager = match session.total_pages() {
        0 => "No pages".to_string(),
        total => format!("Page {} of {}", session.current_page(), total),
    };
    let selection = session.selection();
    let mut line = format!("{pager} │ {} selected", selection.selected().len());
    if selection.remaining() > 0 {
        line.push_str(&format!(" │ {} pending on later pages", selection.remaining()));
    }
    line
}

/// Collapses whitespace so multi-line fields stay on one row.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates with an ellipsis and pads to exactly `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}
