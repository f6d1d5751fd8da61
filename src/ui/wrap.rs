use ratatui::style::Style;
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

/// Word-wraps `text` to `width` columns, one `Line` per screen row.
///
/// The rows are rendered without ratatui's own wrapping, so the row count used
/// for scrolling is exactly what ends up on screen. Whitespace at a wrap point
/// is dropped, words wider than the pane break between glyphs (never inside a
/// double-width glyph), and every source line yields at least one row.
pub fn prewrap(text: &str, style: Style, width: u16) -> Vec<Line<'static>> {
    wrap_rows(text, width as usize)
        .into_iter()
        .map(|row| Line::styled(row, style))
        .collect()
}

fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    if width == 0 {
        return rows;
    }
    for line in text.split('\n') {
        wrap_line(line, width, &mut rows);
    }
    rows
}

fn wrap_line(line: &str, width: usize, rows: &mut Vec<String>) {
    let mut row = String::new();
    let mut used = 0;

    for token in tokens(line) {
        let token_width: usize = token.chars().map(char_width).sum();
        if used + token_width <= width {
            row.push_str(token);
            used += token_width;
            continue;
        }

        if token.starts_with(char::is_whitespace) {
            if used > 0 {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            continue;
        }

        if used > 0 {
            row.truncate(row.trim_end().len());
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        // Overlong words hard-wrap.
        for c in token.chars() {
            let w = char_width(c);
            if used > 0 && used + w > width {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
    }

    rows.push(row);
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Splits a line into alternating runs of whitespace and non-whitespace.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let whitespace = first.is_whitespace();
        let end = rest
            .find(|c: char| c.is_whitespace() != whitespace)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}
