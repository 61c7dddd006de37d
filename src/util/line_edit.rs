//! Single-line text editing on a `String` plus a byte-offset cursor.
//! The cursor always sits on a grapheme boundary.

use super::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    DeleteWordBack,
    ClearToStart,
}

/// Apply `key` to `buf` at `cursor`. Returns true if the text changed.
pub fn apply(buf: &mut String, cursor: &mut usize, key: EditKey) -> bool {
    *cursor = (*cursor).min(buf.len());
    match key {
        EditKey::Char(c) => {
            if c == '\n' || c == '\r' {
                return false;
            }
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
            true
        }
        EditKey::Backspace => match prev_grapheme_boundary(buf, *cursor) {
            Some(prev) => {
                buf.replace_range(prev..*cursor, "");
                *cursor = prev;
                true
            }
            None => false,
        },
        EditKey::Delete => match next_grapheme_boundary(buf, *cursor) {
            Some(next) => {
                buf.replace_range(*cursor..next, "");
                true
            }
            None => false,
        },
        EditKey::Left => {
            if let Some(prev) = prev_grapheme_boundary(buf, *cursor) {
                *cursor = prev;
            }
            false
        }
        EditKey::Right => {
            if let Some(next) = next_grapheme_boundary(buf, *cursor) {
                *cursor = next;
            }
            false
        }
        EditKey::Home => {
            *cursor = 0;
            false
        }
        EditKey::End => {
            *cursor = buf.len();
            false
        }
        EditKey::DeleteWordBack => {
            let start = word_boundary_left(buf, *cursor);
            if start == *cursor {
                return false;
            }
            buf.replace_range(start..*cursor, "");
            *cursor = start;
            true
        }
        EditKey::ClearToStart => {
            if *cursor == 0 {
                return false;
            }
            buf.replace_range(..*cursor, "");
            *cursor = 0;
            true
        }
    }
}

/// Insert pasted text at the cursor, flattening newlines to spaces.
pub fn insert_str(buf: &mut String, cursor: &mut usize, text: &str) -> bool {
    let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    if clean.is_empty() {
        return false;
    }
    *cursor = (*cursor).min(buf.len());
    buf.insert_str(*cursor, &clean);
    *cursor += clean.len();
    true
}
