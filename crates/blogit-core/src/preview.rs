//! Body previews for list pages.
//!
//! A preview is cut on a line boundary and never ends inside an inline image
//! declaration (`"!http://host/image.png(alt)!":http://host/target`).

/// Target length of a preview, ellipsis included.
pub const PREVIEW_LENGTH: usize = 400;

const OMISSION: &str = "...";
const SEPARATOR: char = '\n';
const SPAN_OPEN: &str = "\"!";
const SPAN_CLOSE: &str = "!\"";

/// Preview of `body` for the index page.
pub fn short_body(body: &str) -> String {
    truncate(body, PREVIEW_LENGTH)
}

/// Cut `body` to at most `length` chars, ellipsis included.
///
/// Bodies that already fit come back unchanged. Otherwise the cut lands on the
/// last line separator at or before `length - 3`, or exactly there if the text
/// has no separator. An image declaration left open by the cut is dropped along
/// with the rest of its line.
pub fn truncate(body: &str, length: usize) -> String {
    if body.chars().count() <= length {
        return body.to_string();
    }

    let room = length.saturating_sub(OMISSION.chars().count());
    let room_at = byte_offset(body, room);
    let window_end = room_at + body[room_at..].chars().next().map_or(0, char::len_utf8);

    let mut stop = body[..window_end].rfind(SEPARATOR).unwrap_or(room_at);

    // Moving the cut back can split an earlier multi-line declaration.
    while let Some(open) = unterminated_span(&body[..stop]) {
        stop = body[..open].rfind(SEPARATOR).unwrap_or(0);
        tracing::trace!(open, stop, "Preview cut moved before open image declaration");
    }

    let mut preview = String::with_capacity(stop + OMISSION.len());
    preview.push_str(&body[..stop]);
    preview.push_str(OMISSION);
    preview
}

/// Byte offset of the char at index `chars`, or the end of `text`.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Byte offset of the first span opener in `text` that has no closer after it.
fn unterminated_span(text: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = text[from..].find(SPAN_OPEN) {
        let open = from + found;
        let inner = open + SPAN_OPEN.len();
        match text[inner..].find(SPAN_CLOSE) {
            Some(close) => from = inner + close + SPAN_CLOSE.len(),
            None => return Some(open),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "\"!http://www.images.com/blogit/P6876.thumb.jpg(Look at this)!\":http://www.images.com/blogit/P6976.jpb";

    #[test]
    fn test_short_body_is_verbatim() {
        assert_eq!(short_body("short body"), "short body");

        let exact = "x".repeat(PREVIEW_LENGTH);
        assert_eq!(short_body(&exact), exact);
    }

    #[test]
    fn test_long_body_cuts_on_line_boundary() {
        let body = "t\n".repeat(300);
        assert_eq!(short_body(&body), format!("{}t...", "t\n".repeat(198)));

        let body = "t\n".repeat(600);
        assert_eq!(short_body(&body), format!("{}t...", "t\n".repeat(198)));
    }

    #[test]
    fn test_does_not_cut_inside_image_declaration() {
        let body = format!("{}{}", "some text\n".repeat(35), IMAGE);

        let preview = short_body(&body);

        assert!(!preview.contains("\"!http://www.images.com"));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_drops_multiline_declaration_split_by_cut() {
        let body = format!(
            "{}\"!http://example.com/a.png({})!\":http://example.com",
            "intro line\n".repeat(30),
            "caption line\n".repeat(10),
        );

        let preview = short_body(&body);

        assert_eq!(
            preview,
            format!("{}intro line...", "intro line\n".repeat(29))
        );
        assert!(!preview.contains(SPAN_OPEN));
    }

    #[test]
    fn test_retreat_does_not_split_earlier_declaration() {
        let body = format!(
            "{}\"!a.png(first\ncaption)!\" then \"!b.png(multi\n{}closing)!\":http://x",
            "intro line\n".repeat(10),
            "caption line\n".repeat(40),
        );

        let preview = short_body(&body);

        assert_eq!(
            preview,
            format!("{}intro line...", "intro line\n".repeat(9))
        );
        assert_eq!(unterminated_span(&preview), None);
    }

    #[test]
    fn test_keeps_complete_declaration() {
        let body = format!("{IMAGE}\n{}", "more text\n".repeat(60));

        let preview = short_body(&body);

        assert!(preview.starts_with(IMAGE));
        assert!(preview.chars().count() <= PREVIEW_LENGTH);
    }

    #[test]
    fn test_declaration_on_first_line_leaves_only_ellipsis() {
        let body = format!("\"!http://example.com/a.png({}", "caption\n".repeat(80));
        assert_eq!(short_body(&body), "...");
    }

    #[test]
    fn test_hard_cut_without_separator() {
        let body = "a".repeat(500);
        assert_eq!(short_body(&body), format!("{}...", "a".repeat(397)));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let body = "記".repeat(450);
        let preview = short_body(&body);

        assert_eq!(preview.chars().count(), PREVIEW_LENGTH);
        assert!(preview.starts_with("記記"));
    }
}
