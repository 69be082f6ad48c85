/// Reduce note markup to plain text.
///
/// Handles exactly four tokens: `<br>` becomes a newline, `<p>` and `</p>`
/// are dropped, `&nbsp;` becomes a space. Other markup is left as is.
pub fn sanitize_notes(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    raw.replace("<br>", "\n")
        .replace("<p>", "")
        .replace("</p>", "")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_breaks_become_newlines() {
        assert_eq!(sanitize_notes("Line1<br>Line2"), "Line1\nLine2");
    }

    #[test]
    fn paragraphs_and_nbsp() {
        assert_eq!(sanitize_notes("<p>Hi&nbsp;there</p>"), "Hi there");
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(sanitize_notes(""), "");
        assert_eq!(sanitize_notes(" \n "), "");
    }

    #[test]
    fn other_markup_passes_through() {
        assert_eq!(sanitize_notes("<b>bold</b> &amp; <BR>"), "<b>bold</b> &amp; <BR>");
    }

    #[test]
    fn markup_only_can_reduce_to_empty() {
        assert_eq!(sanitize_notes("<p></p>"), "");
    }
}
