use std::borrow::Cow;

/// Strips a leading byte-order mark and converts CRLF and lone CR to LF.
///
/// Applied before scanning so that every line-break convention ends a
/// record the same way.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
