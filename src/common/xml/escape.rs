use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

const MARKUP: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

// XML 1.0 allows no C0 control other than tab, LF and CR, not even as a
// character reference. They are written in the `_xHHHH_` form Office uses.
static XML_ESCAPES: Lazy<(Vec<String>, Vec<String>)> = Lazy::new(|| {
    let controls = (0u8..0x20)
        .filter(|b| !matches!(b, 0x09 | 0x0A | 0x0D))
        .map(|b| (char::from(b).to_string(), format!("_x{:04X}_", b)));
    MARKUP
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .chain(controls)
        .unzip()
});

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(&XML_ESCAPES.0)
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" and not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters for use in text nodes and attribute values.
///
/// Control characters XML cannot carry become `_xHHHH_`.
///
/// # Examples
///
/// ```
/// use slidesmith::common::xml::escape_xml;
/// assert_eq!(escape_xml("Research & Development"), "Research &amp; Development");
/// assert_eq!(escape_xml("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell_x0007_");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, XML_ESCAPES.1.as_slice())
}

/// Unescape the five predefined XML entities.
///
/// Unknown entities are left unchanged.
///
/// # Examples
///
/// ```
/// use slidesmith::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("Q&amp;A"), "Q&A");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&nbsp;"), "&nbsp;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_unescape_pair() {
        let raw = "Pending → Investigating & \"Resolved\" <fast>";
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_xml("a\u{0}b\u{8}c"), "a_x0000_b_x0008_c");
        assert_eq!(escape_xml("v\u{B}f\u{C}e\u{1B}"), "v_x000B_f_x000C_e_x001B_");
        assert_eq!(escape_xml("tab\tline\ncr\r"), "tab\tline\ncr\r");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_xml("© Tech84"), "© Tech84");
    }
}
