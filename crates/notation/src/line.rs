/// A notation line classified by its leading token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `N <code>`, the start of an entry
    Entry(&'a str),
    /// `R <code>`, the first reference of an entry
    FirstReference(&'a str),
    /// `; <code>`, a continuation reference
    Reference(&'a str),
    /// `$`, the end of an entry
    Terminator,
    /// Anything else
    Payload,
}

/// Classify a raw line (with or without its terminator).
///
/// A code is everything after the marker and its space, so bracketed keys
/// such as `11H(JOHN THE BAPTIST)` stay whole.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    let text = strip_line_ending(line);
    if text == "$" {
        return LineKind::Terminator;
    }

    let Some((head, rest)) = text.split_once(' ') else {
        return LineKind::Payload;
    };
    match head {
        _ if rest.is_empty() => LineKind::Payload,
        "N" => LineKind::Entry(rest),
        "R" => LineKind::FirstReference(rest),
        ";" => LineKind::Reference(rest),
        _ => LineKind::Payload,
    }
}

/// Line text without its trailing `\n` or `\r\n`
#[must_use]
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The trailing `\n`, `\r\n` or empty string of a raw line
#[must_use]
pub fn line_ending(line: &str) -> &str {
    &line[strip_line_ending(line).len()..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify("N 11A11\n"), LineKind::Entry("11A11"));
        assert_eq!(classify("R 31A3331\n"), LineKind::FirstReference("31A3331"));
        assert_eq!(classify("; 41\r\n"), LineKind::Reference("41"));
        assert_eq!(classify("$\n"), LineKind::Terminator);
        assert_eq!(classify("$"), LineKind::Terminator);
    }

    #[test]
    fn test_classify_payload() {
        assert_eq!(classify("K 1\n"), LineKind::Payload);
        assert_eq!(classify("Resurrection\n"), LineKind::Payload);
        assert_eq!(classify("R\n"), LineKind::Payload);
        assert_eq!(classify("N \n"), LineKind::Payload);
        assert_eq!(classify("$ extra\n"), LineKind::Payload);
        assert_eq!(classify("\n"), LineKind::Payload);
    }

    #[test]
    fn test_codes_with_spaces_stay_whole() {
        assert_eq!(
            classify("R 11H(JOHN THE BAPTIST)\n"),
            LineKind::FirstReference("11H(JOHN THE BAPTIST)")
        );
        assert_eq!(
            classify("; 61B2(Napoleon Bonaparte)\r\n"),
            LineKind::Reference("61B2(Napoleon Bonaparte)")
        );
        assert_eq!(classify("N 11H(JOHN)\n"), LineKind::Entry("11H(JOHN)"));
    }

    #[test]
    fn test_entry_code_is_exact() {
        assert_eq!(classify("N  5\n"), LineKind::Entry(" 5"));
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(strip_line_ending("R 1\r\n"), "R 1");
        assert_eq!(line_ending("R 1\r\n"), "\r\n");
        assert_eq!(line_ending("R 1\n"), "\n");
        assert_eq!(line_ending("$"), "");
    }
}
