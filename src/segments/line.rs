/// Marker line classification
use regex::Regex;
use std::sync::LazyLock;

/// A timestamp token at the start of the line, at least one whitespace
/// character, then a non-empty label.
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?)\s+(.+)$").unwrap());

/// What a single description line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Chapter marker: the leading timestamp and the label after it
    Marker { timestamp: &'a str, content: &'a str },
    /// Anything else, including blank lines
    Plain,
}

/// Classify one line of a description. Surrounding whitespace is ignored.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Plain;
    }

    match MARKER_PATTERN.captures(trimmed) {
        Some(captures) => match (captures.get(1), captures.get(2)) {
            (Some(timestamp), Some(content)) => LineKind::Marker {
                timestamp: timestamp.as_str(),
                content: content.as_str(),
            },
            _ => LineKind::Plain,
        },
        None => LineKind::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_lines() {
        assert_eq!(
            classify_line("0:00 Intro"),
            LineKind::Marker { timestamp: "0:00", content: "Intro" }
        );
        assert_eq!(
            classify_line("  12:05\tLa suite du programme  "),
            LineKind::Marker { timestamp: "12:05", content: "La suite du programme" }
        );
        assert_eq!(
            classify_line("1:02:03 - Questions"),
            LineKind::Marker { timestamp: "1:02:03", content: "- Questions" }
        );
    }

    #[test]
    fn test_timestamp_without_label_is_plain() {
        assert_eq!(classify_line("5:00"), LineKind::Plain);
        assert_eq!(classify_line("5:00   "), LineKind::Plain);
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(classify_line(""), LineKind::Plain);
        assert_eq!(classify_line("   "), LineKind::Plain);
        assert_eq!(classify_line("Abonnez-vous !"), LineKind::Plain);
        assert_eq!(classify_line("Intro 0:00"), LineKind::Plain);
        assert_eq!(classify_line("0:00Intro"), LineKind::Plain);
        assert_eq!(classify_line("123:45 Too many minute digits"), LineKind::Plain);
        assert_eq!(classify_line("1:5 Single second digit"), LineKind::Plain);
        assert_eq!(classify_line("https://www.youtube.com/watch?v=abc"), LineKind::Plain);
    }
}
