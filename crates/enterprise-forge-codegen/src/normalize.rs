/// Canonical whitespace for generated source.
///
/// - `\r\n` becomes `\n`
/// - trailing whitespace is stripped from every line
/// - leading blank lines are dropped and runs of blank lines collapse to one
/// - no blank line directly after a line ending in `{` or before a line
///   starting with `}`
/// - the text ends with exactly one newline (empty text stays empty)
///
/// Normalizing twice gives the same result as normalizing once.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let mut lines: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let line = line.trim_end();
        if line.is_empty() {
            match lines.last() {
                None => continue,
                Some(prev) if prev.is_empty() || prev.ends_with('{') => continue,
                Some(_) => lines.push(line),
            }
        } else {
            if line.trim_start().starts_with('}') {
                while lines.last().is_some_and(|prev| prev.is_empty()) {
                    lines.pop();
                }
            }
            lines.push(line);
        }
    }

    while lines.last().is_some_and(|prev| prev.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_crlf() {
        assert_eq!(normalize_whitespace("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn strips_trailing_whitespace() {
        assert_eq!(normalize_whitespace("a  \t\nb \n"), "a\nb\n");
    }

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(normalize_whitespace("a\n\n\n  \nb"), "a\n\nb\n");
    }

    #[test]
    fn removes_blank_lines_inside_braces() {
        let text = "class A\n{\n\n    int x;\n\n}\n";
        assert_eq!(normalize_whitespace(text), "class A\n{\n    int x;\n}\n");
    }

    #[test]
    fn drops_leading_and_trailing_blank_lines() {
        assert_eq!(normalize_whitespace("\n\n a\n\n\n"), " a\n");
    }

    #[test]
    fn keeps_single_trailing_newline() {
        assert_eq!(normalize_whitespace("a"), "a\n");
        assert_eq!(normalize_whitespace("a\n"), "a\n");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\r\n\t"), "");
    }

    #[test]
    fn keeps_indentation() {
        assert_eq!(normalize_whitespace("    a\n\tb"), "    a\n\tb\n");
    }
}
