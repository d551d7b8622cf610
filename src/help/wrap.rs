//! Word wrapping for help descriptions

/// Column budget for the app and command descriptions
pub const DESCRIPTION_WIDTH: usize = 76;

/// Column budget for descriptions inside option and command tables
pub const ENTRY_WIDTH: usize = 64;

/// Split `source` into lines of roughly `width` characters.
///
/// Words are separated by single spaces and never broken. A line is flushed
/// once it has reached `width` before the next word is appended, so a line
/// may run past the budget by up to one word. An empty source yields one
/// empty line.
pub fn wrap(source: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    for word in source.split(' ') {
        if buffer.chars().count() >= width {
            lines.push(buffer.trim_matches(' ').to_string());
            buffer.clear();
        }

        buffer.push(' ');
        buffer.push_str(word);
    }

    if !buffer.is_empty() {
        lines.push(buffer.trim_matches(' ').to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("Application description.", DESCRIPTION_WIDTH), vec!["Application description."]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap("", DESCRIPTION_WIDTH), vec![""]);
    }

    #[test]
    fn test_flushes_once_budget_is_reached() {
        assert_eq!(wrap("aaa bbb ccc ddd", 8), vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_long_word_is_kept_whole() {
        assert_eq!(wrap("abcdefghij k", 5), vec!["abcdefghij", "k"]);
    }

    #[test]
    fn test_lipsum() {
        let lipsum = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
                      sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";
        let lines = wrap(lipsum, ENTRY_WIDTH);
        assert_eq!(
            lines,
            vec![
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do",
                "eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            ]
        );
    }
}
