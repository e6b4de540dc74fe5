//! UI helper functions

/// Map a catalog icon name to a single-width terminal glyph
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "camera" => "◉",
        "film" => "▣",
        "smartphone" => "▭",
        "youtube" => "▶",
        "graduation" => "✦",
        "briefcase" => "■",
        "star" => "★",
        "projects" => "▰",
        "clients" => "◆",
        "views" => "◎",
        "awards" => "✪",
        _ => "●",
    }
}

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyph_known_names() {
        assert_eq!(icon_glyph("camera"), "◉");
        assert_eq!(icon_glyph("youtube"), "▶");
        assert_eq!(icon_glyph("star"), "★");
    }

    #[test]
    fn test_icon_glyph_unknown_falls_back() {
        assert_eq!(icon_glyph("hologram"), "●");
    }

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        let result = wrap_text("hello world", 20);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }
}
