use unicode_width::UnicodeWidthStr;

pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    s.chars().fold(String::from(""), |acc: String, c: char| {
        let last_line = acc.lines().last().unwrap_or(&acc);
        if last_line.width() + c.to_string().width() > width {
            format!("{acc}\n{c}")
        } else {
            format!("{acc}{c}")
        }
    })
}

/// Number of rows `s` occupies when wrapped to `width` columns.
pub fn wrapped_height(s: &str, width: usize) -> usize {
    if width == 0 || s.is_empty() {
        return 0;
    }
    wrap_text(s, width).lines().count()
}

pub fn truncate_text(s: &str, height: usize) -> String {
    if height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > height {
        if height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        let actual = wrap_text("hello, world!", 4);
        let expected = "hell\no, w\norld\n!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello", 0), "");
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("hello, world!", 13), 1);
        assert_eq!(wrapped_height("hello, world!", 4), 4);
        assert_eq!(wrapped_height("", 10), 0);
        assert_eq!(wrapped_height("hello", 0), 0);
    }

    #[test]
    fn test_truncate_text_shorter() {
        let actual = truncate_text("one\ntwo", 3);
        assert_eq!(actual, "one\ntwo");
    }

    #[test]
    fn test_truncate_text_longer() {
        let actual = truncate_text("one\ntwo\nthree\nfour", 3);
        assert_eq!(actual, "one\ntwo\n...");
    }

    #[test]
    fn test_truncate_text_single_row() {
        let actual = truncate_text("one\ntwo", 1);
        assert_eq!(actual, "...");
    }
}
