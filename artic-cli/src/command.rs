//! Line commands typed at the table prompt.

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    /// Jump to a 1-based page.
    Goto(u32),
    /// Select the first N rows; the raw text is validated by the session.
    Select(String),
    /// Toggle a 1-based row of the current page.
    Toggle(usize),
    Clear,
    Reload,
    Help,
    Quit,
    /// Blank line, redraws the table.
    Redraw,
    Unknown(String),
}

impl Command {
    /// Parses a prompt line.
    ///
    /// Commands are case-insensitive and have one-letter short forms.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Self::Redraw,
            "n" | "next" => Self::Next,
            "p" | "prev" => Self::Prev,
            "g" | "page" | "goto" => match arg.parse() {
                Ok(page) if page > 0 => Self::Goto(page),
                _ => Self::Unknown(line.to_string()),
            },
            "s" | "select" => Self::Select(arg.to_string()),
            "t" | "toggle" => match arg.parse() {
                Ok(row) if row > 0 => Self::Toggle(row),
                _ => Self::Unknown(line.to_string()),
            },
            "c" | "clear" => Self::Clear,
            "r" | "reload" => Self::Reload,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  n, next          next page
  p, prev          previous page
  g, page N        go to page N
  s, select N      select the first N rows, continuing onto later pages
  t, toggle R      toggle row R of this page
  c, clear         clear the selection
  r, reload        fetch this page again
  h, help          show this help
  q, quit          exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        assert_eq!(Command::parse("n"), Command::Next);
        assert_eq!(Command::parse("  PREV "), Command::Prev);
        assert_eq!(Command::parse("g 42"), Command::Goto(42));
        assert_eq!(Command::parse("page   7"), Command::Goto(7));
    }

    #[test]
    fn test_select_keeps_raw_text() {
        assert_eq!(Command::parse("s 20"), Command::Select("20".into()));
        assert_eq!(Command::parse("select"), Command::Select(String::new()));
        assert_eq!(Command::parse("select abc"), Command::Select("abc".into()));
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(Command::parse("g 0"), Command::Unknown("g 0".into()));
        assert_eq!(Command::parse("t x"), Command::Unknown("t x".into()));
        assert_eq!(Command::parse("frobnicate"), Command::Unknown("frobnicate".into()));
    }

    #[test]
    fn test_misc() {
        assert_eq!(Command::parse(""), Command::Redraw);
        assert_eq!(Command::parse("t 3"), Command::Toggle(3));
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
    }
}
