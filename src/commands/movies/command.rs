//! Classifies chat messages into movie log commands.

/// A recognized movie log command and its raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Add(&'a str),
    List,
    Search(&'a str),
    Delete(&'a str),
}

impl<'a> Command<'a> {
    /// Checks prefixes in priority order; the first match wins.
    ///
    /// The argument is everything after a fixed width (5 bytes for `/add`,
    /// 8 for `/search` and `/delete`), whatever characters sit in between.
    pub fn parse(text: &'a str) -> Option<Self> {
        if text.starts_with("/add") {
            Some(Command::Add(argument(text, 5)))
        } else if text.starts_with("/list") {
            Some(Command::List)
        } else if text.starts_with("/search") {
            Some(Command::Search(argument(text, 8)))
        } else if text.starts_with("/delete") {
            Some(Command::Delete(argument(text, 8)))
        } else {
            None
        }
    }

    /// The literal command word.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => "/add",
            Command::List => "/list",
            Command::Search(_) => "/search",
            Command::Delete(_) => "/delete",
        }
    }

    /// The prompt sent to the normalization gateway: the command word, a
    /// space and the raw argument. `/list` never uses one.
    pub fn prompt(&self) -> String {
        match self {
            Command::Add(arg) | Command::Search(arg) | Command::Delete(arg) => {
                format!("{} {}", self.word(), arg)
            }
            Command::List => self.word().to_string(),
        }
    }
}

/// Slices off the first `width` bytes, moving forward to a char boundary.
fn argument(text: &str, width: usize) -> &str {
    let mut start = width.min(text.len());
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("/add Inception", Some(Command::Add("Inception")) ; "add")]
    #[test_case("/list", Some(Command::List) ; "list")]
    #[test_case("/list everything please", Some(Command::List) ; "list ignores trailing text")]
    #[test_case("/search pixar", Some(Command::Search("pixar")) ; "search")]
    #[test_case("/delete Up (2009)", Some(Command::Delete("Up (2009)")) ; "delete")]
    #[test_case("/add", Some(Command::Add("")) ; "bare add has empty argument")]
    #[test_case("/search", Some(Command::Search("")) ; "bare search has empty argument")]
    #[test_case("/addition", Some(Command::Add("tion")) ; "prefix only match keeps fixed slice")]
    #[test_case("hello /add Up", None ; "prefix must start the message")]
    #[test_case("/ADD Up", None ; "prefix is case sensitive")]
    #[test_case("/help", None ; "unknown command")]
    #[test_case("", None ; "empty message")]
    fn test_parse(text: &str, expected: Option<Command<'_>>) {
        assert_eq!(Command::parse(text), expected);
    }

    #[test]
    fn test_argument_is_not_validated() {
        assert_eq!(Command::parse("/add   "), Some(Command::Add("  ")));
    }

    #[test]
    fn test_argument_respects_char_boundaries() {
        // 'é' spans bytes 4..6 so the slice starts after it.
        assert_eq!(Command::parse("/addé Amélie"), Some(Command::Add(" Amélie")));
    }

    #[test]
    fn test_prompt_includes_command_word() {
        assert_eq!(
            Command::Search("the one with the balloons").prompt(),
            "/search the one with the balloons"
        );
        assert_eq!(Command::Add("").prompt(), "/add ");
    }
}
