//! Interactive input: one line of stdin is one user action.

/// What a line typed by the user asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Put the line into the order-id field and search. Blank lines are
    /// passed through; the controller ignores them.
    Search(String),
    Clear,
    Quit,
}

impl InputCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":clear" => InputCommand::Clear,
            ":quit" | ":q" => InputCommand::Quit,
            _ => InputCommand::Search(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(InputCommand::parse(":clear"), InputCommand::Clear);
        assert_eq!(InputCommand::parse("  :quit "), InputCommand::Quit);
        assert_eq!(InputCommand::parse(":q"), InputCommand::Quit);
    }

    #[test]
    fn test_parse_search_keeps_text() {
        assert_eq!(
            InputCommand::parse("b563feb7b2b84b6test\r\n"),
            InputCommand::Search("b563feb7b2b84b6test".to_string())
        );
        assert_eq!(InputCommand::parse("   "), InputCommand::Search("   ".to_string()));
    }
}
