//! Menu selection parsing.

/// Selection named by one submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: reserved for joining a game; no action yet.
    JoinGame,
    /// `2`: reserved for checking matchmaking status; no action yet.
    CheckStatus,
    /// `3` or `exit` in any letter case.
    Exit,
    /// Anything else, including an empty line.
    Unrecognized,
}

impl MenuChoice {
    /// Classify a line after trimming surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed {
            "1" => MenuChoice::JoinGame,
            "2" => MenuChoice::CheckStatus,
            "3" => MenuChoice::Exit,
            _ if trimmed.to_lowercase() == "exit" => MenuChoice::Exit,
            _ => MenuChoice::Unrecognized,
        }
    }

    pub fn is_exit(self) -> bool {
        self == MenuChoice::Exit
    }
}
