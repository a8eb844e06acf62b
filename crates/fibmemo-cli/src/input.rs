//! Classification of one line of user input.

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// "quit" in any letter case.
    Quit,
    /// An integer index, not yet range-checked.
    Number(i64),
    /// Anything else.
    Invalid,
}

/// Classify `line`, ignoring surrounding whitespace and the line terminator.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        Input::Quit
    } else if let Ok(n) = line.parse::<i64>() {
        Input::Number(n)
    } else {
        Input::Invalid
    }
}
