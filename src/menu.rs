//! Menu choices and line-based input parsing.

/// One option selected from the action menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: play (dequeue) the front piece.
    Play,
    /// `2`: generate and insert a new piece.
    Insert,
    /// `0`: leave the game.
    Quit,
    /// Anything else, including lines that are not integers.
    Invalid,
}

impl MenuChoice {
    /// Parse one input line. The whole line is consumed, so trailing garbage
    /// after a bad entry never leaks into the next prompt.
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<i64>() {
            Ok(1) => MenuChoice::Play,
            Ok(2) => MenuChoice::Insert,
            Ok(0) => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_actions() {
        assert_eq!(MenuChoice::parse("1\n"), MenuChoice::Play);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::Insert);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Quit);
        assert_eq!(MenuChoice::parse("+1\r\n"), MenuChoice::Play);
    }

    #[test]
    fn other_input_is_invalid() {
        for line in ["3", "-1", "", "abc", "1 2", "1x", "99999999999999999999"] {
            assert_eq!(MenuChoice::parse(line), MenuChoice::Invalid, "line={line:?}");
        }
    }
}
