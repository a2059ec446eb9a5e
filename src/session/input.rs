use std::{
    collections::VecDeque,
    io::BufRead,
};

/// The outcome of checking one token of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Prompt<T> {
    /// The token is valid.
    Accept(T),

    /// The token is invalid, ask again.
    Retry(InputError),
}

/// Invalid user input.
///
/// The message is shown to the user before asking again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The answer to a yes or no question was something else
    #[error("Invalid input; Please type \"Y\" or \"N\" >")]
    NotYesNo,

    /// The square is not an integer
    #[error("Please type an integer >")]
    NotAnInteger,

    /// The square is out of range or already taken
    #[error("Invalid number; Please try again >")]
    UnavailableSquare(i64),
}

impl InputError {
    /// Whether the rest of the input line should be thrown away.
    pub fn discards_line(self) -> bool {
        matches!(self, Self::NotAnInteger)
    }
}

/// Check an answer to "Do you want to go first?".
pub fn parse_yes_no(token: &str) -> Prompt<bool> {
    if token.eq_ignore_ascii_case("y") {
        Prompt::Accept(true)
    } else if token.eq_ignore_ascii_case("n") {
        Prompt::Accept(false)
    } else {
        Prompt::Retry(InputError::NotYesNo)
    }
}

/// Check a square choice against the open squares.
pub fn parse_square(token: &str, options: &[u8]) -> Prompt<u8> {
    let square: i64 = match token.parse() {
        Ok(square) => square,
        Err(_error) => return Prompt::Retry(InputError::NotAnInteger),
    };

    match u8::try_from(square) {
        Ok(index) if options.contains(&index) => Prompt::Accept(index),
        _ => Prompt::Retry(InputError::UnavailableSquare(square)),
    }
}

/// Reads whitespace-separated tokens, a line at a time.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R> TokenReader<R>
where
    R: BufRead,
{
    /// Make a new [`TokenReader`].
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Get the next token.
    ///
    /// # Returns
    /// Returns `None` when the input is closed.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        while self.tokens.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(ToString::to_string));
        }

        Ok(self.tokens.pop_front())
    }

    /// Throw away the rest of the current line.
    pub fn discard_line(&mut self) {
        self.tokens.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn yes_no() {
        assert_eq!(parse_yes_no("y"), Prompt::Accept(true));
        assert_eq!(parse_yes_no("Y"), Prompt::Accept(true));
        assert_eq!(parse_yes_no("n"), Prompt::Accept(false));
        assert_eq!(parse_yes_no("N"), Prompt::Accept(false));
        assert_eq!(parse_yes_no("yes"), Prompt::Retry(InputError::NotYesNo));
        assert_eq!(parse_yes_no("1"), Prompt::Retry(InputError::NotYesNo));
    }

    #[test]
    fn squares() {
        let options = [0, 2, 8];
        assert_eq!(parse_square("0", &options), Prompt::Accept(0));
        assert_eq!(parse_square("+8", &options), Prompt::Accept(8));
        assert_eq!(
            parse_square("1", &options),
            Prompt::Retry(InputError::UnavailableSquare(1))
        );
        assert_eq!(
            parse_square("9", &options),
            Prompt::Retry(InputError::UnavailableSquare(9))
        );
        assert_eq!(
            parse_square("-1", &options),
            Prompt::Retry(InputError::UnavailableSquare(-1))
        );
        assert_eq!(
            parse_square("300", &options),
            Prompt::Retry(InputError::UnavailableSquare(300))
        );
        assert_eq!(
            parse_square("two", &options),
            Prompt::Retry(InputError::NotAnInteger)
        );
        assert_eq!(
            parse_square("2.0", &options),
            Prompt::Retry(InputError::NotAnInteger)
        );
    }

    #[test]
    fn only_non_integers_discard_the_line() {
        assert!(InputError::NotAnInteger.discards_line());
        assert!(!InputError::NotYesNo.discards_line());
        assert!(!InputError::UnavailableSquare(4).discards_line());
    }

    #[test]
    fn token_reader() {
        let mut reader = TokenReader::new("a b\n\n  c\t d \n".as_bytes());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("b"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("c"));

        reader.discard_line();
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn token_reader_last_line_without_newline() {
        let mut reader = TokenReader::new("4".as_bytes());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("4"));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
