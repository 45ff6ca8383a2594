//! Quote-aware splitting of a raw command line into argument tokens.

use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Normal,
    InSingleQuote,
    InDoubleQuote,
}

/// Splits a command line into tokens the way a shell would for simple input.
///
/// Spaces outside quotes separate tokens. Single and double quotes group
/// characters, including spaces, into one token and are themselves dropped.
/// A quote of one style has no meaning inside a span of the other style.
///
/// There is no escape character, and an unbalanced quote silently swallows
/// the rest of the input. The final accumulator is always emitted, so an
/// empty input (or one ending in a space) produces a trailing empty token.
///
/// # Examples
///
/// ```
/// use shellfront::cli::tokenize;
///
/// assert_eq!(tokenize(r#"a "b c" d"#), vec!["a", "b c", "d"]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
pub fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Normal;

    for ch in command.chars() {
        match (state, ch) {
            (QuoteState::Normal, ' ') => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            (QuoteState::Normal, '"') => state = QuoteState::InDoubleQuote,
            (QuoteState::Normal, '\'') => state = QuoteState::InSingleQuote,
            (QuoteState::InDoubleQuote, '"') | (QuoteState::InSingleQuote, '\'') => {
                state = QuoteState::Normal;
            }
            _ => current.push(ch),
        }
    }

    if state != QuoteState::Normal {
        trace!(?state, "unterminated quote absorbed remaining input");
    }

    tokens.push(current);
    debug!(tokens = tokens.len(), "tokenized command line");
    tokens
}
