use kacalc::interpreter::{is_operator_symbol, Constant};
use log::debug;

const SQUARE_ROOT: &str = "sqrt(";

/// Phrases that carry no meaning for the calculation.
const STOP_PHRASES: [&str; 6] = [
    "what is",
    "what's",
    "calculate",
    "compute",
    "can you tell me",
    "the",
];

const OPERATOR_PHRASES: [(&str, &str); 17] = [
    ("plus", "+"),
    ("add", "+"),
    ("minus", "-"),
    ("subtract", "-"),
    ("times", "*"),
    ("multiplied by", "*"),
    ("divided by", "/"),
    ("over", "/"),
    ("to the power of", "**"),
    ("power", "**"),
    ("square root of", SQUARE_ROOT),
    ("open bracket", "("),
    ("open parentheses", "("),
    ("close bracket", ")"),
    ("close parentheses", ")"),
    ("point", "."),
    ("dot", "."),
];

/// Spoken numbers, including words speech recognition commonly confuses with them.
const NUMBER_WORDS: [(&str, &str); 14] = [
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("to", "2"),
    ("too", "2"),
    ("three", "3"),
    ("four", "4"),
    ("for", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
];

/// Turns a spoken phrase into an expression, e.g. `"what is five times three"` into `"5 * 3"`.
///
/// Phrases are matched on whole words, longest phrase first, and words that mean nothing
/// to the calculator are dropped. An empty string means nothing was understood.
pub fn parse_command(command: &str) -> String {
    let lowered = command.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(clean_word)
        .filter(|word| !word.is_empty())
        .collect();

    let mut symbols: Vec<&str> = Vec::new();
    let mut position = 0;
    while position < words.len() {
        let remaining = &words[position..];
        match longest_phrase(remaining) {
            Some((length, replacement)) => {
                symbols.extend(replacement);
                position += length;
            }
            None => {
                let word = remaining[0];
                if is_literal(word) {
                    symbols.push(word);
                } else {
                    debug!("Dropping unrecognized word {:?}", word);
                }
                position += 1;
            }
        }
    }

    let unclosed_root = symbols
        .iter()
        .rposition(|symbol| *symbol == SQUARE_ROOT)
        .map_or(false, |start| !symbols[start..].contains(&")"));
    if unclosed_root {
        symbols.push(")");
    }

    let expression = join_symbols(&symbols);
    debug!("Parsed {:?} as {:?}", command, expression);
    expression
}

/// Finds the longest known phrase at the start of the given words.
///
/// returns: How many words the phrase spans, and the symbol it stands for, if any.
fn longest_phrase(words: &[&str]) -> Option<(usize, Option<&'static str>)> {
    let stop_phrases = STOP_PHRASES.iter().map(|phrase| (*phrase, None));
    let replacements = OPERATOR_PHRASES
        .iter()
        .chain(NUMBER_WORDS.iter())
        .map(|(phrase, symbol)| (*phrase, Some(*symbol)));

    stop_phrases
        .chain(replacements)
        .filter_map(|(phrase, symbol)| {
            let length = phrase.split_whitespace().count();
            let matches = words.len() >= length
                && phrase
                    .split_whitespace()
                    .zip(words.iter())
                    .all(|(expected, word)| expected == *word);
            matches.then(|| (length, symbol))
        })
        .max_by_key(|(length, _)| *length)
}

/// Strips punctuation such as a trailing `?` while keeping symbols the calculator understands.
fn clean_word(word: &str) -> &str {
    word.trim_matches(|c: char| !(c.is_alphanumeric() || c == '\'' || "+-*/^()".contains(c)))
}

/// Whether the word can be passed on to the calculator as it is.
fn is_literal(word: &str) -> bool {
    let is_number = word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.');
    is_number
        || is_operator_symbol(word)
        || word == "("
        || word == ")"
        || Constant::from_name(word).is_some()
}

/// Joins symbols with single spaces, gluing decimal points to the digits around them.
fn join_symbols(symbols: &[&str]) -> String {
    let mut expression = String::new();
    let mut previous: Option<&str> = None;
    for &symbol in symbols {
        let glued = symbol == "." || previous == Some(".");
        if previous.is_some() && !glued {
            expression.push(' ');
        }
        expression.push_str(symbol);
        previous = Some(symbol);
    }
    expression
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    command = {
    "What is five times three",
    "calculate ten divided by two",
    "what's two to the power of three",
    "can you tell me the square root of nine",
    "three point five plus one",
    "open bracket one plus two close bracket times four",
    "What is 12 plus 30?",
    "seven minus eight",
    "two pi",
    "nine over three",
    "eight multiplied by for",
    },
    expected = {
    "5 * 3",
    "10 / 2",
    "2 ** 3",
    "sqrt( 9 )",
    "3.5 + 1",
    "( 1 + 2 ) * 4",
    "12 + 30",
    "7 - 8",
    "2 pi",
    "9 / 3",
    "8 * 4",
    }
    )]
    fn spoken_phrase_is_parsed(command: &str, expected: &str) {
        assert_eq!(parse_command(command), expected);
    }

    #[test]
    fn words_are_matched_whole() {
        assert_eq!(parse_command("empower five"), "5");
        assert_eq!(parse_command("tone"), "");
        assert_eq!(parse_command("therefore one"), "1");
    }

    #[test]
    fn unclosed_square_root_is_closed() {
        assert_eq!(parse_command("square root of four plus five"), "sqrt( 4 + 5 )");
    }

    #[test]
    fn closed_square_root_is_left_alone() {
        assert_eq!(
            parse_command("square root of four close bracket plus five"),
            "sqrt( 4 ) + 5"
        );
    }

    #[parameterized(command = { "", "   ", "hello there", "what is" })]
    fn nothing_understood_gives_empty_string(command: &str) {
        assert_eq!(parse_command(command), "");
    }

    #[test]
    fn parsed_phrase_evaluates() {
        let expression = parse_command("what is the square root of nine close bracket times two");

        assert_eq!(kacalc::interpreter::evaluate(&expression), "6");
    }
}
