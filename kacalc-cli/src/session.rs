use kacalc::interpreter::{self, OPERATOR_SYMBOLS};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing entered yet, or the session was cleared.
    Idle,
    /// Input has been entered but not evaluated.
    Editing,
    /// The expression holds the last result.
    ShowingResult,
    /// The last evaluation failed.
    ShowingError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Result(String),
    Error(String),
    Empty,
}

/// The running expression of an interactive calculator, along with what it currently shows.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    expression: String,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            state: SessionState::Idle,
            expression: String::new(),
        }
    }
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Adds a fragment of input to the expression.
    ///
    /// A fragment entered while a result is shown replaces it, unless the fragment starts
    /// with an operator, in which case the result becomes the left operand.
    pub fn input(&mut self, fragment: &str) {
        self.expression = match self.state {
            SessionState::Editing => format!("{}{}", self.expression, fragment),
            _ => self.pending(fragment),
        };
        self.state = SessionState::Editing;
    }

    /// Evaluates the current expression.
    pub fn equals(&mut self) -> Outcome {
        let result = interpreter::evaluate(&self.expression);
        let outcome = if result.is_empty() {
            self.state = SessionState::Idle;
            Outcome::Empty
        } else if result.starts_with(interpreter::ERROR_PREFIX) {
            self.state = SessionState::ShowingError;
            self.expression.clear();
            Outcome::Error(result)
        } else {
            self.state = SessionState::ShowingResult;
            self.expression = result.clone();
            Outcome::Result(result)
        };
        debug!("Session is now {:?} with {:?}", self.state, self.expression);
        outcome
    }

    /// Evaluates a whole line of input.
    ///
    /// An empty line re-shows the last result, if there is one.
    pub fn submit(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return match self.state {
                SessionState::ShowingResult => Outcome::Result(self.expression.clone()),
                _ => {
                    self.clear();
                    Outcome::Empty
                }
            };
        }
        self.input(line);
        self.equals()
    }

    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.expression.clear();
    }

    /// The expression that submitting the given line would evaluate.
    pub fn pending(&self, line: &str) -> String {
        let line = line.trim();
        if self.state == SessionState::ShowingResult && starts_with_operator(line) {
            format!("{} {}", self.result_as_operand(), line)
        } else {
            line.to_string()
        }
    }

    /// Rewrites the shown result so it can be read back as a single operand.
    fn result_as_operand(&self) -> String {
        match self.expression.parse::<f64>() {
            // Scientific notation such as 1.5e-7 would not lex as one number.
            Ok(value) if value < 0.0 => format!("({})", value),
            Ok(value) => value.to_string(),
            Err(_) => format!("({})", self.expression),
        }
    }
}

fn starts_with_operator(line: &str) -> bool {
    OPERATOR_SYMBOLS.iter().any(|symbol| line.starts_with(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn result(text: &str) -> Outcome {
        Outcome::Result(text.to_string())
    }

    #[test]
    fn new_session_is_idle() {
        let session = Session::default();

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn successful_submit_shows_result() {
        let mut session = Session::default();

        assert_eq!(session.submit("2**3"), result("8"));
        assert_eq!(session.state(), SessionState::ShowingResult);
        assert_eq!(session.expression(), "8");
    }

    #[parameterized(
    first = { "2**3", "2**3", "2 - 5", "0.00000015", "1/4" },
    second = { "* 2", "5", "** 2", "* 2", "^ -1" },
    expected = { "16", "5", "9", "3e-7", "4" }
    )]
    fn line_after_result_continues_only_with_operator(first: &str, second: &str, expected: &str) {
        let mut session = Session::default();
        session.submit(first);

        assert_eq!(session.submit(second), result(expected));
    }

    #[test]
    fn failed_submit_shows_error_and_clears_expression() {
        let mut session = Session::default();
        session.submit("4");

        let outcome = session.submit("10/0");

        assert_eq!(
            outcome,
            Outcome::Error("Error: arithmetic error: division by zero".to_string())
        );
        assert_eq!(session.state(), SessionState::ShowingError);
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn operator_after_error_starts_a_new_expression() {
        let mut session = Session::default();
        session.submit("sqrt(-1)");

        assert_eq!(session.pending("+ 1"), "+ 1");
        assert_eq!(session.submit("+ 1"), result("1"));
    }

    #[test]
    fn empty_line_re_shows_last_result() {
        let mut session = Session::default();
        session.submit("6 * 7");

        assert_eq!(session.submit("   "), result("42"));
        assert_eq!(session.state(), SessionState::ShowingResult);
    }

    #[test]
    fn empty_line_without_result_is_idle() {
        let mut session = Session::default();
        session.submit("what");

        assert_eq!(session.submit(""), Outcome::Empty);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn fragments_are_appended_while_editing() {
        let mut session = Session::default();
        session.input("5");
        session.input("(3+1)");

        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.expression(), "5(3+1)");
        assert_eq!(session.equals(), result("20"));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut session = Session::default();
        session.submit("1 + 1");

        session.clear();

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.pending("* 3"), "* 3");
    }
}
