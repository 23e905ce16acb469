//! Calculator state machine - digit entry, operator chaining, evaluation
//!
//! The engine owns all numeric state and interprets one input token per
//! call. After every call the shell reads back [`Calculator::display`]
//! and [`Calculator::status`] and renders them verbatim. Arithmetic
//! failures never escape to the caller: they flip the machine into a
//! sticky `"Error"` display state that only clear (or fresh digit entry)
//! leaves.

use thiserror::Error;

/// Sentinel display text for the sticky error state.
const ERROR_TEXT: &str = "Error";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Divide by zero")]
    DivideByZero,
    #[error("Bad operator")]
    InvalidOperator,
    #[error("Result out of range")]
    NonFiniteResult,
}

/// The four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Parse a faceplate/keyboard symbol. Anything outside `+ - * /` is
    /// rejected so unknown tokens never reach the arithmetic.
    pub fn from_symbol(c: char) -> Result<Self, CalcError> {
        match c {
            '+' => Ok(Op::Add),
            '-' => Ok(Op::Subtract),
            '*' => Ok(Op::Multiply),
            '/' => Ok(Op::Divide),
            _ => Err(CalcError::InvalidOperator),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Subtract => '-',
            Op::Multiply => '*',
            Op::Divide => '/',
        }
    }

    fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        let r = match self {
            Op::Add => a + b,
            Op::Subtract => a - b,
            Op::Multiply => a * b,
            Op::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                a / b
            }
        };
        if r.is_finite() {
            Ok(r)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }
}

/// Calculator state: accumulator, pending operator, and the two strings
/// the shell renders. Mutated in place for the life of the process.
pub struct Calculator {
    /// Left operand of the pending (or most recent) binary operation.
    accumulator: f64,
    /// Operator awaiting its second operand, if any.
    pending: Option<Op>,
    /// True when the next digit/dot starts a new number.
    fresh: bool,
    display: String,
    status: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            pending: None,
            fresh: true,
            display: "0".to_string(),
            status: "Ready".to_string(),
        }
    }

    /// The text currently shown, possibly the `"Error"` sentinel.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Short description of the last action.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            return;
        }
        if self.in_error_state() {
            self.clear();
        }
        if self.fresh {
            self.display = d.to_string();
            self.fresh = false;
        } else if self.display == "0" {
            // replace rather than append, so "05" never shows
            self.display = d.to_string();
        } else {
            self.display.push(d);
        }
        self.status.clear();
    }

    pub fn dot(&mut self) {
        if self.in_error_state() {
            self.clear();
        }
        if self.fresh {
            self.display = "0.".to_string();
            self.fresh = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn clear(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.fresh = true;
        self.display = "0".to_string();
        self.status = "Cleared".to_string();
    }

    pub fn backspace(&mut self) {
        if self.fresh {
            return;
        }
        if self.in_error_state() {
            self.clear();
            return;
        }
        if self.display.len() <= 1 || (self.display.len() == 2 && self.display.starts_with('-')) {
            self.display = "0".to_string();
            self.fresh = true;
        } else {
            self.display.pop();
        }
    }

    /// Divide the shown value by 100. Leaves the pending operation and
    /// accumulator untouched.
    pub fn percent(&mut self) {
        let v = self.current_value() / 100.0;
        if !v.is_finite() {
            self.fail(CalcError::NonFiniteResult);
            return;
        }
        self.display = format_value(v);
        self.fresh = true;
        self.status = "Percent".to_string();
    }

    pub fn operator(&mut self, op: Op) {
        let current = self.current_value();
        match self.pending {
            None => self.accumulator = current,
            Some(pending) if !self.fresh => {
                // a second operand was entered: resolve left-to-right
                match pending.apply(self.accumulator, current) {
                    Ok(r) => {
                        self.accumulator = r;
                        self.display = format_value(r);
                    }
                    Err(err) => {
                        self.fail(err);
                        return;
                    }
                }
            }
            // operator pressed again before a new operand: substitute it,
            // keeping the accumulator as-is
            Some(_) => {}
        }
        self.pending = Some(op);
        self.fresh = true;
        self.status = format!("Op: {}", op.symbol());
    }

    pub fn equals(&mut self) {
        let op = match self.pending {
            Some(op) => op,
            None => return,
        };
        let second = self.current_value();
        match op.apply(self.accumulator, second) {
            Ok(r) => {
                self.status = format!(
                    "{} {} {} =",
                    format_value(self.accumulator),
                    op.symbol(),
                    format_value(second)
                );
                self.display = format_value(r);
                self.accumulator = r;
                self.pending = None;
                self.fresh = true;
            }
            Err(err) => self.fail(err),
        }
    }

    fn in_error_state(&self) -> bool {
        self.display == ERROR_TEXT
    }

    /// Parse the shown text as the current operand. The error sentinel
    /// (and anything else unparseable) reads as zero.
    fn current_value(&self) -> f64 {
        if self.in_error_state() {
            return 0.0;
        }
        self.display.parse().unwrap_or(0.0)
    }

    /// The sticky error transition: show the sentinel, report the cause,
    /// and drop all numeric state (an implicit clear).
    fn fail(&mut self, err: CalcError) {
        tracing::warn!(%err, "calculation failed");
        self.display = ERROR_TEXT.to_string();
        self.status = err.to_string();
        self.accumulator = 0.0;
        self.pending = None;
        self.fresh = true;
    }
}

/// Render a computed value for the display: standard decimal text with
/// any trailing ".0" dropped. Non-finite values fall back to the error
/// sentinel; callers route those through the error transition first.
fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return ERROR_TEXT.to_string();
    }
    let s = v.to_string();
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(calc: &mut Calculator, text: &str) {
        for c in text.chars() {
            calc.digit(c);
        }
    }

    #[test]
    fn starts_at_zero_and_ready() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.status(), "Ready");
    }

    #[test]
    fn digit_entry_suppresses_leading_zeros() {
        let mut calc = Calculator::new();
        digits(&mut calc, "05");
        assert_eq!(calc.display(), "5");
        digits(&mut calc, "07");
        assert_eq!(calc.display(), "507");
    }

    #[test]
    fn digit_entry_clears_status() {
        let mut calc = Calculator::new();
        calc.digit('3');
        assert_eq!(calc.status(), "");
    }

    #[test]
    fn dot_is_idempotent_per_number() {
        let mut calc = Calculator::new();
        calc.digit('3');
        calc.dot();
        calc.dot();
        calc.digit('4');
        assert_eq!(calc.display(), "3.4");
    }

    #[test]
    fn dot_on_fresh_entry_starts_zero_point() {
        let mut calc = Calculator::new();
        calc.dot();
        calc.digit('5');
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn addition_with_summary_status() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Add);
        assert_eq!(calc.status(), "Op: +");
        calc.digit('3');
        calc.equals();
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.status(), "2 + 3 =");
    }

    #[test]
    fn chaining_resolves_left_to_right() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Add);
        calc.digit('3');
        calc.operator(Op::Multiply);
        // the pending addition resolved when '*' was pressed
        assert_eq!(calc.display(), "5");
        calc.digit('4');
        calc.equals();
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn operator_substitution_keeps_accumulator() {
        let mut calc = Calculator::new();
        calc.digit('5');
        calc.operator(Op::Add);
        calc.operator(Op::Subtract);
        assert_eq!(calc.status(), "Op: -");
        calc.digit('2');
        calc.equals();
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn equals_right_after_operator_reuses_shown_value() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Add);
        calc.equals();
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.status(), "2 + 2 =");
    }

    #[test]
    fn equals_without_pending_operator_is_a_noop() {
        let mut calc = Calculator::new();
        digits(&mut calc, "42");
        calc.equals();
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn repeated_equals_does_not_recompute() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Add);
        calc.digit('3');
        calc.equals();
        calc.equals();
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn division_formats_without_trailing_zero() {
        let mut calc = Calculator::new();
        calc.digit('8');
        calc.operator(Op::Divide);
        calc.digit('2');
        calc.equals();
        assert_eq!(calc.display(), "4");

        calc.digit('1');
        calc.operator(Op::Divide);
        calc.digit('2');
        calc.equals();
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn divide_by_zero_enters_error_state() {
        let mut calc = Calculator::new();
        calc.digit('8');
        calc.operator(Op::Divide);
        calc.digit('0');
        calc.equals();
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.status(), "Divide by zero");
    }

    #[test]
    fn digit_after_error_clears_implicitly() {
        let mut calc = Calculator::new();
        calc.digit('8');
        calc.operator(Op::Divide);
        calc.digit('0');
        calc.equals();
        calc.digit('1');
        assert_eq!(calc.display(), "1");
        // the implicit clear dropped the failed operation
        calc.equals();
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn dot_after_error_clears_implicitly() {
        let mut calc = Calculator::new();
        calc.digit('8');
        calc.operator(Op::Divide);
        calc.digit('0');
        calc.equals();
        calc.dot();
        assert_eq!(calc.display(), "0.");
    }

    #[test]
    fn operator_after_error_starts_from_zero() {
        let mut calc = Calculator::new();
        calc.digit('8');
        calc.operator(Op::Divide);
        calc.digit('0');
        calc.equals();
        calc.operator(Op::Add);
        calc.digit('5');
        // the digit's implicit clear wiped the pending '+', so '=' no-ops
        calc.equals();
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn percent_divides_by_one_hundred() {
        let mut calc = Calculator::new();
        digits(&mut calc, "50");
        calc.percent();
        assert_eq!(calc.display(), "0.5");
        assert_eq!(calc.status(), "Percent");
        // percent marks the entry fresh: a digit replaces, not appends
        calc.digit('7');
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn percent_leaves_pending_operation_alone() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Add);
        digits(&mut calc, "50");
        calc.percent();
        assert_eq!(calc.display(), "0.5");
        calc.equals();
        assert_eq!(calc.display(), "2.5");
    }

    #[test]
    fn backspace_pops_the_last_character() {
        let mut calc = Calculator::new();
        digits(&mut calc, "123");
        calc.backspace();
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn backspace_on_last_digit_resets_to_zero() {
        let mut calc = Calculator::new();
        calc.digit('7');
        calc.backspace();
        assert_eq!(calc.display(), "0");
        // the zero is a real operand for a following operation
        calc.operator(Op::Add);
        calc.digit('5');
        calc.equals();
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn backspace_is_a_noop_on_fresh_entry() {
        let mut calc = Calculator::new();
        calc.backspace();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.status(), "Ready");

        // also after an operator: the shown first operand survives
        calc.digit('5');
        calc.operator(Op::Add);
        calc.backspace();
        assert_eq!(calc.display(), "5");
        calc.digit('2');
        calc.equals();
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn clear_resets_everything() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Add);
        calc.digit('3');
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.status(), "Cleared");
        // no pending operation survives a clear
        calc.digit('9');
        calc.equals();
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn unknown_operator_symbols_are_rejected() {
        assert_eq!(Op::from_symbol('^'), Err(CalcError::InvalidOperator));
        assert_eq!(Op::from_symbol('x'), Err(CalcError::InvalidOperator));
        assert_eq!(Op::from_symbol('+'), Ok(Op::Add));
        assert_eq!(Op::from_symbol('/'), Ok(Op::Divide));
    }

    #[test]
    fn non_digit_input_is_ignored() {
        let mut calc = Calculator::new();
        calc.digit('x');
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.status(), "Ready");
    }

    #[test]
    fn overflow_to_non_finite_is_an_error() {
        let mut calc = Calculator::new();
        digits(&mut calc, &"9".repeat(200));
        calc.operator(Op::Multiply);
        digits(&mut calc, &"9".repeat(200));
        calc.equals();
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.status(), "Result out of range");
    }

    #[test]
    fn negative_results_format_plainly() {
        let mut calc = Calculator::new();
        calc.digit('2');
        calc.operator(Op::Subtract);
        calc.digit('5');
        calc.equals();
        assert_eq!(calc.display(), "-3");
    }
}
