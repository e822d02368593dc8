//! Arithmetic behind the keypad.
//!
//! [`Calculator`] consumes the `value` of activated keys (digits, `.`, the
//! four operators, `=`, `C`, `±`, `%`) and keeps the text shown on the
//! display. Operators chain left to right; repeated `=` repeats the last
//! operation.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Longest entry accepted from the keypad, sign and point included.
pub const MAX_ENTRY_LEN: usize = 15;
const MAX_FRACTION_DIGITS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result out of range")]
    Overflow,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unsupported key '{0}'")]
    UnsupportedInput(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_value(value: &str) -> Option<Operator> {
        match value {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide if rhs == 0.0 => return Err(CalcError::DivisionByZero),
            Operator::Divide => lhs / rhs,
        };
        if result.is_finite() { Ok(result) } else { Err(CalcError::Overflow) }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    entry: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    last: Option<(Operator, f64)>,
    /// The next digit starts a new entry instead of extending this one.
    fresh_entry: bool,
    /// The entry holds an operand given since the last operator or `=`.
    entered: bool,
    error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending: None,
            last: None,
            fresh_entry: true,
            entered: false,
            error: None,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the main display line.
    pub fn display(&self) -> &str {
        if self.error.is_some() { "Error" } else { &self.entry }
    }

    /// Pending left operand and operator, e.g. `"12 +"`.
    pub fn expression(&self) -> String {
        match (self.accumulator, self.pending) {
            (Some(lhs), Some(op)) => format!("{} {}", format_number(lhs), op),
            _ => String::new(),
        }
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Applies one keypad value. Errors are also latched for the display
    /// until the next key clears them.
    pub fn input(&mut self, value: &str) -> Result<(), CalcError> {
        if self.error.is_some() {
            self.clear();
        }
        let result = self.apply_input(value);
        if let Err(error) = &result {
            debug!(value, %error, "calculator rejected input");
            if !matches!(error, CalcError::UnsupportedInput(_)) {
                self.error = Some(error.clone());
            }
        }
        result
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn apply_input(&mut self, value: &str) -> Result<(), CalcError> {
        match value {
            "C" => {
                self.clear();
                Ok(())
            }
            "=" => self.equals(),
            "±" => {
                self.negate();
                Ok(())
            }
            "%" => self.percent(),
            "." => {
                self.push_point();
                Ok(())
            }
            digit if digit.len() == 1 && digit.chars().all(|ch| ch.is_ascii_digit()) => {
                self.push_digit(digit);
                Ok(())
            }
            other => match Operator::from_value(other) {
                Some(op) => self.operator(op),
                None => Err(CalcError::UnsupportedInput(other.to_string())),
            },
        }
    }

    fn push_digit(&mut self, digit: &str) {
        self.start_entry();
        if self.entry.len() >= MAX_ENTRY_LEN {
            return;
        }
        match self.entry.as_str() {
            "0" => self.entry = digit.to_string(),
            "-0" => self.entry = format!("-{digit}"),
            _ => self.entry.push_str(digit),
        }
    }

    fn push_point(&mut self) {
        self.start_entry();
        if !self.entry.contains('.') && self.entry.len() < MAX_ENTRY_LEN {
            self.entry.push('.');
        }
    }

    fn start_entry(&mut self) {
        if self.fresh_entry {
            self.entry = "0".to_string();
            self.fresh_entry = false;
        }
        self.entered = true;
    }

    /// Right after an operator the sign applies to the operand about to be
    /// typed; otherwise the shown entry flips.
    fn negate(&mut self) {
        if self.pending.is_some() && !self.entered {
            self.entry = "-0".to_string();
            self.fresh_entry = false;
            self.entered = true;
            return;
        }
        if let Some(rest) = self.entry.strip_prefix('-') {
            self.entry = rest.to_string();
        } else if self.entry != "0" {
            self.entry.insert(0, '-');
        }
    }

    fn percent(&mut self) -> Result<(), CalcError> {
        let value = self.entry_value()? / 100.0;
        self.entry = format_number(value);
        self.fresh_entry = true;
        self.entered = true;
        Ok(())
    }

    fn operator(&mut self, op: Operator) -> Result<(), CalcError> {
        match (self.accumulator, self.pending) {
            (Some(lhs), Some(pending)) if self.entered => {
                let result = pending.apply(lhs, self.entry_value()?)?;
                self.accumulator = Some(result);
                self.entry = format_number(result);
            }
            (Some(_), Some(_)) => {}
            _ => self.accumulator = Some(self.entry_value()?),
        }
        self.pending = Some(op);
        self.last = None;
        self.fresh_entry = true;
        self.entered = false;
        Ok(())
    }

    fn equals(&mut self) -> Result<(), CalcError> {
        let (lhs, op, rhs) = match (self.accumulator, self.pending, self.last) {
            (Some(lhs), Some(op), _) => {
                let rhs = if self.entered { self.entry_value()? } else { lhs };
                (lhs, op, rhs)
            }
            (_, None, Some((op, rhs))) => (self.entry_value()?, op, rhs),
            _ => return Ok(()),
        };
        let result = op.apply(lhs, rhs)?;
        self.entry = format_number(result);
        self.accumulator = None;
        self.pending = None;
        self.last = Some((op, rhs));
        self.fresh_entry = true;
        self.entered = false;
        Ok(())
    }

    fn entry_value(&self) -> Result<f64, CalcError> {
        self.entry
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(self.entry.clone()))
    }
}

/// Formats a result without trailing zeros, switching to exponent notation
/// for magnitudes the display cannot hold.
pub fn format_number(value: f64) -> String {
    if value != 0.0 && !(1e-9..1e15).contains(&value.abs()) {
        return format!("{value:e}");
    }
    let fixed = format!("{value:.MAX_FRACTION_DIGITS$}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
