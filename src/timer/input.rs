//! Hour/minute text entry normalisation.
//!
//! Every keystroke produces the complete new text of one field. The text is
//! cleaned up here and never rejected: non-digits are dropped, values that
//! cannot become valid are padded or clamped.

use super::TimeField;

const MAX_DIGITS: usize = 2;

impl TimeField {
    /// Largest value the field accepts.
    pub fn max_value(self) -> u32 {
        match self {
            TimeField::Hours => 23,
            TimeField::Minutes => 59,
        }
    }

    /// Largest first digit that can still be followed by a second one.
    fn max_leading_digit(self) -> u32 {
        match self {
            TimeField::Hours => 2,
            TimeField::Minutes => 5,
        }
    }

    pub fn other(self) -> Self {
        match self {
            TimeField::Hours => TimeField::Minutes,
            TimeField::Minutes => TimeField::Hours,
        }
    }
}

/// Parsed view of the two fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validation {
    pub hours: u32,
    pub minutes: u32,
    pub valid: bool,
}

/// Parses both fields; `valid` only when both are non-empty and in range.
pub fn validate(hours_text: &str, minutes_text: &str) -> Validation {
    let hours = parse_field(hours_text, TimeField::Hours);
    let minutes = parse_field(minutes_text, TimeField::Minutes);
    match (hours, minutes) {
        (Some(hours), Some(minutes)) => Validation {
            hours,
            minutes,
            valid: true,
        },
        _ => Validation {
            hours: hours.unwrap_or(0),
            minutes: minutes.unwrap_or(0),
            valid: false,
        },
    }
}

fn parse_field(text: &str, field: TimeField) -> Option<u32> {
    if text.is_empty() || text.len() > MAX_DIGITS || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>()
        .ok()
        .filter(|value| *value <= field.max_value())
}

/// Normalises the raw text of one field.
pub fn normalize_field(raw: &str, field: TimeField) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        1 if raw == digits => {
            let digit = digits.parse::<u32>().unwrap_or(0);
            if digit > field.max_leading_digit() {
                format!("0{digit}")
            } else {
                digits
            }
        }
        2 => {
            let value = digits.parse::<u32>().unwrap_or(0);
            if value > field.max_value() {
                format!("{:02}", field.max_value())
            } else {
                digits
            }
        }
        _ => digits,
    }
}

/// The two text fields as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeInput {
    pub hours: String,
    pub minutes: String,
}

impl TimeInput {
    pub fn field(&self, field: TimeField) -> &str {
        match field {
            TimeField::Hours => &self.hours,
            TimeField::Minutes => &self.minutes,
        }
    }

    /// Replaces one field with the normalised form of `raw`.
    pub fn apply(&mut self, field: TimeField, raw: &str) {
        let value = normalize_field(raw, field);
        match field {
            TimeField::Hours => {
                if !value.is_empty() && self.minutes.is_empty() {
                    self.minutes = "00".to_string();
                }
                self.hours = value;
            }
            TimeField::Minutes => self.minutes = value,
        }
    }

    pub fn validate(&self) -> Validation {
        validate(&self.hours, &self.minutes)
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() && self.minutes.is_empty()
    }

    /// Parses "HH:MM" (or "H:M", "HHMM") text through the same rules as typing.
    ///
    /// Anything else is rejected rather than clamped, so "930" is not 23:00.
    pub fn from_clock_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let (hours, minutes) = match trimmed.split_once(':') {
            Some(parts) => parts,
            None if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
                trimmed.split_at(2)
            }
            None => return None,
        };
        let mut input = Self::default();
        input.apply(TimeField::Hours, hours);
        input.apply(TimeField::Minutes, minutes);
        Some(input)
    }
}
