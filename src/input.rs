//! Numeric input validation: digit-only strings inside an inclusive range.

use anyhow::Result;

/// Validation status for a raw input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Incomplete,
    Invalid(&'static str),
    Valid(u32),
}

/// Validate a raw line as a non-negative integer in `[min, max]`.
///
/// Only ASCII digit strings are accepted, so signs, whitespace inside the
/// number and decimal points are all rejected rather than coerced.
pub fn validate_number(raw: &str, min: u32, max: u32) -> Validation {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Validation::Incomplete;
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Validation::Invalid("digits only");
    }

    let Ok(value) = trimmed.parse::<u32>() else {
        return Validation::Invalid("number too large");
    };

    if value < min || value > max {
        return Validation::Invalid("out of range");
    }

    Validation::Valid(value)
}

/// Prompt text for a plain range-bounded number.
pub fn prompt_text(min: u32, max: u32) -> String {
    format!("Enter a number between {} and {}", min, max)
}

/// Prompt text for a guess, showing the current attempt index and budget.
/// Identical contract to [`prompt_text`]; only the wording differs.
pub fn guess_prompt_text(min: u32, max: u32, attempt: u32, budget: u32) -> String {
    format!(
        "The secret is between {} and {} (attempt {} of {})",
        min, max, attempt, budget
    )
}

/// Normalize a yes/no answer to its lowercase token, rejecting anything else.
pub fn normalize_yes_no(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "yes" => Some("yes"),
        "no" => Some("no"),
        _ => None,
    }
}

/// Retry-until-valid driver over an arbitrary line source.
///
/// Interactive callers leave `max_retries` unset and keep the unbounded
/// reprompt contract; automated callers set a bound and get a distinct
/// error when it is exhausted.
pub struct NumberPrompt {
    min: u32,
    max: u32,
    max_retries: Option<u32>,
}

impl NumberPrompt {
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            max_retries: None,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Consume lines until one validates; invalid lines count against the
    /// retry budget when one is set.
    pub fn read_from<I>(&self, lines: I) -> Result<u32>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut rejected = 0u32;

        for line in lines {
            match validate_number(line.as_ref(), self.min, self.max) {
                Validation::Valid(value) => return Ok(value),
                Validation::Incomplete | Validation::Invalid(_) => {
                    rejected += 1;
                    if let Some(budget) = self.max_retries {
                        if rejected > budget {
                            anyhow::bail!("retries exhausted after {} invalid inputs", rejected);
                        }
                    }
                }
            }
        }

        anyhow::bail!("input source closed before a valid number was supplied")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_in_range() {
        assert_eq!(validate_number("7", 1, 100), Validation::Valid(7));
        assert_eq!(validate_number("1", 1, 100), Validation::Valid(1));
        assert_eq!(validate_number("100", 1, 100), Validation::Valid(100));
        assert_eq!(validate_number(" 42 ", 1, 100), Validation::Valid(42));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            validate_number("0", 1, 100),
            Validation::Invalid("out of range")
        );
        assert_eq!(
            validate_number("101", 1, 100),
            Validation::Invalid("out of range")
        );
    }

    #[test]
    fn test_validate_rejects_non_digits() {
        for raw in ["abc", "-5", "+5", "3.5", "1e3", "4 2"] {
            assert_eq!(
                validate_number(raw, 1, 100),
                Validation::Invalid("digits only"),
                "raw = {:?}",
                raw
            );
        }
        assert_eq!(validate_number("", 1, 100), Validation::Incomplete);
        assert_eq!(validate_number("   ", 1, 100), Validation::Incomplete);
    }

    #[test]
    fn test_validated_value_always_in_range() {
        for raw in ["0", "1", "50", "99", "100", "101", "250", "junk"] {
            if let Validation::Valid(n) = validate_number(raw, 10, 90) {
                assert!((10..=90).contains(&n));
            }
        }
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let prompt = NumberPrompt::new(1, 10);
        let value = prompt.read_from(["nope", "99", "", "4"]).unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn test_prompt_retry_budget_exhaustion() {
        let prompt = NumberPrompt::new(1, 10).with_max_retries(2);
        let err = prompt.read_from(["a", "b", "c", "5"]).unwrap_err();
        assert!(err.to_string().contains("retries exhausted"));
    }

    #[test]
    fn test_prompt_closed_source() {
        let prompt = NumberPrompt::new(1, 10);
        assert!(prompt.read_from(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_yes_no_normalization() {
        assert_eq!(normalize_yes_no("YES"), Some("yes"));
        assert_eq!(normalize_yes_no("No"), Some("no"));
        assert_eq!(normalize_yes_no(" yes "), Some("yes"));
        assert_eq!(normalize_yes_no("si"), None);
        assert_eq!(normalize_yes_no(""), None);
    }

    #[test]
    fn test_guess_prompt_mentions_attempt() {
        let text = guess_prompt_text(1, 100, 3, 12);
        assert!(text.contains("attempt 3 of 12"));
    }
}
