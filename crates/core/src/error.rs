use std::fmt;

/// A stock metric fell outside the domain the technical score is defined on.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidInputError {
    pub field: &'static str,
    pub value: f64,
    pub constraint: &'static str,
}

impl InvalidInputError {
    pub(crate) fn new(field: &'static str, value: f64, constraint: &'static str) -> Self {
        Self {
            field,
            value,
            constraint,
        }
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid input (field={}, value={}): must be {}",
            self.field, self.value, self.constraint
        )
    }
}

impl std::error::Error for InvalidInputError {}
