use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("invalid token \"{0}\"")]
    invalid_token(String),

    #[error("not enough operands")]
    insufficient_operands,

    #[error("division by zero")]
    division_by_zero,

    #[error("mismatched parentheses")]
    mismatched_parentheses,

    #[error("invalid expression")]
    invalid_expression,

    #[error("need at least one integer")]
    missing_integers,

    #[error("'{0}' overflowed")]
    overflow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    lex,
    eval,
    command,
}

impl CalcError {
    pub fn stage(&self) -> Stage {
        use CalcError::*;
        match self {
            invalid_token(_) => Stage::lex,
            insufficient_operands
            | division_by_zero
            | mismatched_parentheses
            | invalid_expression => Stage::eval,
            missing_integers | overflow(_) => Stage::command,
        }
    }

    /// Single line shown to the user, prefixed by the stage that failed.
    pub fn report(&self) -> String {
        match self.stage() {
            Stage::lex => format!("Lex error: {}", self),
            Stage::eval => format!("Eval error: {}", self),
            Stage::command => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
