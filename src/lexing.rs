use crate::error_handling::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    modulo,
    exponentiation,
}

impl BinaryOperator {
    pub fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division | modulo => 2,
            exponentiation => 3,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, BinaryOperator::exponentiation)
    }

    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;
        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division | modulo if right == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(left / right),
            modulo => Ok(left % right),
            exponentiation => Ok(left.powf(right)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl FromStr for BinaryOperator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            "%" => Ok(modulo),
            "^" => Ok(exponentiation),
            _ => Err(InvalidOperator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    number(f64),
    operator(BinaryOperator),
    left_paren,
    right_paren,
}

// optional sign, digits, at most one decimal point, at least one digit
fn is_decimal_literal(content: &str) -> bool {
    let digits = content.strip_prefix(&['+', '-'][..]).unwrap_or(content);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for character in digits.chars() {
        match character {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

fn lex_fragment(fragment: &str) -> Result<Token> {
    match fragment {
        "(" => Ok(Token::left_paren),
        ")" => Ok(Token::right_paren),
        _ => {
            if let Ok(operator) = fragment.parse() {
                return Ok(Token::operator(operator));
            }
            if !is_decimal_literal(fragment) {
                return Err(CalcError::invalid_token(fragment.into()));
            }
            fragment
                .parse()
                .map(Token::number)
                .map_err(|_| CalcError::invalid_token(fragment.into()))
        },
    }
}

pub fn lex<S: AsRef<str>>(fragments: &[S]) -> Result<Vec<Token>> {
    fragments.iter().map(|fragment| lex_fragment(fragment.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use BinaryOperator::*;

    #[test]
    fn classifies_each_fragment() {
        let tokens = lex(&["(", "1.5", "^", "2", ")", "%", "3"]).unwrap();
        assert_eq!(tokens, vec![
            Token::left_paren,
            Token::number(1.5),
            Token::operator(exponentiation),
            Token::number(2.0),
            Token::right_paren,
            Token::operator(modulo),
            Token::number(3.0),
        ]);
    }

    #[test]
    fn accepts_signed_and_dotted_literals() {
        assert_eq!(lex(&["-2.5", "+3", ".5", "7."]).unwrap(), vec![
            Token::number(-2.5),
            Token::number(3.0),
            Token::number(0.5),
            Token::number(7.0),
        ]);
    }

    #[test]
    fn rejects_unknown_fragments() {
        assert_eq!(lex(&["3", "$", "4"]), Err(CalcError::invalid_token("$".into())));
        assert_eq!(lex(&["1.2.3"]), Err(CalcError::invalid_token("1.2.3".into())));
        assert_eq!(lex(&["."]), Err(CalcError::invalid_token(".".into())));
        assert_eq!(lex(&["inf"]), Err(CalcError::invalid_token("inf".into())));
        assert_eq!(lex(&["1e5"]), Err(CalcError::invalid_token("1e5".into())));
    }

    #[test]
    fn precedence_orders_operators() {
        assert!(exponentiation.precedence() > multiplication.precedence());
        assert_eq!(multiplication.precedence(), modulo.precedence());
        assert!(division.precedence() > subtraction.precedence());
        assert!(exponentiation.is_right_associative());
        assert!(!addition.is_right_associative());
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert_eq!(division.call(5.0, 0.0), Err(CalcError::division_by_zero));
        assert_eq!(modulo.call(5.0, 0.0), Err(CalcError::division_by_zero));
        assert_eq!(division.call(0.0, 5.0), Ok(0.0));
        assert_eq!(modulo.call(7.0, 3.0), Ok(1.0));
    }
}
