use crate::error_handling::*;
use crate::lexing::*;

enum StackNode {
    operator(BinaryOperator),
    paren,
}

/// Operand and operator stacks for a single evaluation.
pub struct Yard {
    values: Vec<f64>,
    stack: Vec<StackNode>,
}

impl Yard {
    pub fn new() -> Self {
        Self{values: Vec::new(), stack: Vec::new()}
    }

    fn apply(&mut self, operator: BinaryOperator) -> Result<()> {
        let right = self.values.pop().ok_or(CalcError::insufficient_operands)?;
        let left = self.values.pop().ok_or(CalcError::insufficient_operands)?;
        self.values.push(operator.call(left, right)?);
        Ok(())
    }

    fn pop_higher_operator(&mut self, incoming: BinaryOperator) -> Option<BinaryOperator> {
        let defers_to = |top: &BinaryOperator| {
            top.precedence() > incoming.precedence()
                || (top.precedence() == incoming.precedence()
                    && !incoming.is_right_associative())
        };
        match self.stack.last() {
            Some(StackNode::operator(top)) if defers_to(top) => {
                let top = *top;
                self.stack.pop();
                Some(top)
            },
            _ => None,
        }
    }

    pub fn add_number(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn add_operator(&mut self, operator: BinaryOperator) -> Result<()> {
        while let Some(top) = self.pop_higher_operator(operator) {
            self.apply(top)?;
        }
        self.stack.push(StackNode::operator(operator));
        Ok(())
    }

    pub fn add_left_paren(&mut self) {
        self.stack.push(StackNode::paren);
    }

    pub fn add_right_paren(&mut self) -> Result<()> {
        while let Some(node) = self.stack.pop() {
            match node {
                StackNode::paren => return Ok(()),
                StackNode::operator(operator) => self.apply(operator)?,
            }
        }
        Err(CalcError::mismatched_parentheses)
    }

    pub fn finish(mut self) -> Result<f64> {
        while let Some(node) = self.stack.pop() {
            match node {
                StackNode::paren => return Err(CalcError::mismatched_parentheses),
                StackNode::operator(operator) => self.apply(operator)?,
            }
        }
        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(CalcError::invalid_expression),
        }
    }
}

pub fn evaluate(tokens: &[Token]) -> Result<f64> {
    let mut yard = Yard::new();
    for token in tokens {
        match *token {
            Token::number(value) => yard.add_number(value),
            Token::operator(operator) => yard.add_operator(operator)?,
            Token::left_paren => yard.add_left_paren(),
            Token::right_paren => yard.add_right_paren()?,
        }
    }
    let result = yard.finish()?;
    log::debug!("evaluated {} tokens to {}", tokens.len(), result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanning::scan;

    fn run(line: &str) -> Result<f64> {
        evaluate(&lex(&scan(line))?)
    }

    #[test]
    fn respects_precedence() {
        assert_eq!(run("2+3*4"), Ok(14.0));
        assert_eq!(run("(2+3)*4"), Ok(20.0));
        assert_eq!(run("10 - 4 / 2 ^ 2"), Ok(9.0));
        assert_eq!(run("7 + 10 % 4 * 2"), Ok(11.0));
    }

    #[test]
    fn left_associates_equal_precedence() {
        assert_eq!(run("10-4-3"), Ok(3.0));
        assert_eq!(run("64/4/2"), Ok(8.0));
        assert_eq!(run("17 % 5 % 3"), Ok(2.0));
    }

    #[test]
    fn exponentiation_groups_right() {
        assert_eq!(run("2^3^2"), Ok(512.0));
        assert_eq!(run("(2^3)^2"), Ok(64.0));
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(run("((1+2)*(3+4))/7"), Ok(3.0));
        assert_eq!(run("(((5)))"), Ok(5.0));
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        assert_eq!(run("(1+2"), Err(CalcError::mismatched_parentheses));
        assert_eq!(run("1+2)"), Err(CalcError::mismatched_parentheses));
        assert_eq!(run(")("), Err(CalcError::mismatched_parentheses));
    }

    #[test]
    fn zero_divisor_fails() {
        assert_eq!(run("5/0"), Err(CalcError::division_by_zero));
        assert_eq!(run("5/(2-2)"), Err(CalcError::division_by_zero));
        assert_eq!(run("5%0"), Err(CalcError::division_by_zero));
        assert_eq!(run("0/5"), Ok(0.0));
    }

    #[test]
    fn dangling_operators_lack_operands() {
        assert_eq!(run("1+"), Err(CalcError::insufficient_operands));
        assert_eq!(run("-3"), Err(CalcError::insufficient_operands));
        assert_eq!(run("*"), Err(CalcError::insufficient_operands));
    }

    #[test]
    fn leftover_values_are_invalid() {
        assert_eq!(run("1 2"), Err(CalcError::invalid_expression));
        assert_eq!(run("()"), Err(CalcError::invalid_expression));
        assert_eq!(evaluate(&[]), Err(CalcError::invalid_expression));
    }

    #[test]
    fn fractional_power_of_negative_is_nan() {
        let tokens = [
            Token::number(-8.0),
            Token::operator(BinaryOperator::exponentiation),
            Token::number(0.5),
        ];
        assert!(evaluate(&tokens).unwrap().is_nan());
    }

    #[test]
    fn invalid_token_surfaces_from_lexing() {
        assert_eq!(run("3 $ 4"), Err(CalcError::invalid_token("$".into())));
    }
}
