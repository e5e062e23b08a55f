//! Arithmetic formulas for computed columns.
//!
//! A formula such as `{price} * {quantity} + 5` is evaluated per row in three
//! steps:
//!
//! 1. `{fieldName}` tokens are replaced with the row's current value (`0` when
//!    the field is absent or null).
//! 2. The text is reduced to an allow-list: digits, `+ - * / ( ) . %` and
//!    whitespace. Anything else (currency symbols, letters, units) is dropped.
//! 3. What remains is parsed by a small recursive-descent parser and
//!    evaluated as `f64`.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! `%` is the floating-point remainder.

use crate::error::FormulaError;
use synth_core::{Record, Value};

/// Parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Sum(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Remainder(Box<Expression>, Box<Expression>),
    Negate(Box<Expression>),
    Literal(f64),
}

impl Expression {
    /// Evaluate the tree. Division by zero follows IEEE 754.
    pub fn eval(&self) -> f64 {
        match self {
            Expression::Sum(l, r) => l.eval() + r.eval(),
            Expression::Subtract(l, r) => l.eval() - r.eval(),
            Expression::Multiply(l, r) => l.eval() * r.eval(),
            Expression::Divide(l, r) => l.eval() / r.eval(),
            Expression::Remainder(l, r) => l.eval() % r.eval(),
            Expression::Negate(v) => -v.eval(),
            Expression::Literal(n) => *n,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, FormulaError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            ' ' | '\t' | '\n' | '\r' => {
                i += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let n = text
                    .parse::<f64>()
                    .map_err(|_| FormulaError::InvalidNumber(text.clone()))?;
                tokens.push(Token::Number(n));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(FormulaError::UnexpectedChar(other, i)),
        };
        tokens.push(token);
        i += 1;
    }
    Ok(tokens)
}

type BinaryOp = fn(Box<Expression>, Box<Expression>) -> Expression;

/// Deepest parenthesis/sign nesting and deepest expression tree accepted.
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree and its height.
type Node = (Expression, usize);

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn enter(&mut self) -> Result<(), FormulaError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(FormulaError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn join(op: BinaryOp, (left, l): Node, (right, r): Node) -> Result<Node, FormulaError> {
        let depth = l.max(r) + 1;
        if depth > MAX_DEPTH {
            return Err(FormulaError::TooDeep(MAX_DEPTH));
        }
        Ok((op(Box::new(left), Box::new(right)), depth))
    }

    fn expr(&mut self) -> Result<Node, FormulaError> {
        let mut left = self.term()?;
        loop {
            let op: BinaryOp = match self.peek() {
                Some(Token::Plus) => Expression::Sum,
                Some(Token::Minus) => Expression::Subtract,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.term()?;
            left = Self::join(op, left, right)?;
        }
    }

    fn term(&mut self) -> Result<Node, FormulaError> {
        let mut left = self.unary()?;
        loop {
            let op: BinaryOp = match self.peek() {
                Some(Token::Star) => Expression::Multiply,
                Some(Token::Slash) => Expression::Divide,
                Some(Token::Percent) => Expression::Remainder,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.unary()?;
            left = Self::join(op, left, right)?;
        }
    }

    fn unary(&mut self) -> Result<Node, FormulaError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                self.enter()?;
                let (inner, depth) = self.unary()?;
                self.nesting -= 1;
                if depth + 1 > MAX_DEPTH {
                    return Err(FormulaError::TooDeep(MAX_DEPTH));
                }
                Ok((Expression::Negate(Box::new(inner)), depth + 1))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.enter()?;
                let node = self.unary()?;
                self.nesting -= 1;
                Ok(node)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Node, FormulaError> {
        let at = self.pos;
        match self.advance() {
            Some(Token::Number(n)) => Ok((Expression::Literal(n), 1)),
            Some(Token::LParen) => {
                self.enter()?;
                let inner = self.expr()?;
                self.nesting -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(FormulaError::UnclosedParen),
                }
            }
            _ => Err(FormulaError::ExpectedOperand(at)),
        }
    }
}

/// Parse an arithmetic expression (no `{field}` tokens).
///
/// Nesting or tree height beyond [`MAX_DEPTH`] is rejected.
pub fn parse_expression(input: &str) -> Result<Expression, FormulaError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let (expr, _) = parser.expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(FormulaError::TrailingInput(parser.pos));
    }
    Ok(expr)
}

/// Replace every `{name}` token with the row's value for `name`.
///
/// Absent and null fields become `0`. An unclosed `{` is kept as text.
pub fn substitute_fields(formula: &str, record: &Record) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut rest = formula;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        match record.get(name) {
            Some(value) if !value.is_null() => out.push_str(&value.to_display_string()),
            _ => out.push('0'),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Keep only characters the arithmetic grammar can use.
pub fn sanitize(expr: &str) -> String {
    expr.chars()
        .filter(|c| c.is_ascii_digit() || "+-*/().% \t\n\r".contains(*c))
        .collect()
}

/// Substitute, sanitize and parse a formula against one row.
pub fn try_evaluate_formula(formula: &str, record: &Record) -> Result<f64, FormulaError> {
    let expr = sanitize(&substitute_fields(formula, record));
    parse_expression(&expr).map(|e| e.eval())
}

/// Evaluate a formula against one row. Parse errors and non-finite results
/// yield `0`.
pub fn evaluate_formula(formula: &str, record: &Record) -> f64 {
    match try_evaluate_formula(formula, record) {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Render a formula's result for display: `"ERR"` when the expression does
/// not parse, `"0"` when it is not finite, otherwise the number.
pub fn preview_formula(formula: &str, record: &Record) -> String {
    match try_evaluate_formula(formula, record) {
        Ok(n) => Value::number(n).to_string(),
        Err(_) => "ERR".to_string(),
    }
}
