use thiserror::Error;

/// Errors raised while selecting a scenario.
///
/// Applying a scenario never fails; only choosing one can. Scenario and
/// column files load through `synth_core` and report `SchemaError`.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// No built-in preset has this name.
    #[error("Unknown scenario preset '{0}' (available: {1})")]
    UnknownPreset(String, String),
}

/// Errors raised by the formula parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// Nothing to evaluate.
    #[error("empty expression")]
    Empty,

    /// A character outside the arithmetic grammar.
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    /// A numeric literal that does not parse, such as `1.2.3`.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A token where an operand was expected.
    #[error("expected a number or '(' at token {0}")]
    ExpectedOperand(usize),

    /// An opening parenthesis without its partner.
    #[error("missing ')'")]
    UnclosedParen,

    /// Input left over after a complete expression.
    #[error("unexpected trailing input at token {0}")]
    TrailingInput(usize),

    /// Nesting or expression height beyond the parser limit.
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}
