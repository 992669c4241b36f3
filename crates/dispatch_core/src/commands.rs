use std::fmt;

use crate::encode;

/// Ordered sequence of opaque command tokens. Order is preserved verbatim
/// in the outgoing request; tokens are never parsed or validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList(Vec<String>);

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// Splits a multi-line script into tokens: one line, one token. The
    /// script is trimmed as a whole; interior lines are kept verbatim.
    pub fn from_lines(script: &str) -> Self {
        Self(
            script
                .trim()
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value of the `cmd` query parameter: tokens percent-encoded
    /// independently, then joined with literal commas.
    pub fn to_query_value(&self) -> String {
        encode::encode_joined(&self.0)
    }
}

impl From<Vec<String>> for CommandList {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<String> for CommandList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<PaintCommand> for CommandList {
    fn from_iter<I: IntoIterator<Item = PaintCommand>>(iter: I) -> Self {
        Self(iter.into_iter().map(|command| command.token()).collect())
    }
}

/// Typed constructors for the painter's command grammar. These only render
/// token text; the dispatcher still treats every token as opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintCommand {
    White,
    Green,
    BgRect { x1: f64, y1: f64, x2: f64, y2: f64 },
    Figure { x: f64, y: f64 },
    Move { dx: f64, dy: f64 },
    Update,
    Reset,
}

impl PaintCommand {
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PaintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintCommand::White => f.write_str("white"),
            PaintCommand::Green => f.write_str("green"),
            PaintCommand::BgRect { x1, y1, x2, y2 } => write!(f, "bgrect {x1} {y1} {x2} {y2}"),
            PaintCommand::Figure { x, y } => write!(f, "figure {x} {y}"),
            PaintCommand::Move { dx, dy } => write!(f, "move {dx} {dy}"),
            PaintCommand::Update => f.write_str("update"),
            PaintCommand::Reset => f.write_str("reset"),
        }
    }
}

impl From<PaintCommand> for String {
    fn from(command: PaintCommand) -> Self {
        command.token()
    }
}
