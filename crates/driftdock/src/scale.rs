//! Detection of non-identity scale transforms.
//!
//! The host reports an element's resolved CSS transform (`none`,
//! `matrix(..)` or `matrix3d(..)`). Only the scale entries matter here.

use std::fmt;

/// Errors produced while parsing a resolved transform string.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformParseError {
    /// Transform function other than `matrix` / `matrix3d`.
    UnsupportedFunction(String),
    /// Missing parentheses around the argument list.
    Malformed(String),
    /// Wrong number of arguments for the function.
    ArgumentCount { function: &'static str, expected: usize, found: usize },
    /// An argument was not a number.
    InvalidNumber(String),
}

impl fmt::Display for TransformParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformParseError::UnsupportedFunction(name) => {
                write!(f, "Unsupported transform function: {}", name)
            }
            TransformParseError::Malformed(input) => write!(f, "Malformed transform: {}", input),
            TransformParseError::ArgumentCount {
                function,
                expected,
                found,
            } => write!(
                f,
                "{} expects {} arguments, found {}",
                function, expected, found
            ),
            TransformParseError::InvalidNumber(value) => {
                write!(f, "Invalid number in transform: {}", value)
            }
        }
    }
}

impl std::error::Error for TransformParseError {}

/// Scale components of a resolved transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformScale {
    pub x: f32,
    pub y: f32,
}

impl TransformScale {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// True when either axis differs from 1.
    pub fn is_scaled(&self) -> bool {
        self.x != 1.0 || self.y != 1.0
    }
}

/// Parse a resolved transform and extract its scale components.
///
/// For `matrix(a, b, c, d, e, f)` the scale is `(a, d)`; for `matrix3d` it is
/// the first and sixth entries.
pub fn parse_transform(input: &str) -> Result<TransformScale, TransformParseError> {
    let input = input.trim();
    if input.is_empty() || input == "none" {
        return Ok(TransformScale::IDENTITY);
    }

    let open = input
        .find('(')
        .ok_or_else(|| TransformParseError::Malformed(input.to_string()))?;
    if !input.ends_with(')') {
        return Err(TransformParseError::Malformed(input.to_string()));
    }

    let name = input[..open].trim();
    let args = parse_args(&input[open + 1..input.len() - 1])?;

    let (function, expected, x_index, y_index) = match name {
        "matrix" => ("matrix", 6, 0, 3),
        "matrix3d" => ("matrix3d", 16, 0, 5),
        other => return Err(TransformParseError::UnsupportedFunction(other.to_string())),
    };

    if args.len() != expected {
        return Err(TransformParseError::ArgumentCount {
            function,
            expected,
            found: args.len(),
        });
    }

    Ok(TransformScale {
        x: args[x_index],
        y: args[y_index],
    })
}

fn parse_args(args: &str) -> Result<Vec<f32>, TransformParseError> {
    args.split(',')
        .map(str::trim)
        .map(|value| {
            value
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TransformParseError::InvalidNumber(value.to_string()))
        })
        .collect()
}

/// Whether the given resolved transform applies a non-identity scale.
///
/// Absent or unparseable transforms count as unscaled.
pub fn is_scaled(transform: Option<&str>) -> bool {
    let Some(transform) = transform else {
        return false;
    };
    match parse_transform(transform) {
        Ok(scale) => scale.is_scaled(),
        Err(err) => {
            tracing::trace!("Treating transform as unscaled: {}", err);
            false
        }
    }
}
