//! # Conway Notation
//!
//! Parses strings such as `"dkC"` or `"tP5"` into a [`Recipe`]: a seed
//! followed by operators applied right to left.
//!
//! ## Grammar
//!
//! ```text
//! notation := operator* seed
//! operator := primary | derived
//! primary  := 'k' | 'd' | 'a' | 'c' | 'g' | 'p' | 'w'
//! derived  := 't' | 'j' | 'e' | 'o' | 'z' | 'n' | 's' | 'b' | 'm'
//! seed     := 'T' | 'C' | 'O' | 'D' | 'I' | ('P' | 'A' | 'Y') digits
//! ```
//!
//! Derived operators expand into primaries before anything is applied:
//!
//! | Symbol | Name | Expansion |
//! |---|---|---|
//! | `t` | truncate | `dkd` |
//! | `j` | join | `da` |
//! | `e` | expand | `aa` |
//! | `o` | ortho | `daa` |
//! | `z` | zip | `dk` |
//! | `n` | needle | `kd` |
//! | `s` | snub | `dgd` |
//! | `b` | bevel | `dkda` |
//! | `m` | meta | `kda` |


use std::fmt;

use config::constants::{OperatorConfig, MAX_OPERATOR_CHAIN};
use tracing::debug;

use crate::error::{ConwayError, ConwayResult};
use crate::ops::Operator;
use crate::polyhedron::Polyhedron;
use crate::seeds::Seed;

/// Derived operator symbols and their expansions, written in notation order.
const DERIVED: &[(char, &str)] = &[
    ('t', "dkd"),
    ('j', "da"),
    ('e', "aa"),
    ('o', "daa"),
    ('z', "dk"),
    ('n', "kd"),
    ('s', "dgd"),
    ('b', "dkda"),
    ('m', "kda"),
];

/// A parsed notation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Starting polyhedron.
    pub seed: Seed,
    /// Primary operators in application order (first entry runs first).
    pub operators: Vec<Operator>,
}

impl Recipe {
    /// Builds the seed and applies every operator with default parameters.
    pub fn build(&self) -> ConwayResult<Polyhedron> {
        self.build_with(&OperatorConfig::default())
    }

    /// Builds the seed and applies every operator with `config`.
    pub fn build_with(&self, config: &OperatorConfig) -> ConwayResult<Polyhedron> {
        let mut poly = self.seed.build()?;
        for (step, op) in self.operators.iter().enumerate() {
            debug!(
                "{self} step {}/{}: {} on {} faces",
                step + 1,
                self.operators.len(),
                op.name(),
                poly.face_count()
            );
            poly = op.apply_with(&poly, config)?;
        }
        Ok(poly)
    }
}

/// Writes the recipe back out using primary symbols only.
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in self.operators.iter().rev() {
            write!(f, "{}", op.symbol())?;
        }
        write!(f, "{}", self.seed)
    }
}

/// Parses a notation string.
///
/// # Errors
///
/// `InvalidNotation` for an empty string, an unknown symbol, a missing or
/// malformed seed, or a chain longer than [`MAX_OPERATOR_CHAIN`] primary
/// operators once derived operators are expanded. Side counts are checked
/// when the recipe is built.
///
/// # Example
///
/// ```rust
/// use conway_mesh::notation::parse;
/// use conway_mesh::ops::Operator;
/// use conway_mesh::seeds::Seed;
///
/// let recipe = parse("dkC").unwrap();
/// assert_eq!(recipe.seed, Seed::Cube);
/// assert_eq!(recipe.operators, vec![Operator::Kis, Operator::Dual]);
/// ```
pub fn parse(notation: &str) -> ConwayResult<Recipe> {
    let notation = notation.trim();
    if notation.is_empty() {
        return Err(ConwayError::invalid_notation("empty notation"));
    }

    let split = notation
        .find(|c: char| c.is_ascii_uppercase())
        .ok_or_else(|| ConwayError::invalid_notation(format!("'{notation}' has no seed")))?;
    let (prefix, seed) = notation.split_at(split);

    let seed = parse_seed(seed)?;

    let mut operators = Vec::new();
    for symbol in prefix.chars().rev() {
        expand_symbol(symbol, &mut operators)?;
    }

    if operators.len() > MAX_OPERATOR_CHAIN {
        return Err(ConwayError::invalid_notation(format!(
            "'{notation}' expands to {} operators, limit is {MAX_OPERATOR_CHAIN}",
            operators.len()
        )));
    }

    Ok(Recipe { seed, operators })
}

/// Parses and builds a notation string in one go.
///
/// # Example
///
/// ```rust
/// use conway_mesh::notation::apply;
///
/// // truncated tetrahedron
/// let tt = apply("tT").unwrap();
/// assert_eq!((tt.vertex_count(), tt.edge_count(), tt.face_count()), (12, 18, 8));
/// ```
pub fn apply(notation: &str) -> ConwayResult<Polyhedron> {
    parse(notation)?.build()
}

/// Appends the primaries for one symbol in application order.
fn expand_symbol(symbol: char, operators: &mut Vec<Operator>) -> ConwayResult<()> {
    if let Some(op) = Operator::from_symbol(symbol) {
        operators.push(op);
        return Ok(());
    }

    let (_, expansion) = DERIVED
        .iter()
        .find(|(derived, _)| *derived == symbol)
        .ok_or_else(|| ConwayError::invalid_notation(format!("unknown operator '{symbol}'")))?;

    for primary in expansion.chars().rev() {
        let op = Operator::from_symbol(primary).ok_or_else(|| {
            ConwayError::invalid_notation(format!("'{symbol}' expands to unknown '{primary}'"))
        })?;
        operators.push(op);
    }
    Ok(())
}

fn parse_seed(text: &str) -> ConwayResult<Seed> {
    let mut chars = text.chars();
    let Some(symbol) = chars.next() else {
        return Err(ConwayError::invalid_notation("missing seed"));
    };
    let rest = chars.as_str();

    let fixed = match symbol {
        'T' => Some(Seed::Tetrahedron),
        'C' => Some(Seed::Cube),
        'O' => Some(Seed::Octahedron),
        'D' => Some(Seed::Dodecahedron),
        'I' => Some(Seed::Icosahedron),
        _ => None,
    };
    if let Some(seed) = fixed {
        if !rest.is_empty() {
            return Err(ConwayError::invalid_notation(format!(
                "unexpected '{rest}' after seed '{symbol}'"
            )));
        }
        return Ok(seed);
    }

    let family: fn(usize) -> Seed = match symbol {
        'P' => Seed::Prism,
        'A' => Seed::Antiprism,
        'Y' => Seed::Pyramid,
        _ => {
            return Err(ConwayError::invalid_notation(format!(
                "unknown seed '{symbol}'"
            )))
        }
    };

    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConwayError::invalid_notation(format!(
            "seed '{symbol}' needs a side count, got '{rest}'"
        )));
    }
    let sides = rest.parse::<usize>().map_err(|e| {
        ConwayError::invalid_notation(format!("side count '{rest}' for seed '{symbol}': {e}"))
    })?;

    Ok(family(sides))
}
