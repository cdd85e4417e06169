//! Random construction of expression trees.
//!
//! The builder draws a target depth uniformly from `[min_depth, max_depth]`
//! and then grows a tree recursively. Each node's operator is drawn from a
//! fixed set of six templates whose default children are the coordinate
//! leaves; recursion replaces those leaves while the remaining depth budget
//! is above the cutoff. The target depth is only an upper budget: branches
//! stop at the cutoff check, so the realized depth can fall short of
//! `min_depth` along some (or all) paths. That looseness is intentional
//! and matches the reference generator.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::expr::{BinaryOp, Expr, UnaryOp, Var};
use crate::rng::SeededRng;

/// Builder precondition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    InvalidDepthRange { min: u32, max: u32 },
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDepthRange { min, max } => {
                write!(f, "invalid depth range: min {min} exceeds max {max}")
            }
        }
    }
}

impl Error for BuildError {}

/// Recursion stops once the remaining budget drops to this value; the
/// operator's default leaf children survive in place.
const DEPTH_CUTOFF: u32 = 2;

/// Number of operator templates a node draws from.
const TEMPLATE_COUNT: usize = 6;

/// Build a random expression tree with target depth drawn uniformly from
/// `[min_depth, max_depth]` inclusive.
///
/// The root is always an operator, never a bare leaf; leaves are only the
/// coordinate variables.
pub fn build_random_function(
    rng: &mut SeededRng,
    min_depth: u32,
    max_depth: u32,
) -> Result<Expr, BuildError> {
    if min_depth > max_depth {
        return Err(BuildError::InvalidDepthRange {
            min: min_depth,
            max: max_depth,
        });
    }
    let depth = rng.range_inclusive(min_depth, max_depth);
    Ok(build_node(rng, depth))
}

fn build_node(rng: &mut SeededRng, depth: u32) -> Expr {
    match rng.pick_index(TEMPLATE_COUNT) {
        0 => {
            let left = build_child(rng, depth, Var::X);
            let right = build_child(rng, depth, Var::Y);
            Expr::Binary(BinaryOp::Prod, left, right)
        }
        1 => {
            let left = build_child(rng, depth, Var::X);
            let right = build_child(rng, depth, Var::Y);
            Expr::Binary(BinaryOp::Avg, left, right)
        }
        2 => Expr::Unary(UnaryOp::CosPi, build_child(rng, depth, Var::X)),
        3 => Expr::Unary(UnaryOp::SinPi, build_child(rng, depth, Var::X)),
        4 => Expr::Unary(UnaryOp::Flip, build_child(rng, depth, Var::X)),
        _ => Expr::Unary(UnaryOp::Half, build_child(rng, depth, Var::X)),
    }
}

/// Recurse while budget remains, otherwise keep the template's default leaf.
fn build_child(rng: &mut SeededRng, depth: u32, default: Var) -> Box<Expr> {
    if depth > DEPTH_CUTOFF {
        Box::new(build_node(rng, depth - 1))
    } else {
        Box::new(Expr::Leaf(default))
    }
}
