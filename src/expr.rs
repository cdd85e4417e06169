//! Expression trees over the unit square.
//!
//! An [`Expr`] is a finite tree of operators over the two coordinate
//! variables. Every operator is closed over `[-1, 1]`: feed it inputs in
//! that interval and the result stays in it, which is what lets the color
//! map take evaluator output without clamping.

use std::f64::consts::PI;

/// Coordinate variable at a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    X,
    Y,
}

/// Single-argument operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `cos(pi * v)`
    CosPi,
    /// `sin(pi * v)`
    SinPi,
    /// `-v`
    Flip,
    /// `0.5 * v`
    Half,
}

/// Two-argument operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a * b`
    Prod,
    /// `0.5 * (a + b)`
    Avg,
}

/// A node in an expression tree. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Leaf(Var),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluate the tree at a domain point. Pure and total: every operator
    /// is defined for all finite inputs, so there is no error case.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Leaf(Var::X) => x,
            Self::Leaf(Var::Y) => y,
            Self::Unary(op, child) => {
                let v = child.evaluate(x, y);
                match op {
                    UnaryOp::CosPi => (PI * v).cos(),
                    UnaryOp::SinPi => (PI * v).sin(),
                    UnaryOp::Flip => -v,
                    UnaryOp::Half => 0.5 * v,
                }
            }
            Self::Binary(op, left, right) => {
                let a = left.evaluate(x, y);
                let b = right.evaluate(x, y);
                match op {
                    BinaryOp::Prod => a * b,
                    BinaryOp::Avg => 0.5 * (a + b),
                }
            }
        }
    }

    /// Longest root-to-leaf path, counting the leaf as depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Unary(_, child) => 1 + child.depth(),
            Self::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}
