//! randart: computational art from randomly built expression trees.
//!
//! Three random expression trees (one per RGB channel) are evaluated at
//! every pixel of the `[-1, 1]` square; the results are remapped to color
//! bytes and encoded as PNG. All randomness flows through an explicit
//! seeded generator, so any image can be reproduced from its seed.

pub mod art;
pub mod builder;
pub mod expr;
pub mod remap;
pub mod rng;
pub mod surface;
