//! Linear-model machinery for the adjusted gap estimate.
//!
//! Two pieces:
//!
//! 1. **Design construction** ([`design`]): reference-level encoding of
//!    categorical columns and assembly of the design matrix
//! 2. **Least squares** ([`ols`]): ordinary least squares over the
//!    design, with coefficient standard errors

pub mod design;
pub mod ols;

pub use design::{encode_levels, DesignBuilder, LevelEncoding};
pub use ols::{fit, OlsFit};
