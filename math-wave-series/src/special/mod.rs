//! Special functions for eigenfunction expansions
//!
//! - Cylindrical Bessel functions J₀, J₁ and the positive zeros of J₀
//!   (circular membrane eigenfrequencies)
//! - Brent's bracketed root search
//! - Chebyshev polynomials Tₙ and their nodes

pub mod bessel;
mod chebyshev;

pub use bessel::*;
pub use chebyshev::*;
