//! Text wrapping and height estimation. Nothing here draws.

pub(crate) mod plan;
pub(crate) mod wrap;
