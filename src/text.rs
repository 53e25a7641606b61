//! Font loading and text rasterization.

pub(crate) mod bitmap;
pub(crate) mod engine;
pub(crate) mod font;
