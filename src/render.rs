//! Canvas allocation and drawing.

pub(crate) mod canvas;
pub(crate) mod export;
pub(crate) mod poster;
