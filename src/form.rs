//! Questionnaire data model and the blank template.

pub(crate) mod model;
pub(crate) mod template;
