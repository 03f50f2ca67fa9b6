//! screening-export
//!
//! HTML presentation of questionnaire forms and results. The only crate that
//! knows what a page looks like; the engine hands it plain data.

pub mod error;
pub mod render;
pub mod styles;
