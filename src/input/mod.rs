//! Input module
//! Handles dataset loading and skill-field parsing

pub mod dataset;
pub mod skills;
