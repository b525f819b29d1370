//! Skill extraction and career field scoring module

pub mod engine;
pub mod extractor;
pub mod scorer;
pub mod text_normalizer;
pub mod vocabulary;
