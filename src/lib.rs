pub mod display;
pub mod error;
pub mod extractors;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod tokenize;
pub mod vocab;
