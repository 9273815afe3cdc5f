//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each analysis,
/// and is generic over the return type so that
/// each analysis can return its own report.
pub trait Pipeline<T> {
    /// short, human readable analysis name.
    fn name(&self) -> &'static str;

    fn run(&self) -> Result<T, Error>;
}
