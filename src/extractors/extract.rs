//! Extract trait.

/// Pure function of a sample.
///
/// Two calls on the same sample must yield equal results, and an implementation must not
/// keep or consult state between calls. Extraction is total over any string: a panic here
/// is a defect and aborts the whole batch it runs in.
pub trait Extract: Sync {
    type Partial: Send;

    fn extract(&self, sample: &str) -> Self::Partial;
}
