use thiserror::Error;

/// Errors surfaced to a caller of this crate.
///
/// Everything else the reference design treats as a failure mode (numerical
/// non-progress, a regeneration singularity, float precision insufficiency)
/// is handled locally and never reaches this type — see §7 of the design
/// notes for the full accounting.
#[derive(Error, Debug)]
pub enum SecularError {
    #[error("degree n must be positive, got {0}")]
    InvalidDegree(usize),

    #[error("output precision target must be positive, got {0} bits")]
    InvalidPrecisionTarget(u32),

    #[error("mismatched coefficient array lengths: a.len() = {a_len}, b.len() = {b_len}")]
    MismatchedLengths { a_len: usize, b_len: usize },
}
