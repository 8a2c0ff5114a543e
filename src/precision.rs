/// Bounds the mp-phase precision-raise policy the distilled spec leaves as an
/// open question ("when does MP stop raising and give up?" — see DESIGN.md).
/// Concretely: double `mpwp` each raise, capped at four times the next power
/// of two above `prec_out`, comfortably past the point where raising further
/// could plausibly help close the last `prec_out` bits.
pub struct PrecisionPolicy;

impl PrecisionPolicy {
    pub fn ceiling(prec_out: u32) -> u32 {
        prec_out.next_power_of_two().saturating_mul(4)
    }

    /// Returns the next working precision and whether the ceiling was
    /// already reached (in which case the returned precision is unchanged).
    pub fn raise(mpwp: u32, prec_out: u32) -> (u32, bool) {
        let ceiling = Self::ceiling(prec_out);
        if mpwp >= ceiling {
            return (mpwp, true);
        }
        (mpwp.saturating_mul(2).min(ceiling), false)
    }
}
