use serde::Serialize;

/// The three numeric regimes the driver cycles through. Transitions only
/// ever go `Float -> Mp`, `Dpe -> Mp`, or `Mp -> Mp` (a precision raise);
/// there are no downgrades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Float,
    Dpe,
    Mp,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Float
    }
}
