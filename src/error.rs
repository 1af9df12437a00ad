use thiserror::Error;

/// Failure of a property calculation. Every variant is a missing prerequisite
/// (densities, integrals) or a request that is not defined for the given input.
/// None of them is recovered from internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("Cannot compute transition dipole moments without transition densities.")]
    MissingTransitionDensities,
    #[error("Cannot compute state dipole moments without state densities.")]
    MissingStateDensities,
    #[error("Cannot compute state-to-state transition dipole moments without state-to-state transition densities.")]
    MissingStateToStateDensities,
    #[error("Reference state cannot provide electric dipole integrals.")]
    MissingDipoleIntegrals,
    #[error("{0} not yet implemented.")]
    NotImplemented(String),
    #[error("Length mismatch: {what} has {found} entries, but {expected} were expected.")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Shape mismatch: operator has shape {operator:?}, density has shape {density:?}.")]
    ShapeMismatch {
        operator: (usize, usize),
        density: (usize, usize),
    },
    #[error("Unknown ADC method: {0}")]
    UnknownMethod(String),
    #[error("Fractional occupation numbers are not supported (found {0}).")]
    InvalidOccupation(f64),
    #[error("The density provider cannot supply {0}.")]
    DensityUnavailable(&'static str),
}
