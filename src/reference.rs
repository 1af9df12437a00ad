use crate::error::PropertyError;
use crate::operators::{DipoleIntegrals, OperatorIntegrals};
use ndarray::prelude::*;
use std::sync::Arc;

/// The Hartree-Fock reference of an ADC calculation. All one-particle quantities are
/// given in the spin-orbital basis of the reference.
#[derive(Debug, Clone)]
pub struct ReferenceState {
    /// Occupation number (0 or 1) of every spin orbital.
    occupation: Array1<f64>,
    pub operator_integrals: OperatorIntegrals,
    /// Dipole moment of the nuclei.
    pub nuclear_dipole: Array1<f64>,
}

impl ReferenceState {
    pub fn new(
        occupation: Array1<f64>,
        electric_dipole: Option<DipoleIntegrals>,
        nuclear_dipole: Array1<f64>,
    ) -> Result<Self, PropertyError> {
        if let Some(f) = occupation.iter().find(|&&f| f != 0.0 && f != 1.0) {
            return Err(PropertyError::InvalidOccupation(*f));
        }
        if nuclear_dipole.len() != 3 {
            return Err(PropertyError::LengthMismatch {
                what: "nuclear dipole",
                expected: 3,
                found: nuclear_dipole.len(),
            });
        }
        let n_orbs: usize = occupation.len();
        if let Some(components) = electric_dipole.as_ref() {
            for component in components.iter() {
                if component.dim() != (n_orbs, n_orbs) {
                    return Err(PropertyError::ShapeMismatch {
                        operator: component.dim(),
                        density: (n_orbs, n_orbs),
                    });
                }
            }
        }
        Ok(Self {
            occupation,
            operator_integrals: OperatorIntegrals::new(electric_dipole),
            nuclear_dipole,
        })
    }

    /// Number of spin orbitals.
    pub fn n_orbs(&self) -> usize {
        self.occupation.len()
    }

    /// Number of occupied spin orbitals.
    pub fn n_occ(&self) -> usize {
        self.occupation.iter().filter(|&&f| f == 1.0).count()
    }

    /// The one-particle density matrix of the reference determinant. In the basis of
    /// its own orbitals it is diagonal with the occupation numbers on the diagonal.
    pub fn density_matrix(&self) -> Array2<f64> {
        Array2::from_diag(&self.occupation)
    }
}

/// The Møller-Plesset ground state on top of the reference. Only the second-order
/// correction to the one-particle density is needed for properties.
#[derive(Debug, Clone)]
pub struct MpGroundState {
    pub mp2_diffdm: Arc<Array2<f64>>,
}

impl MpGroundState {
    pub fn new(mp2_diffdm: Array2<f64>) -> Self {
        Self {
            mp2_diffdm: Arc::new(mp2_diffdm),
        }
    }
}

/// Computes the dipole moment of the nuclei from their charges and cartesian coordinates
/// (shape: n_atoms x 3)
/// ->        ->
/// µ = ∑ Z_A R_A
pub fn nuclear_dipole(charges: ArrayView1<f64>, coordinates: ArrayView2<f64>) -> Array1<f64> {
    charges.dot(&coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dipole_integrals(n_orbs: usize) -> DipoleIntegrals {
        [
            Array2::eye(n_orbs),
            Array2::zeros([n_orbs, n_orbs]),
            Array2::zeros([n_orbs, n_orbs]),
        ]
    }

    #[test]
    fn density_of_the_reference() {
        let reference = ReferenceState::new(
            array![1.0, 1.0, 0.0, 0.0],
            Some(dipole_integrals(4)),
            Array1::zeros([3]),
        )
        .unwrap();
        assert_eq!(reference.n_orbs(), 4);
        assert_eq!(reference.n_occ(), 2);
        let p: Array2<f64> = reference.density_matrix();
        assert_eq!(p.diag(), array![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(p.sum(), 2.0);
    }

    #[test]
    fn fractional_occupations_are_rejected() {
        let result = ReferenceState::new(array![1.0, 0.5, 0.0], None, Array1::zeros([3]));
        assert_eq!(result.err(), Some(PropertyError::InvalidOccupation(0.5)));
    }

    #[test]
    fn integrals_have_to_match_the_orbitals() {
        let result = ReferenceState::new(
            array![1.0, 0.0, 0.0],
            Some(dipole_integrals(2)),
            Array1::zeros([3]),
        );
        assert!(matches!(result, Err(PropertyError::ShapeMismatch { .. })));
    }

    #[test]
    fn dipole_of_the_nuclei() {
        // H2O like arrangement
        let charges: Array1<f64> = array![8.0, 1.0, 1.0];
        let xyz: Array2<f64> = array![[0.0, 0.0, 0.2], [0.0, 1.4, -0.9], [0.0, -1.4, -0.9]];
        let dipole: Array1<f64> = nuclear_dipole(charges.view(), xyz.view());
        assert_abs_diff_eq!(dipole, array![0.0, 0.0, 1.6 - 1.8], epsilon = 1e-12);
    }
}
