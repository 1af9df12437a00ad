use ndarray::prelude::*;
use std::sync::Arc;

pub use attach::*;
pub use densities::*;
pub use moments::*;

use crate::method::AdcMethod;
use crate::properties::Properties;
use crate::reference::{MpGroundState, ReferenceState};

mod attach;
mod densities;
pub mod logging;
mod moments;

/// Result of an excited state (ADC) calculation. Densities and all quantities derived
/// from them are kept in the `properties`.
///
/// Cloning is shallow for all data that is expensive to copy: the reference state, the
/// ground state and the stored density matrices are shared between the clones. Only the
/// eigenvalues and the derived (small) arrays are copied.
#[derive(Debug, Clone)]
pub struct ExcitedStates {
    /// Excitation energies of all states in a.u.
    pub eigenvalues: Array1<f64>,
    /// Method that was used to obtain the states.
    pub method: AdcMethod,
    pub reference_state: Arc<ReferenceState>,
    pub ground_state: Arc<MpGroundState>,
    pub properties: Properties,
}

impl ExcitedStates {
    pub fn new(
        eigenvalues: Array1<f64>,
        method: AdcMethod,
        reference_state: Arc<ReferenceState>,
        ground_state: Arc<MpGroundState>,
    ) -> Self {
        Self {
            eigenvalues,
            method,
            reference_state,
            ground_state,
            properties: Properties::new(),
        }
    }

    /// Returns the number of excited states.
    pub fn n_states(&self) -> usize {
        self.eigenvalues.len()
    }
}

#[cfg(test)]
pub(crate) mod test_system {
    use super::*;
    use crate::operators::DipoleIntegrals;

    /// Dipole integrals of a single orbital: x = 1, y = 0, z = 0.
    pub fn x_dipole_integrals() -> DipoleIntegrals {
        [array![[1.0]], array![[0.0]], array![[0.0]]]
    }

    /// A minimal ADC(2) result with a single spin orbital. Its ground state dipole moment
    /// is [0.7, 0.0, 0.0].
    pub fn single_orbital_states(eigenvalues: Array1<f64>) -> ExcitedStates {
        let reference = ReferenceState::new(
            array![1.0],
            Some(x_dipole_integrals()),
            array![0.3, 0.0, 0.0],
        )
        .unwrap();
        ExcitedStates::new(
            eigenvalues,
            "adc2".parse().unwrap(),
            Arc::new(reference),
            Arc::new(MpGroundState::new(array![[0.0]])),
        )
    }

    /// Four spin orbitals, two of them occupied, with dipole integrals along all axes.
    pub fn four_orbital_states(method: &str) -> ExcitedStates {
        let x: Array2<f64> = array![
            [0.5, 0.1, 0.0, 0.2],
            [0.1, -0.5, 0.3, 0.0],
            [0.0, 0.3, 1.0, 0.0],
            [0.2, 0.0, 0.0, -1.0]
        ];
        let y: Array2<f64> = Array2::from_diag(&array![0.1, 0.2, 0.3, 0.4]);
        let z: Array2<f64> = Array2::from_elem([4, 4], 0.05);
        let reference = ReferenceState::new(
            array![1.0, 1.0, 0.0, 0.0],
            Some([x, y, z]),
            array![0.0, 0.0, 1.0],
        )
        .unwrap();
        let mut mp2_diffdm: Array2<f64> = Array2::zeros([4, 4]);
        mp2_diffdm[[0, 0]] = -0.02;
        mp2_diffdm[[2, 2]] = 0.02;
        ExcitedStates::new(
            array![0.35, -0.4, 0.55],
            method.parse().unwrap(),
            Arc::new(reference),
            Arc::new(MpGroundState::new(mp2_diffdm)),
        )
    }

    /// Transition density of a single excitation from orbital i into orbital a.
    pub fn excitation(i: usize, a: usize, amplitude: f64) -> Array2<f64> {
        let mut tdm: Array2<f64> = Array2::zeros([4, 4]);
        tdm[[i, a]] = amplitude;
        tdm
    }

    /// Difference density of a single excitation from orbital i into orbital a.
    pub fn promotion(i: usize, a: usize, weight: f64) -> Array2<f64> {
        let mut diffdm: Array2<f64> = Array2::zeros([4, 4]);
        diffdm[[i, i]] = -weight;
        diffdm[[a, a]] = weight;
        diffdm
    }
}
