use crate::properties::Properties;
use nalgebra::Vector3;
use ndarray::prelude::*;
use std::sync::Arc;

impl Properties {
    /// Returns the difference densities of all excited states w.r.t. the ground state.
    pub fn state_diffdms(&self) -> Option<&[Array2<f64>]> {
        self.get("state_diffdms")
            .and_then(|value| value.as_densities())
            .map(|value| value.as_slice())
    }

    /// Returns the ground to excited state transition densities.
    pub fn ground_to_excited_tdms(&self) -> Option<&[Array2<f64>]> {
        self.get("ground_to_excited_tdms")
            .and_then(|value| value.as_densities())
            .map(|value| value.as_slice())
    }

    /// Returns the transition densities between all pairs of excited states (i < j).
    pub fn state_to_state_tdms(&self) -> Option<&[Array2<f64>]> {
        self.get("state_to_state_tdms")
            .and_then(|value| value.as_densities())
            .map(|value| value.as_slice())
    }

    /// Returns a shared handle to a density list without copying the matrices.
    pub fn shared_densities(&self, name: &'static str) -> Option<Arc<Vec<Array2<f64>>>> {
        self.get(name)
            .and_then(|value| value.as_densities())
            .map(Arc::clone)
    }

    /// Returns the transition dipole moments for all excited states.
    pub fn transition_dipole_moments(&self) -> Option<ArrayView2<f64>> {
        self.get("transition_dipole_moments")
            .and_then(|value| value.as_array2())
            .map(|value| value.view())
    }

    /// Returns the transition dipole moment for a specific excited state.
    /// The first excited state has the index 0.
    pub fn transition_dipole_moment(&self, idx: usize) -> Option<Vector3<f64>> {
        self.transition_dipole_moments()
            .and_then(|moments| dipole_of_row(moments, idx))
    }

    /// Returns the oscillator strengths for all excited states.
    pub fn oscillator_strengths(&self) -> Option<ArrayView1<f64>> {
        self.get("oscillator_strengths")
            .and_then(|value| value.as_array1())
            .map(|value| value.view())
    }

    /// Returns the dipole moments of all excited states.
    pub fn state_dipole_moments(&self) -> Option<ArrayView2<f64>> {
        self.get("state_dipole_moments")
            .and_then(|value| value.as_array2())
            .map(|value| value.view())
    }

    pub fn state_dipole_moment(&self, idx: usize) -> Option<Vector3<f64>> {
        self.state_dipole_moments()
            .and_then(|moments| dipole_of_row(moments, idx))
    }

    pub fn state_to_state_transition_dipole_moments(&self) -> Option<ArrayView2<f64>> {
        self.get("state_to_state_transition_dipole_moments")
            .and_then(|value| value.as_array2())
            .map(|value| value.view())
    }

    pub fn state_to_state_oscillator_strengths(&self) -> Option<ArrayView1<f64>> {
        self.get("state_to_state_oscillator_strengths")
            .and_then(|value| value.as_array1())
            .map(|value| value.view())
    }
}

fn dipole_of_row(moments: ArrayView2<f64>, idx: usize) -> Option<Vector3<f64>> {
    if idx >= moments.nrows() || moments.ncols() != 3 {
        return None;
    }
    let dip: ArrayView1<f64> = moments.row(idx);
    Some(Vector3::new(dip[0], dip[1], dip[2]))
}
