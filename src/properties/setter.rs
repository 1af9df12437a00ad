use crate::properties::property::Property;
use crate::properties::Properties;
use ndarray::prelude::*;
use std::sync::Arc;

impl Properties {
    /// Set the difference densities of the excited states.
    pub fn set_state_diffdms(&mut self, diffdms: Vec<Array2<f64>>) {
        self.set("state_diffdms", Property::from(diffdms))
    }

    /// Set the ground to excited state transition densities.
    pub fn set_ground_to_excited_tdms(&mut self, tdms: Vec<Array2<f64>>) {
        self.set("ground_to_excited_tdms", Property::from(tdms))
    }

    /// Set the transition densities between pairs of excited states.
    pub fn set_state_to_state_tdms(&mut self, tdms: Vec<Array2<f64>>) {
        self.set("state_to_state_tdms", Property::from(tdms))
    }

    /// Attach an already shared density list under the given name.
    pub fn set_shared_densities(&mut self, name: &'static str, densities: Arc<Vec<Array2<f64>>>) {
        self.set(name, Property::from(densities))
    }

    pub fn set_transition_dipole_moments(&mut self, moments: Array2<f64>) {
        self.set("transition_dipole_moments", Property::from(moments))
    }

    pub fn set_oscillator_strengths(&mut self, f: Array1<f64>) {
        self.set("oscillator_strengths", Property::from(f))
    }

    pub fn set_state_dipole_moments(&mut self, moments: Array2<f64>) {
        self.set("state_dipole_moments", Property::from(moments))
    }

    pub fn set_state_to_state_transition_dipole_moments(&mut self, moments: Array2<f64>) {
        self.set(
            "state_to_state_transition_dipole_moments",
            Property::from(moments),
        )
    }

    pub fn set_state_to_state_oscillator_strengths(&mut self, f: Array1<f64>) {
        self.set("state_to_state_oscillator_strengths", Property::from(f))
    }
}
