use hashbrown::HashMap;
pub use property::Property;

mod getter;
pub mod property;
mod setter;

/// Names of the quantities that are derived from the densities. These are never
/// recomputed as long as they are present.
pub const DERIVED_PROPERTIES: [&str; 5] = [
    "transition_dipole_moments",
    "oscillator_strengths",
    "state_dipole_moments",
    "state_to_state_transition_dipole_moments",
    "state_to_state_oscillator_strengths",
];

/// Names of the density matrices that are attached by a density provider.
pub const DENSITIES: [&str; 3] = [
    "state_diffdms",
    "ground_to_excited_tdms",
    "state_to_state_tdms",
];

#[derive(Debug, Clone, Default)]
pub struct Properties {
    map: HashMap<&'static str, Property>,
}

impl Properties {
    pub fn new() -> Self {
        Properties {
            map: HashMap::new(),
        }
    }

    /// Removes all derived quantities, so that they are computed again on the next request.
    pub fn reset_derived(&mut self) {
        for data_name in DERIVED_PROPERTIES.iter() {
            self.map.remove(*data_name);
        }
    }

    /// Removes all densities together with the quantities derived from them.
    pub fn reset(&mut self) {
        self.reset_derived();
        for data_name in DENSITIES.iter() {
            self.map.remove(*data_name);
        }
    }

    pub fn get(&self, name: &'static str) -> Option<&Property> {
        self.map.get(name)
    }

    /// Returns the Property without a reference and removes it from the dict
    pub fn take(&mut self, name: &'static str) -> Option<Property> {
        self.map.remove(name)
    }

    pub fn set(&mut self, name: &'static str, value: Property) {
        self.map.insert(name, value);
    }

    /// Names of all stored properties in alphabetical order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.map.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::prelude::*;
    use std::sync::Arc;

    #[test]
    fn clones_share_densities() {
        let mut properties: Properties = Properties::new();
        properties.set_ground_to_excited_tdms(vec![Array2::eye(2), Array2::zeros([2, 2])]);
        let copy: Properties = properties.clone();
        let original = properties.get("ground_to_excited_tdms").unwrap().as_densities().unwrap();
        let shared = copy.get("ground_to_excited_tdms").unwrap().as_densities().unwrap();
        assert!(Arc::ptr_eq(original, shared));
        assert_eq!(copy.ground_to_excited_tdms().unwrap().len(), 2);
    }

    #[test]
    fn reset_only_removes_derived_quantities() {
        let mut properties: Properties = Properties::new();
        properties.set_state_diffdms(vec![Array2::eye(2)]);
        properties.set_oscillator_strengths(array![0.1]);
        properties.set_transition_dipole_moments(array![[0.1, 0.0, 0.0]]);
        assert_eq!(
            properties.keys(),
            vec!["oscillator_strengths", "state_diffdms", "transition_dipole_moments"]
        );

        properties.reset_derived();
        assert_eq!(properties.keys(), vec!["state_diffdms"]);
        assert_eq!(properties.len(), 1);

        properties.reset();
        assert!(properties.is_empty());
    }

    #[test]
    fn take_removes_the_entry() {
        let mut properties: Properties = Properties::new();
        properties.set_oscillator_strengths(array![0.5, 0.25]);
        let taken: Array1<f64> = properties
            .take("oscillator_strengths")
            .unwrap()
            .into_array1()
            .unwrap();
        assert_eq!(taken, array![0.5, 0.25]);
        assert!(properties.oscillator_strengths().is_none());
    }

    #[test]
    fn dipole_moment_of_a_single_state() {
        let mut properties: Properties = Properties::new();
        assert!(properties.transition_dipole_moment(0).is_none());

        properties.set_transition_dipole_moments(array![[0.1, 0.2, 0.3], [0.0, -1.0, 0.5]]);
        properties.set_state_dipole_moments(array![[1.0, 2.0, 2.0]]);
        let dip = properties.transition_dipole_moment(1).unwrap();
        assert_eq!((dip.x, dip.y, dip.z), (0.0, -1.0, 0.5));
        assert_eq!(properties.state_dipole_moment(0).unwrap().norm(), 3.0);

        // Indices beyond the last state give nothing.
        assert!(properties.transition_dipole_moment(2).is_none());
        assert!(properties.state_dipole_moment(1).is_none());
    }
}
