//! Spectroscopic properties of ADC excited states.
//!
//! The one-particle densities of an excited state calculation are contracted with the
//! dipole integrals of the reference to obtain transition dipole moments, oscillator
//! strengths and the dipole moments of the excited states. The results are attached
//! to a copy of the [ExcitedStates](excited_states::ExcitedStates).
//!
//! ```
//! use adc_properties::excited_states::{attach_properties, DensityCache, ExcitedStates};
//! use adc_properties::reference::{MpGroundState, ReferenceState};
//! use ndarray::prelude::*;
//! use std::sync::Arc;
//!
//! let reference = ReferenceState::new(
//!     array![1.0, 0.0],
//!     Some([
//!         array![[0.0, 1.0], [1.0, 0.0]],
//!         Array2::zeros([2, 2]),
//!         Array2::zeros([2, 2]),
//!     ]),
//!     array![0.0, 0.0, 0.0],
//! )
//! .unwrap();
//! let states = ExcitedStates::new(
//!     array![0.5],
//!     "adc2".parse().unwrap(),
//!     Arc::new(reference),
//!     Arc::new(MpGroundState::new(Array2::zeros([2, 2]))),
//! );
//! let densities = DensityCache::new()
//!     .with_ground_to_excited_tdms(vec![array![[0.0, 1.0], [0.0, 0.0]]]);
//!
//! let result = attach_properties(&states, &densities, true, false, None).unwrap();
//! let f = result.properties.oscillator_strengths().unwrap();
//! assert!((f[0] - 2.0 / 3.0 * 0.5).abs() < 1e-14);
//! ```

pub mod constants;
pub mod defaults;
pub mod error;
pub mod excited_states;
pub mod io;
pub mod method;
pub mod operators;
pub mod properties;
pub mod reference;

pub use error::PropertyError;
pub use excited_states::{attach_properties, ExcitedStates, PropertyRequest};
pub use method::AdcMethod;
