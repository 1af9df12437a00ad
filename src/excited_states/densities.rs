use crate::error::PropertyError;
use crate::excited_states::ExcitedStates;
use crate::method::AdcMethod;
use log::debug;
use ndarray::prelude::*;
use std::sync::Arc;

/// Selects the kinds of one-particle densities that a [DensityProvider] should attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityFlags {
    pub state_diffdm: bool,
    pub ground_to_excited_tdm: bool,
    pub state_to_state_tdm: bool,
}

impl DensityFlags {
    /// Only the difference densities of the excited states.
    pub const STATE_DIFFDM: Self = Self {
        state_diffdm: true,
        ground_to_excited_tdm: false,
        state_to_state_tdm: false,
    };

    /// Only the ground to excited state transition densities.
    pub const GROUND_TO_EXCITED_TDM: Self = Self {
        state_diffdm: false,
        ground_to_excited_tdm: true,
        state_to_state_tdm: false,
    };

    /// Only the transition densities between pairs of excited states.
    pub const STATE_TO_STATE_TDM: Self = Self {
        state_diffdm: false,
        ground_to_excited_tdm: false,
        state_to_state_tdm: true,
    };
}

/// Computes one-particle densities of an excited state calculation and attaches them
/// to the `properties` of the states.
/// Implementations are free to recompute densities that are already present. The
/// property routines of this crate only call the provider for densities that are missing.
pub trait DensityProvider {
    fn attach_state_densities(
        &self,
        state: &mut ExcitedStates,
        flags: DensityFlags,
        method: &AdcMethod,
    ) -> Result<(), PropertyError>;
}

/// A [DensityProvider] for densities that were computed elsewhere, e.g. by the solver
/// itself. The densities are shared with every state they are attached to.
#[derive(Debug, Clone, Default)]
pub struct DensityCache {
    state_diffdms: Option<Arc<Vec<Array2<f64>>>>,
    ground_to_excited_tdms: Option<Arc<Vec<Array2<f64>>>>,
    state_to_state_tdms: Option<Arc<Vec<Array2<f64>>>>,
}

impl DensityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state_diffdms(mut self, diffdms: Vec<Array2<f64>>) -> Self {
        self.state_diffdms = Some(Arc::new(diffdms));
        self
    }

    pub fn with_ground_to_excited_tdms(mut self, tdms: Vec<Array2<f64>>) -> Self {
        self.ground_to_excited_tdms = Some(Arc::new(tdms));
        self
    }

    pub fn with_state_to_state_tdms(mut self, tdms: Vec<Array2<f64>>) -> Self {
        self.state_to_state_tdms = Some(Arc::new(tdms));
        self
    }

    fn attach(
        state: &mut ExcitedStates,
        name: &'static str,
        densities: Option<&Arc<Vec<Array2<f64>>>>,
        expected: usize,
    ) -> Result<(), PropertyError> {
        let densities: &Arc<Vec<Array2<f64>>> =
            densities.ok_or(PropertyError::DensityUnavailable(name))?;
        if densities.len() != expected {
            return Err(PropertyError::LengthMismatch {
                what: name,
                expected,
                found: densities.len(),
            });
        }
        debug!("{: <30} {} densities attached", name, densities.len());
        state
            .properties
            .set_shared_densities(name, Arc::clone(densities));
        Ok(())
    }
}

impl DensityProvider for DensityCache {
    fn attach_state_densities(
        &self,
        state: &mut ExcitedStates,
        flags: DensityFlags,
        _method: &AdcMethod,
    ) -> Result<(), PropertyError> {
        let n_states: usize = state.n_states();
        if flags.state_diffdm {
            Self::attach(state, "state_diffdms", self.state_diffdms.as_ref(), n_states)?;
        }
        if flags.ground_to_excited_tdm {
            Self::attach(
                state,
                "ground_to_excited_tdms",
                self.ground_to_excited_tdms.as_ref(),
                n_states,
            )?;
        }
        if flags.state_to_state_tdm {
            Self::attach(
                state,
                "state_to_state_tdms",
                self.state_to_state_tdms.as_ref(),
                n_states * n_states.saturating_sub(1) / 2,
            )?;
        }
        Ok(())
    }
}
