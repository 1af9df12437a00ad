use crate::defaults::{
    PRINT_PROPERTIES, STATE_PROPERTIES, STATE_TO_STATE_PROPERTIES, TRANSITION_PROPERTIES,
};
use crate::error::PropertyError;
use crate::excited_states::logging::print_excited_state_properties;
use crate::excited_states::{
    check_state_property_method, oscillator_strengths, state_dipole_moments,
    state_to_state_energies, state_to_state_transition_dipole_moments,
    transition_dipole_moments, DensityFlags, DensityProvider, ExcitedStates,
};
use crate::io::PropertiesConfig;
use crate::method::AdcMethod;
use derive_builder::Builder;
use log::{debug, info};
use ndarray::prelude::*;

/// Computes the dipole moments of all excited states and attaches them to the states.
/// The difference densities are requested from the provider if they are missing.
pub fn attach_state_properties<P: DensityProvider + ?Sized>(
    state: &mut ExcitedStates,
    provider: &P,
    method: Option<&AdcMethod>,
) -> Result<(), PropertyError> {
    let method: AdcMethod = method.copied().unwrap_or(state.method);
    if state.properties.state_dipole_moments().is_some() {
        // Moments that are already attached are never handed out for a refused method.
        check_state_property_method(&method)?;
        debug!("state dipole moments are already present");
        return Ok(());
    }
    if state.properties.state_diffdms().is_none() {
        info!("{: <30} {}", "state densities for:", method);
        provider.attach_state_densities(state, DensityFlags::STATE_DIFFDM, &method)?;
    }
    let moments: Array2<f64> = state_dipole_moments(state, Some(&method))?;
    state.properties.set_state_dipole_moments(moments);
    Ok(())
}

/// Computes the transition dipole moments and oscillator strengths between the ground
/// state and all excited states and attaches them to the states. The transition
/// densities are requested from the provider if they are missing.
pub fn attach_transition_properties<P: DensityProvider + ?Sized>(
    state: &mut ExcitedStates,
    provider: &P,
    method: Option<&AdcMethod>,
) -> Result<(), PropertyError> {
    if state.properties.transition_dipole_moments().is_some()
        && state.properties.oscillator_strengths().is_some()
    {
        debug!("transition properties are already present");
        return Ok(());
    }
    let method: AdcMethod = method.copied().unwrap_or(state.method);
    if state.properties.ground_to_excited_tdms().is_none() {
        info!("{: <30} {}", "transition densities for:", method);
        provider.attach_state_densities(state, DensityFlags::GROUND_TO_EXCITED_TDM, &method)?;
    }
    let tr_dipoles: Array2<f64> = transition_dipole_moments(state)?;
    let f: Array1<f64> = oscillator_strengths(tr_dipoles.view(), state.eigenvalues.view())?;
    state.properties.set_transition_dipole_moments(tr_dipoles);
    state.properties.set_oscillator_strengths(f);
    Ok(())
}

/// Computes the transition dipole moments and oscillator strengths between all pairs of
/// excited states and attaches them to the states.
pub fn attach_state_to_state_properties<P: DensityProvider + ?Sized>(
    state: &mut ExcitedStates,
    provider: &P,
    method: Option<&AdcMethod>,
) -> Result<(), PropertyError> {
    if state
        .properties
        .state_to_state_transition_dipole_moments()
        .is_some()
        && state.properties.state_to_state_oscillator_strengths().is_some()
    {
        debug!("state-to-state transition properties are already present");
        return Ok(());
    }
    let method: AdcMethod = method.copied().unwrap_or(state.method);
    if state.properties.state_to_state_tdms().is_none() {
        info!("{: <30} {}", "state-to-state densities for:", method);
        provider.attach_state_densities(state, DensityFlags::STATE_TO_STATE_TDM, &method)?;
    }
    let tr_dipoles: Array2<f64> = state_to_state_transition_dipole_moments(state)?;
    let energies: Array1<f64> = state_to_state_energies(state.eigenvalues.view());
    let f: Array1<f64> = oscillator_strengths(tr_dipoles.view(), energies.view())?;
    state
        .properties
        .set_state_to_state_transition_dipole_moments(tr_dipoles);
    state.properties.set_state_to_state_oscillator_strengths(f);
    Ok(())
}

/// Computes state and transition properties and attaches them to a copy of the states.
/// The states that are passed in are not modified. The copy shares all densities with
/// the original.
/// * `transition_properties` compute the ground to excited state transition properties
/// * `state_properties` compute the properties of the excited states
/// * `method` the method to use for the property calculation, defaults to the method of the states
pub fn attach_properties<P: DensityProvider + ?Sized>(
    state: &ExcitedStates,
    provider: &P,
    transition_properties: bool,
    state_properties: bool,
    method: Option<&AdcMethod>,
) -> Result<ExcitedStates, PropertyError> {
    let mut state: ExcitedStates = state.clone();
    if state_properties {
        attach_state_properties(&mut state, provider, method)?;
    }
    if transition_properties {
        attach_transition_properties(&mut state, provider, method)?;
    }
    Ok(state)
}

/// Selection of the property groups that should be computed. An instance can be created
/// with the associated builder:
/// ```
/// use adc_properties::excited_states::PropertyRequestBuilder;
///
/// let request = PropertyRequestBuilder::default()
///     .state_properties(false)
///     .state_to_state_properties(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct PropertyRequest {
    #[builder(default = "TRANSITION_PROPERTIES")]
    pub transition_properties: bool,
    #[builder(default = "STATE_PROPERTIES")]
    pub state_properties: bool,
    #[builder(default = "STATE_TO_STATE_PROPERTIES")]
    pub state_to_state_properties: bool,
    #[builder(default, setter(strip_option))]
    pub method: Option<AdcMethod>,
    /// Log a table of all computed properties.
    #[builder(default = "PRINT_PROPERTIES")]
    pub print_properties: bool,
}

/// Creates the request from the `[properties]` section of the configuration.
/// The method label is parsed here, so that an unknown method fails before any
/// computation starts.
impl TryFrom<&PropertiesConfig> for PropertyRequest {
    type Error = PropertyError;

    fn try_from(config: &PropertiesConfig) -> Result<Self, Self::Error> {
        let method: Option<AdcMethod> = config
            .method
            .as_deref()
            .map(str::parse)
            .transpose()?;
        Ok(Self {
            transition_properties: config.transition_properties,
            state_properties: config.state_properties,
            state_to_state_properties: config.state_to_state_properties,
            method,
            print_properties: config.print_properties,
        })
    }
}

impl PropertyRequest {
    /// Computes all requested property groups on a copy of the states.
    pub fn run<P: DensityProvider + ?Sized>(
        &self,
        state: &ExcitedStates,
        provider: &P,
    ) -> Result<ExcitedStates, PropertyError> {
        let method: Option<&AdcMethod> = self.method.as_ref();
        let mut state: ExcitedStates = attach_properties(
            state,
            provider,
            self.transition_properties,
            self.state_properties,
            method,
        )?;
        if self.state_to_state_properties {
            attach_state_to_state_properties(&mut state, provider, method)?;
        }
        if self.print_properties {
            print_excited_state_properties(&state);
        }
        Ok(state)
    }
}
