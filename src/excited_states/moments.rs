use crate::error::PropertyError;
use crate::excited_states::ExcitedStates;
use crate::method::AdcMethod;
use crate::operators::{contract_densities, product_trace, DipoleIntegrals};
use itertools::Itertools;
use ndarray::prelude::*;
use ndarray::Zip;

/// The transition dipole moments between the ground state and all excited states
/// (in a.u.). Row i holds the x, y, z components for the excited state i:
///   µ_ik = tr(D_k T_i)
pub fn transition_dipole_moments(state: &ExcitedStates) -> Result<Array2<f64>, PropertyError> {
    let tdms: &[Array2<f64>] = state
        .properties
        .ground_to_excited_tdms()
        .ok_or(PropertyError::MissingTransitionDensities)?;
    let dipole_integrals: &DipoleIntegrals =
        state.reference_state.operator_integrals.electric_dipole()?;
    contract_densities(dipole_integrals, tdms)
}

/// Computes the oscillator strength from the excitation energies, E, and the transition dipole
/// moments, µ, according to:
/// f = 2/3 * |E| * |µ|^2
/// This holds for ground to excited state as well as for excited to excited state transitions.
pub fn oscillator_strengths(
    tr_dipoles: ArrayView2<f64>,
    energies: ArrayView1<f64>,
) -> Result<Array1<f64>, PropertyError> {
    if tr_dipoles.nrows() != energies.len() {
        return Err(PropertyError::LengthMismatch {
            what: "energies",
            expected: tr_dipoles.nrows(),
            found: energies.len(),
        });
    }
    Ok(Zip::from(tr_dipoles.rows())
        .and(&energies)
        .map_collect(|dip, e| 2.0 / 3.0 * dip.dot(&dip) * e.abs()))
}

/// The dipole moment of the correlated ground state (in a.u.). The reference density is
/// corrected by the MP(2) difference density. The nuclei carry the opposite charge of the
/// electrons, hence their contribution is subtracted.
pub fn ground_state_dipole_moment(state: &ExcitedStates) -> Result<Array1<f64>, PropertyError> {
    let dipole_integrals: &DipoleIntegrals =
        state.reference_state.operator_integrals.electric_dipole()?;
    let p_ref: Array2<f64> = state.reference_state.density_matrix();
    let p_mp2: ArrayView2<f64> = state.ground_state.mp2_diffdm.view();

    let mut electronic: Array1<f64> = Array1::zeros([dipole_integrals.len()]);
    for (value, component) in electronic.iter_mut().zip(dipole_integrals.iter()) {
        *value = product_trace(component.view(), p_ref.view())?
            + product_trace(component.view(), p_mp2)?;
    }
    Ok(electronic - &state.reference_state.nuclear_dipole)
}

/// Fails for methods whose state dipole moments cannot be computed. The ground state
/// is always corrected by the MP(2) density. It is not clear whether this is also the
/// right choice for ADC(0) and ADC(1), so both are refused.
pub fn check_state_property_method(method: &AdcMethod) -> Result<(), PropertyError> {
    if method.property_method().level() < 2 {
        return Err(PropertyError::NotImplemented(format!(
            "{} state dipole moments are",
            method.name()
        )));
    }
    Ok(())
}

/// The dipole moment of each excited state (in a.u.). These are absolute moments, so the
/// dipole moment of the ground state is added to the contribution of each difference
/// density.
/// If no method is given, the method of the excited states is used.
pub fn state_dipole_moments(
    state: &ExcitedStates,
    method: Option<&AdcMethod>,
) -> Result<Array2<f64>, PropertyError> {
    let diffdms: &[Array2<f64>] = state
        .properties
        .state_diffdms()
        .ok_or(PropertyError::MissingStateDensities)?;
    let dipole_integrals: &DipoleIntegrals =
        state.reference_state.operator_integrals.electric_dipole()?;
    check_state_property_method(method.unwrap_or(&state.method))?;

    let gs_dip_moment: Array1<f64> = ground_state_dipole_moment(state)?;
    let mut moments: Array2<f64> = contract_densities(dipole_integrals, diffdms)?;
    moments += &gs_dip_moment;
    Ok(moments)
}

/// All pairs (i, j) of excited states with i < j, ordered by i and then by j. The
/// state-to-state transition densities are expected in this order.
pub fn state_pairs(n_states: usize) -> Vec<(usize, usize)> {
    (0..n_states).tuple_combinations().collect()
}

/// The transition dipole moments between all pairs of excited states (in a.u.). Row p
/// belongs to the p-th pair of [state_pairs].
pub fn state_to_state_transition_dipole_moments(
    state: &ExcitedStates,
) -> Result<Array2<f64>, PropertyError> {
    let tdms: &[Array2<f64>] = state
        .properties
        .state_to_state_tdms()
        .ok_or(PropertyError::MissingStateToStateDensities)?;
    let dipole_integrals: &DipoleIntegrals =
        state.reference_state.operator_integrals.electric_dipole()?;
    let n_pairs: usize = state_pairs(state.n_states()).len();
    if tdms.len() != n_pairs {
        return Err(PropertyError::LengthMismatch {
            what: "state-to-state transition densities",
            expected: n_pairs,
            found: tdms.len(),
        });
    }
    contract_densities(dipole_integrals, tdms)
}

/// Excitation energies E_j - E_i for all pairs of excited states.
pub fn state_to_state_energies(eigenvalues: ArrayView1<f64>) -> Array1<f64> {
    state_pairs(eigenvalues.len())
        .into_iter()
        .map(|(i, j)| eigenvalues[j] - eigenvalues[i])
        .collect()
}
