use crate::constants::{AU_TO_DEBYE, HARTREE_TO_EV};
use crate::excited_states::{state_pairs, ExcitedStates};
use log::info;
use nalgebra::Vector3;
use ndarray::prelude::*;

/// Logs a table with all properties that are attached to the excited states.
pub fn print_excited_state_properties(state: &ExcitedStates) {
    info!("{:^80}", "");
    info!("{: ^80}", format!("Excited state properties ({})", state.method));
    info!("{:-^80}", "");
    print_transition_properties(state);
    print_state_dipole_moments(state);
    print_state_to_state_properties(state);
}

fn print_transition_properties(state: &ExcitedStates) {
    let (tr_dipoles, f): (ArrayView2<f64>, ArrayView1<f64>) = match (
        state.properties.transition_dipole_moments(),
        state.properties.oscillator_strengths(),
    ) {
        (Some(tr_dipoles), Some(f)) => (tr_dipoles, f),
        _ => return,
    };
    debug_assert_eq!(f.len(), state.n_states());
    debug_assert_eq!(tr_dipoles.nrows(), state.n_states());
    info!(
        "{: <5} {: >12} {: >10} {: >12} {: >10} {: >10} {: >10}",
        "State", "Energy / au", "eV", "osc. str.", "µ_x", "µ_y", "µ_z"
    );
    info!("{:-^75}", "");
    for (n, ((energy, fi), dip)) in state
        .eigenvalues
        .iter()
        .zip(f.iter())
        .zip(tr_dipoles.rows())
        .enumerate()
    {
        info!(
            "{: >5} {:>12.8} {:>10.4} {:>12.8} {:>10.6} {:>10.6} {:>10.6}",
            n + 1,
            energy,
            energy * HARTREE_TO_EV,
            fi,
            dip[0],
            dip[1],
            dip[2]
        );
    }
    info!("{:-^75}", "");
}

fn print_state_dipole_moments(state: &ExcitedStates) {
    let n_moments: usize = match state.properties.state_dipole_moments() {
        Some(moments) => moments.nrows(),
        None => return,
    };
    debug_assert_eq!(n_moments, state.n_states());
    info!("{: <45} ", "State dipole moments: all quantities are in a.u.");
    info!(
        "{: <5} {: >12} {: >12} {: >12} {: >14}",
        "State", "µ_x", "µ_y", "µ_z", "|µ| / Debye"
    );
    info!("{:-^59}", "");
    for n in 0..n_moments {
        let dip: Vector3<f64> = match state.properties.state_dipole_moment(n) {
            Some(dip) => dip,
            None => continue,
        };
        info!(
            "{: >5} {:>12.8} {:>12.8} {:>12.8} {:>14.6}",
            n + 1,
            dip.x,
            dip.y,
            dip.z,
            dip.norm() * AU_TO_DEBYE
        );
    }
    info!("{:-^59}", "");
}

fn print_state_to_state_properties(state: &ExcitedStates) {
    let (tr_dipoles, f): (ArrayView2<f64>, ArrayView1<f64>) = match (
        state.properties.state_to_state_transition_dipole_moments(),
        state.properties.state_to_state_oscillator_strengths(),
    ) {
        (Some(tr_dipoles), Some(f)) => (tr_dipoles, f),
        _ => return,
    };
    let pairs: Vec<(usize, usize)> = state_pairs(state.n_states());
    debug_assert_eq!(f.len(), pairs.len());
    debug_assert_eq!(tr_dipoles.nrows(), pairs.len());
    info!("{: <45} ", "State-to-state transitions");
    info!(
        "{: >4} {: >4} {: >12} {: >10} {: >10} {: >10}",
        "from", "to", "osc. str.", "µ_x", "µ_y", "µ_z"
    );
    info!("{:-^55}", "");
    for ((i, j), (fi, dip)) in pairs
        .into_iter()
        .zip(f.iter().zip(tr_dipoles.rows()))
    {
        info!(
            "{: >4} {: >4} {:>12.8} {:>10.6} {:>10.6} {:>10.6}",
            i + 1,
            j + 1,
            fi,
            dip[0],
            dip[1],
            dip[2]
        );
    }
    info!("{:-^55}", "");
}
