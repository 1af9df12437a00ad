// CODATA 2018
pub const HARTREE_TO_EV: f64 = 27.211386245988;
// dipole moment: 1 e*a0 in Debye
pub const AU_TO_DEBYE: f64 = 2.541746473;
