// PROPERTY SELECTION
// ground to excited state transition dipole moments and oscillator strengths
pub const TRANSITION_PROPERTIES: bool = true;
// dipole moments of the excited states
pub const STATE_PROPERTIES: bool = true;
// transition properties between pairs of excited states
pub const STATE_TO_STATE_PROPERTIES: bool = false;
// log a table of the computed properties
pub const PRINT_PROPERTIES: bool = true;

// LOGGING
// 2: trace, 1: debug, 0: info, -1: warn, -2: error
pub const VERBOSE: i8 = 0;
