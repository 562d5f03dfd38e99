//! Module containing the literal text and tags that make up the reader's
//! observable input/output contract.

/// Written before every attempt, without a trailing newline
pub const PROMPT: &str = "Specify vehicle: ";

// vehicle type tags
pub const ICE: &str = "ice";
pub const EV: &str = "ev";
pub const VEH_TYPES: [&str; 2] = [ICE, EV];

/// Tokens in one vehicle spec line: type, year, name, capacity, consumption
pub const SPEC_TOKEN_COUNT: usize = 5;

pub const INVALID_TYPE_MSG: &str = "Invalid vehicle type. Ice or ev only, please.";
pub const NON_INTEGER_MSG: &str = "Non-integer value provided for integer field. Please try again.";
/// Appended to a sentence that carries no terminal period of its own
pub const RETRY_SUFFIX: &str = " Please try again.";

pub const ICE_NON_POSITIVE_MSG: &str =
    "Fuel tank capacity and fuel consumption must both be positive";
pub const EV_NON_POSITIVE_MSG: &str =
    "Battery capacity and energy consumption must both be positive";
