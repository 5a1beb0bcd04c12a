//! Solver constants and runtime configuration defaults

// Default values for configurable parameters
/// Default upper bound on the spread between piece areas
pub const DEFAULT_DEFECT_BOUND: usize = 0;

/// Default lower bound on the spread between piece areas
pub const DEFAULT_DEFECT_FLOOR: usize = 0;

/// Default minimum piece count; a one-piece dissection is the board itself
pub const DEFAULT_MIN_PIECES: usize = 2;

/// Default worker count; zero resolves to one thread per available core
pub const DEFAULT_WORKERS: usize = 0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 1_000;
