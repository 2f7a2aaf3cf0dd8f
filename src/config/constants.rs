//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file-backed SQLite, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://superheroes.db?mode=rwc";

/// Default upper bound for pooled database connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Hero powers
// =============================================================================

pub const STRENGTH_STRONG: &str = "Strong";
pub const STRENGTH_WEAK: &str = "Weak";
pub const STRENGTH_AVERAGE: &str = "Average";

/// All valid strength values, in the order they are reported to clients
pub const VALID_STRENGTHS: &[&str] = &[STRENGTH_STRONG, STRENGTH_WEAK, STRENGTH_AVERAGE];

// =============================================================================
// Validation
// =============================================================================

/// Minimum power description length, counted in characters after trimming
pub const MIN_DESCRIPTION_LENGTH: usize = 20;
