//! Application state.

use irr_analytics::IrrSolver;

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// Holds configuration only; every request solves independently.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// IRR solver with the configured root finder settings.
    pub solver: IrrSolver,

    /// Longest accepted cash-flow series.
    pub max_periods: usize,
}

impl AppState {
    /// Create state with default settings.
    pub fn new() -> Self {
        Self::from_config(&ServerConfig::default())
    }

    /// Create state from server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            solver: IrrSolver::new().with_config(config.solver),
            max_periods: config.max_periods,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irr_math::solvers::RootFinderConfig;

    #[test]
    fn test_from_config() {
        let config = ServerConfig {
            max_periods: 12,
            solver: RootFinderConfig::exact(),
            ..ServerConfig::default()
        };
        let state = AppState::from_config(&config);

        assert_eq!(state.max_periods, 12);
        assert_eq!(state.solver.config().imaginary_tolerance, 0.0);
    }

    #[test]
    fn test_default_equals_new() {
        assert_eq!(AppState::default().max_periods, AppState::new().max_periods);
    }
}
