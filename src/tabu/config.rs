//! Tabu Search configuration.

use crate::error::PartitionError;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_partition::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(2000)
///     .with_tabu_tenure(15)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 2000);
/// assert_eq!(config.tabu_tenure, 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Maximum number of move keys held in the tabu list. Zero disables
    /// the tabu memory entirely (plain steepest descent with forced moves).
    pub tabu_tenure: usize,
    /// Whether to use aspiration criterion (override tabu if the move
    /// produces a new global best).
    pub aspiration: bool,
    /// Maximum iterations without improvement before stopping.
    pub max_no_improve: usize,
    /// Random seed (None draws one from the thread RNG).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_tenure: 100,
            aspiration: true,
            max_no_improve: 200,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (length of the tabu list).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets maximum iterations without improvement.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.max_iterations == 0 {
            return Err(PartitionError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.max_no_improve == 0 {
            return Err(PartitionError::InvalidConfig(
                "max_no_improve must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 100);
        assert!(config.aspiration);
        assert_eq!(config.max_no_improve, 200);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_tabu_tenure(0)
            .with_aspiration(false)
            .with_max_no_improve(10)
            .with_seed(123);

        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.tabu_tenure, 0);
        assert!(!config.aspiration);
        assert_eq!(config.max_no_improve, 10);
        assert_eq!(config.seed, Some(123));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = TabuConfig::default().with_max_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(PartitionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_no_improve() {
        let config = TabuConfig::default().with_max_no_improve(0);
        assert!(config.validate().is_err());
    }
}
