//! Simulation configuration.
//!
//! Selects which policies run (and in what order) and whether the driver
//! validates input. Loadable from JSON; every field is optional.
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::models::Policy;
//!
//! let config = SimulationConfig::from_json(r#"{"policies": ["sjf", "fcfs"]}"#).unwrap();
//! assert_eq!(config.policies, vec![Policy::Sjf, Policy::Fcfs]);
//! assert!(config.validate);
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::models::Policy;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Policies to run, in order.
    pub policies: Vec<Policy>,
    /// Whether to validate the process set before running.
    pub validate: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policies: Policy::ALL.to_vec(),
            validate: true,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration (all policies, validation on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Policy>) -> Self {
        self.policies = policies.into_iter().collect();
        self
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a configuration from a JSON source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
