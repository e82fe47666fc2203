//! Scheduler configuration loaded from `tapesched.toml`.
//!
//! [`SchedulerConfig`] holds the machine pool size, the production rate and
//! the default log level. Values missing from the file fall back to defaults;
//! command-line flags override whatever the file says.

use serde::Deserialize;
use std::path::Path;

use crate::error::SchedulerError;
use crate::scheduler::GreedyScheduler;

/// File looked up in the working directory by [`SchedulerConfig::load`].
pub const CONFIG_FILE: &str = "tapesched.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchedulerConfig {
    /// Number of production machines in the pool.
    #[serde(default = "default_num_machines")]
    pub num_machines: usize,

    /// Order units processed per unit of time.
    #[serde(default = "default_production_rate")]
    pub production_rate: f64,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_num_machines() -> usize {
    5
}

fn default_production_rate() -> f64 {
    10.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            num_machines: default_num_machines(),
            production_rate: default_production_rate(),
            log_level: default_log_level(),
        }
    }
}

impl SchedulerConfig {
    /// Loads `tapesched.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self, SchedulerError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SchedulerError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<SchedulerConfig>(&contents)?)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, num_machines: Option<usize>, production_rate: Option<f64>) -> Self {
        if let Some(n) = num_machines {
            self.num_machines = n;
        }
        if let Some(rate) = production_rate {
            self.production_rate = rate;
        }
        self
    }

    /// Rejects a pool without machines or a non-positive production rate.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        GreedyScheduler::new(self.num_machines, self.production_rate).map(drop)
    }
}
