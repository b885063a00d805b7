//! Algorithm configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use vrp_tailor_core::models::problem::DEFAULT_SMOOTHING_FACTOR;
use vrp_tailor_core::solver::DEFAULT_MAX_ITERATIONS;
use vrp_tailor_core::solver::objectives::{DEFAULT_UNASSIGNED_WEIGHT, UnassignedPenalty};
use vrp_tailor_core::solver::search::{DEFAULT_POOL_SIZE, DEFAULT_RUIN_RATIO, RuinRecreateSearch};

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies search configuration.
    pub search: Option<SearchConfig>,
    /// Specifies objective configuration.
    pub objective: Option<ObjectiveConfig>,
    /// Specifies locality smoothing configuration.
    pub smoothing: Option<SmoothingConfig>,
}

/// A search configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// A share range of jobs removed from the current best solution. Default is `[0.1, 0.3]`.
    pub ruin_ratio: Option<(f64, f64)>,
    /// Amount of candidates per iteration. Default is 4.
    pub pool_size: Option<usize>,
    /// A random seed, the search is not repeatable when omitted.
    pub seed: Option<u64>,
    /// Max amount of iterations. Default is 1000.
    pub max_iterations: Option<usize>,
}

/// An objective configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveConfig {
    /// A weight of unassigned jobs penalty. Default is 0.5.
    pub unassigned_weight: Option<f64>,
}

/// A locality smoothing configuration, used when smoothing is enabled from command line.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothingConfig {
    /// A factor of square root terms. Default is 20.
    pub factor: Option<f64>,
}

impl Config {
    /// Creates search engine from configuration.
    pub fn create_search(&self) -> RuinRecreateSearch {
        let search = self.search.as_ref();

        RuinRecreateSearch::new(
            search.and_then(|search| search.pool_size).unwrap_or(DEFAULT_POOL_SIZE),
            search.and_then(|search| search.ruin_ratio).unwrap_or(DEFAULT_RUIN_RATIO),
        )
    }

    /// Returns unassigned jobs penalty.
    pub fn get_penalty(&self) -> UnassignedPenalty {
        let weight = self.objective.as_ref().and_then(|objective| objective.unassigned_weight);

        UnassignedPenalty::new(weight.unwrap_or(DEFAULT_UNASSIGNED_WEIGHT))
    }

    /// Returns locality smoothing factor.
    pub fn get_smoothing_factor(&self) -> f64 {
        self.smoothing.as_ref().and_then(|smoothing| smoothing.factor).unwrap_or(DEFAULT_SMOOTHING_FACTOR)
    }

    /// Returns max amount of iterations.
    pub fn get_max_iterations(&self) -> usize {
        self.search.as_ref().and_then(|search| search.max_iterations).unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    /// Returns random seed.
    pub fn get_seed(&self) -> Option<u64> {
        self.search.as_ref().and_then(|search| search.seed)
    }

    fn validate(self) -> Result<Self, String> {
        if let Some((min, max)) = self.search.as_ref().and_then(|search| search.ruin_ratio) {
            if !(0. ..=1.).contains(&min) || !(0. ..=1.).contains(&max) || min > max {
                return Err(format!("ruin ratio should be a range within [0, 1], got [{min}, {max}]"));
            }
        }

        if self.search.as_ref().and_then(|search| search.pool_size).is_some_and(|size| size == 0) {
            return Err("pool size should be greater than zero".to_string());
        }

        if let Some(weight) = self.objective.as_ref().and_then(|objective| objective.unassigned_weight) {
            if !weight.is_finite() || weight < 0. {
                return Err(format!("unassigned weight should be a non-negative number, got {weight}"));
            }
        }

        Ok(self)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader::<_, Config>(reader)
        .map_err(|err| format!("cannot deserialize config: '{err}'"))
        .and_then(Config::validate)
}

/// Reads config from file. A missing file means default config when the path was not
/// specified explicitly.
pub fn read_config_file(path: &str, is_explicit: bool) -> Result<Config, String> {
    match File::open(path) {
        Ok(file) => read_config(BufReader::new(file)),
        Err(err) if err.kind() == ErrorKind::NotFound && !is_explicit => Ok(Config::default()),
        Err(err) => Err(format!("cannot open algorithm config file '{path}': '{err}'")),
    }
}
