use crate::constants::{AMBIENT_COUNT, SPARKLES_PER_MOVE, SPARKLE_CAP};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("attribute `{name}` has invalid value `{value}`")]
    InvalidAttribute { name: &'static str, value: String },
    #[error("sparkles per move must be at least 1")]
    EmptyBurst,
    #[error("sparkle cap {cap} is smaller than one burst of {burst}")]
    CapBelowBurst { cap: usize, burst: usize },
}

/// Scene sizing and seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub ambient_count: usize,
    pub sparkles_per_move: usize,
    /// Upper bound on live sparkles; `None` leaves growth unbounded.
    pub sparkle_cap: Option<usize>,
    /// Fixed RNG seed; `None` seeds from the platform entropy source.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ambient_count: AMBIENT_COUNT,
            sparkles_per_move: SPARKLES_PER_MOVE,
            sparkle_cap: Some(SPARKLE_CAP),
            seed: None,
        }
    }
}

pub const ATTR_AMBIENT_COUNT: &str = "data-ambient-count";
pub const ATTR_SPARKLES_PER_MOVE: &str = "data-sparkles-per-move";
pub const ATTR_SPARKLE_CAP: &str = "data-sparkle-cap";
pub const ATTR_SEED: &str = "data-seed";

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sparkles_per_move == 0 {
            return Err(ConfigError::EmptyBurst);
        }
        if let Some(cap) = self.sparkle_cap {
            if cap < self.sparkles_per_move {
                return Err(ConfigError::CapBelowBurst {
                    cap,
                    burst: self.sparkles_per_move,
                });
            }
        }
        Ok(())
    }

    /// Build a config from optional element attributes, falling back to the
    /// defaults for anything absent. `data-sparkle-cap` accepts `0` or `none`
    /// to disable the cap.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = parse_attr(&lookup, ATTR_AMBIENT_COUNT)? {
            cfg.ambient_count = v;
        }
        if let Some(v) = parse_attr(&lookup, ATTR_SPARKLES_PER_MOVE)? {
            cfg.sparkles_per_move = v;
        }
        if let Some(raw) = lookup(ATTR_SPARKLE_CAP) {
            let raw = raw.trim();
            cfg.sparkle_cap = if raw.eq_ignore_ascii_case("none") {
                None
            } else {
                match raw.parse::<usize>() {
                    Ok(0) => None,
                    Ok(n) => Some(n),
                    Err(_) => {
                        return Err(ConfigError::InvalidAttribute {
                            name: ATTR_SPARKLE_CAP,
                            value: raw.to_string(),
                        })
                    }
                }
            };
        }
        cfg.seed = parse_attr(&lookup, ATTR_SEED)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_attr<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let parsed = raw.trim().parse::<T>();
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(ConfigError::InvalidAttribute { name, value: raw }),
    }
}
