//! Tunables for the site behavior layer.
//!
//! Defaults mirror the shipped page. The web frontend may override a subset
//! from `data-*` attributes; see [`SiteConfig::apply_override`].

use crate::error::{SiteError, SiteResult};
use std::str::FromStr;

/// Upper bound on particles. The link pass is all-pairs, so this stays fixed.
pub const PARTICLE_LIMIT: usize = 80;
/// Distance below which two particles are joined.
pub const LINK_DISTANCE: f32 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Hard cap on particles regardless of viewport width.
    pub max_particles: usize,
    /// One particle per this many CSS pixels of viewport width.
    pub px_per_particle: f32,
    /// Pairs closer than this are joined by a line.
    pub link_distance: f32,
    pub notify_lifetime_ms: u32,
    pub notify_exit_ms: u32,
    /// Live notifications kept on screen; older ones are evicted.
    pub notify_cap: usize,
    pub submit_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub resize_debounce_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            max_particles: PARTICLE_LIMIT,
            px_per_particle: 20.0,
            link_distance: LINK_DISTANCE,
            notify_lifetime_ms: 5000,
            notify_exit_ms: 300,
            notify_cap: 4,
            submit_delay_ms: 2000,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
            resize_debounce_ms: 150,
        }
    }
}

impl SiteConfig {
    /// Names of the keys accepted by [`SiteConfig::apply_override`].
    pub const OVERRIDE_KEYS: [&'static str; 4] = [
        "maxParticles",
        "submitDelayMs",
        "notifyMs",
        "notifyCap",
    ];

    /// Apply a single override, keyed by its dataset (camelCase) name.
    ///
    /// Unknown keys are ignored. Values that fail to parse, a particle cap
    /// above [`PARTICLE_LIMIT`] and a zero notification cap are rejected and
    /// leave the config untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> SiteResult<()> {
        match key {
            "maxParticles" => {
                let max: usize = parse(key, value)?;
                if max > PARTICLE_LIMIT {
                    return Err(invalid(key, value));
                }
                self.max_particles = max;
            }
            "submitDelayMs" => self.submit_delay_ms = parse(key, value)?,
            "notifyMs" => self.notify_lifetime_ms = parse(key, value)?,
            "notifyCap" => {
                let cap: usize = parse(key, value)?;
                if cap == 0 {
                    return Err(invalid(key, value));
                }
                self.notify_cap = cap;
            }
            _ => {}
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> SiteResult<T> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> SiteError {
    SiteError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
