//! Scoring weights and response-time expectations.
//!
//! `critical` is defined in both tables even though no builtin record uses
//! it yet — headroom for future scenarios, kept in the same enum vocabulary.

use crate::types::Difficulty;
use serde::{Deserialize, Serialize};

/// Per-difficulty scoring multiplier. Total over all four levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyWeightTable {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub critical: f64,
}

impl DifficultyWeightTable {
    pub fn weight(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Low => self.low,
            Difficulty::Medium => self.medium,
            Difficulty::High => self.high,
            Difficulty::Critical => self.critical,
        }
    }
}

/// Response-time expectations, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTimeTargets {
    /// Target for the first agent response.
    pub initial_minutes: u32,
    /// Target for any follow-up message.
    pub followup_minutes: u32,
    pub resolution_minutes: ResolutionTargets,
}

/// Per-difficulty resolution target. Harder scenarios get tighter targets
/// in the builtin data; that ordering is a property of the literals, not
/// something this type enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTargets {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl ResponseTimeTargets {
    pub fn resolution_minutes_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Low => self.resolution_minutes.low,
            Difficulty::Medium => self.resolution_minutes.medium,
            Difficulty::High => self.resolution_minutes.high,
            Difficulty::Critical => self.resolution_minutes.critical,
        }
    }
}
