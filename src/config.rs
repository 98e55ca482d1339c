//! Session-independent evaluation settings.
//!
//! Catalog label vocabularies differ between institutions, so what counts as
//! "major" credit is a configurable predicate rather than a fixed string.

use serde::{Deserialize, Serialize};

use crate::models::Classification;

/// Predicate deciding which classifications count toward major credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MajorRule {
    /// Exactly the listed classifications.
    Classifications(Vec<Classification>),
    /// Any classification whose English or Korean label contains the needle
    /// (`"Major"`, `"전공"`).
    LabelContains(String),
}

impl Default for MajorRule {
    fn default() -> Self {
        MajorRule::Classifications(vec![
            Classification::RequiredMajor,
            Classification::ElectiveMajor,
        ])
    }
}

impl MajorRule {
    /// Whether the classification counts toward major credit.
    pub fn matches(&self, classification: Classification) -> bool {
        match self {
            MajorRule::Classifications(list) => list.contains(&classification),
            MajorRule::LabelContains(needle) => {
                !needle.is_empty()
                    && (classification.label().contains(needle.as_str())
                        || classification.korean_label().contains(needle.as_str()))
            }
        }
    }
}

/// Settings for credit aggregation and schedule validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Which classifications form the major bucket.
    pub major_rule: MajorRule,
    /// Minimum major share of total credits before a balance warning (0.0..=1.0).
    pub min_major_share: f64,
    /// Credits required for graduation.
    pub graduation_credits: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            major_rule: MajorRule::default(),
            min_major_share: 0.5,
            graduation_credits: 130,
        }
    }
}

impl ScheduleConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; missing fields take defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.min_major_share = config.min_major_share.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Sets the major predicate.
    pub fn with_major_rule(mut self, rule: MajorRule) -> Self {
        self.major_rule = rule;
        self
    }

    /// Sets the minimum major share, clamped to `0.0..=1.0`.
    pub fn with_min_major_share(mut self, share: f64) -> Self {
        self.min_major_share = if share.is_nan() { 0.0 } else { share.clamp(0.0, 1.0) };
        self
    }

    /// Sets the graduation credit total.
    pub fn with_graduation_credits(mut self, credits: u32) -> Self {
        self.graduation_credits = credits;
        self
    }
}
