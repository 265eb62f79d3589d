//! Configuration management for `cipherscope-core`.
//!
//! This module defines the data structures for classifier rule tables and
//! handles serialization/deserialization of YAML configurations, along with
//! utilities for loading and validating them. The YAML shape mirrors the
//! engine types one-to-one so a tuned table can be dropped in without code
//! changes.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

use cipherscope_engine::classify::{CipherFamily, Comparison, FamilyRule, Threshold};

use crate::errors::CipherscopeError;

static DEFAULT_CONFIG: OnceCell<AnalysisConfig> = OnceCell::new();

/// Cipher-family verdicts as they appear in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyName {
    Monoalphabetic,
    Polyalphabetic,
    HighEntropy,
    Uncertain,
}

impl From<FamilyName> for CipherFamily {
    fn from(name: FamilyName) -> Self {
        match name {
            FamilyName::Monoalphabetic => CipherFamily::Monoalphabetic,
            FamilyName::Polyalphabetic => CipherFamily::Polyalphabetic,
            FamilyName::HighEntropy => CipherFamily::HighEntropy,
            FamilyName::Uncertain => CipherFamily::Uncertain,
        }
    }
}

/// A single threshold check as written in YAML, e.g. `below: 4.2` or
/// `at_least: 4.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdConfig {
    Above(f64),
    AtLeast(f64),
    Below(f64),
    AtMost(f64),
}

impl ThresholdConfig {
    fn value(&self) -> f64 {
        match *self {
            ThresholdConfig::Above(v)
            | ThresholdConfig::AtLeast(v)
            | ThresholdConfig::Below(v)
            | ThresholdConfig::AtMost(v) => v,
        }
    }

    fn to_threshold(self) -> Threshold {
        match self {
            ThresholdConfig::Above(v) => Threshold::new(Comparison::Above, v),
            ThresholdConfig::AtLeast(v) => Threshold::new(Comparison::AtLeast, v),
            ThresholdConfig::Below(v) => Threshold::new(Comparison::Below, v),
            ThresholdConfig::AtMost(v) => Threshold::new(Comparison::AtMost, v),
        }
    }
}

/// One classification rule: a verdict guarded by threshold checks on the
/// two statistics. Omitted check lists default to empty, which always
/// match, so a catch-all rule is a bare `family:` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassifierRule {
    pub family: FamilyName,
    #[serde(default, with = "serde_yml::with::singleton_map_recursive")]
    pub entropy: Vec<ThresholdConfig>,
    #[serde(default, with = "serde_yml::with::singleton_map_recursive")]
    pub ioc: Vec<ThresholdConfig>,
}

impl ClassifierRule {
    fn to_rule(&self) -> FamilyRule {
        FamilyRule {
            family: self.family.into(),
            entropy: self.entropy.iter().map(|t| t.to_threshold()).collect(),
            ioc: self.ioc.iter().map(|t| t.to_threshold()).collect(),
        }
    }
}

/// Classifier settings: the rule table, in evaluation order.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub rules: Vec<ClassifierRule>,
}

/// Represents the top-level configuration structure for Cipherscope.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub classifier: ClassifierConfig,
}

impl AnalysisConfig {
    /// Loads a classifier configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom classifier rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AnalysisConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_classifier(&config)?;
        info!(
            "Loaded {} classifier rules from file {}.",
            config.classifier.rules.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the default classifier rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        let config = DEFAULT_CONFIG.get_or_try_init(|| -> Result<AnalysisConfig> {
            debug!("Loading default classifier rules from embedded string...");
            let default_yaml = include_str!("../config/default_rules.yaml");
            let config: AnalysisConfig = serde_yml::from_str(default_yaml)
                .context("Failed to parse default classifier rules")?;
            validate_classifier(&config)?;
            debug!(
                "Loaded {} default classifier rules.",
                config.classifier.rules.len()
            );
            Ok(config)
        })?;
        Ok(config.clone())
    }

    /// Converts the configured table into engine rules, preserving order.
    pub fn classifier_rules(&self) -> Vec<FamilyRule> {
        self.classifier
            .rules
            .iter()
            .map(ClassifierRule::to_rule)
            .collect()
    }
}

/// Validates classifier table integrity (non-empty, finite thresholds).
fn validate_classifier(config: &AnalysisConfig) -> Result<(), CipherscopeError> {
    if config.classifier.rules.is_empty() {
        return Err(CipherscopeError::EmptyClassifierTable);
    }

    for (index, rule) in config.classifier.rules.iter().enumerate() {
        for threshold in rule.entropy.iter().chain(rule.ioc.iter()) {
            if !threshold.value().is_finite() {
                return Err(CipherscopeError::InvalidClassifierRule(
                    index,
                    format!("threshold value {} is not finite", threshold.value()),
                ));
            }
        }
    }

    Ok(())
}
