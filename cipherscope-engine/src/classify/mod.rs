// cipherscope-engine/src/classify/mod.rs
//! Heuristic cipher-family classification from letter statistics.
//!
//! A classifier is an ordered list of [`FamilyRule`]s. Each rule pairs a
//! verdict with threshold checks on entropy and index of coincidence; the
//! first rule whose checks all hold wins, and a sample matching no rule is
//! reported as [`CipherFamily::Uncertain`]. The built-in table encodes the
//! usual reading of the two statistics: monoalphabetic substitution keeps
//! the skewed single-letter distribution of the plaintext, polyalphabetic
//! substitution flattens it, and anything hotter than flattened English
//! looks compressed or keyed with something stronger.

use alloc::vec;
use alloc::vec::Vec;

/// Verdict produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherFamily {
    /// Skewed letter distribution, e.g. Caesar or simple substitution.
    Monoalphabetic,
    /// Flattened letter distribution, e.g. Vigenère with a long key.
    Polyalphabetic,
    /// Hotter than flattened natural language.
    HighEntropy,
    /// No rule matched.
    Uncertain,
}

impl CipherFamily {
    /// The human-readable verdict label.
    pub fn label(&self) -> &'static str {
        match self {
            CipherFamily::Monoalphabetic => "Monoalphabetic-like",
            CipherFamily::Polyalphabetic => "Polyalphabetic-like",
            CipherFamily::HighEntropy => "High-entropy / compressed-like",
            CipherFamily::Uncertain => "Uncertain",
        }
    }
}

impl core::fmt::Display for CipherFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// How an observed statistic is compared against a rule threshold.
///
/// Strictness matters at the boundaries: an index of coincidence of
/// exactly 0.06 must not satisfy an `Above(0.06)` check, while an entropy
/// of exactly 4.0 must satisfy an `AtLeast(4.0)` one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Above,
    AtLeast,
    Below,
    AtMost,
}

/// A single threshold check on one statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub cmp: Comparison,
    pub value: f64,
}

impl Threshold {
    pub fn new(cmp: Comparison, value: f64) -> Self {
        Threshold { cmp, value }
    }

    /// Whether `observed` satisfies this check.
    pub fn matches(&self, observed: f64) -> bool {
        match self.cmp {
            Comparison::Above => observed > self.value,
            Comparison::AtLeast => observed >= self.value,
            Comparison::Below => observed < self.value,
            Comparison::AtMost => observed <= self.value,
        }
    }
}

/// One classification rule: a verdict guarded by threshold checks.
///
/// Every listed check must hold for the rule to match. An empty check list
/// always holds, which makes a catch-all rule possible.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyRule {
    pub family: CipherFamily,
    pub entropy: Vec<Threshold>,
    pub ioc: Vec<Threshold>,
}

impl FamilyRule {
    /// Whether the rule matches the observed statistics.
    pub fn matches(&self, entropy_bits: f64, ioc: f64) -> bool {
        self.entropy.iter().all(|t| t.matches(entropy_bits))
            && self.ioc.iter().all(|t| t.matches(ioc))
    }
}

/// The built-in classification table, in evaluation order.
///
/// The constants are fixed empirical heuristics and are reproduced exactly
/// so verdicts stay stable across releases.
pub fn default_rules() -> Vec<FamilyRule> {
    vec![
        FamilyRule {
            family: CipherFamily::Monoalphabetic,
            entropy: vec![Threshold::new(Comparison::Below, 4.05)],
            ioc: vec![Threshold::new(Comparison::Above, 0.06)],
        },
        FamilyRule {
            family: CipherFamily::Polyalphabetic,
            entropy: vec![Threshold::new(Comparison::AtLeast, 4.1)],
            ioc: vec![
                Threshold::new(Comparison::AtLeast, 0.045),
                Threshold::new(Comparison::AtMost, 0.06),
            ],
        },
        FamilyRule {
            family: CipherFamily::HighEntropy,
            entropy: vec![Threshold::new(Comparison::Above, 4.3)],
            ioc: vec![],
        },
    ]
}

/// Evaluates `rules` in order against the observed statistics and returns
/// the first matching verdict, or [`CipherFamily::Uncertain`] when none
/// match.
pub fn classify(entropy_bits: f64, ioc: f64, rules: &[FamilyRule]) -> CipherFamily {
    rules
        .iter()
        .find(|rule| rule.matches(entropy_bits, ioc))
        .map(|rule| rule.family)
        .unwrap_or(CipherFamily::Uncertain)
}

/// Classifies with the built-in table.
pub fn infer_family(entropy_bits: f64, ioc: f64) -> CipherFamily {
    classify(entropy_bits, ioc, &default_rules())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(infer_family(3.9, 0.07), CipherFamily::Monoalphabetic);
        assert_eq!(infer_family(4.2, 0.05), CipherFamily::Polyalphabetic);
        assert_eq!(infer_family(4.5, 0.01), CipherFamily::HighEntropy);
        assert_eq!(infer_family(3.0, 0.02), CipherFamily::Uncertain);
    }

    #[test]
    fn test_polyalphabetic_bounds_are_inclusive() {
        assert_eq!(infer_family(4.1, 0.045), CipherFamily::Polyalphabetic);
        assert_eq!(infer_family(4.2, 0.06), CipherFamily::Polyalphabetic);
        // Rule order decides the overlap with the high-entropy region.
        assert_eq!(infer_family(4.35, 0.05), CipherFamily::Polyalphabetic);
    }

    #[test]
    fn test_high_entropy_region() {
        assert_eq!(infer_family(4.31, 0.01), CipherFamily::HighEntropy);
        // A skewed index of coincidence cannot veto the entropy rule.
        assert_eq!(infer_family(4.5, 0.07), CipherFamily::HighEntropy);
    }

    #[test]
    fn test_boundaries_are_strict_where_specified() {
        // Exactly 0.06 does not clear the Above(0.06) gate, and 4.0 sits
        // under the AtLeast(4.1) gate.
        assert_eq!(infer_family(4.0, 0.06), CipherFamily::Uncertain);
        // Exactly 4.05 does not clear the Below(4.05) gate.
        assert_eq!(infer_family(4.05, 0.07), CipherFamily::Uncertain);
        // Exactly 4.3 does not clear the Above(4.3) gate.
        assert_eq!(infer_family(4.3, 0.01), CipherFamily::Uncertain);
    }

    #[test]
    fn test_uncertain_fallback() {
        assert_eq!(infer_family(0.0, 0.0), CipherFamily::Uncertain);
        assert_eq!(infer_family(3.9, 0.055), CipherFamily::Uncertain);
        assert_eq!(classify(4.0, 0.07, &[]), CipherFamily::Uncertain);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = vec![
            FamilyRule {
                family: CipherFamily::HighEntropy,
                entropy: vec![],
                ioc: vec![],
            },
            FamilyRule {
                family: CipherFamily::Monoalphabetic,
                entropy: vec![],
                ioc: vec![],
            },
        ];
        assert_eq!(classify(1.0, 0.01, &rules), CipherFamily::HighEntropy);
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(CipherFamily::Monoalphabetic.label(), "Monoalphabetic-like");
        assert_eq!(CipherFamily::Polyalphabetic.label(), "Polyalphabetic-like");
        assert_eq!(
            CipherFamily::HighEntropy.label(),
            "High-entropy / compressed-like"
        );
        assert_eq!(CipherFamily::Uncertain.label(), "Uncertain");
    }
}
