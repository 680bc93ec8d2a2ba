//! Metric mutation profiles
//!
//! Each profiled agent type lists the metric fields the simulator refreshes
//! on every tick, with ranges sized to read plausibly on a node card
//! (document counts around a steady rate, a handful of flagged items, token
//! volumes as formatted strings). Unprofiled types are left untouched.

use rand::Rng;
use serde_json::Value;

/// One simulated metric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricField {
    /// Integer count: `base + rand(0..spread)`
    Count {
        key: &'static str,
        base: u64,
        spread: u64,
    },
    /// Integer count rendered with a unit suffix, e.g. `"65 docs"`
    CountSuffixed {
        key: &'static str,
        base: u64,
        spread: u64,
        suffix: &'static str,
    },
    /// One-decimal float rendered with a unit suffix, e.g. `"15.3K"`:
    /// `base + rand_float(0..spread)`
    Formatted {
        key: &'static str,
        base: f64,
        spread: f64,
        suffix: &'static str,
    },
}

impl MetricField {
    /// Key this field writes under
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            MetricField::Count { key, .. }
            | MetricField::CountSuffixed { key, .. }
            | MetricField::Formatted { key, .. } => key,
        }
    }

    /// Draw a fresh value
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match *self {
            MetricField::Count { base, spread, .. } => Value::from(base + rng.gen_range(0..spread)),
            MetricField::CountSuffixed {
                base,
                spread,
                suffix,
                ..
            } => {
                let n = base + rng.gen_range(0..spread);
                Value::from(format!("{n}{suffix}"))
            }
            MetricField::Formatted {
                base,
                spread,
                suffix,
                ..
            } => {
                let v = base + rng.gen_range(0.0..spread);
                Value::from(format!("{v:.1}{suffix}"))
            }
        }
    }
}

/// The fields refreshed for one agent type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub fields: &'static [MetricField],
}

impl MetricProfile {
    /// Sample every field as `(key, value)` pairs
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<(&'static str, Value)> {
        self.fields.iter().map(|f| (f.key(), f.sample(rng))).collect()
    }
}

macro_rules! profile {
    ($($field:expr),+ $(,)?) => {
        MetricProfile { fields: &[$($field),+] }
    };
}

/// Mutation profile for an agent type slug, if one is defined
#[must_use]
pub fn profile_for(slug: &str) -> Option<MetricProfile> {
    use MetricField::{Count, CountSuffixed, Formatted};
    let profile = match slug {
        "document-intake" => profile![Count {
            key: "documents",
            base: 1200,
            spread: 100,
        }],
        "document-classifier" => profile![Count {
            key: "classified",
            base: 1150,
            spread: 50,
        }],
        "smart-ocr" => profile![Count {
            key: "processed",
            base: 1150,
            spread: 50,
        }],
        "data-extractor" => profile![Formatted {
            key: "fieldsExtracted",
            base: 14.0,
            spread: 2.0,
            suffix: "K",
        }],
        "business-validator" => profile![
            Formatted {
                key: "processed",
                base: 1.0,
                spread: 0.5,
                suffix: "M tokens",
            },
            CountSuffixed {
                key: "flagged",
                base: 60,
                spread: 10,
                suffix: " docs",
            },
        ],
        "fraud-detector" => profile![Count {
            key: "flagged",
            base: 20,
            spread: 10,
        }],
        "compliance-check" => profile![Count {
            key: "violations",
            base: 3,
            spread: 3,
        }],
        "smart-router" => profile![Count {
            key: "approvalQueue",
            base: 80,
            spread: 20,
        }],
        "approval-workflow" => profile![Count {
            key: "pending",
            base: 80,
            spread: 20,
        }],
        "erp-updater" => profile![
            Count {
                key: "updated",
                base: 1850,
                spread: 50,
            },
            Count {
                key: "errors",
                base: 5,
                spread: 5,
            },
        ],
        "notification-center" => profile![Count {
            key: "sent",
            base: 220,
            spread: 20,
        }],
        _ => return None,
    };
    Some(profile)
}
