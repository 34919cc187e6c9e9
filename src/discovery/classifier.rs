//! Pain point classification from free text
//!
//! Case-insensitive substring matching against a fixed keyword list per tag.
//! Short keywords ("ai") match inside longer words; that looseness is part
//! of the heuristic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Customer pain point themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PainPointTag {
    Scalability,
    Latency,
    DataSilos,
    OperationalOverhead,
    CostPressure,
    GovernanceSharing,
    AdvancedAnalytics,
}

impl PainPointTag {
    pub const ALL: [PainPointTag; 7] = [
        PainPointTag::Scalability,
        PainPointTag::Latency,
        PainPointTag::DataSilos,
        PainPointTag::OperationalOverhead,
        PainPointTag::CostPressure,
        PainPointTag::GovernanceSharing,
        PainPointTag::AdvancedAnalytics,
    ];

    /// Keywords that trigger this tag
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            PainPointTag::Scalability => &["scale", "growth", "volume", "amount", "petabyte", "terabyte"],
            PainPointTag::Latency => &["time", "slow", "wait", "delay", "latency", "real-time"],
            PainPointTag::DataSilos => &["silo", "fragment", "disparate", "multiple", "source", "single source"],
            PainPointTag::OperationalOverhead => &["manage", "maintenance", "overhead", "admin", "operate"],
            PainPointTag::CostPressure => &["cost", "expensive", "save", "budget", "finance"],
            PainPointTag::GovernanceSharing => &[
                "compliance", "secure", "govern", "protect", "risk", "share", "collaboration",
            ],
            PainPointTag::AdvancedAnalytics => &["ai", "machine learning", "model", "predict", "forecast"],
        }
    }

    /// Pain point statement presented to the customer
    pub fn statement(&self) -> &'static str {
        match self {
            PainPointTag::Scalability => "Inability to scale infrastructure to meet growing data volumes efficiently.",
            PainPointTag::Latency => "Data latency and performance bottlenecks delaying critical business insights.",
            PainPointTag::DataSilos => "Fragmented data silos preventing a unified, single source of truth.",
            PainPointTag::OperationalOverhead => "High operational overhead and engineering time wasted on database maintenance.",
            PainPointTag::CostPressure => "Unpredictable and escalating legacy infrastructure costs.",
            PainPointTag::GovernanceSharing => "Difficulty securely sharing governed data internally or externally.",
            PainPointTag::AdvancedAnalytics => "Current architecture is unable to support advanced ML/AI workloads.",
        }
    }
}

/// Source of pain point tags. The valuation engine never depends on this.
pub trait TextClassifier {
    fn classify_text(&self, text: &str) -> BTreeSet<PainPointTag>;
}

/// Fixed keyword matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl TextClassifier for KeywordClassifier {
    fn classify_text(&self, text: &str) -> BTreeSet<PainPointTag> {
        let lowered = text.to_lowercase();
        PainPointTag::ALL
            .iter()
            .copied()
            .filter(|tag| tag.keywords().iter().any(|kw| lowered.contains(kw)))
            .collect()
    }
}
