//! Discovery brief: pain points, value driver map and follow-up questions
//!
//! Works over scraped text through the `TextClassifier` interface and is
//! independent of the valuation engine.

mod classifier;

pub use classifier::{KeywordClassifier, PainPointTag, TextClassifier};

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::valuation::ValueCategory;

/// Characters of the transcript quoted by the fallback pain point
const FALLBACK_EXCERPT_CHARS: usize = 100;

/// Question asked in every brief
pub const COMPELLING_EVENT_QUESTION: &str =
    "What is the compelling event driving this modernization initiative right now?";

/// A customer pain point; `tag` is `None` for the general fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub tag: Option<PainPointTag>,
    pub statement: String,
}

/// One row of the value driver map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDriver {
    pub pain_point: String,
    pub value_lever: String,
    pub financial_driver: ValueCategory,
    pub metric_impact: String,
}

/// One pain point per detected tag, or a single general one quoting the text
pub fn extract_pain_points<C: TextClassifier + ?Sized>(classifier: &C, transcript: &str) -> Vec<PainPoint> {
    let tags = classifier.classify_text(transcript);
    debug!("classified transcript into {} tags", tags.len());

    if tags.is_empty() {
        let excerpt: String = transcript.chars().take(FALLBACK_EXCERPT_CHARS).collect();
        return vec![PainPoint {
            tag: None,
            statement: format!("General data architecture modernization: {}...", excerpt),
        }];
    }

    tags.into_iter()
        .map(|tag| PainPoint {
            tag: Some(tag),
            statement: tag.statement().to_string(),
        })
        .collect()
}

/// Map each pain point to the lever and financial driver that addresses it
pub fn value_driver_map(pain_points: &[PainPoint]) -> Vec<ValueDriver> {
    pain_points
        .iter()
        .map(|pp| {
            let (lever, driver, impact) = match pp.tag {
                Some(PainPointTag::Latency) => (
                    "Elastic Compute (scale up/down instantly)",
                    ValueCategory::RevenueEnablement,
                    "Faster simulations & quicker time-to-market",
                ),
                Some(PainPointTag::OperationalOverhead) | Some(PainPointTag::CostPressure) => (
                    "Managed Service & Micro-partitioning",
                    ValueCategory::CostReduction,
                    "Lower storage footprint & zero tuning labor",
                ),
                Some(PainPointTag::DataSilos) | Some(PainPointTag::GovernanceSharing) => (
                    "Secure Data Sharing (no copy)",
                    ValueCategory::RiskReduction,
                    "Eliminated file-transfer ingestion overhead & stronger governance",
                ),
                Some(PainPointTag::Scalability) | Some(PainPointTag::AdvancedAnalytics) => (
                    "In-platform ML / Unlimited Concurrency",
                    ValueCategory::RevenueEnablement,
                    "Unblocked quant teams & higher model throughput",
                ),
                None => (
                    "Data Platform Consolidation",
                    ValueCategory::CostReduction,
                    "Consolidated tool sprawl",
                ),
            };
            ValueDriver {
                pain_point: pp.statement.clone(),
                value_lever: lever.to_string(),
                financial_driver: driver,
                metric_impact: impact.to_string(),
            }
        })
        .collect()
}

/// Discovery questions for the next customer conversation
pub fn followup_questions(pain_points: &[PainPoint], primary_use_case: &str) -> Vec<String> {
    let has = |tag: PainPointTag| pain_points.iter().any(|pp| pp.tag == Some(tag));
    let mut questions = Vec::new();

    if has(PainPointTag::Latency) {
        questions.push(format!(
            "Can you quantify the business impact when {} workloads time out? (e.g., lost productivity, delayed campaigns)",
            primary_use_case
        ));
    }
    if has(PainPointTag::OperationalOverhead) {
        questions.push(
            "How many FTE hours per week are currently dedicated just to 'keeping the lights on' (tuning, backups)?"
                .to_string(),
        );
    }
    if has(PainPointTag::DataSilos) {
        questions.push(
            "If data sharing was instantaneous and secure, what new business capabilities would that unlock?"
                .to_string(),
        );
    }

    questions.push(COMPELLING_EVENT_QUESTION.to_string());
    questions
}

/// Structured discovery output over a set of named source documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryBrief {
    pub use_case: String,
    /// Names of the documents the transcript was built from
    pub sources: Vec<String>,
    pub pain_points: Vec<PainPoint>,
    pub value_drivers: Vec<ValueDriver>,
    pub next_questions: Vec<String>,
}

impl DiscoveryBrief {
    /// Build a brief from named text facts (e.g. scraped case studies)
    pub fn build<C: TextClassifier + ?Sized>(
        classifier: &C,
        facts: &BTreeMap<String, String>,
        use_case: &str,
    ) -> Self {
        let transcript = facts.values().map(String::as_str).collect::<Vec<_>>().join("\n");
        let pain_points = extract_pain_points(classifier, &transcript);
        let value_drivers = value_driver_map(&pain_points);
        let next_questions = followup_questions(&pain_points, use_case);

        Self {
            use_case: use_case.to_string(),
            sources: facts.keys().cloned().collect(),
            pain_points,
            value_drivers,
            next_questions,
        }
    }
}
