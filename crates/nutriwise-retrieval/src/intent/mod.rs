//! Query-intent detection and intent-driven metadata boosting.
//!
//! Intent scores accumulate additively from substring triggers; each
//! trigger group fires at most once per query. Metadata boosts promote
//! documents whose type matches the detected intent.

use chrono::Utc;
use tracing::debug;

use nutriwise_core::document::{parse_iso_datetime, Document};
use nutriwise_core::intent::{Intent, IntentScores};

const NUTRIENT_TERMS: &[&str] = &[
    "vitamin",
    "mineral",
    "protein",
    "carbohydrate",
    "fat",
    "omega",
    "calcium",
    "iron",
    "zinc",
    "magnesium",
    "potassium",
];

const FOOD_SOURCE_TERMS: &[&str] = &["source", "food", "contain", "rich in", "high in"];

const HEALTH_TERMS: &[&str] = &[
    "deficiency",
    "health",
    "condition",
    "disease",
    "symptom",
    "prevent",
    "improve",
    "boost",
    "benefit",
];

const RECIPE_TERMS: &[&str] = &["recipe", "make", "cook", "prepare", "meal"];

const COMPARISON_TERMS: &[&str] = &["vs", "versus", "compared to", "difference", "better"];

const DIET_RESTRICTION_TERMS: &[&str] = &[
    "vegan",
    "vegetarian",
    "keto",
    "paleo",
    "gluten",
    "lactose",
    "allergy",
    "intolerance",
    "diet",
];

const GENERAL_NUTRITION_TERMS: &[&str] = &["nutrition", "nutrient", "healthy eating"];

/// Authoritative source domains boosted for health-condition queries.
const AUTHORITY_DOMAINS: &[&str] = &["nih.gov", "cdc.gov", "who.int", "mayoclinic"];

/// Maximum document age (days) for the recency metadata boost.
const RECENT_DOC_MAX_AGE_DAYS: i64 = 365;

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

/// Classifies queries into intent scores and derives per-document boosts.
#[derive(Debug, Clone, Default)]
pub struct IntentEngine;

impl IntentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Detect the intent profile of a query.
    ///
    /// Each trigger group contributes its increment once (any-match, not
    /// per term). A query with no triggers falls back to
    /// `general_nutrition = 0.5` so at least one intent is non-zero.
    pub fn classify(&self, query: &str) -> IntentScores {
        let q = query.to_lowercase();
        let mut scores = IntentScores::default();

        if contains_any(&q, NUTRIENT_TERMS) {
            scores.add(Intent::NutrientInfo, 0.3);
        }
        if contains_any(&q, FOOD_SOURCE_TERMS) {
            scores.add(Intent::FoodSources, 0.3);
        }
        if contains_any(&q, HEALTH_TERMS) {
            scores.add(Intent::HealthCondition, 0.2);
        }
        if contains_any(&q, RECIPE_TERMS) {
            scores.add(Intent::Recipe, 0.4);
        }
        if contains_any(&q, COMPARISON_TERMS) {
            scores.add(Intent::Comparison, 0.3);
        }
        if contains_any(&q, DIET_RESTRICTION_TERMS) {
            scores.add(Intent::DietaryRestriction, 0.3);
        }
        if contains_any(&q, GENERAL_NUTRITION_TERMS) {
            scores.add(Intent::GeneralNutrition, 0.5);
        }

        if scores.is_all_zero() {
            scores.general_nutrition = 0.5;
        }

        debug!(?scores, "classified query intent");
        scores
    }

    /// Additive metadata boost for one document under the given intent.
    ///
    /// Rules are not mutually exclusive; every matching rule adds to the
    /// boost, starting from 0.
    pub fn metadata_boost(&self, document: &Document, scores: &IntentScores) -> f64 {
        let meta = &document.metadata;
        let mut boost = 0.0;

        if let Some(doc_type) = meta.doc_type.as_deref() {
            if (doc_type == "vitamin" || doc_type == "mineral") && scores.nutrient_info > 0.0 {
                boost += 0.3;
            }
            if doc_type == "recipe" && scores.recipe > 0.0 {
                boost += 0.4;
            }
            if doc_type == "diet_advice" && scores.general_nutrition > 0.0 {
                boost += 0.2;
            }
        }

        if scores.health_condition > 0.0 {
            if let Some(source) = meta.source.as_deref() {
                if contains_any(source, AUTHORITY_DOMAINS) {
                    boost += 0.3;
                }
            }
        }

        if let Some(date) = meta.date.as_deref().and_then(parse_iso_datetime) {
            let age_days = (Utc::now() - date).num_days();
            if age_days < RECENT_DOC_MAX_AGE_DAYS {
                boost += 0.1;
            }
        }

        boost
    }
}
