use serde::{Deserialize, Serialize};

/// The closed set of query-purpose categories used to bias scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    NutrientInfo,
    FoodSources,
    HealthCondition,
    Recipe,
    GeneralNutrition,
    Comparison,
    DietaryRestriction,
}

impl Intent {
    /// All intents, in a fixed order.
    pub const ALL: [Intent; 7] = [
        Intent::NutrientInfo,
        Intent::FoodSources,
        Intent::HealthCondition,
        Intent::Recipe,
        Intent::GeneralNutrition,
        Intent::Comparison,
        Intent::DietaryRestriction,
    ];
}

/// Per-intent confidence scores for one query.
///
/// Scores accumulate additively from keyword triggers and are not
/// normalized to sum to 1. Created fresh per query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentScores {
    pub nutrient_info: f64,
    pub food_sources: f64,
    pub health_condition: f64,
    pub recipe: f64,
    pub general_nutrition: f64,
    pub comparison: f64,
    pub dietary_restriction: f64,
}

impl IntentScores {
    pub fn get(&self, intent: Intent) -> f64 {
        match intent {
            Intent::NutrientInfo => self.nutrient_info,
            Intent::FoodSources => self.food_sources,
            Intent::HealthCondition => self.health_condition,
            Intent::Recipe => self.recipe,
            Intent::GeneralNutrition => self.general_nutrition,
            Intent::Comparison => self.comparison,
            Intent::DietaryRestriction => self.dietary_restriction,
        }
    }

    pub fn add(&mut self, intent: Intent, amount: f64) {
        let slot = match intent {
            Intent::NutrientInfo => &mut self.nutrient_info,
            Intent::FoodSources => &mut self.food_sources,
            Intent::HealthCondition => &mut self.health_condition,
            Intent::Recipe => &mut self.recipe,
            Intent::GeneralNutrition => &mut self.general_nutrition,
            Intent::Comparison => &mut self.comparison,
            Intent::DietaryRestriction => &mut self.dietary_restriction,
        };
        *slot += amount;
    }

    /// True when no trigger has fired yet.
    pub fn is_all_zero(&self) -> bool {
        Intent::ALL.iter().all(|&i| self.get(i) == 0.0)
    }

    /// The highest-scoring intent (first in `Intent::ALL` order on ties).
    pub fn dominant(&self) -> Intent {
        let mut best = Intent::NutrientInfo;
        let mut best_score = self.get(best);
        for &intent in &Intent::ALL[1..] {
            let score = self.get(intent);
            if score > best_score {
                best = intent;
                best_score = score;
            }
        }
        best
    }
}
