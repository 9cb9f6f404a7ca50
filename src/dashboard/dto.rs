use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Health profile as the dashboard renders it. Source-authoritative; the
/// client never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    pub goal: String,
    pub diseases: Vec<String>,
    pub recommended_calories: f64,
    pub activity_level: String,
}

/// Point-in-time calorie/nutrient read. No history is modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSnapshot {
    pub total_calories: f64,
    pub target_calories: f64,
    pub nutrients: NutrientTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub sodium: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub sugar: f64,
}

/// One recommended meal. Sequence order is display order, not a ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedFood {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<FoodNutrients>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodNutrients {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
}

/// Achievement badge. Created and mutated by the backend only; this side
/// re-orders for display without touching `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub status: BadgeStatus,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub achieved_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStatus {
    Achieved,
    Pending,
    Locked,
}

/// Composed dashboard view. An absent fragment failed to load and
/// degrades on its own; the others carry whatever data was available.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub health: Option<HealthProfile>,
    pub intake: Option<IntakeSnapshot>,
    pub recommendations: Option<Vec<RecommendedFood>>,
    pub badges: Option<Vec<Badge>>,
}

/// Fixed-message failure body for read operations.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
