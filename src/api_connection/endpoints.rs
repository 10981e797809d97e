use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

pub const CATEGORY_RECOMMEND_PATH: &[&str] = &["recommend", "category"];
pub const MODE_RECOMMEND_PATH: &[&str] = &["recommend", "mode"];
pub const CHAT_PATH: &[&str] = &["chat"];
pub const RECIPE_DETAIL_PREFIX: &str = "recipe";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryRecommendRequest {
    pub category: String,
    pub ingredients: Vec<String>,
    pub persona: String,
    pub limit: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ModeRecommendRequest {
    pub mode: String,
    pub ingredients: Vec<String>,
    pub limit: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub user_name: String,
}

/// Recipe object as the backend sends it. Every field is optional. The
/// endpoints disagree on naming, so each known spelling has its own field
/// and the accessors below pick one.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendRecipe {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cooking_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub time_minutes: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub time: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub calories: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub protein: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub coverage: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub matched_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub matched: Option<u32>,
    #[serde(default)]
    pub matched_ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub missing_ingredients: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_ingredients: Option<u32>,
    #[serde(default)]
    pub trending: Option<bool>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub x_likes: Option<u32>,
    #[serde(default)]
    pub x_tip: Option<String>,
}

impl BackendRecipe {
    /// `cooking_time`, then `time_minutes`, then `time`.
    pub fn minutes(&self) -> Option<u32> {
        self.cooking_time.or(self.time_minutes).or(self.time)
    }

    /// `matched_count`, then `matched`.
    pub fn matched_total(&self) -> Option<u32> {
        self.matched_count.or(self.matched)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RecommendResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub input_ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub persona: Option<String>,
    #[serde(default)]
    pub recipes: Option<Vec<BackendRecipe>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub recipes: Option<Vec<BackendRecipe>>,
    #[serde(default)]
    pub ingredients_detected: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendDetailIngredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RecipeDetailResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub time: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cooking_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub time_minutes: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub calories: Option<u32>,
    #[serde(default)]
    pub ingredients: Option<Vec<BackendDetailIngredient>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RecipeDetailResponse {
    /// `time`, then `cooking_time`, then `time_minutes`.
    pub fn minutes(&self) -> Option<u32> {
        self.time.or(self.cooking_time).or(self.time_minutes)
    }
}

/// Accepts integers, floats, numeric strings and null. Floats are rounded and
/// negatives clamp to zero so the UI only ever sees non-negative counts.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(other) => {
            return Err(de::Error::custom(format!("expected a number, got {}", other)));
        }
    };
    Ok(number
        .filter(|n| n.is_finite())
        .map(|n| n.round().clamp(0.0, u32::MAX as f64) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_are_lenient() {
        let recipe: BackendRecipe = serde_json::from_value(json!({
            "name": "Bibimbap",
            "cooking_time": 24.6,
            "calories": "610",
            "matched_count": -3,
            "total_ingredients": null
        }))
        .unwrap();
        assert_eq!(recipe.minutes(), Some(25));
        assert_eq!(recipe.calories, Some(610));
        assert_eq!(recipe.matched_count, Some(0));
        assert_eq!(recipe.total_ingredients, None);
    }

    #[test]
    fn test_alternate_field_spellings() {
        let from_mode: BackendRecipe =
            serde_json::from_value(json!({"time_minutes": 15, "coverage": 80})).unwrap();
        assert_eq!(from_mode.minutes(), Some(15));
        assert_eq!(from_mode.coverage, Some(80));

        let from_chat: BackendRecipe =
            serde_json::from_value(json!({"time": 40, "matched": 2})).unwrap();
        assert_eq!(from_chat.minutes(), Some(40));
        assert_eq!(from_chat.matched_total(), Some(2));
    }

    #[test]
    fn test_two_spellings_in_one_recipe_keep_the_response() {
        let response: RecommendResponse = serde_json::from_value(json!({
            "recipes": [
                {"name": "A", "cooking_time": 30, "time": 45, "matched_count": 2, "matched": 5},
                {"name": "B", "time_minutes": 12, "time": 20}
            ]
        }))
        .unwrap();
        let recipes = response.recipes.unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].minutes(), Some(30));
        assert_eq!(recipes[0].matched_total(), Some(2));
        assert_eq!(recipes[1].minutes(), Some(12));
    }

    #[test]
    fn test_detail_with_two_time_spellings() {
        let detail: RecipeDetailResponse =
            serde_json::from_value(json!({"time": 25, "cooking_time": 40})).unwrap();
        assert_eq!(detail.minutes(), Some(25));
        assert!(detail.extra.is_empty());
    }

    #[test]
    fn test_non_numeric_count_is_rejected() {
        let parsed = serde_json::from_value::<BackendRecipe>(json!({"calories": [1, 2]}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_detail_keeps_unknown_fields() {
        let detail: RecipeDetailResponse = serde_json::from_value(json!({
            "name": "Japchae",
            "steps": ["soak noodles", "stir-fry"],
            "ingredients": [{"name": "당면", "amount": 200, "unit": "g"}]
        }))
        .unwrap();
        assert_eq!(detail.name.as_deref(), Some("Japchae"));
        assert!(detail.extra.contains_key("steps"));
        assert!(!detail.extra.contains_key("name"));
    }

    #[test]
    fn test_request_wire_shape() {
        let body = serde_json::to_value(CategoryRecommendRequest {
            category: "반찬".to_string(),
            ingredients: vec!["egg".to_string()],
            persona: "비건".to_string(),
            limit: 10,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"category": "반찬", "ingredients": ["egg"], "persona": "비건", "limit": 10})
        );
    }
}
