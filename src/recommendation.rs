//! Recommendation adapter: the only place that speaks the backend's wire
//! vocabulary. Search calls always return a renderable result, chat calls
//! surface their errors, and detail lookups collapse failures into `None`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api_connection::connection::{ApiClient, ApiConnectionError};
use crate::api_connection::endpoints::{
    BackendRecipe, CategoryRecommendRequest, ChatRequest, ChatResponse, ModeRecommendRequest,
    RecipeDetailResponse, RecommendResponse, CATEGORY_RECOMMEND_PATH, CHAT_PATH,
    MODE_RECOMMEND_PATH, RECIPE_DETAIL_PREFIX,
};
use crate::catalog::{self, PersonaId, DEFAULT_CATEGORY, RECOMMENDATION_LIMIT};
use crate::config::ApiConfig;

const DEFAULT_DIFFICULTY: &str = "보통";

/// What the UI wants to search for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryIntent {
    pub ingredients: Vec<String>,
    pub persona: PersonaId,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub time_minutes: u32,
    pub difficulty: String,
    pub calories: u32,
    pub protein: u32,
    pub coverage: u32,
    pub matched_count: u32,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub total_ingredients: u32,
    pub emoji: String,
    pub trending: bool,
    pub x_likes: u32,
    pub x_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub message: String,
    pub recipes: Vec<RecipeCard>,
    pub category: String,
    pub input_ingredients: Vec<String>,
    pub persona: String,
    /// Set when the backend call failed and this is the fallback result.
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<RecipeCard>>,
    /// Ingredients the backend recognized in the message.
    #[serde(default)]
    pub ingredients_detected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DetailIngredient {
    pub name: String,
    /// Amounts come back as numbers or free text ("약간"), kept as text.
    pub amount: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub name: String,
    pub category: String,
    pub time_minutes: u32,
    pub difficulty: String,
    pub calories: u32,
    pub ingredients: Vec<DetailIngredient>,
    /// Backend-defined fields this client does not model.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Fills every missing backend field with its default so the UI never sees
/// an absent value.
pub fn normalize_recipe(raw: BackendRecipe, fallback_category: &str) -> RecipeCard {
    let minutes = raw.minutes();
    let matched = raw.matched_total();
    let name = raw.name.unwrap_or_default();
    let emoji = catalog::category_emoji(raw.category.as_deref().unwrap_or_default()).to_string();
    RecipeCard {
        id: name.clone(),
        name,
        category: raw.category.unwrap_or_else(|| fallback_category.to_string()),
        time_minutes: minutes.unwrap_or(0),
        difficulty: raw
            .difficulty
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        calories: raw.calories.unwrap_or(0),
        protein: raw.protein.unwrap_or(0),
        coverage: raw.coverage.unwrap_or(0),
        matched_count: matched.unwrap_or(0),
        matched_ingredients: raw.matched_ingredients.unwrap_or_default(),
        missing_ingredients: raw.missing_ingredients.unwrap_or_default(),
        total_ingredients: raw.total_ingredients.unwrap_or(0),
        emoji,
        trending: raw.trending.unwrap_or(false),
        x_likes: raw.x_likes.unwrap_or(0),
        x_tip: raw.x_tip.unwrap_or_default(),
    }
}

fn normalize_recipes(raw: Option<Vec<BackendRecipe>>, fallback_category: &str) -> Vec<RecipeCard> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|recipe| normalize_recipe(recipe, fallback_category))
        .collect()
}

fn normalize_detail(raw: RecipeDetailResponse) -> RecipeDetail {
    let minutes = raw.minutes();
    let ingredients = raw
        .ingredients
        .unwrap_or_default()
        .into_iter()
        .map(|ingredient| DetailIngredient {
            name: ingredient.name.unwrap_or_default(),
            amount: match ingredient.amount {
                None | Some(serde_json::Value::Null) => String::new(),
                Some(serde_json::Value::String(text)) => text,
                Some(other) => other.to_string(),
            },
            unit: ingredient.unit.unwrap_or_default(),
        })
        // Recipes without ingredient links come back as a single all-null entry.
        .filter(|ingredient| !ingredient.name.is_empty())
        .collect();
    RecipeDetail {
        name: raw.name.unwrap_or_default(),
        category: raw.category.unwrap_or_default(),
        time_minutes: minutes.unwrap_or(0),
        difficulty: raw
            .difficulty
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        calories: raw.calories.unwrap_or(0),
        ingredients,
        extra: raw.extra,
    }
}

/// Message shown when a category search could not reach the backend.
pub fn category_error_message(category: &str) -> String {
    format!("{} 레시피를 불러오는 중 오류가 발생했어요.", category)
}

fn degraded_result(message: String, category: &str, ingredients: &[String], persona: &str) -> RecommendationResult {
    RecommendationResult {
        message,
        recipes: Vec::new(),
        category: category.to_string(),
        input_ingredients: ingredients.to_vec(),
        persona: persona.to_string(),
        degraded: true,
    }
}

#[derive(Clone, Debug)]
pub struct RecommendationAdapter {
    client: ApiClient,
    user_name: String,
}

impl RecommendationAdapter {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiConnectionError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            user_name: config.user_name.clone(),
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Dispatches a UI intent: a selected category goes to category search,
    /// otherwise the legacy default-category search runs.
    pub async fn search(&self, intent: &QueryIntent) -> RecommendationResult {
        match &intent.category {
            Some(category) => {
                self.search_by_category(category, &intent.ingredients, intent.persona.as_str())
                    .await
            }
            None => self
                .search_recipes(&intent.ingredients, intent.persona.as_str())
                .await,
        }
    }

    /// Category-first recommendation. Never fails: any backend problem turns
    /// into a degraded result carrying an apology naming the category.
    pub async fn search_by_category(
        &self,
        category: &str,
        ingredients: &[String],
        persona_id: &str,
    ) -> RecommendationResult {
        let persona = catalog::mode_name(persona_id);
        let request = CategoryRecommendRequest {
            category: category.to_string(),
            ingredients: ingredients.to_vec(),
            persona: persona.to_string(),
            limit: RECOMMENDATION_LIMIT,
        };
        debug!(category, persona, ingredients = ingredients.len(), "category search");

        match self
            .client
            .post_json::<_, RecommendResponse>(CATEGORY_RECOMMEND_PATH, &request)
            .await
        {
            Ok(data) => RecommendationResult {
                message: data.message.unwrap_or_default(),
                recipes: normalize_recipes(data.recipes, category),
                category: data.category.unwrap_or_else(|| category.to_string()),
                input_ingredients: data.input_ingredients.unwrap_or(request.ingredients),
                persona: data.persona.unwrap_or(request.persona),
                degraded: false,
            },
            Err(err) => {
                warn!(category, kind = err.kind(), error = %err, "category search degraded");
                degraded_result(category_error_message(category), category, ingredients, persona)
            }
        }
    }

    /// Pre-category search entry point, kept for older callers.
    pub async fn search_recipes(&self, ingredients: &[String], persona_id: &str) -> RecommendationResult {
        self.search_by_category(DEFAULT_CATEGORY, ingredients, persona_id)
            .await
    }

    /// Persona-mode recommendation against `/recommend/mode`. Degrades like
    /// category search.
    pub async fn search_by_mode(&self, persona_id: &str, ingredients: &[String]) -> RecommendationResult {
        let mode = catalog::mode_name(persona_id);
        let request = ModeRecommendRequest {
            mode: mode.to_string(),
            ingredients: ingredients.to_vec(),
            limit: RECOMMENDATION_LIMIT,
        };
        debug!(mode, ingredients = ingredients.len(), "mode search");

        match self
            .client
            .post_json::<_, RecommendResponse>(MODE_RECOMMEND_PATH, &request)
            .await
        {
            Ok(data) => RecommendationResult {
                message: data.message.unwrap_or_default(),
                recipes: normalize_recipes(data.recipes, ""),
                category: data.category.unwrap_or_default(),
                input_ingredients: data.input_ingredients.unwrap_or(request.ingredients),
                persona: data.persona.unwrap_or(request.mode),
                degraded: false,
            },
            Err(err) => {
                warn!(mode, kind = err.kind(), error = %err, "mode search degraded");
                degraded_result(category_error_message(mode), "", ingredients, mode)
            }
        }
    }

    /// Sends one chat turn. Errors propagate; the caller owns the fallback.
    pub async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiConnectionError> {
        let request = ChatRequest {
            message: message.to_string(),
            user_name: self.user_name.clone(),
        };
        let response: ChatResponse = self
            .client
            .post_json(CHAT_PATH, &request)
            .await
            .inspect_err(|err| warn!(kind = err.kind(), error = %err, "chat request failed"))?;
        Ok(ChatReply {
            reply: response.reply,
            recipes: response
                .recipes
                .map(|recipes| normalize_recipes(Some(recipes), "")),
            ingredients_detected: response.ingredients_detected.unwrap_or_default(),
        })
    }

    /// `None` means "no detail available", whatever the cause.
    pub async fn get_recipe_detail(&self, recipe_name: &str) -> Option<RecipeDetail> {
        match self
            .client
            .get_json::<RecipeDetailResponse>(&[RECIPE_DETAIL_PREFIX, recipe_name])
            .await
        {
            Ok(detail) => Some(normalize_detail(detail)),
            Err(err) => {
                debug!(recipe_name, kind = err.kind(), error = %err, "no recipe detail");
                None
            }
        }
    }
}
