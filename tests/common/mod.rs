#![allow(dead_code)]

use recipe_ai_client::config::ApiConfig;
use recipe_ai_client::recommendation::RecommendationAdapter;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::time::Duration;

pub fn adapter_for(base_url: &str) -> RecommendationAdapter {
    RecommendationAdapter::new(&ApiConfig::with_base_url(base_url).unwrap()).unwrap()
}

pub fn adapter_with_timeout(base_url: &str, timeout: Duration) -> RecommendationAdapter {
    let config = ApiConfig {
        timeout,
        ..ApiConfig::with_base_url(base_url).unwrap()
    };
    RecommendationAdapter::new(&config).unwrap()
}

/// Base URL of a port that was bound and released, so connections are refused.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Canned backend recipes in the `/recommend/category` wire shape.
pub fn mocked_recipes() -> Value {
    json!([
        {
            "name": "Kimchi Stew (Kimchi-jjigae)",
            "category": "찌개",
            "cooking_time": 30,
            "difficulty": "쉬움",
            "calories": 520,
            "matched_count": 2,
            "matched_ingredients": ["Kimchi", "Pork"],
            "missing_ingredients": ["Tofu"],
            "total_ingredients": 3
        },
        {
            "name": "Spicy Pork Stir-fry",
            "category": "볶음",
            "cooking_time": 25,
            "difficulty": "보통",
            "calories": 640,
            "matched_count": 2,
            "matched_ingredients": ["Pork", "Onion"],
            "missing_ingredients": [],
            "total_ingredients": 2
        },
        {
            "name": "Kimchi Fried Rice",
            "category": "밥",
            "cooking_time": 15,
            "difficulty": "쉬움",
            "calories": 480,
            "matched_count": 1,
            "matched_ingredients": ["Kimchi"],
            "missing_ingredients": ["Rice", "Egg"],
            "total_ingredients": 3
        }
    ])
}
