use anyhow::{Context, Result};
use recipe_ai_client::catalog::{CATEGORIES, PERSONAS};
use recipe_ai_client::chat::ChatSession;
use recipe_ai_client::cli::{parse_args, Command};
use recipe_ai_client::config::ApiConfig;
use recipe_ai_client::recommendation::{RecommendationAdapter, RecommendationResult};
use serde::Serialize;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

// Only shown on screen; the full list stays in the result.
const MISSING_SHOWN: usize = 3;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn print_result(result: &RecommendationResult) {
    if result.degraded {
        eprintln!("(backend unavailable, showing fallback)");
    }
    println!("{}", result.message);
    if result.recipes.is_empty() {
        println!("No recipes.");
        return;
    }
    for recipe in &result.recipes {
        println!(
            "{} {} [{}] {}min · {} · {}kcal · {}/{} ingredients",
            recipe.emoji,
            recipe.name,
            recipe.category,
            recipe.time_minutes,
            recipe.difficulty,
            recipe.calories,
            recipe.matched_count,
            recipe.total_ingredients
        );
        if !recipe.missing_ingredients.is_empty() {
            let shown: Vec<&str> = recipe
                .missing_ingredients
                .iter()
                .take(MISSING_SHOWN)
                .map(String::as_str)
                .collect();
            let more = recipe.missing_ingredients.len().saturating_sub(MISSING_SHOWN);
            if more > 0 {
                println!("    missing: {} (+{} more)", shown.join(", "), more);
            } else {
                println!("    missing: {}", shown.join(", "));
            }
        }
    }
}

fn show_result(result: &RecommendationResult, json: bool) -> Result<()> {
    if json {
        print_json(result)
    } else {
        print_result(result);
        Ok(())
    }
}

fn connect() -> Result<RecommendationAdapter> {
    let config = ApiConfig::from_env().context("Failed to load API configuration")?;
    let adapter = RecommendationAdapter::new(&config).context("Failed to create HTTP client")?;
    tracing::debug!(base_url = %config.base_url, "adapter ready");
    Ok(adapter)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("recipe_ai_client=debug,warn")
        } else {
            EnvFilter::new("recipe_ai_client=warn,error")
        }
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Command::Personas if cli.json => print_json(&PERSONAS)?,
        Command::Personas => {
            for persona in PERSONAS {
                println!(
                    "{} {:<7} {} ({}) - {}",
                    persona.icon, persona.id, persona.name, persona.mode_name, persona.description
                );
            }
        }
        Command::Categories if cli.json => print_json(&CATEGORIES)?,
        Command::Categories => {
            for category in CATEGORIES {
                println!("{} {}", category.icon, category.name);
            }
        }
        Command::Search { category, intent } => {
            let result = connect()?.search(&intent.into_intent(Some(category))).await;
            show_result(&result, cli.json)?;
        }
        Command::Recipes { intent } => {
            let result = connect()?.search(&intent.into_intent(None)).await;
            show_result(&result, cli.json)?;
        }
        Command::Mode { intent } => {
            let intent = intent.into_intent(None);
            let result = connect()?
                .search_by_mode(intent.persona.as_str(), &intent.ingredients)
                .await;
            show_result(&result, cli.json)?;
        }
        Command::Chat { message } => {
            let adapter = connect()?;
            let mut session = ChatSession::new();
            let answer = session
                .send(&adapter, &message.join(" "))
                .await
                .context("Nothing to send")?;
            if cli.json {
                print_json(answer)?;
            } else {
                println!("{}", answer.text);
                for recipe in &answer.recipes {
                    println!("  {} {} ({}min)", recipe.emoji, recipe.name, recipe.time_minutes);
                }
            }
        }
        Command::Detail { name } => match connect()?.get_recipe_detail(&name).await {
            Some(detail) if cli.json => print_json(&detail)?,
            Some(detail) => {
                println!(
                    "{} [{}] {}min · {} · {}kcal",
                    detail.name, detail.category, detail.time_minutes, detail.difficulty, detail.calories
                );
                for ingredient in &detail.ingredients {
                    println!("  - {} {}{}", ingredient.name, ingredient.amount, ingredient.unit);
                }
            }
            None => println!("No detail available for '{}'.", name),
        },
    }

    Ok(())
}
