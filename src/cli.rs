use clap::{Args, Parser, Subcommand};

use crate::catalog::PersonaId;
use crate::recommendation::QueryIntent;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recipe recommendation client", long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging for this crate
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct IntentArgs {
    /// Persona id (UMMA, QUICK, DIET, CHEF, HEALTH, VEGAN); unknown ids act as UMMA
    #[arg(short, long, default_value = "UMMA")]
    pub persona: String,

    /// Ingredient on hand; repeat for more, order is kept
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,
}

impl IntentArgs {
    pub fn into_intent(self, category: Option<String>) -> QueryIntent {
        QueryIntent {
            ingredients: self
                .ingredients
                .into_iter()
                .map(|ingredient| ingredient.trim().to_string())
                .filter(|ingredient| !ingredient.is_empty())
                .collect(),
            persona: PersonaId::parse_or_default(self.persona.trim()),
            category,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend recipes within a category
    Search {
        /// Category id, e.g. 국/찌개
        #[arg(short, long)]
        category: String,
        #[command(flatten)]
        intent: IntentArgs,
    },
    /// Recommend recipes with the default category
    Recipes {
        #[command(flatten)]
        intent: IntentArgs,
    },
    /// Recommend recipes through the persona-mode endpoint
    Mode {
        #[command(flatten)]
        intent: IntentArgs,
    },
    /// Send one message to the recipe chat assistant
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Show the detail of a recipe by name
    Detail { name: String },
    /// List the available personas
    Personas,
    /// List the available categories
    Categories,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
