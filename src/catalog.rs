use serde::{Deserialize, Serialize};
use std::fmt;

/// Category used by the legacy single-mode search.
pub const DEFAULT_CATEGORY: &str = "메인요리";
/// Number of recipes requested from every recommendation endpoint.
pub const RECOMMENDATION_LIMIT: u32 = 10;

const DEFAULT_MODE_NAME: &str = "엄마밥";
const DEFAULT_EMOJI: &str = "🍽️";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonaId {
    #[default]
    Umma,
    Quick,
    Diet,
    Chef,
    Health,
    Vegan,
}

impl PersonaId {
    pub const ALL: [PersonaId; 6] = [
        PersonaId::Umma,
        PersonaId::Quick,
        PersonaId::Diet,
        PersonaId::Chef,
        PersonaId::Health,
        PersonaId::Vegan,
    ];

    /// Exact, case-sensitive match on the wire id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|persona| persona.as_str() == id)
    }

    /// Unknown or empty ids fall back to `Umma`.
    pub fn parse_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaId::Umma => "UMMA",
            PersonaId::Quick => "QUICK",
            PersonaId::Diet => "DIET",
            PersonaId::Chef => "CHEF",
            PersonaId::Health => "HEALTH",
            PersonaId::Vegan => "VEGAN",
        }
    }

    /// Backend vocabulary for this persona.
    pub fn mode_name(self) -> &'static str {
        match self {
            PersonaId::Umma => DEFAULT_MODE_NAME,
            PersonaId::Quick => "자취생",
            PersonaId::Diet => "다이어트",
            PersonaId::Chef => "흑백요리사",
            PersonaId::Health => "건강맞춤",
            PersonaId::Vegan => "비건",
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDescriptor {
    pub id: PersonaId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub mode_name: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const PERSONAS: &[PersonaDescriptor] = &[
    PersonaDescriptor {
        id: PersonaId::Umma,
        name: "Mother's Touch",
        icon: "👩‍🍳",
        description: "Warm, home-style advice",
        mode_name: "엄마밥",
    },
    PersonaDescriptor {
        id: PersonaId::Quick,
        name: "Student Quick",
        icon: "⚡",
        description: "Fast, simple (under 20m)",
        mode_name: "자취생",
    },
    PersonaDescriptor {
        id: PersonaId::Diet,
        name: "Diet Coach",
        icon: "💪",
        description: "Calorie & Protein focused",
        mode_name: "다이어트",
    },
    PersonaDescriptor {
        id: PersonaId::Chef,
        name: "Master Chef",
        icon: "🖤",
        description: "Premium & Technique driven",
        mode_name: "흑백요리사",
    },
    PersonaDescriptor {
        id: PersonaId::Health,
        name: "Health Care",
        icon: "🩺",
        description: "Safe picks for your health condition",
        mode_name: "건강맞춤",
    },
    PersonaDescriptor {
        id: PersonaId::Vegan,
        name: "Vegan Table",
        icon: "🌱",
        description: "Plant-based, no animal products",
        mode_name: "비건",
    },
];

pub const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor { id: "국/찌개", name: "국/찌개", icon: "🍲" },
    CategoryDescriptor { id: "메인요리", name: "메인요리", icon: "🍖" },
    CategoryDescriptor { id: "반찬", name: "반찬", icon: "🥗" },
    CategoryDescriptor { id: "밑반찬", name: "밑반찬", icon: "🫙" },
    CategoryDescriptor { id: "간식", name: "간식", icon: "🍰" },
];

/// Maps a UI persona id to the backend mode name. Unknown ids map like `UMMA`.
pub fn mode_name(persona_id: &str) -> &'static str {
    PersonaId::parse_or_default(persona_id).mode_name()
}

/// Representative emoji for a recipe category as reported by the backend.
pub fn category_emoji(recipe_category: &str) -> &'static str {
    match recipe_category {
        "찌개" => "🥘",
        "볶음" => "🍳",
        "국" => "🍲",
        "밥" => "🍚",
        "면" => "🍜",
        "구이" => "🍖",
        "샐러드" => "🥗",
        _ => DEFAULT_EMOJI,
    }
}

pub fn persona(id: PersonaId) -> &'static PersonaDescriptor {
    PERSONAS
        .iter()
        .find(|descriptor| descriptor.id == id)
        .unwrap_or(&PERSONAS[0])
}

pub fn category(id: &str) -> Option<&'static CategoryDescriptor> {
    CATEGORIES.iter().find(|descriptor| descriptor.id == id)
}
