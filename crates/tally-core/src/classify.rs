//! Keyword category classifier
//!
//! Categories are tested in priority order against a static keyword table.
//! The first category with a keyword contained in the lower-cased text wins,
//! so overlapping keywords ("netflix", "spotify") resolve to the earlier
//! category. `Other` has no keywords and is the fallback.

use crate::models::Category;

/// Keyword table in priority order
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "lunch",
            "dinner",
            "breakfast",
            "coffee",
            "restaurant",
            "pizza",
            "burger",
            "sushi",
            "food",
            "eat",
            "meal",
            "snack",
            "grocery",
            "groceries",
            "supermarket",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber", "lyft", "taxi", "gas", "fuel", "parking", "train", "bus", "metro", "subway",
            "flight", "airline", "car",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon",
            "store",
            "mall",
            "clothes",
            "shoes",
            "electronics",
            "purchase",
            "buy",
            "shop",
        ],
    ),
    (
        Category::Bills,
        &[
            "electricity",
            "water",
            "internet",
            "phone",
            "rent",
            "insurance",
            "subscription",
            "netflix",
            "spotify",
            "utility",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "cinema", "concert", "game", "netflix", "spotify", "party", "club", "bar",
            "drink",
        ],
    ),
    (
        Category::Health,
        &[
            "pharmacy", "doctor", "hospital", "medicine", "gym", "fitness", "dental", "medical",
        ],
    ),
    (
        Category::Income,
        &[
            "salary", "paycheck", "bonus", "refund", "cashback", "received", "earned", "income",
        ],
    ),
];

/// Keywords that select a category (empty for `Other`)
pub fn keywords(category: Category) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Classify free text into a category. Never fails.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| lower.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
