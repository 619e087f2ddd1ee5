use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::model::{Category, Difficulty};

/// Returned when a (category, difficulty) pair is misconfigured to the point
/// that even the pooled fallback is empty.
pub const FALLBACK_WORD: &str = "python";

pub fn word_list(category: Category, difficulty: Difficulty) -> &'static [&'static str] {
    match (category, difficulty) {
        (Category::Animals, Difficulty::Easy) => &[
            "tiger", "zebra", "panda", "camel", "horse", "eagle", "koala", "shark",
        ],
        (Category::Animals, Difficulty::Medium) => &[
            "monkey", "rabbit", "donkey", "otter", "parrot", "walrus", "iguana",
        ],
        (Category::Animals, Difficulty::Hard) => &[
            "elephant",
            "butterfly",
            "crocodile",
            "chimpanzee",
            "hippopotamus",
        ],
        (Category::Countries, Difficulty::Easy) => {
            &["india", "nepal", "spain", "china", "italy", "japan"]
        }
        (Category::Countries, Difficulty::Medium) => {
            &["france", "germany", "canada", "brazil", "sweden", "norway"]
        }
        (Category::Countries, Difficulty::Hard) => &[
            "argentina",
            "australia",
            "portugal",
            "singapore",
            "netherlands",
        ],
        (Category::Food, Difficulty::Easy) => {
            &["apple", "bread", "mango", "pizza", "pasta", "noodles"]
        }
        (Category::Food, Difficulty::Medium) => {
            &["bottle", "cookie", "tomato", "banana", "omelet", "walnut"]
        }
        (Category::Food, Difficulty::Hard) => &[
            "croissant",
            "lasagna",
            "guacamole",
            "cheesecake",
            "macaroni",
        ],
        (Category::Tech, Difficulty::Easy) => {
            &["mouse", "cable", "phone", "clock", "chips", "panel"]
        }
        (Category::Tech, Difficulty::Medium) => {
            &["python", "laptop", "server", "router", "backup", "driver"]
        }
        (Category::Tech, Difficulty::Hard) => &[
            "algorithm",
            "database",
            "compiler",
            "encryption",
            "protocol",
        ],
    }
}

/// Uniform pick from the (category, difficulty) list, falling back to the
/// union of the category's lists, then to `FALLBACK_WORD`.
pub fn choose_word(category: Category, difficulty: Difficulty, rng: &mut dyn RngCore) -> String {
    if let Some(word) = word_list(category, difficulty).choose(rng) {
        return (*word).to_string();
    }
    let pooled: Vec<&'static str> = Difficulty::all()
        .iter()
        .flat_map(|d| word_list(category, *d).iter().copied())
        .collect();
    match pooled.choose(rng) {
        Some(word) => (*word).to_string(),
        None => FALLBACK_WORD.to_string(),
    }
}
