use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Animals,
    Countries,
    Food,
    Tech,
}

impl Default for Category {
    fn default() -> Self {
        Category::Animals
    }
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Animals,
            Category::Countries,
            Category::Food,
            Category::Tech,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Animals => 0,
            Category::Countries => 1,
            Category::Food => 2,
            Category::Tech => 3,
        }
    }

    pub fn from_index(index: usize) -> Category {
        match index {
            0 => Category::Animals,
            1 => Category::Countries,
            2 => Category::Food,
            3 => Category::Tech,
            _ => Category::Animals,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Animals => "Animals",
            Category::Countries => "Countries",
            Category::Food => "Food",
            Category::Tech => "Tech",
        };
        write!(f, "{}", name)
    }
}
