//! Personality categories and their type numbers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// One of the nine archetype buckets
///
/// Declaration order is type-number order. Tie-breaking in the scoring
/// engine relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Perfectionist,
    Helper,
    Achiever,
    Individualist,
    Investigator,
    Loyalist,
    Enthusiast,
    Challenger,
    Peacemaker,
}

/// Number of categories (and type numbers)
pub const CATEGORY_COUNT: usize = 9;

impl Category {
    /// All categories in type-number order (1..=9)
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Perfectionist,
        Category::Helper,
        Category::Achiever,
        Category::Individualist,
        Category::Investigator,
        Category::Loyalist,
        Category::Enthusiast,
        Category::Challenger,
        Category::Peacemaker,
    ];

    /// Type number 1-9
    pub fn type_number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based position in [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_type_number(type_number: u8) -> Option<Category> {
        match type_number {
            1..=9 => Some(Category::ALL[usize::from(type_number) - 1]),
            _ => None,
        }
    }

    /// Lowercase name used in the question table and JSON maps
    pub fn name(self) -> &'static str {
        match self {
            Category::Perfectionist => "perfectionist",
            Category::Helper => "helper",
            Category::Achiever => "achiever",
            Category::Individualist => "individualist",
            Category::Investigator => "investigator",
            Category::Loyalist => "loyalist",
            Category::Enthusiast => "enthusiast",
            Category::Challenger => "challenger",
            Category::Peacemaker => "peacemaker",
        }
    }

    /// Capitalized name for display labels
    pub fn title(self) -> &'static str {
        match self {
            Category::Perfectionist => "Perfectionist",
            Category::Helper => "Helper",
            Category::Achiever => "Achiever",
            Category::Individualist => "Individualist",
            Category::Investigator => "Investigator",
            Category::Loyalist => "Loyalist",
            Category::Enthusiast => "Enthusiast",
            Category::Challenger => "Challenger",
            Category::Peacemaker => "Peacemaker",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown category: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_numbers_follow_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.type_number() as usize, i + 1);
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_from_type_number_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_type_number(category.type_number()), Some(category));
        }
        assert_eq!(Category::from_type_number(0), None);
        assert_eq!(Category::from_type_number(10), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("achiever".parse::<Category>().unwrap(), Category::Achiever);
        assert_eq!(" Peacemaker ".parse::<Category>().unwrap(), Category::Peacemaker);
        assert!("wizard".parse::<Category>().is_err());
    }

    #[test]
    fn test_title_matches_name() {
        for category in Category::ALL {
            assert_eq!(category.title().to_lowercase(), category.name());
        }
        assert_eq!(Category::Investigator.title(), "Investigator");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Individualist).unwrap();
        assert_eq!(json, "\"individualist\"");
        let back: Category = serde_json::from_str("\"loyalist\"").unwrap();
        assert_eq!(back, Category::Loyalist);
    }
}
