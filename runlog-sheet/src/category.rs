use std::fmt;

/// Activity category from the last sheet column.
///
/// Only `Run`, `Cycling` and `Swim` are charted; anything else is kept
/// verbatim in `Other` and accumulated but never plotted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Run,
    Cycling,
    Swim,
    Other(String),
}

impl Category {
    /// Categories plotted by the per-category chart, in legend order.
    pub const CHARTED: [Category; 3] = [Category::Run, Category::Cycling, Category::Swim];

    /// Parse a trimmed cell. Matching is case-sensitive.
    pub fn parse(cell: &str) -> Category {
        match cell.trim() {
            "Run" => Category::Run,
            "Cycling" => Category::Cycling,
            "Swim" => Category::Swim,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn is_charted(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Run => "Run",
            Category::Cycling => "Cycling",
            Category::Swim => "Swim",
            Category::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn test_parse_category() {
        assert_eq!(Category::parse("Run\r"), Category::Run);
        assert_eq!(Category::parse(" Cycling "), Category::Cycling);
        assert_eq!(Category::parse("Swim"), Category::Swim);
        assert_eq!(Category::parse("run"), Category::Other("run".to_string()));
        assert_eq!(Category::parse("Yoga"), Category::Other("Yoga".to_string()));
    }

    #[test]
    fn test_only_allow_list_is_charted() {
        assert!(Category::CHARTED.iter().all(Category::is_charted));
        assert!(!Category::parse("Yoga").is_charted());
        assert!(!Category::parse("").is_charted());
    }
}
