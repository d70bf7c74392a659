use clap::ValueEnum;

/// Business category a pipeline run ingests. Everything that differs
/// between the club and shop variants hangs off this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Club,
    Shop,
}

impl Category {
    /// Noun inserted into the completion prompt ("running clubs in ...").
    pub fn prompt_noun(&self) -> &'static str {
        match self {
            Category::Club => "clubs",
            Category::Shop => "shops",
        }
    }

    /// Per-category directory artifact files are written under.
    pub fn data_dir(&self) -> &'static str {
        match self {
            Category::Club => "club_data_json",
            Category::Shop => "shop_data_json",
        }
    }

    /// Per-category append-only log file.
    pub fn log_file(&self) -> &'static str {
        match self {
            Category::Club => "running_clubs.log",
            Category::Shop => "running_shops.log",
        }
    }

    /// Suffix of the per-city artifact filename.
    pub fn artifact_suffix(&self) -> &'static str {
        match self {
            Category::Club => "running_clubs",
            Category::Shop => "running_shops",
        }
    }

    /// Value submitted for the `isRunningClub` intake form flag.
    pub fn is_running_club(&self) -> bool {
        matches!(self, Category::Club)
    }

    /// Value submitted for the `isRunningStore` intake form flag.
    pub fn is_running_store(&self) -> bool {
        matches!(self, Category::Shop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_flags_are_exclusive() {
        assert!(Category::Club.is_running_club());
        assert!(!Category::Club.is_running_store());
        assert!(Category::Shop.is_running_store());
        assert!(!Category::Shop.is_running_club());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Club.prompt_noun(), "clubs");
        assert_eq!(Category::Club.data_dir(), "club_data_json");
        assert_eq!(Category::Club.artifact_suffix(), "running_clubs");
        assert_eq!(Category::Shop.log_file(), "running_shops.log");
    }
}
