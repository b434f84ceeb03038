/// Constants used by the stopword filter.
pub mod stop_words {
    /// Built-in descriptive modifiers (freshness, preparation state, size).
    pub const DEFAULT_STOP_WORDS: [&str; 12] = [
        "fresh", "freshly", "organic", "chopped", "diced", "sliced", "minced", "raw", "cooked",
        "ripe", "large", "small",
    ];
}

/// Constants used by the singularization heuristic.
pub mod singularize {
    /// Terms ending in `ies` must be longer than this to become `...y`.
    pub const IES_MIN_EXCLUSIVE_LEN: usize = 4;
    /// Terms ending in `es` must be longer than this to lose the suffix.
    pub const ES_MIN_EXCLUSIVE_LEN: usize = 3;
    /// Terms ending in `s` must be longer than this to lose the suffix.
    pub const S_MIN_EXCLUSIVE_LEN: usize = 3;
}

/// Constants used by synonym-table loading and process configuration.
pub mod config {
    /// Default filename for the synonym definitions source.
    pub const DEFAULT_SYNONYMS_FILENAME: &str = "synonyms.json";
    /// Environment variable naming the synonym definitions path.
    pub const ENV_SYNONYMS_PATH: &str = "INGREDIENT_SYNONYMS_PATH";
    /// Environment variable holding comma-separated extra stopwords.
    pub const ENV_EXTRA_STOP_WORDS: &str = "INGREDIENT_EXTRA_STOP_WORDS";
    /// Separator used in list-valued environment variables.
    pub const ENV_LIST_DELIMITER: char = ',';
}

/// Constants used at the vision-detection collaborator boundary.
pub mod detection {
    /// Field carrying the raw ingredient list in a detection response.
    pub const INGREDIENTS_FIELD: &str = "ingredients_detected";
}
