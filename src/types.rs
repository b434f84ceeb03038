/// Uninterpreted ingredient text as received from a detector or a user.
/// Examples: `Freshly Chopped Basil`, `  eggs!!`, ``
pub type RawTerm = String;
/// Lowercase, punctuation-free, stopword-free, singularized, synonym-mapped term.
/// Examples: `basil`, `egg`, `green onion`
pub type CanonicalTerm = String;
/// Key side of a synonym definition (already normalized, not yet canonical).
/// Examples: `scallion`, `garbanzo bean`
pub type SynonymKey = String;
/// Descriptive modifier dropped before grouping.
/// Examples: `fresh`, `chopped`, `large`
pub type StopWord = String;
/// Ordered, duplicate-free output of a normalization call.
/// Example: `["egg", "basil", "green onion"]`
pub type NormalizedList = Vec<CanonicalTerm>;
