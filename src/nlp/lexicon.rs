//! Closed-class word lists used by the heuristic tagger.

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "our", "your", "his", "her",
    "their", "its", "each", "every", "some", "any", "no", "all", "both", "either", "neither",
];

pub(crate) const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "with", "by", "from", "to", "of", "into", "onto", "over", "under",
    "about", "as", "through", "during", "including", "across", "via", "per", "within", "between",
    "among", "after", "before", "since", "until", "till", "without", "against", "upon", "towards",
];

pub(crate) const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "&", "yet", "so"];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "me", "we", "us", "you", "he", "him", "she", "it", "they", "them", "who", "whom",
    "which", "what", "myself", "ourselves", "yourself", "itself", "themselves",
];

pub(crate) const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "may", "might", "must", "shall",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "new", "good", "strong", "excellent", "senior", "junior", "large", "small", "key",
    "various", "multiple", "high", "low", "full", "deep", "big", "quick", "fast", "great",
    "lead", "principal", "solid", "hands-on", "proficient", "familiar",
];

/// Extra stop words beyond the closed classes above.
const EXTRA_STOP_WORDS: &[&str] = &[
    "also", "very", "etc", "not", "only", "than", "then", "there", "here", "when", "where",
    "while", "how", "why", "just", "more", "most", "other", "such", "own", "same", "too",
    "again", "further", "once", "out", "up", "down", "off", "if", "because", "well", "really",
];

/// Whether `lower` is in the English stop-word list.
pub(crate) fn is_stop_word(lower: &str) -> bool {
    DETERMINERS.contains(&lower)
        || ADPOSITIONS.contains(&lower)
        || CONJUNCTIONS.contains(&lower)
        || PRONOUNS.contains(&lower)
        || AUXILIARIES.contains(&lower)
        || EXTRA_STOP_WORDS.contains(&lower)
}
