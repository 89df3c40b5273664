//! Similarity Scorer — pairwise TF-IDF cosine similarity between two texts.
//!
//! The corpus is always exactly the two documents being compared, so IDF is
//! local to the pair and must be recomputed for every resume/JD pair.
//!
//! `AppState` holds an `Arc<dyn TextSimilarity>` so the backend can be swapped
//! without touching the orchestrator or handlers.

use std::collections::{BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::round2;

/// Tokens are runs of two or more word characters.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
        "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
        "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
        "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
        "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
        "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
        "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
        "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
        "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
        "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
        "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
        "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
        "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made",
        "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most",
        "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
        "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
        "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
        "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
        "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re", "same",
        "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
        "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
        "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
        "system", "take", "ten", "than", "that", "the", "their", "them", "themselves", "then",
        "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
        "these", "they", "thick", "thin", "third", "this", "those", "though", "three",
        "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
        "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
        "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
        "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
        "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
        "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
        "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Pluggable lexical similarity backend. Returns a percentage in [0, 100].
pub trait TextSimilarity: Send + Sync {
    fn similarity_pct(&self, left: &str, right: &str) -> f64;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

/// TF-IDF (raw counts, smoothed IDF, L2 norm) cosine similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfCosine;

impl TextSimilarity for TfidfCosine {
    fn similarity_pct(&self, left: &str, right: &str) -> f64 {
        tfidf_similarity(left, right)
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Cosine similarity of the two documents' TF-IDF vectors, as a percentage.
///
/// IDF is `ln((1 + n) / (1 + df)) + 1` with `n = 2`. A document with no
/// usable tokens has a zero vector and yields 0.0.
pub fn tfidf_similarity(left: &str, right: &str) -> f64 {
    let left_counts = term_counts(left);
    let right_counts = term_counts(right);

    if left_counts.is_empty() || right_counts.is_empty() {
        return 0.0;
    }

    let vocabulary: BTreeSet<&str> = left_counts
        .keys()
        .chain(right_counts.keys())
        .copied()
        .collect();

    let (mut dot, mut left_norm, mut right_norm) = (0.0_f64, 0.0_f64, 0.0_f64);
    for term in vocabulary {
        let l = left_counts.get(term).copied().unwrap_or(0.0);
        let r = right_counts.get(term).copied().unwrap_or(0.0);
        let df = (l > 0.0) as u32 + (r > 0.0) as u32;
        let idf = (3.0 / (1.0 + df as f64)).ln() + 1.0;

        let (lw, rw) = (l * idf, r * idf);
        dot += lw * rw;
        left_norm += lw * lw;
        right_norm += rw * rw;
    }

    let denom = left_norm.sqrt() * right_norm.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    round2((dot / denom * 100.0).clamp(0.0, 100.0))
}

fn term_counts(text: &str) -> HashMap<&str, f64> {
    let mut counts = HashMap::new();
    for token in RE_TOKEN.find_iter(text).map(|m| m.as_str()) {
        if !STOP_WORDS.contains(token) {
            *counts.entry(token).or_insert(0.0) += 1.0;
        }
    }
    counts
}
