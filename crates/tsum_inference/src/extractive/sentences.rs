/// Rule-based sentence splitting and tokenization for the extractive path.

/// Trailing tokens that end with a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "jr.", "sr.", "vs.", "etc.", "e.g.", "i.e.",
    "inc.", "fig.", "no.", "al.",
];

/// Common English words carrying no ranking signal.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has", "have",
    "he", "her", "his", "i", "in", "is", "it", "its", "not", "of", "on", "or", "she", "that",
    "the", "their", "them", "they", "this", "to", "was", "were", "will", "with", "you",
];

/// Split text into sentences on `.`, `!` or `?` followed by whitespace (or
/// end of input), keeping the terminator with its sentence. A small
/// abbreviation table keeps "Dr. Smith" together; a period followed by a
/// non-space character (decimals, URLs) never splits.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.get(i + 1) {
            None => true,
            Some(next) => next.is_whitespace(),
        };
        if at_boundary && !(c == '.' && ends_with_abbreviation(&current)) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn ends_with_abbreviation(current: &str) -> bool {
    let last = current
        .trim_end()
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("");
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

/// Lowercased alphanumeric terms with stopwords removed.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminators() {
        let sentences = split_sentences("One sentence here. Another one! A third? Done.");
        assert_eq!(
            sentences,
            vec!["One sentence here.", "Another one!", "A third?", "Done."]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = split_sentences("Dr. Smith arrived early. He left at noon.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith arrived early.", "He left at noon."]
        );
    }

    #[test]
    fn test_decimals_do_not_split() {
        let sentences = split_sentences("Pi is roughly 3.14 in value. Euler disagrees.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_unterminated_tail_is_kept() {
        let sentences = split_sentences("First sentence. trailing fragment without a period");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "trailing fragment without a period");
    }

    #[test]
    fn test_tokenize_lowercases_and_drops_stopwords() {
        let tokens = tokenize("The quick brown Fox jumps over the lazy dog.");
        assert_eq!(tokens, vec!["quick", "brown", "fox", "jumps", "over", "lazy", "dog"]);
    }
}
