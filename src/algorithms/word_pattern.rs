//! [Word Pattern]: checks whether a sequence of words follows a pattern of
//! symbols, where each symbol stands for exactly one word and each word is
//! stood for by exactly one symbol.
//!
//! [Word Pattern]: https://en.wikipedia.org/wiki/Bijection

use std::collections::HashMap;

use tracing::trace;

/// Bijective binding between the symbols of a pattern and the words they
/// stand for.
///
/// Returned by [`bind_pattern`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternBinding<'w> {
    /// Bound pairs, in the order the symbols were first seen.
    pairs: Vec<(char, &'w str)>,
    /// Symbol to its index in `pairs`.
    by_symbol: HashMap<char, usize>,
    /// Word to its index in `pairs`.
    by_word: HashMap<&'w str, usize>,
}

impl<'w> PatternBinding<'w> {
    /// Returns the word bound to `symbol`, or [`None`] if the pattern never
    /// uses it.
    pub fn word_for(&self, symbol: char) -> Option<&'w str> {
        self.by_symbol.get(&symbol).map(|&i| self.pairs[i].1)
    }

    /// Returns the symbol bound to `word`, or [`None`] if the word never
    /// appears.
    pub fn symbol_for(&self, word: &str) -> Option<char> {
        self.by_word.get(word).map(|&i| self.pairs[i].0)
    }

    /// Returns the number of distinct symbols (and words) bound.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if nothing is bound, i.e. the pattern was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the `(symbol, word)` pairs, in the order the
    /// symbols first appear in the pattern.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'w str)> + '_ {
        self.pairs.iter().copied()
    }

    /// Binds `symbol` to `word`, or checks an existing binding. Returns
    /// `false` if either side is already bound to something else.
    fn bind(&mut self, symbol: char, word: &'w str) -> bool {
        match (self.by_symbol.get(&symbol), self.by_word.get(word)) {
            (Some(&i), Some(&j)) => i == j,
            (None, None) => {
                let idx = self.pairs.len();
                self.pairs.push((symbol, word));
                self.by_symbol.insert(symbol, idx);
                self.by_word.insert(word, idx);
                true
            }
            // One side is new while the other is already taken.
            _ => false,
        }
    }
}

/// Builds the binding of `pattern` onto `words`, or returns [`None`] if no
/// bijective binding exists.
///
/// Every `char` of `pattern` is one symbol. The number of symbols must equal
/// the number of words, repeated symbols must stand for the same word and
/// distinct symbols for distinct words.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time (in the number of words, with hashing of each word
/// counted as constant). The lengths are compared before any binding is made.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// let words = ["dog", "cat", "cat", "dog"];
/// let binding = bind_pattern(&words, "abba").unwrap();
///
/// assert_eq!(binding.word_for('a'), Some("dog"));
/// assert_eq!(binding.symbol_for("cat"), Some('b'));
/// assert_eq!(binding.len(), 2);
///
/// assert!(bind_pattern(&["dog", "dog", "dog", "dog"], "abba").is_none());
/// ```
pub fn bind_pattern<'w, S>(words: &'w [S], pattern: &str) -> Option<PatternBinding<'w>>
where
    S: AsRef<str>,
{
    let symbols = pattern.chars().count();
    if symbols != words.len() {
        trace!(symbols, words = words.len(), "length mismatch");
        return None;
    }

    let mut binding = PatternBinding::default();

    for (pos, (symbol, word)) in pattern.chars().zip(words).enumerate() {
        let word: &'w str = word.as_ref();

        if !binding.bind(symbol, word) {
            trace!(
                pos,
                %symbol,
                word,
                bound_word = binding.word_for(symbol),
                bound_symbol = ?binding.symbol_for(word),
                "conflicting binding"
            );
            return None;
        }
    }

    Some(binding)
}

/// Returns `true` if `words` follows `pattern`.
///
/// See [`bind_pattern`] for the rules.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// assert!(matches_pattern(&["dog", "cat", "cat", "dog"], "abba"));
/// assert!(!matches_pattern(&["dog", "cat", "cat", "fish"], "abba"));
/// assert!(!matches_pattern(&["dog", "cat", "cat"], "abba"));
/// assert!(matches_pattern::<&str>(&[], ""));
/// ```
#[inline]
pub fn matches_pattern<S: AsRef<str>>(words: &[S], pattern: &str) -> bool {
    bind_pattern(words, pattern).is_some()
}

/// Returns `true` if the whitespace-separated words of `sentence` follow
/// `pattern`.
///
/// Runs of whitespace count as a single separator, and leading or trailing
/// whitespace is ignored.
///
/// # Examples
///
/// ```
/// use listmatch::prelude::*;
///
/// assert!(matches_sentence("dog cat  cat\tdog\n", "abba"));
/// assert!(!matches_sentence("dog dog dog dog", "abba"));
/// assert!(matches_sentence("   ", ""));
/// ```
pub fn matches_sentence(sentence: &str, pattern: &str) -> bool {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    matches_pattern(&words, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_pattern() {
        assert!(matches_pattern(&["dog", "cat", "cat", "dog"], "abba"));
    }

    #[test]
    fn test_inconsistent_repeat() {
        assert!(!matches_pattern(&["dog", "cat", "cat", "fish"], "abba"));
    }

    #[test]
    fn test_two_symbols_one_word() {
        assert!(!matches_pattern(&["dog", "dog", "dog", "dog"], "abba"));
        assert!(!matches_pattern(&["dog", "dog"], "ab"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!matches_pattern(&["dog", "cat", "cat"], "abba"));
        assert!(!matches_pattern(&["dog", "cat", "cat", "dog", "dog"], "abba"));
        assert!(!matches_pattern(&["dog"], ""));
        assert!(!matches_pattern::<&str>(&[], "a"));
    }

    #[test]
    fn test_empty() {
        let binding = bind_pattern::<&str>(&[], "").unwrap();
        assert!(binding.is_empty());
        assert_eq!(binding.len(), 0);
    }

    #[test]
    fn test_owned_words() {
        let words: Vec<String> = ["a", "b", "a"].iter().map(|w| w.to_string()).collect();
        assert!(matches_pattern(&words, "xyx"));
        assert!(!matches_pattern(&words, "xyz"));
    }

    #[test]
    fn test_symbols_are_chars_not_bytes() {
        assert!(matches_pattern(&["sun", "moon", "sun"], "☀☾☀"));
        assert!(!matches_pattern(&["sun", "moon"], "☀☾☀"));
    }

    #[test]
    fn test_binding_order_and_lookup() {
        let words = ["x", "y", "x", "z"];
        let binding = bind_pattern(&words, "abac").unwrap();

        assert_eq!(
            binding.iter().collect::<Vec<_>>(),
            [('a', "x"), ('b', "y"), ('c', "z")]
        );
        assert_eq!(binding.word_for('d'), None);
        assert_eq!(binding.symbol_for("w"), None);
    }

    #[test]
    fn test_sentence_split() {
        assert!(matches_sentence("  dog cat cat dog ", "abba"));
        assert!(!matches_sentence("dog cat cat fish", "abba"));
        assert!(!matches_sentence("dog cat cat", "abba"));
    }

    #[test]
    fn test_repeat_calls_agree() {
        let words = ["dog", "cat", "cat", "dog"];
        let first = bind_pattern(&words, "abba");
        let second = bind_pattern(&words, "abba");

        assert_eq!(first, second);
        assert_eq!(words, ["dog", "cat", "cat", "dog"]);
    }
}
