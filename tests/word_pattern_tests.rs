use listmatch::prelude::*;
use rstest::rstest;

#[rstest]
#[case::mirrored(&["dog", "cat", "cat", "dog"], "abba", true)]
#[case::wrong_last_word(&["dog", "cat", "cat", "fish"], "abba", false)]
#[case::one_word_for_two_symbols(&["dog", "dog", "dog", "dog"], "abba", false)]
#[case::single_symbol(&["dog", "dog", "dog", "dog"], "aaaa", true)]
#[case::too_few_words(&["dog", "cat", "cat"], "abba", false)]
#[case::too_many_words(&["dog", "cat", "cat", "dog", "cat"], "abba", false)]
#[case::empty(&[], "", true)]
#[case::empty_pattern(&["dog"], "", false)]
#[case::distinct(&["a", "b", "c"], "xyz", true)]
#[case::two_words_for_one_symbol(&["a", "b", "c"], "xyx", false)]
fn test_matches_pattern(#[case] words: &[&str], #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(matches_pattern(words, pattern), expected);
    assert_eq!(matches_sentence(&words.join(" "), pattern), expected);
}

#[rstest]
#[case::padded("  dog   cat cat dog  ", "abba", true)]
#[case::tabs("dog\tcat\ncat dog", "abba", true)]
#[case::blank("   ", "", true)]
#[case::blank_with_pattern("   ", "a", false)]
fn test_matches_sentence(#[case] sentence: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(matches_sentence(sentence, pattern), expected);
}

#[test]
fn test_binding_is_one_to_one() {
    let words = ["red", "green", "red", "blue", "green"];
    let binding = bind_pattern(&words, "rgrbg").unwrap();

    assert_eq!(binding.len(), 3);
    for (symbol, word) in binding.iter() {
        assert_eq!(binding.word_for(symbol), Some(word));
        assert_eq!(binding.symbol_for(word), Some(symbol));
    }
}
