/// Returns the length of a word in characters (Unicode scalar values), not bytes.
///
/// No normalization is applied; a decomposed `e` + combining accent counts as two.
#[inline]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}
