use smallvec::SmallVec;

/// Normalized class tokens; most calls carry one or two names.
pub type ClassTokens<'a> = SmallVec<[&'a str; 4]>;

/// Flatten class-name arguments into individual tokens.
///
/// Each entry may itself hold several whitespace-separated names. Empty tokens
/// are dropped and repeats collapse onto their first occurrence, so an empty
/// argument produces no tokens at all.
pub fn class_tokens<'a>(names: &[&'a str]) -> ClassTokens<'a> {
    let mut tokens = ClassTokens::new();
    for token in names.iter().flat_map(|n| n.split_ascii_whitespace()) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
