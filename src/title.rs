// ABOUTME: Title derivation for the deckconv application
// ABOUTME: Maps deck filename stems to ordinal labels and display titles

/// Derive the ordinal label and display title from a deck filename stem.
///
/// The stem splits on its first hyphen: the part before it is the label,
/// the remainder becomes the title with hyphens turned into spaces and each
/// word's first character upper-cased (the rest of the word is untouched, so
/// leading acronyms survive). A stem with no hyphen is both its own label
/// and its own title source.
pub fn label_and_title(stem: &str) -> (String, String) {
    let (label, remainder) = match stem.split_once('-') {
        Some((label, remainder)) => (label, remainder),
        None => (stem, stem),
    };

    let spaced = remainder.replace('-', " ");
    let title = spaced
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<String>>()
        .join(" ");

    (label.to_string(), title)
}

/// Upper-case only the first character of a word
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
