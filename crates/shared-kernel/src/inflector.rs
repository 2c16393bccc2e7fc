// crates/shared-kernel/src/inflector.rs
//! Identifier casing helpers used to build display tokens.

/// Converts `snake_case`, `kebab-case` or `PascalCase` identifiers to
/// `lowerCamelCase`. Characters inside a word keep their original case.
pub fn camelize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut upper_next = false;
    for ch in word.chars() {
        if matches!(ch, '_' | '-' | ' ') {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}

/// Camel-cases a `SCREAMING_SNAKE` constant identifier after lower-casing it.
pub fn camelize_constant(name: &str) -> String {
    camelize(&name.to_lowercase())
}
