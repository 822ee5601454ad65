/// Convert an identifier to kebab-case.
///
/// Words are split on whitespace, `_`, `-` and case boundaries, lowercased
/// and joined with `-`. Acronym runs stay together (`HTMLParser` becomes
/// `html-parser`) and digits stick to the preceding word (`v2Api` becomes
/// `v2-api`).
///
/// The result is stable under reapplication: `kebab_case(&kebab_case(s)) == kebab_case(s)`.
///
/// # Example
///
/// ```rust
/// use routesynth::generator::kebab_case;
///
/// assert_eq!(kebab_case("UserProfile"), "user-profile");
/// assert_eq!(kebab_case("export_csv"), "export-csv");
/// assert_eq!(kebab_case("user-profile"), "user-profile");
/// ```
pub fn kebab_case(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for chunk in s.split(is_separator).filter(|c| !c.is_empty()) {
        split_case_boundaries(chunk, &mut words);
    }
    words.join("-")
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

// Uppercase letters without a distinct lowercase form are caseless here,
// otherwise lowercasing could create a new boundary on a second pass.
fn is_upper(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

fn split_case_boundaries(chunk: &str, words: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut start = 0;
    for i in 1..chars.len() {
        if !is_upper(chars[i]) {
            continue;
        }
        let prev = chars[i - 1];
        let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
        let boundary = prev.is_lowercase()
            || prev.is_numeric()
            || (is_upper(prev) && next_is_lower);
        if boundary {
            words.push(lower(&chars[start..i]));
            start = i;
        }
    }
    words.push(lower(&chars[start..]));
}

fn lower(chars: &[char]) -> String {
    chars.iter().collect::<String>().to_lowercase()
}
