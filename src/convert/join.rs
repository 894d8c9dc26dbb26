//! Fragment casing and reassembly under a target convention.

/// Upper-case the first character and lower-case the rest.
///
/// Existing internal capitals are not preserved: `"HTML"` becomes `"Html"`.
/// An empty fragment is returned unchanged.
pub(super) fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(fragment.len());
    result.extend(first.to_uppercase());
    result.push_str(&chars.as_str().to_lowercase());
    result
}

/// Lower-case every fragment and join with `-`.
pub(super) fn to_kebab(fragments: &[&str]) -> String {
    lower_all(fragments).join("-")
}

/// Lower-case every fragment and join with `_`.
pub(super) fn to_snake(fragments: &[&str]) -> String {
    lower_all(fragments).join("_")
}

/// Capitalize every fragment, no delimiter.
pub(super) fn to_pascal(fragments: &[&str]) -> String {
    fragments.iter().map(|f| capitalize(f)).collect()
}

/// Lower-case the first fragment, capitalize the rest, no delimiter.
pub(super) fn to_camel(fragments: &[&str]) -> String {
    fragments
        .iter()
        .enumerate()
        .map(|(i, f)| if i == 0 { f.to_lowercase() } else { capitalize(f) })
        .collect()
}

fn lower_all(fragments: &[&str]) -> Vec<String> {
    fragments.iter().map(|f| f.to_lowercase()).collect()
}
