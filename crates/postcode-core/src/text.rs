// crates/postcode-core/src/text.rs

/// Convert a name into the key used for indexing and comparison.
///
/// Trims surrounding whitespace and lowercases. No transliteration or other
/// folding is applied, so `"Shah Alam"`, `" SHAH ALAM "` and `"shah alam"`
/// share a key but `"Shah-Alam"` does not.
///
/// # Examples
///
/// ```rust
/// use postcode_core::text::fold_key;
///
/// assert_eq!(fold_key("  Johor Bahru "), "johor bahru");
/// assert_eq!(fold_key("   "), "");
/// ```
pub fn fold_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Joins `items` with `", "`, keeping at most `max` of them and appending a
/// `… (+N more)` marker when some were cut.
pub fn preview_list<S: AsRef<str>>(items: &[S], max: usize) -> String {
    let shown = items
        .iter()
        .take(max)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > max {
        format!("{shown}, … (+{} more)", items.len() - max)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_trims_and_lowercases() {
        assert_eq!(fold_key(" Kuala LUMPUR\t"), "kuala lumpur");
        assert_eq!(fold_key(" IPOH "), fold_key("Ipoh"));
        assert_ne!(fold_key("Ipoh Garden"), fold_key("Ipoh"));
    }

    #[test]
    fn preview_list_marks_truncation() {
        let pcs = ["01000", "01007", "01009"];
        assert_eq!(preview_list(&pcs, 5), "01000, 01007, 01009");
        assert_eq!(preview_list(&pcs, 2), "01000, 01007, … (+1 more)");
        assert_eq!(preview_list::<&str>(&[], 3), "");
    }
}
