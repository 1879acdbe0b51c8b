// Utility functions for FormCraft components

use std::sync::OnceLock;

use regex::Regex;

/// Normalise a class list: trim and collapse runs of whitespace to one space
pub fn class_names(classes: &str) -> String {
    static WHITESPACE: OnceLock<Option<Regex>> = OnceLock::new();

    let trimmed = classes.trim();
    match WHITESPACE.get_or_init(|| Regex::new(r"\s+").ok()) {
        Some(re) => re.replace_all(trimmed, " ").into_owned(),
        None => trimmed.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

/// Join optional class fragments, skipping empty ones
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined = parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    class_names(&joined)
}

/// Identifier utilities
pub mod id {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::distributions::Alphanumeric;
    use rand::Rng;

    /// Generate a repeater item id: `item-<millis>-<random suffix>`
    pub fn generate_item_id() -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(|c| char::from(c).to_ascii_lowercase())
            .collect();
        format!("item-{millis}-{suffix}")
    }
}

/// String utilities
pub mod string {
    /// Case-insensitive substring match
    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Math utilities
pub mod math {
    /// Clamp a value between a minimum and maximum
    pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Format a number without a trailing `.0` for whole values
    pub fn format_number(value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(class_names("  a\n   b\tc  "), "a b c");
        assert_eq!(class_names("   "), "");
        assert_eq!(join_classes(["a", "", "  ", "b c"]), "a b c");
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = id::generate_item_id();
        let b = id::generate_item_id();
        assert!(a.starts_with("item-"));
        assert_eq!(a.split('-').count(), 3);
        assert_ne!(a, b);
    }

    #[test]
    fn test_math() {
        assert_eq!(math::clamp(15, 0, 10), 10);
        assert_eq!(math::clamp(-1.5, 0.0, 1.0), 0.0);
        assert_eq!(math::format_number(3.0), "3");
        assert_eq!(math::format_number(2.5), "2.5");
    }

    #[test]
    fn test_string() {
        assert!(string::contains_ignore_case("Read Access", "access"));
    }
}
