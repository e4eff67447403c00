//! Shared generator conventions (well-known identifiers and file names).

/// Placeholder identifier; constants with this name never join a group.
pub const PLACEHOLDER_IDENT: &str = "_";

/// Prefix prepended to a synthesized identifier until it no longer collides.
pub const ESCAPE_PREFIX: &str = "_";

/// Output name that routes the generated unit to standard output.
pub const STDOUT_DESTINATION: &str = "<STDOUT>";

/// Output name that routes the generated unit to standard error.
pub const STDERR_DESTINATION: &str = "<STDERR>";

/// Suffix of the default output file (`<type>_enum.rs`).
pub const OUTPUT_FILE_SUFFIX: &str = "_enum.rs";

/// Suffix of the generated per-type error enum (`KindError`).
pub const ERROR_TYPE_SUFFIX: &str = "Error";

/// Return `s` with its first character lowercased.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default receiver binding for a type: its first character, lowercased.
pub fn default_receiver_name(type_name: &str) -> String {
    type_name.chars().next().map(|c| lower_first(&c.to_string())).unwrap_or_default()
}

/// Convert a `CamelCase` type name to `snake_case`.
///
/// Acronym runs stay together (`HTTPStatus` becomes `http_status`).
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if i > 0 && !out.ends_with('_') && (prev_lower || (prev_upper && next_lower)) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Default output file name for a type (`StrKind` becomes `str_kind_enum.rs`).
pub fn default_output_file_name(type_name: &str) -> String {
    format!("{}{}", snake_case(type_name), OUTPUT_FILE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_receiver_name() {
        assert_eq!(default_receiver_name("Kind"), "k");
        assert_eq!(default_receiver_name("kind"), "k");
        assert_eq!(default_receiver_name("Ärger"), "ä");
        assert_eq!(default_receiver_name(""), "");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Kind"), "kind");
        assert_eq!(snake_case("StrKind"), "str_kind");
        assert_eq!(snake_case("HTTPStatus"), "http_status");
        assert_eq!(snake_case("Level2Kind"), "level2_kind");
        assert_eq!(snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_default_output_file_name() {
        assert_eq!(default_output_file_name("StrKind"), "str_kind_enum.rs");
    }
}
