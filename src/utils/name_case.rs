//! Field name to column name conversions.
//!
//! These back the stock [`FieldMapper`](crate::FieldMapper)s and the
//! `name_case` configuration setting.
//!
//! ## Examples
//! - `"HomeAway"` → lower `"homeaway"`, upper `"HOMEAWAY"`, snake `"home_away"`
//! - `"UserID"` → snake `"user_id"`
//! - `"HTTPServer"` → snake `"http_server"`

/// Convert a `CamelCase` (or already `snake_case`) identifier to `snake_case`.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or a digit, and before the last capital of an acronym
/// when a lowercase letter follows it.
///
/// # Examples
/// ```
/// use rowmapper::utils::name_case::to_snake_case;
///
/// assert_eq!(to_snake_case("HomeAway"), "home_away");
/// assert_eq!(to_snake_case("UserID"), "user_id");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("good_bye"), "good_bye");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

pub fn to_lower_case(name: &str) -> String {
    name.to_lowercase()
}

pub fn to_upper_case(name: &str) -> String {
    name.to_uppercase()
}
