//! Class-name helpers for modelgen.
//!
//! Table names are turned into model class names in two steps: studly
//! (PascalCase) conversion, then an optional English singularization of the
//! last word. This crate has no dependencies and is used by both the config
//! and the CLI crates.

// ============================================================================
// Studly Case
// ============================================================================

/// Convert a table name into a studly (PascalCase) class name.
///
/// `_`, `-` and whitespace separate words. The first character of each word
/// is upper-cased and the remaining characters are kept as they are.
///
/// # Examples
/// ```
/// use modelgen_naming::to_studly_case;
///
/// assert_eq!(to_studly_case("user_roles"), "UserRoles");
/// assert_eq!(to_studly_case("order-items"), "OrderItems");
/// assert_eq!(to_studly_case("userID"), "UserID");
/// ```
pub fn to_studly_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize = true;
    for c in s.chars() {
        let is_separator = c == '_' || c == '-' || c.is_whitespace();
        if is_separator {
            capitalize = true;
            continue;
        }
        if capitalize {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        capitalize = false;
    }
    result
}

// ============================================================================
// Singularization
// ============================================================================

const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
    "staff",
    "traffic",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("aliases", "alias"),
    ("analyses", "analysis"),
    ("buses", "bus"),
    ("campuses", "campus"),
    ("children", "child"),
    ("cookies", "cookie"),
    ("criteria", "criterion"),
    ("blouses", "blouse"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("houses", "house"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("menus", "menu"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("octopi", "octopus"),
    ("oxen", "ox"),
    ("people", "person"),
    ("quizzes", "quiz"),
    ("shoes", "shoe"),
    ("statuses", "status"),
    ("teeth", "tooth"),
    ("vertices", "vertex"),
    ("viri", "virus"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Suffix rewrites as `(suffix, replacement, letters that may not precede
/// the suffix)`, first match wins.
const SUFFIX_RULES: &[(&str, &str, &str)] = &[
    ("sses", "ss", ""),
    ("uses", "us", "a"),
    ("zzes", "zz", ""),
    ("ches", "ch", ""),
    ("shes", "sh", ""),
    ("xes", "x", ""),
    ("oes", "o", ""),
    ("lves", "lf", ""),
    ("ies", "y", ""),
    ("ss", "ss", ""),
    ("us", "us", ""),
    ("is", "is", ""),
    ("s", "", ""),
];

/// Reduce the last word of a (studly or snake) name to its English singular.
///
/// Only the trailing word is inspected: for `UserRoles` that is `Roles`, for
/// `user_roles` it is the whole string, which is fine because the rules only
/// ever rewrite the end. The casing of the rewritten word is preserved.
///
/// # Examples
/// ```
/// use modelgen_naming::singularize;
///
/// assert_eq!(singularize("UserRoles"), "UserRole");
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("People"), "Person");
/// assert_eq!(singularize("News"), "News");
/// ```
pub fn singularize(name: &str) -> String {
    let (head, last) = split_last_word(name);
    if last.is_empty() {
        return name.to_string();
    }
    let lower = last.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return name.to_string();
    }

    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return format!("{}{}", head, match_case(singular, last));
    }

    for (suffix, replacement, excluded) in SUFFIX_RULES {
        // a bare suffix ("s", "ies") is not a word to rewrite
        if !lower.ends_with(suffix) || lower.len() <= suffix.len() {
            continue;
        }
        let preceding = lower[..lower.len() - suffix.len()].chars().next_back();
        if preceding.is_some_and(|c| excluded.contains(c)) {
            continue;
        }
        let stem = &last[..last.len() - suffix.len()];
        let replacement = if is_all_uppercase(last) {
            replacement.to_ascii_uppercase()
        } else {
            replacement.to_string()
        };
        return format!("{}{}{}", head, stem, replacement);
    }

    name.to_string()
}

/// Split `UserRoles` into (`User`, `Roles`) and `user_roles` into
/// (`user_`, `roles`). All-uppercase names are treated as one word.
fn split_last_word(name: &str) -> (&str, &str) {
    let separator = name
        .char_indices()
        .rev()
        .find(|(_, c)| *c == '_' || *c == '-' || c.is_whitespace())
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    let (head, tail) = name.split_at(separator);

    if is_all_uppercase(tail) {
        return (head, tail);
    }

    let boundary = tail
        .char_indices()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(idx, _)| idx)
        .last()
        .unwrap_or(0);
    // keep acronyms like "UserIDs" together with their tail: "IDs" -> boundary at 'I'
    let boundary = acronym_start(tail, boundary);
    let (word_head, word) = tail.split_at(boundary);
    (&name[..head.len() + word_head.len()], word)
}

fn acronym_start(tail: &str, boundary: usize) -> usize {
    let bytes = tail.as_bytes();
    let mut start = boundary;
    while start > 0 && bytes[start - 1].is_ascii_uppercase() {
        start -= 1;
    }
    start
}

fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && !word.chars().any(|c| c.is_lowercase())
}

fn match_case(word: &str, template: &str) -> String {
    if is_all_uppercase(template) {
        return word.to_ascii_uppercase();
    }
    let starts_upper = template.chars().next().is_some_and(|c| c.is_uppercase());
    if starts_upper {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        word.to_string()
    }
}

/// Build the model class name for a table.
///
/// # Examples
/// ```
/// use modelgen_naming::class_name;
///
/// assert_eq!(class_name("user_roles", false), "UserRoles");
/// assert_eq!(class_name("user_roles", true), "UserRole");
/// ```
pub fn class_name(table: &str, singular: bool) -> String {
    let studly = to_studly_case(table);
    if singular { singularize(&studly) } else { studly }
}
