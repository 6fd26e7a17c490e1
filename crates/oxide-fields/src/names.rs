//! Field names and HTML ids derived from labels.

/// Calculates a field name from an arbitrary label.
///
/// The label is upper-cased first. Characters other than letters, digits,
/// underscores and spaces are then removed and spaces become underscores.
///
/// ```
/// use oxide_fields::name_for;
///
/// assert_eq!(name_for("Start Date"), "START_DATE");
/// assert_eq!(name_for("Owner's E-mail *"), "OWNERS_EMAIL");
/// ```
pub fn name_for(label: &str) -> String {
    label
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ')
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// Calculates an HTML id from an arbitrary string.
///
/// ```
/// use oxide_fields::id_for;
///
/// assert_eq!(id_for("New \"special\" Record"), "new-special-record");
/// ```
pub fn id_for(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "-")
}
