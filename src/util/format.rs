use crate::core::constants::{PIN_LENGTH, SEPARATOR};

/// Strips every non-alphanumeric character and uppercases the rest.
///
/// This is the canonical form fed to the decoder; separators are cosmetic.
pub fn normalize_pin(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Re-groups a pin into the 3-3-4 display form, e.g. `39J-49L-L8T4`.
///
/// Input is normalized first and truncated to 10 symbols. Shorter input is
/// grouped as far as it goes, so partially typed pins format incrementally.
pub fn format_pin(input: &str) -> String {
    let mut clean = normalize_pin(input);
    clean.truncate(PIN_LENGTH);

    if clean.len() > 6 {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            &clean[..3],
            &clean[3..6],
            &clean[6..]
        )
    } else if clean.len() > 3 {
        format!("{}{SEPARATOR}{}", &clean[..3], &clean[3..])
    } else {
        clean
    }
}
