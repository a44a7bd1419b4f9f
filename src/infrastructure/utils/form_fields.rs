use validator::ValidationError;

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Blank text inputs mean "no value".
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits the comma separated tech stack input, trimming every entry and
/// dropping the empty ones left behind by stray or trailing commas.
pub fn split_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_tech_stack(stack: &[String]) -> String {
    stack.join(", ")
}
