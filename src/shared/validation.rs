use validator::ValidationErrors;

/// Pull the first human-readable message out of a `ValidationErrors`.
///
/// The wire contract returns bare Indonesian sentences (e.g.
/// "Password minimal 6 karakter!"), so the `field: message` rendering of
/// `ValidationErrors::to_string` is not usable directly.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Data tidak valid!".to_string())
}
