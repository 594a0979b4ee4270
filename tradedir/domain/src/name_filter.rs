/// Vocabulary of form controls that directory pages render next to real
/// listings. Any candidate containing one of these is not a company.
pub const FORM_CONTROL_TERMS: [&str; 14] = [
    "email", "message", "captcha", "username", "password", "login", "submit", "search", "query",
    "input", "button", "form", "field", "label",
];

const MIN_NAME_CHARS: usize = 3;

pub fn is_plausible_company_name(candidate: &str) -> bool {
    let trimmed = candidate.trim();

    if trimmed.chars().count() <= MIN_NAME_CHARS {
        return false;
    }

    if trimmed.contains(':') {
        return false;
    }

    let lowered = trimmed.to_lowercase();
    !FORM_CONTROL_TERMS.iter().any(|term| lowered.contains(term))
}

/// Collapses runs of whitespace (including newlines from table markup) to a
/// single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
