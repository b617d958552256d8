//! Field checks and coercion for user-entered values.

/// Checks a free-text field before it reaches the stores.
///
/// Records are stored as `;` separated lines without escaping, so `;` and
/// line breaks cannot be represented.
pub fn check_field(name: &str, value: &str) -> Result<(), String> {
    if value.contains(';') || value.contains('\n') || value.contains('\r') {
        return Err(format!("{} cannot contain ';' or line breaks", name));
    }
    Ok(())
}

/// Coerces an integer field, allowing surrounding whitespace.
pub fn parse_int(name: &str, value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number", name))
}

/// Returns the given date, or today's local date when blank.
pub fn date_or_today(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => date.to_string(),
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_field_rejects_separator() {
        assert!(check_field("Title", "Dune").is_ok());
        assert!(check_field("Title", "Dune; Messiah").is_err());
        assert!(check_field("Title", "Dune\nMessiah").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("Year", " 1937 "), Ok(1937));
        assert_eq!(parse_int("Fees", "-5"), Ok(-5));
        assert!(parse_int("Year", "nineteen").is_err());
    }

    #[test]
    fn test_date_or_today() {
        assert_eq!(date_or_today(Some("2024-01-01")), "2024-01-01");

        let today = date_or_today(Some("   "));
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
