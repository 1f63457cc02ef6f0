/// Date portion of an ISO 8601 string, as the API returns exhibition dates.
/// Example: "2026-05-10T00:00:00" -> "2026-05-10"
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_time_part() {
        assert_eq!(date_part("2026-05-10T00:00:00"), "2026-05-10");
        assert_eq!(date_part("2024-12-31T23:59:59.123Z"), "2024-12-31");
    }

    #[test]
    fn leaves_plain_dates_alone() {
        assert_eq!(date_part("2026-05-10"), "2026-05-10");
        assert_eq!(date_part(""), "");
    }
}
