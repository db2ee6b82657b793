/// Date and time formatting for list pages (dd/mm/yyyy, as used by the
/// organization's paper forms)
use chrono::{DateTime, Datelike, NaiveDate};

/// "2024-03-15T14:02:26Z" -> "15/03/2024 14:02"; unparsable input is returned as-is
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Full years between `birth` and `today`
pub fn age_on(birth: &NaiveDate, today: &NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(1987, 5, 2).unwrap();
        assert_eq!(format_date(&date), "02/05/1987");
    }

    #[test]
    fn test_age_on() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let before_birthday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_on(&birth, &before_birthday), 33);
        assert_eq!(age_on(&birth, &on_birthday), 34);
        assert_eq!(age_on(&on_birthday, &birth), 0);
    }
}
