use chrono::{Local, NaiveDate, NaiveDateTime, Utc};

/// Today in the browser's timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as the API counts membership days (UTC)
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d %b %Y, %H:%M").to_string()
}

pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Value for an `<input type="date">`
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_for_display() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05 Mar 2024");
        assert_eq!(format_datetime(date.and_hms_opt(14, 7, 0).unwrap()), "05 Mar 2024, 14:07");
        assert_eq!(format_amount(1200.0), "₹1200.00");
        assert_eq!(input_value(Some(date)), "2024-03-05");
        assert_eq!(input_value(None), "");
    }
}
