use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Renders a conversation timestamp relative to `now`, for list display.
///
/// Same calendar day comes out as `HH:MM`, one day back as `Hier`,
/// two to six days back as `Il y a {N}j`, anything older (or in the
/// future) as an absolute `DD/MM/YYYY` date. Unparseable input renders
/// as an empty string so a bad row never breaks the whole list.
pub fn relative_time(raw: &str, now: DateTime<Local>) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return String::new();
    };
    let day_diff = (now.date_naive() - then.date_naive()).num_days();
    match day_diff {
        0 => then.format("%H:%M").to_string(),
        1 => "Hier".to_string(),
        2..=6 => format!("Il y a {day_diff}j"),
        _ => then.format("%d/%m/%Y").to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local));
    }
    // MySQL DATETIME column values come through without an offset
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Local.from_local_datetime(&naive).single();
        }
    }
    None
}

/// Formats a byte count with base-1024 thresholds.
pub fn human_size(bytes: u64) -> String {
    match bytes {
        0..KIB => format!("{bytes} B"),
        KIB..MIB => format!("{:.1} KB", bytes as f64 / KIB as f64),
        MIB..GIB => format!("{:.1} MB", bytes as f64 / MIB as f64),
        _ => format!("{:.1} GB", bytes as f64 / GIB as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap()
    }

    #[test]
    fn same_day_renders_clock_time() {
        assert_eq!(relative_time("2024-03-10T09:00:00", now()), "09:00");
    }

    #[test]
    fn one_day_back_renders_hier() {
        assert_eq!(relative_time("2024-03-09T09:00:00", now()), "Hier");
    }

    #[test]
    fn few_days_back_renders_day_count() {
        assert_eq!(relative_time("2024-03-05T09:00:00", now()), "Il y a 5j");
        assert_eq!(relative_time("2024-03-08T23:59:59", now()), "Il y a 2j");
    }

    #[test]
    fn older_renders_absolute_date() {
        assert_eq!(relative_time("2024-02-01T09:00:00", now()), "01/02/2024");
    }

    #[test]
    fn seven_days_is_already_absolute() {
        assert_eq!(relative_time("2024-03-03T09:00:00", now()), "03/03/2024");
    }

    #[test]
    fn unparseable_renders_empty() {
        assert_eq!(relative_time("not-a-timestamp", now()), "");
        assert_eq!(relative_time("", now()), "");
    }

    #[test]
    fn mysql_datetime_format_is_accepted() {
        assert_eq!(relative_time("2024-03-10 09:00:00", now()), "09:00");
    }

    #[test]
    fn sizes_pick_the_nearest_unit() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }
}
