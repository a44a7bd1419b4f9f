use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// Long Indonesian date with time, e.g. `18 Oktober 2026 pukul 14.05`.
pub fn format_date_id(dt: &DateTime<Utc>) -> String {
    format!(
        "{} {} {} pukul {:02}.{:02}",
        dt.day(),
        MONTHS_ID[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

/// CSS width for a proficiency bar.
pub fn bar_width(level: i32) -> String {
    format!("{}%", level.clamp(0, 100))
}

/// Badge text for the unread tile.
pub fn unread_badge(count: u64) -> String {
    if count > 9 { "9+".to_string() } else { count.to_string() }
}
