use chrono::{DateTime, Utc};

/// Formats a notification timestamp as a relative "time ago" string for the
/// dropdown rows.
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else {
        format!("{} day{} ago", days, plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();

        let seconds_ago = now - chrono::Duration::seconds(30);
        assert_eq!(time_ago(seconds_ago, now), "Just now");

        let one_minute = now - chrono::Duration::minutes(1);
        assert_eq!(time_ago(one_minute, now), "1 minute ago");

        let half_hour = now - chrono::Duration::minutes(30);
        assert_eq!(time_ago(half_hour, now), "30 minutes ago");

        let two_hours = now - chrono::Duration::hours(2);
        assert_eq!(time_ago(two_hours, now), "2 hours ago");

        let three_days = now - chrono::Duration::days(3);
        assert_eq!(time_ago(three_days, now), "3 days ago");
    }
}
