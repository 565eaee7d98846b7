pub mod calendar;
pub mod summary;

use anyhow::Result;
use chrono::Duration;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Hours as a short duration, rounded to the minute. For example 1.5 is `1h30m`. Values that
/// don't fit a duration are printed as plain hours.
pub fn format_hours(hours: f64) -> String {
    let minutes = (hours * 60.).round();
    let Some(v) = minutes
        .is_finite()
        .then(|| Duration::try_minutes(minutes as i64))
        .flatten()
    else {
        return format!("{hours}h");
    };
    if v.num_hours() > 0 {
        format!("{}h{}m", v.num_hours(), v.num_minutes() % 60)
    } else {
        format!("{}m", v.num_minutes())
    }
}
