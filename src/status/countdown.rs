/// Countdown formatting
///
/// Countdowns always run to :00 of the target minute. When the current second
/// is past :00, one minute is borrowed to pay for the partial minute.

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Seconds from `current_minute:current_second` to `target_minute:00` on the same day
pub fn seconds_until(target_minute: u32, current_minute: u32, current_second: u32) -> u64 {
    let total = (target_minute as i64 - current_minute as i64) * SECONDS_PER_MINUTE
        - current_second as i64;
    total.max(0) as u64
}

/// Seconds of a multi-day wait of `total_minutes_wait` minutes, started at `current_second`
pub fn seconds_until_long(total_minutes_wait: u32, current_second: u32) -> u64 {
    let total = total_minutes_wait as i64 * SECONDS_PER_MINUTE - current_second as i64;
    total.max(0) as u64
}

/// Same-day countdown, "Hh Mm Ss"
pub fn format_short(target_minute: u32, current_minute: u32, current_second: u32) -> String {
    let mut diff_minutes = target_minute as i64 - current_minute as i64;
    let mut diff_seconds = 60 - current_second as i64;

    if diff_seconds == 60 {
        diff_seconds = 0;
    } else {
        diff_minutes -= 1;
    }

    if diff_minutes < 0 {
        diff_minutes = 0;
    }

    format!("{}h {}m {}s", diff_minutes / 60, diff_minutes % 60, diff_seconds)
}

/// Multi-day countdown: "Dd Hh Mm" when at least a day away, otherwise "Hh Mm Ss"
pub fn format_long(total_minutes_wait: u32, current_second: u32) -> String {
    let mut remaining = seconds_until_long(total_minutes_wait, current_second) as i64;

    let days = remaining / SECONDS_PER_DAY;
    remaining %= SECONDS_PER_DAY;
    let hours = remaining / SECONDS_PER_HOUR;
    remaining %= SECONDS_PER_HOUR;
    let minutes = remaining / SECONDS_PER_MINUTE;
    let seconds = remaining % SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else {
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}
