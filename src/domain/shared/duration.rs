/// Formats a duration as `"<H> hours <M> mins"`.
///
/// Negative input never occurs in practice, but the formatter must not lose it
/// either: the magnitude is formatted from the absolute value and the sign is
/// preserved as a `-` prefix on the text.
pub fn format_duration(seconds: i64) -> String {
    let abs = seconds.unsigned_abs();
    let hours = abs / 3600;
    let mins = (abs % 3600) / 60;

    if seconds < 0 {
        format!("-{hours} hours {mins} mins")
    } else {
        format!("{hours} hours {mins} mins")
    }
}
