/// Converts a raw Hive reputation into the familiar display score (25 for new accounts).
///
/// The magnitude is clamped at zero before the sign is applied, so any raw value whose
/// absolute size is at most 10^9 (negative ones included) maps to exactly 25.
pub fn calculate_reputation(raw: Option<i64>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    // log10(0) is -inf, which the clamp below turns into 0.
    let magnitude = (raw as f64).abs().log10();
    let mut level = (magnitude - 9.0).max(0.0);
    if raw < 0 {
        level = -level;
    }

    round2(level * 9.0 + 25.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
