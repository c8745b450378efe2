/// Rounds to two decimal places, half away from zero.
///
/// Every amount the engine hands back is a cent-level figure; this is the
/// single place that convention lives.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
