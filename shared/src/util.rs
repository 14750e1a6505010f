/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// Used for assets, requests, assignments and packages so ids stay sortable
/// by creation time and safe to hand to a JS frontend.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Tracking label for a package row: `TRK-<millis>-<4 digits>`.
pub fn tracking_id() -> String {
    use rand::Rng;
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!("TRK-{}-{suffix:04}", now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_fits_js_safe_integer() {
        for _ in 0..100 {
            let id = snowflake_id();
            assert!(id > 0);
            assert!(id <= 0x1F_FFFF_FFFF_FFFF); // 2^53 - 1
        }
    }

    #[test]
    fn tracking_id_has_expected_shape() {
        let id = tracking_id();
        assert!(id.starts_with("TRK-"));
        assert_eq!(id.split('-').count(), 3);
    }
}
