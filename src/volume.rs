//! dB → linear volume conversion for the `--dry`/`--wet` CLI mix
//! (SPEC_FULL.md §6.4).

/// Convert a decibel value to a linear gain multiplier.
///
/// `10^(db/20)`, except `|db| >= 128.0` mutes the path entirely (returns
/// `0.0`) rather than computing an astronomically large or small
/// multiplier — the sentinel the original tool used for "path disabled".
pub fn db_to_linear(db: f32) -> f32 {
    if db.abs() >= 128.0 {
        return 0.0;
    }
    10f32.powf(db / 20.0)
}
