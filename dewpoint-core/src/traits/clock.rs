//! Monotonic millisecond clock

/// Source of monotonic time in milliseconds
///
/// The counter is allowed to wrap; consumers must only compare timestamps
/// through [`elapsed_ms`].
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

/// Milliseconds from `since` to `now`, tolerant of counter wraparound
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
