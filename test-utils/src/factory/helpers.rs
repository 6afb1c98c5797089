//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a unique 11-digit phone number.
///
/// Unique columns such as `telefone` need distinct values across factory calls.
///
/// # Returns
/// - `String` - Digit-only phone number
pub fn next_phone() -> String {
    format!("119{:08}", next_id())
}
