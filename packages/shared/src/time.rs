//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the server time stamped on chat messages and sessions.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in UTC (milliseconds)
    fn now_millis(&self) -> i64;
}

/// Wall clock used by the running server.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        get_utc_timestamp()
    }
}

/// Clock pinned to one instant.
///
/// Every message committed through it carries the same `timestamp`, so tests
/// can compare whole `new_message` / `chat_history` payloads.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant_millis: i64,
}

impl FixedClock {
    pub fn new(instant_millis: i64) -> Self {
        Self { instant_millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.instant_millis
    }
}

/// Get current Unix timestamp in UTC (milliseconds)
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to an RFC 3339 UTC string.
///
/// The output always carries millisecond precision and a `Z` suffix, e.g.
/// `2023-01-01T00:00:00.123Z`. Out-of-range inputs render as the Unix epoch.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 string back into a Unix timestamp (milliseconds).
pub fn rfc3339_to_timestamp(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Render a Unix timestamp (milliseconds) as a short local-free `HH:MM` label.
pub fn timestamp_to_clock_label(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .format("%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_returns_non_zero_timestamp() {
        // テスト項目: SystemClock が 0 以外のタイムスタンプを返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp = clock.now_millis();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_fixed_clock_stamps_messages_with_same_wire_timestamp() {
        // テスト項目: FixedClock で刻んだ時刻は、何度取得しても同じ wire 形式の timestamp になる
        // given (前提条件): 2026-10-19 12:34:56.789 UTC
        let clock = FixedClock::new(1792413296789);

        // when (操作): 2 件のメッセージ分の時刻を取得
        let first = timestamp_to_rfc3339(clock.now_millis());
        let second = timestamp_to_rfc3339(clock.now_millis());

        // then (期待する結果):
        assert_eq!(first, "2026-10-19T12:34:56.789Z");
        assert_eq!(first, second);
        assert_eq!(rfc3339_to_timestamp(&first), Some(clock.now_millis()));
    }

    #[test]
    fn test_timestamp_to_rfc3339_with_milliseconds() {
        // テスト項目: ミリ秒を含むタイムスタンプが UTC の RFC 3339 形式に変換される
        // given (前提条件): 2023-01-01 00:00:00.123 UTC
        let timestamp = 1672531200123;

        // when (操作):
        let result = timestamp_to_rfc3339(timestamp);

        // then (期待する結果):
        assert_eq!(result, "2023-01-01T00:00:00.123Z");
    }

    #[test]
    fn test_rfc3339_to_timestamp_accepts_offsets() {
        // テスト項目: オフセット付きの文字列も UTC ミリ秒に戻せる
        // given (前提条件):
        let value = "2023-01-01T09:00:00.000+09:00";

        // when (操作):
        let result = rfc3339_to_timestamp(value);

        // then (期待する結果):
        assert_eq!(result, Some(1672531200000));
        assert_eq!(rfc3339_to_timestamp("not a date"), None);
    }

    #[test]
    fn test_timestamp_to_clock_label() {
        // テスト項目: 時刻ラベルが HH:MM 形式になる
        // given (前提条件): 2023-01-01 13:05:09 UTC
        let timestamp = 1672578309000;

        // when (操作):
        let label = timestamp_to_clock_label(timestamp);

        // then (期待する結果):
        assert_eq!(label, "13:05");
    }
}
