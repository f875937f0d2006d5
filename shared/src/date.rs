//! 时间类型模块
//!
//! 提供两种时间类型：
//! - `Timestamp`: 可序列化的毫秒时间戳，用于通知过期判断和乐观更新
//! - `Date`: 操作型时间类型，提供 now(), parse() 以及界面展示格式

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

// =========================================================
// Timestamp - 可传输的时间戳类型
// =========================================================

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 当前时间
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// RFC 3339 字符串，用于乐观更新的 `updated_at`
    pub fn to_rfc3339(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .unwrap_or_default()
            .to_rfc3339()
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（负值截断为 0）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

// =========================================================
// Date - 展示用时间
// =========================================================

/// 解析服务端返回的时间字符串
///
/// 支持 RFC 3339（`2025-01-15T10:00:00.000000Z`）以及纯日期（`2025-01-15`）。
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 表格中的短日期，例如 `Jan 15, 2025`；无法解析时显示 `N/A`
pub fn short_date(s: &str) -> String {
    parse(s)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// 长日期，例如 `January 15, 2025`
pub fn long_date(s: &str) -> String {
    parse(s)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// 控制台首页的时钟：(`14:05`, `Wednesday, January 15, 2025`)
pub fn clock_now() -> (String, String) {
    let now = Local::now();
    (
        now.format("%H:%M").to_string(),
        now.format("%A, %B %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_server_dates() {
        assert_eq!(short_date("2025-01-15T10:00:00.000000Z"), "Jan 15, 2025");
        assert_eq!(long_date("2025-03-10"), "March 10, 2025");
        assert_eq!(short_date("not a date"), "N/A");
    }

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp::new(1_000);
        assert_eq!((t + Duration::from_millis(500)).as_millis(), 1_500);
        assert_eq!(Timestamp::new(900) - t, Duration::ZERO);
        assert_eq!(Timestamp::new(0).to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }
}
