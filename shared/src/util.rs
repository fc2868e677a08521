use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Timestamps are kept at microsecond precision, matching PostgreSQL `TIMESTAMPTZ`.
const SUBSEC_DIGITS: u16 = 6;

/// Naive forms accepted for `orderTime`, interpreted as UTC (JDBC `Timestamp` style)
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// 获取当前 UTC 时间（微秒精度）
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(SUBSEC_DIGITS)
}

/// Parse an order timestamp.
///
/// Accepts RFC 3339 with any offset (normalised to UTC) or a naive
/// `yyyy-MM-dd HH:mm:ss[.f]` value taken as UTC. Sub-microsecond digits are
/// truncated.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).trunc_subsecs(SUBSEC_DIGITS));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().trunc_subsecs(SUBSEC_DIGITS))
}
