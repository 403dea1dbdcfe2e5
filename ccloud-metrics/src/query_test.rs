#[cfg(test)]
mod tests {
    use crate::query::{Metric, MetricsQuery, QueryInterval};
    use chrono::{DateTime, TimeDelta, TimeZone, Timelike, Utc};

    fn frozen_now() -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-05T14:07:09.123456+02:00").expect("valid timestamp")
    }

    /// Test: Payload matches the historical template byte-for-byte
    ///
    /// Expected
    /// - Metric name, cluster id and interval land in their slots
    /// - Two-space indentation, keys in wire order, no trailing newline
    #[test]
    fn test_payload_is_deterministic() {
        let interval = QueryInterval::trailing_hour(frozen_now());
        let query = MetricsQuery::new(Metric::ReceivedBytes, "lkc-123", &interval);

        let expected = r#"{
  "aggregations": [
    {
      "metric": "io.confluent.kafka.server/received_bytes"
    }
  ],
  "filter": {
    "field": "resource.kafka.id",
    "op": "EQ",
    "value": "lkc-123"
  },
  "granularity": "PT1M",
  "intervals": [
    "2024-03-05T13:07:09+02:00/2024-03-05T14:07:09+02:00"
  ],
  "limit": 1
}"#;

        assert_eq!(query.to_payload().expect("encode"), expected);
    }

    /// Test: Cluster ids are escaped rather than spliced into the document
    #[test]
    fn test_payload_escapes_cluster_id() {
        let interval = QueryInterval::trailing_hour(frozen_now());
        let query = MetricsQuery::new(Metric::SentBytes, "lkc-\"x\"", &interval);
        let payload = query.to_payload().expect("encode");

        let parsed: serde_json::Value = serde_json::from_str(&payload).expect("valid json");
        assert_eq!(parsed["filter"]["value"], "lkc-\"x\"");
        assert_eq!(
            parsed["aggregations"][0]["metric"],
            "io.confluent.kafka.server/sent_bytes"
        );
    }

    /// Test: Interval ends are one hour apart, whole seconds, offset-aware
    #[test]
    fn test_trailing_hour_interval() {
        let interval = QueryInterval::trailing_hour(frozen_now());

        assert_eq!(interval.end - interval.start, TimeDelta::hours(1));
        assert_eq!(interval.start.nanosecond(), 0);
        assert_eq!(interval.end.nanosecond(), 0);
        assert_eq!(interval.end.offset().local_minus_utc(), 2 * 3600);

        let rendered = interval.to_string();
        let (start, end) = rendered.split_once('/').expect("two ends");
        assert!(start.ends_with("+02:00"));
        assert!(end.ends_with("+02:00"));
        assert!(!rendered.contains('.'));
    }

    /// Test: UTC renders with a numeric offset, not `Z`
    #[test]
    fn test_interval_renders_utc_offset() {
        let now = DateTime::parse_from_rfc3339("2024-01-01T00:30:00Z").expect("valid timestamp");
        let interval = QueryInterval::trailing_hour(now);

        assert_eq!(
            interval.to_string(),
            "2023-12-31T23:30:00+00:00/2024-01-01T00:30:00+00:00"
        );
    }

    /// Test: Zone-aware input is rendered with the offset of each end
    #[test]
    fn test_interval_from_zoned_clock() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 1, 30, 0).unwrap()
            + TimeDelta::milliseconds(250);
        let interval = QueryInterval::trailing_hour(now);

        assert_eq!(
            interval.to_string(),
            "2024-03-31T00:30:00+00:00/2024-03-31T01:30:00+00:00"
        );
        assert_eq!(interval.end - interval.start, TimeDelta::hours(1));
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::ReceivedBytes.name(), "received_bytes");
        assert_eq!(Metric::ActiveConnectionCount.to_string(), "active_connection_count");
        assert_eq!(
            Metric::RequestCount.qualified_name(),
            "io.confluent.kafka.server/request_count"
        );
    }
}
