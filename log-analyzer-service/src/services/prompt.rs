//! Prompt rendering for network log analysis.

use crate::models::LogRecord;

/// Fixed instructions placed ahead of the serialized records.
pub const ANALYSIS_INSTRUCTIONS: &str = "You are an expert network analyst. Analyze the following network logs to \
     identify any potential issues, anomalies, or security threats. \
     Summarize your findings, and provide key insights. \
     Here are the network logs:";

/// Serialize records as a pretty-printed JSON array.
///
/// Record order and key order are kept as received.
pub fn serialize_records(records: &[LogRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Render the full prompt for an already-serialized batch.
pub fn render_prompt(serialized_records: &str) -> String {
    format!("{}\n\n{}", ANALYSIS_INSTRUCTIONS, serialized_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> LogRecord {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn instructions_match_template_text() {
        assert_eq!(
            ANALYSIS_INSTRUCTIONS,
            "You are an expert network analyst. Analyze the following network logs to identify \
             any potential issues, anomalies, or security threats. Summarize your findings, and \
             provide key insights. Here are the network logs:"
        );
    }

    #[test]
    fn prompt_places_records_after_blank_line() {
        let prompt = render_prompt("[]");

        assert!(prompt.starts_with(ANALYSIS_INSTRUCTIONS));
        assert!(prompt.ends_with("Here are the network logs:\n\n[]"));
    }

    #[test]
    fn numbers_beyond_f64_precision_are_kept_verbatim() {
        let records: Vec<LogRecord> = serde_json::from_str(
            r#"[{"flow_id": 123456789012345678901234567890,
                 "bytes": 18446744073709551616,
                 "ratio": 0.1000000000000000055511151231257827}]"#,
        )
        .unwrap();

        let text = serialize_records(&records).unwrap();

        assert!(text.contains("\"flow_id\": 123456789012345678901234567890"));
        assert!(text.contains("\"bytes\": 18446744073709551616"));
        assert!(text.contains("\"ratio\": 0.1000000000000000055511151231257827"));
    }

    #[test]
    fn serialization_round_trips_every_record_in_order() {
        let records = vec![
            record(json!({ "b": 1, "a": "x" })),
            record(json!({ "nested": { "list": [1, 2, { "deep": null }] }, "ok": false })),
        ];

        let text = serialize_records(&records).unwrap();
        let parsed: Vec<LogRecord> = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, records);
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
        assert!(text.find("\"a\"").unwrap() < text.find("\"nested\"").unwrap());
    }
}
