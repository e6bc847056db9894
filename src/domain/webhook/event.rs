//! Webhook event payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event pushed by bundle.social after its signature has been verified.
///
/// Any JSON document is an event; the gateway only reads the `type` field
/// for logging and otherwise leaves the payload alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookEvent(Value);

impl WebhookEvent {
    /// `type` of the event, or `unknown` when absent or not a string
    pub fn event_type(&self) -> &str {
        self.0
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }

    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_deserialization() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "type": "post.published",
            "data": { "id": "post-1" },
            "createdAt": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(event.event_type(), "post.published");
        assert_eq!(event.data().unwrap()["id"], "post-1");
        assert_eq!(event.payload()["createdAt"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_event_without_type() {
        let event: WebhookEvent = serde_json::from_value(json!({})).unwrap();

        assert_eq!(event.event_type(), "unknown");
        assert!(event.data().is_none());
    }

    #[test]
    fn test_any_json_shape_is_an_event() {
        for payload in [
            json!({ "type": 123, "data": {} }),
            json!({ "type": { "name": "x" } }),
            json!([{ "type": "post.published" }]),
            json!("just a string"),
        ] {
            let event: WebhookEvent = serde_json::from_value(payload.clone()).unwrap();

            assert_eq!(event.event_type(), "unknown");
            assert_eq!(event.payload(), &payload);
        }
    }
}
