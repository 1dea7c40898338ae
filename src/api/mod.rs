use serde::Serialize;
use serde_json::Value;

/// Request body posted to the chat endpoint.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Pull the reply text out of a parsed response body.
///
/// Only a string `response` field on a JSON object counts. Anything else
/// (missing field, null, number, array body) yields an empty string, which the
/// session replaces with its fallback reply.
pub fn extract_reply_text(body: &Value) -> String {
    body.get("response")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_single_message_field() {
        let body = serde_json::to_value(ChatRequest { message: "hi" }).unwrap();
        assert_eq!(body, json!({ "message": "hi" }));
    }

    #[test]
    fn string_response_is_extracted() {
        assert_eq!(
            extract_reply_text(&json!({ "response": "Article 8-28 ..." })),
            "Article 8-28 ..."
        );
    }

    #[test]
    fn other_shapes_are_treated_as_absent() {
        assert_eq!(extract_reply_text(&json!({})), "");
        assert_eq!(extract_reply_text(&json!({ "response": null })), "");
        assert_eq!(extract_reply_text(&json!({ "response": 42 })), "");
        assert_eq!(extract_reply_text(&json!(["response"])), "");
        assert_eq!(extract_reply_text(&json!("response")), "");
    }
}
