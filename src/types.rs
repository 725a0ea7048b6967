use serde::{Deserialize, Serialize};

/// Result of checking a user prompt before it reaches the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundVerdict {
    pub accepted: bool,
    pub reason: String,
}

/// A model reply after outbound redaction. Outbound text is always
/// accepted; `was_redacted` records whether anything was replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundText {
    pub text: String,
    pub was_redacted: bool,
}

/// Final result of running one prompt through the moderation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PromptOutcome {
    /// Inbound moderation failed; the model was never called.
    Rejected { reason: String },
    /// The model answered; `text` has already been redacted if needed.
    Answered { text: String, was_redacted: bool },
    /// The model call failed; `message` is safe to display as-is.
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::PromptOutcome;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = PromptOutcome::Answered {
            text: "[REDACTED] has shaped history.".to_owned(),
            was_redacted: true,
        };
        let json = serde_json::to_value(&outcome).expect("outcome should serialize");
        assert_eq!(json["status"], "answered");
        assert_eq!(json["was_redacted"], true);
    }
}
