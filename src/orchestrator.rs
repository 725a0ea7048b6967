use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    model::{ModelProvider, ModelRequest},
    moderation::ModerationPolicy,
    types::PromptOutcome,
};

const SYSTEM_PROMPT: &str = "You are a helpful, safe, and responsible AI assistant. \
You provide informative and constructive responses while maintaining ethical standards. \
You refuse to provide information that could be harmful, illegal, or dangerous. \
Always be respectful, professional, and focus on helping users in positive ways.";

/// Runs one prompt through inbound moderation, the model, and outbound
/// redaction. Total: every input yields a displayable [`PromptOutcome`].
pub struct ModerationOrchestrator {
    model: Arc<dyn ModelProvider>,
    policy: ModerationPolicy,
}

impl ModerationOrchestrator {
    pub fn new(model: Arc<dyn ModelProvider>, policy: ModerationPolicy) -> Self {
        Self { model, policy }
    }

    pub async fn process_prompt(&self, prompt: &str) -> PromptOutcome {
        let verdict = self.policy.evaluate_inbound(prompt);
        if !verdict.accepted {
            info!(reason = %verdict.reason, "prompt rejected by inbound moderation");
            return PromptOutcome::Rejected {
                reason: verdict.reason,
            };
        }
        debug!("prompt passed inbound moderation");

        let request = ModelRequest {
            system_prompt: SYSTEM_PROMPT.to_owned(),
            user_prompt: prompt.to_owned(),
        };

        match self.model.complete(request).await {
            Ok(reply) => {
                let outbound = self.policy.evaluate_outbound(&reply);
                if outbound.was_redacted {
                    info!("model reply contained banned keywords; redacted");
                } else {
                    debug!("model reply passed outbound moderation");
                }
                PromptOutcome::Answered {
                    text: outbound.text,
                    was_redacted: outbound.was_redacted,
                }
            }
            Err(error) => {
                warn!(%error, "model request failed");
                PromptOutcome::Failed {
                    message: format!("Error generating response: {error}"),
                }
            }
        }
    }
}
