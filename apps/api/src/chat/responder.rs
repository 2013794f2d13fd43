//! Reply generation.
//!
//! Branches on the classified intent: canned text, database-backed lookups
//! (events, mentorship), the job matching engine, or the generation fallback
//! chain (remote API, then local model, then a static message). Never returns
//! an error; every failure degrades to reply text.

use tracing::warn;

use crate::chat::intent::Intent;
use crate::chat::lookups::{
    available_mentors, recent_events, render_external_events, render_internal_events,
    render_mentors, EVENTS_LIMIT, MENTORS_LIMIT,
};
use crate::chat::replies::{
    faq_reply, ASSISTANT_NAME, CAPABILITY_MENU, EVENTS_UNAVAILABLE_REPLY, GREETING_REPLY,
    HOW_ARE_YOU_REPLY, IRRELEVANT_REPLY, MENTORSHIP_INVITE_REPLY, MISSING_JOB_KEY_REPLY,
    NO_EVENTS_REPLY, NO_JOBS_REPLY, STATIC_FALLBACK_REPLY, THANK_YOU_REPLY,
};
use crate::jobs::matching::{match_jobs, render_listings, JobMatchOutcome};
use crate::models::conversation::ConversationTurn;
use crate::providers::generative::TextCompletion;
use crate::state::AppState;

/// Replies shorter than this are treated as too thin to stand alone.
const MIN_USEFUL_REPLY_CHARS: usize = 30;

/// Token budget for a generated chat reply.
const MAX_REPLY_TOKENS: u32 = 128;

/// Produces the reply for a classified message. Infallible by design: every
/// sub-step has a textual degrade path.
pub async fn generate(
    state: &AppState,
    intent: Intent,
    message: &str,
    user_id: Option<&str>,
    history: &[ConversationTurn],
) -> String {
    match intent {
        Intent::ThankYou => THANK_YOU_REPLY.to_string(),
        Intent::HowAreYou => HOW_ARE_YOU_REPLY.to_string(),
        Intent::Greeting => GREETING_REPLY.to_string(),
        Intent::Irrelevant => IRRELEVANT_REPLY.to_string(),
        Intent::JobQuery => job_reply(state, message, user_id).await,
        Intent::EventQuery => event_reply(state).await,
        Intent::MentorshipQuery => mentorship_reply(state).await,
        Intent::FollowUp => {
            let prompt = compose_history_prompt(message, history);
            let reply =
                run_generation_chain(&*state.remote_llm, state.local_llm.as_deref(), &prompt)
                    .await;
            augment_if_thin(reply)
        }
        Intent::RelevantGeneric | Intent::GenericFallback => {
            let normalized = message.trim().to_lowercase();
            if let Some(answer) = faq_reply(&normalized) {
                return answer.to_string();
            }
            let reply =
                run_generation_chain(&*state.remote_llm, state.local_llm.as_deref(), message)
                    .await;
            augment_if_thin(reply)
        }
    }
}

async fn job_reply(state: &AppState, message: &str, user_id: Option<&str>) -> String {
    match match_jobs(&state.db, &*state.jobs, message, user_id).await {
        JobMatchOutcome::Listings(listings) => render_listings(&listings),
        JobMatchOutcome::NoResults => NO_JOBS_REPLY.to_string(),
        JobMatchOutcome::MissingCredential => MISSING_JOB_KEY_REPLY.to_string(),
    }
}

/// Internal events first; empty falls back to the external provider; provider
/// failure becomes an explanatory message.
async fn event_reply(state: &AppState) -> String {
    match recent_events(&state.db, EVENTS_LIMIT).await {
        Ok(rows) if !rows.is_empty() => return render_internal_events(&rows),
        Ok(_) => {}
        Err(e) => warn!("internal events lookup failed: {e}"),
    }

    match state.events.search().await {
        Ok(events) if !events.is_empty() => {
            let shown: Vec<_> = events.into_iter().take(EVENTS_LIMIT as usize).collect();
            render_external_events(&shown)
        }
        Ok(_) => NO_EVENTS_REPLY.to_string(),
        Err(e) => {
            warn!("external events lookup failed: {e}");
            EVENTS_UNAVAILABLE_REPLY.to_string()
        }
    }
}

async fn mentorship_reply(state: &AppState) -> String {
    match available_mentors(&state.db, MENTORS_LIMIT).await {
        Ok(rows) if !rows.is_empty() => render_mentors(&rows),
        Ok(_) => MENTORSHIP_INVITE_REPLY.to_string(),
        Err(e) => {
            warn!("mentorship lookup failed: {e}");
            MENTORSHIP_INVITE_REPLY.to_string()
        }
    }
}

/// Walks the generation fallback chain, first success wins. Empty output
/// counts as failure. The static message is the floor.
pub async fn run_generation_chain(
    remote: &dyn TextCompletion,
    local: Option<&dyn TextCompletion>,
    prompt: &str,
) -> String {
    match remote.complete(prompt, MAX_REPLY_TOKENS).await {
        Ok(text) if !text.trim().is_empty() => return text,
        Ok(_) => warn!("remote generator returned an empty reply"),
        Err(e) => warn!("remote generation failed: {e}"),
    }

    if let Some(local) = local {
        match local.complete(prompt, MAX_REPLY_TOKENS).await {
            Ok(text) if !text.trim().is_empty() => return text,
            Ok(_) => warn!("local generator returned an empty reply"),
            Err(e) => warn!("local generation failed: {e}"),
        }
    }

    STATIC_FALLBACK_REPLY.to_string()
}

/// Re-serializes recent turns into the textual context block routed through
/// the generic chain for follow-up messages.
pub fn compose_history_prompt(message: &str, history: &[ConversationTurn]) -> String {
    let mut block = String::from("Based on this conversation history:\n");
    for turn in history {
        block.push_str(turn.role.as_str());
        block.push_str(": ");
        block.push_str(&turn.content);
        block.push('\n');
    }
    block.push_str("\nuser: ");
    block.push_str(message);
    block
}

/// Minimum-usefulness floor: unusually short replies, or replies that echo
/// the assistant's own name, get the capability menu appended.
pub fn augment_if_thin(reply: String) -> String {
    let thin = reply.trim().len() < MIN_USEFUL_REPLY_CHARS
        || reply.to_lowercase().contains(ASSISTANT_NAME);
    if thin {
        format!("{reply}{CAPABILITY_MENU}")
    } else {
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::providers::error::ProviderError;

    struct FixedReply(&'static str);

    #[async_trait]
    impl TextCompletion for FixedReply {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl TextCompletion for AlwaysFails {
        async fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
            Err(ProviderError::MissingCredential)
        }
    }

    #[tokio::test]
    async fn test_chain_prefers_remote() {
        let remote = FixedReply("Remote answer with plenty of useful detail.");
        let local = FixedReply("local");
        let reply = run_generation_chain(&remote, Some(&local), "hello").await;
        assert_eq!(reply, "Remote answer with plenty of useful detail.");
    }

    #[tokio::test]
    async fn test_chain_falls_through_to_local() {
        let local = FixedReply("Local answer with plenty of useful detail.");
        let reply = run_generation_chain(&AlwaysFails, Some(&local), "hello").await;
        assert_eq!(reply, "Local answer with plenty of useful detail.");
    }

    #[tokio::test]
    async fn test_chain_ends_at_static_message() {
        let reply = run_generation_chain(&AlwaysFails, None, "hello").await;
        assert_eq!(reply, STATIC_FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_empty_remote_reply_counts_as_failure() {
        let remote = FixedReply("   ");
        let reply = run_generation_chain(&remote, None, "hello").await;
        assert_eq!(reply, STATIC_FALLBACK_REPLY);
    }

    #[test]
    fn test_short_reply_gets_menu() {
        let augmented = augment_if_thin("Yes.".to_string());
        assert!(augmented.starts_with("Yes."));
        assert!(augmented.contains("Here is what I can help with"));
    }

    #[test]
    fn test_name_echo_gets_menu() {
        let augmented = augment_if_thin(
            "I'm Asha, your assistant for careers and professional growth today.".to_string(),
        );
        assert!(augmented.contains("Here is what I can help with"));
    }

    #[test]
    fn test_substantial_reply_left_alone() {
        let reply = "A resume is a summary of your education, experience, and skills.";
        assert_eq!(augment_if_thin(reply.to_string()), reply);
    }

    #[test]
    fn test_history_prompt_shape() {
        let history = vec![
            ConversationTurn::user("find data jobs", Utc::now()),
            ConversationTurn::assistant("Here are some listings.", Utc::now()),
        ];
        let prompt = compose_history_prompt("what about the first one", &history);
        assert!(prompt.starts_with("Based on this conversation history:\n"));
        assert!(prompt.contains("user: find data jobs"));
        assert!(prompt.contains("assistant: Here are some listings."));
        assert!(prompt.ends_with("user: what about the first one"));
    }
}
