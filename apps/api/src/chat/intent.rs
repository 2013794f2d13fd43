//! Intent classification cascade.
//!
//! A pure function over the normalized message text plus a "has history"
//! flag. Priority is data: the rule table is evaluated top to bottom and the
//! first match wins. Irrelevant keywords are deliberately checked before the
//! job/event/mentorship keywords, so a message containing both "movie" and
//! "job" is rejected, existing behavior that callers depend on.

/// The handling branch chosen for an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ThankYou,
    HowAreYou,
    Greeting,
    Irrelevant,
    JobQuery,
    EventQuery,
    MentorshipQuery,
    FollowUp,
    RelevantGeneric,
    GenericFallback,
}

const THANK_YOU_PHRASES: &[&str] = &["thank you", "thanks", "thanks a lot", "ty", "thx", "thankyou"];

const HOW_ARE_YOU_PHRASES: &[&str] = &["how are you", "how r you", "how are u", "how r u"];

// Matched on the leading token only: "hi" as a substring would fire inside
// words like "this".
const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "namaste", "greetings"];

const IRRELEVANT_KEYWORDS: &[&str] = &[
    "recipe", "cooking", "cook", "sambar", "food", "dish", "biryani", "movie", "film", "actor",
    "actress", "celebrity", "cricket", "football", "ipl", "tv show", "series", "gossip", "music",
    "song", "lyrics", "weather", "temperature", "rain", "marriage", "wedding", "boyfriend",
    "girlfriend", "crush", "pet", "shopping", "makeup", "skincare", "fitness", "gym",
    "weight loss", "horoscope", "zodiac", "astrology", "festival", "holiday", "vacation",
    "travel", "trip", "video game", "youtube", "tiktok", "instagram", "snapchat", "facebook",
    "reels", "memes",
];

const EVENT_KEYWORDS: &[&str] = &["event", "session", "workshop"];

const MENTORSHIP_KEYWORDS: &[&str] = &["mentor", "mentorship", "guidance"];

const FOLLOW_UP_PHRASES: &[&str] = &[
    "previous",
    "earlier",
    "last time",
    "you said",
    "you mentioned",
    "before that",
    "tell me more",
    "go on",
    "what about that",
];

const TOPIC_KEYWORDS: &[&str] = &[
    "job",
    "career",
    "event",
    "session",
    "mentorship",
    "networking",
    "growth",
    "women",
    "empowerment",
    "resume",
    "interview",
];

/// Classifies a message into its handling branch.
///
/// Normalizes (trim + lowercase) and walks the priority-ordered rule table.
/// No side effects, no I/O, no errors.
pub fn classify(message: &str, has_history: bool) -> Intent {
    let msg = message.trim().to_lowercase();

    type Rule = (fn(&str) -> bool, Intent);
    const RULES: &[Rule] = &[
        (is_thank_you, Intent::ThankYou),
        (is_how_are_you, Intent::HowAreYou),
        (is_greeting, Intent::Greeting),
        (is_irrelevant, Intent::Irrelevant),
        (is_job_query, Intent::JobQuery),
        (is_event_query, Intent::EventQuery),
        (is_mentorship_query, Intent::MentorshipQuery),
    ];

    for (predicate, intent) in RULES {
        if predicate(&msg) {
            return *intent;
        }
    }

    if has_history && references_earlier_turn(&msg) {
        return Intent::FollowUp;
    }
    if is_relevant_topic(&msg) {
        return Intent::RelevantGeneric;
    }
    Intent::GenericFallback
}

fn contains_any(msg: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| msg.contains(p))
}

fn is_thank_you(msg: &str) -> bool {
    contains_any(msg, THANK_YOU_PHRASES)
}

fn is_how_are_you(msg: &str) -> bool {
    contains_any(msg, HOW_ARE_YOU_PHRASES)
}

fn is_greeting(msg: &str) -> bool {
    let first_token: String = msg
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();
    GREETING_WORDS.contains(&first_token.as_str())
}

fn is_irrelevant(msg: &str) -> bool {
    contains_any(msg, IRRELEVANT_KEYWORDS)
}

fn is_job_query(msg: &str) -> bool {
    msg.contains("job")
}

fn is_event_query(msg: &str) -> bool {
    contains_any(msg, EVENT_KEYWORDS)
}

fn is_mentorship_query(msg: &str) -> bool {
    contains_any(msg, MENTORSHIP_KEYWORDS)
}

fn references_earlier_turn(msg: &str) -> bool {
    contains_any(msg, FOLLOW_UP_PHRASES)
}

fn is_relevant_topic(msg: &str) -> bool {
    contains_any(msg, TOPIC_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thank_you_regardless_of_case_and_punctuation() {
        assert_eq!(classify("thank you", false), Intent::ThankYou);
        assert_eq!(classify("  THANK YOU!!!  ", false), Intent::ThankYou);
        assert_eq!(classify("Thanks a lot.", false), Intent::ThankYou);
        assert_eq!(classify("ty", false), Intent::ThankYou);
    }

    #[test]
    fn test_thank_you_wins_over_job_keyword() {
        assert_eq!(classify("thanks for the job tips", false), Intent::ThankYou);
    }

    #[test]
    fn test_how_are_you_variants() {
        assert_eq!(classify("How are you?", false), Intent::HowAreYou);
        assert_eq!(classify("hey, how r u", false), Intent::HowAreYou);
    }

    #[test]
    fn test_greeting_matches_leading_token_only() {
        assert_eq!(classify("Hi there", false), Intent::Greeting);
        assert_eq!(classify("hello!", false), Intent::Greeting);
        // "hi" inside "this" must not fire
        assert_ne!(classify("this movie was great", false), Intent::Greeting);
    }

    #[test]
    fn test_irrelevant_keyword_beats_relevant_keyword() {
        // Documented priority: "movie" + "job" is still rejected.
        assert_eq!(
            classify("recommend a movie about job hunting", false),
            Intent::Irrelevant
        );
        assert_eq!(classify("find event about movies", false), Intent::Irrelevant);
    }

    #[test]
    fn test_job_query() {
        assert_eq!(
            classify("find python jobs in Seattle", false),
            Intent::JobQuery
        );
    }

    #[test]
    fn test_event_query_keywords() {
        assert_eq!(classify("any events this week", false), Intent::EventQuery);
        assert_eq!(classify("upcoming workshop?", false), Intent::EventQuery);
        assert_eq!(
            classify("is there a networking session", false),
            Intent::EventQuery
        );
    }

    #[test]
    fn test_mentorship_query_keywords() {
        assert_eq!(classify("I need a mentor", false), Intent::MentorshipQuery);
        assert_eq!(
            classify("looking for career guidance", false),
            Intent::MentorshipQuery
        );
    }

    #[test]
    fn test_follow_up_requires_history() {
        assert_eq!(
            classify("tell me more about what you said", true),
            Intent::FollowUp
        );
        // Same message without history falls through.
        assert_eq!(
            classify("tell me more about what you said", false),
            Intent::GenericFallback
        );
    }

    #[test]
    fn test_relevant_generic_topic() {
        assert_eq!(
            classify("how do I grow my career", false),
            Intent::RelevantGeneric
        );
        assert_eq!(
            classify("help me with my resume", false),
            Intent::RelevantGeneric
        );
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(classify("what can you do", false), Intent::GenericFallback);
    }

    #[test]
    fn test_empty_and_blank_messages_fall_through() {
        // Empty input is answered, not rejected; the fallback branch owns it.
        assert_eq!(classify("", false), Intent::GenericFallback);
        assert_eq!(classify("   ", false), Intent::GenericFallback);
        assert_eq!(classify("", true), Intent::GenericFallback);
    }
}
