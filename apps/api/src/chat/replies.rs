//! Canned reply text and the FAQ lookup table.
//!
//! All user-facing fallback strings live here; the responder holds the
//! logic, this module holds the configuration.

pub const ASSISTANT_NAME: &str = "asha";

pub const THANK_YOU_REPLY: &str =
    "You're welcome! I'm here to support you with careers, jobs, mentorship, and events.";

pub const HOW_ARE_YOU_REPLY: &str =
    "I'm good, thanks for asking! Let me know how I can help you with your career or job search today.";

pub const GREETING_REPLY: &str = "Hello! How can I support your career today?";

pub const IRRELEVANT_REPLY: &str =
    "Please ask relevant questions about careers, jobs, mentorship, or events focused on women empowerment.";

pub const STATIC_FALLBACK_REPLY: &str =
    "I'm Asha, an AI assistant focused on women careers, mentorship, and empowerment. Please ask me about job listings, career guidance, events, or professional growth!";

pub const MISSING_JOB_KEY_REPLY: &str =
    "The job search service is not configured yet, so I cannot fetch live listings right now.";

pub const NO_JOBS_REPLY: &str = "No jobs found for your query.";

pub const NO_EVENTS_REPLY: &str = "No events found right now. Please check back soon!";

pub const EVENTS_UNAVAILABLE_REPLY: &str =
    "I couldn't reach the events service right now. Please try again in a little while.";

pub const MENTORSHIP_INVITE_REPLY: &str =
    "We have mentors joining regularly! Tell me which area you'd like guidance in and I'll keep an eye out for a match.";

/// Appended when a generic reply falls below the usefulness floor.
pub const CAPABILITY_MENU: &str = "\n\nHere is what I can help with:\n\
    - Job listings (try \"find data jobs in Delhi\")\n\
    - Career events and sessions\n\
    - Mentorship connections\n\
    - Resume and interview guidance";

// Exact-match knowledge answers, keyed by the normalized message.
const FAQ_REPLIES: &[(&str, &str)] = &[
    (
        "what is a resume",
        "A resume is a summary of your education, work experience, skills, and achievements used to apply for jobs.",
    ),
    (
        "what is a cover letter",
        "A cover letter is a personalized letter that accompanies your resume, introducing yourself to employers and explaining why you're a good fit for the position.",
    ),
    (
        "how to write a resume",
        "Start with contact info, then add a summary, work experience, education, and skills. Keep it clear and concise.",
    ),
    (
        "how to prepare for interview",
        "Research the company, practice common questions, dress professionally, and be confident.",
    ),
    (
        "what is python",
        "Python is a popular, beginner-friendly programming language used in web development, data science, automation, and more.",
    ),
    (
        "what is machine learning",
        "Machine learning is a field of AI where computers learn from data without being explicitly programmed.",
    ),
    (
        "what is data science",
        "Data science involves analyzing large sets of data to extract meaningful insights using statistics, programming, and domain knowledge.",
    ),
    (
        "what are soft skills",
        "Soft skills are interpersonal qualities like communication, teamwork, time management, and empathy that are essential in the workplace.",
    ),
    (
        "how to improve communication",
        "Practice active listening, read and write regularly, and seek feedback to enhance your communication skills.",
    ),
    (
        "how to find jobs",
        "You can find jobs through portals like LinkedIn, Indeed, or by networking and attending career events.",
    ),
    (
        "what is freelancing",
        "Freelancing is working independently for clients on a project basis instead of being a full-time employee.",
    ),
];

/// Exact-match FAQ lookup over the normalized (trimmed, lower-cased) message.
pub fn faq_reply(normalized: &str) -> Option<&'static str> {
    FAQ_REPLIES
        .iter()
        .find(|(q, _)| *q == normalized)
        .map(|(_, a)| *a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_hit() {
        let reply = faq_reply("what is a resume").unwrap();
        assert!(reply.contains("summary of your education"));
    }

    #[test]
    fn test_faq_miss() {
        assert!(faq_reply("what is rust").is_none());
        // Lookup is exact-match; near misses fall through to the chain.
        assert!(faq_reply("what is a resume?").is_none());
    }
}
