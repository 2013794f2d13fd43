//! Database-backed lookups for the responder: events and mentorship.

use sqlx::PgPool;

use crate::models::directory::{EventRow, MentorRow};
use crate::providers::eventbrite::ExternalEvent;

pub const EVENTS_LIMIT: i64 = 5;
pub const MENTORS_LIMIT: i64 = 3;

pub async fn recent_events(pool: &PgPool, limit: i64) -> Result<Vec<EventRow>, sqlx::Error> {
    sqlx::query_as::<_, EventRow>(
        "SELECT id, name, topic, date_text FROM events ORDER BY name LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn available_mentors(pool: &PgPool, limit: i64) -> Result<Vec<MentorRow>, sqlx::Error> {
    sqlx::query_as::<_, MentorRow>(
        "SELECT id, mentor_name, expertise, availability FROM mentorship ORDER BY mentor_name LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub fn render_internal_events(events: &[EventRow]) -> String {
    let lines: Vec<String> = events
        .iter()
        .map(|e| {
            let mut line = format!("- {}", e.name);
            if let Some(topic) = e.topic.as_deref().filter(|t| !t.is_empty()) {
                line.push_str(&format!(" - {topic}"));
            }
            if let Some(date) = e.date_text.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!(" ({date})"));
            }
            line
        })
        .collect();
    format!("Upcoming events:\n{}", lines.join("\n"))
}

pub fn render_external_events(events: &[ExternalEvent]) -> String {
    let lines: Vec<String> = events.iter().map(|e| format!("- {}", e.title)).collect();
    format!("Here are some events you might like:\n{}", lines.join("\n"))
}

pub fn render_mentors(mentors: &[MentorRow]) -> String {
    let lines: Vec<String> = mentors
        .iter()
        .map(|m| {
            let mut line = format!("- {} ({})", m.mentor_name, m.expertise);
            if let Some(avail) = m.availability.as_deref().filter(|a| !a.is_empty()) {
                line.push_str(&format!(" - {avail}"));
            }
            line
        })
        .collect();
    format!("Here are mentors who can help:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_render_internal_events_with_optional_fields() {
        let events = vec![
            EventRow {
                id: Uuid::new_v4(),
                name: "Women in Tech Summit".to_string(),
                topic: Some("Leadership".to_string()),
                date_text: Some("June 12".to_string()),
            },
            EventRow {
                id: Uuid::new_v4(),
                name: "Resume Clinic".to_string(),
                topic: None,
                date_text: None,
            },
        ];
        let text = render_internal_events(&events);
        assert!(text.starts_with("Upcoming events:"));
        assert!(text.contains("- Women in Tech Summit - Leadership (June 12)"));
        assert!(text.contains("- Resume Clinic"));
    }

    #[test]
    fn test_render_mentors() {
        let mentors = vec![MentorRow {
            id: Uuid::new_v4(),
            mentor_name: "Priya".to_string(),
            expertise: "Data Science".to_string(),
            availability: Some("weekends".to_string()),
        }];
        let text = render_mentors(&mentors);
        assert!(text.contains("- Priya (Data Science) - weekends"));
    }

    #[test]
    fn test_render_external_events() {
        let events = vec![ExternalEvent {
            title: "Career Fair".to_string(),
        }];
        let text = render_external_events(&events);
        assert!(text.contains("- Career Fair"));
    }
}
