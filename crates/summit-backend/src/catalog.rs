//! The conference program. Fixed at compile time and never persisted.

use std::sync::LazyLock;

use summit::data::Session;

static SESSIONS: LazyLock<Vec<Session>> = LazyLock::new(|| {
    vec![
        session(
            "ergonomics-101",
            "Ergonomics 101",
            "Dr. Maya Chen",
            "09:00 - 09:45",
            "Workplace Safety",
            "Foundations of ergonomic design to prevent strain and injury.",
        ),
        session(
            "fire-safety",
            "Modern Fire Safety Protocols",
            "Captain Luis Ortega",
            "10:00 - 10:45",
            "Emergency Response",
            "Latest standards, drills and equipment for fire safety.",
        ),
        session(
            "mental-health",
            "Mental Health at Work",
            "Sara Patel, LCSW",
            "11:00 - 11:45",
            "Wellbeing",
            "Reducing stigma and building supportive cultures.",
        ),
    ]
});

fn session(
    id: &str,
    title: &str,
    speaker: &str,
    time: &str,
    track: &str,
    description: &str,
) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        speaker: speaker.to_string(),
        time: time.to_string(),
        track: track.to_string(),
        description: description.to_string(),
    }
}

/// All sessions, in program order.
pub fn sessions() -> &'static [Session] {
    &SESSIONS
}
