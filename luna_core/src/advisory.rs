//! Symptom advisory lookup.
//!
//! A fixed, small vocabulary of symptom tags maps to one health tip each.
//! Matching is exact and case-sensitive; unrecognized tags simply produce
//! no advisory.

use crate::types::Advisory;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Port through which the tracker delivers advisories while recording a
/// cycle. The core never prints; the caller decides what delivery means
/// (the CLI writes "Tip:" lines, tests collect into a Vec).
pub trait AdvisorySink {
    fn notify(&mut self, advisory: &Advisory);
}

/// Buffering sink for tests and machine-readable output.
impl AdvisorySink for Vec<Advisory> {
    fn notify(&mut self, advisory: &Advisory) {
        self.push(advisory.clone());
    }
}

/// Built-in symptom vocabulary with one tip per tag
static ADVISORIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "cramps",
            "Try heat therapy or light exercise to relieve cramps.",
        ),
        (
            "headache",
            "Stay hydrated and consider a small dose of over-the-counter pain relief.",
        ),
        (
            "moodswings",
            "Engage in activities you enjoy or practice mindfulness to help stabilize your mood.",
        ),
        ("nausea", "Ginger tea may help soothe nausea."),
    ])
});

/// Look up the health tip for a single symptom tag, if one exists.
pub fn advisory_for(symptom: &str) -> Option<&'static str> {
    ADVISORIES.get(symptom).copied()
}
