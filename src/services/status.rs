//! Status reporting of a running import runner.
//!
//! The host shows the current activity and a list of recent events for each
//! running import plan.

use crate::core::{now, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Number of recent events kept by [`InMemoryStatusService`] by default.
pub const DEFAULT_MAX_EVENTS: usize = 20;

/// Severity of a status event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    /// Informational
    Info,
    /// Something unexpected that did not stop the import
    Warning,
    /// An import activity failed
    Error,
}

/// An event shown in the recent events list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Time of the event
    pub timestamp: Timestamp,
    /// Severity
    pub severity: EventSeverity,
    /// Message
    pub message: String,
}

impl StatusEvent {
    /// Create an event with the current time.
    pub fn new(severity: EventSeverity, message: &str) -> Self {
        Self {
            timestamp: now(),
            severity,
            message: message.to_string(),
        }
    }

    /// Create an info event.
    pub fn info(message: &str) -> Self {
        Self::new(EventSeverity::Info, message)
    }

    /// Create a warning event.
    pub fn warning(message: &str) -> Self {
        Self::new(EventSeverity::Warning, message)
    }

    /// Create an error event.
    pub fn error(message: &str) -> Self {
        Self::new(EventSeverity::Error, message)
    }
}

/// What the runner is currently doing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Description shown to the user
    pub description: String,
    /// Progress between 0 and 1, if known
    pub progress: Option<f32>,
}

impl Activity {
    /// Create an activity without progress.
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            progress: None,
        }
    }

    /// Set progress, clamped to `0.0..=1.0`. NaN means unknown progress.
    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = (!progress.is_nan()).then(|| progress.clamp(0.0, 1.0));
        self
    }
}

/// Write-only channel for the status display of a running import runner.
pub trait StatusService: Send + Sync {
    /// Replace the current activity.
    fn set_activity(&self, activity: Activity);

    /// Clear the current activity, e.g. while idle.
    fn clear_activity(&self);

    /// Add an event to the recent events.
    fn add_event(&self, event: StatusEvent);
}

#[derive(Debug, Default)]
struct StatusState {
    activity: Option<Activity>,
    events: VecDeque<StatusEvent>,
}

/// Status service that keeps the current state in memory.
#[derive(Debug)]
pub struct InMemoryStatusService {
    state: Mutex<StatusState>,
    max_events: usize,
}

impl InMemoryStatusService {
    /// Create a service keeping up to `max_events` recent events.
    pub fn new(max_events: usize) -> Self {
        Self {
            state: Mutex::new(StatusState::default()),
            max_events,
        }
    }

    /// The current activity.
    pub fn activity(&self) -> Option<Activity> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .activity
            .clone()
    }

    /// Recent events, oldest first.
    pub fn recent_events(&self) -> Vec<StatusEvent> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.events.iter().cloned().collect()
    }
}

impl Default for InMemoryStatusService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVENTS)
    }
}

impl StatusService for InMemoryStatusService {
    fn set_activity(&self, activity: Activity) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).activity = Some(activity);
    }

    fn clear_activity(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).activity = None;
    }

    fn add_event(&self, event: StatusEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.events.len() >= self.max_events {
            state.events.pop_front();
        }
        state.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity() {
        let status = InMemoryStatusService::default();
        assert!(status.activity().is_none());

        status.set_activity(Activity::new("Reading parts.csv").with_progress(0.5));
        let activity = status.activity().unwrap();
        assert_eq!(activity.description, "Reading parts.csv");
        assert_eq!(activity.progress, Some(0.5));

        status.clear_activity();
        assert!(status.activity().is_none());
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(Activity::new("a").with_progress(1.7).progress, Some(1.0));
        assert_eq!(Activity::new("a").with_progress(-0.2).progress, Some(0.0));
        assert_eq!(Activity::new("a").with_progress(f32::NAN).progress, None);
    }

    #[test]
    fn test_recent_events_bounded() {
        let status = InMemoryStatusService::new(3);
        for i in 0..5 {
            status.add_event(StatusEvent::info(&format!("event {}", i)));
        }

        let messages: Vec<String> = status
            .recent_events()
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec!["event 2", "event 3", "event 4"]);
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(StatusEvent::warning("w").severity, EventSeverity::Warning);
        assert_eq!(StatusEvent::error("e").severity, EventSeverity::Error);
        assert!(EventSeverity::Info < EventSeverity::Error);
    }
}
