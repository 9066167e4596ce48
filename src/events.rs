//! Event System
//!
//! Activity events emitted while talking to the backend

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;
use tokio::sync::mpsc;

/// The operation an event belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Operation {
    /// Fetching the whole collection.
    Load,
    /// Creating a record.
    Create,
    /// Updating a record.
    Update,
    /// Deleting a record.
    Delete,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub operation: Operation,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(operation: Operation, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            operation,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(operation: Operation, msg: String) -> Self {
        Self::new(operation, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(operation: Operation, msg: String, log_level: LogLevel) -> Self {
        Self::new(operation, msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Mirrors the event to the `log` facade.
    pub fn log(&self) {
        log::log!(log::Level::from(self.log_level), "[{}] {}", self.operation, self.msg);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Sends events to whoever renders the activity log.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        event.log();
        let _ = self.sender.send(event).await;
    }

    pub async fn send(
        &self,
        operation: Operation,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::new(operation, message, event_type, log_level))
            .await;
    }
}
