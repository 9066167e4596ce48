//! Dashboard state update logic
//!
//! Applies queued activity events and request outcomes to the dashboard state

use super::state::DashboardState;

use crate::events::{Event as ActivityEvent, Operation};
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::sync::{self, Completion, SyncError};

/// A finished request, sent back to the UI loop by the task that ran it.
#[derive(Debug)]
pub struct Outcome {
    pub operation: Operation,
    pub result: Result<Completion, SyncError>,
}

impl DashboardState {
    /// Update the dashboard state with a new tick.
    pub fn update(&mut self) {
        self.tick += 1;

        // Move all queued events into the activity log
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired())
        {
            self.notification = None;
        }
    }

    /// Reconciles the list with a finished request.
    ///
    /// Failures leave the list as it was and raise a notification.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let Outcome { operation, result } = outcome;

        let applied = result.and_then(|completion| {
            let message = completion.describe();
            sync::apply(&mut self.store, completion).map(|()| message)
        });

        match applied {
            Ok(message) => {
                if operation == Operation::Load {
                    self.loaded = true;
                }
                self.clamp_selection();
                self.add_to_activity_log(ActivityEvent::success(operation, message.clone()));
                self.notify(message, LogLevel::Info);
            }
            Err(e) => self.report_failure(operation, &e),
        }
    }

    /// Logs a failure and shows it in the status line.
    pub fn report_failure(&mut self, operation: Operation, error: &SyncError) {
        let level = ErrorHandler::new().classify_sync_error(error);
        let event = ActivityEvent::error(operation, error.to_string(), level);
        event.log();
        self.add_to_activity_log(event);

        let hint = if operation == Operation::Load {
            " - press R to retry"
        } else {
            ""
        };
        self.notify(format!("{} failed: {}{}", operation, error, hint), level);
    }
}
