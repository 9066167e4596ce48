//! Dashboard state management
//!
//! Contains the main dashboard state struct and the modal state machine

use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, NOTIFICATION_TTL_SECS};
use crate::events::Event as ActivityEvent;
use crate::food::{Food, FoodId};
use crate::logging::LogLevel;
use crate::store::FoodStore;
use crate::ui::app::UIConfig;
use crate::ui::form::FoodForm;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Which modal, if any, is on screen.
///
/// A single enum so adding and editing can never be open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Adding(FoodForm),
    Editing {
        food: Food,
        form: FoodForm,
    },
    /// Waiting for the user to confirm a delete.
    ConfirmDelete(Food),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

/// A transient message shown in the status line.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: LogLevel,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Duration::from_secs(NOTIFICATION_TTL_SECS)
    }
}

/// Dashboard state: the food list plus everything drawn around it.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the backend, for the header.
    pub api_url: String,
    /// The list state mirroring the backend.
    pub store: FoodStore,
    /// Index of the highlighted row.
    pub selected: usize,
    /// Current modal.
    pub modal: Modal,
    /// Number of requests sent but not yet answered.
    pub in_flight: usize,
    /// Whether the collection has loaded at least once.
    pub loaded: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<ActivityEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<ActivityEvent>,
    /// Transient status-line message
    pub notification: Option<Notification>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(api_url: String, ui_config: UIConfig) -> Self {
        Self {
            api_url,
            store: FoodStore::new(),
            selected: 0,
            modal: Modal::Closed,
            in_flight: 0,
            loaded: false,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            notification: None,
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    pub fn selected_food(&self) -> Option<&Food> {
        self.store.get_at(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the selection inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }

    /// Opens the add modal, or closes it if it is already open.
    ///
    /// Ignored while another modal is open.
    pub fn toggle_add(&mut self) {
        match self.modal {
            Modal::Closed => self.modal = Modal::Adding(FoodForm::new()),
            Modal::Adding(_) => self.modal = Modal::Closed,
            Modal::Editing { .. } | Modal::ConfirmDelete(_) => {}
        }
    }

    /// Records `food` as the record being edited, then shows the edit modal.
    pub fn open_edit(&mut self, food: Food) {
        let form = FoodForm::from_food(&food);
        self.modal = Modal::Editing { food, form };
    }

    pub fn ask_delete(&mut self, food: Food) {
        self.modal = Modal::ConfirmDelete(food);
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Id of the record awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<FoodId> {
        match &self.modal {
            Modal::ConfirmDelete(food) => Some(food.id),
            _ => None,
        }
    }

    pub fn notify(&mut self, message: String, level: LogLevel) {
        self.notification = Some(Notification {
            message,
            level,
            shown_at: Instant::now(),
        });
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: ActivityEvent) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new("http://localhost:3333".to_string(), UIConfig::new(false))
    }

    fn food(id: u64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("food {}", id),
            image: String::new(),
            price: "10".to_string(),
            description: String::new(),
            available: true,
        }
    }

    #[test]
    // Toggling the add modal twice returns to where it started.
    fn test_toggle_add_twice_restores_state() {
        let mut state = state();
        state.toggle_add();
        assert!(matches!(state.modal, Modal::Adding(_)));
        state.toggle_add();
        assert_eq!(state.modal, Modal::Closed);
    }

    #[test]
    // The edit modal always knows which record it edits.
    fn test_open_edit_sets_record() {
        let mut state = state();
        state.open_edit(food(4));

        assert!(matches!(&state.modal, Modal::Editing { food, .. } if food.id == FoodId(4)));
        assert!(state.modal.is_open());
    }

    #[test]
    // Adding cannot open on top of editing.
    fn test_toggle_add_ignored_while_editing() {
        let mut state = state();
        state.open_edit(food(1));
        state.toggle_add();

        assert!(matches!(state.modal, Modal::Editing { .. }));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = state();
        state.store.replace_all(vec![food(1), food(2)]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);

        state.store.remove(FoodId(2));
        state.clamp_selection();
        assert_eq!(state.selected, 0);

        state.select_previous();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_to_activity_log(ActivityEvent::success(
                crate::events::Operation::Load,
                format!("event {}", i),
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(
            state.activity_logs.front().map(|e| e.msg.as_str()),
            Some("event 5")
        );
    }
}
