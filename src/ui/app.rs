//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::FoodApi;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, SPLASH_DURATION_MS};
use crate::events::{Event as ActivityEvent, EventSender, EventType, Operation};
use crate::food::{Food, FoodDraft};
use crate::logging::LogLevel;
use crate::sync::{self, Request};
use crate::ui::dashboard::{DashboardState, Modal, Outcome, render_dashboard};
use crate::ui::form::FormAction;
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen listing the food plates.
    Dashboard,
}

/// A validated form, ready to be sent.
enum Submission {
    Create(FoodDraft),
    Update { editing: Food, draft: FoodDraft },
}

/// Application state
pub struct App {
    /// Backend the requests go to.
    api: Arc<dyn FoodApi>,

    /// Dashboard state; kept across screens so the initial load lands during the splash.
    state: DashboardState,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Hands activity events from request tasks to the UI.
    event_sender: EventSender,
    event_receiver: mpsc::Receiver<ActivityEvent>,

    /// Hands finished requests back to the UI.
    outcome_sender: mpsc::Sender<Outcome>,
    outcome_receiver: mpsc::Receiver<Outcome>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn FoodApi>, ui_config: UIConfig) -> Self {
        let (event_tx, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (outcome_sender, outcome_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let state = DashboardState::new(api.base_url(), ui_config);
        Self {
            api,
            state,
            current_screen: Screen::Splash,
            event_sender: EventSender::new(event_tx),
            event_receiver,
            outcome_sender,
            outcome_receiver,
        }
    }

    /// Sends a request on its own task; the outcome comes back through the channel.
    pub fn dispatch(&mut self, request: Request) {
        let operation = request.operation();
        self.state.in_flight += 1;
        self.state.add_event(ActivityEvent::new(
            operation,
            request.describe(),
            EventType::Refresh,
            LogLevel::Info,
        ));

        let api = Arc::clone(&self.api);
        let events = self.event_sender.clone();
        let outcomes = self.outcome_sender.clone();
        tokio::spawn(async move {
            let result = sync::perform(api.as_ref(), request, &events).await;
            let _ = outcomes.send(Outcome { operation, result }).await;
        });
    }

    /// Applies everything the request tasks sent since the last frame.
    fn drain_channels(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.state.apply_outcome(outcome);
        }
    }

    fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    /// Handles a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.current_screen == Screen::Splash {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return true;
            }
            // Any other key skips the splash screen
            self.show_dashboard();
            return false;
        }

        match &mut self.state.modal {
            Modal::Closed => return self.handle_list_key(key),
            Modal::Adding(form) | Modal::Editing { form, .. } => match form.handle_key(key) {
                FormAction::Continue => {}
                FormAction::Cancel => self.state.close_modal(),
                FormAction::Submit => self.submit_form(),
            },
            Modal::ConfirmDelete(_) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    if let Some(id) = self.state.pending_delete() {
                        self.state.close_modal();
                        self.dispatch(Request::Delete(id));
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state.close_modal()
                }
                _ => {}
            },
        }
        false
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.state.toggle_add(),
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                if let Some(food) = self.state.selected_food().cloned() {
                    self.state.open_edit(food);
                }
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                if let Some(food) = self.state.selected_food().cloned() {
                    self.state.ask_delete(food);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.dispatch(Request::Load),
            _ => {}
        }
        false
    }

    /// Validates the open form and sends it. An invalid form stays open.
    fn submit_form(&mut self) {
        let submission = match &mut self.state.modal {
            Modal::Adding(form) => form.to_draft().map(Submission::Create),
            Modal::Editing { food, form } => form.to_draft().map(|draft| Submission::Update {
                editing: food.clone(),
                draft,
            }),
            Modal::Closed | Modal::ConfirmDelete(_) => None,
        };

        match submission {
            Some(Submission::Create(draft)) => {
                self.state.close_modal();
                self.dispatch(Request::Create(draft));
            }
            Some(Submission::Update { editing, draft }) => {
                self.state.close_modal();
                match sync::prepare_update(&self.state.store, &editing, &draft) {
                    Ok(merged) => self.dispatch(Request::Update(merged)),
                    Err(e) => self.state.report_failure(Operation::Update, &e),
                }
            }
            None => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // Fetch the collection once on startup
    app.dispatch(Request::Load);

    // UI event loop
    loop {
        app.drain_channels();
        app.state.update();

        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.show_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.state.api_url),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFoodApi;
    use crate::food::FoodId;
    use crossterm::event::KeyModifiers;

    fn food(id: u64, name: &str) -> Food {
        Food {
            id: FoodId(id),
            name: name.to_string(),
            image: String::new(),
            price: "10.00".to_string(),
            description: String::new(),
            available: true,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(api: MockFoodApi, foods: Vec<Food>) -> App {
        let mut app = App::new(Arc::new(api), UIConfig::new(false));
        app.state.store.replace_all(foods);
        app.state.loaded = true;
        app.show_dashboard();
        app
    }

    /// Waits for the next request to finish and applies it.
    async fn settle(app: &mut App) {
        let outcome = app.outcome_receiver.recv().await.unwrap();
        app.state.apply_outcome(outcome);
    }

    fn mock() -> MockFoodApi {
        let mut api = MockFoodApi::new();
        api.expect_base_url()
            .return_const("http://localhost:3333".to_string());
        api
    }

    #[tokio::test]
    // Filling the add form creates and appends a record.
    async fn test_add_flow_appends_record() {
        let mut api = mock();
        api.expect_create_food()
            .withf(|draft| draft.name == "Veggie" && draft.price == "21.90")
            .returning(|_| Ok(food(2, "Veggie")));
        let mut app = app_with(api, vec![food(1, "a")]);

        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, "Veggie");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "21.90");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state.modal, Modal::Closed);
        assert_eq!(app.state.in_flight, 1);
        settle(&mut app).await;
        assert_eq!(app.state.store.foods(), &[food(1, "a"), food(2, "Veggie")]);
    }

    #[tokio::test]
    // Editing the selected row replaces it in place.
    async fn test_edit_flow_replaces_selected_record() {
        let mut api = mock();
        api.expect_update_food()
            .withf(|food| food.id == FoodId(2) && food.name == "b!")
            .returning(|food| Ok(food.clone()));
        let mut app = app_with(api, vec![food(1, "a"), food(2, "b"), food(3, "c")]);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('e')));
        assert!(matches!(&app.state.modal, Modal::Editing { food, .. } if food.id == FoodId(2)));
        type_text(&mut app, "!");
        app.handle_key(key(KeyCode::Enter));
        settle(&mut app).await;

        let names: Vec<&str> = app.state.store.foods().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b!", "c"]);
    }

    #[tokio::test]
    // Delete needs confirmation; declining sends nothing.
    async fn test_delete_requires_confirmation() {
        let mut api = mock();
        api.expect_delete_food()
            .withf(|id| *id == FoodId(1))
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(api, vec![food(1, "a"), food(2, "b")]);

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.state.in_flight, 0);

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        settle(&mut app).await;

        assert_eq!(app.state.store.foods(), &[food(2, "b")]);
    }

    #[tokio::test]
    // An invalid form stays open and sends nothing.
    async fn test_invalid_form_is_not_sent() {
        let mut api = mock();
        api.expect_create_food().never();
        let mut app = app_with(api, vec![]);

        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, "Nameless price");
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.state.modal, Modal::Adding(_)));
        assert_eq!(app.state.in_flight, 0);
    }

    #[tokio::test]
    // Quit keys only quit when no modal is open.
    async fn test_quit_keys_respect_modal() {
        let mut app = app_with(mock(), vec![food(1, "a")]);

        app.handle_key(key(KeyCode::Char('a')));
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }
}
