//! Headless mode execution
//!
//! One-shot commands that print their activity to the console instead of
//! drawing the dashboard.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::FoodController;
use crate::events::{Event, EventSender};
use crate::food::{FoodDraft, FoodId};
use crate::sync::SyncError;
use crate::{print_cmd_info, print_cmd_success};
use std::error::Error;
use tokio::sync::mpsc;

/// A single command run without the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessAction {
    /// Print the collection.
    List,
    /// Create one record.
    Add(FoodDraft),
    /// Change the given fields of one record; `None` keeps the current value.
    Edit {
        id: FoodId,
        name: Option<String>,
        image: Option<String>,
        price: Option<String>,
        description: Option<String>,
    },
    /// Delete one record.
    Delete(FoodId),
}

/// Runs one command in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Running the command through the controller
/// 3. Printing the result
///
/// # Arguments
/// * `session` - Session data from setup
/// * `action` - The command to run
///
/// # Returns
/// * `Ok(())` - The command succeeded
/// * `Err` - The backend rejected the command or could not be reached
pub async fn run_headless_mode(
    session: SessionData,
    action: HeadlessAction,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.api_url);

    // Event loop: log events to console until the controller is dropped
    let (event_sender, mut event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let printer = tokio::spawn(async move {
        while let Some(event) = event_receiver.recv().await {
            if event.should_display() {
                println!("{}", event);
            }
        }
    });

    let mut controller = FoodController::new(session.api, EventSender::new(event_sender));
    let result = run_action(&mut controller, action).await;

    drop(controller);
    let _ = printer.await;

    match result {
        Ok(()) => {
            print_session_exit_success();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_action(
    controller: &mut FoodController,
    action: HeadlessAction,
) -> Result<(), SyncError> {
    match action {
        HeadlessAction::List => {
            controller.load().await?;
            if controller.foods().is_empty() {
                print_cmd_info!("No plates", "The collection is empty.");
            }
            for food in controller.foods() {
                let availability = if food.available {
                    "available"
                } else {
                    "unavailable"
                };
                println!("{}  [{}]", food, availability);
            }
        }
        HeadlessAction::Add(draft) => {
            controller.add_food(draft).await?;
            if let Some(food) = controller.foods().last() {
                print_cmd_success!("Plate created", "{}", food);
            }
        }
        HeadlessAction::Edit {
            id,
            name,
            image,
            price,
            description,
        } => {
            // The merge needs the current record
            controller.load().await?;
            let current = controller
                .store()
                .get(id)
                .cloned()
                .ok_or(SyncError::NotFound(id))?;

            let mut draft = current.draft();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(image) = image {
                draft.image = image;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if let Some(description) = description {
                draft.description = description;
            }

            controller.update_food(&current, &draft).await?;
            if let Some(food) = controller.store().get(id) {
                print_cmd_success!("Plate updated", "{}", food);
            }
        }
        HeadlessAction::Delete(id) => {
            controller.delete_food(id).await?;
            print_cmd_success!("Plate deleted", "#{}", id);
        }
    }
    Ok(())
}
