//! Add/edit form state
//!
//! Collects the user-editable fields of a food plate from key presses.

use crate::food::{Food, FoodDraft};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The fields of the form, in tab order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FormField {
    #[strum(to_string = "Name")]
    Name,
    #[strum(to_string = "Image URL")]
    Image,
    #[strum(to_string = "Price")]
    Price,
    #[strum(to_string = "Description")]
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Image,
        FormField::Price,
        FormField::Description,
    ];

    fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Image => 1,
            FormField::Price => 2,
            FormField::Description => 3,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Price)
    }
}

/// What a key press asks the form's owner to do.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FormAction {
    /// Keep editing.
    Continue,
    /// The user confirmed the form.
    Submit,
    /// The user dismissed the form.
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    values: [String; 4],
    focus: usize,
    /// Validation message from the last rejected submit.
    error: Option<String>,
}

impl FoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with a record's editable fields.
    pub fn from_food(food: &Food) -> Self {
        let draft = food.draft();
        Self {
            values: [draft.name, draft.image, draft.price, draft.description],
            focus: 0,
            error: None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Backspace => {
                self.values[self.focus].pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.values[self.focus].push(c);
                self.error = None;
            }
            _ => {}
        }
        FormAction::Continue
    }

    /// Validates the form and returns the draft it describes.
    ///
    /// Values are trimmed; name and price must not be empty.
    pub fn to_draft(&mut self) -> Option<FoodDraft> {
        let missing: Vec<String> = FormField::ALL
            .iter()
            .filter(|field| field.is_required() && self.value(**field).trim().is_empty())
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            self.error = Some(format!("Required: {}", missing.join(", ")));
            return None;
        }

        self.error = None;
        Some(FoodDraft {
            name: self.value(FormField::Name).trim().to_string(),
            image: self.value(FormField::Image).trim().to_string(),
            price: self.value(FormField::Price).trim().to_string(),
            description: self.value(FormField::Description).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::FoodId;

    fn press(form: &mut FoodForm, code: KeyCode) -> FormAction {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut FoodForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    // Typing fills the focused field and Tab walks the fields.
    fn test_typing_and_tabbing_builds_draft() {
        let mut form = FoodForm::new();
        type_text(&mut form, "Veggie");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "veggie.png");
        press(&mut form, KeyCode::Tab);
        type_text(&mut form, "21.9");
        press(&mut form, KeyCode::Backspace);
        type_text(&mut form, "90");

        assert_eq!(press(&mut form, KeyCode::Enter), FormAction::Submit);
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, "Veggie");
        assert_eq!(draft.image, "veggie.png");
        assert_eq!(draft.price, "21.90");
        assert_eq!(draft.description, "");
    }

    #[test]
    // Name and price are required.
    fn test_missing_required_fields_block_submit() {
        let mut form = FoodForm::new();
        type_text(&mut form, "  ");

        assert!(form.to_draft().is_none());
        assert_eq!(form.error(), Some("Required: Name, Price"));
    }

    #[test]
    // Focus wraps in both directions.
    fn test_focus_wraps() {
        let mut form = FoodForm::new();
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focused(), FormField::Description);
        press(&mut form, KeyCode::Down);
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    // Editing starts from the record's current values.
    fn test_from_food_prefills_fields() {
        let food = Food {
            id: FoodId(1),
            name: "Ao molho".to_string(),
            image: "molho.png".to_string(),
            price: "19.90".to_string(),
            description: "Massa".to_string(),
            available: true,
        };

        let mut form = FoodForm::from_food(&food);
        assert_eq!(form.value(FormField::Price), "19.90");
        assert_eq!(form.to_draft(), Some(food.draft()));
        assert_eq!(press(&mut form, KeyCode::Esc), FormAction::Cancel);
    }
}
