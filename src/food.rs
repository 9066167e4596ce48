//! Food plate records exchanged with the backend.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned identifier of a food plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u64);

impl Display for FoodId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A food plate as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl Food {
    /// Returns the user-editable fields of this record.
    pub fn draft(&self) -> FoodDraft {
        FoodDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }

    /// Overlays the draft's fields on this record.
    ///
    /// `id` and `available` are never taken from the draft.
    pub fn merged_with(&self, draft: &FoodDraft) -> Food {
        Food {
            id: self.id,
            name: draft.name.clone(),
            image: draft.image.clone(),
            price: draft.price.clone(),
            description: draft.description.clone(),
            available: self.available,
        }
    }
}

impl Display for Food {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} (R$ {})", self.id, self.name, self.price)
    }
}

/// A food plate without the fields the server owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

/// Body of a create request: the draft wrapped under a `food` key.
#[derive(Debug, Serialize)]
pub(crate) struct CreateFoodRequest<'a> {
    pub food: &'a FoodDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Food {
        Food {
            id: FoodId(7),
            name: "Ao molho".to_string(),
            image: "https://example.com/ao-molho.png".to_string(),
            price: "19.90".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            available: false,
        }
    }

    #[test]
    // Merging keeps the server-owned fields and replaces everything else.
    fn test_merge_keeps_id_and_availability() {
        let draft = FoodDraft {
            name: "Veggie".to_string(),
            image: "veggie.png".to_string(),
            price: "21.90".to_string(),
            description: "Grilled vegetables".to_string(),
        };

        let merged = sample().merged_with(&draft);
        assert_eq!(merged.id, FoodId(7));
        assert!(!merged.available);
        assert_eq!(merged.draft(), draft);
    }

    #[test]
    // The backend sends numeric ids and a boolean availability flag.
    fn test_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "name": "A la Camarón",
            "image": "camarao.png",
            "price": "25.90",
            "description": "Macarrão com vegetais",
            "available": true
        }"#;

        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, FoodId(3));
        assert!(food.available);
    }

    #[test]
    // Create requests nest the draft under a `food` key.
    fn test_create_request_wraps_draft() {
        let draft = sample().draft();
        let body = serde_json::to_value(CreateFoodRequest { food: &draft }).unwrap();

        assert_eq!(body["food"]["name"], "Ao molho");
        assert!(body["food"].get("id").is_none());
        assert!(body["food"].get("available").is_none());
    }
}
