//! In-memory list state mirroring the backend's `foods` collection.

use crate::food::{Food, FoodId};

/// Ordered list of food plates, owned by a single holder.
///
/// Order follows the server for loads and creates. Updates replace in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodStore {
    foods: Vec<Food>,
}

impl FoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn get(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&Food> {
        self.foods.get(index)
    }

    /// Position of the record with the given id, if present.
    pub fn position(&self, id: FoodId) -> Option<usize> {
        self.foods.iter().position(|food| food.id == id)
    }

    /// Replaces the whole list with a fresh server response.
    pub fn replace_all(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    pub fn append(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Replaces the record sharing `food.id`, keeping its position.
    ///
    /// Returns the position written, or `None` when no record has that id,
    /// in which case the list is untouched.
    pub fn replace(&mut self, food: Food) -> Option<usize> {
        let index = self.position(food.id)?;
        self.foods[index] = food;
        Some(index)
    }

    /// Removes every record with the given id and returns how many went.
    pub fn remove(&mut self, id: FoodId) -> usize {
        let before = self.foods.len();
        self.foods.retain(|food| food.id != id);
        before - self.foods.len()
    }
}
