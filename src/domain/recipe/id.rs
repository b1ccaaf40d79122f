use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::entity::{Recipe, RecipeId};
use crate::domain::{DomainError, DomainResult};

/// Issues recipe ids.
///
/// Ids are time-ordered: the candidate is the current Unix time in
/// milliseconds. The candidate is bumped past both the last id this
/// generator issued and the largest id already in the collection, so two
/// calls inside the same clock tick, or a clock that steps backwards,
/// can never produce a duplicate. Once the id space is used up every
/// call fails instead of wrapping around.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, existing: &[Recipe]) -> DomainResult<RecipeId> {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_id_at(now, existing)
    }

    fn next_id_at(&self, now: u64, existing: &[Recipe]) -> DomainResult<RecipeId> {
        let floor = match existing.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(exhausted)?,
            None => 0,
        };
        let mut last = self.last_issued.load(Ordering::Relaxed);
        loop {
            let after_last = last.checked_add(1).ok_or_else(exhausted)?;
            let candidate = now.max(floor).max(after_last);
            match self.last_issued.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Ok(candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

fn exhausted() -> DomainError {
    DomainError::InvariantViolation(format!(
        "No recipe id left above {}; remove the recipe with the largest id",
        RecipeId::MAX
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::{Difficulty, NewRecipe, RecipeType};

    fn recipe_with_id(id: RecipeId) -> Recipe {
        Recipe::new(
            id,
            NewRecipe {
                title: "x".to_string(),
                description: String::new(),
                prep_time: 0,
                cook_time: 0,
                difficulty: Difficulty::Easy,
                recipe_type: RecipeType::Veg,
                image_url: String::new(),
                ingredients: vec!["a".to_string()],
                steps: vec!["b".to_string()],
            },
        )
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let ids = IdGenerator::new();
        let first = ids.next_id_at(1_000, &[]).unwrap();
        let second = ids.next_id_at(1_000, &[]).unwrap();
        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
    }

    #[test]
    fn test_skips_past_existing_ids() {
        let ids = IdGenerator::new();
        let existing = vec![recipe_with_id(5_000)];
        assert_eq!(ids.next_id_at(1_000, &existing).unwrap(), 5_001);
    }

    #[test]
    fn test_largest_possible_existing_id_is_an_error() {
        let ids = IdGenerator::new();
        let existing = vec![recipe_with_id(RecipeId::MAX)];

        assert!(matches!(
            ids.next_id_at(1_000, &existing),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_existing_id_just_below_max_still_issues() {
        let ids = IdGenerator::new();
        let existing = vec![recipe_with_id(RecipeId::MAX - 1)];

        assert_eq!(ids.next_id_at(1_000, &existing).unwrap(), RecipeId::MAX);
        assert!(ids.next_id_at(1_000, &[]).is_err());
    }

    #[test]
    fn test_clock_going_backwards_stays_monotonic() {
        let ids = IdGenerator::new();
        let first = ids.next_id_at(2_000, &[]).unwrap();
        let second = ids.next_id_at(1_500, &[]).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_uses_wall_clock() {
        let ids = IdGenerator::new();
        let before = Utc::now().timestamp_millis() as u64;
        assert!(ids.next_id(&[]).unwrap() >= before);
    }
}
