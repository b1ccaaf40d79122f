// src/repositories/recipe_repository_tests.rs
//
// Repository behaviour against real substrates.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::db::{create_memory_pool, initialize_database};
    use crate::domain::{Difficulty, NewRecipe, RecipeFilter, RecipeType, RecipeUpdate};
    use crate::error::AppError;
    use crate::persistence::{LogNotifier, RecipeStorage, DEFAULT_STORAGE_KEY};
    use crate::repositories::{default_recipes, RecipeRepository};
    use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn draft(title: &str, prep: u32, cook: u32) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            description: format!("{} description", title),
            prep_time: prep,
            cook_time: cook,
            difficulty: Difficulty::Easy,
            recipe_type: RecipeType::Veg,
            image_url: String::new(),
            ingredients: vec!["water".to_string()],
            steps: vec!["boil".to_string()],
        }
    }

    fn memory_repo() -> (RecipeRepository, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let storage = RecipeStorage::new(store.clone(), Arc::new(LogNotifier));
        (RecipeRepository::new(storage), store)
    }

    fn sqlite_repo() -> RecipeRepository {
        let pool = create_memory_pool().unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let store = SqliteStore::new(Arc::new(pool));
        RecipeRepository::new(RecipeStorage::new(Arc::new(store), Arc::new(LogNotifier)))
    }

    fn raw_collection(store: &MemoryStore) -> Option<String> {
        store.get_item(DEFAULT_STORAGE_KEY).unwrap()
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    #[test]
    fn test_add_then_get_by_id() {
        let (repo, _) = memory_repo();

        let tea = repo.add(draft("Tea", 2, 3)).unwrap();

        assert_eq!(repo.get_by_id(tea.id), Some(tea.clone()));
        assert_eq!(repo.get_all(), vec![tea]);
    }

    #[test]
    fn test_add_never_reuses_an_existing_id() {
        let (repo, _) = memory_repo();

        for i in 0..20 {
            let before: Vec<u64> = repo.get_all().iter().map(|r| r.id).collect();
            let added = repo.add(draft(&format!("Recipe {}", i), 1, 1)).unwrap();
            assert!(!before.contains(&added.id));
        }
        assert_eq!(repo.get_all().len(), 20);
    }

    #[test]
    fn test_add_appends_in_order() {
        let (repo, _) = memory_repo();
        repo.add(draft("First", 1, 1)).unwrap();
        repo.add(draft("Second", 1, 1)).unwrap();

        let titles: Vec<String> = repo.get_all().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_get_by_unknown_id_is_none() {
        let (repo, _) = memory_repo();
        repo.add(draft("Tea", 2, 3)).unwrap();
        assert_eq!(repo.get_by_id(42), None);
    }

    #[test]
    fn test_update_merges_and_keeps_id() {
        let (repo, _) = memory_repo();
        let tea = repo.add(draft("Tea", 2, 3)).unwrap();

        let updated = repo
            .update(
                tea.id,
                RecipeUpdate {
                    title: Some("Iced Tea".to_string()),
                    difficulty: Some(Difficulty::Medium),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, tea.id);
        assert_eq!(updated.title, "Iced Tea");
        assert_eq!(updated.difficulty, Difficulty::Medium);
        assert_eq!(updated.prep_time, 2);
        assert_eq!(repo.get_by_id(tea.id), Some(updated));
    }

    #[test]
    fn test_update_unknown_id_writes_nothing() {
        let (repo, store) = memory_repo();
        repo.add(draft("Tea", 2, 3)).unwrap();
        let before = raw_collection(&store);

        let result = repo
            .update(
                999,
                RecipeUpdate {
                    title: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
        assert_eq!(raw_collection(&store), before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (repo, store) = memory_repo();
        let tea = repo.add(draft("Tea", 2, 3)).unwrap();
        let coffee = repo.add(draft("Coffee", 2, 5)).unwrap();

        repo.delete(tea.id).unwrap();
        let after_first = raw_collection(&store);
        repo.delete(tea.id).unwrap();

        assert_eq!(raw_collection(&store), after_first);
        assert_eq!(repo.get_all(), vec![coffee]);
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    #[test]
    fn test_search_scenario() {
        let (repo, _) = memory_repo();
        let tea = repo.add(draft("Tea", 2, 3)).unwrap();

        assert_eq!(repo.search(Some("tea")), vec![tea.clone()]);
        assert!(repo.search(Some("coffee")).is_empty());
        assert_eq!(repo.search(None), vec![tea.clone()]);
        assert_eq!(repo.search(Some("")), vec![tea]);
    }

    #[test]
    fn test_query_pipeline() {
        let (repo, _) = memory_repo();
        let tea = repo.add(draft("Tea", 2, 3)).unwrap();
        repo.add(draft("Slow Tea", 30, 30)).unwrap();
        let mut curry = draft("Curry", 10, 20);
        curry.recipe_type = RecipeType::NonVeg;
        repo.add(curry).unwrap();

        let filter = RecipeFilter {
            query: Some("TEA".to_string()),
            max_total_time: Some(5),
            ..Default::default()
        };
        assert_eq!(repo.query(&filter), vec![tea]);

        let filter = RecipeFilter {
            recipe_type: Some(RecipeType::NonVeg),
            ..Default::default()
        };
        assert_eq!(repo.query(&filter).len(), 1);
        assert_eq!(repo.query(&RecipeFilter::default()).len(), 3);
    }

    // ========================================================================
    // FAILURE PATHS
    // ========================================================================

    #[test]
    fn test_add_reports_persistence_failure() {
        let store = Arc::new(MemoryStore::with_quota(32));
        let repo = RecipeRepository::new(RecipeStorage::new(store, Arc::new(LogNotifier)));

        let result = repo.add(draft("A recipe with a long enough title", 1, 1));

        assert!(matches!(result, Err(AppError::PersistenceFailed(_))));
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn test_corrupted_collection_reads_as_empty_and_heals() {
        let (repo, store) = memory_repo();
        store.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();

        assert!(repo.get_all().is_empty());
        assert_eq!(raw_collection(&store), None);

        let tea = repo.add(draft("Tea", 2, 3)).unwrap();
        assert_eq!(repo.get_all(), vec![tea]);
    }

    // ========================================================================
    // SEEDING & IMPORT
    // ========================================================================

    #[test]
    fn test_seed_runs_once() {
        let (repo, _) = memory_repo();

        assert!(repo.ensure_seeded().unwrap());
        let seeded = repo.get_all();
        assert_eq!(seeded.len(), default_recipes().len());

        assert!(!repo.ensure_seeded().unwrap());
        assert_eq!(repo.get_all(), seeded);
    }

    #[test]
    fn test_seed_skipped_when_collection_has_data() {
        let (repo, _) = memory_repo();
        repo.add(draft("Tea", 2, 3)).unwrap();

        assert!(!repo.ensure_seeded().unwrap());
        assert_eq!(repo.get_all().len(), 1);
    }

    #[test]
    fn test_seed_does_not_return_after_collection_emptied() {
        let (repo, _) = memory_repo();
        repo.ensure_seeded().unwrap();

        for recipe in repo.get_all() {
            repo.delete(recipe.id).unwrap();
        }
        assert!(!repo.ensure_seeded().unwrap());
        assert!(repo.get_all().is_empty());

        repo.clear();
        assert!(!repo.ensure_seeded().unwrap());
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn test_existing_data_marks_store_as_seeded() {
        let (repo, _) = memory_repo();
        let tea = repo.add(draft("Tea", 2, 3)).unwrap();
        assert!(!repo.ensure_seeded().unwrap());

        repo.delete(tea.id).unwrap();
        assert!(!repo.ensure_seeded().unwrap());
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn test_seeded_ids_are_unique() {
        let (repo, _) = memory_repo();
        repo.ensure_seeded().unwrap();

        let mut ids: Vec<u64> = repo.get_all().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), default_recipes().len());
    }

    #[test]
    fn test_replace_all_rejects_non_array() {
        let (repo, store) = memory_repo();
        let tea = repo.add(draft("Tea", 2, 3)).unwrap();

        let result = repo.replace_all(&json!({"recipes": []}));

        assert!(matches!(result, Err(AppError::PersistenceFailed(_))));
        assert!(raw_collection(&store).is_some());
        assert_eq!(repo.get_all(), vec![tea]);
    }

    #[test]
    fn test_replace_all_swaps_collection() {
        let (repo, _) = memory_repo();
        repo.add(draft("Tea", 2, 3)).unwrap();

        let imported = json!([{
            "id": 7, "title": "Toast", "description": "", "prepTime": 1, "cookTime": 2,
            "difficulty": "easy", "type": "veg", "imageUrl": "",
            "ingredients": ["bread"], "steps": ["toast"]
        }]);

        assert_eq!(repo.replace_all(&imported).unwrap(), 1);
        let all = repo.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 7);
    }

    #[test]
    fn test_clear_and_availability() {
        let (repo, store) = memory_repo();
        repo.add(draft("Tea", 2, 3)).unwrap();

        assert!(repo.is_available());
        repo.clear();
        assert!(store.is_empty());
    }

    // ========================================================================
    // DURABLE SUBSTRATE
    // ========================================================================

    #[test]
    fn test_sqlite_backed_crud() {
        let repo = sqlite_repo();

        let tea = repo.add(draft("Tea", 2, 3)).unwrap();
        let coffee = repo.add(draft("Coffee", 3, 4)).unwrap();
        assert!(coffee.id > tea.id);

        repo.update(
            coffee.id,
            RecipeUpdate {
                cook_time: Some(10),
                ..Default::default()
            },
        )
        .unwrap();
        repo.delete(tea.id).unwrap();

        let all = repo.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].cook_time, 10);
        assert!(repo.is_available());
    }
}
