// src/repositories/seed.rs
//
// Default recipes written once into an empty collection.

use crate::domain::{Difficulty, NewRecipe, RecipeType};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe {
            title: "Masala Chai".to_string(),
            description: "Spiced milk tea simmered with ginger and cardamom.".to_string(),
            prep_time: 5,
            cook_time: 10,
            difficulty: Difficulty::Easy,
            recipe_type: RecipeType::Veg,
            image_url: String::new(),
            ingredients: lines(&[
                "1 cup water",
                "1 cup milk",
                "2 tsp black tea leaves",
                "1 inch ginger, crushed",
                "3 green cardamom pods, crushed",
                "2 tsp sugar",
            ]),
            steps: lines(&[
                "Bring the water to a boil with the ginger and cardamom.",
                "Add the tea leaves and simmer for 2 minutes.",
                "Pour in the milk and sugar and bring back to a boil.",
                "Strain into cups and serve hot.",
            ]),
        },
        NewRecipe {
            title: "Paneer Butter Masala".to_string(),
            description: "Paneer cubes in a rich tomato and butter gravy.".to_string(),
            prep_time: 15,
            cook_time: 25,
            difficulty: Difficulty::Medium,
            recipe_type: RecipeType::Veg,
            image_url: String::new(),
            ingredients: lines(&[
                "250 g paneer, cubed",
                "3 tomatoes, pureed",
                "2 tbsp butter",
                "1 onion, finely chopped",
                "1 tsp ginger-garlic paste",
                "1 tsp garam masala",
                "1/4 cup cream",
                "Salt to taste",
            ]),
            steps: lines(&[
                "Melt the butter and fry the onion until golden.",
                "Add the ginger-garlic paste and cook for a minute.",
                "Add the tomato puree and cook until the butter separates.",
                "Stir in garam masala, salt and cream.",
                "Add the paneer and simmer for 5 minutes.",
            ]),
        },
        NewRecipe {
            title: "Chicken Biryani".to_string(),
            description: "Layered rice and spiced chicken cooked on low heat.".to_string(),
            prep_time: 30,
            cook_time: 60,
            difficulty: Difficulty::Hard,
            recipe_type: RecipeType::NonVeg,
            image_url: String::new(),
            ingredients: lines(&[
                "500 g chicken",
                "2 cups basmati rice",
                "1 cup yogurt",
                "2 onions, thinly sliced",
                "2 tbsp biryani masala",
                "Handful of mint leaves",
                "Pinch of saffron in warm milk",
                "Salt to taste",
            ]),
            steps: lines(&[
                "Marinate the chicken in yogurt, masala and salt for 30 minutes.",
                "Parboil the rice until 70% cooked and drain.",
                "Fry the onions until deep brown.",
                "Layer chicken, rice, onions and mint in a heavy pot.",
                "Drizzle saffron milk, seal the lid and cook on low heat for 40 minutes.",
            ]),
        },
    ]
}
