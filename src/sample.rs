// ABOUTME: Embedded sample recipe catalog used as the offline fallback
// ABOUTME: Immutable fixture injected into the client; uniform Fisher-Yates sampling
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample recipe catalog.
//!
//! The catalog stands in for the live API whenever credentials are missing or
//! a request fails. Entries are stored already normalized, so fallback results
//! satisfy exactly the same shape invariants as live results and downstream
//! code needs no branching. The catalog is immutable and injected into
//! [`crate::client::RecipeClient`]; tests substitute a smaller one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    Ingredient, InstructionSet, InstructionStep, Nutrient, Nutrition, Recipe,
};

/// Immutable collection of sample recipes
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    recipes: Vec<Recipe>,
}

impl SampleCatalog {
    /// Build a catalog from explicit recipes (primarily for tests)
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Number of recipes in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Draw up to `count` recipes in uniformly random order.
    ///
    /// Content is deterministic (always drawn from the fixed catalog) but
    /// order is not; callers asserting on results should compare id sets.
    #[must_use]
    pub fn sample<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Recipe> {
        let mut shuffled = self.recipes.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        shuffled
    }

    /// Look up a recipe by exact id
    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// First catalog entry, used as the documented detail-lookup fallback
    /// when an unknown id is requested without credentials
    #[must_use]
    pub fn first(&self) -> Option<&Recipe> {
        self.recipes.first()
    }

    /// The built-in six-recipe catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                beef_lasagna(),
                avocado_toast(),
                salmon_teriyaki(),
                quinoa_bowl(),
                chocolate_chip_cookies(),
                caesar_salad(),
            ],
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ingredient(name: &str, amount: f64, unit: &str, original: &str) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        amount,
        unit: unit.to_owned(),
        original: original.to_owned(),
    }
}

fn steps(texts: &[&str]) -> Vec<InstructionSet> {
    vec![InstructionSet {
        steps: texts
            .iter()
            .enumerate()
            .map(|(i, text)| InstructionStep {
                number: (i + 1) as u32,
                step: (*text).to_owned(),
                ingredients: Vec::new(),
            })
            .collect(),
    }]
}

fn macros(calories: f64, fat: f64, protein: f64, carbs: f64) -> Nutrition {
    let entry = |name: &str, amount: f64, unit: &str, daily: f64| Nutrient {
        name: name.to_owned(),
        amount,
        unit: unit.to_owned(),
        percent_of_daily_needs: daily,
    };
    Nutrition {
        nutrients: vec![
            entry("Calories", calories, "kcal", calories / 20.0),
            entry("Fat", fat, "g", fat / 0.65),
            entry("Protein", protein, "g", protein * 2.0),
            entry("Carbohydrates", carbs, "g", carbs / 3.0),
        ],
    }
}

fn base_recipe(id: u64, title: &str, image: &str) -> Recipe {
    Recipe {
        id,
        title: title.to_owned(),
        image: image.to_owned(),
        ready_in_minutes: 30,
        servings: 4,
        health_score: 0.0,
        spoonacular_score: 0.0,
        aggregate_likes: 0,
        price_per_serving_cents: 0,
        summary: String::new(),
        source_url: String::new(),
        dish_types: Vec::new(),
        cuisines: Vec::new(),
        diets: Vec::new(),
        occasions: Vec::new(),
        ingredients: Vec::new(),
        instructions: Vec::new(),
        nutrition: Nutrition::default(),
    }
}

fn beef_lasagna() -> Recipe {
    Recipe {
        ready_in_minutes: 90,
        servings: 8,
        health_score: 72.0,
        aggregate_likes: 234,
        price_per_serving_cents: 295,
        dish_types: vec!["dinner".to_owned(), "main course".to_owned()],
        cuisines: vec!["Italian".to_owned()],
        summary: "Rich, hearty lasagna with layers of beef, cheese, and pasta. This family \
                  favorite combines tender pasta sheets with savory meat sauce and three types \
                  of cheese for the ultimate comfort food experience."
            .to_owned(),
        ingredients: vec![
            ingredient("Ground beef", 1.0, "lb", "1 lb ground beef"),
            ingredient("Lasagna noodles", 12.0, "sheets", "12 lasagna noodle sheets"),
            ingredient("Ricotta cheese", 15.0, "oz", "15 oz ricotta cheese"),
            ingredient("Mozzarella cheese", 16.0, "oz", "16 oz mozzarella cheese, shredded"),
            ingredient("Parmesan cheese", 0.5, "cup", "1/2 cup grated Parmesan cheese"),
            ingredient("Marinara sauce", 24.0, "oz", "24 oz marinara sauce"),
            ingredient("Eggs", 2.0, "large", "2 large eggs"),
            ingredient("Italian seasoning", 2.0, "tsp", "2 tsp Italian seasoning"),
        ],
        instructions: steps(&[
            "Preheat oven to 375°F. Cook lasagna noodles according to package directions and drain.",
            "Brown ground beef in a large skillet over medium heat. Drain excess fat and stir in marinara sauce.",
            "In a bowl, mix ricotta cheese, eggs, and Italian seasoning until well combined.",
            "Layer half the noodles in a greased 9x13 baking dish. Spread ricotta mixture over noodles.",
            "Add half the meat sauce and half the mozzarella cheese. Repeat layers.",
            "Top with Parmesan cheese. Cover with foil and bake for 45 minutes.",
            "Remove foil and bake 15 more minutes until cheese is golden. Let rest 10 minutes before serving.",
        ]),
        nutrition: macros(445.0, 23.0, 35.0, 28.0),
        ..base_recipe(
            1,
            "Classic Beef Lasagna",
            "https://images.unsplash.com/photo-1574894709920-11b28e7367e3?w=400",
        )
    }
}

fn avocado_toast() -> Recipe {
    Recipe {
        ready_in_minutes: 10,
        servings: 2,
        health_score: 89.0,
        aggregate_likes: 89,
        price_per_serving_cents: 175,
        dish_types: vec!["breakfast".to_owned()],
        cuisines: vec!["American".to_owned()],
        diets: vec!["vegetarian".to_owned()],
        summary: "Perfectly ripe avocado on artisan bread with premium toppings. This \
                  nutrient-packed breakfast is both delicious and Instagram-worthy."
            .to_owned(),
        ingredients: vec![
            ingredient("Sourdough bread", 2.0, "slices", "2 slices artisan sourdough bread"),
            ingredient("Avocado", 1.0, "large", "1 large ripe avocado"),
            ingredient("Cherry tomatoes", 6.0, "pieces", "6 cherry tomatoes, halved"),
            ingredient("Feta cheese", 2.0, "tbsp", "2 tbsp crumbled feta cheese"),
            ingredient("Lime", 0.5, "piece", "1/2 lime, juiced"),
            ingredient("Red pepper flakes", 0.25, "tsp", "1/4 tsp red pepper flakes"),
            ingredient("Salt", 0.25, "tsp", "1/4 tsp sea salt"),
        ],
        instructions: steps(&[
            "Toast the sourdough bread slices until golden brown.",
            "Mash the avocado with lime juice and salt in a small bowl.",
            "Spread the avocado mixture evenly on the toasted bread.",
            "Top with cherry tomatoes and crumbled feta cheese.",
            "Sprinkle with red pepper flakes and serve immediately.",
        ]),
        nutrition: macros(285.0, 18.0, 8.0, 28.0),
        ..base_recipe(
            2,
            "Avocado Toast Deluxe",
            "https://images.unsplash.com/photo-1541519177645-c2c8d6bdc31b?w=400",
        )
    }
}

fn salmon_teriyaki() -> Recipe {
    Recipe {
        ready_in_minutes: 30,
        servings: 4,
        health_score: 85.0,
        aggregate_likes: 167,
        price_per_serving_cents: 420,
        dish_types: vec!["dinner".to_owned(), "main course".to_owned()],
        cuisines: vec!["Japanese".to_owned()],
        diets: vec!["gluten free".to_owned()],
        summary: "Perfectly grilled salmon with homemade teriyaki glaze. This healthy and \
                  flavorful dish is rich in omega-3 fatty acids."
            .to_owned(),
        ingredients: vec![
            ingredient("Salmon fillets", 4.0, "pieces", "4 salmon fillets (6 oz each)"),
            ingredient("Soy sauce", 0.25, "cup", "1/4 cup low-sodium soy sauce"),
            ingredient("Mirin", 2.0, "tbsp", "2 tbsp mirin"),
            ingredient("Brown sugar", 2.0, "tbsp", "2 tbsp brown sugar"),
            ingredient("Ginger", 1.0, "tbsp", "1 tbsp fresh ginger, grated"),
            ingredient("Garlic", 2.0, "cloves", "2 cloves garlic, minced"),
            ingredient("Sesame oil", 1.0, "tsp", "1 tsp sesame oil"),
        ],
        instructions: steps(&[
            "Whisk together soy sauce, mirin, brown sugar, ginger, garlic, and sesame oil for the teriyaki glaze.",
            "Marinate salmon fillets in half the teriyaki sauce for 15 minutes.",
            "Preheat grill to medium-high heat and oil the grates.",
            "Grill salmon for 4-5 minutes per side, basting with remaining teriyaki sauce.",
            "Cook until internal temperature reaches 145°F and fish flakes easily.",
        ]),
        nutrition: macros(350.0, 18.0, 42.0, 8.0),
        ..base_recipe(
            3,
            "Grilled Salmon Teriyaki",
            "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=400",
        )
    }
}

fn quinoa_bowl() -> Recipe {
    Recipe {
        ready_in_minutes: 20,
        servings: 2,
        health_score: 92.0,
        aggregate_likes: 203,
        price_per_serving_cents: 225,
        dish_types: vec!["lunch".to_owned(), "main course".to_owned()],
        cuisines: vec!["Mediterranean".to_owned()],
        diets: vec!["vegetarian".to_owned(), "vegan".to_owned()],
        summary: "Fresh, healthy bowl with quinoa, vegetables, and Mediterranean flavors. \
                  Packed with plant-based protein and colorful vegetables."
            .to_owned(),
        ingredients: vec![
            ingredient("Quinoa", 1.0, "cup", "1 cup quinoa, rinsed"),
            ingredient("Cucumber", 1.0, "medium", "1 medium cucumber, diced"),
            ingredient("Cherry tomatoes", 1.0, "cup", "1 cup cherry tomatoes, halved"),
            ingredient("Kalamata olives", 0.25, "cup", "1/4 cup kalamata olives, pitted"),
            ingredient("Red onion", 0.25, "cup", "1/4 cup red onion, diced"),
            ingredient("Olive oil", 3.0, "tbsp", "3 tbsp extra virgin olive oil"),
            ingredient("Lemon juice", 2.0, "tbsp", "2 tbsp fresh lemon juice"),
            ingredient("Oregano", 1.0, "tsp", "1 tsp dried oregano"),
        ],
        instructions: steps(&[
            "Cook quinoa according to package directions and let cool.",
            "Dice cucumber, halve cherry tomatoes, and slice red onion.",
            "Whisk together olive oil, lemon juice, and oregano for dressing.",
            "Combine quinoa with vegetables and olives in a large bowl.",
            "Toss with dressing and season with salt and pepper to taste.",
        ]),
        nutrition: macros(380.0, 16.0, 12.0, 52.0),
        ..base_recipe(
            4,
            "Mediterranean Quinoa Bowl",
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400",
        )
    }
}

fn chocolate_chip_cookies() -> Recipe {
    Recipe {
        ready_in_minutes: 25,
        servings: 24,
        health_score: 45.0,
        aggregate_likes: 456,
        price_per_serving_cents: 85,
        dish_types: vec!["dessert".to_owned()],
        cuisines: vec!["American".to_owned()],
        summary: "Soft, chewy cookies with the perfect chocolate-to-cookie ratio. A classic \
                  treat that never goes out of style."
            .to_owned(),
        ingredients: vec![
            ingredient("All-purpose flour", 2.25, "cups", "2 1/4 cups all-purpose flour"),
            ingredient("Butter", 1.0, "cup", "1 cup butter, softened"),
            ingredient("Brown sugar", 0.75, "cup", "3/4 cup packed brown sugar"),
            ingredient("White sugar", 0.75, "cup", "3/4 cup granulated sugar"),
            ingredient("Eggs", 2.0, "large", "2 large eggs"),
            ingredient("Vanilla extract", 2.0, "tsp", "2 tsp vanilla extract"),
            ingredient("Baking soda", 1.0, "tsp", "1 tsp baking soda"),
            ingredient("Salt", 1.0, "tsp", "1 tsp salt"),
            ingredient("Chocolate chips", 2.0, "cups", "2 cups chocolate chips"),
        ],
        instructions: steps(&[
            "Preheat oven to 375°F and line baking sheets with parchment paper.",
            "Cream together butter and both sugars until light and fluffy.",
            "Beat in eggs one at a time, then add vanilla extract.",
            "In a separate bowl, whisk together flour, baking soda, and salt.",
            "Gradually mix dry ingredients into wet ingredients until just combined.",
            "Fold in chocolate chips and drop spoonfuls of dough onto baking sheets.",
            "Bake for 9-11 minutes until edges are golden brown. Cool on pan for 5 minutes before transferring.",
        ]),
        nutrition: macros(195.0, 9.0, 2.5, 28.0),
        ..base_recipe(
            5,
            "Chocolate Chip Cookies",
            "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=400",
        )
    }
}

fn caesar_salad() -> Recipe {
    Recipe {
        ready_in_minutes: 15,
        servings: 4,
        health_score: 78.0,
        aggregate_likes: 123,
        price_per_serving_cents: 165,
        dish_types: vec!["lunch".to_owned(), "side dish".to_owned()],
        cuisines: vec!["American".to_owned()],
        diets: vec!["vegetarian".to_owned()],
        summary: "Fresh, crispy salad with homemade dressing. This classic Caesar salad \
                  features crisp romaine lettuce, parmesan cheese, and crunchy croutons."
            .to_owned(),
        ingredients: vec![
            ingredient("Romaine lettuce", 2.0, "heads", "2 heads romaine lettuce, chopped"),
            ingredient("Parmesan cheese", 0.5, "cup", "1/2 cup grated Parmesan cheese"),
            ingredient("Croutons", 1.0, "cup", "1 cup homemade croutons"),
            ingredient("Mayonnaise", 0.5, "cup", "1/2 cup mayonnaise"),
            ingredient("Lemon juice", 2.0, "tbsp", "2 tbsp fresh lemon juice"),
            ingredient("Worcestershire sauce", 1.0, "tsp", "1 tsp Worcestershire sauce"),
            ingredient("Garlic", 2.0, "cloves", "2 cloves garlic, minced"),
            ingredient("Dijon mustard", 1.0, "tsp", "1 tsp Dijon mustard"),
        ],
        instructions: steps(&[
            "Wash and chop romaine lettuce into bite-sized pieces.",
            "Make dressing by whisking together mayonnaise, lemon juice, Worcestershire sauce, garlic, and Dijon mustard.",
            "Toss lettuce with dressing until evenly coated.",
            "Top with grated Parmesan cheese and croutons.",
            "Serve immediately while lettuce is still crisp.",
        ]),
        nutrition: macros(220.0, 18.0, 6.0, 10.0),
        ..base_recipe(
            6,
            "Caesar Salad",
            "https://images.unsplash.com/photo-1512852939750-1305098529bf?w=400",
        )
    }
}
