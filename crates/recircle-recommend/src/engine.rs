//! Category dispatch and per-category decision tables.

use recircle_core::{Category, Recommendation};

use crate::answers::{
    Answers, EwasteAnswers, FabricAnswers, GenericAnswers, GlassAnswers, MetalAnswers,
    PaperAnswers, PlasticAnswers,
};
use crate::marketplace::search_url;
use crate::value;

/// Classification metadata carried alongside the answers. The decision
/// tables currently key off category, item name and answers only; the
/// metadata rides along for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ClassificationMeta {
    pub material: String,
    pub description: String,
    pub condition_estimate: String,
}

/// Derive a recommendation for an item.
///
/// Pure and deterministic: the same `(category, item_name, answers)` always
/// produces the same recommendation. Unanswered or extra keys in `answers`
/// are ignored by every table.
#[must_use]
pub fn recommend(
    category: Category,
    item_name: &str,
    answers: &Answers,
    meta: &ClassificationMeta,
) -> Recommendation {
    tracing::debug!(
        category = %category,
        item_name,
        material = %meta.material,
        "deriving recommendation"
    );
    match category {
        Category::Ewaste => handle_ewaste(item_name, answers),
        Category::Plastic => handle_plastic(item_name, answers),
        Category::Metal => handle_metal(item_name, answers),
        Category::Fabric => handle_fabric(item_name, answers),
        Category::Glass => handle_glass(answers),
        Category::Paper => handle_paper(answers),
        Category::Organic | Category::Hazardous | Category::Other => handle_generic(answers),
    }
}

fn owned(tips: &[&str]) -> Vec<String> {
    tips.iter().map(ToString::to_string).collect()
}

fn handle_ewaste(item_name: &str, answers: &Answers) -> Recommendation {
    let a = EwasteAnswers::from_map(answers);
    let functional = a.functionality == Some("Yes, fully functional");

    let (action, reasoning, estimated_value, tips) =
        if functional && a.age == Some("Less than 1 year") {
            (
                "Sell",
                "Your device is functional and relatively new. You can sell it online to get good value.",
                Some(value::ewaste_value(item_name, a.functionality, a.age)),
                owned(&[
                    "Take clear photos from multiple angles",
                    "Include original box and accessories if available",
                    "Mention warranty status",
                ]),
            )
        } else if functional || a.functionality == Some("Partially working") {
            (
                "Sell or Donate",
                "Your device still works. Consider selling at a lower price or donating to schools/NGOs.",
                Some(value::ewaste_value(item_name, a.functionality, a.age)),
                owned(&[
                    "Check if local NGOs accept working electronics",
                    "Schools often need computers for students",
                ]),
            )
        } else {
            let mut tips = owned(&[
                "Never throw electronics in regular trash",
                "Remove batteries before recycling",
            ]);
            if a.data == Some("Yes, needs wiping") {
                tips.push("⚠️ IMPORTANT: Wipe all personal data before recycling".to_string());
            }
            (
                "E-waste Recycling",
                "Non-functional electronics should be recycled properly to recover valuable materials and prevent environmental harm.",
                None,
                tips,
            )
        };

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value,
        marketplace_search_url: estimated_value.map(|_| search_url(item_name)),
        tips,
    }
}

fn handle_plastic(item_name: &str, answers: &Answers) -> Recommendation {
    let a = PlasticAnswers::from_map(answers);

    let (action, reasoning, tips) = if a.condition == Some("New/Unused")
        && item_name.to_lowercase().contains("bottle")
    {
        (
            "Reuse or Donate",
            "Unused plastic items can be reused or donated instead of recycling.",
            owned(&[
                "Consider using as storage containers",
                "Donate to community centers or schools",
            ]),
        )
    } else if matches!(
        a.cleanliness,
        Some("Yes, completely clean" | "Needs minor cleaning")
    ) {
        (
            "Recycle",
            "Clean plastic can be recycled effectively. This helps reduce plastic pollution.",
            owned(&[
                "Rinse containers before recycling",
                "Remove caps and labels if possible",
                "Check the recycling symbol (1-7) on the item",
            ]),
        )
    } else {
        (
            "Dispose",
            "Heavily contaminated plastic cannot be recycled and should be disposed properly.",
            owned(&[
                "Try to clean if possible before disposal",
                "Use designated waste bins",
            ]),
        )
    };

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value: None,
        marketplace_search_url: None,
        tips,
    }
}

fn handle_metal(item_name: &str, answers: &Answers) -> Recommendation {
    let a = MetalAnswers::from_map(answers);

    let (action, reasoning, estimated_value, tips) =
        if matches!(a.condition, Some("Excellent" | "Good")) {
            (
                "Sell",
                "Metal items in good condition have resale value. You can sell them online or to scrap dealers.",
                Some(value::metal_value(a.weight, a.condition)),
                owned(&[
                    "Clean the item before selling",
                    "Take photos showing the condition",
                ]),
            )
        } else {
            (
                "Sell as Scrap",
                "Metal can be sold to scrap dealers who will recycle it. Even damaged metal has value.",
                Some(value::scrap_value(a.weight)),
                owned(&[
                    "Separate different types of metals for better rates",
                    "Remove non-metal parts if possible",
                ]),
            )
        };

    let marketplace_search_url = (estimated_value.is_some() && a.condition != Some("Scrap only"))
        .then(|| search_url(item_name));

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value,
        marketplace_search_url,
        tips,
    }
}

fn handle_fabric(item_name: &str, answers: &Answers) -> Recommendation {
    let a = FabricAnswers::from_map(answers);

    let (action, reasoning, tips) = if matches!(a.condition, Some("Like new" | "Gently used")) {
        (
            "Sell or Donate",
            "Good condition clothing can be sold online or donated to those in need.",
            owned(&[
                "Wash and iron before selling/donating",
                "Take clear photos for online selling",
                "Bundle similar items for better deals",
            ]),
        )
    } else if a.condition == Some("Worn but usable") {
        (
            "Donate",
            "Wearable clothes should be donated to NGOs serving underprivileged communities.",
            owned(&[
                "Donate to local NGOs or homeless shelters",
                "Check if items are clean before donating",
            ]),
        )
    } else {
        (
            "Textile Recycling",
            "Damaged fabric can be recycled into new materials or used for industrial purposes.",
            owned(&[
                "Cut into cleaning rags for home use",
                "Textile recyclers accept damaged clothing",
            ]),
        )
    };

    let like_new = a.condition == Some("Like new");

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value: like_new.then_some(100),
        marketplace_search_url: like_new.then(|| search_url(item_name)),
        tips,
    }
}

fn handle_glass(answers: &Answers) -> Recommendation {
    let a = GlassAnswers::from_map(answers);

    let (action, reasoning, tips) = if a.condition == Some("Intact") {
        (
            "Reuse or Recycle",
            "Intact glass items can be reused for storage or recycled.",
            owned(&[
                "Clean and reuse for storage",
                "Donate to craft centers",
                "Recycle at glass collection points",
            ]),
        )
    } else {
        // Chipped/cracked glass is handled like broken glass.
        (
            "Dispose Safely",
            "Broken glass should be wrapped and disposed safely to prevent injuries.",
            owned(&[
                "Wrap in newspaper or cardboard",
                "Mark the package as \"BROKEN GLASS\"",
                "Use designated disposal bins",
            ]),
        )
    };

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value: None,
        marketplace_search_url: None,
        tips,
    }
}

fn handle_paper(answers: &Answers) -> Recommendation {
    let a = PaperAnswers::from_map(answers);

    // The books branch intentionally carries no value estimate even though
    // the reasoning mentions selling.
    let (action, reasoning, estimated_value, tips) = if a.paper_type == Some("Books")
        && a.condition == Some("Clean and dry")
    {
        (
            "Donate or Sell",
            "Books in good condition can be donated to libraries or sold online.",
            None,
            owned(&["Donate to schools or libraries", "Sell on online marketplaces"]),
        )
    } else if matches!(a.quantity, Some("Large (multiple bags)" | "Very large")) {
        (
            "Sell to Scrap Dealer",
            "Large quantities of paper can be sold to scrap dealers.",
            Some(value::paper_value(a.quantity)),
            owned(&[
                "Sort by type (newspaper, cardboard, white paper)",
                "Ensure paper is dry",
            ]),
        )
    } else {
        (
            "Recycle",
            "Paper is highly recyclable and helps save trees.",
            None,
            owned(&["Remove staples and clips", "Keep paper dry before recycling"]),
        )
    };

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value,
        marketplace_search_url: None,
        tips,
    }
}

fn handle_generic(answers: &Answers) -> Recommendation {
    let a = GenericAnswers::from_map(answers);

    let (action, reasoning) = if matches!(a.condition, Some("Excellent" | "Good")) {
        (
            "Sell or Donate",
            "Items in good condition should be reused by selling or donating.",
        )
    } else {
        (
            "Recycle",
            "Consider the best disposal method based on item condition.",
        )
    };

    Recommendation {
        action: action.to_string(),
        reasoning: reasoning.to_string(),
        estimated_value: None,
        marketplace_search_url: None,
        tips: owned(&["Contact local waste management for guidance"]),
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
