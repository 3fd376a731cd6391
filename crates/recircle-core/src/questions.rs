//! Per-category follow-up question bank.
//!
//! Every category yields exactly 4 questions and the 4th is always the
//! user's intent. The orchestrating surfaces rely on the 4-question count.

use crate::category::Category;
use crate::types::Question;

struct QuestionDef {
    id: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
}

const PLASTIC: &[QuestionDef] = &[
    QuestionDef {
        id: "condition",
        prompt: "What is the current condition?",
        options: &[
            "New/Unused",
            "Lightly Used",
            "Moderately Used",
            "Heavily Used",
            "Broken",
        ],
    },
    QuestionDef {
        id: "size",
        prompt: "What is the approximate size?",
        options: &[
            "Small (fits in hand)",
            "Medium (backpack size)",
            "Large (furniture size)",
            "Very Large",
        ],
    },
    QuestionDef {
        id: "cleanliness",
        prompt: "Is it clean and ready for recycling?",
        options: &[
            "Yes, completely clean",
            "Needs minor cleaning",
            "Needs major cleaning",
            "Cannot be cleaned",
        ],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &[
            "Sell if valuable",
            "Donate to someone",
            "Recycle responsibly",
            "Just dispose safely",
        ],
    },
];

const METAL: &[QuestionDef] = &[
    QuestionDef {
        id: "condition",
        prompt: "What is the current condition?",
        options: &["Excellent", "Good", "Fair", "Poor", "Scrap only"],
    },
    QuestionDef {
        id: "weight",
        prompt: "Approximate weight?",
        options: &[
            "Very light (<1kg)",
            "Light (1-5kg)",
            "Medium (5-20kg)",
            "Heavy (>20kg)",
        ],
    },
    QuestionDef {
        id: "type",
        prompt: "What type of metal item?",
        options: &[
            "Appliance",
            "Vehicle part",
            "Utensil/Tool",
            "Structural/Building",
            "Other",
        ],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &["Sell as scrap", "Sell as item", "Donate", "Recycle"],
    },
];

const EWASTE: &[QuestionDef] = &[
    QuestionDef {
        id: "functionality",
        prompt: "Does it still work?",
        options: &[
            "Yes, fully functional",
            "Partially working",
            "Not working",
            "Not sure",
        ],
    },
    QuestionDef {
        id: "age",
        prompt: "How old is the device?",
        options: &[
            "Less than 1 year",
            "1-3 years",
            "3-5 years",
            "More than 5 years",
        ],
    },
    QuestionDef {
        id: "data",
        prompt: "Does it contain personal data?",
        options: &[
            "Yes, needs wiping",
            "Already wiped",
            "No data storage",
            "Not applicable",
        ],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &[
            "Sell if working",
            "Donate",
            "E-waste recycling",
            "Repair first",
        ],
    },
];

const FABRIC: &[QuestionDef] = &[
    QuestionDef {
        id: "condition",
        prompt: "What is the condition?",
        options: &[
            "Like new",
            "Gently used",
            "Worn but usable",
            "Damaged/Torn",
            "Only for recycling",
        ],
    },
    QuestionDef {
        id: "quantity",
        prompt: "How much fabric/clothing?",
        options: &[
            "Single item",
            "Few items (2-5)",
            "Several items (6-10)",
            "Many items (10+)",
        ],
    },
    QuestionDef {
        id: "type",
        prompt: "What type of fabric items?",
        options: &[
            "Clothing",
            "Home textiles (curtains, sheets)",
            "Bags/Accessories",
            "Raw fabric",
        ],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &[
            "Sell online",
            "Donate to needy",
            "Textile recycling",
            "Upcycle/Reuse",
        ],
    },
];

const GLASS: &[QuestionDef] = &[
    QuestionDef {
        id: "condition",
        prompt: "What is the condition?",
        options: &["Intact", "Chipped/Cracked", "Broken"],
    },
    QuestionDef {
        id: "type",
        prompt: "What type of glass item?",
        options: &["Bottle", "Jar", "Window/Mirror", "Decorative", "Other"],
    },
    QuestionDef {
        id: "cleanliness",
        prompt: "Is it clean?",
        options: &["Yes, clean", "Needs cleaning", "Very dirty"],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &["Recycle", "Reuse/Repurpose", "Dispose safely"],
    },
];

const PAPER: &[QuestionDef] = &[
    QuestionDef {
        id: "type",
        prompt: "What type of paper?",
        options: &[
            "Newspaper/Magazine",
            "Cardboard/Box",
            "Office paper",
            "Books",
            "Mixed",
        ],
    },
    QuestionDef {
        id: "quantity",
        prompt: "How much paper?",
        options: &[
            "Small amount",
            "Medium (bag full)",
            "Large (multiple bags)",
            "Very large",
        ],
    },
    QuestionDef {
        id: "condition",
        prompt: "Condition of the paper?",
        options: &[
            "Clean and dry",
            "Slightly soiled",
            "Wet/damaged",
            "Mixed quality",
        ],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &["Recycle", "Sell to scrap dealer", "Donate (books)", "Dispose"],
    },
];

/// Fallback set for categories without a dedicated bank
/// (organic, hazardous, other).
const DEFAULT: &[QuestionDef] = &[
    QuestionDef {
        id: "condition",
        prompt: "What is the current condition?",
        options: &["Excellent", "Good", "Fair", "Poor", "Damaged"],
    },
    QuestionDef {
        id: "age",
        prompt: "How old is it approximately?",
        options: &[
            "Less than 6 months",
            "6 months - 2 years",
            "2-5 years",
            "More than 5 years",
        ],
    },
    QuestionDef {
        id: "usability",
        prompt: "Can it still be used?",
        options: &[
            "Yes, fully usable",
            "With minor repairs",
            "With major repairs",
            "No, beyond repair",
        ],
    },
    QuestionDef {
        id: "intent",
        prompt: "What do you want to do with it?",
        options: &["Sell", "Donate", "Recycle", "Dispose"],
    },
];

/// Return the fixed ordered question set for a category.
#[must_use]
pub fn questions_for(category: Category) -> Vec<Question> {
    let specs = match category {
        Category::Plastic => PLASTIC,
        Category::Metal => METAL,
        Category::Ewaste => EWASTE,
        Category::Fabric => FABRIC,
        Category::Glass => GLASS,
        Category::Paper => PAPER,
        Category::Organic | Category::Hazardous | Category::Other => DEFAULT,
    };
    specs
        .iter()
        .map(|spec| Question {
            id: spec.id.to_string(),
            prompt: spec.prompt.to_string(),
            options: spec.options.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_exactly_four_questions() {
        for category in Category::ALL {
            let questions = questions_for(category);
            assert_eq!(questions.len(), 4, "category {category}");
        }
    }

    #[test]
    fn fourth_question_is_always_intent() {
        for category in Category::ALL {
            let questions = questions_for(category);
            assert_eq!(questions[3].id, "intent", "category {category}");
        }
    }

    #[test]
    fn options_stay_within_three_to_five() {
        for category in Category::ALL {
            for question in questions_for(category) {
                assert!(
                    (3..=5).contains(&question.options.len()),
                    "category {category} question {}",
                    question.id
                );
            }
        }
    }

    #[test]
    fn categories_without_dedicated_sets_share_the_default() {
        let organic = questions_for(Category::Organic);
        let hazardous = questions_for(Category::Hazardous);
        let other = questions_for(Category::Other);
        assert_eq!(organic, hazardous);
        assert_eq!(organic, other);
        assert_eq!(organic[2].id, "usability");
    }
}
