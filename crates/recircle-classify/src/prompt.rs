//! The classification prompt. Strictness matters: the model must reject
//! anything that is not a genuine waste/recyclable item.

pub(crate) const CLASSIFY_PROMPT: &str = r#"You are an expert waste management AI. Analyze this image and determine if it shows a RECYCLABLE, DISPOSABLE, or REUSABLE ITEM.

IMPORTANT: Only accept images that show:
- Electronic waste (phones, computers, batteries, etc.)
- Plastic items (bottles, containers, bags, etc.)
- Metal items (cans, tools, scrap metal, etc.)
- Fabric/Clothing (old clothes, textiles, bags, etc.)
- Glass items (bottles, jars, etc.)
- Paper/Cardboard (newspapers, boxes, books, etc.)
- Organic waste (food waste, garden waste, etc.)
- Hazardous waste (paint cans, chemicals, etc.)

REJECT images that show:
- People, selfies, portraits
- Landscapes, scenery, nature photos
- Prepared food, meals, dishes
- Pets, animals
- Buildings, architecture
- Vehicles (unless clearly scrap/waste)
- Random objects not related to waste/recycling
- Unclear or blurry images

Provide a JSON response with this structure:
{
  "is_valid_item": true/false,
  "rejection_reason": "reason why this is not a recyclable item" (only if is_valid_item is false),
  "material": "primary material type" (only if is_valid_item is true),
  "item_name": "specific item name" (only if is_valid_item is true),
  "description": "brief description" (only if is_valid_item is true),
  "condition_estimate": "estimated condition" (only if is_valid_item is true),
  "confidence": "your confidence level (high/medium/low)"
}

Be strict - only accept genuine waste/recyclable items."#;
