//! Typed views over the free-form answers map.
//!
//! Each category reads a specific set of answer keys; everything else in the
//! map is ignored, and a missing key simply reads as `None`. These views make
//! the per-category expected keys explicit instead of scattering string
//! lookups through the decision tables.

use std::collections::BTreeMap;

pub(crate) type Answers = BTreeMap<String, String>;

fn get<'a>(answers: &'a Answers, key: &str) -> Option<&'a str> {
    answers.get(key).map(String::as_str)
}

pub(crate) struct EwasteAnswers<'a> {
    pub functionality: Option<&'a str>,
    pub age: Option<&'a str>,
    pub data: Option<&'a str>,
}

impl<'a> EwasteAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            functionality: get(answers, "functionality"),
            age: get(answers, "age"),
            data: get(answers, "data"),
        }
    }
}

pub(crate) struct PlasticAnswers<'a> {
    pub condition: Option<&'a str>,
    pub cleanliness: Option<&'a str>,
}

impl<'a> PlasticAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            condition: get(answers, "condition"),
            cleanliness: get(answers, "cleanliness"),
        }
    }
}

pub(crate) struct MetalAnswers<'a> {
    pub condition: Option<&'a str>,
    pub weight: Option<&'a str>,
}

impl<'a> MetalAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            condition: get(answers, "condition"),
            weight: get(answers, "weight"),
        }
    }
}

pub(crate) struct FabricAnswers<'a> {
    pub condition: Option<&'a str>,
}

impl<'a> FabricAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            condition: get(answers, "condition"),
        }
    }
}

pub(crate) struct GlassAnswers<'a> {
    pub condition: Option<&'a str>,
}

impl<'a> GlassAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            condition: get(answers, "condition"),
        }
    }
}

pub(crate) struct PaperAnswers<'a> {
    pub paper_type: Option<&'a str>,
    pub quantity: Option<&'a str>,
    pub condition: Option<&'a str>,
}

impl<'a> PaperAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            paper_type: get(answers, "type"),
            quantity: get(answers, "quantity"),
            condition: get(answers, "condition"),
        }
    }
}

pub(crate) struct GenericAnswers<'a> {
    pub condition: Option<&'a str>,
}

impl<'a> GenericAnswers<'a> {
    pub(crate) fn from_map(answers: &'a Answers) -> Self {
        Self {
            condition: get(answers, "condition"),
        }
    }
}
