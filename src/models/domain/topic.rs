use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Topic {
    pub name: String,
    pub unit: String,
}

impl Topic {
    pub fn new(name: &str, unit: &str) -> Self {
        Topic {
            name: name.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Renders the topic the way prompts reference it, e.g. `Syllogism (Reasoning Ability)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyllabusUnit {
    pub id: String,
    pub title: String,
    pub topics: Vec<Topic>,
}

impl SyllabusUnit {
    pub fn new(id: &str, title: &str, topic_names: &[&str]) -> Self {
        SyllabusUnit {
            id: id.to_string(),
            title: title.to_string(),
            topics: topic_names
                .iter()
                .map(|name| Topic::new(name, title))
                .collect(),
        }
    }
}

/// A syllabus section groups the units examined under one paper section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyllabusSection {
    pub name: String,
    pub units: Vec<SyllabusUnit>,
}

impl SyllabusSection {
    pub fn new(name: &str, units: Vec<SyllabusUnit>) -> Self {
        SyllabusSection {
            name: name.to_string(),
            units,
        }
    }

    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.units.iter().flat_map(|unit| unit.topics.iter())
    }
}
