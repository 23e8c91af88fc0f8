use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_context_diagram_svg: Option<String>,
    pub options: BTreeMap<OptionKey, String>,
    pub correct_option: OptionKey,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_diagram_svg: Option<String>,
    #[serde(rename = "isPYQ")]
    pub is_pyq: bool,
    pub question_subtype: String,
    pub question_type: QuestionType,
    // Assigned by the mock test assembler, never by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn has_valid_answer_key(&self) -> bool {
        self.options.contains_key(&self.correct_option)
    }

    pub fn with_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
    E,
}

impl OptionKey {
    pub const ALL: [OptionKey; 5] = [
        OptionKey::A,
        OptionKey::B,
        OptionKey::C,
        OptionKey::D,
        OptionKey::E,
    ];

    /// The first `count` keys, `A` onwards.
    pub fn first(count: u8) -> &'static [OptionKey] {
        let count = (count as usize).min(Self::ALL.len());
        &Self::ALL[..count]
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            OptionKey::A => "A",
            OptionKey::B => "B",
            OptionKey::C => "C",
            OptionKey::D => "D",
            OptionKey::E => "E",
        };
        write!(f, "{}", key)
    }
}

impl FromStr for OptionKey {
    type Err = String;

    /// Accepts the forms models tend to emit: `B`, `b`, `(B)`, `Option B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s
            .trim()
            .trim_start_matches("Option")
            .trim_start_matches("option")
            .trim()
            .trim_matches(|c| c == '(' || c == ')' || c == '.' || c == ':')
            .trim();

        match cleaned.to_ascii_uppercase().as_str() {
            "A" => Ok(OptionKey::A),
            "B" => Ok(OptionKey::B),
            "C" => Ok(OptionKey::C),
            "D" => Ok(OptionKey::D),
            "E" => Ok(OptionKey::E),
            _ => Err(format!("'{}' is not an option key", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    AssertionReasoning,
}
