use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ExamFamily {
    Tnpsc,
    Bank,
    Railway,
    Ssc,
}

impl ExamFamily {
    /// Bank papers carry five options per question, everything else four.
    pub fn options_count(self) -> u8 {
        match self {
            ExamFamily::Bank => 5,
            ExamFamily::Tnpsc | ExamFamily::Railway | ExamFamily::Ssc => 4,
        }
    }
}

impl fmt::Display for ExamFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamFamily::Tnpsc => write!(f, "TNPSC"),
            ExamFamily::Bank => write!(f, "Bank"),
            ExamFamily::Railway => write!(f, "Railway"),
            ExamFamily::Ssc => write!(f, "SSC"),
        }
    }
}

impl FromStr for ExamFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tnpsc" => Ok(ExamFamily::Tnpsc),
            "bank" | "banking" | "ibps" | "sbi" => Ok(ExamFamily::Bank),
            "railway" | "railways" | "rrb" => Ok(ExamFamily::Railway),
            "ssc" => Ok(ExamFamily::Ssc),
            other => Err(format!("Unknown exam family '{}'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ExamStage {
    Prelims,
    Mains,
    Tier1,
    Tier2,
    Cbt1,
    Cbt2,
}

impl fmt::Display for ExamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamStage::Prelims => write!(f, "Prelims"),
            ExamStage::Mains => write!(f, "Mains"),
            ExamStage::Tier1 => write!(f, "Tier 1"),
            ExamStage::Tier2 => write!(f, "Tier 2"),
            ExamStage::Cbt1 => write!(f, "CBT 1"),
            ExamStage::Cbt2 => write!(f, "CBT 2"),
        }
    }
}

impl FromStr for ExamStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match normalized.as_str() {
            "prelims" | "preliminary" => Ok(ExamStage::Prelims),
            "mains" => Ok(ExamStage::Mains),
            "tier1" => Ok(ExamStage::Tier1),
            "tier2" => Ok(ExamStage::Tier2),
            "cbt1" => Ok(ExamStage::Cbt1),
            "cbt2" => Ok(ExamStage::Cbt2),
            _ => Err(format!("Unknown exam stage '{}'", s.trim())),
        }
    }
}

/// One sub-topic bucket of a section with the allowed question-count range.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicDistribution {
    pub topic_keywords: Vec<String>,
    pub min: u32,
    pub max: u32,
}

impl TopicDistribution {
    pub fn new(topic_keywords: &[&str], min: u32, max: u32) -> Self {
        TopicDistribution {
            topic_keywords: topic_keywords.iter().map(|k| k.to_string()).collect(),
            min,
            max,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionBlueprint {
    pub name: String,
    pub question_count: u32,
    /// Name of the syllabus section topics are drawn from.
    pub syllabus_section: String,
    pub buckets: Vec<TopicDistribution>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamBlueprint {
    pub family: ExamFamily,
    pub stage: ExamStage,
    pub sections: Vec<SectionBlueprint>,
}

impl ExamBlueprint {
    pub fn total_questions(&self) -> u32 {
        self.sections.iter().map(|s| s.question_count).sum()
    }

    pub fn section(&self, name: &str) -> Option<&SectionBlueprint> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Caller-supplied replacement for the built-in section pattern.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExamPatternConfig {
    #[validate(length(min = 1, message = "At least one section is required"), nested)]
    pub sections: Vec<SectionPattern>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SectionPattern {
    #[validate(length(min = 1, max = 100))]
    pub section_name: String,

    #[validate(range(min = 1, max = 200))]
    pub question_count: u32,
}
