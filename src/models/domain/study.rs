use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate's result on one topic of a practice or mock test.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicScore {
    pub topic: String,
    pub attempted: u32,
    pub correct: u32,
}

impl TopicScore {
    pub fn new(topic: &str, attempted: u32, correct: u32) -> Self {
        Self {
            topic: topic.to_string(),
            attempted,
            correct,
        }
    }

    /// Whole-number accuracy; zero when nothing was attempted.
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempted == 0 {
            return 0;
        }
        (self.correct.min(self.attempted) * 100 + self.attempted / 2) / self.attempted
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachFeedback {
    pub summary: String,
    pub strong_areas: Vec<String>,
    pub weak_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyNotes {
    pub topic: String,
    pub overview: String,
    pub key_concepts: Vec<String>,
    pub important_facts: Vec<String>,
    pub exam_tips: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyDay {
    pub day: u32,
    pub focus_topics: Vec<String>,
    pub tasks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub days: Vec<StudyDay>,
    pub advice: String,
}

impl StudyPlan {
    /// Keeps at most `day_count` days and numbers them from 1.
    pub fn normalized(mut self, day_count: u32) -> Self {
        self.days.truncate(day_count as usize);
        for (day, entry) in (1..).zip(self.days.iter_mut()) {
            entry.day = day;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(number: u32) -> StudyDay {
        StudyDay {
            day: number,
            focus_topics: vec!["Simplification".to_string()],
            tasks: vec!["Solve 30 questions".to_string()],
        }
    }

    #[test]
    fn accuracy_rounds_and_handles_empty_topics() {
        assert_eq!(TopicScore::new("Syllogism", 3, 2).accuracy_percent(), 67);
        assert_eq!(TopicScore::new("Syllogism", 0, 0).accuracy_percent(), 0);
        assert_eq!(TopicScore::new("Syllogism", 4, 9).accuracy_percent(), 100);
    }

    #[test]
    fn plan_is_cut_and_renumbered() {
        let plan = StudyPlan {
            days: vec![day(3), day(3), day(7), day(9)],
            advice: "Revise daily".to_string(),
        }
        .normalized(3);

        let numbers: Vec<u32> = plan.days.iter().map(|d| d.day).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn notes_use_camel_case_keys() {
        let notes = StudyNotes {
            topic: "Monsoon".to_string(),
            overview: "Seasonal winds".to_string(),
            key_concepts: vec![],
            important_facts: vec![],
            exam_tips: vec!["Learn onset dates".to_string()],
        };

        let json = serde_json::to_value(&notes).expect("notes should serialize");
        assert_eq!(json["examTips"][0], "Learn onset dates");
        assert!(json.get("keyConcepts").is_some());
    }
}
