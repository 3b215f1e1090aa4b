//! Performance report for the results screen
//!
//! A finished run is summarized into an [`AnalysisRequest`] and sent to a
//! generative model for a short narrative report. The report is a nicety:
//! when anything goes wrong the player gets [`PerformanceReport::fallback`]
//! instead and the failure only shows up in the log.

mod gemini;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use gemini::{AnalysisClient, parse_report};

use crate::profile::StudentProfile;
use crate::session::GameResult;

/// One answered question, as sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSummary {
    pub skill: String,
    pub correct: bool,
    pub time_taken_secs: f32,
}

/// Everything the model is told about a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub student_name: String,
    pub grade: String,
    pub game: String,
    pub score: u64,
    pub answers: Vec<AnswerSummary>,
}

impl AnalysisRequest {
    pub fn new(profile: &StudentProfile, game: &str, result: &GameResult) -> Self {
        Self {
            student_name: profile.name.clone(),
            grade: profile.grade.clone(),
            game: game.to_string(),
            score: result.score,
            answers: result
                .history
                .iter()
                .map(|record| AnswerSummary {
                    skill: record.skill.clone(),
                    correct: record.correct,
                    time_taken_secs: record.time_taken_secs,
                })
                .collect(),
        }
    }

    /// Per-skill accuracy, sorted by skill name
    pub fn skill_breakdown(&self) -> Vec<SkillSummary> {
        let mut skills: BTreeMap<&str, SkillSummary> = BTreeMap::new();
        for answer in &self.answers {
            let entry = skills
                .entry(answer.skill.as_str())
                .or_insert_with(|| SkillSummary::new(&answer.skill));
            entry.attempted += 1;
            if answer.correct {
                entry.correct += 1;
            }
            entry.total_time_secs += answer.time_taken_secs;
        }
        skills.into_values().collect()
    }

    /// Prompt text for the model
    pub fn prompt(&self) -> String {
        let correct = self.answers.iter().filter(|a| a.correct).count();
        let mut prompt = format!(
            "You are a friendly tutor writing a short report for {name}, a grade {grade} student, \
             who just played the quiz game \"{game}\". They scored {score} points and answered \
             {correct} of {total} questions correctly.\n\nResults by skill:\n",
            name = self.student_name,
            grade = self.grade,
            game = self.game,
            score = self.score,
            total = self.answers.len(),
        );
        for skill in self.skill_breakdown() {
            prompt.push_str(&format!(
                "- {}: {}/{} correct, {:.1}s average\n",
                skill.skill,
                skill.correct,
                skill.attempted,
                skill.average_time_secs()
            ));
        }
        prompt.push_str(
            "\nReply in JSON with `strengths` and `weaknesses` (short lists), a one-sentence \
             `recommendation` for what to practice next and a cheerful `encouragement`. \
             Use simple words a child can read.",
        );
        prompt
    }
}

/// Local per-skill tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub skill: String,
    pub attempted: u32,
    pub correct: u32,
    pub total_time_secs: f32,
}

impl SkillSummary {
    fn new(skill: &str) -> Self {
        Self {
            skill: skill.to_string(),
            attempted: 0,
            correct: 0,
            total_time_secs: 0.0,
        }
    }

    pub fn accuracy(&self) -> f32 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f32 / self.attempted as f32
        }
    }

    pub fn average_time_secs(&self) -> f32 {
        if self.attempted == 0 {
            0.0
        } else {
            self.total_time_secs / self.attempted as f32
        }
    }
}

/// Narrative report shown under the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
    pub encouragement: String,
}

impl PerformanceReport {
    /// Generic report used whenever the model cannot be reached
    pub fn fallback() -> Self {
        Self {
            strengths: vec!["You finished the game and kept trying!".to_string()],
            weaknesses: vec!["Some questions were tricky this time.".to_string()],
            recommendation: "Play another round and take your time on each question."
                .to_string(),
            encouragement: "Great effort! Every game makes you a little smarter.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AnswerRecord, Outcome};

    pub(super) fn request() -> AnalysisRequest {
        let record = |skill: &str, correct, time| AnswerRecord {
            question_id: 1,
            skill: skill.to_string(),
            correct,
            time_taken_secs: time,
            timed_out: false,
        };
        let result = GameResult {
            score: 25,
            streak: 1,
            best_streak: 1,
            questions_answered: 3,
            correct_answers: 2,
            elapsed_secs: 9.0,
            level: 1,
            outcome: Outcome::Completed,
            history: vec![
                record("Subtraction", true, 2.0),
                record("Addition", false, 4.0),
                record("Addition", true, 2.0),
            ],
        };
        let profile = StudentProfile {
            name: "Maya".into(),
            grade: "2".into(),
            avatar: "🦊".into(),
        };
        AnalysisRequest::new(&profile, "Math Racer", &result)
    }

    #[test]
    fn test_request_from_result() {
        let request = request();
        assert_eq!(request.student_name, "Maya");
        assert_eq!(request.answers.len(), 3);
        assert!(!request.answers[1].correct);
    }

    #[test]
    fn test_skill_breakdown() {
        let breakdown = request().skill_breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].skill, "Addition");
        assert_eq!(breakdown[0].attempted, 2);
        assert_eq!(breakdown[0].correct, 1);
        assert_eq!(breakdown[0].accuracy(), 0.5);
        assert_eq!(breakdown[0].average_time_secs(), 3.0);
        assert_eq!(breakdown[1].accuracy(), 1.0);
    }

    #[test]
    fn test_prompt_mentions_run() {
        let prompt = request().prompt();
        assert!(prompt.contains("Maya"));
        assert!(prompt.contains("Math Racer"));
        assert!(prompt.contains("Addition: 1/2 correct"));
    }

    #[test]
    fn test_fallback_is_complete() {
        let report = PerformanceReport::fallback();
        assert!(!report.strengths.is_empty());
        assert!(!report.weaknesses.is_empty());
        assert!(!report.recommendation.is_empty());
        assert!(!report.encouragement.is_empty());
    }
}
