//! Question repository
//!
//! Grade-keyed multiple-choice questions, built once from static tables and
//! never mutated. Custom uploads go through [`import`].

mod bank;
pub mod import;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub use import::parse_custom_questions;

/// Grade label given to uploaded question sets
pub const CUSTOM_GRADE: &str = "custom";

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    /// 1 (easiest) to 3
    pub difficulty: u8,
    pub skill: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Hit strength used by battle skins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }

    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// `0 <= correct_answer < options.len()` and at least two options
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.correct_answer < self.options.len()
    }
}

/// The built-in, grade-keyed question bank
#[derive(Debug, Clone)]
pub struct QuestionBank {
    grades: Vec<(String, Vec<Question>)>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self {
            grades: bank::build(),
        }
    }

    /// Bank over an explicit grade table, in the given order
    pub fn from_grades(grades: Vec<(String, Vec<Question>)>) -> Self {
        Self { grades }
    }

    /// Grade labels in ascending order
    pub fn grades(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|(grade, _)| grade.as_str())
    }

    pub fn has_grade(&self, grade: &str) -> bool {
        self.grades.iter().any(|(g, _)| g == grade)
    }

    /// All questions for `grade`, or an empty list for an unknown grade
    pub fn lookup(&self, grade: &str) -> Vec<Question> {
        match self.grades.iter().find(|(g, _)| g == grade) {
            Some((_, questions)) => questions.clone(),
            None => {
                log::warn!("No questions for grade {:?}", grade);
                Vec::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.grades.iter().map(|(_, qs)| qs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Uniformly shuffled copy of `items` (Fisher–Yates); the input is untouched
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_every_grade_has_questions() {
        let bank = QuestionBank::builtin();
        let grades: Vec<_> = bank.grades().map(str::to_owned).collect();
        assert_eq!(grades, vec!["1", "2", "3", "4", "5"]);
        for grade in &grades {
            assert!(!bank.lookup(grade).is_empty(), "grade {grade} is empty");
        }
    }

    #[test]
    fn test_grade_three_has_forty() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.lookup("3").len(), 40);
        assert_eq!(bank.len(), 200);
        assert!(!bank.is_empty());
    }

    #[test]
    fn test_unknown_grade_is_empty() {
        let bank = QuestionBank::builtin();
        assert!(bank.lookup("12").is_empty());
        assert!(bank.lookup("").is_empty());
        assert!(!bank.has_grade("kindergarten"));
    }

    #[test]
    fn test_all_questions_well_formed() {
        let bank = QuestionBank::builtin();
        for grade in bank.grades() {
            for q in bank.lookup(grade) {
                assert!(q.is_well_formed(), "question {} is malformed", q.id);
                assert_eq!(q.options.len(), 4, "question {} option count", q.id);
                assert_eq!(q.grade, grade);
                assert!((1..=3).contains(&q.difficulty));
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let bank = QuestionBank::builtin();
        let mut ids: Vec<u32> = bank
            .grades()
            .flat_map(|g| bank.lookup(g))
            .map(|q| q.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_options_are_distinct() {
        let bank = QuestionBank::builtin();
        for grade in bank.grades() {
            for q in bank.lookup(grade) {
                let mut opts = q.options.clone();
                opts.sort();
                opts.dedup();
                assert_eq!(opts.len(), q.options.len(), "question {} repeats an option", q.id);
            }
        }
    }

    #[test]
    fn test_shuffle_leaves_input_alone() {
        let input: Vec<u32> = (0..20).collect();
        let mut rng = Pcg32::seed_from_u64(7);
        let _ = shuffle(&input, &mut rng);
        assert_eq!(input, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffle(&input, &mut Pcg32::seed_from_u64(42));
        let b = shuffle(&input, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn shuffle_is_permutation(items in proptest::collection::vec(0u16..50, 0..64), seed: u64) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let shuffled = shuffle(&items, &mut rng);
            prop_assert_eq!(shuffled.len(), items.len());

            let mut a = items.clone();
            let mut b = shuffled;
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
