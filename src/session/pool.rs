//! Question pool assembly

use rand::Rng;

use crate::error::SessionError;
use crate::questions::{Question, QuestionBank, shuffle};

/// Where a session's questions come from
#[derive(Debug, Clone, PartialEq)]
pub enum PoolSource {
    /// A validated custom upload
    Custom(Vec<Question>),
    /// The built-in bank for this grade
    Grade(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub shuffle: bool,
    /// Keep at most this many questions
    pub limit: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            shuffle: true,
            limit: None,
        }
    }
}

/// Assemble the questions for one session
pub fn build_pool<R: Rng + ?Sized>(
    bank: &QuestionBank,
    source: &PoolSource,
    config: PoolConfig,
    rng: &mut R,
) -> Result<Vec<Question>, SessionError> {
    let questions = match source {
        PoolSource::Custom(questions) => questions.clone(),
        PoolSource::Grade(grade) => bank.lookup(grade),
    };

    let mut pool = if config.shuffle {
        shuffle(&questions, rng)
    } else {
        questions
    };
    if let Some(limit) = config.limit {
        pool.truncate(limit);
    }

    if pool.is_empty() {
        return Err(SessionError::EmptyPool);
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_grade_pool_is_full_grade() {
        let bank = QuestionBank::builtin();
        let mut rng = Pcg32::seed_from_u64(1);
        let pool = build_pool(
            &bank,
            &PoolSource::Grade("3".into()),
            PoolConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(pool.len(), 40);
        assert!(pool.iter().all(|q| q.grade == "3"));
    }

    #[test]
    fn test_limit_truncates() {
        let bank = QuestionBank::builtin();
        let mut rng = Pcg32::seed_from_u64(1);
        let config = PoolConfig {
            shuffle: true,
            limit: Some(10),
        };
        let pool = build_pool(&bank, &PoolSource::Grade("2".into()), config, &mut rng).unwrap();
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn test_unshuffled_custom_keeps_order() {
        let bank = QuestionBank::builtin();
        let custom = bank.lookup("1")[..5].to_vec();
        let mut rng = Pcg32::seed_from_u64(1);
        let config = PoolConfig {
            shuffle: false,
            limit: None,
        };
        let pool = build_pool(&bank, &PoolSource::Custom(custom.clone()), config, &mut rng).unwrap();
        assert_eq!(pool, custom);
    }

    #[test]
    fn test_unknown_grade_cannot_start() {
        let bank = QuestionBank::builtin();
        let mut rng = Pcg32::seed_from_u64(1);
        let result = build_pool(
            &bank,
            &PoolSource::Grade("99".into()),
            PoolConfig::default(),
            &mut rng,
        );
        assert_eq!(result, Err(SessionError::EmptyPool));
    }

    #[test]
    fn test_zero_limit_cannot_start() {
        let bank = QuestionBank::builtin();
        let mut rng = Pcg32::seed_from_u64(1);
        let config = PoolConfig {
            shuffle: true,
            limit: Some(0),
        };
        assert!(build_pool(&bank, &PoolSource::Grade("1".into()), config, &mut rng).is_err());
    }
}
