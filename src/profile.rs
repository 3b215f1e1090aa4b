//! Student profile entered on the setup screen

use serde::{Deserialize, Serialize};

use crate::error::ArcadeError;
use crate::questions::QuestionBank;

/// Longest accepted name, in characters
pub const MAX_NAME_CHARS: usize = 24;

/// Avatars offered on the setup screen
pub const AVATARS: &[&str] = &["🦊", "🐼", "🦁", "🐸", "🐧", "🦄", "🐙", "🤖"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub grade: String,
    pub avatar: String,
}

impl StudentProfile {
    /// Validate setup form input. An empty avatar picks the first one.
    pub fn new(
        name: &str,
        grade: &str,
        avatar: &str,
        bank: &QuestionBank,
    ) -> Result<Self, ArcadeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ArcadeError::InvalidProfile("please enter your name".into()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ArcadeError::InvalidProfile(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }

        let grade = grade.trim();
        if !bank.has_grade(grade) {
            return Err(ArcadeError::InvalidProfile(format!("unknown grade '{grade}'")));
        }

        let avatar = match avatar.trim() {
            "" => AVATARS[0],
            a if AVATARS.contains(&a) => a,
            other => {
                return Err(ArcadeError::InvalidProfile(format!("unknown avatar '{other}'")));
            }
        };

        Ok(Self {
            name: name.to_string(),
            grade: grade.to_string(),
            avatar: avatar.to_string(),
        })
    }

    /// Lobby greeting
    pub fn greeting(&self) -> String {
        format!("{} Hi {}! Grade {}", self.avatar, self.name, self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_trimmed() {
        let bank = QuestionBank::builtin();
        let profile = StudentProfile::new("  Maya ", "2", "", &bank).unwrap();
        assert_eq!(profile.name, "Maya");
        assert_eq!(profile.grade, "2");
        assert_eq!(profile.avatar, AVATARS[0]);
        assert!(profile.greeting().contains("Maya"));
    }

    #[test]
    fn test_rejects_bad_input() {
        let bank = QuestionBank::builtin();
        assert!(StudentProfile::new("   ", "2", "", &bank).is_err());
        assert!(StudentProfile::new("Maya", "9", "", &bank).is_err());
        assert!(StudentProfile::new("Maya", "2", "🍕", &bank).is_err());
        let long = "x".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(
            StudentProfile::new(&long, "2", "", &bank),
            Err(ArcadeError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_every_avatar_accepted() {
        let bank = QuestionBank::builtin();
        for avatar in AVATARS {
            assert_eq!(
                StudentProfile::new("Sam", "1", avatar, &bank).unwrap().avatar,
                *avatar
            );
        }
    }
}
