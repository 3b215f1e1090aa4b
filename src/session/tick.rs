//! Session tick
//!
//! Advances a quiz session by one frame: applies input, counts down timers,
//! scores answers and moves between phases.

use serde::{Deserialize, Serialize};

use super::state::{AnswerRecord, Outcome, QuizSession, RunState, SessionPhase};
use crate::consts::*;

/// Player input for a single tick
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    /// Index of the chosen option
    pub answer: Option<usize>,
    /// Pause toggle
    pub pause: bool,
}

impl SessionInput {
    pub fn answer(choice: usize) -> Self {
        Self {
            answer: Some(choice),
            ..Default::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Default::default()
        }
    }
}

/// Things that happened during a tick, for sound and skin feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    QuestionShown { index: usize },
    Answered { correct: bool, points: u64, streak: u32 },
    TimedOut,
    LifeLost { remaining: u8 },
    LevelUp { level: u32 },
    Paused,
    Resumed,
    Finished(Outcome),
}

/// Advance the session by `dt` seconds
pub fn tick(session: &mut QuizSession, input: &SessionInput, dt: f32) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    if session.phase == SessionPhase::Finished {
        return events;
    }

    // Handle pause toggle
    if input.pause {
        session.run_state = match session.run_state {
            RunState::Running => {
                events.push(SessionEvent::Paused);
                RunState::Paused
            }
            RunState::Paused => {
                events.push(SessionEvent::Resumed);
                RunState::Running
            }
        };
    }
    if session.run_state == RunState::Paused {
        return events;
    }

    match session.phase {
        SessionPhase::Loading => {
            session.phase = SessionPhase::Presenting { elapsed: 0.0 };
            events.push(SessionEvent::QuestionShown { index: 0 });
        }
        SessionPhase::Presenting { elapsed } => {
            session.stats.elapsed_secs += dt;
            let elapsed = elapsed + dt;
            let options = session.pool[session.index].options.len();

            // The limit wins over an answer landing in the same frame
            let expired = session
                .config
                .time_limit_secs
                .filter(|&limit| elapsed >= limit);

            match (expired, input.answer) {
                (Some(limit), _) => {
                    events.push(SessionEvent::TimedOut);
                    resolve(session, None, limit, &mut events);
                }
                (None, Some(choice)) if choice < options => {
                    resolve(session, Some(choice), elapsed, &mut events);
                }
                _ => session.phase = SessionPhase::Presenting { elapsed },
            }
        }
        SessionPhase::Resolved {
            correct,
            selected,
            remaining,
        } => {
            session.stats.elapsed_secs += dt;
            let remaining = remaining - dt;
            if remaining > 0.0 {
                session.phase = SessionPhase::Resolved {
                    correct,
                    selected,
                    remaining,
                };
            } else {
                advance(session, &mut events);
            }
        }
        SessionPhase::Finished => {}
    }

    events
}

/// Points for a correct answer given the streak before it
pub fn points_for(streak: u32) -> u64 {
    BASE_POINTS + STREAK_BONUS * streak as u64
}

fn resolve(
    session: &mut QuizSession,
    selected: Option<usize>,
    time_taken: f32,
    events: &mut Vec<SessionEvent>,
) {
    let question = &session.pool[session.index];
    let correct = selected.is_some_and(|choice| question.is_correct(choice));
    let stats = &mut session.stats;

    stats.questions_answered += 1;
    if correct {
        let points = points_for(stats.streak);
        stats.score += points;
        stats.streak += 1;
        stats.best_streak = stats.best_streak.max(stats.streak);
        stats.correct_answers += 1;
        events.push(SessionEvent::Answered {
            correct: true,
            points,
            streak: stats.streak,
        });

        let level = 1 + stats.correct_answers / LEVEL_UP_EVERY;
        if level > stats.level {
            stats.level = level;
            events.push(SessionEvent::LevelUp { level });
        }
    } else {
        stats.streak = 0;
        events.push(SessionEvent::Answered {
            correct: false,
            points: 0,
            streak: 0,
        });
        if let Some(lives) = stats.lives.as_mut() {
            *lives = lives.saturating_sub(1);
            events.push(SessionEvent::LifeLost { remaining: *lives });
        }
    }

    session.history.push(AnswerRecord {
        question_id: question.id,
        skill: question.skill.clone(),
        correct,
        time_taken_secs: time_taken,
        timed_out: selected.is_none(),
    });

    session.phase = SessionPhase::Resolved {
        correct,
        selected,
        remaining: session.config.resolve_delay_secs,
    };
}

fn advance(session: &mut QuizSession, events: &mut Vec<SessionEvent>) {
    let out_of_lives = session.stats.lives == Some(0);
    let exhausted = session.index + 1 >= session.pool.len();

    if out_of_lives || exhausted {
        let outcome = if out_of_lives {
            Outcome::OutOfLives
        } else {
            Outcome::Completed
        };
        session.phase = SessionPhase::Finished;
        session.outcome = Some(outcome);
        log::info!(
            "Session finished ({:?}): {} / {} correct, score {}",
            outcome,
            session.stats.correct_answers,
            session.stats.questions_answered,
            session.stats.score
        );
        events.push(SessionEvent::Finished(outcome));
    } else {
        session.index += 1;
        session.phase = SessionPhase::Presenting { elapsed: 0.0 };
        events.push(SessionEvent::QuestionShown { index: session.index });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{Question, QuestionBank};
    use crate::session::SessionConfig;
    use proptest::prelude::*;

    fn pool(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: i as u32 + 1,
                text: format!("Question {i}"),
                options: vec!["right".into(), "wrong".into(), "nope".into(), "no".into()],
                correct_answer: 0,
                difficulty: 1,
                skill: if i % 2 == 0 { "even" } else { "odd" }.into(),
                grade: "test".into(),
                subject: None,
                damage: None,
            })
            .collect()
    }

    fn started(n: usize, config: SessionConfig) -> QuizSession {
        let mut session = QuizSession::new(pool(n), config).unwrap();
        tick(&mut session, &SessionInput::default(), FRAME_DT);
        session
    }

    /// Answer the current question and wait out the resolve delay
    fn answer_and_wait(session: &mut QuizSession, choice: usize) -> Vec<SessionEvent> {
        let mut events = tick(session, &SessionInput::answer(choice), FRAME_DT);
        let delay = session.config().resolve_delay_secs;
        events.extend(tick(session, &SessionInput::default(), delay));
        events
    }

    #[test]
    fn test_loading_to_presenting() {
        let mut session = QuizSession::new(pool(3), SessionConfig::default()).unwrap();
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert!(session.current_question().is_none());

        let events = tick(&mut session, &SessionInput::default(), FRAME_DT);
        assert_eq!(events, vec![SessionEvent::QuestionShown { index: 0 }]);
        assert!(matches!(session.phase(), SessionPhase::Presenting { .. }));
        assert_eq!(session.progress(), (1, 3));
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert!(QuizSession::new(Vec::new(), SessionConfig::default()).is_err());
    }

    #[test]
    fn test_correct_answer_scoring() {
        let mut session = started(5, SessionConfig::default());

        answer_and_wait(&mut session, 0);
        assert_eq!(session.stats().score, BASE_POINTS);
        assert_eq!(session.stats().streak, 1);

        answer_and_wait(&mut session, 0);
        assert_eq!(session.stats().score, BASE_POINTS * 2 + STREAK_BONUS);
        assert_eq!(session.stats().streak, 2);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut session = started(5, SessionConfig::default());
        answer_and_wait(&mut session, 0);
        answer_and_wait(&mut session, 0);
        let score = session.stats().score;

        answer_and_wait(&mut session, 2);
        assert_eq!(session.stats().streak, 0);
        assert_eq!(session.stats().score, score);
        assert_eq!(session.stats().best_streak, 2);
    }

    #[test]
    fn test_only_first_answer_counts() {
        let mut session = started(3, SessionConfig::default());
        tick(&mut session, &SessionInput::answer(1), FRAME_DT);
        let events = tick(&mut session, &SessionInput::answer(0), FRAME_DT);

        assert!(events.is_empty());
        assert_eq!(session.stats().questions_answered, 1);
        assert_eq!(session.stats().correct_answers, 0);
        assert!(matches!(
            session.phase(),
            SessionPhase::Resolved {
                correct: false,
                selected: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_choice_ignored() {
        let mut session = started(3, SessionConfig::default());
        tick(&mut session, &SessionInput::answer(9), FRAME_DT);
        assert!(matches!(session.phase(), SessionPhase::Presenting { .. }));
        assert_eq!(session.stats().questions_answered, 0);
    }

    #[test]
    fn test_resolve_delay_holds_question() {
        let mut session = started(3, SessionConfig::default());
        tick(&mut session, &SessionInput::answer(0), FRAME_DT);
        tick(&mut session, &SessionInput::default(), RESOLVE_DELAY_SECS / 2.0);
        assert!(matches!(session.phase(), SessionPhase::Resolved { .. }));
        assert_eq!(session.progress(), (1, 3));

        let events = tick(&mut session, &SessionInput::default(), RESOLVE_DELAY_SECS);
        assert_eq!(events, vec![SessionEvent::QuestionShown { index: 1 }]);
        assert_eq!(session.progress(), (2, 3));
    }

    #[test]
    fn test_exhaustion_finishes() {
        let mut session = started(2, SessionConfig::default());
        answer_and_wait(&mut session, 0);
        let events = answer_and_wait(&mut session, 1);

        assert!(events.contains(&SessionEvent::Finished(Outcome::Completed)));
        assert!(session.is_finished());
        assert!(session.current_question().is_none());

        let result = session.result().unwrap();
        assert_eq!(result.questions_answered, 2);
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.history.len(), 2);
        assert_eq!(result.outcome, Outcome::Completed);
    }

    #[test]
    fn test_finished_ignores_input() {
        let mut session = started(1, SessionConfig::default());
        answer_and_wait(&mut session, 0);
        assert!(session.is_finished());

        let events = tick(&mut session, &SessionInput::answer(0), FRAME_DT);
        assert!(events.is_empty());
        assert_eq!(session.stats().questions_answered, 1);
    }

    #[test]
    fn test_timeout_counts_as_wrong() {
        let config = SessionConfig {
            time_limit_secs: Some(5.0),
            ..Default::default()
        };
        let mut session = started(3, config);
        answer_and_wait(&mut session, 0);
        assert_eq!(session.stats().streak, 1);
        assert_eq!(session.time_left(), Some(5.0));

        tick(&mut session, &SessionInput::default(), 3.0);
        assert_eq!(session.time_left(), Some(2.0));
        let events = tick(&mut session, &SessionInput::default(), 2.5);

        assert_eq!(events[0], SessionEvent::TimedOut);
        assert_eq!(session.stats().streak, 0);
        let record = session.history().last().unwrap();
        assert!(record.timed_out);
        assert!(!record.correct);
        assert_eq!(record.time_taken_secs, 5.0);
    }

    #[test]
    fn test_answer_in_expiring_frame_times_out() {
        let config = SessionConfig {
            time_limit_secs: Some(5.0),
            ..Default::default()
        };
        let mut session = started(3, config);
        tick(&mut session, &SessionInput::default(), 4.9);

        // A long frame carries the right answer past the limit
        let events = tick(&mut session, &SessionInput::answer(0), 0.25);

        assert_eq!(events[0], SessionEvent::TimedOut);
        assert!(events.contains(&SessionEvent::Answered {
            correct: false,
            points: 0,
            streak: 0
        }));
        assert_eq!(session.stats().score, 0);
        let record = session.history().last().unwrap();
        assert!(record.timed_out);
        assert!(!record.correct);
        assert_eq!(record.time_taken_secs, 5.0);
    }

    #[test]
    fn test_lives_end_session() {
        let config = SessionConfig {
            lives: Some(2),
            ..Default::default()
        };
        let mut session = started(10, config);

        let events = answer_and_wait(&mut session, 1);
        assert!(events.contains(&SessionEvent::LifeLost { remaining: 1 }));
        assert!(!session.is_finished());

        let events = answer_and_wait(&mut session, 1);
        assert!(events.contains(&SessionEvent::Finished(Outcome::OutOfLives)));
        assert_eq!(session.result().unwrap().questions_answered, 2);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let config = SessionConfig {
            time_limit_secs: Some(5.0),
            ..Default::default()
        };
        let mut session = started(3, config);

        let events = tick(&mut session, &SessionInput::pause(), FRAME_DT);
        assert_eq!(events, vec![SessionEvent::Paused]);
        assert!(session.is_paused());

        let before = session.stats().elapsed_secs;
        tick(&mut session, &SessionInput::default(), 60.0);
        tick(&mut session, &SessionInput::answer(0), FRAME_DT);
        assert_eq!(session.stats().elapsed_secs, before);
        assert_eq!(session.stats().questions_answered, 0);
        assert_eq!(session.time_left(), Some(5.0));

        let events = tick(&mut session, &SessionInput::pause(), 0.0);
        assert_eq!(events, vec![SessionEvent::Resumed]);
        assert_eq!(session.run_state(), RunState::Running);
    }

    #[test]
    fn test_level_up() {
        let mut session = started(LEVEL_UP_EVERY as usize + 1, SessionConfig::default());
        let mut levelled = false;
        for _ in 0..LEVEL_UP_EVERY {
            levelled |= answer_and_wait(&mut session, 0).contains(&SessionEvent::LevelUp { level: 2 });
        }
        assert!(levelled);
        assert_eq!(session.stats().level, 2);
    }

    #[test]
    fn test_grade_three_all_correct() {
        let bank = QuestionBank::builtin();
        let mut session = QuizSession::new(bank.lookup("3"), SessionConfig::default()).unwrap();
        tick(&mut session, &SessionInput::default(), FRAME_DT);

        while let Some(q) = session.current_question() {
            let correct = q.correct_answer;
            answer_and_wait(&mut session, correct);
        }

        let result = session.result().unwrap();
        assert_eq!(result.correct_answers, 40);
        assert_eq!(result.questions_answered, 40);
        assert_eq!(result.best_streak, 40);
        assert_eq!(result.accuracy_percent(), 100);
    }

    proptest! {
        #[test]
        fn score_and_streak_invariants(answers in proptest::collection::vec(any::<bool>(), 1..40)) {
            let mut session = started(answers.len(), SessionConfig::default());

            for &right in &answers {
                let before = session.stats().clone();
                answer_and_wait(&mut session, if right { 0 } else { 1 });
                let after = session.stats();

                prop_assert!(after.score >= before.score);
                if right {
                    prop_assert_eq!(after.streak, before.streak + 1);
                    prop_assert_eq!(after.score - before.score, points_for(before.streak));
                } else {
                    prop_assert_eq!(after.streak, 0);
                }
            }

            prop_assert!(session.is_finished());
            let correct = answers.iter().filter(|&&a| a).count() as u32;
            prop_assert_eq!(session.stats().correct_answers, correct);
        }
    }
}
