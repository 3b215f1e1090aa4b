//! Application shell
//!
//! Owns everything that outlives a single game: the profile, an optional
//! custom question set, settings, sound and the scoreboard. Front-ends drive
//! it with button presses and frame ticks and read back the current
//! [`Screen`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioManager, SoundKind};
use crate::consts::STREAK_MILESTONE;
use crate::error::{ArcadeError, SessionError};
use crate::highscores::Scoreboard;
use crate::profile::StudentProfile;
use crate::questions::{Question, QuestionBank, parse_custom_questions};
use crate::report::{AnalysisRequest, PerformanceReport};
use crate::session::{
    GameResult, Outcome, PoolSource, QuizSession, SessionConfig, SessionEvent, SessionInput,
    build_pool, tick,
};
use crate::settings::Settings;
use crate::skins::{Enemy, GameKind, Renderer, SessionView, damage_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Profile,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup(SetupStep),
    Lobby,
    Playing,
    Results,
}

/// The game being played
#[derive(Debug, Clone)]
pub struct ActiveGame {
    pub kind: GameKind,
    pub session: QuizSession,
    pub enemy: Option<Enemy>,
    /// Enemies beaten so far this session
    pub defeated: usize,
}

/// The last finished game, shown on the results screen
#[derive(Debug, Clone)]
pub struct FinishedGame {
    /// Bumped for every finished game; tags report requests
    pub run: u64,
    pub kind: GameKind,
    pub result: GameResult,
    /// Scoreboard placing, if it made the table
    pub rank: Option<usize>,
    pub enemies_defeated: usize,
    pub report: Option<PerformanceReport>,
}

pub struct Arcade {
    screen: Screen,
    settings: Settings,
    audio: AudioManager,
    bank: QuestionBank,
    rng: Pcg32,
    profile: Option<StudentProfile>,
    custom: Option<Vec<Question>>,
    alert: Option<String>,
    scoreboard: Scoreboard,
    active: Option<ActiveGame>,
    finished: Option<FinishedGame>,
    last_game: Option<GameKind>,
    runs: u64,
}

impl Arcade {
    pub fn new(seed: u64) -> Self {
        Self::with_bank(QuestionBank::builtin(), Settings::default(), seed)
    }

    pub fn with_bank(bank: QuestionBank, settings: Settings, seed: u64) -> Self {
        if bank.is_empty() {
            log::warn!("Question bank is empty; only uploaded questions can be played");
        } else {
            log::info!("Question bank: {} questions", bank.len());
        }
        let mut audio = AudioManager::new();
        audio.apply_settings(&settings);
        Self {
            screen: Screen::Setup(SetupStep::Profile),
            settings,
            audio,
            bank,
            rng: Pcg32::seed_from_u64(seed),
            profile: None,
            custom: None,
            alert: None,
            scoreboard: Scoreboard::new(),
            active: None,
            finished: None,
            last_game: None,
            runs: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace settings; takes effect from the next game
    pub fn set_settings(&mut self, settings: Settings) {
        self.audio.apply_settings(&settings);
        self.settings = settings;
    }

    /// Change one setting by name, see [`Settings::set`]
    pub fn change_setting(&mut self, key: &str, value: &str) -> bool {
        let mut settings = self.settings.clone();
        if !settings.set(key, value) {
            log::warn!("Ignoring setting {} = {:?}", key, value);
            return false;
        }
        log::info!("Setting {} = {}", key, value);
        self.set_settings(settings);
        true
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn profile(&self) -> Option<&StudentProfile> {
        self.profile.as_ref()
    }

    pub fn custom_questions(&self) -> Option<&[Question]> {
        self.custom.as_deref()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn finished(&self) -> Option<&FinishedGame> {
        self.finished.as_ref()
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    fn expect_screen(&self, screen: Screen) -> Result<(), ArcadeError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(ArcadeError::WrongScreen)
        }
    }

    // === Setup ===

    pub fn submit_profile(&mut self, name: &str, grade: &str, avatar: &str) -> Result<(), ArcadeError> {
        self.expect_screen(Screen::Setup(SetupStep::Profile))?;
        let profile = StudentProfile::new(name, grade, avatar, &self.bank)?;
        log::info!("Profile: {} (grade {})", profile.name, profile.grade);
        self.audio.resume();
        self.audio.play(SoundKind::Click);
        self.profile = Some(profile);
        self.screen = Screen::Setup(SetupStep::Upload);
        Ok(())
    }

    /// Load a custom question set; returns how many questions it holds.
    ///
    /// A rejected file raises an alert and leaves the player on the upload
    /// step with no custom set.
    pub fn upload_questions(&mut self, json: &str) -> Result<usize, ArcadeError> {
        self.expect_screen(Screen::Setup(SetupStep::Upload))?;
        match parse_custom_questions(json) {
            Ok(questions) => {
                let count = questions.len();
                log::info!("Loaded {} custom questions", count);
                self.custom = Some(questions);
                self.screen = Screen::Lobby;
                Ok(count)
            }
            Err(e) => {
                log::warn!("Custom questions rejected: {}", e);
                self.custom = None;
                self.alert = Some(e.user_message());
                self.audio.play(SoundKind::Wrong);
                Err(e.into())
            }
        }
    }

    /// Continue with the built-in questions for the profile's grade
    pub fn skip_upload(&mut self) -> Result<(), ArcadeError> {
        self.expect_screen(Screen::Setup(SetupStep::Upload))?;
        self.custom = None;
        self.screen = Screen::Lobby;
        Ok(())
    }

    /// Pending blocking message, if any
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    // === Games ===

    fn session_config(&self, kind: GameKind) -> SessionConfig {
        let preset = kind.session_config();
        SessionConfig {
            time_limit_secs: self.settings.effective_time_limit(preset.time_limit_secs),
            resolve_delay_secs: self.settings.resolve_delay_secs(),
            ..preset
        }
    }

    /// Start `kind` from the lobby or the results screen
    pub fn start_game(&mut self, kind: GameKind) -> Result<(), ArcadeError> {
        if !matches!(self.screen, Screen::Lobby | Screen::Results) {
            return Err(ArcadeError::WrongScreen);
        }
        let Some(profile) = &self.profile else {
            return Err(ArcadeError::WrongScreen);
        };

        let cannot_start = |source: SessionError| ArcadeError::CannotStart {
            game: kind.title(),
            source,
        };
        let source = match &self.custom {
            Some(questions) => PoolSource::Custom(questions.clone()),
            None => PoolSource::Grade(profile.grade.clone()),
        };
        let pool = build_pool(&self.bank, &source, kind.pool_config(), &mut self.rng)
            .map_err(cannot_start)?;
        let session = QuizSession::new(pool, self.session_config(kind)).map_err(cannot_start)?;

        let info = kind.info();
        let enemy = info.has_enemy.then(|| Enemy::spawn(info.theme, 0));
        log::info!("Starting {} with {} questions", info.title, session.progress().1);

        self.audio.resume();
        self.audio.play(SoundKind::GameStart);
        self.active = Some(ActiveGame {
            kind,
            session,
            enemy,
            defeated: 0,
        });
        self.finished = None;
        self.last_game = Some(kind);
        self.screen = Screen::Playing;
        Ok(())
    }

    /// Advance the active game by `dt` seconds
    pub fn update(&mut self, input: &SessionInput, dt: f32) -> Vec<SessionEvent> {
        let Some(game) = self.active.as_mut() else {
            return Vec::new();
        };

        let events = tick(&mut game.session, input, dt);
        let timed_out = events.contains(&SessionEvent::TimedOut);

        for event in &events {
            match *event {
                SessionEvent::Answered { correct: true, streak, .. } => {
                    if streak % STREAK_MILESTONE == 0 {
                        self.audio.play(SoundKind::Streak);
                    } else {
                        self.audio.play(SoundKind::Correct);
                    }
                    hit_enemy(game);
                }
                SessionEvent::Answered { correct: false, .. } if !timed_out => {
                    self.audio.play(SoundKind::Wrong);
                }
                SessionEvent::TimedOut => self.audio.play(SoundKind::TimeUp),
                SessionEvent::LevelUp { level } => {
                    log::debug!("Level up: {}", level);
                    self.audio.play(SoundKind::LevelUp);
                }
                SessionEvent::Finished(Outcome::OutOfLives) => self.audio.play(SoundKind::GameOver),
                SessionEvent::Finished(Outcome::Completed) => self.audio.play(SoundKind::Victory),
                _ => {}
            }
        }

        if game.session.is_finished() {
            self.finish();
        }
        events
    }

    /// Toggle the pause gate on the active game
    pub fn toggle_pause(&mut self) -> Vec<SessionEvent> {
        self.update(&SessionInput::pause(), 0.0)
    }

    /// Lift the pause gate; does nothing unless paused
    pub fn resume(&mut self) -> bool {
        if !self.is_paused() {
            return false;
        }
        self.toggle_pause().contains(&SessionEvent::Resumed)
    }

    pub fn is_paused(&self) -> bool {
        self.active.as_ref().is_some_and(|g| g.session.is_paused())
    }

    fn finish(&mut self) {
        let Some(game) = self.active.take() else {
            return;
        };
        let Some(result) = game.session.result() else {
            return;
        };
        let player = self.profile.as_ref().map_or("Player", |p| p.name.as_str());
        let rank = self.scoreboard.record(game.kind, player, &result);

        self.runs += 1;
        self.finished = Some(FinishedGame {
            run: self.runs,
            kind: game.kind,
            result,
            rank,
            enemies_defeated: game.defeated,
            report: None,
        });
        self.screen = Screen::Results;
    }

    /// Play the same game again with a fresh pool
    pub fn replay(&mut self) -> Result<(), ArcadeError> {
        let kind = self.last_game.ok_or(ArcadeError::WrongScreen)?;
        if self.screen == Screen::Playing {
            self.active = None;
            self.screen = Screen::Lobby;
        }
        self.start_game(kind)
    }

    /// Abandon any game and go back to the lobby
    pub fn home(&mut self) -> Result<(), ArcadeError> {
        if matches!(self.screen, Screen::Setup(_)) {
            return Err(ArcadeError::WrongScreen);
        }
        if self.active.take().is_some() {
            log::debug!("Game abandoned");
        }
        self.screen = Screen::Lobby;
        Ok(())
    }

    // === Sound ===

    /// Returns the new mute state
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.audio.toggle_mute();
        self.settings.muted = muted;
        muted
    }

    /// Tab visibility changed
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.settings.mute_on_blur {
            self.audio.set_muted(hidden || self.settings.muted);
        }
    }

    // === Results ===

    /// Report request for the last finished game, tagged with its run
    pub fn analysis_request(&self) -> Option<(u64, AnalysisRequest)> {
        let finished = self.finished.as_ref()?;
        let profile = self.profile.as_ref()?;
        let request = AnalysisRequest::new(profile, finished.kind.title(), &finished.result);
        Some((finished.run, request))
    }

    /// Attach a report to run `run`. Returns false, dropping the report, when
    /// a newer game has finished since the request was taken.
    pub fn set_report(&mut self, run: u64, report: PerformanceReport) -> bool {
        match self.finished.as_mut() {
            Some(finished) if finished.run == run => {
                finished.report = Some(report);
                true
            }
            Some(finished) => {
                log::debug!("Dropping report for run {} (showing run {})", run, finished.run);
                false
            }
            None => {
                log::debug!("Report arrived after leaving the results screen");
                false
            }
        }
    }

    // === Drawing ===

    pub fn view(&self) -> Option<SessionView<'_>> {
        let game = self.active.as_ref()?;
        let mut view = SessionView::new(game.kind, &game.session, game.enemy.as_ref());
        if !self.settings.show_timer {
            view.time_left = None;
        }
        Some(view)
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if let Some(view) = self.view() {
            renderer.render(&view);
        }
    }
}

/// Apply a correct answer's damage; a beaten enemy is replaced by the next one
fn hit_enemy(game: &mut ActiveGame) {
    let Some(enemy) = game.enemy.as_mut() else {
        return;
    };
    let Some(question) = game.session.current_question() else {
        return;
    };
    if enemy.take_damage(damage_for(question)) {
        game.defeated += 1;
        log::debug!("{} defeated ({} so far)", enemy.name, game.defeated);
        *enemy = Enemy::spawn(&enemy.theme, game.defeated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::error::ImportError;
    use crate::session::SessionPhase;

    const VALID_UPLOAD: &str = r#"[
        {"text": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1},
        {"question": "Capital of France?", "options": ["Paris", "Rome", "Oslo"], "correctAnswer": 0, "skill": "Geography"}
    ]"#;

    fn in_upload() -> Arcade {
        let mut arcade = Arcade::new(7);
        arcade.submit_profile("Maya", "2", "").unwrap();
        arcade
    }

    fn in_lobby() -> Arcade {
        let mut arcade = in_upload();
        arcade.skip_upload().unwrap();
        arcade
    }

    /// Answer the current question and wait out the feedback delay
    fn answer(arcade: &mut Arcade, right: bool) -> Vec<SessionEvent> {
        let q = arcade.view().and_then(|v| v.question.cloned()).unwrap();
        let choice = if right {
            q.correct_answer
        } else {
            (q.correct_answer + 1) % q.options.len()
        };
        let mut events = arcade.update(&SessionInput::answer(choice), FRAME_DT);
        let delay = arcade.settings().resolve_delay_secs();
        events.extend(arcade.update(&SessionInput::default(), delay));
        events
    }

    #[test]
    fn test_setup_flow() {
        let mut arcade = Arcade::new(1);
        assert_eq!(arcade.screen(), Screen::Setup(SetupStep::Profile));
        assert!(matches!(
            arcade.submit_profile("", "2", ""),
            Err(ArcadeError::InvalidProfile(_))
        ));
        assert_eq!(arcade.screen(), Screen::Setup(SetupStep::Profile));
        assert!(arcade.skip_upload().is_err());

        arcade.submit_profile("Maya", "2", "").unwrap();
        assert_eq!(arcade.screen(), Screen::Setup(SetupStep::Upload));
        arcade.skip_upload().unwrap();
        assert_eq!(arcade.screen(), Screen::Lobby);
        assert!(arcade.custom_questions().is_none());
    }

    #[test]
    fn test_valid_upload_enters_lobby() {
        let mut arcade = in_upload();
        assert_eq!(arcade.upload_questions(VALID_UPLOAD).unwrap(), 2);
        assert_eq!(arcade.screen(), Screen::Lobby);
        assert!(arcade.take_alert().is_none());

        arcade.start_game(GameKind::Archery).unwrap();
        let question = arcade.view().and_then(|v| v.question.cloned());
        assert!(question.is_none(), "first tick has not run yet");
        arcade.update(&SessionInput::default(), FRAME_DT);
        let question = arcade.view().and_then(|v| v.question.cloned()).unwrap();
        assert_eq!(question.grade, crate::questions::CUSTOM_GRADE);
        assert_eq!(arcade.active().unwrap().session.progress(), (1, 2));
    }

    #[test]
    fn test_rejected_upload_stays_on_upload() {
        let mut arcade = in_upload();
        let bad = r#"[{"text": "ok?", "options": ["a", "b"], "correctAnswer": 0},
                      {"text": "bad", "options": ["a", "b"], "correctAnswer": 5}]"#;

        let err = arcade.upload_questions(bad).unwrap_err();
        assert!(matches!(
            err,
            ArcadeError::Import(ImportError::InvalidEntry { index: 1, .. })
        ));
        assert_eq!(arcade.screen(), Screen::Setup(SetupStep::Upload));
        assert!(arcade.custom_questions().is_none());
        assert!(arcade.take_alert().is_some());
        assert!(arcade.take_alert().is_none());

        assert!(arcade.upload_questions("{ not json").is_err());
        assert_eq!(arcade.screen(), Screen::Setup(SetupStep::Upload));
    }

    #[test]
    fn test_fixed_file_can_be_uploaded_again() {
        let mut arcade = in_upload();
        let broken = r#"[{"text": "2 + 2?", "options": ["3", "4"], "correctAnswer": 2}]"#;
        let fixed = r#"[{"text": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1}]"#;

        assert!(arcade.upload_questions(broken).is_err());
        assert!(arcade.take_alert().is_some());
        assert!(arcade.upload_questions(broken).is_err());
        assert!(arcade.take_alert().is_some());

        assert_eq!(arcade.upload_questions(fixed).unwrap(), 1);
        assert_eq!(arcade.screen(), Screen::Lobby);
        assert_eq!(arcade.custom_questions().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_grade_cannot_start() {
        let bank = QuestionBank::from_grades(vec![("K".into(), Vec::new())]);
        let mut arcade = Arcade::with_bank(bank, Settings::default(), 3);
        assert!(arcade.bank().is_empty());
        arcade.submit_profile("Leo", "K", "").unwrap();
        arcade.skip_upload().unwrap();

        let err = arcade.start_game(GameKind::Racing).unwrap_err();
        assert!(matches!(
            err,
            ArcadeError::CannotStart {
                source: SessionError::EmptyPool,
                ..
            }
        ));
        assert_eq!(arcade.screen(), Screen::Lobby);
        assert!(arcade.active().is_none());
    }

    #[test]
    fn test_cannot_start_before_setup() {
        let mut arcade = Arcade::new(1);
        assert!(matches!(
            arcade.start_game(GameKind::Racing),
            Err(ArcadeError::WrongScreen)
        ));
    }

    #[test]
    fn test_play_through_to_results() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Archery).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);

        let total = arcade.active().unwrap().session.progress().1;
        assert_eq!(total, 10);
        for i in 0..total {
            answer(&mut arcade, i % 4 != 0);
        }

        assert_eq!(arcade.screen(), Screen::Results);
        assert!(arcade.active().is_none());
        let finished = arcade.finished().unwrap();
        assert_eq!(finished.result.questions_answered, 10);
        assert_eq!(finished.result.correct_answers, 7);
        assert_eq!(finished.rank, Some(1));
        assert_eq!(
            arcade.scoreboard().best(GameKind::Archery),
            Some(finished.result.score)
        );

        let (run, request) = arcade.analysis_request().unwrap();
        assert_eq!(run, finished.run);
        assert_eq!(request.answers.len(), 10);
        assert_eq!(request.game, GameKind::Archery.title());

        assert!(arcade.set_report(run, PerformanceReport::fallback()));
        assert!(arcade.finished().unwrap().report.is_some());
    }

    fn play_out(arcade: &mut Arcade, kind: GameKind) {
        arcade.start_game(kind).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);
        while arcade.screen() == Screen::Playing {
            answer(arcade, true);
        }
    }

    #[test]
    fn test_late_report_is_not_attached_to_newer_game() {
        let mut arcade = in_lobby();
        play_out(&mut arcade, GameKind::Cooking);
        let (cooking_run, request) = arcade.analysis_request().unwrap();
        assert_eq!(request.game, GameKind::Cooking.title());

        arcade.home().unwrap();
        play_out(&mut arcade, GameKind::Archery);
        let (archery_run, _) = arcade.analysis_request().unwrap();
        assert_ne!(cooking_run, archery_run);

        let stale = PerformanceReport {
            recommendation: format!("for {}", request.game),
            ..PerformanceReport::fallback()
        };
        assert!(!arcade.set_report(cooking_run, stale));
        let finished = arcade.finished().unwrap();
        assert_eq!(finished.kind, GameKind::Archery);
        assert!(finished.report.is_none());

        assert!(arcade.set_report(archery_run, PerformanceReport::fallback()));
        assert!(arcade.finished().unwrap().report.is_some());
    }

    #[test]
    fn test_out_of_lives_ends_game() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Battle).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);

        let mut events = Vec::new();
        for _ in 0..3 {
            events = answer(&mut arcade, false);
        }
        assert!(events.contains(&SessionEvent::Finished(Outcome::OutOfLives)));
        assert_eq!(arcade.screen(), Screen::Results);
        assert_eq!(arcade.finished().unwrap().result.outcome, Outcome::OutOfLives);
    }

    #[test]
    fn test_correct_answers_hit_enemy() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Battle).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);

        let full = arcade.active().unwrap().enemy.as_ref().unwrap().max_hp();
        let correct = arcade
            .view()
            .and_then(|v| v.question.map(|q| q.correct_answer))
            .unwrap();
        arcade.update(&SessionInput::answer(correct), FRAME_DT);
        let game = arcade.active().unwrap();
        let enemy = game.enemy.as_ref().unwrap();
        assert!(enemy.hp() < full || game.defeated > 0);
        assert!(enemy.hp() <= enemy.max_hp());
    }

    #[test]
    fn test_replay_and_home() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Racing).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);
        answer(&mut arcade, true);
        assert!(arcade.active().unwrap().session.stats().score > 0);

        arcade.replay().unwrap();
        assert_eq!(arcade.screen(), Screen::Playing);
        let game = arcade.active().unwrap();
        assert_eq!(game.kind, GameKind::Racing);
        assert_eq!(game.session.stats().score, 0);
        assert_eq!(game.session.phase(), SessionPhase::Loading);

        arcade.home().unwrap();
        assert_eq!(arcade.screen(), Screen::Lobby);
        assert!(arcade.active().is_none());
        assert!(arcade.scoreboard().best(GameKind::Racing).is_none());
    }

    #[test]
    fn test_untimed_setting_applies() {
        let mut arcade = in_lobby();
        arcade.set_settings(Settings {
            untimed: true,
            ..Settings::default()
        });
        arcade.start_game(GameKind::Racing).unwrap();
        let config = arcade.active().unwrap().session.config();
        assert_eq!(config.time_limit_secs, None);
    }

    #[test]
    fn test_change_setting_reaches_next_game() {
        let mut arcade = in_lobby();
        assert!(arcade.change_setting("untimed", "on"));
        assert!(arcade.change_setting("pacing", "relaxed"));
        assert!(arcade.change_setting("volume", "50"));
        assert!(!arcade.change_setting("pacing", "ludicrous"));
        assert_eq!(arcade.settings().pacing, crate::settings::Pacing::Relaxed);
        assert_eq!(arcade.audio().effective_volume(), 0.5);

        arcade.start_game(GameKind::Racing).unwrap();
        let config = arcade.active().unwrap().session.config();
        assert_eq!(config.time_limit_secs, None);
        assert_eq!(
            config.resolve_delay_secs,
            crate::consts::RESOLVE_DELAY_SECS * 2.0
        );
    }

    #[test]
    fn test_hidden_timer() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Racing).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);
        assert!(arcade.view().unwrap().time_left.is_some());

        arcade.set_settings(Settings {
            show_timer: false,
            ..Settings::default()
        });
        assert!(arcade.view().unwrap().time_left.is_none());
    }

    #[test]
    fn test_resume_only_lifts_pause() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Racing).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);

        assert!(!arcade.resume());
        assert!(!arcade.is_paused());

        arcade.toggle_pause();
        assert!(arcade.is_paused());
        assert!(arcade.resume());
        assert!(!arcade.is_paused());
        assert!(!arcade.resume());
        assert!(!arcade.is_paused());
    }

    #[test]
    fn test_pause_and_mute() {
        let mut arcade = in_lobby();
        arcade.start_game(GameKind::Racing).unwrap();
        arcade.update(&SessionInput::default(), FRAME_DT);

        assert_eq!(arcade.toggle_pause(), vec![SessionEvent::Paused]);
        assert!(arcade.is_paused());
        arcade.update(&SessionInput::default(), 100.0);
        assert_eq!(arcade.screen(), Screen::Playing);
        arcade.toggle_pause();
        assert!(!arcade.is_paused());

        assert!(arcade.toggle_mute());
        assert!(arcade.settings().muted);
        assert!(arcade.audio().is_muted());
        arcade.set_hidden(false);
        assert!(arcade.audio().is_muted());
        assert!(!arcade.toggle_mute());
    }
}
