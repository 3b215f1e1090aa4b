//! Quiz Arcade entry point
//!
//! The browser build drives the arcade from `requestAnimationFrame` and the
//! DOM in `index.html`. The native build is a small terminal front-end over
//! the same [`Arcade`](quiz_arcade::Arcade).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

    use quiz_arcade::app::Screen;
    use quiz_arcade::config::AiConfig;
    use quiz_arcade::consts::*;
    use quiz_arcade::profile::AVATARS;
    use quiz_arcade::report::{AnalysisClient, PerformanceReport};
    use quiz_arcade::session::{Outcome, SessionInput, SessionPhase};
    use quiz_arcade::skins::{GameKind, Renderer, SessionView};
    use quiz_arcade::{Arcade, SetupStep};

    const SCREENS: [(&str, Screen); 5] = [
        ("setup-profile", Screen::Setup(SetupStep::Profile)),
        ("setup-upload", Screen::Setup(SetupStep::Upload)),
        ("lobby", Screen::Lobby),
        ("game", Screen::Playing),
        ("results", Screen::Results),
    ];

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn by_id(id: &str) -> Option<Element> {
        document()?.get_element_by_id(id)
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(id: &str, html: &str) {
        if let Some(el) = by_id(id) {
            el.set_inner_html(html);
        }
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(el) = by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Minimal escaping for uploaded text placed in markup
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn listen_id(id: &str, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        match by_id(id) {
            Some(el) => listen(&el, event, handler),
            None => log::warn!("Missing #{} in page", id),
        }
    }

    /// Value of a `data-*` attribute on the clicked element or its ancestors
    fn data_attr(event: &web_sys::Event, attr: &str) -> Option<String> {
        let target: Element = event.target()?.dyn_into().ok()?;
        let el = target.closest(&format!("[{attr}]")).ok()??;
        el.get_attribute(attr)
    }

    /// Draws the playing screen into the game section
    #[derive(Default)]
    struct DomRenderer {
        /// (question number, id) whose options are on screen
        shown: Option<(usize, u32)>,
        resolved: bool,
    }

    impl Renderer for DomRenderer {
        fn render(&mut self, view: &SessionView<'_>) {
            set_text("hud", &view.hud_line());
            set_hidden("pause-overlay", !view.paused);

            let Some(question) = view.question else {
                return;
            };

            let key = (view.progress.0, question.id);
            if self.shown != Some(key) {
                self.shown = Some(key);
                self.resolved = false;
                set_text("game-title", &format!("{} {}", view.skin.emoji, view.skin.title));
                set_text("question-text", &question.text);
                let buttons: String = question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(i, option)| {
                        format!(
                            r#"<button class="option" data-option="{i}"><span class="key">{}</span> {}</button>"#,
                            i + 1,
                            escape(option)
                        )
                    })
                    .collect();
                set_html("options", &buttons);
                set_text("feedback", "");
            }

            if let SessionPhase::Resolved { correct, selected, .. } = view.phase {
                if !self.resolved {
                    self.resolved = true;
                    mark_options(question.correct_answer, selected);
                    set_text("feedback", view.feedback().unwrap_or_default());
                    if let Some(el) = by_id("feedback") {
                        let _ = el.class_list().toggle_with_force("wrong", !correct);
                    }
                }
            }

            match view.enemy {
                Some(enemy) => {
                    set_hidden("enemy", false);
                    set_text("enemy-name", &format!("{} {}", enemy.avatar, enemy.name));
                    if let Some(bar) = by_id("enemy-hp") {
                        let width = (enemy.health_fraction() * 100.0).round();
                        let _ = bar.set_attribute("style", &format!("width: {width}%"));
                    }
                }
                None => set_hidden("enemy", true),
            }
        }
    }

    fn mark_options(correct: usize, selected: Option<usize>) {
        let Some(doc) = document() else { return };
        let Ok(buttons) = doc.query_selector_all("#options .option") else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let i = i as usize;
            let class = if i == correct {
                "option correct"
            } else if Some(i) == selected {
                "option wrong"
            } else {
                "option dim"
            };
            let _ = button.set_attribute("class", class);
        }
    }

    struct App {
        arcade: Arcade,
        client: AnalysisClient,
        renderer: DomRenderer,
        input: SessionInput,
        last_time: f64,
        last_screen: Option<Screen>,
    }

    impl App {
        fn new(seed: u64) -> Self {
            Self {
                arcade: Arcade::new(seed),
                client: AnalysisClient::new(AiConfig::from_env()),
                renderer: DomRenderer::default(),
                input: SessionInput::default(),
                last_time: 0.0,
                last_screen: None,
            }
        }

        /// Run one frame; returns the screen just entered, if it changed
        fn frame(&mut self, time: f64) -> Option<Screen> {
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).min(MAX_FRAME_DT)
            } else {
                FRAME_DT
            };
            self.last_time = time;

            let input = std::mem::take(&mut self.input);
            self.arcade.update(&input, dt);
            self.arcade.render(&mut self.renderer);

            let screen = self.arcade.screen();
            if self.last_screen == Some(screen) {
                return None;
            }
            self.last_screen = Some(screen);
            self.show(screen);
            Some(screen)
        }

        fn show(&mut self, screen: Screen) {
            for (id, s) in SCREENS {
                set_hidden(id, s != screen);
            }
            match screen {
                Screen::Lobby => self.fill_lobby(),
                Screen::Results => self.fill_results(),
                Screen::Playing => self.renderer = DomRenderer::default(),
                Screen::Setup(_) => {}
            }
        }

        fn fill_lobby(&self) {
            if let Some(profile) = self.arcade.profile() {
                set_text("lobby-greeting", &profile.greeting());
            }
            let source = match self.arcade.custom_questions() {
                Some(questions) => format!("Playing with your {} custom questions", questions.len()),
                None => "Playing with the built-in questions".to_string(),
            };
            set_text("lobby-source", &source);

            let cards: String = GameKind::ALL
                .iter()
                .map(|&kind| {
                    let info = kind.info();
                    let best = self
                        .arcade
                        .scoreboard()
                        .best(kind)
                        .map(|s| format!(r#"<span class="best">🏆 {s}</span>"#))
                        .unwrap_or_default();
                    format!(
                        r#"<button class="game-card theme-{}" data-game="{}"><span class="emoji">{}</span><h3>{}</h3><p>{}</p>{}</button>"#,
                        info.theme,
                        kind.slug(),
                        info.emoji,
                        info.title,
                        info.blurb,
                        best
                    )
                })
                .collect();
            set_html("game-grid", &cards);
            fill_settings(&self.arcade);
        }

        fn fill_results(&self) {
            let Some(finished) = self.arcade.finished() else {
                return;
            };
            let result = &finished.result;
            let title = match result.outcome {
                Outcome::Completed => "🎉 Round complete!",
                Outcome::OutOfLives => "💔 Out of lives",
            };
            set_text("result-title", title);
            set_text("result-game", finished.kind.title());
            set_text("result-score", &result.score.to_string());
            set_text(
                "result-accuracy",
                &format!(
                    "{}/{} ({}%)",
                    result.correct_answers,
                    result.questions_answered,
                    result.accuracy_percent()
                ),
            );
            set_text("result-streak", &result.best_streak.to_string());
            set_text("result-level", &result.level.to_string());
            set_text(
                "result-rank",
                &finished
                    .rank
                    .map(|r| format!("New high score #{r}!"))
                    .unwrap_or_default(),
            );

            let skills: String = self
                .arcade
                .analysis_request()
                .map(|(_, request)| request.skill_breakdown())
                .unwrap_or_default()
                .iter()
                .map(|s| {
                    format!(
                        "<li>{}: {}/{} ({:.0}%)</li>",
                        escape(&s.skill),
                        s.correct,
                        s.attempted,
                        s.accuracy() * 100.0
                    )
                })
                .collect();
            set_html("result-skills", &skills);
            set_html("report", "<p class=\"pending\">Writing your report…</p>");
        }
    }

    fn show_report(report: &PerformanceReport) {
        let list = |items: &[String]| -> String {
            items
                .iter()
                .map(|i| format!("<li>{}</li>", escape(i)))
                .collect()
        };
        set_html(
            "report",
            &format!(
                "<h3>💪 Strengths</h3><ul>{}</ul><h3>🌱 To practice</h3><ul>{}</ul><p>{}</p><p class=\"cheer\">{}</p>",
                list(&report.strengths),
                list(&report.weaknesses),
                escape(&report.recommendation),
                escape(&report.encouragement)
            ),
        );
    }

    fn request_report(app: Rc<RefCell<App>>) {
        let (client, request) = {
            let a = app.borrow();
            (a.client.clone(), a.arcade.analysis_request())
        };
        let Some((run, request)) = request else { return };

        spawn_local(async move {
            let report = client.analyze(&request).await;
            // A replay may have finished another game in the meantime
            if app.borrow_mut().arcade.set_report(run, report.clone()) {
                show_report(&report);
            }
        });
    }

    fn show_crash() {
        for (id, _) in SCREENS {
            set_hidden(id, true);
        }
        set_hidden("crash", false);
    }

    pub fn run() {
        std::panic::set_hook(Box::new(|info| {
            console_error_panic_hook::hook(info);
            show_crash();
        }));
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Quiz Arcade starting...");

        set_hidden("loading", true);
        fill_setup_form();

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));
        log::info!("Arcade initialized with seed: {}", seed);

        setup_setup_handlers(app.clone());
        setup_game_handlers(app.clone());
        setup_results_handlers(app.clone());
        setup_auto_pause(app.clone());

        listen_id("restart-btn", "click", |_| {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });

        request_animation_frame(app);
    }

    fn fill_setup_form() {
        let avatars: String = AVATARS
            .iter()
            .map(|a| format!(r#"<option value="{a}">{a}</option>"#))
            .collect();
        set_html("avatar", &avatars);

        let bank = quiz_arcade::QuestionBank::builtin();
        let grades: String = bank
            .grades()
            .map(|g| format!(r#"<option value="{g}">Grade {g}</option>"#))
            .collect();
        set_html("grade", &grades);
    }

    /// Sync the lobby settings controls (`data-setting="<name>"`) with the arcade
    fn fill_settings(arcade: &Arcade) {
        let Some(document) = document() else { return };
        for (key, value) in arcade.settings().entries() {
            let Ok(Some(el)) = document.query_selector(&format!(r#"[data-setting="{key}"]"#)) else {
                continue;
            };
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                if input.type_() == "checkbox" {
                    input.set_checked(value == "on");
                } else {
                    input.set_value(&value);
                }
            } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
                select.set_value(&value);
            }
        }
    }

    /// Name and text value of a changed settings control
    fn setting_change(event: &web_sys::Event) -> Option<(String, String)> {
        let target: Element = event.target()?.dyn_into().ok()?;
        let key = target.get_attribute("data-setting")?;
        let value = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            if input.type_() == "checkbox" {
                let on = if input.checked() { "on" } else { "off" };
                on.to_string()
            } else {
                input.value()
            }
        } else {
            target.dyn_ref::<HtmlSelectElement>()?.value()
        };
        Some((key, value))
    }

    fn input_value(id: &str) -> String {
        by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn select_value(id: &str) -> String {
        by_id(id)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default()
    }

    fn setup_setup_handlers(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen_id("profile-start", "click", move |event| {
                event.prevent_default();
                let result = app.borrow_mut().arcade.submit_profile(
                    &input_value("name"),
                    &select_value("grade"),
                    &select_value("avatar"),
                );
                if let Err(e) = result {
                    alert(&e.to_string());
                }
            });
        }

        {
            let app = app.clone();
            listen_id("skip-upload", "click", move |_| {
                if let Err(e) = app.borrow_mut().arcade.skip_upload() {
                    log::warn!("Skip upload: {}", e);
                }
            });
        }

        listen_id("upload-input", "change", move |event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Re-picking the same file after fixing it must fire `change` again
            input.set_value("");
            log::info!("Reading {}", file.name());

            let app = app.clone();
            spawn_local(async move {
                let text = match JsFuture::from(file.text()).await {
                    Ok(value) => value.as_string().unwrap_or_default(),
                    Err(e) => {
                        log::warn!("Could not read upload: {:?}", e);
                        alert("Could not read that file. Please try another one.");
                        return;
                    }
                };
                let message = {
                    let mut a = app.borrow_mut();
                    let _ = a.arcade.upload_questions(&text);
                    a.arcade.take_alert()
                };
                if let Some(message) = message {
                    alert(&message);
                }
            });
        });
    }

    fn setup_game_handlers(app: Rc<RefCell<App>>) {
        // Lobby cards
        {
            let app = app.clone();
            listen_id("game-grid", "click", move |event| {
                let Some(kind) = data_attr(&event, "data-game").and_then(|s| GameKind::from_slug(&s))
                else {
                    return;
                };
                if let Err(e) = app.borrow_mut().arcade.start_game(kind) {
                    log::warn!("{}", e);
                    alert(&e.to_string());
                }
            });
        }

        // Lobby settings panel
        {
            let app = app.clone();
            listen_id("settings", "change", move |event| {
                let Some((key, value)) = setting_change(&event) else {
                    return;
                };
                let mut a = app.borrow_mut();
                if !a.arcade.change_setting(&key, &value) {
                    fill_settings(&a.arcade);
                }
            });
        }

        // Answer buttons
        {
            let app = app.clone();
            listen_id("options", "click", move |event| {
                if let Some(choice) = data_attr(&event, "data-option").and_then(|s| s.parse().ok()) {
                    app.borrow_mut().input.answer = Some(choice);
                }
            });
        }

        {
            let app = app.clone();
            listen_id("pause-btn", "click", move |_| app.borrow_mut().input.pause = true);
        }
        {
            // The overlay covers the pause button while paused
            let app = app.clone();
            listen_id("pause-overlay", "click", move |_| {
                app.borrow_mut().arcade.resume();
            });
        }
        {
            let app = app.clone();
            listen_id("quit-btn", "click", move |_| {
                let _ = app.borrow_mut().arcade.home();
            });
        }
        {
            let app = app.clone();
            listen_id("mute-btn", "click", move |_| {
                let muted = app.borrow_mut().arcade.toggle_mute();
                set_text("mute-btn", if muted { "🔇" } else { "🔊" });
            });
        }

        // Keyboard: 1-4 answer, Escape/P pause, M mute
        let Some(window) = web_sys::window() else { return };
        listen(&window, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let mut a = app.borrow_mut();
            if a.arcade.screen() != Screen::Playing {
                return;
            }
            match event.key().as_str() {
                "Escape" | "p" | "P" => a.input.pause = true,
                "m" | "M" => {
                    let muted = a.arcade.toggle_mute();
                    set_text("mute-btn", if muted { "🔇" } else { "🔊" });
                }
                key => {
                    if let Some(n) = key.parse::<usize>().ok().filter(|n| *n >= 1) {
                        a.input.answer = Some(n - 1);
                    }
                }
            }
        });
    }

    fn setup_results_handlers(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen_id("replay-btn", "click", move |_| {
                if let Err(e) = app.borrow_mut().arcade.replay() {
                    log::warn!("Replay: {}", e);
                }
            });
        }
        listen_id("home-btn", "click", move |_| {
            let _ = app.borrow_mut().arcade.home();
        });
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let Some(document) = document() else { return };
        let doc = document.clone();
        listen(&document, "visibilitychange", move |_| {
            let hidden = doc.visibility_state() == web_sys::VisibilityState::Hidden;
            let mut a = app.borrow_mut();
            a.arcade.set_hidden(hidden);
            if hidden && a.arcade.screen() == Screen::Playing && !a.arcade.is_paused() {
                a.arcade.toggle_pause();
                log::info!("Auto-paused (tab hidden)");
            }
        });
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let entered = app.borrow_mut().frame(time);
        if entered == Some(Screen::Results) {
            request_report(app.clone());
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::time::Instant;

    use quiz_arcade::app::Screen;
    use quiz_arcade::config::AiConfig;
    use quiz_arcade::profile::AVATARS;
    use quiz_arcade::report::AnalysisClient;
    use quiz_arcade::session::{Outcome, SessionInput, SessionPhase};
    use quiz_arcade::skins::{GameKind, Renderer, SessionView};
    use quiz_arcade::{Arcade, SetupStep};

    /// Prints each question and its feedback to stdout
    struct TerminalRenderer;

    impl Renderer for TerminalRenderer {
        fn render(&mut self, view: &SessionView<'_>) {
            if view.paused {
                println!("⏸  Paused - press Enter to resume");
                return;
            }
            match view.phase {
                SessionPhase::Presenting { .. } => {
                    let Some(question) = view.question else { return };
                    println!();
                    println!("{}", view.hud_line());
                    println!("{}", question.text);
                    for (i, option) in question.options.iter().enumerate() {
                        println!("  {}) {}", i + 1, option);
                    }
                }
                SessionPhase::Resolved { correct, .. } => {
                    let feedback = view.feedback().unwrap_or_default();
                    match (correct, view.question) {
                        (false, Some(q)) => println!("✗ {feedback} The answer was: {}", q.correct_text()),
                        _ => println!("✓ {feedback}"),
                    }
                }
                SessionPhase::Loading | SessionPhase::Finished => {}
            }
        }
    }

    struct Prompt<R> {
        input: R,
    }

    impl<R: BufRead> Prompt<R> {
        /// Read one trimmed line; `None` on end of input
        fn ask(&mut self, label: &str) -> Option<String> {
            print!("{label}");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(line.trim().to_string()),
            }
        }
    }

    pub async fn run(seed: u64) {
        let stdin = io::stdin();
        let mut prompt = Prompt { input: stdin.lock() };
        let mut arcade = Arcade::new(seed);
        let client = AnalysisClient::new(AiConfig::from_env());

        println!("🎮 Welcome to the Quiz Arcade!");
        loop {
            let ok = match arcade.screen() {
                Screen::Setup(SetupStep::Profile) => setup_profile(&mut arcade, &mut prompt),
                Screen::Setup(SetupStep::Upload) => setup_upload(&mut arcade, &mut prompt),
                Screen::Lobby => lobby(&mut arcade, &mut prompt),
                Screen::Playing => play(&mut arcade, &mut prompt),
                Screen::Results => results(&mut arcade, &client, &mut prompt).await,
            };
            if !ok {
                break;
            }
        }
        println!("Bye! 👋");
    }

    fn setup_profile<R: BufRead>(arcade: &mut Arcade, prompt: &mut Prompt<R>) -> bool {
        let Some(name) = prompt.ask("Your name: ") else { return false };
        let grades: Vec<&str> = arcade.bank().grades().collect();
        let label = format!("Grade ({}): ", grades.join(", "));
        let Some(grade) = prompt.ask(&label) else { return false };
        let label = format!("Avatar ({}, Enter for {}): ", AVATARS.join(" "), AVATARS[0]);
        let Some(avatar) = prompt.ask(&label) else { return false };

        if let Err(e) = arcade.submit_profile(&name, &grade, &avatar) {
            println!("⚠️  {e}");
        }
        true
    }

    fn setup_upload<R: BufRead>(arcade: &mut Arcade, prompt: &mut Prompt<R>) -> bool {
        let Some(path) = prompt.ask("Custom questions JSON file (Enter to skip): ") else {
            return false;
        };
        if path.is_empty() {
            let _ = arcade.skip_upload();
            return true;
        }
        match std::fs::read_to_string(&path) {
            Ok(json) => match arcade.upload_questions(&json) {
                Ok(count) => println!("Loaded {count} questions."),
                Err(_) => {
                    if let Some(message) = arcade.take_alert() {
                        println!("⚠️  {message}");
                    }
                }
            },
            Err(e) => println!("⚠️  Could not read {path}: {e}"),
        }
        true
    }

    fn lobby<R: BufRead>(arcade: &mut Arcade, prompt: &mut Prompt<R>) -> bool {
        if let Some(profile) = arcade.profile() {
            println!("\n{}", profile.greeting());
        }
        for (i, kind) in GameKind::ALL.iter().enumerate() {
            let info = kind.info();
            let best = arcade
                .scoreboard()
                .best(*kind)
                .map(|s| format!("  🏆 {s}"))
                .unwrap_or_default();
            println!("{:>2}) {} {} - {}{}", i + 1, info.emoji, info.title, info.blurb, best);
        }
        let Some(choice) = prompt.ask("Pick a game (s for settings, q to quit): ") else {
            return false;
        };
        if choice.eq_ignore_ascii_case("q") {
            return false;
        }
        if choice.eq_ignore_ascii_case("s") {
            return settings(arcade, prompt);
        }
        let kind = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| GameKind::ALL.get(i).copied());
        match kind {
            Some(kind) => {
                if let Err(e) = arcade.start_game(kind) {
                    println!("⚠️  {e}");
                }
            }
            None => println!("Please enter a number from the list."),
        }
        true
    }

    /// Edit settings one `name value` line at a time until a blank line
    fn settings<R: BufRead>(arcade: &mut Arcade, prompt: &mut Prompt<R>) -> bool {
        loop {
            println!("\n⚙️  Settings");
            for (key, value) in arcade.settings().entries() {
                println!("  {key:<15} {value}");
            }
            let Some(line) = prompt.ask("Change (e.g. `pacing quick`, `volume 50`, Enter when done): ")
            else {
                return false;
            };
            if line.is_empty() {
                return true;
            }
            let Some((key, value)) = line.split_once(char::is_whitespace) else {
                println!("Please give a name and a value.");
                continue;
            };
            if !arcade.change_setting(key, value) {
                println!("⚠️  Can't set {key} to {:?}", value.trim());
            }
        }
    }

    /// One question: show it, time the answer, show the feedback
    fn play<R: BufRead>(arcade: &mut Arcade, prompt: &mut Prompt<R>) -> bool {
        let mut renderer = TerminalRenderer;
        if !matches!(arcade.view().map(|v| v.phase), Some(SessionPhase::Presenting { .. })) {
            arcade.update(&SessionInput::default(), 0.0);
        }
        arcade.render(&mut renderer);

        let asked = Instant::now();
        let Some(line) = prompt.ask("Answer (p to pause, x to quit): ") else { return false };
        let waited = asked.elapsed().as_secs_f32();

        match line.as_str() {
            "x" | "X" => {
                let _ = arcade.home();
                return true;
            }
            "p" | "P" => {
                arcade.toggle_pause();
                arcade.render(&mut renderer);
                let _ = prompt.ask("");
                arcade.toggle_pause();
                return true;
            }
            _ => {}
        }

        // Let a timer run out before the late answer lands
        arcade.update(&SessionInput::default(), waited);
        if matches!(arcade.view().map(|v| v.phase), Some(SessionPhase::Presenting { .. })) {
            match line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(choice) => {
                    arcade.update(&SessionInput::answer(choice), 0.0);
                }
                None => {
                    println!("Type the number of your answer.");
                    return true;
                }
            }
        }
        if !matches!(arcade.view().map(|v| v.phase), Some(SessionPhase::Resolved { .. })) {
            return true;
        }
        arcade.render(&mut renderer);

        let delay = arcade
            .active()
            .map(|g| g.session.config().resolve_delay_secs)
            .unwrap_or_default();
        arcade.update(&SessionInput::default(), delay);
        true
    }

    async fn results<R: BufRead>(
        arcade: &mut Arcade,
        client: &AnalysisClient,
        prompt: &mut Prompt<R>,
    ) -> bool {
        if let Some(finished) = arcade.finished() {
            let result = &finished.result;
            println!();
            match result.outcome {
                Outcome::Completed => println!("🎉 {} complete!", finished.kind.title()),
                Outcome::OutOfLives => println!("💔 Out of lives in {}", finished.kind.title()),
            }
            println!(
                "Score {}  |  {}/{} correct ({}%)  |  best streak {}  |  level {}",
                result.score,
                result.correct_answers,
                result.questions_answered,
                result.accuracy_percent(),
                result.best_streak,
                result.level
            );
            if let Some(rank) = finished.rank {
                println!("🏆 New high score #{rank}!");
            }
        }

        if arcade.finished().is_some_and(|f| f.report.is_none()) {
            if let Some((run, request)) = arcade.analysis_request() {
                for skill in request.skill_breakdown() {
                    println!("  {}: {}/{}", skill.skill, skill.correct, skill.attempted);
                }
                println!("Writing your report...");
                let report = client.analyze(&request).await;
                println!("💪 Strengths: {}", report.strengths.join("; "));
                println!("🌱 To practice: {}", report.weaknesses.join("; "));
                println!("{}", report.recommendation);
                println!("{}", report.encouragement);
                arcade.set_report(run, report);
            }
        }

        let Some(choice) = prompt.ask("(r)eplay, (l)obby or (q)uit: ") else { return false };
        match choice.to_lowercase().as_str() {
            "r" => {
                if let Err(e) = arcade.replay() {
                    println!("⚠️  {e}");
                }
                true
            }
            "q" => false,
            _ => arcade.home().is_ok(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    log::info!("Quiz Arcade (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    terminal::run(seed).await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
