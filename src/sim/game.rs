//! Top-level game state machine
//!
//! Owns the level roster, the shared player, and the score/lives counters.
//! States: `Normal` and the one-tick `LosingLife`, plus the orthogonal
//! `paused`, `won` and `lost` flags that gate input, update and render.

use serde::{Deserialize, Serialize};

use super::bonus::Reward;
use super::entity::{Playfield, SimContext};
use super::level::Level;
use super::player::Player;
use super::rng::{RandomSource, SimRng};
use crate::hud::{Hud, Status};
use crate::platform::{Clock, Command, Renderer, StrokeColor};
use crate::sanitize_dt;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Life bookkeeping state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    /// Normal play
    Normal,
    /// A life was just lost; cleared on the next tick
    LosingLife,
}

/// Overlay shown on top of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Pause,
    Won,
    Lost,
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Pause => "Pause",
            Dialog::Won => "You Did It!",
            Dialog::Lost => "Game Over!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Dialog::Pause => "Press 'P' to resume",
            Dialog::Won | Dialog::Lost => "Press 'Enter' to Play Again",
        }
    }
}

/// The whole game
pub struct Game {
    settings: Settings,
    field: Playfield,
    rng: Box<dyn RandomSource>,
    player: Player,
    levels: Vec<Level>,
    /// Index into `levels`
    current: usize,
    score: u64,
    lives: u32,
    life_state: LifeState,
    paused: bool,
    won: bool,
    lost: bool,
    hud: Hud,
}

impl Game {
    /// Build the game on a seeded PCG stream
    pub fn new(settings: Settings, tuning: &Tuning) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Game seed: {}", seed);
        Self::with_rng(settings, tuning, Box::new(SimRng::new(seed)))
    }

    /// Build the game on an injected random source
    pub fn with_rng(settings: Settings, tuning: &Tuning, mut rng: Box<dyn RandomSource>) -> Self {
        let settings = settings.validated();
        let field = Playfield::default();
        let tuning = tuning.clone().validated();

        let mut ctx = SimContext::new(&field, rng.as_mut());
        let levels: Vec<Level> = tuning
            .levels
            .iter()
            .enumerate()
            .map(|(i, def)| Level::from_def(i + 1, def, &mut ctx))
            .collect();
        let player = Player::new(
            settings.player_sprite.clone(),
            settings.player_hitbox_scale,
            &field,
        );

        let mut game = Self {
            lives: settings.initial_lives,
            settings,
            field,
            rng,
            player,
            levels,
            current: 0,
            score: 0,
            life_state: LifeState::Normal,
            paused: false,
            won: false,
            lost: false,
            hud: Hud::default(),
        };
        game.init_level();
        game.refresh_hud();
        game
    }

    /// Return to level 1 with fresh counters and flags
    pub fn reset_game(&mut self) {
        let mut ctx = SimContext::new(&self.field, self.rng.as_mut());
        for level in &mut self.levels {
            level.reset(&mut ctx);
        }
        self.current = 0;
        self.init_level();

        self.hud.reset();
        self.score = 0;
        self.lives = self.settings.initial_lives;
        self.life_state = LifeState::Normal;
        self.won = false;
        self.lost = false;
        self.paused = false;
        self.refresh_hud();
        log::info!("Game restarted");
    }

    /// Enter the current level
    fn init_level(&mut self) {
        let mut ctx = SimContext::new(&self.field, self.rng.as_mut());
        if let Some(level) = self.levels.get_mut(self.current) {
            level.init_level(&mut self.player, &mut ctx);
        }
    }

    /// Advance one tick
    pub fn update(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);

        if self.life_state == LifeState::LosingLife {
            self.set_life_state(LifeState::Normal);
        }

        if self.is_running() {
            let mut ctx = SimContext::new(&self.field, self.rng.as_mut());
            let report = match self.levels.get_mut(self.current) {
                Some(level) => level.update(&mut self.player, dt, &mut ctx),
                None => Default::default(),
            };

            if report.life_lost {
                self.set_life_state(LifeState::LosingLife);
            }
            if !report.reward.is_empty() {
                self.add_bonus(report.reward);
            }
            if report.goal_reached {
                self.win_level();
            }
        }

        self.refresh_hud();
    }

    /// Draw the level and HUD; show the pause/win/loss overlay if any
    ///
    /// Win and loss stop the clock.
    pub fn render(&mut self, renderer: &mut dyn Renderer, clock: &mut dyn Clock) {
        self.refresh_hud();
        if let Some(level) = self.levels.get(self.current) {
            level.render(&self.player, renderer, &self.field);
        }
        self.hud.render(renderer);

        if self.won || self.lost {
            self.set_pause(true, clock);
        }
        if let Some(dialog) = self.dialog() {
            renderer.show_dialog(dialog.title(), dialog.message());
        }
    }

    /// Interpret a raw key code
    ///
    /// Pause and confirm are handled here; movement reaches the player only
    /// while the game is running. Unbound keys are ignored.
    pub fn handle_input(&mut self, key_code: u32, clock: &mut dyn Clock) {
        match self.settings.keymap.resolve(key_code) {
            Some(Command::Pause) => {
                if !self.won && !self.lost {
                    let pause = !self.paused;
                    self.set_pause(pause, clock);
                    log::info!("{}", if pause { "Paused" } else { "Resumed" });
                }
            }
            Some(Command::Confirm) => {
                if self.won || self.lost {
                    self.reset_game();
                    clock.start();
                }
            }
            Some(Command::Move(direction)) => {
                if self.is_running() {
                    if let Some(level) = self.levels.get(self.current) {
                        level.handle_input(&mut self.player, direction, &self.field);
                    }
                }
            }
            None => {}
        }
        self.refresh_hud();
    }

    /// Pause or resume, stopping/starting the clock to match
    pub fn set_pause(&mut self, pause: bool, clock: &mut dyn Clock) {
        self.paused = pause;
        if pause {
            if clock.is_running() {
                clock.stop();
            }
        } else if !clock.is_running() {
            clock.start();
        }
    }

    /// Goal reached: award the level bonus and move on
    fn win_level(&mut self) {
        self.score = self.score.saturating_add(self.settings.level_bonus);
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            log::info!("Level {} reached (score {})", self.current + 1, self.score);
            self.init_level();
        } else {
            self.won = true;
            log::info!("Game won with score {}", self.score);
        }
    }

    fn add_bonus(&mut self, reward: Reward) {
        self.score = self.score.saturating_add(reward.score);
        self.lives = self.lives.saturating_add(reward.lives);
    }

    fn set_life_state(&mut self, state: LifeState) {
        self.life_state = state;
        match state {
            LifeState::Normal => {
                self.hud.lives.set_stroke(StrokeColor::White);
                if self.lives == 0 && !self.lost {
                    self.lost = true;
                    log::info!("Game over with score {}", self.score);
                }
            }
            LifeState::LosingLife => {
                self.hud.lives.set_stroke(StrokeColor::Yellow);
                self.lives = self.lives.saturating_sub(1);
                log::info!("Life lost, {} left", self.lives);
            }
        }
    }

    fn refresh_hud(&mut self) {
        let status = self.status();
        self.hud.update(&status);
    }

    /// Unpaused and not finished
    pub fn is_running(&self) -> bool {
        !self.paused && !self.won && !self.lost
    }

    /// Overlay to show, if any
    pub fn dialog(&self) -> Option<Dialog> {
        if self.won {
            Some(Dialog::Won)
        } else if self.lost {
            Some(Dialog::Lost)
        } else if self.paused {
            Some(Dialog::Pause)
        } else {
            None
        }
    }

    pub fn status(&self) -> Status {
        Status {
            score: self.score,
            level: self.current + 1,
            lives: self.lives,
            paused: self.paused && !self.won && !self.lost,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Index of the current level
    pub fn current_level(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self) -> Option<&Level> {
        self.levels.get(self.current)
    }

    pub fn life_state(&self) -> LifeState {
        self.life_state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn playfield(&self) -> &Playfield {
        &self.field
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;
    use crate::renderer::HeadlessRenderer;
    use crate::sim::BonusPlacement;
    use crate::tuning::{BonusDef, EnemySpawn, LevelDef};

    const LEFT: u32 = 37;
    const UP: u32 = 38;
    const DOWN: u32 = 40;
    const PAUSE: u32 = 80;
    const ENTER: u32 = 13;

    fn level(enemies: Vec<EnemySpawn>, bonuses: Vec<BonusDef>) -> LevelDef {
        LevelDef {
            background: vec!["images/grass-block.png".to_string(); 6],
            hitbox_scale: 0.7,
            goal_row: 0,
            enemies,
            bonuses,
        }
    }

    /// A patroller parked at the left edge of row 4
    fn trap_level() -> LevelDef {
        level(vec![EnemySpawn::Patroller { row: 4 }], vec![])
    }

    fn open_level() -> LevelDef {
        level(vec![], vec![])
    }

    fn game_with(lives: u32, levels: Vec<LevelDef>) -> Game {
        let settings = Settings {
            seed: Some(7),
            initial_lives: lives,
            player_hitbox_scale: 1.0,
            ..Settings::default()
        };
        Game::new(settings, &Tuning { levels })
    }

    fn press(game: &mut Game, clock: &mut ManualClock, keys: &[u32]) {
        for &key in keys {
            game.handle_input(key, clock);
        }
    }

    /// Walk into the parked patroller and tick once
    fn get_hit(game: &mut Game, clock: &mut ManualClock) {
        press(game, clock, &[LEFT, LEFT, UP]);
        game.update(0.0);
    }

    #[test]
    fn test_new_game_starts_on_first_level() {
        let game = game_with(3, vec![open_level(), open_level()]);
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), 3);
        assert!(game.is_running());
        assert!(game.player().is_at_start());
        assert_eq!(game.hud().level.text(), "Level 1");
    }

    #[test]
    fn test_last_life_lost_after_grace_tick() {
        let mut game = game_with(1, vec![trap_level()]);
        let mut clock = ManualClock::default();

        get_hit(&mut game, &mut clock);
        assert_eq!(game.lives(), 0);
        assert_eq!(game.life_state(), LifeState::LosingLife);
        assert_eq!(game.hud().lives.stroke(), StrokeColor::Yellow);
        assert!(!game.is_lost());

        game.update(0.0);
        game.update(0.0);
        assert!(game.is_lost());
        assert_eq!(game.life_state(), LifeState::Normal);
        assert_eq!(game.hud().lives.stroke(), StrokeColor::White);
        assert_eq!(game.lives(), 0);
    }

    #[test]
    fn test_life_lost_with_lives_to_spare() {
        let mut game = game_with(2, vec![trap_level()]);
        let mut clock = ManualClock::default();

        get_hit(&mut game, &mut clock);
        game.update(0.0);
        game.update(0.0);
        assert!(!game.is_lost());
        assert_eq!(game.lives(), 1);
        assert!(game.player().is_at_start());
        assert_eq!(game.hud().lives.text(), "x 1");
    }

    #[test]
    fn test_game_over_does_not_retrigger() {
        let mut game = game_with(1, vec![trap_level()]);
        let mut clock = ManualClock::default();
        get_hit(&mut game, &mut clock);
        game.update(0.0);
        assert!(game.is_lost());

        // Movement is ignored once lost, and lives never go negative
        get_hit(&mut game, &mut clock);
        game.update(0.0);
        assert_eq!(game.lives(), 0);
        assert!(game.is_lost());
        assert!(!game.is_won());
    }

    #[test]
    fn test_reaching_goal_advances_level() {
        let mut game = game_with(3, vec![open_level(), open_level()]);
        let mut clock = ManualClock::default();

        press(&mut game, &mut clock, &[UP; 5]);
        game.update(0.016);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.score(), 500);
        assert!(game.player().is_at_start());
        assert!(!game.is_won());
    }

    #[test]
    fn test_winning_final_level() {
        let mut game = game_with(3, vec![open_level(), open_level()]);
        let mut clock = ManualClock::default();

        for _ in 0..2 {
            press(&mut game, &mut clock, &[UP; 5]);
            game.update(0.016);
        }
        assert!(game.is_won());
        assert!(!game.is_lost());
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.score(), 1000);

        // Further ticks do nothing
        game.update(0.016);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.score(), 1000);
    }

    #[test]
    fn test_restart_after_win() {
        let mut game = game_with(3, vec![open_level()]);
        let mut clock = ManualClock::default();
        press(&mut game, &mut clock, &[UP; 5]);
        game.update(0.016);
        assert!(game.is_won());

        let mut renderer = HeadlessRenderer::default();
        game.render(&mut renderer, &mut clock);
        assert!(!clock.is_running());
        assert_eq!(renderer.last_dialog(), Some(("You Did It!", "Press 'Enter' to Play Again")));

        // Pause cannot be toggled while won
        press(&mut game, &mut clock, &[PAUSE]);
        assert!(!clock.is_running());

        press(&mut game, &mut clock, &[ENTER]);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), 3);
        assert_eq!(game.current_level(), 0);
        assert!(!game.is_won());
        assert!(!game.is_lost());
        assert!(!game.is_paused());
        assert!(clock.is_running());
        assert_eq!(game.dialog(), None);
    }

    #[test]
    fn test_restart_after_loss() {
        let mut game = game_with(1, vec![open_level(), trap_level()]);
        let mut clock = ManualClock::default();

        press(&mut game, &mut clock, &[UP; 5]);
        game.update(0.016);
        assert_eq!(game.current_level(), 1);
        get_hit(&mut game, &mut clock);
        game.update(0.0);
        assert!(game.is_lost());

        let mut renderer = HeadlessRenderer::default();
        game.render(&mut renderer, &mut clock);
        assert_eq!(renderer.last_dialog(), Some(("Game Over!", "Press 'Enter' to Play Again")));

        press(&mut game, &mut clock, &[ENTER]);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), 1);
        assert_eq!(game.current_level(), 0);
        assert!(!game.is_lost());
        assert_eq!(game.hud().lives.stroke(), StrokeColor::White);
        assert_eq!(game.hud().score.text(), "Score: 0");
    }

    #[test]
    fn test_pause_banner_stays_off_after_win_and_loss() {
        let mut clock = ManualClock::default();
        let mut renderer = HeadlessRenderer::default();

        let mut game = game_with(3, vec![open_level()]);
        press(&mut game, &mut clock, &[UP; 5]);
        game.update(0.016);
        game.render(&mut renderer, &mut clock);
        press(&mut game, &mut clock, &[UP]);
        renderer.begin_frame();
        game.render(&mut renderer, &mut clock);
        assert!(game.is_won());
        assert!(!game.status().paused);
        assert_eq!(game.hud().pause.text(), "Press 'P' to pause");
        assert!(!renderer.texts().any(|t| t == "Press 'P' to resume"));
        assert_eq!(renderer.last_dialog(), Some(("You Did It!", "Press 'Enter' to Play Again")));

        let mut game = game_with(1, vec![trap_level()]);
        get_hit(&mut game, &mut clock);
        game.update(0.0);
        renderer.begin_frame();
        game.render(&mut renderer, &mut clock);
        assert!(game.is_lost());
        assert_eq!(game.hud().pause.text(), "Press 'P' to pause");
    }

    #[test]
    fn test_confirm_ignored_while_running() {
        let mut game = game_with(3, vec![open_level(), open_level()]);
        let mut clock = ManualClock::default();
        press(&mut game, &mut clock, &[UP; 5]);
        game.update(0.016);
        press(&mut game, &mut clock, &[ENTER]);
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.score(), 500);
    }

    #[test]
    fn test_bonus_collected_once() {
        let heart = BonusDef {
            sprite: "images/heart.png".to_string(),
            score: 100,
            lives: 1,
            placement: BonusPlacement::Fixed { col: 2, row: 4 },
        };
        let mut game = game_with(3, vec![level(vec![], vec![heart])]);
        let mut clock = ManualClock::default();

        press(&mut game, &mut clock, &[UP]);
        game.update(0.016);
        assert_eq!(game.score(), 100);
        assert_eq!(game.lives(), 4);

        press(&mut game, &mut clock, &[DOWN, UP]);
        game.update(0.016);
        assert_eq!(game.score(), 100);
        assert_eq!(game.lives(), 4);
    }

    #[test]
    fn test_pause_gates_input_and_clock() {
        let mut game = game_with(3, vec![open_level()]);
        let mut clock = ManualClock::default();

        press(&mut game, &mut clock, &[PAUSE]);
        assert!(game.is_paused());
        assert!(!clock.is_running());
        assert_eq!(clock.stops, 1);
        assert_eq!(game.dialog(), Some(Dialog::Pause));
        assert_eq!(game.hud().pause.text(), "Press 'P' to resume");

        press(&mut game, &mut clock, &[UP]);
        assert!(game.player().is_at_start());

        press(&mut game, &mut clock, &[PAUSE]);
        assert!(!game.is_paused());
        assert!(clock.is_running());
        assert_eq!(clock.starts, 1);

        // Redundant pause requests leave the clock alone
        game.set_pause(false, &mut clock);
        assert_eq!(clock.starts, 1);
        press(&mut game, &mut clock, &[UP]);
        assert_eq!(game.player().row(), 4);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut game = game_with(3, vec![open_level()]);
        let mut clock = ManualClock::default();
        press(&mut game, &mut clock, &[65, 0, 9999]);
        assert!(game.player().is_at_start());
        assert!(game.is_running());
        assert!(clock.is_running());
    }

    #[test]
    fn test_empty_roster_uses_builtin_levels() {
        let game = game_with(3, vec![]);
        assert_eq!(game.level_count(), 6);
        assert_eq!(game.level_count(), Tuning::default().levels.len());
    }

    #[test]
    fn test_bad_dt_is_harmless() {
        let mut game = game_with(3, vec![trap_level()]);
        game.update(f32::NAN);
        game.update(-1.0);
        game.update(f32::INFINITY);
        assert!(game.is_running());
        assert_eq!(game.lives(), 3);
    }
}
