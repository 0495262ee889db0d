//! Arcade Crossing entry point
//!
//! Native builds run a headless session with a simple autopilot and log how
//! far it got. Usage: `arcade-crossing [settings.json] [levels.json]`

#[cfg(not(target_arch = "wasm32"))]
mod headless_demo {
    use arcade_crossing::renderer::{HeadlessRenderer, SpriteCache, sprite_manifest};
    use arcade_crossing::sim::{Entity, Game};
    use arcade_crossing::{Session, Settings, Tuning};
    use glam::Vec2;

    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after this much simulated time
    const MAX_SIM_SECONDS: f64 = 600.0;
    /// Frames between autopilot decisions
    const THINK_INTERVAL: u64 = 12;

    /// Step up when the row ahead is clear around the player's column
    fn row_ahead_is_clear(game: &Game) -> bool {
        let player = game.player();
        let Some(level) = game.level() else {
            return false;
        };
        if player.row() == 0 {
            return true;
        }
        let field = game.playfield();
        let target = field.cell_center(player.col(), player.row() - 1);
        let margin = field.cell_width * 1.5;
        !level.enemies().iter().any(|e| {
            let c = e.rect().center();
            (c.y - target.y).abs() < 1.0 && (c.x - target.x).abs() < margin
        })
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let settings = args.next().map(Settings::load).unwrap_or_default();
        let tuning = args.next().map(Tuning::load).unwrap_or_default();

        let mut sprites = SpriteCache::new();
        sprites.preload(sprite_manifest(&settings, &tuning).iter().map(String::as_str));
        let renderer = HeadlessRenderer::new(Vec2::new(505.0, 606.0), sprites);

        let keymap = settings.keymap.clone();
        let game = Game::new(settings, &tuning);
        let mut session = Session::new(game, renderer);
        log::info!("Running {} levels headless", session.game().level_count());

        let mut frame = 0u64;
        while session.sim_time() < MAX_SIM_SECONDS {
            let game = session.game();
            if game.is_won() || game.is_lost() {
                break;
            }
            if frame % THINK_INTERVAL == 0 && row_ahead_is_clear(game) {
                session.push_key(keymap.up);
            }
            session.frame(FRAME_DT);
            frame += 1;
        }

        let game = session.game();
        let outcome = if game.is_won() {
            "won"
        } else if game.is_lost() {
            "lost"
        } else {
            "timed out"
        };
        log::info!(
            "Run {} after {:.1}s: level {}/{}, score {}, lives {}",
            outcome,
            session.sim_time(),
            game.current_level() + 1,
            game.level_count(),
            game.score(),
            game.lives()
        );
        if session.renderer().missing > 0 {
            log::warn!("{} draws referenced unloaded sprites", session.renderer().missing);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arcade Crossing (native) starting...");
    headless_demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `Session` themselves
}
