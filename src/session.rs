//! Frame driver
//!
//! Stands in for the host engine loop: key codes queue up between frames and
//! are drained at the top of the next frame, before the simulation advances.
//! While the clock is stopped `update` is skipped; the frame on which it
//! stops is still rendered so the overlay shows.

use std::collections::VecDeque;

use crate::platform::{Clock, ManualClock, Renderer};
use crate::sanitize_dt;
use crate::sim::Game;

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    pub inputs: usize,
    pub updated: bool,
    pub rendered: bool,
}

pub struct Session<R: Renderer> {
    game: Game,
    renderer: R,
    clock: ManualClock,
    inputs: VecDeque<u32>,
    max_frame_dt: f32,
    frames: u64,
    /// Seconds of simulation advanced
    sim_time: f64,
}

impl<R: Renderer> Session<R> {
    pub fn new(game: Game, renderer: R) -> Self {
        let max_frame_dt = game.settings().max_frame_dt;
        Self {
            game,
            renderer,
            clock: ManualClock::default(),
            inputs: VecDeque::with_capacity(16),
            max_frame_dt,
            frames: 0,
            sim_time: 0.0,
        }
    }

    /// Queue a raw key code for the next frame
    pub fn push_key(&mut self, key_code: u32) {
        self.inputs.push_back(key_code);
    }

    /// Run one frame with the elapsed wall time `dt`
    pub fn frame(&mut self, dt: f32) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        let was_running = self.clock.is_running();

        while let Some(key) = self.inputs.pop_front() {
            self.game.handle_input(key, &mut self.clock);
            outcome.inputs += 1;
        }

        if self.clock.is_running() {
            let dt = sanitize_dt(dt).min(self.max_frame_dt);
            self.game.update(dt);
            self.sim_time += dt as f64;
            outcome.updated = true;
        }

        if self.clock.is_running() || was_running || outcome.inputs > 0 {
            self.renderer.begin_frame();
            self.game.render(&mut self.renderer, &mut self.clock);
            outcome.rendered = true;
        }

        self.frames += 1;
        outcome
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }
}
