use log::{debug, info};

use crate::domain::Life;

/// Ticks between generations when a driver starts
pub const INITIAL_RENDER_EVERY: u32 = 5;

/// Cadence that never produces a generation
const PAUSED: u32 = u32::MAX;

/// Driver paces a [`Life`] engine from an external frame loop.
/// The UI calls [`Driver::tick`] once per frame and repaints from
/// [`Driver::life`] whenever a tick reports a new generation.
#[derive(Clone, Debug)]
pub struct Driver {
    life: Life,
    initial: Life,
    render_every: u32,
    ticks: u32,
}

impl Driver {
    pub fn new(life: Life) -> Self {
        Self {
            initial: life.clone(),
            life,
            render_every: INITIAL_RENDER_EVERY,
            ticks: 0,
        }
    }

    /// Start at a custom cadence (builder pattern)
    pub fn with_render_every(mut self, render_every: u32) -> Self {
        self.render_every = render_every.clamp(1, PAUSED - 1);
        self
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    /// Generations are produced once every `render_every` ticks
    pub fn render_every(&self) -> u32 {
        self.render_every
    }

    pub fn is_paused(&self) -> bool {
        self.render_every == PAUSED
    }

    /// Advance one frame. Returns true if a new generation was produced.
    pub fn tick(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }

        self.ticks += 1;
        if self.ticks < self.render_every {
            return false;
        }

        self.ticks = 0;
        self.life.step();
        debug!("generation {}", self.life.generation());
        true
    }

    /// Produce generations more often, down to one per tick
    pub fn faster(&mut self) {
        if self.is_paused() || self.render_every == 1 {
            return;
        }
        self.render_every -= 1;
        debug!("render every {} ticks", self.render_every);
    }

    /// Produce generations less often
    pub fn slower(&mut self) {
        if self.is_paused() || self.render_every == PAUSED - 1 {
            return;
        }
        self.render_every += 1;
        debug!("render every {} ticks", self.render_every);
    }

    /// Pause, or resume at the initial cadence
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.render_every = INITIAL_RENDER_EVERY;
            info!("resumed at generation {}", self.life.generation());
        } else {
            self.render_every = PAUSED;
            info!("paused at generation {}", self.life.generation());
        }
        self.ticks = 0;
    }

    /// Restart from the universe the driver was created with
    pub fn replay(&mut self) {
        info!("replaying from generation {}", self.life.generation());
        self.life = self.initial.clone();
        self.ticks = 0;
    }
}
