//! Folds a stream of transitions into the running flight state.
//!
//! Input sources (frame ticks, key presses) push [`Transition`]s into a
//! channel. The owner of the [`Simulation`] drains it from a single thread,
//! so transitions are applied strictly in arrival order.

use crossbeam_channel::{Receiver, SendError, Sender, unbounded};
use tracing::{debug, trace};

use crate::flight::{FlightState, Target, advance, toggle_debug};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// One animation frame, steering toward the sampled target.
    Frame(Target),
    ToggleDebug,
}

impl Transition {
    pub fn apply(self, state: FlightState) -> FlightState {
        match self {
            Transition::Frame(target) => advance(state, target),
            Transition::ToggleDebug => toggle_debug(state),
        }
    }
}

/// Left fold of `transitions` over `initial`.
pub fn fold<I>(initial: FlightState, transitions: I) -> FlightState
where
    I: IntoIterator<Item = Transition>,
{
    transitions.into_iter().fold(initial, |state, t| t.apply(state))
}

/// Cloneable handle for submitting transitions.
#[derive(Clone, Debug)]
pub struct TransitionSender {
    tx: Sender<Transition>,
}

impl TransitionSender {
    pub fn send(&self, transition: Transition) -> Result<(), SendError<Transition>> {
        self.tx.send(transition)
    }

    pub fn frame(&self, target: Target) -> Result<(), SendError<Transition>> {
        self.send(Transition::Frame(target))
    }

    pub fn toggle_debug(&self) -> Result<(), SendError<Transition>> {
        self.send(Transition::ToggleDebug)
    }
}

pub struct Simulation {
    state: FlightState,
    frames: u64,
    tx: Sender<Transition>,
    rx: Receiver<Transition>,
}

impl Simulation {
    pub fn new(initial: FlightState) -> Simulation {
        let (tx, rx) = unbounded();
        Simulation { state: initial, frames: 0, tx, rx }
    }

    pub fn sender(&self) -> TransitionSender {
        TransitionSender { tx: self.tx.clone() }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Number of frame transitions applied so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies one transition immediately, bypassing the queue.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Frame(target) => {
                self.frames += 1;
                trace!(frame = self.frames, ?target, "advance");
            }
            Transition::ToggleDebug => {
                debug!(debug = !self.state.debug, "toggle debug vectors");
            }
        }
        self.state = transition.apply(self.state);
    }

    /// Drains every queued transition in arrival order. Returns how many
    /// were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(transition) = self.rx.try_recv() {
            self.apply(transition);
            applied += 1;
        }
        applied
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(FlightState::initial())
    }
}
