use super::constants::{
    ERASE_DELAY_MS, GLITCH_FLASH_MS, GLITCH_PROBABILITY, GLITCH_SYMBOLS, TITLE_HOLD_MS,
    TITLE_REST_MS, TYPE_DELAY_MAX_MS, TYPE_DELAY_MIN_MS, TYPE_JITTER_PROBABILITY,
};
use rand::prelude::*;

/// One entry of the rotating headline: display text plus the accent color
/// applied while it is on screen.
#[derive(Clone, Debug)]
pub struct TitleEntry {
    pub text: String,
    pub accent: String,
}

impl TitleEntry {
    pub fn new(text: &str, accent: &str) -> Self {
        Self {
            text: text.to_string(),
            accent: accent.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitlePhase {
    Typing,
    Holding,
    Erasing,
    Resting,
}

/// Visual cue the web layer applies alongside the text of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleEffect {
    None,
    /// Momentary transform while typing, reverted shortly after.
    Jitter,
    /// Completion cue once the full title is on screen.
    Pulse,
    /// The trailing character has been swapped for a symbol before deletion.
    Glitch,
}

/// What the scheduler should render now, and when to call `step` again.
#[derive(Clone, Debug)]
pub struct TitleStep {
    pub text: String,
    pub accent: String,
    pub effect: TitleEffect,
    pub delay_ms: u32,
}

/// Typewriter rotation over a fixed title list.
///
/// An explicit state machine advanced by a single external scheduler: each
/// `step` mutates the state once and reports what to display plus the delay
/// until the next step. There is no terminal state; `index` cycles modulo
/// the list length for as long as the page is open.
pub struct TitleCycler {
    pub titles: Vec<TitleEntry>,
    pub index: usize,
    pub phase: TitlePhase,
    shown: usize,
    glitched: bool,
    rng: StdRng,
}

impl TitleCycler {
    pub fn new(titles: Vec<TitleEntry>, seed: u64) -> Self {
        Self {
            titles,
            index: 0,
            phase: TitlePhase::Typing,
            shown: 0,
            glitched: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Number of characters currently on screen.
    pub fn chars_shown(&self) -> usize {
        self.shown
    }

    pub fn step(&mut self) -> TitleStep {
        if self.titles.is_empty() {
            // Nothing to rotate; stay idle.
            return TitleStep {
                text: String::new(),
                accent: String::new(),
                effect: TitleEffect::None,
                delay_ms: TITLE_REST_MS,
            };
        }
        match self.phase {
            TitlePhase::Typing => self.type_step(),
            TitlePhase::Holding => {
                self.phase = TitlePhase::Erasing;
                self.erase_step()
            }
            TitlePhase::Erasing => self.erase_step(),
            TitlePhase::Resting => {
                self.phase = TitlePhase::Typing;
                self.type_step()
            }
        }
    }

    fn type_step(&mut self) -> TitleStep {
        let len = self.current_len();
        if self.shown < len {
            self.shown += 1;
        }
        if self.shown >= len {
            self.phase = TitlePhase::Holding;
            return self.make_step(TitleEffect::Pulse, TITLE_HOLD_MS);
        }
        let effect = if self.rng.gen::<f32>() < TYPE_JITTER_PROBABILITY {
            TitleEffect::Jitter
        } else {
            TitleEffect::None
        };
        let delay = self.rng.gen_range(TYPE_DELAY_MIN_MS..TYPE_DELAY_MAX_MS);
        self.make_step(effect, delay)
    }

    fn erase_step(&mut self) -> TitleStep {
        if self.shown == 0 {
            return self.advance();
        }
        if !self.glitched && self.rng.gen::<f32>() < GLITCH_PROBABILITY {
            self.glitched = true;
            return self.make_step(TitleEffect::Glitch, GLITCH_FLASH_MS);
        }
        self.glitched = false;
        self.shown -= 1;
        if self.shown == 0 {
            return self.advance();
        }
        self.make_step(TitleEffect::None, ERASE_DELAY_MS)
    }

    fn advance(&mut self) -> TitleStep {
        self.index = (self.index + 1) % self.titles.len();
        self.phase = TitlePhase::Resting;
        self.glitched = false;
        self.make_step(TitleEffect::None, TITLE_REST_MS)
    }

    fn current_len(&self) -> usize {
        self.titles[self.index].text.chars().count()
    }

    fn make_step(&mut self, effect: TitleEffect, delay_ms: u32) -> TitleStep {
        let text = self.visible_text();
        TitleStep {
            text,
            accent: self.titles[self.index].accent.clone(),
            effect,
            delay_ms,
        }
    }

    fn visible_text(&mut self) -> String {
        let entry = &self.titles[self.index];
        if self.glitched && self.shown > 0 {
            let mut text: String = entry.text.chars().take(self.shown - 1).collect();
            let pick = self.rng.gen_range(0..GLITCH_SYMBOLS.len());
            text.push(GLITCH_SYMBOLS[pick]);
            text
        } else {
            entry.text.chars().take(self.shown).collect()
        }
    }
}
