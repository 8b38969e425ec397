//! Rotating subtitle: types a phrase out, holds it, deletes it, moves on.

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    pub visible_length: usize,
    pub phase: Phase,
}

impl TypingState {
    const START: TypingState = TypingState {
        phrase_index: 0,
        visible_length: 0,
        phase: Phase::Typing,
    };
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_interval_ms: u32,
    pub pause_after_typed_ms: u32,
    /// Falls back to half of `type_interval_ms`.
    pub delete_interval_ms: Option<u32>,
    pub pause_after_deleted_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Penetration Tester",
                "Cybersecurity Researcher",
                "Threat Hunter",
                "SOC Analyst",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            type_interval_ms: 80,
            pause_after_typed_ms: 2000,
            delete_interval_ms: None,
            pause_after_deleted_ms: 500,
        }
    }
}

impl TypingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        if self.type_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    pub fn delete_interval(&self) -> u32 {
        self.delete_interval_ms.unwrap_or(self.type_interval_ms / 2)
    }

    /// Delay before the first character of a phrase, both on start and
    /// after the previous phrase was fully deleted.
    pub fn pre_typing_delay(&self) -> u32 {
        if self.pause_after_deleted_ms > 0 {
            self.pause_after_deleted_ms
        } else {
            self.type_interval_ms
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub display: String,
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingSequencer {
    config: TypingConfig,
    // char counts, so `visible_length` never splits a code point
    lengths: Vec<usize>,
    state: TypingState,
    inert: bool,
    stopped: bool,
}

impl TypingSequencer {
    /// A config that fails [`TypingConfig::validate`] yields an inert
    /// sequencer that always shows "" and never asks for a tick.
    pub fn new(config: TypingConfig) -> Self {
        let inert = match config.validate() {
            Ok(()) => false,
            Err(err) => {
                log::warn!("typing sequencer disabled: {}", err);
                true
            }
        };
        let lengths = config.phrases.iter().map(|p| p.chars().count()).collect();
        Self {
            config,
            lengths,
            state: TypingState::START,
            inert,
            stopped: false,
        }
    }

    pub fn try_new(config: TypingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    pub fn is_live(&self) -> bool {
        !self.stopped && !self.is_inert()
    }

    pub fn display(&self) -> String {
        match self.config.phrases.get(self.state.phrase_index) {
            Some(phrase) => phrase.chars().take(self.state.visible_length).collect(),
            None => String::new(),
        }
    }

    pub fn start(&self) -> Option<u32> {
        self.is_live().then(|| self.config.pre_typing_delay())
    }

    /// Applies one transition and says how long to wait for the next one.
    pub fn tick(&mut self) -> Option<Step> {
        if !self.is_live() {
            return None;
        }

        let full = self.lengths[self.state.phrase_index];
        let next_delay_ms = match self.state.phase {
            Phase::Typing => {
                if self.state.visible_length < full {
                    self.state.visible_length += 1;
                }
                if self.state.visible_length == full {
                    self.state.phase = Phase::PausedFull;
                    self.config.pause_after_typed_ms
                } else {
                    self.config.type_interval_ms
                }
            }
            Phase::PausedFull => {
                self.state.phase = Phase::Deleting;
                self.config.delete_interval()
            }
            Phase::Deleting => {
                self.state.visible_length = self.state.visible_length.saturating_sub(1);
                if self.state.visible_length == 0 {
                    self.state.phrase_index = (self.state.phrase_index + 1) % self.lengths.len();
                    self.state.phase = Phase::Typing;
                    self.config.pre_typing_delay()
                } else {
                    self.config.delete_interval()
                }
            }
        };

        Some(Step {
            display: self.display(),
            next_delay_ms,
        })
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn restart(&mut self) -> Option<u32> {
        self.state = TypingState::START;
        self.stopped = false;
        self.start()
    }

    /// Length of one pass over every phrase; the display stream repeats
    /// with exactly this period.
    pub fn cycle_duration_ms(&self) -> u64 {
        if self.inert {
            return 0;
        }
        let type_ms = u64::from(self.config.type_interval_ms);
        let delete_ms = u64::from(self.config.delete_interval());
        let pause_full = u64::from(self.config.pause_after_typed_ms);
        let pre_typing = u64::from(self.config.pre_typing_delay());

        self.lengths
            .iter()
            .map(|&len| {
                // an empty phrase still spends one tick in each phase
                let ticks = len.max(1) as u64;
                pre_typing + (ticks - 1) * type_ms + pause_full + ticks * delete_ms
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub display: String,
    pub hold_ms: u32,
}

/// What the subtitle shows and for how long, forever.
#[derive(Debug, Clone)]
pub struct Frames {
    sequencer: TypingSequencer,
    started: bool,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if !self.started {
            self.started = true;
            let hold_ms = self.sequencer.start()?;
            return Some(Frame {
                display: self.sequencer.display(),
                hold_ms,
            });
        }
        self.sequencer.tick().map(|step| Frame {
            display: step.display,
            hold_ms: step.next_delay_ms,
        })
    }
}

pub fn frames(config: TypingConfig) -> Frames {
    Frames {
        sequencer: TypingSequencer::new(config),
        started: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(phrases: &[&str]) -> TypingConfig {
        TypingConfig {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            type_interval_ms: 10,
            pause_after_typed_ms: 100,
            delete_interval_ms: None,
            pause_after_deleted_ms: 0,
        }
    }

    fn shown(seq: &mut TypingSequencer) -> String {
        seq.tick().map(|s| s.display).unwrap_or_default()
    }

    #[test]
    fn single_phrase_types_pauses_deletes_and_loops() {
        let mut seq = TypingSequencer::new(config(&["ab"]));
        assert_eq!(seq.start(), Some(10));
        assert_eq!(seq.display(), "");

        assert_eq!(shown(&mut seq), "a");
        let step = seq.tick().unwrap();
        assert_eq!(step.display, "ab");
        assert_eq!(step.next_delay_ms, 100);
        assert_eq!(seq.state().phase, Phase::PausedFull);

        let step = seq.tick().unwrap();
        assert_eq!(step.display, "ab");
        assert_eq!(step.next_delay_ms, 5);
        assert_eq!(seq.state().phase, Phase::Deleting);

        assert_eq!(shown(&mut seq), "a");
        assert_eq!(shown(&mut seq), "");
        assert_eq!(seq.state(), TypingState::START);

        assert_eq!(shown(&mut seq), "a");
    }

    #[test]
    fn advances_to_next_phrase_after_deleting() {
        let mut seq = TypingSequencer::new(config(&["x", "yz"]));
        assert_eq!(shown(&mut seq), "x");
        assert_eq!(seq.state().phase, Phase::PausedFull);
        seq.tick();
        assert_eq!(shown(&mut seq), "");
        assert_eq!(seq.state().phrase_index, 1);
        assert_eq!(shown(&mut seq), "y");
        assert_eq!(shown(&mut seq), "yz");
    }

    #[test]
    fn empty_phrase_goes_straight_to_pause() {
        let mut seq = TypingSequencer::new(config(&["", "q"]));
        let step = seq.tick().unwrap();
        assert_eq!(step.display, "");
        assert_eq!(step.next_delay_ms, 100);
        assert_eq!(seq.state().phase, Phase::PausedFull);
        seq.tick();
        seq.tick();
        assert_eq!(seq.state().phrase_index, 1);
        assert_eq!(shown(&mut seq), "q");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut seq = TypingSequencer::new(config(&[]));
        assert!(seq.is_inert());
        assert_eq!(seq.start(), None);
        assert_eq!(seq.tick(), None);
        assert_eq!(seq.display(), "");
        assert_eq!(seq.cycle_duration_ms(), 0);
        assert_eq!(frames(config(&[])).next(), None);
        assert_eq!(
            TypingSequencer::try_new(config(&[])).unwrap_err(),
            ConfigError::EmptyPhrases
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut seq = TypingSequencer::new(config(&["añb"]));
        assert_eq!(shown(&mut seq), "a");
        assert_eq!(shown(&mut seq), "añ");
        assert_eq!(shown(&mut seq), "añb");
        assert_eq!(seq.state().phase, Phase::PausedFull);
    }

    #[test]
    fn stop_is_idempotent_and_restart_resets() {
        let mut seq = TypingSequencer::new(config(&["abc"]));
        seq.tick();
        seq.tick();
        seq.stop();
        seq.stop();
        assert_eq!(seq.tick(), None);
        assert_eq!(seq.display(), "ab");

        assert_eq!(seq.restart(), Some(10));
        assert_eq!(seq.display(), "");
        assert_eq!(shown(&mut seq), "a");
    }

    #[test]
    fn pause_after_deleted_delays_retyping() {
        let mut cfg = config(&["a"]);
        cfg.pause_after_deleted_ms = 300;
        cfg.delete_interval_ms = Some(7);
        let holds: Vec<u32> = frames(cfg).take(5).map(|f| f.hold_ms).collect();
        assert_eq!(holds, [300, 100, 7, 300, 100]);
    }

    #[test]
    fn cycle_duration_sums_every_phase() {
        let seq = TypingSequencer::new(config(&["x", "yz"]));
        // "x": 10 + 0 + 100 + 5, "yz": 10 + 10 + 100 + 10
        assert_eq!(seq.cycle_duration_ms(), 115 + 130);
    }

    #[test]
    fn zero_interval_is_inert() {
        let cfg = TypingConfig {
            phrases: vec!["a".to_string()],
            type_interval_ms: 0,
            pause_after_typed_ms: 0,
            delete_interval_ms: None,
            pause_after_deleted_ms: 0,
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroInterval));

        let mut seq = TypingSequencer::new(cfg.clone());
        assert!(seq.is_inert());
        assert!(!seq.is_live());
        assert_eq!(seq.start(), None);
        assert_eq!(seq.tick(), None);
        assert_eq!(seq.restart(), None);
        assert_eq!(seq.display(), "");
        assert_eq!(seq.cycle_duration_ms(), 0);
        assert_eq!(frames(cfg.clone()).next(), None);
        assert_eq!(
            TypingSequencer::try_new(cfg).unwrap_err(),
            ConfigError::ZeroInterval
        );
    }
}
