//! The compiled script bundle handed to the overlay engine

use crate::event::Event;
use crate::info::ScriptInfo;
use crate::style::{Style, StyleMap};
use crate::types::Resolution;
use thiserror::Error;

/// Errors raised while validating compiled input
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Events must arrive sorted ascending by start time; the scheduler's
    /// cursor arithmetic depends on it
    #[error("event {index} starts before its predecessor; events must be sorted by start time")]
    UnsortedEvents {
        /// Index of the offending event
        index: usize,
    },

    /// Event timing must be finite with `start <= end`
    #[error("event {index} has invalid timing: start {start}, end {end}")]
    InvalidTiming {
        /// Index of the offending event
        index: usize,
        /// Offending start time
        start: f64,
        /// Offending end time
        end: f64,
    },
}

/// Immutable compiled script: info, styles and start-ordered events.
///
/// Produced by an external compiler; the overlay engine only reads it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompiledScript {
    info: ScriptInfo,
    styles: StyleMap,
    events: Vec<Event>,
    fallback_style: Style,
}

impl CompiledScript {
    /// Bundle compiled parts, validating the event ordering invariant
    pub fn new(info: ScriptInfo, styles: StyleMap, events: Vec<Event>) -> Result<Self, ScriptError> {
        for (index, event) in events.iter().enumerate() {
            if !event.start.is_finite() || !event.end.is_finite() || event.start > event.end {
                return Err(ScriptError::InvalidTiming {
                    index,
                    start: event.start,
                    end: event.end,
                });
            }
            if index > 0 && event.start < events[index - 1].start {
                return Err(ScriptError::UnsortedEvents { index });
            }
        }
        Ok(Self {
            info,
            styles,
            events,
            fallback_style: Style::default(),
        })
    }

    /// Script metadata
    #[must_use]
    pub fn info(&self) -> &ScriptInfo {
        &self.info
    }

    /// Events in start order
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Style lookup with the default-style fallback: an event naming an
    /// unknown style still renders
    #[must_use]
    pub fn style_or_default(&self, name: &str) -> &Style {
        self.styles.get(name).unwrap_or(&self.fallback_style)
    }

    /// Whether a style exists under this name
    #[must_use]
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Authored script resolution, if declared
    #[must_use]
    pub fn play_res(&self) -> Option<Resolution> {
        self.info.play_res()
    }
}
