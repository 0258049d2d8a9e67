use std::io;

use blake3::Hash;
use cleanse_core::Match;
use cleanse_security::{Redaction, Redactor};
use tracing::{debug, info};

use crate::{Detector, Surface};

/// Where a watched surface is in the detect / confirm cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SensitiveDetected,
    Redacted,
}

/// Outcome of a change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassStart {
    /// A pass began: detect on this text and hand the result to `finish_pass`
    Started(String),
    /// A pass is already in flight, the notification is dropped
    Dropped,
    /// Content is identical to what the last completed pass saw
    Unchanged,
    /// The surface could not be read
    Unavailable,
}

/// Detection state for one watched surface.
///
/// At most one detection pass is in flight at a time. Notifications that
/// arrive meanwhile are dropped, not queued.
pub struct Watcher<S> {
    surface: S,
    redactor: Redactor,
    threshold: Option<f64>,
    phase: Phase,
    matches: Vec<Match>,
    processing: bool,
    // bumped on every confirmed redaction; passes started earlier are stale
    generation: u64,
    pass_generation: u64,
    seen: Option<Hash>,
    pending: Option<Hash>,
}

impl<S: Surface> Watcher<S> {
    pub fn new(surface: S, redactor: Redactor, threshold: Option<f64>) -> Self {
        Self {
            surface,
            redactor,
            threshold,
            phase: Phase::Idle,
            matches: Vec::new(),
            processing: false,
            generation: 0,
            pass_generation: 0,
            seen: None,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Matches reported by the last pass that found something
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle a change notification
    pub fn begin_pass(&mut self) -> PassStart {
        if self.processing {
            debug!(surface = %self.surface.describe(), "detection pass in flight, dropping notification");
            return PassStart::Dropped;
        }

        let text = match self.surface.read_text() {
            Ok(text) => text,
            Err(e) => {
                debug!(surface = %self.surface.describe(), "surface unavailable: {}", e);
                return PassStart::Unavailable;
            }
        };

        let fingerprint = blake3::hash(text.as_bytes());
        if self.seen == Some(fingerprint) {
            return PassStart::Unchanged;
        }

        self.processing = true;
        self.pending = Some(fingerprint);
        self.pass_generation = self.generation;
        PassStart::Started(text)
    }

    /// Complete the in-flight pass with the detector's result
    pub fn finish_pass(&mut self, matches: Vec<Match>) -> Phase {
        self.processing = false;
        let fingerprint = self.pending.take();

        if self.pass_generation != self.generation {
            debug!(surface = %self.surface.describe(), "discarding pass started before redaction");
            return self.phase;
        }
        self.seen = fingerprint;

        if !matches.is_empty() {
            self.matches = matches;
            if self.phase != Phase::SensitiveDetected {
                self.transition(Phase::SensitiveDetected);
            }
        }

        self.phase
    }

    /// Run a complete pass inline
    pub async fn run_pass(&mut self, detector: &dyn Detector) -> Phase {
        match self.begin_pass() {
            PassStart::Started(text) => {
                let matches = detector.detect(&text).await;
                self.finish_pass(matches)
            }
            _ => self.phase,
        }
    }

    /// User confirmation: redact the surface and return to idle.
    ///
    /// No-op (returns `None`) unless sensitive data is currently flagged.
    pub fn confirm(&mut self) -> io::Result<Option<Redaction>> {
        if self.phase != Phase::SensitiveDetected {
            return Ok(None);
        }

        let text = self.surface.read_text()?;
        let redaction = self.redactor.redact(&text, &self.matches, self.threshold);
        if !redaction.is_unchanged() {
            self.surface.replace_text(&redaction.text)?;
        }

        self.transition(Phase::Redacted);
        self.generation += 1;
        self.matches.clear();
        self.seen = Some(blake3::hash(redaction.text.as_bytes()));
        self.transition(Phase::Idle);

        Ok(Some(redaction))
    }

    fn transition(&mut self, to: Phase) {
        info!(surface = %self.surface.describe(), from = ?self.phase, to = ?to, "watch state changed");
        self.phase = to;
    }
}
