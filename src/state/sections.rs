//! Per-section reveal and entrance sequencing.
//!
//! Each section owns a one-shot [`VisibilityGate`] and up to four staggered
//! groups: the heading, the main items (cards, entries), their accents
//! (skill bars, detail lines) and a trailing group used only by the
//! achievements list. Nothing animates before the gate opens; once open the
//! phases are a pure function of the reveal time.

use crate::model::{PortfolioContent, SectionId};
use crate::view_state::{
    AnimationSequencer, ItemPhase, Revealed, SequenceSpec, Timestamp, VisibilityGate,
};
use tracing::debug;

/// Entrance timing of every group in a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTimings {
    /// Section heading.
    pub heading: SequenceSpec,
    /// Cards or entries.
    pub items: SequenceSpec,
    /// Accent bars or detail lines.
    pub accents: SequenceSpec,
    /// Third list (achievements only).
    pub extras: SequenceSpec,
}

const HEADING: SequenceSpec = SequenceSpec::from_millis(0, 0, 800);
const NONE: SequenceSpec = SequenceSpec::instant();

impl SectionTimings {
    /// Timing table for a section.
    pub fn for_section(id: SectionId) -> Self {
        match id {
            // Tagline, summary and buttons come in at 0.5 s, 0.8 s, 1.1 s.
            SectionId::Home => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(500, 300, 500),
                accents: NONE,
                extras: NONE,
            },
            SectionId::Skills => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(0, 50, 600),
                accents: SequenceSpec::from_millis(500, 50, 1_000),
                extras: NONE,
            },
            SectionId::Experience => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(0, 300, 800),
                accents: SequenceSpec::from_millis(500, 300, 500),
                extras: NONE,
            },
            SectionId::Education => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(0, 150, 600),
                accents: SequenceSpec::from_millis(500, 200, 1_000),
                extras: NONE,
            },
            // Awards, certifications, activities.
            SectionId::Achievements => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(500, 200, 500),
                accents: SequenceSpec::from_millis(700, 100, 500),
                extras: SequenceSpec::from_millis(900, 100, 500),
            },
            SectionId::Projects => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(0, 100, 600),
                accents: SequenceSpec::from_millis(300, 100, 1_000),
                extras: NONE,
            },
            SectionId::Contact => Self {
                heading: HEADING,
                items: SequenceSpec::from_millis(0, 0, 800),
                accents: NONE,
                extras: NONE,
            },
        }
    }

    /// Every group collapsed to an immediate reveal.
    pub fn reduced() -> Self {
        Self {
            heading: NONE,
            items: NONE,
            accents: NONE,
            extras: NONE,
        }
    }
}

/// Item counts for (items, accents, extras) of a section.
fn group_sizes(id: SectionId, content: &PortfolioContent) -> (usize, usize, usize) {
    match id {
        SectionId::Home => (3, 0, 0),
        SectionId::Skills => (content.skills.len(), content.skills.len(), 0),
        SectionId::Experience => (content.experience.len(), content.experience.len(), 0),
        SectionId::Education => (content.education.len(), content.education.len(), 0),
        SectionId::Achievements => (
            content.achievements.len(),
            content.certifications.len(),
            content.extra_curricular.len(),
        ),
        SectionId::Projects => (content.projects.len(), content.projects.len(), 0),
        SectionId::Contact => (1, 0, 0),
    }
}

/// A staggered group inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Section heading.
    Heading,
    /// Cards or entries.
    Items,
    /// Accent bars or detail lines.
    Accents,
    /// Third list.
    Extras,
}

/// Reveal latch and entrance groups for one section.
#[derive(Debug, Clone)]
pub struct SectionState {
    id: SectionId,
    gate: VisibilityGate,
    heading: AnimationSequencer,
    items: AnimationSequencer,
    accents: AnimationSequencer,
    extras: AnimationSequencer,
}

impl SectionState {
    /// Build the state for `id`, sized from `content`.
    pub fn new(id: SectionId, content: &PortfolioContent, timings: SectionTimings) -> Self {
        let (items, accents, extras) = group_sizes(id, content);
        Self {
            id,
            gate: VisibilityGate::new(),
            heading: AnimationSequencer::new(1, timings.heading),
            items: AnimationSequencer::new(items, timings.items),
            accents: AnimationSequencer::new(accents, timings.accents),
            extras: AnimationSequencer::new(extras, timings.extras),
        }
    }

    /// Which section this is.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Feed an intersection observation. Starts every group on first reveal.
    pub fn observe(&mut self, intersecting: bool, now: Timestamp) -> Option<Revealed> {
        let revealed = self.gate.observe(intersecting, now)?;
        for group in [
            &mut self.heading,
            &mut self.items,
            &mut self.accents,
            &mut self.extras,
        ] {
            group.start(revealed.at);
        }
        debug!(section = %self.id, at = ?revealed.at, "section revealed");
        Some(revealed)
    }

    /// Whether the section has ever been on screen.
    pub fn has_been_visible(&self) -> bool {
        self.gate.has_been_visible()
    }

    /// The sequencer for a group.
    pub fn group(&self, group: Group) -> &AnimationSequencer {
        match group {
            Group::Heading => &self.heading,
            Group::Items => &self.items,
            Group::Accents => &self.accents,
            Group::Extras => &self.extras,
        }
    }

    /// Phase of one item in a group.
    pub fn phase(&self, group: Group, index: usize, now: Timestamp) -> ItemPhase {
        self.group(group).phase(index, now)
    }

    /// Whether every group has finished.
    pub fn is_settled(&self, now: Timestamp) -> bool {
        self.groups().all(|group| group.is_settled(now))
    }

    /// Earliest moment any group changes phase.
    pub fn next_transition(&self, now: Timestamp) -> Option<Timestamp> {
        self.groups()
            .filter_map(|group| group.next_transition(now))
            .min()
    }

    fn groups(&self) -> impl Iterator<Item = &AnimationSequencer> {
        [&self.heading, &self.items, &self.accents, &self.extras].into_iter()
    }
}
