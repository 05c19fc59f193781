//! Page sections and their navigation anchors.

use std::fmt;
use std::str::FromStr;

/// A top-level page section, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    /// Hero banner.
    Home,
    /// Skills grid.
    Skills,
    /// Experience timeline.
    Experience,
    /// Education list.
    Education,
    /// Awards, certifications, activities.
    Achievements,
    /// Projects gallery.
    Projects,
    /// Contact form.
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Achievements,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor identifier (`#anchor` without the hash).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Achievements => "achievements",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Achievements => "Achievements",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in document order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at `index` in document order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Previous section, if any.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing an anchor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section anchor: {0}")]
pub struct UnknownAnchor(pub String);

impl FromStr for SectionId {
    type Err = UnknownAnchor;

    /// Accepts the anchor with or without a leading `#`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == wanted)
            .ok_or_else(|| UnknownAnchor(s.to_string()))
    }
}
