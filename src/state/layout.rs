//! Page layout in terminal rows.
//!
//! The page is a vertical stack of sections followed by the footer. Section
//! heights depend only on the content, the device class and the page
//! height, so the state layer can measure the page before anything is
//! drawn. Renderers must fill exactly the rows given here.

use crate::model::{PortfolioContent, SectionId};
use crate::view_state::DeviceClass;

/// Rows taken by the fixed navbar above the page.
pub const NAVBAR_ROWS: usize = 1;
/// Rows of a section heading (title, rule, blank).
pub const HEADING_ROWS: usize = 3;
/// Smallest hero height, for very short terminals.
pub const MIN_HERO_ROWS: usize = 10;
/// Rows per skill card (name, accent bar).
pub const SKILL_CARD_ROWS: usize = 2;
/// Rows per education card (degree, school, period, accent bar).
pub const EDUCATION_CARD_ROWS: usize = 4;
/// Rows per project card (name, stack, description, link, accent bar).
pub const PROJECT_CARD_ROWS: usize = 6;
/// Rows of the contact form body below its heading.
pub const CONTACT_BODY_ROWS: usize = 14;
/// Rows of the footer.
pub const FOOTER_ROWS: usize = 3;

/// Grid columns used for card sections on a device class.
pub fn grid_columns(device: DeviceClass) -> usize {
    match device {
        DeviceClass::Mobile => 1,
        DeviceClass::Tablet => 2,
        DeviceClass::Desktop => 3,
    }
}

/// Row range of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// Which section.
    pub id: SectionId,
    /// First row, relative to the page top.
    pub top: usize,
    /// Height in rows.
    pub height: usize,
}

impl SectionLayout {
    /// One past the last row.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Whether `row` falls inside this section.
    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Measured page: every section in document order plus the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    sections: Vec<SectionLayout>,
    footer_top: usize,
    device: DeviceClass,
}

impl PageLayout {
    /// Measure the page for `device` with `page_rows` visible rows.
    pub fn compute(content: &PortfolioContent, device: DeviceClass, page_rows: usize) -> Self {
        let mut top = 0;
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let height = section_rows(id, content, device, page_rows);
                let layout = SectionLayout { id, top, height };
                top += height;
                layout
            })
            .collect();

        Self {
            sections,
            footer_top: top,
            device,
        }
    }

    /// Device class the page was measured for.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Layout of one section.
    pub fn section(&self, id: SectionId) -> SectionLayout {
        self.sections[id.index()]
    }

    /// All sections in document order.
    pub fn sections(&self) -> &[SectionLayout] {
        &self.sections
    }

    /// First row of the footer.
    pub fn footer_top(&self) -> usize {
        self.footer_top
    }

    /// Total page height in rows.
    pub fn total_rows(&self) -> usize {
        self.footer_top + FOOTER_ROWS
    }

    /// Largest scroll offset that still fills a `page_rows` viewport.
    pub fn max_scroll(&self, page_rows: usize) -> usize {
        self.total_rows().saturating_sub(page_rows)
    }

    /// Section containing `row`, or the last section for rows in the footer.
    pub fn section_at(&self, row: usize) -> SectionId {
        self.sections
            .iter()
            .find(|section| section.contains(row))
            .map_or(SectionId::Contact, |section| section.id)
    }
}

fn card_rows(count: usize, device: DeviceClass, rows_per_card: usize) -> usize {
    count.div_ceil(grid_columns(device)) * rows_per_card
}

/// Height of one section in rows.
pub fn section_rows(
    id: SectionId,
    content: &PortfolioContent,
    device: DeviceClass,
    page_rows: usize,
) -> usize {
    match id {
        SectionId::Home => page_rows.max(MIN_HERO_ROWS),
        SectionId::Skills => {
            HEADING_ROWS + card_rows(content.skills.len(), device, SKILL_CARD_ROWS) + 1
        }
        SectionId::Experience => {
            HEADING_ROWS
                + content
                    .experience
                    .iter()
                    .map(|entry| 3 + entry.details.len())
                    .sum::<usize>()
        }
        SectionId::Education => {
            HEADING_ROWS + content.education.len() * (EDUCATION_CARD_ROWS + 1)
        }
        SectionId::Achievements => {
            // Each list gets a title row and a trailing blank.
            HEADING_ROWS
                + (content.achievements.len() + 2)
                + (content.certifications.len() + 2)
                + (content.extra_curricular.len() + 2)
        }
        SectionId::Projects => {
            HEADING_ROWS + card_rows(content.projects.len(), device, PROJECT_CARD_ROWS) + 1
        }
        SectionId::Contact => HEADING_ROWS + CONTACT_BODY_ROWS,
    }
}
