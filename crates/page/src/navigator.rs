use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Scroll anchors exposed by the brochure page, in page order.
#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Services,
    Team,
    Customers,
    Contact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    anchors: Vec<Section>,
    menu_open: bool,
    target: Option<Section>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Section::VARIANTS.to_vec())
    }
}

impl Navigator {
    /// Navigator over the sections actually rendered on the page.
    pub fn new(anchors: Vec<Section>) -> Self {
        Self {
            anchors,
            menu_open: false,
            target: None,
        }
    }

    /// Requests a smooth scroll to `section_id` and closes the mobile menu.
    ///
    /// Ids that do not name a rendered section are ignored and leave the
    /// navigator as it was.
    pub fn scroll_to(&mut self, section_id: &str) -> Option<Section> {
        let section = Section::from_str(section_id)
            .ok()
            .filter(|s| self.anchors.contains(s))?;

        self.target = Some(section);
        self.menu_open = false;

        Some(section)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn target(&self) -> Option<Section> {
        self.target
    }
}
