//! Maps assistant navigation actions to sections of the host page.
//!
//! The action vocabulary is closed: the assistant names a section with
//! a camel-case id and anything unrecognized is ignored without error.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Sections of the single-page layout the assistant can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Projects,
    Skills,
    Experience,
    Certifications,
    Prizes,
    Community,
    Contact,
}

impl ScrollTarget {
    /// Parse an assistant action id. Unknown ids yield `None` and are
    /// silently ignored by the caller.
    pub fn from_action(raw: &str) -> Option<Self> {
        match raw {
            "scrollToProjects" => Some(Self::Projects),
            "scrollToSkills" => Some(Self::Skills),
            "scrollToExperience" => Some(Self::Experience),
            "scrollToCertifications" => Some(Self::Certifications),
            "scrollToAwards" | "scrollToPrizes" => Some(Self::Prizes),
            "scrollToCommunity" => Some(Self::Community),
            "scrollToContact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// DOM id of the section element this target scrolls to.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Certifications => "certifications",
            Self::Prizes => "prizes",
            Self::Community => "community",
            Self::Contact => "contact",
        }
    }
}

/// Smooth-scroll the page to `target`'s section. A missing element is a
/// no-op, as is the server-side path.
pub fn dispatch(target: ScrollTarget) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(target.element_id()) else {
            log::debug!("scroll target #{} not present", target.element_id());
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}
