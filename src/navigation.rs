use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::LandingError;

/// Page sections. Each variant's id is also the id of its `<section>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Advantages,
    Contact,
}

impl Section {
    /// The sections listed in the header and the footer site map.
    /// Contact gets its own call-to-action button instead.
    pub const NAV: [Section; 3] = [Section::Home, Section::Services, Section::Advantages];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::Services => "servicios",
            Section::Advantages => "ventajas",
            Section::Contact => "contacto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Inicio",
            Section::Services => "Servicios",
            Section::Advantages => "Ventajas",
            Section::Contact => "Contacto",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smoothly scrolls the element with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), LandingError> {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| LandingError::not_found(id))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_anchors() {
        let all = [Section::Home, Section::Services, Section::Advantages, Section::Contact];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
        assert_eq!(Section::Services.href(), "#servicios");
    }

    #[test]
    fn contact_is_not_a_plain_nav_link() {
        assert!(!Section::NAV.contains(&Section::Contact));
        assert_eq!(Section::NAV[0], Section::Home);
    }
}
