//! Page chrome assembly: the menu and footer wrapped around page content.
//!
//! The home page sources its chrome from the CMS block list; the FAQ
//! question page hardcodes it, so the defaults below mirror what the CMS
//! menu and footer records carry.

use crate::application::render::RenderError;
use crate::domain::blocks::{FooterRecord, MenuRecord};
use crate::presentation::views::{FooterTemplate, LayoutChrome, MenuTemplate, render_fragment};

/// Build chrome from CMS menu and footer records.
pub fn chrome_from_records(
    menu: &MenuRecord,
    footer: &FooterRecord,
) -> Result<LayoutChrome, RenderError> {
    Ok(LayoutChrome {
        menu_html: render_fragment(MenuTemplate::from_record(menu))?,
        footer_html: render_fragment(FooterTemplate::from_record(footer))?,
    })
}

/// Static chrome for pages that do not fetch menu and footer blocks.
pub fn default_chrome() -> Result<LayoutChrome, RenderError> {
    chrome_from_records(&default_menu(), &default_footer())
}

fn default_menu() -> MenuRecord {
    use crate::domain::blocks::MenuLink;

    MenuRecord {
        links: vec![
            MenuLink {
                label: "Home".to_string(),
                url: "/".to_string(),
            },
            MenuLink {
                label: "FAQ".to_string(),
                url: "/faq".to_string(),
            },
        ],
    }
}

fn default_footer() -> FooterRecord {
    FooterRecord {
        description: "Content managed in the CMS; layout rendered by vetrina.".to_string(),
        links: Vec::new(),
    }
}
