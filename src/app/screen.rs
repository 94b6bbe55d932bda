// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and startup routes.

use crate::ui::layout::SectionId;
use crate::ui::navbar::Page;

/// Screens the visitor can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Blog,
}

impl Screen {
    /// Page the navigation bar highlights.
    #[must_use]
    pub fn page(self) -> Page {
        match self {
            Screen::Home => Page::Home,
            Screen::Blog => Page::Blog,
        }
    }

    /// Parses a `--page` value.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().trim_start_matches('/').trim_end_matches(".html") {
            "" | "home" | "index" | "inicio" => Some(Screen::Home),
            "blog" => Some(Screen::Blog),
            _ => None,
        }
    }
}

/// Where a `--link` sends the visitor at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub screen: Screen,
    /// Home section to scroll to.
    pub section: Option<SectionId>,
    /// Raw fragment handed to the blog accordion (`open=2`).
    pub fragment: Option<String>,
}

impl Route {
    /// Parses links such as `blog#open=2`, `blog.html#open=2` or `#contato`.
    ///
    /// Unknown pages fall back to the home screen.
    #[must_use]
    pub fn parse(link: &str) -> Self {
        let (path, fragment) = match link.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (link, None),
        };
        let screen = Screen::from_name(path).unwrap_or_else(|| {
            tracing::warn!(link, "unknown page in link, showing home");
            Screen::Home
        });

        match screen {
            Screen::Home => Self {
                screen,
                section: fragment.and_then(SectionId::from_anchor),
                fragment: None,
            },
            Screen::Blog => Self {
                screen,
                section: None,
                fragment: fragment
                    .filter(|fragment| !fragment.is_empty())
                    .map(str::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_link_keeps_fragment() {
        let route = Route::parse("blog.html#open=2");
        assert_eq!(route.screen, Screen::Blog);
        assert_eq!(route.fragment.as_deref(), Some("open=2"));
    }

    #[test]
    fn home_anchor_selects_section() {
        let route = Route::parse("#contato");
        assert_eq!(route.screen, Screen::Home);
        assert_eq!(route.section, Some(SectionId::Contact));
    }

    #[test]
    fn unknown_page_falls_back_to_home() {
        assert_eq!(Route::parse("pricing#x"), Route::default());
    }

    #[test]
    fn page_names_are_lenient() {
        assert_eq!(Screen::from_name("/blog.html"), Some(Screen::Blog));
        assert_eq!(Screen::from_name("index.html"), Some(Screen::Home));
        assert_eq!(Screen::from_name("about"), None);
    }
}
