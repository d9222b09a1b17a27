//! Data models shared between the backend client and the web layer.
//!
//! The backend-facing shapes (`Company`, `CompanyPage`, `CompanyImage`)
//! mirror the directory backend's JSON contract. The view shapes
//! (`CompanyWithLogo`, `PaginationView`) are what this service renders to
//! its own clients.

use serde::{Deserialize, Serialize};

use crate::pagination::PageWindow;

/// A company record as returned by the directory backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub about: String,
    pub year_founded: Option<String>,
    pub website: String,
    pub number_of_employees_id: Option<i64>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    /// External logo reference. Absent means no lookup is attempted and the
    /// placeholder is shown.
    pub favicon: Option<String>,
}

impl Company {
    /// Whether this company references an external logo image.
    pub fn has_logo_ref(&self) -> bool {
        self.favicon.is_some()
    }
}

/// One page of the company listing as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyPage {
    pub items: Vec<Company>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

/// A resolved company image from the image lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyImage {
    pub id: i64,
    pub image_url: String,
}

/// Render-ready company: the raw record plus the URL picked for display.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyWithLogo {
    #[serde(flatten)]
    pub company: Company,
    pub logo_url: String,
}

/// A direct link to one page of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub page: u32,
    pub href: String,
    pub current: bool,
}

/// A First/Previous/Next/Last navigation control.
///
/// `href` is omitted when the control is disabled, mirroring how the
/// navigation bar drops the anchor target on disabled controls.
#[derive(Debug, Clone, Serialize)]
pub struct NavControl {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub disabled: bool,
}

/// The full navigation bar for one page view.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub first: NavControl,
    pub previous: NavControl,
    pub next: NavControl,
    pub last: NavControl,
    /// Bare link to page 1, shown when the window starts past it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_edge: Option<PageLink>,
    pub leading_ellipsis: bool,
    pub pages: Vec<PageLink>,
    pub trailing_ellipsis: bool,
    /// Bare link to the last page, shown when the window ends before it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_edge: Option<PageLink>,
}

impl PaginationView {
    /// Build the navigation bar from a computed page window.
    pub fn from_window(window: &PageWindow) -> Self {
        let link = |page: u32| PageLink {
            page,
            href: format!("/page/{page}"),
            current: page == window.current_page,
        };
        let control = |target: u32, disabled: bool| NavControl {
            page: target,
            href: (!disabled).then(|| format!("/page/{target}")),
            disabled,
        };

        let on_first = window.on_first_page();
        let on_last = window.on_last_page();

        Self {
            current_page: window.current_page,
            total_pages: window.total_pages,
            first: control(1, on_first),
            previous: control(window.current_page.saturating_sub(1).max(1), on_first),
            next: control(
                window
                    .current_page
                    .saturating_add(1)
                    .min(window.total_pages.max(1)),
                on_last,
            ),
            last: control(window.total_pages.max(1), on_last),
            leading_edge: window.has_leading_edge().then(|| link(1)),
            leading_ellipsis: window.has_leading_ellipsis(),
            pages: window.pages.iter().map(|&p| link(p)).collect(),
            trailing_ellipsis: window.has_trailing_ellipsis(),
            trailing_edge: window.has_trailing_edge().then(|| link(window.total_pages)),
        }
    }
}

/// The composed page view this service serves to its clients.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyPageView {
    pub companies: Vec<CompanyWithLogo>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
    pub pagination: PaginationView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_controls_follow_window_state() {
        let window = PageWindow::compute(1, 10, 5);
        let view = PaginationView::from_window(&window);

        assert!(view.first.disabled);
        assert!(view.previous.disabled);
        assert!(view.previous.href.is_none());
        assert!(!view.next.disabled);
        assert_eq!(view.next.href.as_deref(), Some("/page/2"));
        assert_eq!(view.last.page, 10);

        let window = PageWindow::compute(10, 10, 5);
        let view = PaginationView::from_window(&window);

        assert!(view.next.disabled);
        assert!(view.last.disabled);
        assert_eq!(view.leading_edge.as_ref().map(|l| l.page), Some(1));
        assert!(view.trailing_edge.is_none());
    }

    #[test]
    fn test_navigation_at_extreme_current_page_does_not_overflow() {
        let window = PageWindow::compute(u32::MAX, 10, 5);
        let view = PaginationView::from_window(&window);

        assert_eq!(view.next.page, 10);
        assert_eq!(view.last.page, 10);
    }
}
