//! HTML views rendered with handlebars.
//!
//! # Responsibility
//! - Compile page templates once per process.
//! - Render the persistent shell and the child views placed in its outlet.
//!
//! # Invariants
//! - Templates run in strict mode; every field they read is always present
//!   in the serialized view model (possibly `null`).
//! - User text is escaped by handlebars; only pre-rendered outlet HTML is
//!   emitted raw.

mod contact;
mod shell;

pub use contact::{ContactDetailView, EditFormView};
pub use shell::{ContactLinkView, ShellProps, ShellView, NO_NAME_LABEL};

use handlebars::Handlebars;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TEMPLATES: &[(&str, &str)] = &[
    ("shell", include_str!("templates/shell.hbs")),
    ("index", include_str!("templates/index.hbs")),
    ("contact", include_str!("templates/contact.hbs")),
    ("edit", include_str!("templates/edit.hbs")),
];

/// Template compilation or rendering failure.
#[derive(Debug)]
pub enum ViewError {
    Template(handlebars::TemplateError),
    Render(handlebars::RenderError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template(err) => write!(f, "template compilation failed: {err}"),
            Self::Render(err) => write!(f, "template rendering failed: {err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Template(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<handlebars::TemplateError> for ViewError {
    fn from(value: handlebars::TemplateError) -> Self {
        Self::Template(value)
    }
}

impl From<handlebars::RenderError> for ViewError {
    fn from(value: handlebars::RenderError) -> Self {
        Self::Render(value)
    }
}

pub type ViewResult<T> = Result<T, ViewError>;

/// Compiled template registry.
pub struct Views {
    registry: Handlebars<'static>,
}

#[derive(Serialize)]
struct ShellPage<'a> {
    #[serde(flatten)]
    view: &'a ShellView,
    outlet: &'a str,
}

impl Views {
    pub fn new() -> ViewResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    /// Renders the full page: sidebar plus `outlet` inside `#detail`.
    pub fn render_shell(&self, props: &ShellProps<'_>, outlet: &str) -> ViewResult<String> {
        let view = ShellView::derive(props);
        let page = ShellPage {
            view: &view,
            outlet,
        };
        Ok(self.registry.render("shell", &page)?)
    }

    /// Placeholder shown when no contact is selected.
    pub fn render_index(&self) -> ViewResult<String> {
        Ok(self.registry.render("index", &())?)
    }

    pub fn render_contact(&self, view: &ContactDetailView) -> ViewResult<String> {
        Ok(self.registry.render("contact", view)?)
    }

    pub fn render_edit(&self, view: &EditFormView) -> ViewResult<String> {
        Ok(self.registry.render("edit", view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{ShellProps, Views, NO_NAME_LABEL};
    use crate::navigation::NavigationState;
    use contacts_core::Contact;

    fn contact(first: &str, last: &str, favorite: bool) -> Contact {
        let mut contact = Contact::empty();
        contact.first = first.to_string();
        contact.last = last.to_string();
        contact.favorite = favorite;
        contact
    }

    fn render(contacts: &[Contact], q: Option<&str>) -> String {
        render_during(contacts, q, &NavigationState::idle())
    }

    fn render_during(contacts: &[Contact], q: Option<&str>, navigation: &NavigationState) -> String {
        let views = Views::new().unwrap();
        views
            .render_shell(
                &ShellProps {
                    contacts,
                    q,
                    current_path: "/",
                    navigation,
                },
                "<p id=\"outlet\"></p>",
            )
            .unwrap()
    }

    #[test]
    fn templates_compile() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn empty_list_renders_placeholder_without_list_container() {
        let html = render(&[], None);
        assert!(html.contains("<i>No contacts</i>"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn unnamed_contact_renders_no_name_placeholder() {
        let html = render(&[contact("", "", false)], None);
        assert!(html.contains(&format!("<i>{NO_NAME_LABEL}</i>")));
    }

    #[test]
    fn favorite_marker_only_for_favorites() {
        assert!(render(&[contact("Ann", "Lee", true)], None).contains("★"));
        assert!(!render(&[contact("Ann", "Lee", false)], None).contains("★"));
    }

    #[test]
    fn names_are_html_escaped() {
        let html = render(&[contact("<script>", "x", false)], None);
        assert!(!html.contains("<script>x"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn search_value_and_history_mode_follow_q() {
        let first = render(&[], None);
        assert!(first.contains("data-history=\"push\""));
        assert!(first.contains("value=\"\""));

        let later = render(&[], Some("al"));
        assert!(later.contains("data-history=\"replace\""));
        assert!(later.contains("value=\"al\""));
    }

    #[test]
    fn outlet_html_is_embedded_raw() {
        assert!(render(&[], None).contains("<p id=\"outlet\"></p>"));
    }

    #[test]
    fn data_q_is_only_emitted_when_q_is_present() {
        let absent = render(&[], None);
        assert!(!absent.contains("data-q="));
        assert!(!absent.contains("data-synced"));

        assert!(render(&[], Some("")).contains("data-q=\"\""));
        assert!(render(&[], Some("al")).contains("data-q=\"al\""));
    }

    #[test]
    fn search_in_flight_marks_input_and_shows_spinner() {
        let html = render_during(&[], Some("a"), &NavigationState::loading("/?q=al"));
        assert_eq!(html.matches("class=\"loading\"").count(), 1);
        assert!(html.contains("<div id=\"search-spinner\" aria-hidden=\"true\"></div>"));
        assert!(html.contains("<div id=\"detail\" class=\"\">"));
    }

    #[test]
    fn contact_navigation_marks_detail_loading_and_link_pending() {
        let ann = contact("Ann", "Lee", false);
        let nav = NavigationState::loading(format!("/contacts/{}", ann.id));
        let html = render_during(std::slice::from_ref(&ann), None, &nav);
        assert!(html.contains("<div id=\"detail\" class=\"loading\">"));
        assert!(html.contains(&format!("href=\"/contacts/{}\" class=\"pending\"", ann.id)));
        assert!(html.contains("aria-hidden=\"true\" hidden>"));
    }
}
