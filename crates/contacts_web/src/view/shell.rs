//! Shell view model: the sidebar and detail frame around every page.

use crate::navigation::{HistoryMode, LinkState, NavigationState, SearchInputSync};
use contacts_core::Contact;
use serde::Serialize;

/// Label rendered for contacts with neither first nor last name.
pub const NO_NAME_LABEL: &str = "No Name";

/// Inputs to the shell render; everything it reads is passed in.
#[derive(Debug, Clone, Copy)]
pub struct ShellProps<'a> {
    pub contacts: &'a [Contact],
    pub q: Option<&'a str>,
    pub current_path: &'a str,
    pub navigation: &'a NavigationState,
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinkView {
    pub href: String,
    pub class: &'static str,
    pub label: String,
    /// `false` when `label` is the placeholder.
    pub named: bool,
    pub favorite: bool,
}

impl ContactLinkView {
    pub fn derive(contact: &Contact, current_path: &str, navigation: &NavigationState) -> Self {
        let href = format!("/contacts/{}", contact.id);
        let class = LinkState::resolve(&href, current_path, navigation).class_name();
        let (label, named) = match contact.display_name() {
            Some(name) => (name, true),
            None => (NO_NAME_LABEL.to_string(), false),
        };
        Self {
            href,
            class,
            label,
            named,
            favorite: contact.favorite,
        }
    }
}

/// Everything the shell template reads, derived purely from [`ShellProps`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    /// Search input value; `""` when `q` is absent.
    pub q: String,
    /// Whether `q` was present at all; the page script keys its input sync
    /// on this distinction.
    pub has_q: bool,
    pub searching: bool,
    pub search_class: &'static str,
    pub history: &'static str,
    pub has_contacts: bool,
    pub contacts: Vec<ContactLinkView>,
    pub detail_class: &'static str,
}

impl ShellView {
    pub fn derive(props: &ShellProps<'_>) -> Self {
        let searching = props.navigation.is_searching();
        // A rendered page is a fresh mount, so its first reconcile always
        // writes the input.
        let q = SearchInputSync::new()
            .reconcile(props.q)
            .unwrap_or_default();
        Self {
            q,
            has_q: props.q.is_some(),
            searching,
            search_class: if searching { "loading" } else { "" },
            history: HistoryMode::for_search(props.q).as_str(),
            has_contacts: !props.contacts.is_empty(),
            contacts: props
                .contacts
                .iter()
                .map(|contact| {
                    ContactLinkView::derive(contact, props.current_path, props.navigation)
                })
                .collect(),
            detail_class: if props.navigation.shows_detail_loading() {
                "loading"
            } else {
                ""
            },
        }
    }
}
