//! Sample data for demo databases.

use crate::model::contact::Contact;
use crate::repo::contact_repo::{ContactListQuery, ContactRepository, RepoResult};
use log::info;

struct SampleContact {
    first: &'static str,
    last: &'static str,
    twitter: Option<&'static str>,
    notes: Option<&'static str>,
    favorite: bool,
}

const SAMPLE_CONTACTS: &[SampleContact] = &[
    SampleContact {
        first: "Shruti",
        last: "Kapoor",
        twitter: Some("shrutikapoor08"),
        notes: None,
        favorite: true,
    },
    SampleContact {
        first: "Glenn",
        last: "Reyes",
        twitter: Some("glnnrys"),
        notes: None,
        favorite: false,
    },
    SampleContact {
        first: "Ryan",
        last: "Florence",
        twitter: None,
        notes: Some("Wrote the original routing library."),
        favorite: false,
    },
    SampleContact {
        first: "Oscar",
        last: "Newman",
        twitter: Some("__oscarnewman"),
        notes: None,
        favorite: false,
    },
    SampleContact {
        first: "Michael",
        last: "Jackson",
        twitter: None,
        notes: None,
        favorite: false,
    },
    SampleContact {
        first: "Christopher",
        last: "Chedeau",
        twitter: Some("Vjeux"),
        notes: Some("Prettier maintainer."),
        favorite: true,
    },
];

/// Inserts the built-in sample contacts when the store is empty.
///
/// Returns how many contacts were inserted; `0` when data already exists.
pub fn seed_sample_contacts<R: ContactRepository>(repo: &R) -> RepoResult<usize> {
    if !repo.list_contacts(&ContactListQuery::default())?.is_empty() {
        info!("event=seed module=service status=skipped reason=not_empty");
        return Ok(0);
    }

    for sample in SAMPLE_CONTACTS {
        let mut contact = Contact::empty();
        contact.first = sample.first.to_string();
        contact.last = sample.last.to_string();
        contact.avatar = Some(format!("https://i.pravatar.cc/200?u={}", contact.id));
        contact.twitter = sample.twitter.map(str::to_string);
        contact.notes = sample.notes.map(str::to_string);
        contact.favorite = sample.favorite;
        repo.create_contact(&contact)?;
    }

    info!(
        "event=seed module=service status=ok inserted={}",
        SAMPLE_CONTACTS.len()
    );
    Ok(SAMPLE_CONTACTS.len())
}
