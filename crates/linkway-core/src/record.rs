use crate::destination::normalize_destination;
use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// Opaque identifier of a link record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shortened link.
///
/// `id`, `short_code` and `created_at` never change once the record
/// exists. The destination is stored as given and may lack a scheme; use
/// [`LinkRecord::destination`] to get the navigable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct LinkRecord {
    #[builder(setter(into))]
    pub id: LinkId,
    pub short_code: ShortCode,
    #[builder(setter(into))]
    pub destination_url: String,
    #[builder(default = Timestamp::now())]
    pub created_at: Timestamp,
    /// Owned by analytics; the redirect path never reads or writes it.
    #[builder(default)]
    pub click_count: u64,
}

impl LinkRecord {
    /// The destination with a scheme guaranteed.
    pub fn destination(&self) -> Cow<'_, str> {
        normalize_destination(&self.destination_url)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
