//! Wire types for the collection API
//!
//! Every field is optional: the API omits fields freely and returns `null`
//! for others, and both cases deserialize to `None`. Unknown fields are
//! ignored.

use serde::{Deserialize, Serialize};

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Pagination cursors and counters
    #[serde(default)]
    pub info: PageInfo,
    /// Records on this page, in API order
    #[serde(default)]
    pub records: Vec<Record>,
}

impl SearchResponse {
    /// Create a response from its parts
    #[must_use]
    pub const fn new(info: PageInfo, records: Vec<Record>) -> Self {
        Self { info, records }
    }
}

/// Pagination cursor pair plus the counters the API reports alongside it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// URL of the previous page, absent on the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// URL of the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalrecords: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalrecordsperquery: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl PageInfo {
    /// Previous page URL, treating an empty string as absent
    #[must_use]
    pub fn prev_url(&self) -> Option<&str> {
        non_empty(self.prev.as_deref())
    }

    /// Next page URL, treating an empty string as absent
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        non_empty(self.next.as_deref())
    }
}

/// A single collection object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectnumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ObjectImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primaryimageurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditline: Option<String>,
    /// Alt text for `primaryimageurl`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alttext: Option<String>,
}

impl Record {
    /// Title, if present and non-empty
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// Primary image URL, if present and non-empty
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        non_empty(self.primaryimageurl.as_deref())
    }

    /// Image list, if present and non-empty
    #[must_use]
    pub fn image_list(&self) -> Option<&[ObjectImage]> {
        self.images.as_deref().filter(|images| !images.is_empty())
    }

    /// Display names of all people joined with `", "`
    ///
    /// A person without a display name contributes an empty segment.
    /// Returns `None` when `people` is absent or empty.
    #[must_use]
    pub fn people_names(&self) -> Option<String> {
        let people = self.people.as_deref().filter(|people| !people.is_empty())?;
        Some(
            people
                .iter()
                .map(|person| person.displayname.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// An image attached to a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imageid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseimageurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alttext: Option<String>,
}

/// A person associated with a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Treat an empty string the same as an absent one
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
