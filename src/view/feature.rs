//! Feature view: the detailed projection of the selected record
//!
//! The projection is pure. The only interactive parts are the
//! [`SearchTrigger`]s carried by searchable facts.

use super::searchable::SearchTrigger;
use crate::api::{Record, types::non_empty};

/// One labelled record field, built per render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub name: &'static str,
    pub value: Option<String>,
    pub searchable: bool,
}

impl Fact {
    fn plain(name: &'static str, value: Option<&str>) -> Self {
        Self {
            name,
            value: value.map(str::to_string),
            searchable: false,
        }
    }

    fn searchable(name: &'static str, value: Option<String>) -> Self {
        Self {
            name,
            value,
            searchable: true,
        }
    }

    /// Search term used when the fact is activated
    #[must_use]
    pub fn search_term(&self) -> String {
        self.name.to_lowercase()
    }

    /// The value if it should be rendered at all
    #[must_use]
    pub fn present_value(&self) -> Option<&str> {
        non_empty(self.value.as_deref())
    }
}

/// Eleven facts in display order
#[must_use]
pub fn record_facts(record: &Record) -> [Fact; 11] {
    [
        Fact::plain("Description", record.description.as_deref()),
        Fact::searchable("Culture", record.culture.clone()),
        Fact::plain("Style", record.style.as_deref()),
        Fact::searchable("Technique", record.technique.clone()),
        Fact::searchable("Medium", record.medium.clone()),
        Fact::plain("Dimensions", record.dimensions.as_deref()),
        Fact::searchable("Person", record.people_names()),
        Fact::plain("Department", record.department.as_deref()),
        Fact::plain("Division", record.division.as_deref()),
        Fact::plain("Contact", record.contact.as_deref()),
        Fact::plain("Creditline", record.creditline.as_deref()),
    ]
}

/// Content slot of a rendered fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactContent {
    Text(String),
    Search(SearchTrigger),
}

/// A title/content pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactEntry {
    pub title: &'static str,
    pub content: FactContent,
}

impl FactEntry {
    /// The trigger, if this fact is searchable
    #[must_use]
    pub fn trigger(&self) -> Option<&SearchTrigger> {
        match &self.content {
            FactContent::Search(trigger) => Some(trigger),
            FactContent::Text(_) => None,
        }
    }

    /// Text shown in the content slot
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.content {
            FactContent::Text(text) => text,
            FactContent::Search(trigger) => trigger.label(),
        }
    }
}

/// An image to show in the photos section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Stable key (the API's `imageid`), absent for the primary-image fallback
    pub key: Option<u64>,
    pub src: String,
    pub alt: Option<String>,
}

/// Populated feature view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectFeature {
    pub title: String,
    pub dated: String,
    pub facts: Vec<FactEntry>,
    /// `None` means no photos section at all
    pub photos: Option<Vec<Photo>>,
}

impl ObjectFeature {
    /// Searchable facts in display order
    pub fn triggers(&self) -> impl Iterator<Item = &SearchTrigger> {
        self.facts.iter().filter_map(FactEntry::trigger)
    }
}

/// What the feature pane shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureView {
    /// Nothing is featured: an empty container
    Empty,
    Object(ObjectFeature),
}

/// Projection from the featured record to a [`FeatureView`]
pub struct FeatureDetail;

impl FeatureDetail {
    /// Project the featured record, if any
    #[must_use]
    pub fn project(featured: Option<&Record>) -> FeatureView {
        let Some(record) = featured else {
            return FeatureView::Empty;
        };

        let facts = record_facts(record)
            .into_iter()
            .filter_map(|fact| {
                let value = fact.present_value()?.to_string();
                let content = if fact.searchable {
                    FactContent::Search(SearchTrigger::new(fact.search_term(), value))
                } else {
                    FactContent::Text(value)
                };
                Some(FactEntry {
                    title: fact.name,
                    content,
                })
            })
            .collect();

        FeatureView::Object(ObjectFeature {
            title: record.title.clone().unwrap_or_default(),
            dated: record.dated.clone().unwrap_or_default(),
            facts,
            photos: Self::photos(record),
        })
    }

    /// Photo selection: image list first, then the primary image, else none
    fn photos(record: &Record) -> Option<Vec<Photo>> {
        if let Some(images) = record.image_list() {
            return Some(
                images
                    .iter()
                    .map(|image| Photo {
                        key: image.imageid,
                        src: image.baseimageurl.clone().unwrap_or_default(),
                        alt: image.alttext.clone(),
                    })
                    .collect(),
            );
        }

        record.primary_image().map(|src| {
            vec![Photo {
                key: None,
                src: src.to_string(),
                alt: record.alttext.clone(),
            }]
        })
    }
}
