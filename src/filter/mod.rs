//! Search and selector filtering over in-memory record collections.
//!
//! Every console view narrows its collection the same way: a free-text
//! search that must appear (case-insensitively) in at least one searchable
//! field, AND-ed with zero or more equality selectors on enumerated fields.
//! The per-entity differences live entirely in a static [`FilterSchema`].

mod schemas;

use std::collections::BTreeMap;

pub use schemas::{
    ACTIVITY_SCHEMA, AUDIT_SCHEMA, ORGANIZATION_SCHEMA, TICKET_SCHEMA, USER_SCHEMA,
};

/// Selector value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// `value` is `None` when the record holds an unrecognized enum value.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Self::Only(wanted) if wanted != ALL => value == Some(wanted.as_str()),
            _ => true,
        }
    }

    /// `Only("all")` built by hand is treated the same as `All`.
    pub fn is_all(&self) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == ALL,
        }
    }
}

/// The search box and selector widgets of one view, as plain data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordQuery {
    search: String,
    needle: String,
    filters: BTreeMap<String, Selection>,
}

impl RecordQuery {
    pub fn new(search: impl Into<String>) -> Self {
        let search = search.into();
        let needle = search.to_lowercase();
        Self {
            search,
            needle,
            filters: BTreeMap::new(),
        }
    }

    pub fn with_filter(mut self, name: impl Into<String>, value: &str) -> Self {
        self.set_filter(name, Selection::parse(value));
        self
    }

    pub fn set_filter(&mut self, name: impl Into<String>, selection: Selection) {
        self.filters.insert(name.into(), selection);
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn selection(&self, name: &str) -> Option<&Selection> {
        self.filters.get(name)
    }

    pub fn selections(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True when the query selects every record of any collection.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.filters.values().all(Selection::is_all)
    }
}

pub struct TextField<T> {
    pub name: &'static str,
    pub get: fn(&T) -> &str,
}

pub struct CategoryField<T> {
    pub name: &'static str,
    pub values: &'static [&'static str],
    pub get: fn(&T) -> Option<&'static str>,
}

/// Which fields of `T` the search text looks at and which fields can be
/// selected on.
pub struct FilterSchema<T: 'static> {
    pub entity: &'static str,
    pub searchable: &'static [TextField<T>],
    pub categorical: &'static [CategoryField<T>],
}

impl<T: 'static> FilterSchema<T> {
    pub fn category(&self, name: &str) -> Option<&CategoryField<T>> {
        self.categorical.iter().find(|f| f.name == name)
    }

    pub fn searchable_names(&self) -> Vec<&'static str> {
        self.searchable.iter().map(|f| f.name).collect()
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categorical.iter().map(|f| f.name).collect()
    }

    fn matches_text(&self, record: &T, needle: &str) -> bool {
        needle.is_empty()
            || self
                .searchable
                .iter()
                .any(|f| (f.get)(record).to_lowercase().contains(needle))
    }

    fn matches_selection(&self, record: &T, name: &str, selection: &Selection) -> bool {
        if selection.is_all() {
            return true;
        }
        match self.category(name) {
            Some(field) => selection.admits((field.get)(record)),
            None => false,
        }
    }

    pub fn admits(&self, record: &T, query: &RecordQuery) -> bool {
        self.matches_text(record, &query.needle)
            && query
                .selections()
                .all(|(name, selection)| self.matches_selection(record, name, selection))
    }
}

pub trait Filterable: Sized + 'static {
    fn schema() -> &'static FilterSchema<Self>;
}

pub fn matching<'a, T: Filterable>(
    records: &'a [T],
    query: &'a RecordQuery,
) -> impl Iterator<Item = &'a T> + 'a {
    let schema = T::schema();
    records.iter().filter(move |r| schema.admits(r, query))
}

pub fn filter_records<T: Filterable + Clone>(records: &[T], query: &RecordQuery) -> Vec<T> {
    let out: Vec<T> = matching(records, query).cloned().collect();
    tracing::debug!(
        entity = T::schema().entity,
        total = records.len(),
        matched = out.len(),
        search = query.search_text(),
        "filtered records"
    );
    out
}
