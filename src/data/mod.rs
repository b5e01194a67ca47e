//! Person and event records plus the id-based lookup index
//!
//! The record set is loaded once from a static JSON data source and is never
//! mutated by the layout or traversal code. Relation fields (`parents`,
//! `partners`, `children`) hold ids; a referenced id that does not resolve to
//! a record in the same collection is treated as "no such relation".

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when loading a lineage dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single person record in the lineage.
///
/// Fields the layout and traversal code depends on are explicitly typed;
/// anything else in the source data (titles, scripture references, notes)
/// lands in the `extra` side-map and is carried through untouched for the
/// presentation layer to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    /// Birth year in AM (Anno Mundi) calendar years
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub age_at_death: Option<i32>,
    /// Ids of this person's parents (0, 1, or 2 entries)
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
    /// Free-form scalar attributes from the source data
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Person {
    /// Create a person with the given id and name and no other data
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_year: None,
            age_at_death: None,
            parents: Vec::new(),
            partners: Vec::new(),
            children: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Set the birth year (AM)
    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Set the age at death
    pub fn with_age_at_death(mut self, age: i32) -> Self {
        self.age_at_death = Some(age);
        self
    }

    /// Set the parent ids
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Set the partner ids
    pub fn with_partners<I, S>(mut self, partners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partners = partners.into_iter().map(Into::into).collect();
        self
    }

    /// Set the children ids
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }
}

/// A global chronology event, consumed by lifespan-range filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_name: String,
    /// Event date in AM calendar years
    pub date_am: i32,
    #[serde(default)]
    pub date_bc_estimate: Option<i32>,
    #[serde(default)]
    pub key_figures: Vec<String>,
    #[serde(default)]
    pub scripture_reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Id-based lookup over a person collection.
///
/// Built once per operation set; all resolvers tolerate dangling ids by
/// returning nothing. When the collection contains duplicate ids, the first
/// occurrence wins.
#[derive(Debug)]
pub struct PersonIndex<'a> {
    map: HashMap<&'a str, &'a Person>,
}

impl<'a> PersonIndex<'a> {
    /// Build the index from a person collection
    pub fn new(people: &'a [Person]) -> Self {
        let mut map = HashMap::with_capacity(people.len());
        for person in people {
            map.entry(person.id.as_str()).or_insert(person);
        }
        Self { map }
    }

    /// Look up a person by id
    pub fn get(&self, id: &str) -> Option<&'a Person> {
        self.map.get(id).copied()
    }

    /// Number of distinct ids in the index
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The first entry of `parents` that resolves to a record
    pub fn first_parent(&self, person: &Person) -> Option<&'a Person> {
        person.parents.first().and_then(|id| self.get(id))
    }

    /// All resolvable parents, in declaration order
    pub fn parents_of(&self, person: &Person) -> Vec<&'a Person> {
        person
            .parents
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// All resolvable partners, in declaration order
    pub fn partners_of(&self, person: &Person) -> Vec<&'a Person> {
        person
            .partners
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// All resolvable children, in declaration order
    pub fn children_of(&self, person: &Person) -> Vec<&'a Person> {
        person
            .children
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}

/// Parse a person collection from a JSON array
pub fn people_from_json(source: &str) -> Result<Vec<Person>, DatasetError> {
    Ok(serde_json::from_str(source)?)
}

/// Load a person collection from a JSON file
pub fn people_from_file(path: impl AsRef<Path>) -> Result<Vec<Person>, DatasetError> {
    let source = fs::read_to_string(path)?;
    people_from_json(&source)
}

/// Parse a global event list from a JSON array
pub fn events_from_json(source: &str) -> Result<Vec<Event>, DatasetError> {
    Ok(serde_json::from_str(source)?)
}

/// Load a global event list from a JSON file
pub fn events_from_file(path: impl AsRef<Path>) -> Result<Vec<Event>, DatasetError> {
    let source = fs::read_to_string(path)?;
    events_from_json(&source)
}
