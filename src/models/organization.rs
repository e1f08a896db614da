use serde::{Deserialize, Serialize};

use crate::models::OrgRef;

// Represents a cost-center or department used to bucket transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub name: String,
}

impl Organization {
    pub fn new(id: impl Into<String>, company: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            name: name.into(),
        }
    }
}

/// Ordered organization set. Position in the list is the chart index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Organizations(Vec<Organization>);

impl Organizations {
    pub fn new(orgs: Vec<Organization>) -> Self {
        Self(orgs)
    }

    pub fn get(&self, index: usize) -> Option<&Organization> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Maps either reference form onto a position in this set.
    pub fn resolve(&self, org: &OrgRef) -> Option<usize> {
        match org {
            OrgRef::Index(i) if *i < self.0.len() => Some(*i),
            OrgRef::Index(_) => None,
            OrgRef::Id(id) => self.0.iter().position(|o| &o.id == id),
        }
    }

    pub fn name_of(&self, org: &OrgRef) -> Option<&str> {
        self.resolve(org)
            .and_then(|i| self.0.get(i))
            .map(|o| o.name.as_str())
    }
}

impl From<Vec<Organization>> for Organizations {
    fn from(value: Vec<Organization>) -> Self {
        Self(value)
    }
}
