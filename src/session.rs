//! Swipe history as an explicitly threaded session value.
//!
//! A session is never shared mutably: `record` consumes the value and returns
//! the extended one, so a snapshot handed to inference cannot change under it.

use crate::catalog::{BrandDesign, Catalog};
use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One like/dislike judgment, carrying a full copy of the judged design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeResult {
    pub brand_name: String,
    pub liked: bool,
    pub brand_design: BrandDesign,
    pub timestamp: DateTime<Utc>,
}

impl SwipeResult {
    pub fn new(design: &BrandDesign, liked: bool, timestamp: DateTime<Utc>) -> Self {
        Self {
            brand_name: design.name.clone(),
            liked,
            brand_design: design.clone(),
            timestamp,
        }
    }
}

/// Serialized swipe without the design payload, resolved against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRecord {
    pub brand_name: String,
    pub liked: bool,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Swipe file contents: a bare record list, or an object carrying the user id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SwipeLog {
    Records(Vec<SwipeRecord>),
    Session {
        #[serde(default, rename = "userId")]
        user_id: Option<String>,
        swipes: Vec<SwipeRecord>,
    },
}

impl SwipeLog {
    /// Resolve against `catalog`. `default_user` applies when the log names none.
    pub fn into_session(
        self,
        catalog: &Catalog,
        default_user: &str,
        now: DateTime<Utc>,
    ) -> Result<SwipeSession, CatalogError> {
        let (user_id, records) = match self {
            Self::Records(records) => (None, records),
            Self::Session { user_id, swipes } => (user_id, swipes),
        };
        let user_id = user_id
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| default_user.to_string());
        SwipeSession::from_records(catalog, user_id, &records, now)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeSession {
    user_id: String,
    swipes: Vec<SwipeResult>,
}

impl SwipeSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            swipes: Vec::new(),
        }
    }

    /// Append one swipe and return the extended session.
    #[must_use]
    pub fn record(mut self, design: &BrandDesign, liked: bool, at: DateTime<Utc>) -> Self {
        self.swipes.push(SwipeResult::new(design, liked, at));
        self
    }

    /// Build a session from stored records. Records without a timestamp get `now`.
    pub fn from_records(
        catalog: &Catalog,
        user_id: impl Into<String>,
        records: &[SwipeRecord],
        now: DateTime<Utc>,
    ) -> Result<Self, CatalogError> {
        records.iter().try_fold(Self::new(user_id), |session, record| {
            let design = catalog
                .get(&record.brand_name)
                .ok_or_else(|| CatalogError::UnknownBrand(record.brand_name.clone()))?;
            Ok(session.record(design, record.liked, record.timestamp.unwrap_or(now)))
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn swipes(&self) -> &[SwipeResult] {
        &self.swipes
    }

    pub fn liked(&self) -> impl Iterator<Item = &SwipeResult> {
        self.swipes.iter().filter(|s| s.liked)
    }

    pub fn disliked(&self) -> impl Iterator<Item = &SwipeResult> {
        self.swipes.iter().filter(|s| !s.liked)
    }

    pub fn total(&self) -> usize {
        self.swipes.len()
    }

    pub fn liked_count(&self) -> usize {
        self.liked().count()
    }

    pub fn disliked_count(&self) -> usize {
        self.total() - self.liked_count()
    }

    /// Inference needs at least one liked design.
    pub fn can_infer(&self) -> bool {
        self.swipes.iter().any(|s| s.liked)
    }

    /// Next catalog entry to show, in catalog order.
    pub fn next_design<'c>(&self, catalog: &'c Catalog) -> Option<&'c BrandDesign> {
        catalog.designs().get(self.swipes.len())
    }

    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.swipes.len() >= catalog.len()
    }

    pub fn records(&self) -> Vec<SwipeRecord> {
        self.swipes
            .iter()
            .map(|s| SwipeRecord {
                brand_name: s.brand_name.clone(),
                liked: s.liked,
                timestamp: Some(s.timestamp),
            })
            .collect()
    }
}
