//! Wire types for the activities served by `GET /activities`.

use serde::de::MapAccess;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt;

/// A single capacity-bounded activity and its roster.
///
/// The server is authoritative for every field: the roster is never checked
/// against `max_participants` on this side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity as reported by the server.
    ///
    /// Negative when the server has over-allocated the activity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The full set of activities returned by one fetch.
///
/// Entries keep the order in which the server listed them, which is also the
/// display order. A catalog is never patched: every refresh builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog(Vec<(String, Activity)>);

impl ActivityCatalog {
    /// Creates a new, empty `ActivityCatalog`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts an activity, replacing any earlier entry with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, activity)),
            None => {
                self.0.push((name, activity));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Activity names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates `(name, activity)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }
}

impl FromIterator<(String, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

// A hand-written visitor keeps the key order of the JSON object; a HashMap would lose it.
impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut catalog = ActivityCatalog::new();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
