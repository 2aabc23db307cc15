use crate::model::property::Property;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The property collection and its id counter, always locked together.
#[derive(Debug)]
pub struct PropertyStore {
    pub(crate) properties: Vec<Property>,
    pub(crate) next_id: i64,
}

pub type SharedPropertyStore = Arc<Mutex<PropertyStore>>;

impl Default for PropertyStore {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            next_id: 1,
        }
    }
}

impl PropertyStore {
    pub fn shared() -> SharedPropertyStore {
        Arc::new(Mutex::new(Self::default()))
    }

    pub(crate) fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn position(&self, id: i64) -> Option<usize> {
        self.properties.iter().position(|property| property.id == id)
    }
}

/// Current time at the precision timestamps are rendered with.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// A timestamp strictly after `previous`, even when the clock has not moved
/// a full millisecond.
pub(crate) fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::milliseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut store = PropertyStore::default();
        assert_eq!(store.allocate_id(), 1);
        assert_eq!(store.allocate_id(), 2);
        assert_eq!(store.next_id, 3);
    }

    #[test]
    fn advance_never_repeats_a_timestamp() {
        let later = now() + Duration::seconds(60);
        assert_eq!(advance(later), later + Duration::milliseconds(1));
        let current = now();
        assert!(advance(current) > current);
    }
}
