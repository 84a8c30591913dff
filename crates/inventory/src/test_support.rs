//! Recording observer shared by unit tests.

use std::sync::{Arc, Mutex};

use stockwatch_core::SubscriberId;
use stockwatch_events::Observer;

use crate::item::Item;

#[derive(Debug)]
pub(crate) struct Recorder {
    id: SubscriberId,
    seen: Mutex<Vec<(String, u64)>>,
}

impl Recorder {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            id: SubscriberId::new(),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn id(&self) -> SubscriberId {
        self.id
    }

    pub(crate) fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub(crate) fn seen(&self) -> Vec<(String, u64)> {
        self.seen.lock().unwrap().clone()
    }
}

impl Observer<Item> for Recorder {
    fn subscriber_id(&self) -> SubscriberId {
        self.id
    }

    fn update(&self, subject: &Item) {
        self.seen
            .lock()
            .unwrap()
            .push((subject.name().to_string(), subject.stock()));
    }
}
