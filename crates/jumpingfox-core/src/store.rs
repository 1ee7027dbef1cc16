//! In-memory data store for foxes and jump records.
//!
//! Plain lists behind a single mutex, scanned linearly. Ids auto-increment
//! and are unique for the lifetime of the store; nothing is persisted. The
//! seeded variant fills in a handful of foxes with randomized jump history so
//! the API has data to serve from the first request.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Utc};

use crate::model::{Fox, FoxInput, JumpInput, JumpRecord};

const SEED_FOXES: [(&str, &str, i32, i64, bool); 5] = [
    ("Red Runner", "Red", 5, 10, true),
    ("Silver Leaper", "Silver", 7, 8, true),
    ("Golden Jumper", "Golden", 6, 5, true),
    ("Arctic Springer", "White", 8, 3, false),
    ("Midnight Hopper", "Black", 9, 1, true),
];

const LOCATIONS: [&str; 6] = [
    "Forest Clearing",
    "Mountain Ridge",
    "Valley Floor",
    "River Bank",
    "Meadow Edge",
    "Rock Formation",
];

struct StoreInner {
    foxes: Vec<Fox>,
    jumps: Vec<JumpRecord>,
    next_fox_id: u32,
    next_jump_id: u32,
}

/// Thread-safe in-memory store. Cheap to construct, volatile by design.
pub struct DataStore {
    inner: Mutex<StoreInner>,
}

impl DataStore {
    /// Empty store, used by tests that want full control over contents.
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                foxes: Vec::new(),
                jumps: Vec::new(),
                next_fox_id: 1,
                next_jump_id: 1,
            }),
        }
    }

    /// Store pre-populated with the demo fox roster and 2-5 random jump
    /// records per fox.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut inner = store.lock();
            let now = Utc::now();

            for (name, color, jump_height, age_days, is_active) in SEED_FOXES {
                let id = inner.next_fox_id;
                inner.next_fox_id += 1;
                inner.foxes.push(Fox {
                    id,
                    name: name.to_owned(),
                    color: color.to_owned(),
                    jump_height,
                    created_at: now - Duration::days(age_days),
                    is_active,
                });

                for _ in 0..fastrand::i32(2..6) {
                    let jump_id = inner.next_jump_id;
                    inner.next_jump_id += 1;
                    inner.jumps.push(JumpRecord {
                        id: jump_id,
                        fox_id: id,
                        height: fastrand::i32(jump_height - 2..jump_height + 3),
                        jump_time: now - Duration::days(fastrand::i64(0..30)),
                        location: LOCATIONS[fastrand::usize(..LOCATIONS.len())].to_owned(),
                    });
                }
            }
            tracing::debug!(
                foxes = inner.foxes.len(),
                jumps = inner.jumps.len(),
                "seeded data store"
            );
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn all_foxes(&self) -> Vec<Fox> {
        self.lock().foxes.clone()
    }

    pub fn fox(&self, id: u32) -> Option<Fox> {
        self.lock().foxes.iter().find(|f| f.id == id).cloned()
    }

    pub fn create_fox(&self, input: FoxInput) -> Fox {
        let mut inner = self.lock();
        let id = inner.next_fox_id;
        inner.next_fox_id += 1;
        let fox = Fox {
            id,
            name: input.name,
            color: input.color,
            jump_height: input.jump_height,
            created_at: Utc::now(),
            is_active: input.is_active,
        };
        inner.foxes.push(fox.clone());
        fox
    }

    /// Overwrite the mutable fields of an existing fox. Returns the updated
    /// record, or `None` when the id is unknown.
    pub fn update_fox(&self, id: u32, input: FoxInput) -> Option<Fox> {
        let mut inner = self.lock();
        let fox = inner.foxes.iter_mut().find(|f| f.id == id)?;
        fox.name = input.name;
        fox.color = input.color;
        fox.jump_height = input.jump_height;
        fox.is_active = input.is_active;
        Some(fox.clone())
    }

    /// Remove a fox and all of its jump records. Returns false when the id is
    /// unknown.
    pub fn delete_fox(&self, id: u32) -> bool {
        let mut inner = self.lock();
        let before = inner.foxes.len();
        inner.foxes.retain(|f| f.id != id);
        if inner.foxes.len() == before {
            return false;
        }
        inner.jumps.retain(|j| j.fox_id != id);
        true
    }

    /// All jump records, or only those belonging to `fox_id` when given.
    pub fn jumps(&self, fox_id: Option<u32>) -> Vec<JumpRecord> {
        let inner = self.lock();
        match fox_id {
            Some(fid) => inner.jumps.iter().filter(|j| j.fox_id == fid).cloned().collect(),
            None => inner.jumps.clone(),
        }
    }

    pub fn create_jump(&self, input: JumpInput) -> JumpRecord {
        let mut inner = self.lock();
        let id = inner.next_jump_id;
        inner.next_jump_id += 1;
        let jump = JumpRecord {
            id,
            fox_id: input.fox_id,
            height: input.height,
            jump_time: Utc::now(),
            location: input.location,
        };
        inner.jumps.push(jump.clone());
        jump
    }

    pub fn fox_count(&self) -> usize {
        self.lock().foxes.len()
    }

    pub fn jump_count(&self) -> usize {
        self.lock().jumps.len()
    }
}
