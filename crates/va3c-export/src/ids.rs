use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the unique identifiers stamped on materials and scene nodes.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs, hyphenated, without braces.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic ids for reproducible documents: `<prefix>-<n>`, n counting from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
