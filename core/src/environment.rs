//! Dependency injection traits.
//!
//! All external dependencies are abstracted behind traits and injected via
//! the Environment parameter of a reducer. Production implementations live
//! next to the traits; deterministic test doubles live in the testing crate.

use uuid::Uuid;

/// Identifier generation - abstracts id creation for testability
///
/// Reducers must stay deterministic, so fresh identifiers come from an
/// injected generator rather than from `Uuid::new_v4()` inline.
///
/// # Examples
///
/// ```
/// use composable_todo_core::environment::{IdGenerator, UuidGenerator};
///
/// let ids = UuidGenerator;
/// let a = ids.generate();
/// let b = ids.generate();
/// assert_ne!(a, b);
/// ```
pub trait IdGenerator: Send + Sync {
    /// Generate a fresh unique identifier
    fn generate(&self) -> Uuid;
}

/// Production id generator backed by random v4 UUIDs
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_produces_unique_ids() {
        let ids = UuidGenerator;
        assert_ne!(ids.generate(), ids.generate());
    }

    #[test]
    fn uuid_generator_is_object_safe() {
        let ids: Box<dyn IdGenerator> = Box::new(UuidGenerator);
        let id = ids.generate();
        assert!(!id.is_nil());
    }
}
