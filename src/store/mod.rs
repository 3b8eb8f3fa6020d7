//! Ownership of the project collection.
//!
//! The engine never touches storage: callers take a snapshot from a
//! [`ProjectStore`], evaluate it, and write edits back through the store as
//! whole-record replacements.

pub mod fixtures;
mod ids;
mod memory;

pub use ids::IdGenerator;
pub use memory::InMemoryStore;

use im::Vector;

use crate::core::{Project, ProjectId};
use crate::errors::Result;

/// Repository over project records.
///
/// Writes validate the submitted form and reject it with
/// [`crate::errors::Error::Validation`] listing every bad field.
pub trait ProjectStore {
    /// Cheap, immutable snapshot of every record in insertion order
    fn load_all(&self) -> Vector<Project>;

    fn get(&self, id: &str) -> Option<&Project>;

    /// Look a project up by id, falling back to a case-insensitive code match
    fn find(&self, id_or_code: &str) -> Option<&Project>;

    /// Insert a new record under a freshly generated id, ignoring any id the
    /// draft carries. Returns the assigned id.
    fn create(&mut self, draft: Project) -> Result<ProjectId>;

    /// Replace the record with the same id. Unknown ids are an error.
    fn update(&mut self, project: Project) -> Result<()>;

    /// Replace by id when present, otherwise insert. A draft without an id
    /// is created under a new one. Returns the record's id.
    fn upsert(&mut self, project: Project) -> Result<ProjectId>;

    fn remove(&mut self, id: &str) -> Result<Project>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
