use im::Vector;

use super::ids::IdGenerator;
use super::ProjectStore;
use crate::core::{Project, ProjectId};
use crate::errors::{Error, Result};
use crate::validation::check_project;

/// Volatile store backed by a persistent vector, so snapshots handed to
/// readers share structure with the live collection and stay unaffected by
/// later writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    projects: Vector<Project>,
    ids: IdGenerator,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with records that already carry ids. Records without an
    /// id get one; duplicate ids keep the last record.
    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Result<Self> {
        let mut store = Self::new();
        for project in projects {
            store.upsert(project)?;
        }
        tracing::debug!(count = store.len(), "seeded in-memory store");
        Ok(store)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }
}

impl ProjectStore for InMemoryStore {
    fn load_all(&self) -> Vector<Project> {
        self.projects.clone()
    }

    fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn find(&self, id_or_code: &str) -> Option<&Project> {
        self.get(id_or_code).or_else(|| {
            self.projects
                .iter()
                .find(|p| p.code.eq_ignore_ascii_case(id_or_code))
        })
    }

    fn create(&mut self, mut draft: Project) -> Result<ProjectId> {
        check_project(&draft)?;
        let id = self.ids.next_id();
        draft.id = id.clone();
        tracing::debug!(%id, code = %draft.code, "created project");
        self.projects.push_back(draft);
        Ok(id)
    }

    fn update(&mut self, project: Project) -> Result<()> {
        let index = self
            .position(&project.id)
            .ok_or_else(|| Error::NotFound(project.id.clone()))?;
        check_project(&project)?;
        tracing::debug!(id = %project.id, "replaced project");
        self.projects.set(index, project);
        Ok(())
    }

    fn upsert(&mut self, project: Project) -> Result<ProjectId> {
        if project.id.is_empty() {
            return self.create(project);
        }

        let id = project.id.clone();
        if self.position(&id).is_some() {
            self.update(project)?;
        } else if self.ids.is_issued(&id) {
            return Err(Error::IdRetired(id));
        } else {
            check_project(&project)?;
            self.ids.reserve(&id);
            self.projects.push_back(project);
        }
        Ok(id)
    }

    fn remove(&mut self, id: &str) -> Result<Project> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        tracing::debug!(%id, "removed project");
        Ok(self.projects.remove(index))
    }

    fn len(&self) -> usize {
        self.projects.len()
    }
}
