//! In-memory project and task store.

use crate::{Error, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

/// Store-wide task identifier. Assigned from 1 upwards and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| Error::InvalidTaskId(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub done: bool,
}

/// A named, insertion-ordered list of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Project {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tasks: Vec::new(),
        }
    }
}

/// Owns every project in insertion order plus the id counter.
#[derive(Debug, Default)]
pub struct TaskStore {
    projects: Vec<Project>,
    last_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.projects
            .iter()
            .flat_map(|project| project.tasks.iter())
            .find(|task| task.id == id)
    }

    /// Insert `name` with no tasks. An existing project of the same name is
    /// emptied in place and keeps its position in the listing.
    pub fn add_project(&mut self, name: &str) {
        match self.projects.iter_mut().find(|project| project.name == name) {
            Some(existing) => {
                debug!(project = name, dropped = existing.tasks.len(), "project reset");
                existing.tasks.clear();
            }
            None => {
                debug!(project = name, "project added");
                self.projects.push(Project::new(name));
            }
        }
    }

    /// Append a task to `project`. No id is consumed when the project is missing.
    pub fn add_task(&mut self, project: &str, description: &str) -> Result<TaskId> {
        let index = self
            .projects
            .iter()
            .position(|candidate| candidate.name == project)
            .ok_or_else(|| Error::ProjectNotFound(project.to_string()))?;
        let id = self.next_id();
        self.projects[index].tasks.push(Task {
            id,
            description: description.to_string(),
            done: false,
        });
        debug!(project, %id, "task added");
        Ok(id)
    }

    /// Set the done flag of task `id`, wherever it lives. Returns whether a
    /// task matched; an unknown id leaves the store untouched.
    pub fn set_done(&mut self, id: TaskId, done: bool) -> bool {
        let task = self
            .projects
            .iter_mut()
            .flat_map(|project| project.tasks.iter_mut())
            .find(|task| task.id == id);
        match task {
            Some(task) => {
                task.done = done;
                debug!(%id, done, "task updated");
                true
            }
            None => {
                debug!(%id, "no task with id");
                false
            }
        }
    }

    /// Write the full listing: project name, one line per task, then a blank line.
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        for project in &self.projects {
            writeln!(out, "{}", project.name)?;
            for task in &project.tasks {
                let marker = if task.done { 'x' } else { ' ' };
                writeln!(out, "    [{marker}] {}: {}", task.id, task.description)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn next_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId(self.last_id)
    }
}
