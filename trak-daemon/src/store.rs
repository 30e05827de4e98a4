use std::{
    collections::BTreeMap,
    fmt::Display,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use chrono::Utc;
use trak_types::{CreateTask, Task, TaskId, UpdateTask};

#[derive(Debug)]
pub struct TaskStore {
    tasks: Mutex<BTreeMap<TaskId, Task>>,
    id_seq: AtomicU64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(BTreeMap::new()),
            id_seq: AtomicU64::new(1),
        }
    }

    pub fn create(&self, payload: CreateTask) -> Task {
        // Ids come from the sequence alone, never from map occupancy, so an id
        // freed by delete is never handed out again.
        let id = TaskId(self.id_seq.fetch_add(1, Ordering::Relaxed));
        let task = Task::new_with_current_time(id, payload);

        self.tasks.lock().unwrap().insert(id, task.clone());
        task
    }

    pub fn get(&self, id: TaskId) -> Result<Task, StoreError> {
        self.tasks
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn list(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().values().cloned().collect()
    }

    pub fn update(&self, id: TaskId, update: UpdateTask) -> Result<Task, StoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(description) = update.description {
            task.description = Some(description);
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(deadline) = update.deadline {
            task.deadline = Some(deadline);
        }
        // title, status and created_at are immutable here
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    pub fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        match self.tasks.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "No task with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}
