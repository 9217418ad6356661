//! Insertion-ordered in-memory task cache owned by the task store.

use std::collections::HashMap;

use crate::task::domain::{Task, TaskId};

/// Cached tasks plus the flags deciding whether the cache may answer a list
/// read on its own.
///
/// A clean cache answers list reads once it holds any task, or once a full
/// list has been merged from a data source (`primed`), so a loaded cache
/// that has since been emptied still answers. `dirty` forces the next list
/// read to go to the remote source.
#[derive(Debug, Default)]
pub(super) struct TaskCache {
    entries: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
    primed: bool,
    dirty: bool,
}

impl TaskCache {
    pub(super) const fn is_fresh(&self) -> bool {
        !self.dirty && (self.primed || !self.order.is_empty())
    }

    pub(super) const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(super) const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(super) fn get(&self, id: &TaskId) -> Option<&Task> {
        self.entries.get(id)
    }

    pub(super) fn tasks(&self) -> Vec<Task> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).cloned())
            .collect()
    }

    pub(super) fn upsert(&mut self, task: Task) {
        if !self.entries.contains_key(task.id()) {
            self.order.push(task.id().clone());
        }
        self.entries.insert(task.id().clone(), task);
    }

    /// Merges a full list loaded from a data source.
    pub(super) fn merge_loaded(&mut self, tasks: &[Task]) {
        for task in tasks {
            self.upsert(task.clone());
        }
        self.primed = true;
    }

    /// Merges a full list fetched from the remote source and clears the
    /// dirty flag.
    pub(super) fn merge_refreshed(&mut self, tasks: &[Task]) {
        self.merge_loaded(tasks);
        self.dirty = false;
    }

    pub(super) fn remove(&mut self, id: &TaskId) {
        if self.entries.remove(id).is_some() {
            self.order.retain(|entry| entry != id);
        }
    }

    pub(super) fn retain(&mut self, keep: impl Fn(&Task) -> bool) {
        self.entries.retain(|_, task| keep(task));
        let entries = &self.entries;
        self.order.retain(|id| entries.contains_key(id));
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
