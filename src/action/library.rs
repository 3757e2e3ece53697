use super::builtin::default_actions;
use super::definition::Action;
use crate::error::GraphError;

/// The set of actions available for binding: a read-only built-in collection
/// merged with the user's own, concatenated at lookup time.
///
/// User actions are searched first, so a user action may shadow a built-in
/// with the same id. Built-ins are never mutated and never deleted.
#[derive(Debug, Clone)]
pub struct ActionLibrary {
    builtins: Vec<Action>,
    user: Vec<Action>,
}

impl Default for ActionLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLibrary {
    /// Creates a library containing only the built-in action set.
    pub fn new() -> Self {
        Self {
            builtins: default_actions(),
            user: Vec::new(),
        }
    }

    /// Creates a library with the built-ins plus the given user actions.
    pub fn with_actions(user: Vec<Action>) -> Self {
        Self {
            builtins: default_actions(),
            user,
        }
    }

    /// Looks up an action by id, searching user actions before built-ins.
    pub fn get(&self, id: &str) -> Option<&Action> {
        self.user
            .iter()
            .find(|a| a.id == id)
            .or_else(|| self.builtins.iter().find(|a| a.id == id))
    }

    /// Adds or replaces a user action. Replacing only ever touches the user
    /// set; a built-in with the same id is shadowed, not overwritten.
    pub fn add(&mut self, action: Action) {
        if let Some(existing) = self.user.iter_mut().find(|a| a.id == action.id) {
            *existing = action;
        } else {
            self.user.push(action);
        }
    }

    /// Removes a user action by id.
    pub fn remove(&mut self, id: &str) -> Result<(), GraphError> {
        if let Some(pos) = self.user.iter().position(|a| a.id == id) {
            self.user.remove(pos);
            return Ok(());
        }
        if self.builtins.iter().any(|a| a.id == id) {
            return Err(GraphError::BuiltInActionImmutable {
                action_id: id.to_string(),
            });
        }
        Ok(())
    }

    /// All actions in lookup order: user first, then built-ins.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.user.iter().chain(self.builtins.iter())
    }

    pub fn builtins(&self) -> &[Action] {
        &self.builtins
    }

    pub fn user_actions(&self) -> &[Action] {
        &self.user
    }
}
