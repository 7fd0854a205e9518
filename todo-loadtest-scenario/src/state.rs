//! Identifiers a session carries from one step to the next

use crate::error::ScenarioError;
use crate::ids::ResourceId;

/// The list and item a session currently owns.
///
/// An item id is only ever held together with a list id: dropping or
/// replacing the list drops the item as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    list_id: Option<ResourceId>,
    item_id: Option<ResourceId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_id(&self) -> Option<&ResourceId> {
        self.list_id.as_ref()
    }

    pub fn item_id(&self) -> Option<&ResourceId> {
        self.item_id.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.list_id.is_none()
    }

    /// Start over with a freshly created list, or with none
    pub fn replace_list(&mut self, list_id: Option<ResourceId>) {
        self.list_id = list_id;
        self.item_id = None;
    }

    /// Record an item created inside the current list
    pub fn set_item(&mut self, item_id: ResourceId) -> Result<(), ScenarioError> {
        if self.list_id.is_none() {
            return Err(ScenarioError::ItemWithoutList);
        }
        self.item_id = Some(item_id);
        Ok(())
    }

    pub fn clear_item(&mut self) {
        self.item_id = None;
    }

    pub fn clear_list(&mut self) {
        self.replace_list(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ResourceId {
        ResourceId::new(value)
    }

    #[test]
    fn test_item_requires_list() {
        let mut state = SessionState::new();
        assert!(matches!(state.set_item(id("I1")), Err(ScenarioError::ItemWithoutList)));
        assert_eq!(state.item_id(), None);

        state.replace_list(Some(id("L1")));
        state.set_item(id("I1")).unwrap();
        assert_eq!(state.item_id(), Some(&id("I1")));
    }

    #[test]
    fn test_clearing_list_clears_item() {
        let mut state = SessionState::new();
        state.replace_list(Some(id("L1")));
        state.set_item(id("I1")).unwrap();

        state.clear_list();
        assert!(state.is_empty());
        assert_eq!(state.item_id(), None);
    }

    #[test]
    fn test_new_list_drops_old_item() {
        let mut state = SessionState::new();
        state.replace_list(Some(id("L1")));
        state.set_item(id("I1")).unwrap();

        state.replace_list(Some(id("L2")));
        assert_eq!(state.list_id(), Some(&id("L2")));
        assert_eq!(state.item_id(), None);
    }

    #[test]
    fn test_clear_item_keeps_list() {
        let mut state = SessionState::new();
        state.replace_list(Some(id("L1")));
        state.set_item(id("I1")).unwrap();

        state.clear_item();
        assert_eq!(state.list_id(), Some(&id("L1")));
        assert_eq!(state.item_id(), None);
    }

}
