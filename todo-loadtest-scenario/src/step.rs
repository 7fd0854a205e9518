//! The catalog of API calls a session makes

use crate::state::SessionState;
use std::fmt;
use todo_loadtest_http::HttpMethod;

const OK: &[u16] = &[200];
const CREATED: &[u16] = &[201];
const DELETED: &[u16] = &[200, 204];

/// Identifiers a step needs before it can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Nothing,
    List,
    ListAndItem,
}

/// One API call of the scenario, in execution order, followed by the two
/// end-of-session cleanup calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    ListAll,
    CreateList,
    GetList,
    UpdateList,
    ListItems,
    CreateItem,
    GetItem,
    UpdateItem,
    ItemsByState,
    DeleteItem,
    DeleteList,
    CleanupItem,
    CleanupList,
}

impl Step {
    /// Steps of one iteration
    pub const ITERATION: [Step; 11] = [
        Step::ListAll,
        Step::CreateList,
        Step::GetList,
        Step::UpdateList,
        Step::ListItems,
        Step::CreateItem,
        Step::GetItem,
        Step::UpdateItem,
        Step::ItemsByState,
        Step::DeleteItem,
        Step::DeleteList,
    ];

    /// Name the measurement is reported under
    pub fn name(self) -> &'static str {
        match self {
            Step::ListAll => "Get All Lists",
            Step::CreateList => "Create List",
            Step::GetList => "Get List by ID",
            Step::UpdateList => "Update List by ID",
            Step::ListItems => "Get All Items in List",
            Step::CreateItem => "Create List Item",
            Step::GetItem => "Get List Item by ID",
            Step::UpdateItem => "Update List Item",
            Step::ItemsByState => "Get List Items by State",
            Step::DeleteItem => "Delete List Item",
            Step::DeleteList => "Delete List",
            Step::CleanupItem => "Cleanup Delete Item",
            Step::CleanupList => "Cleanup Delete List",
        }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Step::ListAll
            | Step::GetList
            | Step::ListItems
            | Step::GetItem
            | Step::ItemsByState => HttpMethod::Get,
            Step::CreateList | Step::CreateItem => HttpMethod::Post,
            Step::UpdateList | Step::UpdateItem => HttpMethod::Put,
            Step::DeleteItem | Step::DeleteList | Step::CleanupItem | Step::CleanupList => {
                HttpMethod::Delete
            }
        }
    }

    /// Status codes that count as success
    pub fn accepted(self) -> &'static [u16] {
        match self.method() {
            HttpMethod::Post => CREATED,
            HttpMethod::Delete => DELETED,
            HttpMethod::Get | HttpMethod::Put => OK,
        }
    }

    pub fn requirement(self) -> Requirement {
        match self {
            Step::ListAll | Step::CreateList => Requirement::Nothing,
            Step::GetList
            | Step::UpdateList
            | Step::ListItems
            | Step::CreateItem
            | Step::ItemsByState
            | Step::DeleteList
            | Step::CleanupList => Requirement::List,
            Step::GetItem | Step::UpdateItem | Step::DeleteItem | Step::CleanupItem => {
                Requirement::ListAndItem
            }
        }
    }

    /// Request path for the identifiers in `state`, or `None` when the step's
    /// requirement is not met. `item_state` fills the state query segment.
    pub fn path(self, state: &SessionState, item_state: &str) -> Option<String> {
        match self.requirement() {
            Requirement::Nothing => Some("/lists".to_string()),
            Requirement::List => {
                let list = state.list_id()?;
                Some(match self {
                    Step::ListItems | Step::CreateItem => format!("/lists/{}/items", list),
                    Step::ItemsByState => format!("/lists/{}/state/{}", list, item_state),
                    _ => format!("/lists/{}", list),
                })
            }
            Requirement::ListAndItem => {
                let list = state.list_id()?;
                let item = state.item_id()?;
                Some(format!("/lists/{}/items/{}", list, item))
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
