//! Command Execution
//!
//! Turns each `Command` into exactly one gateway call and the call's outcome
//! into the matching response event.

use std::collections::VecDeque;

use super::event::{Command, ListEvent};
use super::state::ListState;
use crate::domain::ItemId;
use crate::gateway::Gateway;

/// Run one command against the gateway
pub async fn execute<G: Gateway + ?Sized>(gateway: &G, command: Command) -> ListEvent {
    match command {
        Command::FetchAll { generation, order } => ListEvent::Loaded {
            generation,
            result: gateway.select_all(order).await,
        },
        Command::Insert { item } => ListEvent::Inserted {
            result: gateway.insert(&item).await,
        },
        Command::Update { op, id, patch, token } => {
            let result = gateway.update_where(&id, &patch).await;
            ListEvent::Updated {
                op,
                id,
                patch,
                token,
                result,
            }
        }
        Command::Delete { id } => {
            let result = gateway.delete_where(&id).await;
            ListEvent::Deleted { id, result }
        }
    }
}

/// Drives a `ListState` to quiescence, one gateway call at a time
///
/// Each public method is one user action; it returns once every gateway call
/// the action caused has been answered and reconciled.
pub struct ListController<G> {
    state: ListState,
    gateway: G,
}

impl<G: Gateway> ListController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            state: ListState::new(),
            gateway,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Apply `event` and every response it leads to
    pub async fn dispatch(&mut self, event: ListEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for command in self.state.handle(event) {
                queue.push_back(execute(&self.gateway, command).await);
            }
        }
    }

    pub async fn load(&mut self) {
        self.dispatch(ListEvent::Load).await;
    }

    pub async fn add(&mut self, name: impl Into<String>) {
        self.dispatch(ListEvent::Add(name.into())).await;
    }

    pub async fn toggle_complete(&mut self, id: ItemId, completed: bool) {
        self.dispatch(ListEvent::ToggleComplete { id, completed }).await;
    }

    pub async fn start_edit(&mut self, id: ItemId) {
        self.dispatch(ListEvent::StartEdit(id)).await;
    }

    pub async fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.dispatch(ListEvent::EditBufferChanged(text.into())).await;
    }

    pub async fn save_edit(&mut self) {
        self.dispatch(ListEvent::SaveEdit).await;
    }

    pub async fn delete(&mut self, id: ItemId) {
        self.dispatch(ListEvent::Delete(id)).await;
    }

    pub async fn reorder(&mut self, from: usize, to: usize) {
        self.dispatch(ListEvent::Reorder { from, to }).await;
    }
}
