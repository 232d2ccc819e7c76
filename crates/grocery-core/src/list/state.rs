//! List State Machine
//!
//! The in-memory ordered list, loading flag, current error and edit target.
//! `handle` is the only mutator: it applies an event and returns the gateway
//! calls to issue. Intents never touch records directly; records change only
//! when the matching gateway response reports success (reorder excepted).

use std::collections::HashMap;

use super::event::{Command, ListEvent, RequestToken};
use crate::domain::{Item, ItemId, ItemPatch, NewItem, SortOrder};
use crate::error::GatewayError;
use crate::messages::{Messages, Operation};

/// The single current failure shown above the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    pub op: Operation,
    pub message: String,
}

impl OperationError {
    /// Localized prefix followed by the gateway message
    pub fn display(&self, messages: &Messages) -> String {
        format!("{}{}", messages.error_prefix(self.op), self.message)
    }
}

/// Record field an update writes; updates only supersede each other
/// within the same field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Completed,
    Name,
}

impl Field {
    fn written_by(op: Operation) -> Self {
        match op {
            Operation::Edit => Field::Name,
            _ => Field::Completed,
        }
    }
}

/// Record currently shown in editable form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ItemId,
    pub buffer: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListState {
    items: Vec<Item>,
    loading: bool,
    error: Option<OperationError>,
    /// Add input contents
    draft: String,
    editing: Option<EditSession>,
    /// Latest update token per record field with a request outstanding
    in_flight: HashMap<(ItemId, Field), RequestToken>,
    next_token: u64,
    load_generation: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.editing.as_ref().is_some_and(|s| s.id == *id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    /// Apply one event; returns the gateway calls it requires
    pub fn handle(&mut self, event: ListEvent) -> Vec<Command> {
        match event {
            ListEvent::Load => {
                self.loading = true;
                self.load_generation += 1;
                vec![Command::FetchAll {
                    generation: self.load_generation,
                    order: SortOrder::newest_first(),
                }]
            }
            ListEvent::DraftChanged(text) => {
                self.draft = text;
                Vec::new()
            }
            ListEvent::Add(name) => {
                if name.trim().is_empty() {
                    return Vec::new();
                }
                vec![Command::Insert {
                    item: NewItem::named(name),
                }]
            }
            ListEvent::ToggleComplete { id, completed } => {
                if self.get(&id).is_none() {
                    log::warn!("[LIST] toggle ignored, no record {}", id);
                    return Vec::new();
                }
                let token = self.issue_token(&id, Field::Completed);
                vec![Command::Update {
                    op: Operation::Toggle,
                    id,
                    patch: ItemPatch::completed(!completed),
                    token,
                }]
            }
            ListEvent::StartEdit(id) => {
                match self.get(&id).map(|item| item.name.clone()) {
                    Some(buffer) => self.editing = Some(EditSession { id, buffer }),
                    None => log::warn!("[LIST] edit ignored, no record {}", id),
                }
                Vec::new()
            }
            ListEvent::EditBufferChanged(text) => {
                if let Some(session) = self.editing.as_mut() {
                    session.buffer = text;
                }
                Vec::new()
            }
            ListEvent::SaveEdit => {
                let Some(session) = self.editing.clone() else {
                    return Vec::new();
                };
                if session.buffer.trim().is_empty() {
                    return Vec::new();
                }
                let token = self.issue_token(&session.id, Field::Name);
                vec![Command::Update {
                    op: Operation::Edit,
                    id: session.id,
                    patch: ItemPatch::renamed(session.buffer),
                    token,
                }]
            }
            ListEvent::Delete(id) => {
                if self.get(&id).is_none() {
                    log::warn!("[LIST] delete ignored, no record {}", id);
                    return Vec::new();
                }
                vec![Command::Delete { id }]
            }
            ListEvent::Reorder { from, to } => {
                self.reorder(from, to);
                Vec::new()
            }
            ListEvent::Loaded { generation, result } => {
                self.on_loaded(generation, result);
                Vec::new()
            }
            ListEvent::Inserted { result } => {
                self.on_inserted(result);
                Vec::new()
            }
            ListEvent::Updated {
                op,
                id,
                patch,
                token,
                result,
            } => {
                self.on_updated(op, id, patch, token, result);
                Vec::new()
            }
            ListEvent::Deleted { id, result } => {
                self.on_deleted(id, result);
                Vec::new()
            }
        }
    }

    fn issue_token(&mut self, id: &ItemId, field: Field) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.in_flight.insert((id.clone(), field), token);
        token
    }

    /// True when `token` is the latest update of `field` on `id`; clears it
    fn settle(&mut self, id: &ItemId, field: Field, token: RequestToken) -> bool {
        let key = (id.clone(), field);
        if self.in_flight.get(&key) != Some(&token) {
            log::debug!("[LIST] discarding superseded response {:?} for {}", token, id);
            return false;
        }
        self.in_flight.remove(&key);
        true
    }

    fn fail(&mut self, op: Operation, err: GatewayError) {
        log::error!("[LIST] {} failed: {}", op, err);
        self.error = Some(OperationError {
            op,
            message: err.to_string(),
        });
    }

    fn reorder(&mut self, from: usize, to: usize) {
        let len = self.items.len();
        if from >= len || to >= len {
            log::warn!("[LIST] reorder {} -> {} out of range (len {})", from, to, len);
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    /// Drop the edit target if its record is gone
    fn retain_edit_target(&mut self) {
        let stale = self
            .editing
            .as_ref()
            .is_some_and(|session| self.get(&session.id).is_none());
        if stale {
            self.editing = None;
        }
    }

    fn on_loaded(&mut self, generation: u64, result: Result<Vec<Item>, GatewayError>) {
        if generation != self.load_generation {
            log::debug!("[LIST] discarding stale load {}", generation);
            return;
        }
        self.loading = false;
        match result {
            Ok(rows) => {
                log::info!("[LIST] loaded {} items", rows.len());
                let mut items: Vec<Item> = Vec::with_capacity(rows.len());
                for row in rows {
                    if !items.iter().any(|item| item.id == row.id) {
                        items.push(row);
                    }
                }
                self.items = items;
                self.retain_edit_target();
            }
            Err(err) => self.fail(Operation::Load, err),
        }
    }

    fn on_inserted(&mut self, result: Result<Vec<Item>, GatewayError>) {
        match result {
            Ok(rows) => {
                let mut fresh: Vec<Item> = Vec::with_capacity(rows.len());
                for row in rows {
                    if self.get(&row.id).is_none() && !fresh.iter().any(|item| item.id == row.id) {
                        fresh.push(row);
                    }
                }
                self.items.splice(0..0, fresh);
                self.draft.clear();
            }
            Err(err) => self.fail(Operation::Add, err),
        }
    }

    fn on_updated(
        &mut self,
        op: Operation,
        id: ItemId,
        patch: ItemPatch,
        token: RequestToken,
        result: Result<(), GatewayError>,
    ) {
        if !self.settle(&id, Field::written_by(op), token) {
            return;
        }
        match result {
            Ok(()) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    patch.apply_to(item);
                }
                if op == Operation::Edit && self.is_editing(&id) {
                    self.editing = None;
                }
            }
            Err(err) => self.fail(op, err),
        }
    }

    fn on_deleted(&mut self, id: ItemId, result: Result<(), GatewayError>) {
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                // Updates still out for this record have nothing left to reconcile
                self.in_flight.retain(|(pending, _), _| *pending != id);
                if self.is_editing(&id) {
                    self.editing = None;
                }
            }
            Err(err) => self.fail(Operation::Delete, err),
        }
    }
}
