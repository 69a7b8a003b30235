//! Writing a formation: header first, then a full replacement of its slot rows.

use std::future::Future;

use dioxus_logger::tracing;
use sea_orm::DbErr;

use crate::{
    model::formation::{SlotMap, SlotPosition},
    server::error::formation::{SyncError, SyncStep},
};

/// Header columns written on save.
#[derive(Clone, Debug, PartialEq)]
pub struct FormationHeader {
    /// Known header id; the (owner, advisor, label) key is used when absent
    pub id: Option<i32>,
    pub owner_key: String,
    pub advisor_key: String,
    pub label: String,
    pub request_comment: Option<String>,
    pub answer_comment: Option<String>,
}

/// A position that has an officer assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotRow {
    pub position: SlotPosition,
    pub officer_id: i32,
    pub inherit_skill1_id: Option<i32>,
    pub inherit_skill2_id: Option<i32>,
}

impl SlotRow {
    /// One row per position with an officer, empty positions are omitted.
    pub fn from_slots(slots: &SlotMap) -> Vec<SlotRow> {
        slots
            .occupied()
            .map(|(position, officer_id, slot)| SlotRow {
                position,
                officer_id,
                inherit_skill1_id: slot.inherit1_id,
                inherit_skill2_id: slot.inherit2_id,
            })
            .collect()
    }
}

/// Row-level writes needed to persist a formation.
pub trait FormationStore {
    /// Insert or update the header, returning its id.
    fn upsert_header(
        &self,
        header: &FormationHeader,
    ) -> impl Future<Output = Result<i32, DbErr>> + Send;

    fn delete_slots(&self, formation_id: i32) -> impl Future<Output = Result<(), DbErr>> + Send;

    fn insert_slots(
        &self,
        formation_id: i32,
        rows: &[SlotRow],
    ) -> impl Future<Output = Result<(), DbErr>> + Send;
}

pub struct FormationSynchronizer<'a, S: FormationStore> {
    store: &'a S,
}

impl<'a, S: FormationStore + Sync> FormationSynchronizer<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Upserts the header, deletes the previous slots and inserts the current ones.
    ///
    /// Stops at the first failing step. Callers wanting all-or-nothing behavior pass a store
    /// bound to a transaction.
    ///
    /// # Arguments
    /// - `header` ([`FormationHeader`]): Header columns, with the id when the client knows it
    /// - `slots` ([`SlotMap`]): All three positions. Positions without an officer are not
    ///   written, so they load back empty.
    ///
    /// # Returns
    /// - `Ok(i32)`: Id of the header row
    /// - `Err(SyncError)`: The failing [`SyncStep`] and the underlying database error
    pub async fn persist(
        &self,
        header: &FormationHeader,
        slots: &SlotMap,
    ) -> Result<i32, SyncError> {
        let formation_id = self
            .store
            .upsert_header(header)
            .await
            .map_err(|source| step_failed(SyncStep::UpsertHeader, source))?;

        self.store
            .delete_slots(formation_id)
            .await
            .map_err(|source| step_failed(SyncStep::DeleteSlots, source))?;

        let rows = SlotRow::from_slots(slots);
        if !rows.is_empty() {
            self.store
                .insert_slots(formation_id, &rows)
                .await
                .map_err(|source| step_failed(SyncStep::InsertSlots, source))?;
        }

        tracing::debug!(
            formation_id = formation_id,
            slots = rows.len(),
            "Formation written"
        );

        Ok(formation_id)
    }
}

fn step_failed(step: SyncStep, source: DbErr) -> SyncError {
    SyncError { step, source }
}
