//! Loading and saving formations.

pub mod sync;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    formation::{
        board::build_board,
        error::FormationError,
        label::{is_valid_label, MAX_FORMATIONS},
    },
    model::{
        formation::{
            FormationBoardDto, FormationDto, FormationKey, SaveFormationDto, SavedFormationDto,
            SlotMap, SlotPosition,
        },
        identity::Identity,
    },
    server::{
        data::formation::FormationRepository,
        error::Error,
        model::db::FormationSlotModel,
        service::formation::sync::{FormationHeader, FormationSynchronizer},
    },
};

pub struct FormationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormationService<'a> {
    /// Creates a new instance of [`FormationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Labels written for `owner` grouped by advisor, with `viewer` always among the advisors
    pub async fn get_board(&self, owner: &str, viewer: &Identity) -> Result<FormationBoardDto, Error> {
        let rows = FormationRepository::new(self.db)
            .get_labels_for_owner(owner)
            .await?;

        Ok(build_board(owner, rows, viewer))
    }

    /// Header and slots stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(FormationDto))`: The stored formation. Slot rows with an unknown position
    ///   are logged and skipped.
    /// - `Ok(None)`: Nothing was saved under `key` yet
    /// - `Err(Error::DbErr(_))`: Database error while reading header or slots
    pub async fn get_formation(&self, key: &FormationKey) -> Result<Option<FormationDto>, Error> {
        let repo = FormationRepository::new(self.db);

        let Some(header) = repo
            .find_by_key(key.owner.as_str(), key.advisor.as_str(), &key.label)
            .await?
        else {
            return Ok(None);
        };

        let slots = slot_map(repo.get_slots(header.id).await?);

        Ok(Some(FormationDto {
            id: header.id,
            owner: header.owner_key,
            advisor: header.advisor_key,
            label: header.label,
            request_comment: header.request_comment,
            answer_comment: header.answer_comment,
            slots,
        }))
    }

    /// Saves `formation` under `key` on behalf of `viewer`.
    ///
    /// # Behavior
    /// - Only the advisor of record (`key.advisor == viewer`) may save.
    /// - The label must be one of 編成1 to 編成5, and at least one position needs an officer.
    /// - A label the pair has not used yet is refused once the pair already has five labels.
    ///   The count is read inside the same transaction as the writes.
    /// - The header upsert, slot delete and slot insert share one transaction. Nothing is
    ///   committed when any of them fails.
    ///
    /// # Arguments
    /// - `key` ([`FormationKey`]): Owner, advisor and label the formation is stored under
    /// - `viewer` ([`Identity`]): Identity of the session making the request
    /// - `formation` ([`SaveFormationDto`]): Header id if known, comments and the slot map
    ///
    /// # Returns
    /// - `Ok(SavedFormationDto)`: Id of the stored header together with its label
    /// - `Err(Error::FormationError(_))`: `NotAdvisorOfRecord`, `InvalidLabel`,
    ///   `NoOfficerSelected` or `FormationLimitReached`
    /// - `Err(Error::SyncError(_))`: One of the write steps failed, naming the step
    /// - `Err(Error::DbErr(_))`: Opening or committing the transaction failed
    pub async fn save(
        &self,
        key: &FormationKey,
        viewer: &Identity,
        formation: &SaveFormationDto,
    ) -> Result<SavedFormationDto, Error> {
        if &key.advisor != viewer {
            return Err(FormationError::NotAdvisorOfRecord.into());
        }
        if !is_valid_label(&key.label) {
            return Err(FormationError::InvalidLabel(key.label.clone()).into());
        }
        if !formation.slots.has_officer() {
            return Err(FormationError::NoOfficerSelected.into());
        }

        let txn = self.db.begin().await?;
        let repo = FormationRepository::new(&txn);

        let labels = repo
            .get_labels(key.owner.as_str(), key.advisor.as_str())
            .await?;
        if !labels.contains(&key.label) && labels.len() >= MAX_FORMATIONS {
            return Err(FormationError::FormationLimitReached.into());
        }

        let header = FormationHeader {
            id: formation.id,
            owner_key: key.owner.to_string(),
            advisor_key: key.advisor.to_string(),
            label: key.label.clone(),
            request_comment: formation.request_comment.clone(),
            answer_comment: formation.answer_comment.clone(),
        };
        let id = FormationSynchronizer::new(&repo)
            .persist(&header, &formation.slots)
            .await?;

        txn.commit().await?;

        tracing::info!(
            formation_id = id,
            owner = %key.owner,
            advisor = %key.advisor,
            label = %key.label,
            "Formation saved"
        );

        Ok(SavedFormationDto {
            id,
            label: key.label.clone(),
        })
    }
}

fn slot_map(rows: Vec<FormationSlotModel>) -> SlotMap {
    let mut slots = SlotMap::default();

    for row in rows {
        let position = match row.position.parse::<SlotPosition>() {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!(formation_id = row.formation_id, "{}", err);
                continue;
            }
        };

        let slot = slots.get_mut(position);
        slot.officer_id = Some(row.officer_id);
        slot.inherit1_id = row.inherit_skill1_id;
        slot.inherit2_id = row.inherit_skill2_id;
    }

    slots
}
