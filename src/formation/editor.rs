//! Editing session for a single formation.
//!
//! The editor is a plain state machine. Network calls live behind [`FormationGateway`] so the
//! same transitions drive the browser UI and the server round-trip tests.

use crate::{
    formation::{error::FormationError, label::next_label},
    model::{
        formation::{
            FormationDto, FormationKey, SaveFormationDto, SavedFormationDto, SkillSlot, SlotMap,
            SlotPosition,
        },
        identity::Identity,
    },
};

/// Persistence boundary used by the editor.
///
/// Futures are not required to be `Send` as the browser client runs on a single thread.
#[allow(async_fn_in_trait)]
pub trait FormationGateway {
    /// Fetch header and slots, `None` when nothing was saved under the key yet.
    async fn load(&self, key: &FormationKey) -> Result<Option<FormationDto>, FormationError>;

    /// Persist the formation as its advisor of record.
    async fn save(
        &self,
        key: &FormationKey,
        formation: &SaveFormationDto,
    ) -> Result<SavedFormationDto, FormationError>;
}

/// Formation currently shown in the editor.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenFormation {
    pub key: FormationKey,
    /// Header id, `None` until the formation has been saved once
    pub id: Option<i32>,
    pub slots: SlotMap,
    pub request_comment: String,
    pub answer_comment: String,
}

impl OpenFormation {
    /// Empty, unsaved formation under `key`.
    pub fn fresh(key: FormationKey) -> Self {
        Self {
            key,
            id: None,
            slots: SlotMap::default(),
            request_comment: String::new(),
            answer_comment: String::new(),
        }
    }

    fn from_dto(key: FormationKey, dto: FormationDto) -> Self {
        Self {
            key,
            id: Some(dto.id),
            slots: dto.slots,
            request_comment: dto.request_comment.unwrap_or_default(),
            answer_comment: dto.answer_comment.unwrap_or_default(),
        }
    }

    fn to_save_dto(&self) -> SaveFormationDto {
        SaveFormationDto {
            id: self.id,
            request_comment: non_empty(&self.request_comment),
            answer_comment: non_empty(&self.answer_comment),
            slots: self.slots,
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Uninitialized,
    Loading {
        key: FormationKey,
    },
    Ready(OpenFormation),
    /// Save request in flight, the formation is read-only until it completes
    Saving(OpenFormation),
}

impl EditorState {
    fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading { .. } => "loading",
            Self::Ready(_) => "ready",
            Self::Saving(_) => "saving",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormationEditor {
    viewer: Identity,
    state: EditorState,
}

impl FormationEditor {
    pub fn new(viewer: Identity) -> Self {
        Self {
            viewer,
            state: EditorState::Uninitialized,
        }
    }

    pub fn viewer(&self) -> &Identity {
        &self.viewer
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Formation shown to the user, also while it is being saved.
    pub fn open(&self) -> Option<&OpenFormation> {
        match &self.state {
            EditorState::Ready(open) | EditorState::Saving(open) => Some(open),
            _ => None,
        }
    }

    /// True while a load or save request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            EditorState::Loading { .. } | EditorState::Saving(_)
        )
    }

    /// Edits are only accepted from the advisor of record while the editor is ready.
    pub fn can_edit(&self) -> bool {
        match &self.state {
            EditorState::Ready(open) => open.key.advisor == self.viewer,
            _ => false,
        }
    }

    /// Drops the open formation and waits for `key` to be fetched.
    pub fn begin_load(&mut self, key: FormationKey) {
        self.state = EditorState::Loading { key };
    }

    /// Applies a fetch result for `key`.
    ///
    /// Results for a key other than the one being loaded are discarded with
    /// [`FormationError::StaleResponse`] and leave the state untouched. A failed fetch resets
    /// the editor.
    pub fn finish_load(
        &mut self,
        key: &FormationKey,
        result: Result<Option<FormationDto>, FormationError>,
    ) -> Result<(), FormationError> {
        match &self.state {
            EditorState::Loading { key: pending } if pending == key => {}
            _ => return Err(FormationError::StaleResponse),
        }

        match result {
            Ok(Some(dto)) => {
                self.state = EditorState::Ready(OpenFormation::from_dto(key.clone(), dto));
                Ok(())
            }
            Ok(None) => {
                self.state = EditorState::Ready(OpenFormation::fresh(key.clone()));
                Ok(())
            }
            Err(err) => {
                self.state = EditorState::Uninitialized;
                Err(err)
            }
        }
    }

    /// Loads the formation stored under `key` through `gateway`.
    pub async fn select_formation<G: FormationGateway>(
        &mut self,
        gateway: &G,
        key: FormationKey,
    ) -> Result<(), FormationError> {
        self.begin_load(key.clone());
        let result = gateway.load(&key).await;

        self.finish_load(&key, result)
    }

    pub fn set_officer(
        &mut self,
        position: SlotPosition,
        officer_id: Option<i32>,
    ) -> Result<(), FormationError> {
        let open = self.editable("change officers")?;
        open.slots.get_mut(position).officer_id = officer_id;

        Ok(())
    }

    pub fn set_inherited_skill(
        &mut self,
        position: SlotPosition,
        slot: SkillSlot,
        skill_id: Option<i32>,
    ) -> Result<(), FormationError> {
        let open = self.editable("change inherited skills")?;
        open.slots.get_mut(position).set_skill(slot, skill_id);

        Ok(())
    }

    pub fn set_request_comment(&mut self, comment: impl Into<String>) -> Result<(), FormationError> {
        self.editable("change comments")?.request_comment = comment.into();

        Ok(())
    }

    pub fn set_answer_comment(&mut self, comment: impl Into<String>) -> Result<(), FormationError> {
        self.editable("change comments")?.answer_comment = comment.into();

        Ok(())
    }

    /// Opens a new, empty formation for `owner` under the next free label.
    ///
    /// `existing` are the labels `advisor` already wrote for `owner`. Only the viewer may add
    /// formations as advisor, and at most five labels exist per pair.
    pub fn add_formation(
        &mut self,
        owner: Identity,
        advisor: &Identity,
        existing: &[String],
    ) -> Result<FormationKey, FormationError> {
        if self.is_busy() {
            return Err(self.invalid("add a formation"));
        }
        if advisor != &self.viewer {
            return Err(FormationError::NotAdvisorOfRecord);
        }

        let label = next_label(existing)?;
        let key = FormationKey::new(owner, self.viewer.clone(), label);
        self.state = EditorState::Ready(OpenFormation::fresh(key.clone()));

        Ok(key)
    }

    /// Validates the open formation and moves to [`EditorState::Saving`].
    ///
    /// Nothing changes when validation fails.
    pub fn begin_save(&mut self) -> Result<(FormationKey, SaveFormationDto), FormationError> {
        let open = match &self.state {
            EditorState::Ready(open) => open,
            _ => return Err(self.invalid("save")),
        };
        if open.key.advisor != self.viewer {
            return Err(FormationError::NotAdvisorOfRecord);
        }
        if !open.slots.has_officer() {
            return Err(FormationError::NoOfficerSelected);
        }

        let request = (open.key.clone(), open.to_save_dto());
        if let EditorState::Ready(open) = std::mem::take(&mut self.state) {
            self.state = EditorState::Saving(open);
        }

        Ok(request)
    }

    /// Returns to [`EditorState::Ready`] once the save request completed.
    pub fn finish_save(
        &mut self,
        result: Result<SavedFormationDto, FormationError>,
    ) -> Result<SavedFormationDto, FormationError> {
        let mut open = match std::mem::take(&mut self.state) {
            EditorState::Saving(open) => open,
            other => {
                self.state = other;
                return Err(self.invalid("finish saving"));
            }
        };

        if let Ok(saved) = &result {
            open.id = Some(saved.id);
            open.key.label = saved.label.clone();
        }
        self.state = EditorState::Ready(open);

        result
    }

    /// Persists the open formation through `gateway`.
    pub async fn save<G: FormationGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<SavedFormationDto, FormationError> {
        let (key, formation) = self.begin_save()?;
        let result = gateway.save(&key, &formation).await;

        self.finish_save(result)
    }

    fn editable(&mut self, action: &'static str) -> Result<&mut OpenFormation, FormationError> {
        let state = self.state.name();
        match &mut self.state {
            EditorState::Ready(open) if open.key.advisor == self.viewer => Ok(open),
            EditorState::Ready(_) => Err(FormationError::NotAdvisorOfRecord),
            _ => Err(FormationError::InvalidState { action, state }),
        }
    }

    fn invalid(&self, action: &'static str) -> FormationError {
        FormationError::InvalidState {
            action,
            state: self.state.name(),
        }
    }
}
