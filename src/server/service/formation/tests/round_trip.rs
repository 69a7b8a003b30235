//! The shared editor driven against the real service on SQLite.

use super::*;
use crate::{
    formation::{
        editor::{FormationEditor, FormationGateway},
        error::FormationError,
    },
    model::formation::{FormationDto, SavedFormationDto, SkillSlot, SlotPosition},
    server::{error::Error, service::formation::FormationService},
};

/// Gateway calling the service directly as `viewer`
struct ServiceGateway<'a> {
    service: FormationService<'a>,
    viewer: Identity,
}

fn backend(err: Error) -> FormationError {
    match err {
        Error::FormationError(err) => err,
        err => FormationError::Backend(err.to_string()),
    }
}

impl FormationGateway for ServiceGateway<'_> {
    async fn load(&self, key: &FormationKey) -> Result<Option<FormationDto>, FormationError> {
        self.service.get_formation(key).await.map_err(backend)
    }

    async fn save(
        &self,
        key: &FormationKey,
        formation: &SaveFormationDto,
    ) -> Result<SavedFormationDto, FormationError> {
        self.service
            .save(key, &self.viewer, formation)
            .await
            .map_err(backend)
    }
}

/// Expect a saved formation to load back with the same ids, and a position holding skills
/// but no officer to load back empty
#[tokio::test]
async fn persisted_formation_loads_back() -> Result<(), TestError> {
    let test = catalog().await?;
    let gateway = ServiceGateway {
        service: FormationService::new(&test.state.db),
        viewer: identity("bob"),
    };
    let formation_key = key("alice", "bob", "編成1");

    let mut editor = FormationEditor::new(identity("bob"));
    editor
        .select_formation(&gateway, formation_key.clone())
        .await
        .unwrap();
    editor.set_officer(SlotPosition::Leader, Some(1)).unwrap();
    editor
        .set_inherited_skill(SlotPosition::Leader, SkillSlot::First, Some(10))
        .unwrap();
    editor.set_officer(SlotPosition::Sub2, Some(3)).unwrap();
    editor
        .set_inherited_skill(SlotPosition::Sub2, SkillSlot::Second, Some(11))
        .unwrap();
    editor
        .set_inherited_skill(SlotPosition::Sub1, SkillSlot::First, Some(10))
        .unwrap();
    editor.set_request_comment("攻城向け").unwrap();
    let saved = editor.save(&gateway).await.unwrap();
    let written = editor.open().unwrap().slots;

    let mut reader = FormationEditor::new(identity("alice"));
    reader.select_formation(&gateway, formation_key).await.unwrap();

    let open = reader.open().unwrap();
    assert_eq!(open.id, Some(saved.id));
    assert_eq!(open.slots.leader, written.leader);
    assert_eq!(open.slots.sub2, written.sub2);
    assert_eq!(written.sub1.inherit1_id, Some(10));
    assert!(open.slots.sub1.is_empty());
    assert_eq!(open.request_comment, "攻城向け");
    assert!(!reader.can_edit());

    Ok(())
}

/// Expect a formation without officers to never reach the database
#[tokio::test]
async fn empty_formation_is_not_persisted() -> Result<(), TestError> {
    let test = catalog().await?;
    let gateway = ServiceGateway {
        service: FormationService::new(&test.state.db),
        viewer: identity("bob"),
    };
    let formation_key = key("alice", "bob", "編成1");

    let mut editor = FormationEditor::new(identity("bob"));
    editor
        .select_formation(&gateway, formation_key.clone())
        .await
        .unwrap();
    let result = editor.save(&gateway).await;

    assert_eq!(result, Err(FormationError::NoOfficerSelected));
    assert!(gateway
        .service
        .get_formation(&formation_key)
        .await
        .unwrap()
        .is_none());

    Ok(())
}
