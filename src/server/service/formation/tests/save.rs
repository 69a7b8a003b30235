use super::*;
use crate::{
    formation::error::FormationError,
    model::formation::SlotPosition,
    server::{
        data::formation::FormationRepository, error::Error,
        service::formation::FormationService,
    },
};

/// Expect a new header and one slot row per occupied position
#[tokio::test]
async fn creates_formation() -> Result<(), TestError> {
    let test = catalog().await?;
    let service = FormationService::new(&test.state.db);
    let mut request = leader_only(1);
    request.slots.sub2.officer_id = Some(3);
    request.answer_comment = Some("騎馬で".to_string());

    let saved = service
        .save(&key("alice", "bob", "編成1"), &identity("bob"), &request)
        .await
        .unwrap();

    assert_eq!(saved.label, "編成1");
    let slots = FormationRepository::new(&test.state.db)
        .get_slots(saved.id)
        .await?;
    assert_eq!(slots.len(), 2);

    Ok(())
}

/// Expect a second save to replace slots of the same header
#[tokio::test]
async fn replaces_slots_on_resave() -> Result<(), TestError> {
    let test = catalog().await?;
    let service = FormationService::new(&test.state.db);
    let formation_key = key("alice", "bob", "編成1");
    let mut request = leader_only(1);
    request.slots.sub1.officer_id = Some(2);
    let first = service
        .save(&formation_key, &identity("bob"), &request)
        .await
        .unwrap();

    let second = service
        .save(&formation_key, &identity("bob"), &leader_only(3))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    let stored = service.get_formation(&formation_key).await.unwrap().unwrap();
    assert_eq!(stored.slots.get(SlotPosition::Leader).officer_id, Some(3));
    assert_eq!(stored.slots.get(SlotPosition::Sub1).officer_id, None);

    Ok(())
}

/// Expect a save by someone other than the advisor to be refused
#[tokio::test]
async fn rejects_other_advisor() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = FormationService::new(&test.state.db)
        .save(&key("alice", "bob", "編成1"), &identity("carol"), &leader_only(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::FormationError(FormationError::NotAdvisorOfRecord))
    ));

    Ok(())
}

/// Expect a save without officers to be refused before any write
#[tokio::test]
async fn rejects_empty_formation() -> Result<(), TestError> {
    let test = catalog().await?;
    let service = FormationService::new(&test.state.db);

    let result = service
        .save(
            &key("alice", "bob", "編成1"),
            &identity("bob"),
            &SaveFormationDto::default(),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::FormationError(FormationError::NoOfficerSelected))
    ));
    let labels = FormationRepository::new(&test.state.db)
        .get_labels("alice", "bob")
        .await?;
    assert!(labels.is_empty());

    Ok(())
}

/// Expect a new label to be refused once the pair has five, while existing labels stay writable
#[tokio::test]
async fn enforces_label_cap() -> Result<(), TestError> {
    let mut test = catalog().await?;
    test.formation().insert_labels("alice", "bob", 4).await?;
    test.formation()
        .insert_formation("alice", "bob", "相談用")
        .await?;
    let service = FormationService::new(&test.state.db);

    let result = service
        .save(&key("alice", "bob", "編成5"), &identity("bob"), &leader_only(1))
        .await;
    assert!(matches!(
        result,
        Err(Error::FormationError(FormationError::FormationLimitReached))
    ));

    let existing = service
        .save(&key("alice", "bob", "編成3"), &identity("bob"), &leader_only(1))
        .await;
    assert!(existing.is_ok());

    let other_owner = service
        .save(&key("carol", "bob", "編成1"), &identity("bob"), &leader_only(1))
        .await;
    assert!(other_owner.is_ok());

    Ok(())
}

/// Expect labels outside 編成1..編成5 to be rejected
#[tokio::test]
async fn rejects_unknown_label() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = FormationService::new(&test.state.db)
        .save(&key("alice", "bob", "編成6"), &identity("bob"), &leader_only(1))
        .await;

    assert!(matches!(
        result,
        Err(Error::FormationError(FormationError::InvalidLabel(_)))
    ));

    Ok(())
}
