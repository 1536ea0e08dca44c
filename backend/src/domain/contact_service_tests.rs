//! Tests for the contact domain service.

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockContactRepository;

#[fixture]
fn ann() -> ContactDetails {
    ContactDetails {
        name: Some("Ann".to_owned()),
        email: Some("a@x.com".to_owned()),
        phone: Some("555".to_owned()),
    }
}

fn service(repo: MockContactRepository) -> ContactService<MockContactRepository> {
    ContactService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn list_all_returns_repository_contacts(ann: ContactDetails) {
    let stored = vec![Contact::new(ContactId::new("c-1"), ann)];
    let expected = stored.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(move || Ok(stored));

    let listed = service(repo).list_all().await.expect("list succeeds");

    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn get_by_id_passes_absence_through() {
    let mut repo = MockContactRepository::new();
    repo.expect_find_by_id()
        .with(eq(ContactId::new("missing")))
        .times(1)
        .return_once(|_| Ok(None));

    let found = service(repo)
        .get_by_id(&ContactId::new("missing"))
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn get_by_email_delegates_to_first_match(ann: ContactDetails) {
    let contact = Contact::new(ContactId::new("c-1"), ann);
    let expected = contact.clone();
    let mut repo = MockContactRepository::new();
    repo.expect_find_first_by_email()
        .withf(|email| email == "a@x.com")
        .times(1)
        .return_once(move |_| Ok(Some(contact)));

    let found = service(repo)
        .get_by_email("a@x.com")
        .await
        .expect("lookup succeeds");

    assert_eq!(found, Some(expected));
}

#[rstest]
#[tokio::test]
async fn insert_returns_contact_with_assigned_id(ann: ContactDetails) {
    let mut repo = MockContactRepository::new();
    repo.expect_insert()
        .with(eq(ann.clone()))
        .times(1)
        .return_once(|details| Ok(Contact::new(ContactId::new("generated"), details.clone())));

    let saved = service(repo).insert(ann.clone()).await.expect("insert succeeds");

    assert_eq!(saved.id().as_str(), "generated");
    assert_eq!(saved.details(), &ann);
}

#[rstest]
#[tokio::test]
async fn update_overwrites_fields_and_keeps_id(ann: ContactDetails) {
    let existing = Contact::new(ContactId::new("c-1"), ann);
    let mut repo = MockContactRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_save()
        .withf(|contact| {
            contact.id().as_str() == "c-1"
                && contact.name() == Some("Ann2")
                && contact.email().is_none()
                && contact.phone() == Some("555")
        })
        .times(1)
        .return_once(|contact| Ok(contact.clone()));

    let updated = service(repo)
        .update(
            &ContactId::new("c-1"),
            ContactDetails {
                name: Some("Ann2".to_owned()),
                email: None,
                phone: Some("555".to_owned()),
            },
        )
        .await
        .expect("update succeeds")
        .expect("contact exists");

    assert_eq!(updated.id().as_str(), "c-1");
    assert_eq!(updated.email(), None);
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_id_never_saves(ann: ContactDetails) {
    let mut repo = MockContactRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_save().never();

    let updated = service(repo)
        .update(&ContactId::new("missing"), ann)
        .await
        .expect("update succeeds");

    assert!(updated.is_none());
}

#[rstest]
#[tokio::test]
async fn delete_delegates_to_repository() {
    let mut repo = MockContactRepository::new();
    repo.expect_delete_by_id()
        .with(eq(ContactId::new("c-1")))
        .times(1)
        .return_once(|_| Ok(()));

    service(repo)
        .delete(&ContactId::new("c-1"))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[case(ContactRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(ContactRepositoryError::query("bad row"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_errors_map_to_domain_codes(
    #[case] failure: ContactRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockContactRepository::new();
    repo.expect_find_all().return_once(move || Err(failure));

    let error = service(repo).list_all().await.expect_err("list fails");

    assert_eq!(error.code(), expected);
}
