use chrono::{DateTime, Utc};
use contract_api::auth::{AuthError, VALID_TOKEN};
use contract_api::config::StoreConfig;
use contract_api::item_actor::{fixed_clock, ItemError};
use contract_api::lifecycle::ApiSystem;
use contract_api::model::{ItemCreate, ItemId, ItemUpdate, Secret, UserId, UserRegistration};
use contract_api::user_actor::UserError;
use std::collections::HashSet;
use std::sync::Arc;

fn frozen_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

async fn seeded() -> ApiSystem {
    ApiSystem::start_with_clock(&StoreConfig::default(), fixed_clock(frozen_at()))
        .await
        .unwrap()
}

fn jane() -> UserRegistration {
    UserRegistration::new("jane_doe", "jane@example.com", Some("Jane Doe"), "janepass1")
}

#[tokio::test]
async fn startup_seeds_two_items_and_admin() {
    let system = seeded().await;

    let items = system.list_items().await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Sample Item", "Another Item"]);
    assert_eq!(items[0].description.as_deref(), Some("A sample item description"));
    assert_eq!(items[1].description, None);

    let users = system.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "admin");
    assert_eq!(users[0].id, UserId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn first_created_item_gets_id_three() {
    let system = seeded().await;

    let created = system.create_item(ItemCreate::new("A", None)).await.unwrap();
    assert_eq!(created.id, ItemId(3));
    assert_eq!(created.created_at, frozen_at());

    let fetched = system.get_item(ItemId(3)).await.unwrap();
    assert_eq!(fetched.name, "A");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn ids_keep_increasing_across_deletes() {
    let system = seeded().await;

    let mut last = 2;
    for n in 0..5 {
        let item = system
            .create_item(ItemCreate::new(format!("item {n}"), None))
            .await
            .unwrap();
        assert!(item.id.0 > last);
        last = item.id.0;
        if n % 2 == 0 {
            system.delete_item(item.id).await.unwrap();
        }
    }

    let after_delete = system.create_item(ItemCreate::new("next", None)).await.unwrap();
    assert_eq!(after_delete.id.0, last + 1);
}

#[tokio::test]
async fn missing_ids_report_not_found() {
    let system = seeded().await;

    assert!(matches!(system.get_item(ItemId(99)).await, Err(ItemError::NotFound(_))));
    assert!(matches!(
        system.update_item(ItemId(99), ItemUpdate::name("x")).await,
        Err(ItemError::NotFound(_))
    ));
    assert!(matches!(system.delete_item(ItemId(99)).await, Err(ItemError::NotFound(_))));
    assert!(matches!(system.get_user(UserId(99)).await, Err(UserError::NotFound(_))));
}

#[tokio::test]
async fn second_delete_of_same_item_fails() {
    let system = seeded().await;

    system.delete_item(ItemId(1)).await.unwrap();
    assert!(matches!(system.delete_item(ItemId(1)).await, Err(ItemError::NotFound(_))));
    assert_eq!(system.list_items().await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_update_leaves_item_unchanged() {
    let system = seeded().await;
    let before = system.get_item(ItemId(1)).await.unwrap();

    let update = ItemUpdate::name("").with_description(None);
    let err = system.update_item(ItemId(1), update).await.unwrap_err();
    assert!(matches!(err, ItemError::Validation(_)));

    assert_eq!(system.get_item(ItemId(1)).await.unwrap(), before);
}

#[tokio::test]
async fn update_keeps_id_and_creation_time() {
    let system = seeded().await;
    let before = system.get_item(ItemId(1)).await.unwrap();

    let updated = system
        .update_item(ItemId(1), ItemUpdate::name("Renamed").with_description(None))
        .await
        .unwrap();
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);
}

#[tokio::test]
async fn rejected_create_does_not_consume_an_id() {
    let system = seeded().await;

    let err = system
        .create_item(ItemCreate::new("x".repeat(101), None))
        .await
        .unwrap_err();
    assert!(matches!(err, ItemError::Validation(_)));

    let item = system.create_item(ItemCreate::new("ok", None)).await.unwrap();
    assert_eq!(item.id, ItemId(3));
}

#[tokio::test]
async fn reset_restores_seeded_state_and_next_ids() {
    let system = seeded().await;
    let items_before: HashSet<_> = system
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|i| (i.id, i.name, i.description))
        .collect();

    system.create_item(ItemCreate::new("extra", None)).await.unwrap();
    system
        .update_item(ItemId(1), ItemUpdate::name("changed"))
        .await
        .unwrap();
    system.delete_item(ItemId(2)).await.unwrap();
    system.create_user(jane()).await.unwrap();

    system.reset_all().await.unwrap();

    let items_after: HashSet<_> = system
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|i| (i.id, i.name, i.description))
        .collect();
    assert_eq!(items_after, items_before);
    assert_eq!(system.list_users().await.unwrap().len(), 1);

    let next_item = system.create_item(ItemCreate::new("again", None)).await.unwrap();
    assert_eq!(next_item.id, ItemId(3));
    let next_user = system.create_user(jane()).await.unwrap();
    assert_eq!(next_user.id, UserId(2));
}

#[tokio::test]
async fn reset_forgets_credentials_of_removed_users() {
    let system = seeded().await;
    system.create_user(jane()).await.unwrap();
    assert_eq!(
        system.login("jane_doe", &Secret::new("janepass1")).await,
        Ok(VALID_TOKEN)
    );

    system.reset_all().await.unwrap();

    assert_eq!(
        system.login("jane_doe", &Secret::new("janepass1")).await,
        Err(AuthError::Unauthorized)
    );
    assert_eq!(
        system.login("admin", &Secret::new("adminpass")).await,
        Ok(VALID_TOKEN)
    );
}

#[tokio::test]
async fn repeated_resets_are_stable() {
    let system = seeded().await;
    for _ in 0..3 {
        system.create_item(ItemCreate::new("temp", None)).await.unwrap();
        system.reset_all().await.unwrap();
        assert_eq!(system.list_items().await.unwrap().len(), 2);
    }
}

#[tokio::test]
async fn login_contract() {
    let system = seeded().await;

    assert_eq!(
        system.login("admin", &Secret::new("adminpass")).await,
        Ok(VALID_TOKEN)
    );
    assert_eq!(
        system.login("admin", &Secret::new("wrong")).await,
        Err(AuthError::Unauthorized)
    );
    assert_eq!(
        system.login("", &Secret::new("adminpass")).await,
        Err(AuthError::MissingField("username"))
    );
}

#[tokio::test]
async fn duplicate_username_or_email_is_a_conflict() {
    let system = seeded().await;

    let same_name = UserRegistration::new("admin", "other@example.com", None, "password1");
    assert!(matches!(
        system.create_user(same_name).await,
        Err(UserError::Conflict(_))
    ));

    let same_email = UserRegistration::new("other", "admin@example.com", None, "password1");
    assert!(matches!(
        system.create_user(same_email).await,
        Err(UserError::Conflict(_))
    ));

    assert_eq!(system.list_users().await.unwrap().len(), 1);
    let created = system.create_user(jane()).await.unwrap();
    assert_eq!(created.id, UserId(2));
}

#[tokio::test]
async fn short_password_creates_nothing() {
    let system = seeded().await;

    let weak = UserRegistration::new("jane_doe", "jane@example.com", None, "short");
    assert!(matches!(
        system.create_user(weak).await,
        Err(UserError::Validation(_))
    ));
    assert_eq!(system.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_registrations_with_same_username_admit_one() {
    let system = Arc::new(seeded().await);

    let attempts = (0..8).map(|n| {
        let system = system.clone();
        tokio::spawn(async move {
            let registration = UserRegistration::new(
                "racer",
                format!("racer{n}@example.com"),
                None,
                "racerpass",
            );
            system.create_user(registration).await
        })
    });

    let mut created = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        match attempt.await.unwrap() {
            Ok(_) => created += 1,
            Err(UserError::Conflict(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(system.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn unseeded_system_starts_empty() {
    let config = StoreConfig {
        seed_data: false,
        ..StoreConfig::default()
    };
    let system = ApiSystem::start(&config).await.unwrap();

    assert!(system.list_items().await.unwrap().is_empty());
    assert!(system.list_users().await.unwrap().is_empty());
    let first = system.create_item(ItemCreate::new("first", None)).await.unwrap();
    assert_eq!(first.id, ItemId(1));

    system.reset_all().await.unwrap();
    assert!(system.list_items().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_never_observe_partial_registration_or_reset() {
    const LOOP_PASSWORD: &str = "loopsecret1";

    let system = Arc::new(seeded().await);
    let baseline: Vec<(ItemId, String)> = system
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.id, item.name))
        .collect();

    let writer = {
        let system = system.clone();
        tokio::spawn(async move {
            for round in 0..20 {
                for n in 0..3 {
                    let registration = UserRegistration::new(
                        format!("user_{round}_{n}"),
                        format!("user{round}.{n}@example.com"),
                        None,
                        LOOP_PASSWORD,
                    );
                    system.create_user(registration).await.unwrap();
                    system
                        .create_item(ItemCreate::new(format!("extra {round} {n}"), None))
                        .await
                        .unwrap();
                }
                system.reset_all().await.unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let system = system.clone();
            let baseline = baseline.clone();
            tokio::spawn(async move {
                for _ in 0..40 {
                    let items: Vec<(ItemId, String)> = system
                        .list_items()
                        .await
                        .unwrap()
                        .into_iter()
                        .map(|item| (item.id, item.name))
                        .collect();
                    assert!(
                        baseline.iter().all(|seeded| items.contains(seeded)),
                        "seeded items missing from {items:?}"
                    );

                    for user in system.list_users().await.unwrap() {
                        let password = if user.username == "admin" {
                            "adminpass"
                        } else {
                            LOOP_PASSWORD
                        };
                        match system.login(&user.username, &Secret::new(password)).await {
                            Ok(token) => assert_eq!(token, VALID_TOKEN),
                            // Only acceptable if a reset removed the user in between;
                            // usernames are never reused, so it must now be gone.
                            Err(AuthError::Unauthorized) => {
                                let still_listed = system
                                    .list_users()
                                    .await
                                    .unwrap()
                                    .iter()
                                    .any(|listed| listed.username == user.username);
                                assert!(
                                    !still_listed,
                                    "{} is listed but has no credential",
                                    user.username
                                );
                            }
                            Err(other) => panic!("unexpected login error: {other}"),
                        }
                    }
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    system.reset_all().await.unwrap();
    let after: Vec<(ItemId, String)> = system
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.id, item.name))
        .collect();
    assert_eq!(after, baseline);
    assert_eq!(system.list_users().await.unwrap().len(), 1);
}
