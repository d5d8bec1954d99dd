//! Integration tests for the constraint behavior of the schema on SQLite.
//!
//! Every property here is enforced by the engine, not by Rust code: the
//! backends execute the statement and map whatever the engine raises.

use rstest::{fixture, rstest};

use studybuddy_db::db::schema::{ALL_TABLES, PROFILES, USERS};
use studybuddy_db::db::{SqliteBackend, StoreBackend, StoreError};
use studybuddy_db::models::{NewProfile, NewUser};

#[fixture]
fn db() -> SqliteBackend {
    let mut db = SqliteBackend::open_in_memory().unwrap();
    db.create_schema().unwrap();
    db
}

/// Create a user and a profile owned by it, with both link columns set.
fn linked_pair(db: &mut SqliteBackend) -> (i64, i64) {
    let user = db.insert_user(&NewUser::new("A", "a@x.com", "p")).unwrap();
    let profile = db
        .insert_profile(&NewProfile::with_bio(user.id, "hi"))
        .unwrap();
    assert!(db.set_user_profile(user.id, Some(profile.id)).unwrap());
    (user.id, profile.id)
}

#[rstest]
fn missing_name_fails_with_not_null(mut db: SqliteBackend) {
    let err = db
        .execute("INSERT INTO users (email, password) VALUES ('a@x.com', 'p')")
        .unwrap_err();
    match err {
        StoreError::NotNull { column } => assert_eq!(column, "users.name"),
        other => panic!("expected not-null violation, got {other:?}"),
    }
}

#[rstest]
#[case("email", "INSERT INTO users (name, password) VALUES ('A', 'p')")]
#[case("password", "INSERT INTO users (name, email) VALUES ('A', 'a@x.com')")]
fn missing_required_user_column_fails(
    mut db: SqliteBackend,
    #[case] column: &str,
    #[case] sql: &str,
) {
    let err = db.execute(sql).unwrap_err();
    match err {
        StoreError::NotNull { column: reported } => {
            assert_eq!(reported, format!("users.{}", column));
        }
        other => panic!("expected not-null violation, got {other:?}"),
    }
}

#[rstest]
fn missing_profile_user_id_fails_with_not_null(mut db: SqliteBackend) {
    let err = db
        .execute("INSERT INTO profiles (bio) VALUES ('hi')")
        .unwrap_err();
    match err {
        StoreError::NotNull { column } => assert_eq!(column, "profiles.user_id"),
        other => panic!("expected not-null violation, got {other:?}"),
    }
}

#[rstest]
fn two_users_cannot_share_a_profile(mut db: SqliteBackend) {
    let (_, profile_id) = linked_pair(&mut db);

    let other = db.insert_user(&NewUser::new("B", "b@x.com", "p")).unwrap();
    let err = db
        .set_user_profile(other.id, Some(profile_id))
        .unwrap_err();
    match err {
        StoreError::Unique { constraint } => assert_eq!(constraint, "users.profile_id"),
        other => panic!("expected uniqueness violation, got {other:?}"),
    }
}

#[rstest]
fn profile_requires_existing_user(mut db: SqliteBackend) {
    let err = db.insert_profile(&NewProfile::new(999)).unwrap_err();
    assert!(
        matches!(err, StoreError::ForeignKey { .. }),
        "expected foreign-key violation, got {err:?}"
    );
}

#[rstest]
fn user_profile_link_requires_existing_profile(mut db: SqliteBackend) {
    let mut new_user = NewUser::new("A", "a@x.com", "p");
    new_user.profile_id = Some(999);
    let err = db.insert_user(&new_user).unwrap_err();
    assert!(
        matches!(err, StoreError::ForeignKey { .. }),
        "expected foreign-key violation, got {err:?}"
    );
}

#[rstest]
fn two_profiles_cannot_share_a_user(mut db: SqliteBackend) {
    let user = db.insert_user(&NewUser::new("A", "a@x.com", "p")).unwrap();
    db.insert_profile(&NewProfile::new(user.id)).unwrap();

    let err = db.insert_profile(&NewProfile::new(user.id)).unwrap_err();
    match err {
        StoreError::Unique { constraint } => assert_eq!(constraint, "profiles.user_id"),
        other => panic!("expected uniqueness violation, got {other:?}"),
    }
}

#[rstest]
fn deleting_profile_nulls_the_user_link(mut db: SqliteBackend) {
    let (user_id, profile_id) = linked_pair(&mut db);
    assert_eq!(
        db.find_user(user_id).unwrap().unwrap().profile_id,
        Some(profile_id)
    );

    assert!(db.delete_profile(profile_id).unwrap());

    let user = db.find_user(user_id).unwrap().unwrap();
    assert_eq!(user.profile_id, None);
    assert!(db.find_profile(profile_id).unwrap().is_none());
}

#[rstest]
fn deleting_user_with_profile_is_rejected(mut db: SqliteBackend) {
    // profiles.user_id declares no referential action, so the engine
    // refuses to orphan the profile.
    let (user_id, profile_id) = linked_pair(&mut db);

    let err = db.delete_user(user_id).unwrap_err();
    assert!(
        matches!(err, StoreError::ForeignKey { .. }),
        "expected foreign-key violation, got {err:?}"
    );

    // Removing the profile first unblocks the delete.
    assert!(db.delete_profile(profile_id).unwrap());
    assert!(db.delete_user(user_id).unwrap());
}

#[rstest]
fn name_over_100_chars_is_rejected(mut db: SqliteBackend) {
    let err = db
        .insert_user(&NewUser::new("x".repeat(101), "a@x.com", "p"))
        .unwrap_err();
    match err {
        StoreError::Length { constraint } => assert_eq!(constraint, "users_name_len"),
        other => panic!("expected length violation, got {other:?}"),
    }
}

#[rstest]
fn name_of_exactly_100_chars_is_accepted(mut db: SqliteBackend) {
    let user = db
        .insert_user(&NewUser::new("x".repeat(100), "a@x.com", "p"))
        .unwrap();
    assert_eq!(user.name.len(), 100);
}

#[rstest]
fn bio_over_255_chars_is_rejected(mut db: SqliteBackend) {
    let user = db.insert_user(&NewUser::new("A", "a@x.com", "p")).unwrap();
    let err = db
        .insert_profile(&NewProfile::with_bio(user.id, "x".repeat(256)))
        .unwrap_err();
    match err {
        StoreError::Length { constraint } => assert_eq!(constraint, "profiles_bio_len"),
        other => panic!("expected length violation, got {other:?}"),
    }
}

#[rstest]
fn bio_is_optional(mut db: SqliteBackend) {
    let user = db.insert_user(&NewUser::new("A", "a@x.com", "p")).unwrap();
    let profile = db.insert_profile(&NewProfile::new(user.id)).unwrap();
    assert!(profile.bio.is_none());
    assert_eq!(
        db.profile_for_user(user.id).unwrap().unwrap().id,
        profile.id
    );
}

#[rstest]
fn duplicate_emails_are_allowed(mut db: SqliteBackend) {
    // Preserved upstream gap: email carries no uniqueness constraint.
    db.insert_user(&NewUser::new("A", "same@x.com", "p")).unwrap();
    db.insert_user(&NewUser::new("B", "same@x.com", "p")).unwrap();
}

#[rstest]
fn profile_lifecycle_example(mut db: SqliteBackend) {
    // Create User(name="A", email="a@x.com", password="p") -> profile_id null
    let user = db.insert_user(&NewUser::new("A", "a@x.com", "p")).unwrap();
    assert_eq!(user.profile_id, None);

    // Create Profile(bio="hi", user_id=<that user>)
    let profile = db
        .insert_profile(&NewProfile::with_bio(user.id, "hi"))
        .unwrap();
    assert_eq!(profile.user_id, user.id);

    // Deleting the profile must not delete the user
    assert!(db.delete_profile(profile.id).unwrap());
    assert!(db.find_user(user.id).unwrap().is_some());
}

#[rstest]
fn delete_missing_rows_reports_false(mut db: SqliteBackend) {
    assert!(!db.delete_user(999).unwrap());
    assert!(!db.delete_profile(999).unwrap());
}

#[rstest]
fn schema_matches_declared_tables(mut db: SqliteBackend) {
    for table in ALL_TABLES {
        assert!(db.table_exists(table.name).unwrap());
    }
    assert_eq!(USERS.column_count(), 5);
    assert_eq!(PROFILES.column_count(), 3);
}
