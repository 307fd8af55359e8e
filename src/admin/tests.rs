use crate::data::{Note, Role};
use crate::hasher::{weak_hash, WeakSha256Policy};
use crate::notes::{NoteService, NoteServiceImpl};
use crate::test::*;
use crate::user_db::{AdminPrincipal, UserDbImpl};
use super::*;

type TestUserDb = UserDbImpl<WeakSha256Policy, TestStoreIo>;

async fn make_admin() -> (
    Arc<TestStore>,
    Arc<TestUserDb>,
    AdminQueriesImpl<TestStoreIo, TestUserDb>,
) {
    let store = make_test_store().await;
    let user_db = Arc::new(
        UserDbImpl::new(
            Arc::new(WeakSha256Policy),
            AdminPrincipal::default(),
            store.clone(),
        )
    );
    let admin = AdminQueriesImpl::new(store.clone(), user_db.clone());
    (store, user_db, admin)
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let (_, _, admin) = make_admin().await;
    assert!(admin.list_all_accounts().await.is_empty());
    assert!(admin.list_all_notes().await.is_empty());
}

#[tokio::test]
async fn accounts_are_listed_with_credentials() {
    let (_, user_db, admin) = make_admin().await;
    user_db.register("alice", "pw1").await.unwrap();
    user_db.register("bob", "pw2").await.unwrap();

    let accounts = admin.list_all_accounts().await;
    let rows: Vec<_> = accounts
        .iter()
        .map(|a| (
            &*a.username,
            a.password_hash.as_str(),
            a.plain_password.as_str(),
            a.role,
        ))
        .collect();
    assert_eq!(
        rows,
        [
            ("alice", weak_hash("pw1").as_str(), "pw1", Role::User),
            ("bob", weak_hash("pw2").as_str(), "pw2", Role::User),
        ],
    );
}

#[tokio::test]
async fn administrator_is_not_listed() {
    let (_, user_db, admin) = make_admin().await;
    user_db.register("alice", "pw1").await.unwrap();
    user_db.login("admin", "admin123").await.unwrap();

    assert!(admin.list_all_accounts().await.iter().all(|a| a.username != "admin"));
}

#[tokio::test]
async fn notes_of_all_users_are_listed() {
    let (store, _, admin) = make_admin().await;
    let notes = NoteServiceImpl::new(store);
    notes.add_note("alice", "a", "1").await.unwrap();
    notes.add_note("bob", "b", "2").await.unwrap();
    notes.add_note("alice", "c", "3").await.unwrap();

    let all = admin.list_all_notes().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all["alice"], vec![Note::new("a", "1"), Note::new("c", "3")]);
    assert_eq!(all["bob"], vec![Note::new("b", "2")]);
}

#[tokio::test]
async fn reset_goes_through_credentials() {
    let (_, user_db, admin) = make_admin().await;
    user_db.register("alice", "pw1").await.unwrap();

    assert_eq!(
        admin.reset_user_password("alice", "newpw").await.unwrap(),
        "Password for 'alice' has been updated.",
    );
    assert_eq!(user_db.login("alice", "newpw").await.unwrap(), Some(Role::User));

    let alice = admin.list_all_accounts().await.remove(0);
    assert_eq!(alice.password_hash, weak_hash("newpw"));
    assert_eq!(alice.plain_password, "newpw");
}

#[tokio::test]
async fn reset_rejections_pass_through() {
    let (_, _, admin) = make_admin().await;
    assert!(matches!(
        admin.reset_user_password("admin", "x").await.unwrap_err(),
        UserDbError::AdminPasswordImmutable,
    ));
    assert!(matches!(
        admin.reset_user_password("ghost", "x").await.unwrap_err(),
        UserDbError::UserNotFound,
    ));
}

#[tokio::test]
async fn corrupt_accounts_list_as_empty() {
    let io = TestStoreIo::new().with_file(&*TEST_ACCOUNTS_PATH, "not toml [");
    let store = make_test_store_with(io).await;
    let user_db: Arc<dyn UserDb> = Arc::new(
        UserDbImpl::new(
            Arc::new(WeakSha256Policy),
            AdminPrincipal::default(),
            store.clone(),
        )
    );
    let admin = AdminQueriesImpl::new(store, user_db);
    assert!(admin.list_all_accounts().await.is_empty());
}
