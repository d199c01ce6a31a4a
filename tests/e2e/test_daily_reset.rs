use super::helpers::{
    fixtures::{today, yesterday},
    TestContext,
};
use chat_gateway_bot::domain::maintenance::ResetOutcome;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_reset_only_unsubscribed_users() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.create_user(500, today(), 5, false).await.unwrap();
    ctx.fixtures.create_user(501, yesterday(), 3, false).await.unwrap();
    ctx.fixtures.create_user(502, today(), 40, true).await.unwrap();

    let outcome = ctx.daily_reset_job().run(today()).await.unwrap();

    assert_eq!(outcome, ResetOutcome::Completed { rows: 2 });
    let users = ctx.fixtures.all_users().await.unwrap();
    let state: Vec<(i64, i64, bool)> = users
        .iter()
        .map(|u| (u.user_id, u.usage_count, u.usage_date == today()))
        .collect();
    assert_eq!(
        state,
        vec![(500, 0, true), (501, 0, true), (502, 40, true)]
    );
}

#[tokio::test]
async fn it_should_be_idempotent() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.create_user(503, today(), 5, false).await.unwrap();
    let job = ctx.daily_reset_job();

    job.run(today()).await.unwrap();
    let first = ctx.fixtures.all_users().await.unwrap();
    job.run(today()).await.unwrap();
    let second = ctx.fixtures.all_users().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn it_should_restore_free_quota_after_reset() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.create_user(504, today(), 5, false).await.unwrap();
    let quota = ctx.quota_service();
    assert!(!quota.allow(504).await.unwrap());

    ctx.daily_reset_job().run(today()).await.unwrap();

    assert!(quota.allow(504).await.unwrap());
}
