use super::helpers::{
    fixtures::{today, yesterday},
    test_settings, TestContext,
};
use chat_gateway_bot::domain::quota::QuotaStatus;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_allow_unknown_user() {
    let ctx = TestContext::new().await.unwrap();
    let quota = ctx.quota_service();

    assert!(quota.allow(200).await.unwrap());
    // The check alone must not create a row
    assert_eq!(ctx.fixtures.get_user(200).await.unwrap(), None);
}

#[tokio::test]
async fn it_should_block_free_user_after_daily_limit() {
    let ctx = TestContext::new().await.unwrap();
    let quota = ctx.quota_service();
    ctx.user_repo.ensure_user(201, "Eve").await.unwrap();

    for _ in 0..5 {
        assert!(quota.allow(201).await.unwrap());
        ctx.user_repo.record_usage(201).await.unwrap();
    }

    assert!(!quota.allow(201).await.unwrap());
    assert_eq!(
        quota.status(201).await.unwrap(),
        QuotaStatus {
            subscribed: false,
            used_today: 5,
            limit: 5,
        }
    );
}

#[tokio::test]
async fn it_should_always_allow_subscribed_user() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.create_user(202, today(), 1000, true).await.unwrap();

    assert!(ctx.quota_service().allow(202).await.unwrap());
}

#[tokio::test]
async fn it_should_allow_again_after_rollover() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.create_user(203, yesterday(), 5, false).await.unwrap();

    assert!(ctx.quota_service().allow(203).await.unwrap());
}

#[tokio::test]
async fn it_should_honor_configured_limit() {
    let mut settings = test_settings();
    settings.free_daily_limit = 2;
    let ctx = TestContext::with_settings(settings).await.unwrap();
    let quota = ctx.quota_service();
    ctx.fixtures.create_user(204, today(), 2, false).await.unwrap();

    assert_eq!(quota.free_daily_limit(), 2);
    assert!(!quota.allow(204).await.unwrap());
}

#[tokio::test]
async fn it_should_not_write_when_checking() {
    let ctx = TestContext::new().await.unwrap();
    let before = ctx.fixtures.create_user(205, yesterday(), 3, false).await.unwrap();

    ctx.quota_service().allow(205).await.unwrap();

    let after = ctx.fixtures.get_user(205).await.unwrap().unwrap();
    assert_eq!(before, after);
}
