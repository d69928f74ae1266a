//! Conformance tests for the get-by-id endpoint.

mod common;

use playercheck_model::PlayerId;

#[tokio::test]
async fn test_get_supervisor_returns_full_record() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    let player = ctx
        .service()
        .get_by_id(ctx.supervisor_id())
        .await?
        .expect_success("get supervisor");
    assert_eq!(player.id, ctx.supervisor_id());
    assert_eq!(player.login, ctx.supervisor_login());
    assert_eq!(player.role, playercheck_model::Role::Supervisor);

    common::finish(ctx).await
}

#[tokio::test]
async fn test_get_returns_submitted_fields() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    let payload = common::valid_user(&ctx.config().fixture_marker);
    let created = ctx
        .tracker()
        .create_tracked(&payload, ctx.supervisor_login())
        .await?
        .expect_success("create user");

    let fetched = ctx
        .service()
        .get_by_id(created.id)
        .await?
        .expect_success("get created player");
    assert_eq!(fetched.login, payload.login);
    assert_eq!(fetched.screen_name, payload.screen_name);
    assert_eq!(fetched.gender, payload.gender);
    assert_eq!(fetched.age, payload.age);
    assert_eq!(fetched.role, payload.role);

    common::finish(ctx).await
}

#[tokio::test]
async fn test_get_unknown_id_is_not_success() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    // An id past everything currently listed cannot belong to a live player.
    let max_id = ctx
        .service()
        .list_all()
        .await?
        .iter()
        .map(|p| p.id.0)
        .max()
        .unwrap_or(0);
    let outcome = ctx.service().get_by_id(PlayerId(max_id + 100_000)).await?;
    assert!(
        !outcome.is_success(),
        "got a player for an unknown id: {outcome:?}"
    );

    common::finish(ctx).await
}

#[tokio::test]
async fn test_get_zero_or_negative_id_is_not_success() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    // Ids are backend-assigned and positive; zero and negatives can never
    // resolve to a player.
    for id in [PlayerId(0), PlayerId(-1), PlayerId(-100)] {
        let outcome = ctx.service().get_by_id(id).await?;
        assert!(!outcome.is_success(), "got a player for id {id}: {outcome:?}");
    }

    common::finish(ctx).await
}
