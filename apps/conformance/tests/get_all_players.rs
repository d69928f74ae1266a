//! Conformance tests for the list-all endpoint.

mod common;

#[tokio::test]
async fn test_list_contains_supervisor_seed() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    let players = ctx.service().list_all().await?;
    assert!(
        players.iter().any(|p| p.id == ctx.supervisor_id()),
        "supervisor seed missing from list of {} players",
        players.len()
    );

    common::finish(ctx).await
}

#[tokio::test]
async fn test_created_player_appears_in_list() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    let payload = common::valid_user(&ctx.config().fixture_marker);
    let created = ctx
        .tracker()
        .create_tracked(&payload, ctx.supervisor_login())
        .await?
        .expect_success("create user");

    let players = ctx.service().list_all().await?;
    let item = players
        .iter()
        .find(|p| p.id == created.id)
        .unwrap_or_else(|| panic!("created player {} not listed", created.id));
    assert_eq!(item.screen_name, payload.screen_name);
    assert_eq!(item.gender, payload.gender);
    assert_eq!(item.age, payload.age);

    common::finish(ctx).await
}

#[tokio::test]
async fn test_deleted_player_disappears_from_list() -> Result<(), Box<dyn std::error::Error>> {
    let Some(ctx) = common::live_context().await? else {
        return Ok(());
    };

    let payload = common::valid_user(&ctx.config().fixture_marker);
    let created = ctx
        .tracker()
        .create_tracked(&payload, ctx.supervisor_login())
        .await?
        .expect_success("create user");
    ctx.tracker()
        .delete_tracked(created.id, ctx.supervisor_login())
        .await?
        .expect_success("delete user");

    let players = ctx.service().list_all().await?;
    assert!(
        players.iter().all(|p| p.id != created.id),
        "deleted player {} still listed",
        created.id
    );

    common::finish(ctx).await
}
