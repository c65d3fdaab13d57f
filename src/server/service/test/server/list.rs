use super::*;

/// Tests listing without parameters.
///
/// Verifies every server is returned in ID order and none are annotated.
///
/// Expected: Ok with all servers, `num_members` absent
#[tokio::test]
async fn returns_all_servers_without_parameters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let gaming = create_servers_in(db, "gaming", owner.id, 2).await?;
    let music = create_servers_in(db, "music", owner.id, 1).await?;

    let service = ServerService::new(db);
    let listings = service
        .list(&ServerListParams::default(), &Caller::Anonymous)
        .await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.server.id).collect();
    assert_eq!(ids, vec![gaming[0].id, gaming[1].id, music[0].id]);
    assert!(listings.iter().all(|l| l.num_members.is_none()));

    Ok(())
}

/// Tests the category filter.
///
/// Expected: Ok with only servers of that category
#[tokio::test]
async fn filters_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    create_servers_in(db, "gaming", owner.id, 2).await?;
    let music = create_servers_in(db, "music", owner.id, 1).await?;

    let params = ServerListParams {
        category: Some("music".to_string()),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].server.id, music[0].id);
    assert_eq!(listings[0].server.category, "music");

    Ok(())
}

/// Tests an unknown category name.
///
/// Expected: Ok with empty vector, not an error
#[tokio::test]
async fn returns_empty_for_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    create_servers_in(db, "gaming", owner.id, 2).await?;

    let params = ServerListParams {
        category: Some("Gaming".to_string()),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert!(listings.is_empty());

    Ok(())
}

/// Tests the membership filter for an anonymous caller.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn by_user_requires_authentication() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server_with_dependencies(db).await?;

    let params = ServerListParams {
        by_user: true,
        category: Some("anything".to_string()),
        with_num_members: true,
        ..Default::default()
    };

    let service = ServerService::new(db);
    let result = service.list(&params, &Caller::Anonymous).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired))
    ));

    Ok(())
}

/// Tests the membership filter for an authenticated caller.
///
/// Expected: Ok with only servers the caller joined
#[tokio::test]
async fn filters_by_caller_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 3).await?;
    factory::add_member(db, servers[0].id, member.id).await?;
    factory::add_member(db, servers[2].id, member.id).await?;

    let params = ServerListParams {
        by_user: true,
        ..Default::default()
    };
    let caller = Caller::Authenticated { user_id: member.id };

    let service = ServerService::new(db);
    let listings = service.list(&params, &caller).await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.server.id).collect();
    assert_eq!(ids, vec![servers[0].id, servers[2].id]);

    Ok(())
}

/// Tests member count annotation.
///
/// Verifies servers without members are annotated with zero.
///
/// Expected: Ok with `num_members` on every server
#[tokio::test]
async fn annotates_member_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 2).await?;
    factory::add_members(db, servers[0].id, 4).await?;

    let params = ServerListParams {
        with_num_members: true,
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert_eq!(listings[0].num_members, Some(4));
    assert_eq!(listings[1].num_members, Some(0));

    Ok(())
}

/// Tests member counts are not reduced by the membership filter.
///
/// Counts every membership of the server, not only the caller's own entry that the
/// membership filter matched, so a joined server with 3 members reports 3 rather
/// than 1.
///
/// Expected: Ok with the full member count of each joined server
#[tokio::test]
async fn membership_filter_keeps_full_member_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 1).await?;
    factory::add_member(db, servers[0].id, member.id).await?;
    factory::add_members(db, servers[0].id, 2).await?;

    let params = ServerListParams {
        by_user: true,
        with_num_members: true,
        ..Default::default()
    };
    let caller = Caller::Authenticated { user_id: member.id };

    let service = ServerService::new(db);
    let listings = service.list(&params, &caller).await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].num_members, Some(3));

    Ok(())
}

/// Tests truncation to `qty`.
///
/// Expected: Ok with the first `qty` servers in order
#[tokio::test]
async fn truncates_to_qty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 4).await?;

    let params = ServerListParams {
        qty: Some(2),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    let ids: Vec<i32> = listings.iter().map(|l| l.server.id).collect();
    assert_eq!(ids, vec![servers[0].id, servers[1].id]);

    Ok(())
}

/// Tests a `qty` larger than the result.
///
/// Expected: Ok with every server unchanged
#[tokio::test]
async fn qty_larger_than_result_returns_all() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    create_servers_in(db, "gaming", owner.id, 3).await?;

    let params = ServerListParams {
        qty: Some(50),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert_eq!(listings.len(), 3);

    Ok(())
}

/// Tests a `qty` of zero.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn zero_qty_returns_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    create_servers_in(db, "gaming", owner.id, 2).await?;

    let params = ServerListParams {
        qty: Some(0),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert!(listings.is_empty());

    Ok(())
}

/// Tests a `qty` beyond what the database can bind as a limit.
///
/// Expected: Ok with every server, no truncation
#[tokio::test]
async fn max_qty_returns_all() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 3).await?;
    factory::add_members(db, servers[0].id, 2).await?;

    let params = ServerListParams {
        qty: Some(u64::MAX),
        with_num_members: true,
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0].num_members, Some(2));

    Ok(())
}

/// Tests selecting an existing server by ID.
///
/// Expected: Ok with exactly that server
#[tokio::test]
async fn selects_server_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 3).await?;

    let params = ServerListParams {
        by_server_id: Some(servers[1].id),
        ..Default::default()
    };
    let caller = Caller::Authenticated { user_id: owner.id };

    let service = ServerService::new(db);
    let listings = service.list(&params, &caller).await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].server.id, servers[1].id);

    Ok(())
}

/// Tests selecting a server ID that doesn't exist.
///
/// Expected: Err(AppError::BadRequest("Server ID {id} not found"))
#[tokio::test]
async fn unknown_server_id_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::create_server_with_dependencies(db).await?;

    let params = ServerListParams {
        by_server_id: Some(9999),
        ..Default::default()
    };
    let caller = Caller::Authenticated { user_id: owner.id };

    let service = ServerService::new(db);
    let result = service.list(&params, &caller).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Server ID 9999 not found"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests selecting an existing server by ID as an anonymous caller.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn server_id_requires_authentication() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, server) = factory::create_server_with_dependencies(db).await?;

    let params = ServerListParams {
        by_server_id: Some(server.id),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let result = service.list(&params, &Caller::Anonymous).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired))
    ));

    Ok(())
}

/// Tests the ID filter applies to the truncated result.
///
/// Verifies a server cut off by `qty` is reported as not found.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn server_id_outside_truncated_result_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 3).await?;

    let params = ServerListParams {
        qty: Some(1),
        by_server_id: Some(servers[2].id),
        ..Default::default()
    };
    let caller = Caller::Authenticated { user_id: owner.id };

    let service = ServerService::new(db);
    let result = service.list(&params, &caller).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests category, annotation and truncation together.
///
/// With 5 gaming and 3 non-gaming servers, asking for 2 gaming servers with
/// member counts returns the first 2 gaming servers with their own counts.
///
/// Expected: Ok with 2 annotated gaming servers
#[tokio::test]
async fn combines_category_counts_and_qty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let gaming = create_servers_in(db, "gaming", owner.id, 5).await?;
    let other = create_servers_in(db, "music", owner.id, 3).await?;
    factory::add_members(db, gaming[0].id, 2).await?;
    factory::add_members(db, gaming[1].id, 1).await?;
    factory::add_members(db, other[0].id, 6).await?;

    let params = ServerListParams {
        category: Some("gaming".to_string()),
        with_num_members: true,
        qty: Some(2),
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listings = service.list(&params, &Caller::Anonymous).await?;

    assert_eq!(listings.len(), 2);
    assert!(listings.iter().all(|l| l.server.category == "gaming"));
    assert_eq!(listings[0].server.id, gaming[0].id);
    assert_eq!(listings[0].num_members, Some(2));
    assert_eq!(listings[1].server.id, gaming[1].id);
    assert_eq!(listings[1].num_members, Some(1));

    Ok(())
}

/// Tests membership and ID filters intersect for a member.
///
/// Expected: Ok with only the selected server
#[tokio::test]
async fn member_selects_joined_server_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 2).await?;
    factory::add_member(db, servers[0].id, member.id).await?;
    factory::add_member(db, servers[1].id, member.id).await?;

    let params = ServerListParams {
        by_user: true,
        by_server_id: Some(servers[1].id),
        ..Default::default()
    };
    let caller = Caller::Authenticated { user_id: member.id };

    let service = ServerService::new(db);
    let listings = service.list(&params, &caller).await?;

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].server.id, servers[1].id);

    Ok(())
}

/// Tests membership and ID filters intersect for a non-member.
///
/// The membership filter removes the server before the ID filter runs, so the
/// ID is reported as not found.
///
/// Expected: Err(AppError::BadRequest("Server ID {id} not found"))
#[tokio::test]
async fn non_member_cannot_select_server_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let servers = create_servers_in(db, "gaming", owner.id, 1).await?;

    let params = ServerListParams {
        by_user: true,
        by_server_id: Some(servers[0].id),
        ..Default::default()
    };
    let caller = Caller::Authenticated {
        user_id: outsider.id,
    };

    let service = ServerService::new(db);
    let result = service.list(&params, &caller).await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, format!("Server ID {} not found", servers[0].id))
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}
