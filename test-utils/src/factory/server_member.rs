//! Membership factory for linking users to servers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a user as a member of a server.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - ID of the server to join
/// - `user_id` - ID of the joining user
///
/// # Returns
/// - `Ok(entity::server_member::Model)` - Created membership entry
/// - `Err(DbErr)` - Database error during insert
pub async fn add_member(
    db: &DatabaseConnection,
    server_id: i32,
    user_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates `count` fresh users and adds all of them to the server.
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - The users that joined
/// - `Err(DbErr)` - Database error during insert
pub async fn add_members(
    db: &DatabaseConnection,
    server_id: i32,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        let user = crate::factory::user::create_user(db).await?;
        add_member(db, server_id, user.id).await?;
        users.push(user);
    }

    Ok(users)
}
