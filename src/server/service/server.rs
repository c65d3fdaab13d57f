use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::{ServerQuery, ServerRepository},
    error::AppError,
    model::{
        caller::Caller,
        server::{ServerListParams, ServerListing},
    },
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the given parameters.
    ///
    /// Steps run in a fixed order and each narrows the result of the previous one:
    /// 1. category name
    /// 2. caller membership (`by_user`)
    /// 3. member count annotation (`with_num_members`)
    /// 4. truncation to `qty`
    /// 5. server ID (`by_server_id`), taken from the truncated result
    ///
    /// Member counts cover every member of a server and are not reduced by the
    /// membership filter. Truncation keeps the first servers by ID and runs inside
    /// both the listing and the count query; counts are per server, so annotating
    /// the truncated rows gives the same result as annotating first.
    ///
    /// # Arguments
    /// - `params` - Parsed listing parameters
    /// - `caller` - Identity of the requester
    ///
    /// # Returns
    /// - `Ok(Vec<ServerListing>)` - Matching servers, possibly empty
    /// - `Err(AppError::AuthErr(AuthenticationRequired))` - `by_user` or `by_server_id`
    ///   requested by an anonymous caller
    /// - `Err(AppError::BadRequest)` - `by_server_id` matched nothing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        params: &ServerListParams,
        caller: &Caller,
    ) -> Result<Vec<ServerListing>, AppError> {
        let repo = ServerRepository::new(self.db);

        let mut query = ServerQuery::new();

        if let Some(category) = &params.category {
            query = query.in_category(category);
        }

        if params.by_user {
            query = query.with_member(caller.require_user_id()?);
        }

        if let Some(qty) = params.qty {
            query = query.take(qty);
        }

        let servers = repo.find(&query).await?;

        let counts = if params.with_num_members {
            Some(repo.member_counts(&query).await?)
        } else {
            None
        };

        let mut listings: Vec<ServerListing> = servers
            .into_iter()
            .map(|server| {
                let num_members = counts
                    .as_ref()
                    .map(|counts| counts.get(&server.id).copied().unwrap_or(0));
                ServerListing {
                    server,
                    num_members,
                }
            })
            .collect();

        if let Some(server_id) = params.by_server_id {
            caller.require_user_id()?;

            listings.retain(|listing| listing.server.id == server_id);

            if listings.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Server ID {} not found",
                    server_id
                )));
            }
        }

        tracing::debug!("Listing {} servers", listings.len());

        Ok(listings)
    }
}
