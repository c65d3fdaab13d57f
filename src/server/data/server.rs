//! Server data repository for database operations.
//!
//! This module provides `ServerQuery`, a builder that accumulates listing filters
//! before a single execution, and `ServerRepository`, which executes those queries
//! and computes member counts. All methods return domain models, converting SeaORM
//! entity models internally.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, Func, Query},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::server::Server;

/// Largest `LIMIT` the database accepts; SQLite binds limits as signed 64-bit.
const MAX_LIMIT: u64 = i64::MAX as u64;

/// Filters for a server listing, applied in the order they are added.
///
/// Nothing touches the database until the query is passed to `ServerRepository`.
/// Servers are always ordered by ID ascending so that truncation with `take` is
/// deterministic, and both the listing and the member counts run the same filters.
#[derive(Debug, Clone)]
pub struct ServerQuery {
    condition: Condition,
    limit: Option<u64>,
}

impl Default for ServerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerQuery {
    /// Starts a query over every server.
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
            limit: None,
        }
    }

    /// Keeps servers whose category name equals `name` exactly.
    pub fn in_category(mut self, name: &str) -> Self {
        self.condition = self
            .condition
            .add(entity::category::Column::Name.eq(name));
        self
    }

    /// Keeps servers the user is a member of.
    ///
    /// Membership is matched through a subquery rather than a join so the server
    /// rows, and therefore their member counts, are not affected by this filter.
    pub fn with_member(mut self, user_id: i32) -> Self {
        self.condition = self.condition.add(
            entity::server::Column::Id.in_subquery(
                Query::select()
                    .column(entity::server_member::Column::ServerId)
                    .from(entity::server_member::Entity)
                    .and_where(entity::server_member::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        );
        self
    }

    /// Keeps at most the first `qty` servers.
    ///
    /// Values beyond what the database can bind are clamped, which keeps every server.
    pub fn take(mut self, qty: u64) -> Self {
        self.limit = Some(qty.min(MAX_LIMIT));
        self
    }
}

/// Repository providing read access to servers and their memberships.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes a server query.
    ///
    /// # Arguments
    /// - `query` - Accumulated listing filters
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers ordered by ID, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, query: &ServerQuery) -> Result<Vec<Server>, DbErr> {
        let mut select = entity::prelude::Server::find()
            .find_also_related(entity::prelude::Category)
            .filter(query.condition.clone())
            .order_by_asc(entity::server::Column::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        select
            .all(self.db)
            .await?
            .into_iter()
            .map(|(server, category)| Server::from_entity(server, category))
            .collect()
    }

    /// Counts distinct members of every server a query selects.
    ///
    /// Runs as one grouped query with the same filters, ordering and limit as
    /// `find`, so the counted servers are exactly the listed ones. Servers without
    /// members are counted as zero.
    ///
    /// # Arguments
    /// - `query` - Accumulated listing filters
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, u64>)` - Member count keyed by server ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn member_counts(&self, query: &ServerQuery) -> Result<HashMap<i32, u64>, DbErr> {
        let mut select = entity::prelude::Server::find()
            .select_only()
            .column(entity::server::Column::Id)
            .column_as(
                Expr::from(Func::count_distinct(Expr::col((
                    entity::server_member::Entity,
                    entity::server_member::Column::UserId,
                )))),
                "num_members",
            )
            .join(JoinType::LeftJoin, entity::server::Relation::Category.def())
            .join(
                JoinType::LeftJoin,
                entity::server::Relation::ServerMember.def(),
            )
            .filter(query.condition.clone())
            .group_by(entity::server::Column::Id)
            .order_by_asc(entity::server::Column::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let counts: Vec<(i32, i64)> = select.into_tuple().all(self.db).await?;

        Ok(counts
            .into_iter()
            .map(|(server_id, count)| (server_id, u64::try_from(count).unwrap_or_default()))
            .collect())
    }
}
