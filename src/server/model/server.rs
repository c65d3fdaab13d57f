use sea_orm::DbErr;

use crate::{
    model::server::{ServerDto, ServerListQuery},
    server::{
        error::{auth::AuthError, AppError},
        model::caller::Caller,
    },
};

/// Typed parameters for listing servers.
///
/// Built from the raw query string by `from_query`, which performs all parsing and
/// validation up front so the listing pipeline only deals with well-formed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListParams {
    /// Only servers whose category name equals this value.
    pub category: Option<String>,
    /// Maximum number of servers returned.
    pub qty: Option<u64>,
    /// Only servers the caller is a member of.
    pub by_user: bool,
    /// Only the server with this ID, taken from the already truncated result.
    pub by_server_id: Option<i32>,
    /// Annotate each server with its member count.
    pub with_num_members: bool,
}

impl ServerListParams {
    /// Parses the raw query string of a server listing request.
    ///
    /// Flags are enabled only by the literal string `"true"`, and empty values count
    /// as absent. Caller-scoped filters (`by_user`, `by_serverid`) are rejected for
    /// anonymous callers before any value is parsed, so those requests fail the same
    /// way whatever the remaining parameters hold.
    ///
    /// # Arguments
    /// - `query` - Query string values as sent by the client
    /// - `caller` - Identity of the requester
    ///
    /// # Returns
    /// - `Ok(ServerListParams)` - Parsed parameters
    /// - `Err(AppError::AuthErr(AuthenticationRequired))` - Anonymous caller used a
    ///   caller-scoped filter
    /// - `Err(AppError::BadRequest)` - `qty` is not a non-negative 64-bit integer
    ///   or `by_serverid` is not a valid server ID
    pub fn from_query(query: ServerListQuery, caller: &Caller) -> Result<Self, AppError> {
        let by_user = is_true(query.by_user.as_deref());
        let by_server_id = non_empty(query.by_serverid);

        if (by_user || by_server_id.is_some()) && !caller.is_authenticated() {
            return Err(AuthError::AuthenticationRequired.into());
        }

        let qty = non_empty(query.qty)
            .map(|raw| {
                raw.parse::<i64>()
                    .ok()
                    .and_then(|qty| u64::try_from(qty).ok())
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid qty value: {}", raw)))
            })
            .transpose()?;

        let by_server_id = by_server_id
            .map(|raw| {
                raw.parse::<i32>()
                    .map_err(|_| AppError::BadRequest("Server value error.".to_string()))
            })
            .transpose()?;

        Ok(Self {
            category: non_empty(query.category),
            qty,
            by_user,
            by_server_id,
            with_num_members: is_true(query.with_num_members.as_deref()),
        })
    }
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Server record as seen by the listing, with its category resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub category: String,
    pub description: Option<String>,
}

impl Server {
    /// Converts a server entity and its joined category at the repository boundary.
    ///
    /// # Arguments
    /// - `server` - Server entity model
    /// - `category` - Category joined through `server.category_id`
    ///
    /// # Returns
    /// - `Ok(Server)` - Converted domain model
    /// - `Err(DbErr::Custom)` - The join produced no category, which the foreign key
    ///   should make impossible
    pub fn from_entity(
        server: entity::server::Model,
        category: Option<entity::category::Model>,
    ) -> Result<Self, DbErr> {
        let category = category.ok_or_else(|| {
            DbErr::Custom(format!(
                "Server {} references missing category {}",
                server.id, server.category_id
            ))
        })?;

        Ok(Self {
            id: server.id,
            name: server.name,
            owner_id: server.owner_id,
            category: category.name,
            description: server.description,
        })
    }
}

/// One entry of a server listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerListing {
    pub server: Server,
    /// Number of members, present only when member counts were requested.
    pub num_members: Option<u64>,
}

impl ServerListing {
    /// Converts the listing entry to a DTO for API responses.
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.server.id,
            name: self.server.name,
            owner: self.server.owner_id,
            category: self.server.category,
            description: self.server.description,
            num_members: self.num_members,
        }
    }
}
