use serde::{Deserialize, Serialize};

/// Server entry returned by the server listing.
///
/// `num_members` is only present in the JSON when the client asked for member
/// counts with `with_num_members=true`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    /// User ID of the server owner.
    pub owner: i32,
    /// Name of the category the server belongs to.
    pub category: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
}

/// Query string of the server listing exactly as the client sent it.
///
/// Every value stays a string here; typing and validation happen in
/// `ServerListParams::from_query`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ServerListQuery {
    pub category: Option<String>,
    pub qty: Option<String>,
    pub by_user: Option<String>,
    pub by_serverid: Option<String>,
    pub with_num_members: Option<String>,
}
