use serde::{Deserialize, Serialize};

/// The account record the login screen checks credentials against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Role name, compared case-insensitively against `admin`
    #[serde(default)]
    pub roles: String,
}
