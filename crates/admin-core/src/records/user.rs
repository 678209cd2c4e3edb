use serde::{Deserialize, Serialize};

use super::{opt_text, RecordId, Resource};
use crate::record::Record;

/// Roles offered in the user dialog. Permissions, by contrast, come from
/// the server (`user-roles/menus`).
pub const ROLE_OPTIONS: &[&str] = &["Admin", "Editor", "Viewer"];

/// Role the server gives to exam candidates
pub const STUDENT_ROLE: &str = "Student";

/// A user together with its role and menu permissions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserRole {
    /// Add the permission if absent, remove it if present.
    pub fn toggle_permission(&mut self, permission: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p == permission) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(permission.to_string());
        }
    }

    pub fn is_student(&self) -> bool {
        self.role == STUDENT_ROLE
    }
}

impl Record for UserRole {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => opt_text(self.id),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "role" => Some(self.role.clone()),
            "permissions" => Some(self.permissions.join(", ")),
            _ => None,
        }
    }
}

impl Resource for UserRole {
    const BASE: &'static str = "user-roles";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "email", "role"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "role"];
    const FILTER_FIELD: Option<&'static str> = Some("role");
    const NOUN: &'static str = "User";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_permission_adds_then_removes() {
        let mut user = UserRole::default();
        user.toggle_permission("Courses");
        user.toggle_permission("Results");
        assert_eq!(user.permissions, vec!["Courses", "Results"]);

        user.toggle_permission("Courses");
        assert_eq!(user.permissions, vec!["Results"]);
    }

    #[test]
    fn permissions_render_as_joined_text() {
        let user = UserRole {
            permissions: vec!["Courses".into(), "Users".into()],
            ..Default::default()
        };
        assert_eq!(user.field("permissions").as_deref(), Some("Courses, Users"));
    }
}
