use serde::Serialize;

use crate::model::User;

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Registration response: the new row minus the password hash.
#[derive(Serialize, Debug)]
pub struct FilteredUser {
    pub id: i64,
    pub username: String,
}

impl From<&User> for FilteredUser {
    fn from(user: &User) -> Self {
        FilteredUser {
            id: user.id,
            username: user.username.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_user_omits_password() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password: "$argon2id$not-a-real-hash".to_string(),
        };
        let json = serde_json::to_value(FilteredUser::from(&user)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "alice");
        assert!(json.get("password").is_none());
    }
}
