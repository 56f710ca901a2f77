use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

use crate::display_opt;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: i32,                 // assigned by import or by the users_user_id_seq sequence
    pub email: Option<String>,        // set only through registration
    #[serde(skip_serializing)]
    pub password: Option<String>,     // stored verbatim
    pub age: Option<i32>,
    pub zipcode: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<User user_id={} email={}>",
            self.user_id,
            display_opt(self.email.as_ref())
        )
    }
}

/// One `u.user` line, reduced to the columns that are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: i32,
    pub age: i32,
    pub zipcode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: Option<&str>) -> User {
        User {
            user_id: 7,
            email: email.map(str::to_string),
            password: Some("hunter2".into()),
            age: Some(30),
            zipcode: Some("94110".into()),
        }
    }

    #[test]
    fn display_shows_id_then_email() {
        assert_eq!(user(Some("a@b.io")).to_string(), "<User user_id=7 email=a@b.io>");
        assert_eq!(user(None).to_string(), "<User user_id=7 email=None>");
    }

    #[test]
    fn password_is_not_serialized() {
        let json = serde_json::to_string(&user(Some("a@b.io"))).unwrap();
        assert!(json.contains("a@b.io"));
        assert!(!json.contains("hunter2"));
    }
}
