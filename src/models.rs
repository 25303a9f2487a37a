use {
    mongodb::bson::{self, Document},
    serde::{Deserialize, Serialize},
};

/// Databases the server owns; never provisioned.
pub const RESERVED_DATABASES: [&str; 3] = ["admin", "config", "local"];

/// The only role ever granted.
pub const READ_WRITE_ROLE: &str = "readWrite";

pub fn is_reserved(database: &str) -> bool {
    RESERVED_DATABASES.contains(&database)
}

/// Keeps the user-created databases, in the order the server listed them.
pub fn target_databases<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().filter(|name| !is_reserved(name)).collect()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn read_write(database: &str) -> Self {
        Self {
            role: READ_WRITE_ROLE.to_string(),
            db: database.to_string(),
        }
    }
}

/// Typed `createUser` command. Field order matters: the command name has to
/// be the first key of the document sent to the server.
#[derive(Serialize, Clone)]
pub struct CreateUser {
    #[serde(rename = "createUser")]
    pub username: String,
    pub pwd: String,
    pub roles: Vec<RoleGrant>,
}

impl CreateUser {
    pub fn read_write(username: &str, password: &str, database: &str) -> Self {
        Self {
            username: username.to_string(),
            pwd: password.to_string(),
            roles: vec![RoleGrant::read_write(database)],
        }
    }

    pub fn to_document(&self) -> bson::ser::Result<Document> {
        bson::to_document(self)
    }
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("username", &self.username)
            .field("pwd", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_target_databases_drops_reserved() {
        let targets = target_databases(names(&["admin", "config", "local", "sales", "inventory"]));

        assert_eq!(targets, names(&["sales", "inventory"]));
    }

    #[test]
    fn test_target_databases_only_reserved() {
        assert!(target_databases(names(&["local", "admin", "config"])).is_empty());
        assert!(target_databases(Vec::new()).is_empty());
    }

    #[test]
    fn test_reserved_match_is_exact() {
        assert!(!is_reserved("Admin"));
        assert!(!is_reserved("admin_archive"));
        assert!(!is_reserved("localhost"));
        assert!(is_reserved("config"));
    }

    #[test]
    fn test_create_user_document_layout() {
        let cmd = CreateUser::read_write("milad", "s3cret", "sales");
        let document = cmd.to_document().unwrap();

        assert_eq!(document.keys().next().map(String::as_str), Some("createUser"));
        assert_eq!(document.get_str("createUser").unwrap(), "milad");
        assert_eq!(document.get_str("pwd").unwrap(), "s3cret");

        let roles = document.get_array("roles").unwrap();
        assert_eq!(roles.len(), 1);

        let grant = roles[0].as_document().unwrap();
        assert_eq!(grant.get_str("role").unwrap(), "readWrite");
        assert_eq!(grant.get_str("db").unwrap(), "sales");
    }

    #[test]
    fn test_create_user_debug_hides_password() {
        let cmd = CreateUser::read_write("milad", "s3cret", "sales");
        let rendered = format!("{:?}", cmd);

        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("milad"));
    }
}
