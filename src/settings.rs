use serde::{Deserialize, Serialize};

use crate::errors::{ErrorKind, MangroveError, MangroveResult};

/// Connection settings for a repository.
///
/// Carries the store connection string and the logical database name.
/// Typically deserialized from an application configuration file or read
/// from the environment with [`DatabaseSettings::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub connection_string: String,
    pub database_name: String,
}

impl DatabaseSettings {
    /// Configuration section name for file-based settings.
    pub const CONFIG_SECTION: &'static str = "database";

    /// Environment variable holding the connection string.
    pub const URI_ENV: &'static str = "MANGROVE_URI";

    /// Environment variable holding the database name.
    pub const DATABASE_ENV: &'static str = "MANGROVE_DATABASE";

    pub fn new(
        connection_string: impl Into<String>,
        database_name: impl Into<String>,
    ) -> DatabaseSettings {
        DatabaseSettings {
            connection_string: connection_string.into(),
            database_name: database_name.into(),
        }
    }

    /// Reads settings from `MANGROVE_URI` and `MANGROVE_DATABASE`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either variable is unset or empty.
    pub fn from_env() -> MangroveResult<DatabaseSettings> {
        let connection_string = read_env(Self::URI_ENV)?;
        let database_name = read_env(Self::DATABASE_ENV)?;
        Ok(DatabaseSettings {
            connection_string,
            database_name,
        })
    }
}

fn read_env(name: &str) -> MangroveResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MangroveError::new(
            &format!("Environment variable {} is not set", name),
            ErrorKind::InvalidArgument,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_both_fields() {
        let settings = DatabaseSettings::new("mongodb://localhost:27017", "library");
        assert_eq!(settings.connection_string, "mongodb://localhost:27017");
        assert_eq!(settings.database_name, "library");
    }

    #[test]
    fn settings_round_trip_through_serde() {
        let settings = DatabaseSettings::new("mongodb://localhost:27017", "library");
        let doc = bson::to_document(&settings).unwrap();
        assert_eq!(
            doc,
            bson::doc! {
                "connection_string": "mongodb://localhost:27017",
                "database_name": "library",
            }
        );
        let restored: DatabaseSettings = bson::from_document(doc).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn missing_env_var_is_invalid_argument() {
        let err = read_env("MANGROVE_TEST_UNSET_VARIABLE").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_env_var_is_invalid_argument() {
        std::env::set_var("MANGROVE_TEST_EMPTY_VARIABLE", "  ");
        let err = read_env("MANGROVE_TEST_EMPTY_VARIABLE").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
    }

    #[test]
    fn present_env_var_is_read() {
        std::env::set_var("MANGROVE_TEST_SET_VARIABLE", "mongodb://localhost:27017");
        let value = read_env("MANGROVE_TEST_SET_VARIABLE").unwrap();
        assert_eq!(value, "mongodb://localhost:27017");
    }
}
