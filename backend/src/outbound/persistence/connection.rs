//! Single owned SQLite connection shared by every repository.
//!
//! A transient `:memory:` database exists only inside the connection that
//! created it, so the handle keeps exactly one connection behind a mutex
//! rather than pooling. Diesel's SQLite driver is blocking; statements run
//! on Tokio's blocking thread pool and never stall the async workers.

use std::sync::{Arc, Mutex};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::domain::ports::RepositoryError;

/// Embedded migrations from the backend/migrations directory.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// URL of the transient in-memory database.
pub const IN_MEMORY_DATABASE_URL: &str = ":memory:";

/// Errors raised while opening the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// The database could not be opened.
    #[error("failed to open database {url}: {message}")]
    Open { url: String, message: String },

    /// Schema migrations failed to apply.
    #[error("failed to apply migrations: {message}")]
    Migrate { message: String },
}

impl ConnectionError {
    /// Create an open error for the given URL.
    pub fn open(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Open {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migrate(message: impl Into<String>) -> Self {
        Self::Migrate {
            message: message.into(),
        }
    }
}

/// Owned handle to the application's SQLite connection.
///
/// Cloning is cheap and every clone talks to the same database.
///
/// # Examples
///
/// ```
/// use marketplace::outbound::persistence::DbHandle;
///
/// let db = DbHandle::in_memory().expect("open in-memory store");
/// assert_eq!(db.database_url(), ":memory:");
/// ```
#[derive(Clone)]
pub struct DbHandle {
    connection: Arc<Mutex<SqliteConnection>>,
    database_url: Arc<str>,
}

impl std::fmt::Debug for DbHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbHandle")
            .field("database_url", &self.database_url)
            .finish_non_exhaustive()
    }
}

impl DbHandle {
    /// Open the database at `database_url` and apply pending migrations.
    ///
    /// Diesel switches SQLite foreign key enforcement on when it connects;
    /// the store turns it back off, so references to missing rows are kept
    /// as written and referenced rows can still be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Open`] when SQLite refuses the URL and
    /// [`ConnectionError::Migrate`] when the schema cannot be created.
    pub fn open(database_url: &str) -> Result<Self, ConnectionError> {
        let mut connection = SqliteConnection::establish(database_url)
            .map_err(|err| ConnectionError::open(database_url, err.to_string()))?;
        diesel::sql_query("PRAGMA foreign_keys = OFF")
            .execute(&mut connection)
            .map_err(|err| ConnectionError::open(database_url, err.to_string()))?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| ConnectionError::migrate(err.to_string()))?;
        info!(
            database_url,
            migrations = applied.len(),
            "database ready"
        );
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
            database_url: Arc::from(database_url),
        })
    }

    /// Open a fresh transient database.
    ///
    /// # Errors
    ///
    /// See [`DbHandle::open`].
    pub fn in_memory() -> Result<Self, ConnectionError> {
        Self::open(IN_MEMORY_DATABASE_URL)
    }

    /// URL the handle was opened with.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Run `operation` against the connection on the blocking pool.
    ///
    /// Calls are serialised; each one sees the effects of every call that
    /// completed before it.
    pub(crate) async fn run<T, F>(&self, operation: F) -> Result<T, RepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, RepositoryError> + Send + 'static,
    {
        let connection = Arc::clone(&self.connection);
        tokio::task::spawn_blocking(move || {
            let mut guard = connection.lock().map_err(|_| {
                debug!("sqlite connection mutex poisoned");
                RepositoryError::connection("database connection poisoned")
            })?;
            operation(&mut guard)
        })
        .await
        .map_err(|err| {
            debug!(error = %err, "blocking database task failed");
            RepositoryError::connection("database task aborted")
        })?
    }
}
