//! Startup seeding orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::{SeedData, SeedError, SeedOutcome, Seeder};
use crate::outbound::persistence::{
    DbHandle, DieselOfferRepository, DieselOrderRepository, DieselUserRepository,
};

use super::ServerSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed parsing or persistence failed.
    #[error("seeding error: {0}")]
    Seeding(#[from] SeedError),
}

/// Load seed data into `db` when enabled.
///
/// Returns `None` when seeding is switched off.
///
/// # Examples
///
/// ```
/// use marketplace::bootstrap::seed_on_startup;
/// use marketplace::outbound::persistence::DbHandle;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let db = DbHandle::in_memory().expect("open store");
/// let outcome = seed_on_startup(true, None, &db).await.expect("seed");
/// assert!(outcome.is_some_and(|counts| counts.users > 0));
/// # });
/// ```
///
/// # Errors
///
/// Fails when the seed file cannot be read, a record is malformed, or the
/// store rejects a write.
pub async fn seed_on_startup(
    enabled: bool,
    seed_path: Option<&Path>,
    db: &DbHandle,
) -> Result<Option<SeedOutcome>, StartupSeedingError> {
    if !enabled {
        info!(reason = "disabled", "seeding skipped");
        return Ok(None);
    }

    let (data, source) = match seed_path {
        Some(path) => (load_seed_file(path)?, path.display().to_string()),
        None => (SeedData::embedded()?, "embedded".to_owned()),
    };

    let seeder = Seeder::new(
        Arc::new(DieselUserRepository::new(db.clone())),
        Arc::new(DieselOrderRepository::new(db.clone())),
        Arc::new(DieselOfferRepository::new(db.clone())),
    );
    let outcome = seeder.apply(data).await?;
    info!(
        source,
        users = outcome.users,
        orders = outcome.orders,
        offers = outcome.offers,
        "seed data applied"
    );
    Ok(Some(outcome))
}

impl ServerSettings {
    /// Seed `db` according to these settings.
    ///
    /// # Errors
    ///
    /// See [`seed_on_startup`].
    pub async fn seed(&self, db: &DbHandle) -> Result<Option<SeedOutcome>, StartupSeedingError> {
        seed_on_startup(self.seed_enabled(), self.seed_path.as_deref(), db).await
    }
}

fn load_seed_file(path: &Path) -> Result<SeedData, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;
    Ok(SeedData::from_json(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserRepository;
    use std::io::Write;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write seed");
        file
    }

    #[tokio::test]
    async fn disabled_seeding_leaves_store_empty() {
        let db = DbHandle::in_memory().expect("open store");
        let outcome = seed_on_startup(false, None, &db).await.expect("skip");
        assert!(outcome.is_none());

        let users = DieselUserRepository::new(db).list().await.expect("list");
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn seed_file_overrides_embedded_data() {
        let file = write_seed(
            r#"{"users": [{"first_name": "Only"}], "orders": [], "offers": []}"#,
        );
        let db = DbHandle::in_memory().expect("open store");

        let outcome = seed_on_startup(true, Some(file.path()), &db)
            .await
            .expect("seed")
            .expect("seeding enabled");

        assert_eq!(outcome.users, 1);
        let users = DieselUserRepository::new(db).list().await.expect("list");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].fields.first_name.as_deref(), Some("Only"));
    }

    #[tokio::test]
    async fn malformed_seed_date_aborts() {
        let file = write_seed(r#"{"orders": [{"name": "Bad", "start_date": "2013-02-08"}]}"#);
        let db = DbHandle::in_memory().expect("open store");

        let err = seed_on_startup(true, Some(file.path()), &db)
            .await
            .expect_err("seeding must fail");

        assert!(matches!(
            err,
            StartupSeedingError::Seeding(SeedError::InvalidDate { index: 0, .. })
        ));
    }

    #[tokio::test]
    async fn missing_seed_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        let db = DbHandle::in_memory().expect("open store");

        let err = seed_on_startup(true, Some(&path), &db)
            .await
            .expect_err("missing file must fail");

        assert!(matches!(err, StartupSeedingError::SeedRead { .. }));
    }

    #[tokio::test]
    async fn unset_settings_seed_the_embedded_data() {
        let settings = ServerSettings {
            host: None,
            port: None,
            database_url: None,
            seed_enabled: None,
            seed_path: None,
        };
        let db = DbHandle::open(settings.database_url()).expect("open store");

        let outcome = settings
            .seed(&db)
            .await
            .expect("seed")
            .expect("seeding on by default");

        assert_eq!(outcome.users, 5);
        assert_eq!(outcome.orders, 4);
        assert_eq!(outcome.offers, 6);
    }
}
