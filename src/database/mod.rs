use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::error::Result;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub(crate) mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

pub const DATABASE_URL_ARG: &str = "--database-url";

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Open the database given by `--database-url` and bring its schema up to date.
pub fn init_db() -> Result<DbPool> {
    let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
    let pool = create_pool(&database_url)?;
    let mut connection = pool.get().map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut *connection)?;

    Ok(pool)
}

fn create_pool(database_url: &str) -> Result<DbPool, DatabaseError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(log_error_and_return(ConnectionFailed))
}

/// Run `function` against a fresh, fully migrated database living in a temp folder.
#[cfg(test)]
pub fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(DbPool) -> T,
{
    let temp_dir = crate::tools::test::tests::temp_dir();
    let database_url = temp_dir.join("database.db").to_str().unwrap().to_owned();
    let pool = create_pool(&database_url).unwrap();
    run_migrations(&mut *pool.get().unwrap()).unwrap();

    let result = function(pool);
    let _ = std::fs::remove_dir_all(temp_dir);

    result
}
