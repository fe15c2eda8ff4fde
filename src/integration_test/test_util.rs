use crate::{app_env, db};
use dotenv::dotenv;
use lazy_static::lazy_static;
use rand::{Rng, thread_rng};
use sqlx::{Connection, PgConnection, PgPool};
use std::{env, future::Future};
use tokio::runtime::Runtime;

lazy_static! {
    static ref TOKIO_RT: Runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Tokio runtime failed to initialize");
}

/// A throwaway database created for a single test
struct TestDatabase {
    base_url: String,
    name: String,
}

impl TestDatabase {
    async fn create(base_url: &str) -> Result<Self, sqlx::Error> {
        let db_id: u32 = thread_rng().gen_range(10_000..99_999);
        let name = format!("test_db_{db_id}");

        let mut conn = PgConnection::connect(base_url).await?;
        sqlx::query(&format!("CREATE DATABASE {name}"))
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        Ok(Self {
            base_url: base_url.to_owned(),
            name,
        })
    }

    fn url(&self) -> String {
        format!("{}/{}", self.base_url, self.name)
    }

    async fn drop_database(self) {
        let conn = PgConnection::connect(&self.base_url).await;
        let mut conn = match conn {
            Ok(cxn) => cxn,
            Err(conn_err) => {
                println!(
                    "Failed to reconnect to drop test database {}, please remove it manually. Error: {}",
                    self.name, conn_err
                );
                return;
            }
        };

        let drop_result = sqlx::query(&format!("DROP DATABASE {}", self.name))
            .execute(&mut conn)
            .await;
        if let Err(db_err) = drop_result {
            println!(
                "Failed to drop test database {}, please remove it manually. Error: {}",
                self.name, db_err
            );
        }
    }
}

/// Creates an empty, fully migrated database for a test and removes it once the test finishes.
///
/// Expects that the TEST_DB_URL environment variable is populated
pub fn prepare_db_and_test<F, R>(test_fn: F)
where
    R: Future<Output = ()>,
    F: FnOnce(PgPool) -> R,
{
    if dotenv().is_err() {
        println!("Test is running without .env file.");
    }

    TOKIO_RT.block_on(async move {
        let base_url = env::var(app_env::test::TEST_DB_URL).expect(
            "You must provide the TEST_DB_URL environment variable as the base postgres connection string",
        );
        let test_db = match TestDatabase::create(&base_url).await {
            Ok(tdb) => tdb,
            Err(db_err) => panic!("Failed to create test database: {}", db_err),
        };

        let pool = db::connect_sqlx(&test_db.url())
            .await
            .expect("Failed to connect to the test database");
        test_fn(pool.clone()).await;

        pool.close().await;
        test_db.drop_database().await;
    });
}
