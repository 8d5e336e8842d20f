mod setup_postgres_test_db;

pub use setup_postgres_test_db::*;
