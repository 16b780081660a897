use photo_api::config::db::DbKind;
use photo_api::infra::state::build_state;
use photo_api::state::app_state::AppState;
use photo_api::state::security_config::{SecurityConfig, MIN_BCRYPT_COST};

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Test key, cheapest bcrypt cost.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET).with_bcrypt_cost(MIN_BCRYPT_COST)
}

/// Fresh migrated in-memory database per call.
pub async fn build_test_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .with_security(test_security())
        .build()
        .await
        .expect("build sqlite test state")
}
