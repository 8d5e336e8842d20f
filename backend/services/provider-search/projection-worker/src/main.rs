// backend/services/provider-search/projection-worker/src/main.rs

use provider_search::infrastructure::bootstrap::run_projection_worker;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    run_projection_worker().await
}
