use anyhow::Result;
use moviedex_core::seed_records;
use tracing::info;

use crate::render;
use crate::state::AppState;

/// Write the built-in films to the database in one batch.
pub async fn seed(state: &AppState) -> Result<String> {
    let written = state.upsert(seed_records()).await?;
    info!("Seeded {} movies", written);
    Ok(render::SEEDED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support;
    use moviedex_core::testing::MockTransport;

    #[tokio::test]
    async fn test_seed_twice_keeps_five_records() {
        let transport = MockTransport::new();
        let state = test_support::app(&transport);

        assert_eq!(seed(&state).await.unwrap(), render::SEEDED);
        seed(&state).await.unwrap();

        assert_eq!(state.fetch_all().await.unwrap().len(), 5);
        assert_eq!(transport.request_count().await, 0);
    }
}
