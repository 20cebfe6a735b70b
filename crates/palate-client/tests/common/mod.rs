use std::sync::Arc;

use palate_client::{ClientConfig, MemoryTokenStore, PalateClient};
use palate_shared::telemetry::init_telemetry;

/// Client wired to a stub server, with a handle on its in-memory token store.
pub fn client_for(server_uri: &str) -> (PalateClient, Arc<MemoryTokenStore>) {
    init_telemetry();
    let store = Arc::new(MemoryTokenStore::new());
    let config = ClientConfig::for_base_url(server_uri);
    let client = PalateClient::new(&config, store.clone());
    (client, store)
}
