//! Shared helpers for gateway integration tests.

use std::sync::Mutex;

use restree::config::GatewayConfig;
use restree::enhancer::{
    ChildrenEnhancer, EnhancementPipeline, LinkEnhancer, PayloadEnhancer,
    StaticPrefixUrlGenerator,
};
use restree::gateway::ResourceGateway;
use restree::path::ResourcePath;
use restree::registry::RepositoryRegistry;
use restree::repository::InMemoryRepository;
use restree::resource::Payload;
use std::sync::Arc;

pub const BASE_URL: &str = "https://cms.example/api";

/// Serializes `RESTREE_*` environment access so parallel tests cannot
/// observe each other's overrides.
static RESTREE_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with an environment variable set, restoring the previous
/// value (or absence) afterwards.
pub fn with_env_var<F, R>(name: &str, value: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = RESTREE_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let previous = std::env::var(name).ok();
    std::env::set_var(name, value);

    let result = f();

    match previous {
        Some(original) => std::env::set_var(name, original),
        None => std::env::remove_var(name),
    }
    result
}

/// Seed one editable `content` repository and one read-only `archive`
/// repository, both holding `/a` (with children) and `/a/b`.
pub fn seeded_repository(name: &str) -> Arc<InMemoryRepository> {
    let repo = Arc::new(InMemoryRepository::new(name));
    repo.insert(
        &ResourcePath::parse("/a").unwrap(),
        Some("Section A".to_string()),
        Payload::map([
            ("title".to_string(), Payload::from("A")),
            (
                "meta".to_string(),
                Payload::map([("draft".to_string(), Payload::from(false))]),
            ),
        ]),
    )
    .unwrap();
    repo.insert(
        &ResourcePath::parse("/a/b").unwrap(),
        None,
        Payload::from("leaf"),
    )
    .unwrap();
    repo
}

/// A gateway over seeded repositories, with the full standard enhancer
/// set (payload, links, children) in that order.
pub fn seeded_gateway() -> ResourceGateway {
    let registry = Arc::new(
        RepositoryRegistry::builder()
            .editable("content", seeded_repository("content"))
            .read_only("archive", seeded_repository("archive"))
            .build(),
    );

    let config = GatewayConfig::default();
    let pipeline = EnhancementPipeline::with_enhancers(vec![
        Arc::new(PayloadEnhancer::new(config.serialization.max_depth)),
        Arc::new(LinkEnhancer::new(Arc::new(StaticPrefixUrlGenerator::new(
            BASE_URL,
        )))),
        Arc::new(ChildrenEnhancer::new(registry.clone())),
    ]);

    ResourceGateway::new(registry, pipeline)
}
