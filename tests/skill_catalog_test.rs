mod helpers;

use futures::future::join_all;
use passive_skills::{CatalogError, MockTransport, SkillCatalog, Transport, TransportError};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use helpers::fixtures::sample_skills;

fn catalog_over(transport: &Arc<MockTransport>) -> SkillCatalog {
    SkillCatalog::new(Arc::clone(transport) as Arc<dyn Transport>)
}

#[tokio::test]
async fn test_sequential_calls_issue_one_request() {
    let transport = Arc::new(MockTransport::with_skills(sample_skills()));
    let catalog = catalog_over(&transport);

    catalog.search("abc").await.unwrap();
    catalog.list().await.unwrap();
    catalog.get_field("abc", "name").await.unwrap();
    catalog.filter_by_tier("notable").await.unwrap();

    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_concurrent_first_calls_share_one_load() {
    let transport = Arc::new(
        MockTransport::with_skills(sample_skills()).with_delay(Duration::from_millis(50)),
    );
    let catalog = catalog_over(&transport);

    let results = join_all((0..8).map(|_| catalog.search("Legend"))).await;

    for result in results {
        let skill = result.unwrap().expect("Legend should be found");
        assert_eq!(skill.details.tier, "Legendary");
    }
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_across_tasks() {
    let transport = Arc::new(
        MockTransport::with_skills(sample_skills()).with_delay(Duration::from_millis(20)),
    );
    let catalog = Arc::new(catalog_over(&transport));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move { catalog.list().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().len(), 4);
    }
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_search_prefers_exact_key() {
    let transport = Arc::new(MockTransport::with_skills(sample_skills()));
    let catalog = catalog_over(&transport);

    let skill = catalog.search("abc").await.unwrap().unwrap();
    assert_eq!(skill.name, "Alpha");
}

#[tokio::test]
async fn test_search_falls_back_to_name() {
    let transport = Arc::new(MockTransport::with_skills(sample_skills()));
    let catalog = catalog_over(&transport);

    let skill = catalog.search("Fireball").await.unwrap().unwrap();
    assert_eq!(skill.name, "fireball");
    assert!(catalog.search("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_field() {
    let transport = Arc::new(MockTransport::with_skills(sample_skills()));
    let catalog = catalog_over(&transport);

    assert_eq!(catalog.get_field("abc", "name").await.unwrap(), Some(json!("Alpha")));
    assert_eq!(catalog.get_field("abc", "tier").await.unwrap(), Some(json!("Common")));
    assert_eq!(catalog.get_field("abc", "nope").await.unwrap(), None);
    assert_eq!(catalog.get_field("fireball", "element").await.unwrap(), Some(json!("fire")));
    assert_eq!(catalog.get_field("missing", "name").await.unwrap(), None);
}

#[tokio::test]
async fn test_filter_by_tier_matches_case_insensitively() {
    let transport = Arc::new(MockTransport::with_skills(sample_skills()));
    let catalog = catalog_over(&transport);

    let notable = catalog.filter_by_tier("Notable").await.unwrap();
    let names: Vec<_> = notable.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["fireball", "abc"]);
}

#[tokio::test]
async fn test_error_response_rejects_every_pending_call() {
    let transport = Arc::new(
        MockTransport::with_error("save file not loaded").with_delay(Duration::from_millis(50)),
    );
    let catalog = catalog_over(&transport);

    let results = join_all((0..5).map(|_| catalog.list())).await;

    for result in results {
        let err = result.unwrap_err();
        assert!(err.to_string().contains("save file not loaded"));
    }
    assert_eq!(transport.request_count(), 1);
    assert!(!catalog.is_loaded());
}

#[tokio::test]
async fn test_failed_load_does_not_wedge_later_calls() {
    let transport = Arc::new(MockTransport::with_error("not ready"));
    let catalog = catalog_over(&transport);

    assert!(catalog.list().await.is_err());
    assert!(catalog.list().await.is_err());
    assert_eq!(transport.request_count(), 2);

    transport.set_skills(sample_skills()).await;
    assert_eq!(catalog.list().await.unwrap().len(), 4);
    assert_eq!(transport.request_count(), 3);

    catalog.list().await.unwrap();
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let transport = Arc::new(MockTransport::failing(TransportError::Connection(
        "socket closed".to_string(),
    )));
    let catalog = catalog_over(&transport);

    let err = catalog.search("abc").await.unwrap_err();
    assert!(
        matches!(err, CatalogError::Transport(ref message) if message.contains("socket closed"))
    );
}

#[tokio::test]
async fn test_abandoned_load_keeps_running() {
    let transport = Arc::new(
        MockTransport::with_skills(sample_skills()).with_delay(Duration::from_millis(100)),
    );
    let catalog = catalog_over(&transport);

    let first = tokio::time::timeout(Duration::from_millis(10), catalog.list()).await;
    assert!(first.is_err(), "first call should time out while loading");

    let skills = catalog.list().await.unwrap();
    assert_eq!(skills.len(), 4);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_subscribe_sees_population_once() {
    let transport = Arc::new(MockTransport::with_skills(sample_skills()));
    let catalog = catalog_over(&transport);

    let mut populated = catalog.subscribe();
    assert!(!*populated.borrow());

    catalog.list().await.unwrap();

    populated.changed().await.unwrap();
    assert!(*populated.borrow_and_update());
    assert!(catalog.is_loaded());

    catalog.list().await.unwrap();
    assert!(!populated.has_changed().unwrap());
}
