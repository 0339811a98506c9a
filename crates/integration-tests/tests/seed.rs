//! Seed routine against a real SQLite store

mod common;

use vitality_blog_core::application::blog::catalog;
use vitality_blog_core::domain::NewBlogPost;
use vitality_blog_core::error::AppError;

fn catalog_published_count() -> usize {
    catalog::builtin_posts()
        .unwrap()
        .iter()
        .filter(|p| p.is_published)
        .count()
}

#[tokio::test]
async fn test_seed_publishes_catalog_entries() {
    let service = common::setup().await;

    let report = service.seed_initial_posts().await.unwrap();
    let expected = catalog_published_count();

    assert_eq!(report.published, expected);
    assert_eq!(report.cleared, 0);
    assert_eq!(service.list_published().await.unwrap().len(), expected);
    assert_eq!(service.list_all().await.unwrap().len(), report.inserted);
}

#[tokio::test]
async fn test_seeded_articles_carry_estimated_reading_time() {
    let service = common::setup().await;
    service.seed_initial_posts().await.unwrap();

    let posts = service.list_published().await.unwrap();
    assert!(posts.len() >= 24);
    assert!(posts.iter().all(|p| p.reading_time >= 1));
    assert!(
        posts.iter().any(|p| p.reading_time > 1),
        "every seeded article reads in a minute"
    );
}

#[tokio::test]
async fn test_seed_twice_is_not_cumulative() {
    let service = common::setup().await;

    let first = service.seed_initial_posts().await.unwrap();
    let second = service.seed_initial_posts().await.unwrap();

    assert_eq!(second.cleared, first.inserted as u64);
    assert_eq!(
        service.list_published().await.unwrap().len(),
        catalog_published_count()
    );
}

#[tokio::test]
async fn test_seed_discards_manual_edits() {
    let service = common::setup().await;

    service
        .create(NewBlogPost::new_test("hand-written", Some(1_000)))
        .await
        .unwrap();
    service.seed_initial_posts().await.unwrap();

    assert!(service.get_by_slug("hand-written").await.unwrap().is_none());
}

#[tokio::test]
async fn test_seeded_posts_are_findable_by_slug() {
    let service = common::setup().await;
    service.seed_initial_posts().await.unwrap();

    for expected in catalog::builtin_posts().unwrap() {
        let found = service
            .get_by_slug(&expected.slug)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("missing seeded post {}", expected.slug));
        assert!(found.matches(&expected), "mismatch for {}", expected.slug);
    }
}

#[tokio::test]
async fn test_failed_seed_keeps_previous_rows() {
    let service = common::setup().await;

    service
        .create(NewBlogPost::new_test("survivor", Some(1_000)))
        .await
        .unwrap();

    // second entry collides with the first inside the same run
    let posts = vec![
        NewBlogPost::new_test("fresh", Some(2_000)),
        NewBlogPost::new_test("fresh", Some(3_000)),
        NewBlogPost::new_test("never-inserted", Some(4_000)),
    ];
    let err = service.seed_posts(&posts).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    let slugs: Vec<String> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(slugs, vec!["survivor"]);
}

#[tokio::test]
async fn test_seed_with_custom_list() {
    let service = common::setup().await;

    let mut hidden = NewBlogPost::new_test("hidden", None);
    hidden.is_published = false;
    let posts = vec![NewBlogPost::new_test("only", Some(1_000)), hidden];

    let report = service.seed_posts(&posts).await.unwrap();
    assert_eq!(report.inserted, 2);
    assert_eq!(report.published, 1);

    let published = service.list_published().await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].slug, "only");
}
