//! BlogService behaviour against a real SQLite store
//!
//! One test per observable property of the content operations.

mod common;

use vitality_blog_core::domain::{BlogPostPatch, NewBlogPost};
use vitality_blog_core::error::AppError;

fn post_in(slug: &str, category: &str, published_at: i64) -> NewBlogPost {
    let mut post = NewBlogPost::new_test(slug, Some(published_at));
    post.category = category.to_string();
    post
}

fn draft(slug: &str, published_at: i64) -> NewBlogPost {
    let mut post = NewBlogPost::new_test(slug, Some(published_at));
    post.is_published = false;
    post
}

#[tokio::test]
async fn test_created_post_round_trips_by_slug() {
    let service = common::setup().await;

    let mut new_post = NewBlogPost::new_test("hydration-basics", Some(1_704_700_800_000));
    new_post.featured_image = Some("/images/hydration.jpg".to_string());
    new_post.meta_title = Some("Hydration basics".to_string());
    new_post.meta_description = Some("How much water you need".to_string());
    new_post.tags = vec!["water".to_string(), "energy".to_string()];
    new_post.reading_time = 4;

    let created = service.create(new_post.clone()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, common::START);

    let found = service
        .get_by_slug("hydration-basics")
        .await
        .unwrap()
        .expect("post should exist");
    assert!(found.matches(&new_post));
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_list_published_excludes_drafts() {
    let service = common::setup().await;

    service.create(post_in("a", "sleep", 1_000)).await.unwrap();
    service.create(draft("b", 2_000)).await.unwrap();
    service.create(post_in("c", "fitness", 3_000)).await.unwrap();

    let posts = service.list_published().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.is_published));
    assert!(posts.iter().all(|p| p.slug != "b"));
}

#[tokio::test]
async fn test_list_published_is_newest_first() {
    let service = common::setup().await;

    // inserted out of date order on purpose
    for (slug, at) in [("mid", 2_000), ("oldest", 1_000), ("newest", 3_000), ("also-mid", 2_000)] {
        service.create(post_in(slug, "wellness", at)).await.unwrap();
    }

    let posts = service.list_published().await.unwrap();
    let dates: Vec<_> = posts.iter().map(|p| p.published_at).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "got {:?}", dates);
    assert_eq!(posts.first().unwrap().slug, "newest");
    assert_eq!(posts.last().unwrap().slug, "oldest");
}

#[tokio::test]
async fn test_list_by_category_is_exact_and_published_only() {
    let service = common::setup().await;

    service.create(post_in("n1", "nutrition", 1_000)).await.unwrap();
    service.create(post_in("n2", "nutrition", 2_000)).await.unwrap();
    service.create(post_in("N3", "Nutrition", 3_000)).await.unwrap();
    service.create(post_in("s1", "sleep", 4_000)).await.unwrap();
    let mut hidden = draft("n4", 5_000);
    hidden.category = "nutrition".to_string();
    service.create(hidden).await.unwrap();

    let posts = service.list_published_by_category("nutrition").await.unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["n2", "n1"]);
    assert!(posts
        .iter()
        .all(|p| p.category == "nutrition" && p.is_published));

    assert!(service
        .list_published_by_category("")
        .await
        .unwrap()
        .is_empty());
    assert!(service
        .list_published_by_category("no-such-category")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_update_title_bumps_updated_at() {
    let service = common::setup().await;

    let created = service
        .create(NewBlogPost::new_test("mindful-mornings", Some(1_000)))
        .await
        .unwrap();

    let patch = BlogPostPatch {
        title: Some("X".to_string()),
        ..Default::default()
    };
    let updated = service.update(created.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);

    let found = service
        .get_by_slug("mindful-mornings")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title, "X");
    assert!(found.updated_at > created.updated_at);
    assert_eq!(found.created_at, created.created_at);
    assert_eq!(found.excerpt, created.excerpt);
}

#[tokio::test]
async fn test_empty_patch_still_refreshes_updated_at() {
    let service = common::setup().await;

    let created = service
        .create(NewBlogPost::new_test("stretching", None))
        .await
        .unwrap();

    let updated = service
        .update(created.id, BlogPostPatch::default())
        .await
        .unwrap()
        .unwrap();

    assert!(updated.updated_at > created.updated_at);
    assert!(updated.matches(&NewBlogPost::new_test("stretching", None)));
}

#[tokio::test]
async fn test_update_unknown_id_is_absent_not_error() {
    let service = common::setup().await;

    let patch = BlogPostPatch {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = service.update(9999, patch).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_then_lookup_is_absent_and_repeat_delete_succeeds() {
    let service = common::setup().await;

    let created = service
        .create(NewBlogPost::new_test("to-delete", Some(1_000)))
        .await
        .unwrap();

    assert!(service.delete(created.id).await.unwrap());
    assert!(service.get_by_id(created.id).await.unwrap().is_none());
    assert!(service.get_by_slug("to-delete").await.unwrap().is_none());

    // idempotent
    assert!(service.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_clear_all_empties_listing() {
    let service = common::setup().await;

    for i in 0..5 {
        service
            .create(NewBlogPost::new_test(format!("post-{}", i), Some(i * 1_000)))
            .await
            .unwrap();
    }
    assert_eq!(service.list_published().await.unwrap().len(), 5);

    assert!(service.clear_all().await.unwrap());
    assert!(service.list_published().await.unwrap().is_empty());
    assert!(service.list_all().await.unwrap().is_empty());

    // clearing an empty table still succeeds
    assert!(service.clear_all().await.unwrap());
}

#[tokio::test]
async fn test_duplicate_slug_is_rejected_by_store() {
    let service = common::setup().await;

    service
        .create(NewBlogPost::new_test("a", None))
        .await
        .unwrap();

    let err = service
        .create(NewBlogPost::new_test("a", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    // the original row is untouched
    assert_eq!(service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_by_slug_missing_is_absent_not_error() {
    let service = common::setup().await;

    let found = service.get_by_slug("does-not-exist").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let service = common::setup().await;

    let first = service
        .create(NewBlogPost::new_test("first", None))
        .await
        .unwrap();
    service.delete(first.id).await.unwrap();

    let second = service
        .create(NewBlogPost::new_test("second", None))
        .await
        .unwrap();
    assert!(second.id > first.id);
}
