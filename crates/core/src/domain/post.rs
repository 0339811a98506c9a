// Blog Post Domain Model

use serde::{Deserialize, Deserializer, Serialize};

/// Post ID (store-assigned, monotonically increasing)
pub type PostId = i64;

/// Epoch milliseconds
pub type Timestamp = i64;

/// Blog Post Entity
///
/// One article row as it exists in the store. `id`, `created_at` and
/// `updated_at` are always populated by the store, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub reading_time: i32, // minutes
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields a caller supplies to create a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub reading_time: i32,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}

impl NewBlogPost {
    /// Create a published test post in the "wellness" category
    ///
    /// **Note**: This method should only be used in tests.
    pub fn new_test(slug: impl Into<String>, published_at: Option<Timestamp>) -> Self {
        let slug = slug.into();
        Self {
            title: format!("Test post {}", slug),
            excerpt: "A short summary".to_string(),
            content: "<p>Drink water, sleep well, walk daily.</p>".to_string(),
            featured_image: None,
            author_name: "Test Author".to_string(),
            category: "wellness".to_string(),
            tags: vec!["test".to_string()],
            reading_time: 1,
            meta_title: None,
            meta_description: None,
            is_published: true,
            published_at,
            slug,
        }
    }
}

impl BlogPost {
    /// True when every caller-supplied field equals `new`
    ///
    /// Server-assigned fields (`id`, `created_at`, `updated_at`) are ignored.
    pub fn matches(&self, new: &NewBlogPost) -> bool {
        self.slug == new.slug
            && self.title == new.title
            && self.excerpt == new.excerpt
            && self.content == new.content
            && self.featured_image == new.featured_image
            && self.author_name == new.author_name
            && self.category == new.category
            && self.tags == new.tags
            && self.reading_time == new.reading_time
            && self.meta_title == new.meta_title
            && self.meta_description == new.meta_description
            && self.is_published == new.is_published
            && self.published_at == new.published_at
    }
}

/// Partial update
///
/// `None` leaves a column untouched. Nullable columns take `Option<Option<T>>`:
/// `Some(None)` clears the value, `Some(Some(v))` sets it. In JSON an absent
/// key means `None` and an explicit `null` means `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub featured_image: Option<Option<String>>,
    pub author_name: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub reading_time: Option<i32>,
    #[serde(deserialize_with = "deserialize_some")]
    pub meta_title: Option<Option<String>>,
    #[serde(deserialize_with = "deserialize_some")]
    pub meta_description: Option<Option<String>>,
    pub is_published: Option<bool>,
    #[serde(deserialize_with = "deserialize_some")]
    pub published_at: Option<Option<Timestamp>>,
}

impl BlogPostPatch {
    /// True when the patch changes nothing but `updated_at`
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// Any present value (including `null`) becomes `Some`, absent keys stay `None` via `default`
fn deserialize_some<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
