//! Projector integration tests
//!
//! Exercises the two-tier attribute cache and the translation attachment
//! against stub ports, without a database or Redis.

use crate::cache::{FieldCache, MemoryFieldCache};
use crate::context::ShopContext;
use crate::errors::{ProjectionError, SchemaError};
use crate::fields::FieldSet;
use crate::introspect::SchemaIntrospector;
use crate::projector::FieldProjector;
use crate::query_builder::QueryBuilder;
use crate::static_fields::EntityKind;
use crate::translation::TranslatedEntity;
use async_trait::async_trait;
use cache_system::CacheError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Introspector over a fixed table map, counting round trips
struct StubIntrospector {
    tables: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

impl StubIntrospector {
    fn new(tables: &[(&str, &[&str])]) -> Self {
        Self {
            tables: tables
                .iter()
                .map(|(table, columns)| {
                    (
                        table.to_string(),
                        columns.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchemaIntrospector for StubIntrospector {
    async fn columns_of(&self, table_name: &str) -> Result<Vec<String>, SchemaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tables
            .get(table_name)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownTable(table_name.to_string()))
    }
}

/// Cache wrapper counting reads and writes
struct CountingCache {
    inner: MemoryFieldCache,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl CountingCache {
    fn new() -> Self {
        Self {
            inner: MemoryFieldCache::new(),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl FieldCache for CountingCache {
    async fn get(&self, key: &str) -> Result<Option<FieldSet>, CacheError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, fields: &FieldSet) -> Result<(), CacheError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, fields).await
    }
}

fn projector_with(
    tables: &[(&str, &[&str])],
) -> (FieldProjector, Arc<StubIntrospector>, Arc<CountingCache>) {
    let introspector = Arc::new(StubIntrospector::new(tables));
    let cache = Arc::new(CountingCache::new());
    let projector = FieldProjector::new(introspector.clone(), cache.clone());
    (projector, introspector, cache)
}

#[tokio::test]
async fn test_attribute_fields_rendering() {
    let (projector, _, _) = projector_with(&[("x", &["id", "name"])]);

    let fields = projector.attribute_fields("x", "y").await.unwrap();
    assert_eq!(
        fields.render(),
        vec!["y.id as __y_id", "y.name as __y_name"]
    );
}

#[tokio::test]
async fn test_attribute_fields_introspects_once() {
    let (projector, introspector, cache) =
        projector_with(&[("s_articles_attributes", &["id", "articleID", "attr1"])]);

    let first = projector
        .attribute_fields("s_articles_attributes", "productAttribute")
        .await
        .unwrap();
    let second = projector
        .attribute_fields("s_articles_attributes", "productAttribute")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(introspector.call_count(), 1);
    assert_eq!(cache.puts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_attribute_fields_served_from_external_cache() {
    let introspector = Arc::new(StubIntrospector::new(&[]));
    let cache = Arc::new(CountingCache::new());

    let shared = FieldSet::from_columns("categoryAttribute", &["id", "categoryID"]);
    cache.put("s_categories_attributes", &shared).await.unwrap();
    cache.puts.store(0, Ordering::SeqCst);

    let projector = FieldProjector::new(introspector.clone(), cache.clone());

    let fields = projector
        .attribute_fields("s_categories_attributes", "categoryAttribute")
        .await
        .unwrap();
    assert_eq!(fields, shared);

    // Memoized now: a second call touches neither tier below the memo
    let again = projector
        .attribute_fields("s_categories_attributes", "categoryAttribute")
        .await
        .unwrap();
    assert_eq!(again, shared);

    assert_eq!(introspector.call_count(), 0);
    assert_eq!(cache.gets.load(Ordering::SeqCst), 2);
    assert_eq!(cache.puts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_table_propagates() {
    let (projector, _, _) = projector_with(&[]);

    let err = projector.attribute_fields("s_missing", "missing").await;
    assert!(matches!(
        err,
        Err(ProjectionError::Schema(SchemaError::UnknownTable(table))) if table == "s_missing"
    ));
}

#[tokio::test]
async fn test_entity_fields_static_then_attributes() {
    let (projector, _, _) =
        projector_with(&[("s_articles_attributes", &["id", "articleID", "attr1"])]);

    let rendered = projector
        .entity_fields(EntityKind::Product)
        .await
        .unwrap()
        .render();

    let static_len = EntityKind::Product.static_fields().len();
    assert_eq!(rendered.len(), static_len + 3);
    assert_eq!(rendered[0], "product.id as __product_id");
    assert_eq!(
        rendered[static_len],
        "productAttribute.id as __productAttribute_id"
    );
    assert_eq!(
        rendered[static_len + 1],
        "productAttribute.articleID as __productAttribute_articleID"
    );
}

#[tokio::test]
async fn test_entity_fields_without_attribute_table() {
    let (projector, introspector, _) = projector_with(&[]);

    let fields = projector.entity_fields(EntityKind::Tax).await.unwrap();
    assert_eq!(
        fields.render(),
        vec![
            "tax.id as __tax_id",
            "tax.tax as __tax_tax",
            "tax.description as __tax_description"
        ]
    );
    assert_eq!(introspector.call_count(), 0);
}

#[tokio::test]
async fn test_translation_noop_for_default_shop() {
    let (projector, _, _) = projector_with(&[]);
    let mut query = QueryBuilder::new();

    projector
        .attach_translation(&mut query, TranslatedEntity::Product, &ShopContext::default_shop(1))
        .unwrap();

    assert!(query.joins().is_empty());
    assert!(query.select_columns().is_empty());
}

#[tokio::test]
async fn test_translation_without_fallback() {
    let (projector, _, _) = projector_with(&[]);
    let mut query = QueryBuilder::new();

    // Fallback equals the current language: one join, one select
    let context = ShopContext::sub_shop(2, 2);
    projector
        .attach_translation(&mut query, TranslatedEntity::Manufacturer, &context)
        .unwrap();

    assert_eq!(query.joins().len(), 1);
    assert_eq!(
        query.select_columns(),
        ["manufacturerTranslation.objectdata as __manufacturer_translation"]
    );
    assert_eq!(query.parameter(":language"), Some(&json!(2)));
    assert_eq!(query.parameter(":manufacturerType"), Some(&json!("supplier")));
    assert_eq!(query.parameter(":languageFallback"), None);
}

#[tokio::test]
async fn test_translation_with_fallback() {
    let (projector, _, _) = projector_with(&[]);
    let mut query = QueryBuilder::new();

    let context = ShopContext::sub_shop(2, 1);
    projector
        .attach_translation(&mut query, TranslatedEntity::Product, &context)
        .unwrap();

    assert_eq!(query.joins().len(), 2);
    assert_eq!(
        query.select_columns(),
        [
            "productTranslation.objectdata as __product_translation",
            "productTranslationFallback.objectdata as __product_translation_fallback",
        ]
    );
    assert_eq!(query.parameter(":language"), Some(&json!(2)));
    assert_eq!(query.parameter(":languageFallback"), Some(&json!(1)));

    // Products are translated by the variant's parent article id
    let join_sql = query.build_join_clause();
    assert!(join_sql.contains("productTranslation.objectkey = variant.articleID"));
    assert!(join_sql.contains("productTranslationFallback.objectlanguage = :languageFallback"));
}

#[tokio::test]
async fn test_configurator_attaches_group_and_option() {
    let (projector, _, _) = projector_with(&[]);

    let mut query = QueryBuilder::new();
    projector
        .attach_translation(
            &mut query,
            TranslatedEntity::Configurator,
            &ShopContext::sub_shop(2, 2),
        )
        .unwrap();
    assert_eq!(query.joins().len(), 2);
    assert_eq!(query.select_columns().len(), 2);

    let mut query = QueryBuilder::new();
    projector
        .attach_translation(
            &mut query,
            TranslatedEntity::Configurator,
            &ShopContext::sub_shop(2, 1),
        )
        .unwrap();
    assert_eq!(query.joins().len(), 4);
    assert_eq!(query.select_columns().len(), 4);
}

#[tokio::test]
async fn test_constant_object_keys_preserved() {
    let (projector, _, _) = projector_with(&[]);
    let context = ShopContext::sub_shop(2, 2);

    for (entity, join_alias) in [
        (TranslatedEntity::Unit, "unitTranslation"),
        (TranslatedEntity::Country, "countryTranslation"),
        (TranslatedEntity::CountryState, "stateTranslation"),
    ] {
        let mut query = QueryBuilder::new();
        projector
            .attach_translation(&mut query, entity, &context)
            .unwrap();
        assert!(
            query
                .build_join_clause()
                .contains(&format!("{}.objectkey = 1", join_alias)),
            "{join_alias} must join on the constant object key"
        );
    }
}

#[tokio::test]
async fn test_repeated_attachment_rejected() {
    let (projector, _, _) = projector_with(&[]);
    let mut query = QueryBuilder::new();
    let context = ShopContext::sub_shop(2, 1);

    projector
        .attach_translation(&mut query, TranslatedEntity::Variant, &context)
        .unwrap();
    let joins_before = query.joins().len();

    let err = projector
        .attach_translation(&mut query, TranslatedEntity::Variant, &context)
        .unwrap_err();
    assert!(matches!(
        err,
        ProjectionError::DuplicateJoinAlias(alias) if alias == "variantTranslation"
    ));

    // The rejected call must not have mutated the query
    assert_eq!(query.joins().len(), joins_before);
}

#[tokio::test]
async fn test_property_translations_attach_all_three() {
    let (projector, _, _) = projector_with(&[]);

    let mut query = QueryBuilder::new();
    projector
        .attach_property_translations(&mut query, &ShopContext::sub_shop(2, 2))
        .unwrap();
    assert_eq!(query.joins().len(), 3);

    // The historically shifted objecttype literals are contract
    assert_eq!(query.parameter(":setTranslation"), Some(&json!("propertygroup")));
    assert_eq!(query.parameter(":groupTranslation"), Some(&json!("propertyoption")));
    assert_eq!(query.parameter(":optionTranslation"), Some(&json!("propertyvalue")));

    let mut query = QueryBuilder::new();
    projector
        .attach_property_translations(&mut query, &ShopContext::sub_shop(2, 1))
        .unwrap();
    assert_eq!(query.joins().len(), 6);
    assert_eq!(query.select_columns().len(), 6);
}

#[tokio::test]
async fn test_property_translations_noop_for_default_shop() {
    let (projector, _, _) = projector_with(&[]);

    let mut query = QueryBuilder::new();
    projector
        .attach_property_translations(&mut query, &ShopContext::default_shop(1))
        .unwrap();
    assert!(query.joins().is_empty());
    assert!(query.select_columns().is_empty());
}
