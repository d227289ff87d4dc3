//! Integration tests for the public field projection surface
//!
//! Builds a projector from the prelude exports against stub collaborators
//! and assembles a full translated product query, without PostgreSQL or
//! Redis.

use std::sync::Arc;
use storefront::prelude::*;

/// Introspector over a fixed attribute schema
struct FixedSchema;

#[async_trait::async_trait]
impl SchemaIntrospector for FixedSchema {
    async fn columns_of(&self, table_name: &str) -> Result<Vec<String>, SchemaError> {
        match table_name {
            "s_articles_attributes" => Ok(vec![
                "id".to_string(),
                "articleID".to_string(),
                "articledetailsID".to_string(),
            ]),
            other => Err(SchemaError::UnknownTable(other.to_string())),
        }
    }
}

#[tokio::test]
async fn test_translated_product_query_assembly() {
    let projector = FieldProjector::new(Arc::new(FixedSchema), Arc::new(MemoryFieldCache::new()));

    let mut query = QueryBuilder::new();
    query.add_select_columns(
        projector
            .entity_fields(EntityKind::Product)
            .await
            .unwrap()
            .render(),
    );
    query.add_select_columns(projector.static_fields(EntityKind::Variant).render());

    let context = ShopContext::sub_shop(2, 1);
    projector
        .attach_translation(&mut query, TranslatedEntity::Product, &context)
        .unwrap();
    projector
        .attach_translation(&mut query, TranslatedEntity::Variant, &context)
        .unwrap();

    let select = query.build_select_clause();
    assert!(select.starts_with("product.id as __product_id"));
    assert!(select.contains("productAttribute.articleID as __productAttribute_articleID"));
    assert!(select.contains("variant.ordernumber as __variant_ordernumber"));
    assert!(select.contains("productTranslation.objectdata as __product_translation"));
    assert!(select.contains("variantTranslationFallback.objectdata as __variant_translation_fallback"));

    // One primary and one fallback join per translated entity
    assert_eq!(query.joins().len(), 4);

    let joins = query.build_join_clause();
    assert!(joins.contains("LEFT JOIN s_core_translations productTranslation ON"));
    assert!(joins.contains("productTranslation.objectkey = variant.articleID"));
    assert!(joins.contains("variantTranslation.objectlanguage = :language"));

    assert_eq!(query.parameter(":language"), Some(&serde_json::json!(2)));
    assert_eq!(
        query.parameter(":languageFallback"),
        Some(&serde_json::json!(1))
    );
}

#[tokio::test]
async fn test_default_shop_query_carries_no_translations() {
    let projector = FieldProjector::new(Arc::new(FixedSchema), Arc::new(MemoryFieldCache::new()));

    let mut query = QueryBuilder::new();
    query.add_select_columns(
        projector
            .entity_fields(EntityKind::Product)
            .await
            .unwrap()
            .render(),
    );

    let context = ShopContext::default_shop(1);
    projector
        .attach_translation(&mut query, TranslatedEntity::Product, &context)
        .unwrap();
    projector
        .attach_property_translations(&mut query, &context)
        .unwrap();

    assert!(query.joins().is_empty());
    assert_eq!(query.build_join_clause(), "");
}

#[tokio::test]
async fn test_missing_attribute_table_is_fatal() {
    let projector = FieldProjector::new(Arc::new(FixedSchema), Arc::new(MemoryFieldCache::new()));

    // Media attributes are not part of the stub schema
    let err = projector.entity_fields(EntityKind::Media).await.unwrap_err();
    assert!(matches!(
        err,
        ProjectionError::Schema(SchemaError::UnknownTable(table)) if table == "s_media_attributes"
    ));
}
