//! Translation joins
//!
//! Translated entities share one key-value translation table keyed by
//! (objecttype, objectkey, objectlanguage). Each translated entity kind maps
//! to a descriptor driving a left join for the current language and, when
//! the shop's fallback language differs, a second join for the fallback.
//! The selected payload is an opaque serialized blob; merging primary and
//! fallback blobs is the caller's job.

use crate::context::ShopContext;
use crate::errors::ProjectionError;
use crate::projector::FieldProjector;
use crate::query_builder::QueryBuilder;
use serde_json::json;

const TRANSLATION_TABLE: &str = "s_core_translations";

/// Entity kinds carrying rows in the shared translation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatedEntity {
    PropertySet,
    PropertyGroup,
    PropertyOption,
    Image,
    /// Configurator options are always translated alongside their group,
    /// so this kind attaches two joins per pass
    Configurator,
    Unit,
    Variant,
    Country,
    CountryState,
    Product,
    Manufacturer,
    ProductStream,
}

/// One left join against the translation table
struct TranslationSlot {
    /// objecttype literal identifying the translated entity class
    object_type: &'static str,
    /// Named parameter the objecttype literal is bound to
    type_param: &'static str,
    /// Alias the join hangs off
    from_alias: &'static str,
    /// Base join alias; the fallback pass appends its suffix
    join_alias: &'static str,
    /// objectkey expression. Unit, country and countryState rows are keyed
    /// by a literal 1 in the schema, and products by the variant's parent
    /// article id; both are contract, not mistakes to correct.
    key_expr: &'static str,
    /// Prefix of the published `__<prefix>_translation` column
    select_alias: &'static str,
}

impl TranslatedEntity {
    fn slots(self) -> &'static [TranslationSlot] {
        match self {
            TranslatedEntity::PropertySet => &[TranslationSlot {
                object_type: "propertygroup",
                type_param: ":setTranslation",
                from_alias: "propertySet",
                join_alias: "propertySetTranslation",
                key_expr: "propertySet.id",
                select_alias: "propertySet",
            }],
            TranslatedEntity::PropertyGroup => &[TranslationSlot {
                object_type: "propertyoption",
                type_param: ":groupTranslation",
                from_alias: "propertyGroup",
                join_alias: "propertyGroupTranslation",
                key_expr: "propertyGroup.id",
                select_alias: "propertyGroup",
            }],
            TranslatedEntity::PropertyOption => &[TranslationSlot {
                object_type: "propertyvalue",
                type_param: ":optionTranslation",
                from_alias: "propertyOption",
                join_alias: "propertyOptionTranslation",
                key_expr: "propertyOption.id",
                select_alias: "propertyOption",
            }],
            TranslatedEntity::Image => &[TranslationSlot {
                object_type: "articleimage",
                type_param: ":imageType",
                from_alias: "image",
                join_alias: "imageTranslation",
                key_expr: "image.id",
                select_alias: "image",
            }],
            TranslatedEntity::Configurator => &[
                TranslationSlot {
                    object_type: "configuratorgroup",
                    type_param: ":configuratorGroupType",
                    from_alias: "configuratorGroup",
                    join_alias: "configuratorGroupTranslation",
                    key_expr: "configuratorGroup.id",
                    select_alias: "configuratorGroup",
                },
                TranslationSlot {
                    object_type: "configuratoroption",
                    type_param: ":configuratorOptionType",
                    from_alias: "configuratorOption",
                    join_alias: "configuratorOptionTranslation",
                    key_expr: "configuratorOption.id",
                    select_alias: "configuratorOption",
                },
            ],
            TranslatedEntity::Unit => &[TranslationSlot {
                object_type: "config_units",
                type_param: ":unitType",
                from_alias: "variant",
                join_alias: "unitTranslation",
                key_expr: "1",
                select_alias: "unit",
            }],
            TranslatedEntity::Variant => &[TranslationSlot {
                object_type: "variant",
                type_param: ":variantType",
                from_alias: "variant",
                join_alias: "variantTranslation",
                key_expr: "variant.id",
                select_alias: "variant",
            }],
            TranslatedEntity::Country => &[TranslationSlot {
                object_type: "config_countries",
                type_param: ":countryType",
                from_alias: "country",
                join_alias: "countryTranslation",
                key_expr: "1",
                select_alias: "country",
            }],
            TranslatedEntity::CountryState => &[TranslationSlot {
                object_type: "config_country_states",
                type_param: ":stateType",
                from_alias: "countryState",
                join_alias: "stateTranslation",
                key_expr: "1",
                select_alias: "countryState",
            }],
            TranslatedEntity::Product => &[TranslationSlot {
                object_type: "article",
                type_param: ":productType",
                from_alias: "variant",
                join_alias: "productTranslation",
                key_expr: "variant.articleID",
                select_alias: "product",
            }],
            TranslatedEntity::Manufacturer => &[TranslationSlot {
                object_type: "supplier",
                type_param: ":manufacturerType",
                from_alias: "manufacturer",
                join_alias: "manufacturerTranslation",
                key_expr: "manufacturer.id",
                select_alias: "manufacturer",
            }],
            TranslatedEntity::ProductStream => &[TranslationSlot {
                object_type: "productStream",
                type_param: ":streamType",
                from_alias: "stream",
                join_alias: "streamTranslation",
                key_expr: "stream.id",
                select_alias: "stream",
            }],
        }
    }
}

impl FieldProjector {
    /// Attach the translation joins for an entity.
    ///
    /// No-op for the default shop, whose native columns already carry the
    /// correct language. Otherwise one join per slot for the current
    /// language, plus a second per slot for the fallback language when it
    /// differs. Attaching the same entity twice on one query is rejected.
    pub fn attach_translation(
        &self,
        query: &mut QueryBuilder,
        entity: TranslatedEntity,
        context: &ShopContext,
    ) -> Result<(), ProjectionError> {
        if context.is_default_shop() {
            return Ok(());
        }

        let with_fallback = context.fallback_language_id() != context.language_id();

        // Reject up front so a duplicate attachment cannot leave the query
        // half mutated.
        Self::ensure_not_attached(query, entity, with_fallback)?;

        Self::attach_with_suffix(query, entity, "")?;
        query.bind_parameter(":language", json!(context.language_id()));

        if with_fallback {
            Self::attach_with_suffix(query, entity, "Fallback")?;
            query.bind_parameter(":languageFallback", json!(context.fallback_language_id()));
        }

        Ok(())
    }

    /// Attach the translation joins for the complete property selection
    /// (set, group and option) in one pass
    pub fn attach_property_translations(
        &self,
        query: &mut QueryBuilder,
        context: &ShopContext,
    ) -> Result<(), ProjectionError> {
        self.attach_translation(query, TranslatedEntity::PropertySet, context)?;
        self.attach_translation(query, TranslatedEntity::PropertyGroup, context)?;
        self.attach_translation(query, TranslatedEntity::PropertyOption, context)?;
        Ok(())
    }

    fn ensure_not_attached(
        query: &QueryBuilder,
        entity: TranslatedEntity,
        with_fallback: bool,
    ) -> Result<(), ProjectionError> {
        let suffixes: &[&str] = if with_fallback {
            &["", "Fallback"]
        } else {
            &[""]
        };

        for suffix in suffixes {
            for slot in entity.slots() {
                let alias = format!("{}{}", slot.join_alias, suffix);
                if query.has_join_alias(&alias) {
                    return Err(ProjectionError::DuplicateJoinAlias(alias));
                }
            }
        }

        Ok(())
    }

    fn attach_with_suffix(
        query: &mut QueryBuilder,
        entity: TranslatedEntity,
        suffix: &str,
    ) -> Result<(), ProjectionError> {
        let select_suffix = if suffix.is_empty() {
            String::new()
        } else {
            format!("_{}", suffix.to_lowercase())
        };

        for slot in entity.slots() {
            let join_alias = format!("{}{}", slot.join_alias, suffix);
            let condition = format!(
                "{join}.objecttype = {object_type} AND \
                 {join}.objectkey = {key} AND \
                 {join}.objectlanguage = :language{suffix}",
                join = join_alias,
                object_type = slot.type_param,
                key = slot.key_expr,
                suffix = suffix,
            );

            query.left_outer_join(slot.from_alias, TRANSLATION_TABLE, &join_alias, condition)?;
            query.bind_parameter(slot.type_param, json!(slot.object_type));
            query.add_select_columns([format!(
                "{}.objectdata as __{}_translation{}",
                join_alias, slot.select_alias, select_suffix
            )]);
        }

        Ok(())
    }
}
