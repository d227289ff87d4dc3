//! Static per-entity field selections
//!
//! The column lists in this module are a contract against a specific
//! storefront schema version, committed at build time rather than
//! discovered. If the schema changes, these tables must be updated
//! accordingly.

use crate::fields::{FieldRef, FieldSet};

/// The attribute table and alias joined for an entity's free-form columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeTable {
    pub table: &'static str,
    pub alias: &'static str,
}

/// Closed enumeration of storefront entities with a known field selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    Variant,
    Price,
    Category,
    Manufacturer,
    Tax,
    PriceGroup,
    PriceGroupDiscount,
    Unit,
    ConfiguratorSet,
    ConfiguratorGroup,
    ConfiguratorOption,
    Area,
    Country,
    CountryState,
    CustomerGroup,
    Download,
    Link,
    Image,
    Media,
    PropertySet,
    PropertyGroup,
    PropertyOption,
    TaxRule,
    Vote,
    Shop,
    Currency,
    Template,
    Locale,
    ProductStream,
    Esd,
    TopSeller,
}

const PRODUCT_COLUMNS: &[&str] = &[
    "id",
    "supplierID",
    "name",
    "description",
    "description_long",
    "shippingtime",
    "datum",
    "active",
    "taxID",
    "pseudosales",
    "topseller",
    "metaTitle",
    "keywords",
    "changetime",
    "pricegroupID",
    "pricegroupActive",
    "filtergroupID",
    "laststock",
    "crossbundlelook",
    "notification",
    "template",
    "mode",
    "main_detail_id",
    "available_from",
    "available_to",
    "configurator_set_id",
];

const VARIANT_COLUMNS: &[&str] = &[
    "id",
    "ordernumber",
    "suppliernumber",
    "kind",
    "additionaltext",
    "sales",
    "active",
    "instock",
    "stockmin",
    "weight",
    "position",
    "width",
    "height",
    "length",
    "ean",
    "unitID",
    "releasedate",
    "shippingfree",
    "shippingtime",
];

const PRICE_COLUMNS: &[&str] = &[
    "id",
    "pricegroup",
    "from",
    "to",
    "articleID",
    "articledetailsID",
    "price",
    "pseudoprice",
    "baseprice",
    "percent",
];

// category.parent is published as parent_id and is handled separately
const CATEGORY_COLUMNS: &[&str] = &[
    "position",
    "path",
    "description",
    "metakeywords",
    "metadescription",
    "cmsheadline",
    "product_box_layout",
    "cmstext",
    "template",
    "noviewselect",
    "blog",
    "showfiltergroups",
    "external",
    "hidefilter",
    "hidetop",
];

const MANUFACTURER_COLUMNS: &[&str] = &[
    "id",
    "name",
    "img",
    "link",
    "description",
    "meta_title",
    "meta_description",
    "meta_keywords",
];

const TAX_COLUMNS: &[&str] = &["id", "tax", "description"];

const PRICE_GROUP_COLUMNS: &[&str] = &["id", "description"];

const PRICE_GROUP_DISCOUNT_COLUMNS: &[&str] = &["id", "groupID", "discount", "discountstart"];

const UNIT_COLUMNS: &[&str] = &["id", "description", "unit"];

// Pack and purchase figures live on the variant row but belong to the unit
// selection in the published result.
const UNIT_VARIANT_COLUMNS: &[&str] = &[
    "packunit",
    "purchaseunit",
    "referenceunit",
    "purchasesteps",
    "minpurchase",
    "maxpurchase",
];

const CONFIGURATOR_SET_COLUMNS: &[&str] = &["id", "name", "type"];

const CONFIGURATOR_GROUP_COLUMNS: &[&str] = &["id", "name", "description", "position"];

const CONFIGURATOR_OPTION_COLUMNS: &[&str] = &["id", "name", "position"];

const AREA_COLUMNS: &[&str] = &["id", "name", "active"];

const COUNTRY_COLUMNS: &[&str] = &[
    "id",
    "countryname",
    "countryiso",
    "areaID",
    "countryen",
    "position",
    "notice",
    "shippingfree",
    "taxfree",
    "taxfree_ustid",
    "taxfree_ustid_checked",
    "active",
    "iso3",
    "display_state_in_registration",
    "force_state_in_registration",
];

const COUNTRY_STATE_COLUMNS: &[&str] = &[
    "id",
    "countryID",
    "name",
    "shortcode",
    "position",
    "active",
];

const CUSTOMER_GROUP_COLUMNS: &[&str] = &[
    "id",
    "groupkey",
    "description",
    "tax",
    "taxinput",
    "mode",
    "discount",
    "minimumorder",
    "minimumordersurcharge",
];

const DOWNLOAD_COLUMNS: &[&str] = &["id", "articleID", "description", "filename", "size"];

const LINK_COLUMNS: &[&str] = &["id", "articleID", "description", "link", "target"];

const IMAGE_COLUMNS: &[&str] = &[
    "id",
    "articleID",
    "img",
    "main",
    "description",
    "position",
    "width",
    "height",
    "extension",
    "parent_id",
    "media_id",
];

const MEDIA_COLUMNS: &[&str] = &[
    "id",
    "albumID",
    "name",
    "description",
    "path",
    "type",
    "extension",
    "file_size",
    "userID",
    "created",
];

const MEDIA_SETTINGS_COLUMNS: &[&str] = &[
    "id",
    "create_thumbnails",
    "thumbnail_size",
    "icon",
    "thumbnail_high_dpi",
];

const PROPERTY_SET_COLUMNS: &[&str] = &["id", "name", "position", "comparable", "sortmode"];

const PROPERTY_GROUP_COLUMNS: &[&str] = &["id", "name", "filterable", "default"];

const PROPERTY_OPTION_COLUMNS: &[&str] = &[
    "id",
    "optionID",
    "value",
    "position",
    "value_numeric",
];

const TAX_RULE_COLUMNS: &[&str] = &["groupID", "tax", "name"];

const VOTE_COLUMNS: &[&str] = &[
    "id",
    "articleID",
    "name",
    "headline",
    "comment",
    "points",
    "datum",
    "active",
    "email",
    "answer",
    "answer_date",
];

const SHOP_COLUMNS: &[&str] = &[
    "id",
    "main_id",
    "name",
    "title",
    "position",
    "host",
    "base_path",
    "base_url",
    "hosts",
    "secure",
    "secure_host",
    "secure_base_path",
    "template_id",
    "document_template_id",
    "category_id",
    "locale_id",
    "currency_id",
    "customer_group_id",
    "fallback_id",
    "customer_scope",
    "default",
    "active",
    "always_secure",
];

const CURRENCY_COLUMNS: &[&str] = &[
    "id",
    "currency",
    "name",
    "standard",
    "factor",
    "templatechar",
    "symbol_position",
    "position",
];

const TEMPLATE_COLUMNS: &[&str] = &[
    "id",
    "template",
    "name",
    "description",
    "author",
    "license",
    "esi",
    "style_support",
    "emotion",
    "version",
    "plugin_id",
    "parent_id",
];

const LOCALE_COLUMNS: &[&str] = &["id", "locale", "language", "territory"];

const PRODUCT_STREAM_COLUMNS: &[&str] = &["id", "name", "description", "type"];

const ESD_COLUMNS: &[&str] = &[
    "id",
    "articleID",
    "articledetailsID",
    "file",
    "serials",
    "notification",
    "maxdownloads",
    "datum",
];

const TOP_SELLER_COLUMNS: &[&str] = &["sales"];

impl EntityKind {
    /// The hardcoded field selection for this entity, in schema order
    pub fn static_fields(self) -> FieldSet {
        match self {
            EntityKind::Product => FieldSet::from_columns("product", PRODUCT_COLUMNS),
            EntityKind::Variant => FieldSet::from_columns("variant", VARIANT_COLUMNS),
            EntityKind::Price => FieldSet::from_columns("price", PRICE_COLUMNS),
            EntityKind::Category => {
                let mut fields = FieldSet::new();
                fields.push(FieldRef::new("category", "id"));
                fields.push(
                    FieldRef::new("category", "parent").published_as("category", "parent_id"),
                );
                fields.extend(FieldSet::from_columns("category", CATEGORY_COLUMNS));
                fields
            }
            EntityKind::Manufacturer => {
                FieldSet::from_columns("manufacturer", MANUFACTURER_COLUMNS)
            }
            EntityKind::Tax => FieldSet::from_columns("tax", TAX_COLUMNS),
            EntityKind::PriceGroup => FieldSet::from_columns("priceGroup", PRICE_GROUP_COLUMNS),
            EntityKind::PriceGroupDiscount => {
                FieldSet::from_columns("priceGroupDiscount", PRICE_GROUP_DISCOUNT_COLUMNS)
            }
            EntityKind::Unit => {
                let mut fields = FieldSet::from_columns("unit", UNIT_COLUMNS);
                for column in UNIT_VARIANT_COLUMNS {
                    fields.push(FieldRef::new("variant", *column).published_as("unit", *column));
                }
                fields
            }
            EntityKind::ConfiguratorSet => {
                FieldSet::from_columns("configuratorSet", CONFIGURATOR_SET_COLUMNS)
            }
            EntityKind::ConfiguratorGroup => {
                FieldSet::from_columns("configuratorGroup", CONFIGURATOR_GROUP_COLUMNS)
            }
            EntityKind::ConfiguratorOption => {
                FieldSet::from_columns("configuratorOption", CONFIGURATOR_OPTION_COLUMNS)
            }
            EntityKind::Area => FieldSet::from_columns("countryArea", AREA_COLUMNS),
            EntityKind::Country => FieldSet::from_columns("country", COUNTRY_COLUMNS),
            EntityKind::CountryState => {
                FieldSet::from_columns("countryState", COUNTRY_STATE_COLUMNS)
            }
            EntityKind::CustomerGroup => {
                FieldSet::from_columns("customerGroup", CUSTOMER_GROUP_COLUMNS)
            }
            EntityKind::Download => FieldSet::from_columns("download", DOWNLOAD_COLUMNS),
            EntityKind::Link => FieldSet::from_columns("link", LINK_COLUMNS),
            EntityKind::Image => FieldSet::from_columns("image", IMAGE_COLUMNS),
            EntityKind::Media => {
                let mut fields = FieldSet::from_columns("media", MEDIA_COLUMNS);
                fields.extend(FieldSet::from_columns(
                    "mediaSettings",
                    MEDIA_SETTINGS_COLUMNS,
                ));
                fields
            }
            EntityKind::PropertySet => FieldSet::from_columns("propertySet", PROPERTY_SET_COLUMNS),
            EntityKind::PropertyGroup => {
                FieldSet::from_columns("propertyGroup", PROPERTY_GROUP_COLUMNS)
            }
            EntityKind::PropertyOption => {
                FieldSet::from_columns("propertyOption", PROPERTY_OPTION_COLUMNS)
            }
            EntityKind::TaxRule => FieldSet::from_columns("taxRule", TAX_RULE_COLUMNS),
            EntityKind::Vote => FieldSet::from_columns("vote", VOTE_COLUMNS),
            EntityKind::Shop => FieldSet::from_columns("shop", SHOP_COLUMNS),
            EntityKind::Currency => FieldSet::from_columns("currency", CURRENCY_COLUMNS),
            EntityKind::Template => FieldSet::from_columns("template", TEMPLATE_COLUMNS),
            EntityKind::Locale => FieldSet::from_columns("locale", LOCALE_COLUMNS),
            EntityKind::ProductStream => {
                FieldSet::from_columns("stream", PRODUCT_STREAM_COLUMNS)
            }
            EntityKind::Esd => FieldSet::from_columns("esd", ESD_COLUMNS),
            EntityKind::TopSeller => FieldSet::from_columns("topSeller", TOP_SELLER_COLUMNS),
        }
    }

    /// The attribute table joined for this entity's free-form columns.
    ///
    /// Entities without an attribute table project their static selection
    /// only. No entity has more than one attribute table.
    pub fn attribute_table(self) -> Option<AttributeTable> {
        let (table, alias) = match self {
            EntityKind::Product => ("s_articles_attributes", "productAttribute"),
            EntityKind::Esd => ("s_articles_esd_attributes", "esdAttribute"),
            EntityKind::Manufacturer => ("s_articles_supplier_attributes", "manufacturerAttribute"),
            EntityKind::Category => ("s_categories_attributes", "categoryAttribute"),
            EntityKind::Price => ("s_articles_prices_attributes", "priceAttribute"),
            EntityKind::Country => ("s_core_countries_attributes", "countryAttribute"),
            EntityKind::CountryState => {
                ("s_core_countries_states_attributes", "countryStateAttribute")
            }
            EntityKind::CustomerGroup => {
                ("s_core_customergroups_attributes", "customerGroupAttribute")
            }
            EntityKind::Download => ("s_articles_downloads_attributes", "downloadAttribute"),
            EntityKind::Link => ("s_articles_information_attributes", "linkAttribute"),
            EntityKind::Image => ("s_articles_img_attributes", "imageAttribute"),
            EntityKind::Media => ("s_media_attributes", "mediaAttribute"),
            EntityKind::PropertySet => ("s_filter_attributes", "propertySetAttribute"),
            _ => return None,
        };
        Some(AttributeTable { table, alias })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_selection_starts_with_id() {
        let fields = EntityKind::Product.static_fields();
        assert_eq!(fields.render()[0], "product.id as __product_id");
        assert_eq!(fields.len(), PRODUCT_COLUMNS.len());
    }

    #[test]
    fn test_category_parent_published_as_parent_id() {
        let rendered = EntityKind::Category.static_fields().render();
        assert_eq!(rendered[1], "category.parent as __category_parent_id");
    }

    #[test]
    fn test_unit_selection_reads_variant_columns() {
        let rendered = EntityKind::Unit.static_fields().render();
        assert_eq!(rendered[0], "unit.id as __unit_id");
        assert!(rendered.contains(&"variant.packunit as __unit_packunit".to_string()));
        assert!(rendered.contains(&"variant.maxpurchase as __unit_maxpurchase".to_string()));
    }

    #[test]
    fn test_media_selection_includes_settings() {
        let rendered = EntityKind::Media.static_fields().render();
        assert!(rendered.contains(&"media.path as __media_path".to_string()));
        assert!(rendered
            .contains(&"mediaSettings.create_thumbnails as __mediaSettings_create_thumbnails".to_string()));
    }

    #[test]
    fn test_product_stream_uses_stream_alias() {
        let rendered = EntityKind::ProductStream.static_fields().render();
        assert_eq!(rendered[0], "stream.id as __stream_id");
    }

    #[test]
    fn test_area_uses_country_area_alias() {
        let rendered = EntityKind::Area.static_fields().render();
        assert_eq!(rendered[0], "countryArea.id as __countryArea_id");
    }

    #[test]
    fn test_attribute_table_mapping() {
        assert_eq!(
            EntityKind::Product.attribute_table(),
            Some(AttributeTable {
                table: "s_articles_attributes",
                alias: "productAttribute"
            })
        );
        assert_eq!(EntityKind::Tax.attribute_table(), None);
        assert_eq!(EntityKind::Variant.attribute_table(), None);
        assert_eq!(EntityKind::Shop.attribute_table(), None);
    }
}
