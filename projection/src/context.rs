//! Shop context
//!
//! Read-only view of the active shop, supplied entirely by the calling
//! system. The projection core only reads the default-shop flag and the
//! language pair.

/// Read-only shop context for translation decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopContext {
    default_shop: bool,
    language_id: i64,
    fallback_language_id: i64,
}

impl ShopContext {
    /// Context for the default shop, whose native columns already carry the
    /// correct language
    pub fn default_shop(language_id: i64) -> Self {
        Self {
            default_shop: true,
            language_id,
            fallback_language_id: language_id,
        }
    }

    /// Context for a language sub shop with its configured fallback language
    pub fn sub_shop(language_id: i64, fallback_language_id: i64) -> Self {
        Self {
            default_shop: false,
            language_id,
            fallback_language_id,
        }
    }

    pub fn is_default_shop(&self) -> bool {
        self.default_shop
    }

    pub fn language_id(&self) -> i64 {
        self.language_id
    }

    pub fn fallback_language_id(&self) -> i64 {
        self.fallback_language_id
    }
}
