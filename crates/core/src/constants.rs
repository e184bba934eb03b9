/// Separator placed between title initials and the product ID in a generated stock ID
pub const STOCK_ID_SEPARATOR: &str = "-";

/// Separator used when joining summary lists (categories, tags, ...)
pub const SUMMARY_LIST_SEPARATOR: &str = ", ";

/// Default separator between category titles in a full hierarchy name
pub const DEFAULT_HIERARCHY_SEPARATOR: &str = " > ";

/// Default maximum number of breadcrumb entries
pub const DEFAULT_BREADCRUMB_MAX_DEPTH: usize = 20;

/// Default site base URL used when building links
pub const DEFAULT_BASE_URL: &str = "/";

/// Decimal places kept for product weight
pub const WEIGHT_DECIMAL_PRECISION: u32 = 2;

/// Permission codes understood by the permission collaborator
pub mod permission_codes {
    pub const ADMIN: &str = "ADMIN";
    pub const ADD_PRODUCTS: &str = "CATALOGUE_ADD_PRODUCTS";
    pub const EDIT_PRODUCTS: &str = "CATALOGUE_EDIT_PRODUCTS";
    pub const DELETE_PRODUCTS: &str = "CATALOGUE_DELETE_PRODUCTS";
    pub const ADD_CATEGORIES: &str = "CATALOGUE_ADD_CATEGORIES";
    pub const EDIT_CATEGORIES: &str = "CATALOGUE_EDIT_CATEGORIES";
    pub const DELETE_CATEGORIES: &str = "CATALOGUE_DELETE_CATEGORIES";
    pub const ADD_TAGS: &str = "CATALOGUE_ADD_TAGS";
}
