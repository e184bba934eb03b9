//! Catalogue permission checks.

use std::sync::Arc;

use log::debug;

use super::permissions_model::{Caller, PermissionDefinition};
use super::permissions_traits::PermissionCheckerTrait;
use crate::constants::permission_codes::{
    ADD_CATEGORIES, ADD_PRODUCTS, ADD_TAGS, ADMIN, DELETE_CATEGORIES, DELETE_PRODUCTS,
    EDIT_CATEGORIES, EDIT_PRODUCTS,
};
use crate::settings::SiteConfigTrait;

/// Answers "may this caller do X" for catalogue records.
///
/// Every mutation check accepts either the administrator code or the named
/// per-action code; evaluation is delegated to the permission checker.
///
/// The bulk enable/disable services consult `can_edit_*` themselves. Create,
/// edit and delete of single records, and inline tag creation, are gated by
/// the admin layer calling these checks before it invokes a service; the
/// services' write methods do not take a caller.
pub struct CataloguePermissions {
    checker: Arc<dyn PermissionCheckerTrait>,
    site_config: Arc<dyn SiteConfigTrait>,
}

impl CataloguePermissions {
    pub fn new(
        checker: Arc<dyn PermissionCheckerTrait>,
        site_config: Arc<dyn SiteConfigTrait>,
    ) -> Self {
        Self {
            checker,
            site_config,
        }
    }

    fn check(&self, caller: &Caller, code: &str) -> bool {
        let allowed = self.checker.check_member(caller, &[ADMIN, code]);
        debug!(
            "Permission {} for member {:?}: {}",
            code, caller.member_id, allowed
        );
        allowed
    }

    /// Viewing is governed by the site configuration, not by catalogue codes.
    pub fn can_view(&self, caller: &Caller) -> bool {
        self.site_config.can_view_pages(caller)
    }

    pub fn can_create_product(&self, caller: &Caller) -> bool {
        self.check(caller, ADD_PRODUCTS)
    }

    pub fn can_edit_product(&self, caller: &Caller) -> bool {
        self.check(caller, EDIT_PRODUCTS)
    }

    pub fn can_delete_product(&self, caller: &Caller) -> bool {
        self.check(caller, DELETE_PRODUCTS)
    }

    pub fn can_create_category(&self, caller: &Caller) -> bool {
        self.check(caller, ADD_CATEGORIES)
    }

    pub fn can_edit_category(&self, caller: &Caller) -> bool {
        self.check(caller, EDIT_CATEGORIES)
    }

    pub fn can_delete_category(&self, caller: &Caller) -> bool {
        self.check(caller, DELETE_CATEGORIES)
    }

    pub fn can_create_tags(&self, caller: &Caller) -> bool {
        self.check(caller, ADD_TAGS)
    }
}

/// Permission codes the catalogue provides, in display order.
pub fn provide_permissions() -> Vec<PermissionDefinition> {
    vec![
        PermissionDefinition {
            code: ADD_PRODUCTS,
            name: "Add products",
            help: "Allow user to add products to catalogue",
            category: "Catalogue",
            sort: 50,
        },
        PermissionDefinition {
            code: EDIT_PRODUCTS,
            name: "Edit products",
            help: "Allow user to edit any product in catalogue",
            category: "Catalogue",
            sort: 100,
        },
        PermissionDefinition {
            code: DELETE_PRODUCTS,
            name: "Delete products",
            help: "Allow user to delete any product in catalogue",
            category: "Catalogue",
            sort: 150,
        },
        PermissionDefinition {
            code: ADD_CATEGORIES,
            name: "Add categories",
            help: "Allow user to add categories to catalogue",
            category: "Catalogue",
            sort: 200,
        },
        PermissionDefinition {
            code: EDIT_CATEGORIES,
            name: "Edit categories",
            help: "Allow user to edit any category in catalogue",
            category: "Catalogue",
            sort: 250,
        },
        PermissionDefinition {
            code: DELETE_CATEGORIES,
            name: "Delete categories",
            help: "Allow user to delete any category in catalogue",
            category: "Catalogue",
            sort: 300,
        },
        PermissionDefinition {
            code: ADD_TAGS,
            name: "Add tags",
            help: "Allow user to create new product tags",
            category: "Catalogue",
            sort: 350,
        },
    ]
}
