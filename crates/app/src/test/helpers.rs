//! Test Helpers

use crate::api::MockProductsApi;

/// Expect no create, update, revert or delete call.
pub(crate) fn expect_no_mutations(api: &mut MockProductsApi) {
    api.expect_create_product().never();
    api.expect_update_product().never();
    api.expect_revert_product().never();
    api.expect_delete_product().never();
}
