//! Built-in audit fields.
//!
//! These fields change on every save and would make every record look
//! desynchronized, so the conflict check never compares them.

use crate::FieldId;

/// `__Revision`
pub const REVISION: FieldId = FieldId::from_u128(0x8CDC337E_A112_42FB_BBB4_4143751E123F);

/// `__Updated`
pub const UPDATED: FieldId = FieldId::from_u128(0xD9CF14B1_FA16_4BA6_9288_E8A174D4D522);

/// `__Updated by`
pub const UPDATED_BY: FieldId = FieldId::from_u128(0xBADD9CF9_53E0_4D0C_BCC0_2D784C282F6A);

/// All built-in audit fields.
pub const BUILTIN_AUDIT_FIELDS: [FieldId; 3] = [REVISION, UPDATED, UPDATED_BY];

/// Returns true if `id` is one of the built-in audit fields.
pub fn is_builtin_audit_field(id: FieldId) -> bool {
    BUILTIN_AUDIT_FIELDS.contains(&id)
}
