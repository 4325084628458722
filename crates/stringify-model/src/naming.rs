//! Identifier prefixes used to recognise symbol declarations.

use serde::Deserialize;

use crate::category::Category;

/// Prefix conventions of the SDK headers.
///
/// Every field has a default, so a configuration file only needs to list
/// the prefixes it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingRules {
    /// Prefix of public result-code macro names (`#define PRL_ERR_X ...`).
    pub public_error_prefix: String,
    /// Prefix of the value's type marker (`PRL_RESULT_DECLARE_...`).
    pub result_type_prefix: String,
    /// Prefix of event type identifiers.
    pub event_prefix: String,
    pub handle_type_prefix: String,
    pub vm_state_prefix: String,
    pub job_operation_prefix: String,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            public_error_prefix: "PRL_".to_string(),
            result_type_prefix: "PRL_RESULT".to_string(),
            event_prefix: "PET_".to_string(),
            handle_type_prefix: "PHT_".to_string(),
            vm_state_prefix: "VMS_".to_string(),
            job_operation_prefix: "PJOC_".to_string(),
        }
    }
}

impl NamingRules {
    /// Enumerator prefix for a type-code category, `None` for errors and events.
    pub fn enum_prefix(&self, category: Category) -> Option<&str> {
        match category {
            Category::HandleTypes => Some(&self.handle_type_prefix),
            Category::VmStates => Some(&self.vm_state_prefix),
            Category::JobOperationCodes => Some(&self.job_operation_prefix),
            Category::Errors | Category::Events => None,
        }
    }
}
