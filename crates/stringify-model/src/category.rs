//! Symbol categories.
//!
//! Every constant the generator emits belongs to exactly one category. The
//! category decides which classifier rule scans the header text and which
//! lookup function of the generated source receives the case label.

use std::fmt;
use std::str::FromStr;

/// The fixed set of symbol classes handled by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Result codes declared with `#define` in the errors header.
    Errors,

    /// Event type codes listed in the events header.
    Events,

    /// Handle type enumerators (`PHT_*`).
    HandleTypes,

    /// Virtual machine state enumerators (`VMS_*`).
    VmStates,

    /// Job operation code enumerators (`PJOC_*`).
    JobOperationCodes,
}

impl Category {
    /// All categories in output order.
    pub const ALL: [Category; 5] = [
        Category::Errors,
        Category::Events,
        Category::HandleTypes,
        Category::VmStates,
        Category::JobOperationCodes,
    ];

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Errors => "Errors",
            Category::Events => "Events",
            Category::HandleTypes => "HandleTypes",
            Category::VmStates => "VmStates",
            Category::JobOperationCodes => "JobOperationCodes",
        }
    }

    /// Template slot that receives this category's case block.
    pub fn slot_name(&self) -> &'static str {
        match self {
            Category::Errors => "errors_case",
            Category::Events => "events_case",
            Category::HandleTypes => "h_types_case",
            Category::VmStates => "vms_types_case",
            Category::JobOperationCodes => "joc_types_case",
        }
    }

    /// Name of the generated lookup function for this category.
    pub fn lookup_function(&self) -> &'static str {
        match self {
            Category::Errors => "PrlResultToString",
            Category::Events => "EventTypeToString",
            Category::HandleTypes => "HandleTypeToString",
            Category::VmStates => "VmStateToString",
            Category::JobOperationCodes => "JobOperationCodeToString",
        }
    }

    /// Returns true for the categories resolved from the enumerations header.
    pub fn is_enumeration(&self) -> bool {
        matches!(
            self,
            Category::HandleTypes | Category::VmStates | Category::JobOperationCodes
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category name, accepting display names and `snake_case` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "ERRORS" => Ok(Category::Errors),
            "EVENTS" => Ok(Category::Events),
            "HANDLETYPES" => Ok(Category::HandleTypes),
            "VMSTATES" => Ok(Category::VmStates),
            "JOBOPERATIONCODES" => Ok(Category::JobOperationCodes),
            _ => Err(format!("Unknown symbol category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_and_snake_case_names() {
        assert_eq!("VmStates".parse::<Category>(), Ok(Category::VmStates));
        assert_eq!(
            "job_operation_codes".parse::<Category>(),
            Ok(Category::JobOperationCodes)
        );
        assert_eq!(" events ".parse::<Category>(), Ok(Category::Events));
        assert!("warnings".parse::<Category>().is_err());
    }

    #[test]
    fn slot_names_are_distinct() {
        let mut slots: Vec<_> = Category::ALL.iter().map(Category::slot_name).collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), Category::ALL.len());
    }

    #[test]
    fn only_type_codes_are_enumerations() {
        assert!(!Category::Errors.is_enumeration());
        assert!(!Category::Events.is_enumeration());
        assert!(Category::HandleTypes.is_enumeration());
        assert!(Category::VmStates.is_enumeration());
        assert!(Category::JobOperationCodes.is_enumeration());
    }
}
