use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Role tag of a signed-in user. Decides which company profile fields
/// the user may edit.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdminType {
    Owner,
    Admin,
    #[serde(rename = "superadmin")]
    #[strum(serialize = "superadmin")]
    SuperAdmin,
}

impl AdminType {
    /// Owners and super admins may edit the whole company profile.
    pub fn can_edit_full_profile(&self) -> bool {
        matches!(self, AdminType::Owner | AdminType::SuperAdmin)
    }
}

/// Cadence of a company report or a report email.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn admin_type_uses_lowercase_tags() {
        assert_eq!(AdminType::SuperAdmin.to_string(), "superadmin");
        assert_eq!(AdminType::from_str("owner").unwrap(), AdminType::Owner);
        assert_eq!(
            serde_json::to_string(&AdminType::SuperAdmin).unwrap(),
            "\"superadmin\""
        );
    }

    #[test]
    fn only_admin_is_restricted() {
        assert!(AdminType::Owner.can_edit_full_profile());
        assert!(AdminType::SuperAdmin.can_edit_full_profile());
        assert!(!AdminType::Admin.can_edit_full_profile());
    }

    #[test]
    fn frequency_parses_from_wire_name() {
        let f: Frequency = serde_json::from_str("\"bimonthly\"").unwrap();
        assert_eq!(f, Frequency::Bimonthly);
        assert_eq!(Frequency::default(), Frequency::Daily);
    }
}
