//! Audit record rendering.

use std::fmt;

use ka_iam::GroupListing;

/// Group field value when a principal has no usable group.
pub const NO_GROUP: &str = "none";

/// One output line: principal, first group, credential age in days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub principal: String,
    pub group: String,
    pub age_days: i64,
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.principal, self.group, self.age_days)
    }
}

/// Group field for a membership listing.
///
/// Uses the first group's name exactly as listed. A missing listing, an empty
/// listing, a nameless first group, or a name made only of whitespace (any
/// Unicode whitespace, not just spaces) all become `NO_GROUP`.
pub fn group_field(listing: &GroupListing) -> String {
    match listing.first_name() {
        Some(name) if name.chars().any(|c| !c.is_whitespace()) => name.to_string(),
        _ => NO_GROUP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ka_iam::GroupMembership;

    #[test]
    fn test_display_is_tab_separated() {
        let record = AuditRecord {
            principal: "alice".to_string(),
            group: "Admins".to_string(),
            age_days: 10,
        };
        assert_eq!(record.to_string(), "alice\tAdmins\t10");
    }

    #[test]
    fn test_group_field_first_group() {
        let listing = GroupListing::new(vec![
            GroupMembership::named("Admins"),
            GroupMembership::named("Developers"),
        ]);
        assert_eq!(group_field(&listing), "Admins");
    }

    #[test]
    fn test_group_field_keeps_internal_spaces() {
        let listing = GroupListing::new(vec![GroupMembership::named("Data Science")]);
        assert_eq!(group_field(&listing), "Data Science");
    }

    #[test]
    fn test_group_field_sentinels() {
        assert_eq!(group_field(&GroupListing::absent()), NO_GROUP);
        assert_eq!(group_field(&GroupListing::new(Vec::new())), NO_GROUP);
        assert_eq!(
            group_field(&GroupListing::new(vec![GroupMembership::default()])),
            NO_GROUP
        );
        assert_eq!(
            group_field(&GroupListing::new(vec![GroupMembership::named("")])),
            NO_GROUP
        );
        assert_eq!(
            group_field(&GroupListing::new(vec![GroupMembership::named("   ")])),
            NO_GROUP
        );
    }

    #[test]
    fn test_group_field_any_whitespace_is_blank() {
        for blank in ["\t", "\n", " \t\r\n ", "\u{00a0}"] {
            let listing = GroupListing::new(vec![GroupMembership::named(blank)]);
            assert_eq!(group_field(&listing), NO_GROUP, "{blank:?}");
        }

        let listing = GroupListing::new(vec![GroupMembership::named("\tOps ")]);
        assert_eq!(group_field(&listing), "\tOps ");
    }

    #[test]
    fn test_group_field_ignores_later_groups_when_first_blank() {
        let listing = GroupListing::new(vec![
            GroupMembership::named(" "),
            GroupMembership::named("Admins"),
        ]);
        assert_eq!(group_field(&listing), NO_GROUP);
    }
}
