//! Team roster management.
//!
//! Holds the set of people that schedule tasks can be assigned to.
//! Members live for one planning session; nothing here is persisted.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Avatar colors assigned to members in creation order.
///
/// The palette is fixed and cycled round-robin; a member keeps its
/// color for the lifetime of the roster. The TUI theme decides how
/// each tag is actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Pink,
}

/// Palette cycle, in assignment order.
pub const PALETTE: [MemberColor; 6] = [
    MemberColor::Red,
    MemberColor::Green,
    MemberColor::Blue,
    MemberColor::Yellow,
    MemberColor::Purple,
    MemberColor::Pink,
];

/// A person that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Session-unique identifier
    pub id: u64,

    /// Display name; inference output refers to members by this name
    pub name: String,

    /// Free-text role (e.g. "Lead Designer")
    pub role: String,

    /// Email used as the guest on calendar deep links
    pub email: Option<String>,

    /// Avatar color tag, assigned at creation and never reassigned
    pub color: MemberColor,
}

/// The set of team members for one planning session.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
    /// Monotonic id source; never reset, so removed ids are not reused
    next_id: u64,
}

impl TeamRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member and assign the next palette color.
    ///
    /// Name and role are required; email is optional and trimmed to
    /// `None` when blank.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        email: Option<String>,
    ) -> Result<&TeamMember, ValidationError> {
        let name = name.into();
        let role = role.into();

        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("member name"));
        }
        if role.trim().is_empty() {
            return Err(ValidationError::MissingField("member role"));
        }

        // Keyed on current size, so a removed member's color is handed
        // out again to the next addition.
        let color = PALETTE[self.members.len() % PALETTE.len()];
        let id = self.next_id;
        self.next_id += 1;

        self.members.push(TeamMember {
            id,
            name,
            role,
            email: email.filter(|e| !e.trim().is_empty()),
            color,
        });

        Ok(self.members.last().unwrap_or_else(|| unreachable!()))
    }

    /// Remove a member by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.members.retain(|m| m.id != id);
    }

    /// Find a member by exact name match.
    pub fn resolve(&self, name: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// All members, in insertion order.
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Number of members currently on the roster.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `"name (role)"` pairs joined for inference request consumption.
    pub fn summary(&self) -> String {
        self.members
            .iter()
            .map(|m| format!("{} ({})", m.name, m.role))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Up to two initials from a display name, uppercased.
///
/// Empty or whitespace-only input yields `"??"`.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    if letters.is_empty() {
        "??".to_string()
    } else {
        letters.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_resolve() {
        let mut roster = TeamRoster::new();
        roster.add("Jane Doe", "Lead Designer", Some("jane@studio.test".into())).unwrap();
        roster.add("Ann Lee", "Copywriter", None).unwrap();

        let jane = roster.resolve("Jane Doe").unwrap();
        assert_eq!(jane.role, "Lead Designer");
        assert_eq!(jane.email.as_deref(), Some("jane@studio.test"));
        assert!(roster.resolve("Nobody").is_none());
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut roster = TeamRoster::new();
        assert!(roster.add("", "Manager", None).is_err());
        assert!(roster.add("Jane", "   ", None).is_err());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_blank_email_becomes_none() {
        let mut roster = TeamRoster::new();
        let member = roster.add("Jane", "Manager", Some("  ".into())).unwrap();
        assert!(member.email.is_none());
    }

    #[test]
    fn test_remove_is_noop_for_unknown_id() {
        let mut roster = TeamRoster::new();
        roster.add("Jane", "Manager", None).unwrap();
        roster.remove(999);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut roster = TeamRoster::new();
        let first = roster.add("A", "Role", None).unwrap().id;
        roster.remove(first);
        let second = roster.add("B", "Role", None).unwrap().id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_palette_cycles_after_six_members() {
        let mut roster = TeamRoster::new();
        for i in 0..7 {
            roster.add(format!("Member {i}"), "Designer", None).unwrap();
        }

        let colors: Vec<_> = roster.members().iter().map(|m| m.color).collect();
        assert_eq!(&colors[..6], &PALETTE);
        assert_eq!(colors[6], PALETTE[0]);
    }

    #[test]
    fn test_palette_cycle_tracks_current_size() {
        let mut roster = TeamRoster::new();
        let id = roster.add("A", "Role", None).unwrap().id;
        roster.remove(id);
        // The roster is empty again, so the next addition restarts the
        // cycle at the first color.
        let member = roster.add("B", "Role", None).unwrap();
        assert_eq!(member.color, PALETTE[0]);
    }

    #[test]
    fn test_summary_joins_name_role_pairs() {
        let mut roster = TeamRoster::new();
        roster.add("Jane Doe", "Lead Designer", None).unwrap();
        roster.add("Ann Lee", "Copywriter", None).unwrap();
        assert_eq!(roster.summary(), "Jane Doe (Lead Designer), Ann Lee (Copywriter)");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("Madonna"), "M");
        assert_eq!(initials("mary sue ellen"), "MS");
        assert_eq!(initials(""), "??");
        assert_eq!(initials("   "), "??");
    }
}
