//! Project brief files.
//!
//! A brief is a TOML document describing everything the wizard would
//! collect interactively: scope, team, deliverables, and style. The
//! headless `plan` command reads one to generate a schedule without
//! opening the TUI.

use std::path::Path;

use serde::Deserialize;

use super::project::{DeliverableSpec, ProjectContext, ProjectType, StyleSpec};
use super::roster::TeamRoster;
use super::ValidationError;

/// A parsed project brief file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectBrief {
    pub name: String,
    pub project_type: ProjectType,
    pub start_date: String,
    pub end_date: String,

    #[serde(rename = "team")]
    pub members: Vec<BriefMember>,

    pub deliverables: BriefDeliverables,
    pub style: StyleSpec,
}

/// One `[[team]]` entry in a brief.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BriefMember {
    pub name: String,
    pub role: String,
    pub email: Option<String>,
}

/// The `[deliverables]` table in a brief.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BriefDeliverables {
    pub quantity: u32,
    pub file_types: Vec<String>,
    pub content_brief: String,
}

impl Default for BriefDeliverables {
    fn default() -> Self {
        let spec = DeliverableSpec::default();
        Self {
            quantity: spec.quantity,
            file_types: spec.file_types,
            content_brief: spec.content_brief,
        }
    }
}

impl ProjectBrief {
    /// Read and parse a brief from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read brief {}: {e}", path.display()))?;
        let brief: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid brief {}: {e}", path.display()))?;
        Ok(brief)
    }

    /// Expand the brief into the wizard's working state.
    ///
    /// The roster is rebuilt member by member so ids and palette
    /// colors are assigned exactly as the interactive path would.
    pub fn into_parts(
        self,
    ) -> Result<(ProjectContext, TeamRoster, DeliverableSpec, StyleSpec), ValidationError> {
        let context = ProjectContext {
            name: self.name,
            project_type: self.project_type,
            start_date: self.start_date,
            end_date: self.end_date,
        };

        let mut roster = TeamRoster::new();
        for member in self.members {
            roster.add(member.name, member.role, member.email)?;
        }

        let mut deliverables = DeliverableSpec {
            quantity: 1,
            file_types: Vec::new(),
            content_brief: self.deliverables.content_brief,
        };
        deliverables.set_quantity(self.deliverables.quantity);
        for file_type in self.deliverables.file_types {
            if !deliverables.has_file_type(&file_type) {
                deliverables.file_types.push(file_type);
            }
        }

        Ok((context, roster, deliverables, self.style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRIEF: &str = r#"
name = "Q4 Rebrand Identity"
project_type = "Branding Identity"
start_date = "2024-10-01"
end_date = "2024-12-15"

[[team]]
name = "Jane Doe"
role = "Lead Designer"
email = "jane@studio.test"

[[team]]
name = "Ann Lee"
role = "Copywriter"

[deliverables]
quantity = 12
file_types = ["PDF", "SVG", "PDF"]
content_brief = "New identity for the autumn launch."

[style]
palette = "Navy Blue, Gold, and White"
typography = "Modern Sans-Serif for headers"
graphic_elements = "Geometric shapes, minimal icons"
"#;

    #[test]
    fn test_full_brief_parses() {
        let brief: ProjectBrief = toml::from_str(BRIEF).unwrap();
        let (context, roster, deliverables, style) = brief.into_parts().unwrap();

        assert_eq!(context.name, "Q4 Rebrand Identity");
        assert_eq!(context.project_type, ProjectType::BrandingIdentity);
        assert_eq!(roster.len(), 2);
        assert!(roster.resolve("Ann Lee").is_some());
        assert_eq!(deliverables.quantity, 12);
        // Duplicate file types collapse to one tag.
        assert_eq!(deliverables.file_types, vec!["PDF".to_string(), "SVG".to_string()]);
        assert_eq!(style.palette, "Navy Blue, Gold, and White");
    }

    #[test]
    fn test_minimal_brief_uses_defaults() {
        let brief: ProjectBrief =
            toml::from_str("name = \"x\"\nstart_date = \"2024-01-01\"\nend_date = \"2024-02-01\"")
                .unwrap();
        let (_, roster, deliverables, _) = brief.into_parts().unwrap();
        assert!(roster.is_empty());
        assert_eq!(deliverables.quantity, 10);
    }

    #[test]
    fn test_member_without_role_is_rejected() {
        let brief: ProjectBrief =
            toml::from_str("name = \"x\"\n\n[[team]]\nname = \"Jane\"\n").unwrap();
        assert!(brief.into_parts().is_err());
    }

    #[test]
    fn test_out_of_range_quantity_is_clamped() {
        let brief: ProjectBrief =
            toml::from_str("name = \"x\"\n\n[deliverables]\nquantity = 999\n").unwrap();
        let (_, _, deliverables, _) = brief.into_parts().unwrap();
        assert_eq!(deliverables.quantity, 50);
    }
}
