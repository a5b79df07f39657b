//! Project scope, deliverable, and style parameters.
//!
//! These are the structured inputs collected by the wizard before a
//! schedule is generated. Everything here is plain data; validation
//! happens when an inference request is built.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounds for the deliverable asset quantity slider.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 50;

/// File-type chips offered by the deliverables step.
pub const FILE_TYPE_CHOICES: [&str; 7] = ["PSD", "AI", "INDD", "PDF", "PNG", "JPG", "SVG"];

/// Role suggestions offered when adding a team member.
pub const ROLE_CHOICES: [&str; 4] = ["Lead Designer", "Junior Designer", "Copywriter", "Manager"];

/// Category of design project being planned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "Branding Identity")]
    BrandingIdentity,
    #[serde(rename = "Social Media Campaign")]
    SocialMediaCampaign,
    #[serde(rename = "Website Design")]
    WebsiteDesign,
    #[serde(rename = "Print Material")]
    PrintMaterial,
}

impl ProjectType {
    /// All categories, in UI display order.
    pub fn all() -> [Self; 4] {
        [
            Self::BrandingIdentity,
            Self::SocialMediaCampaign,
            Self::WebsiteDesign,
            Self::PrintMaterial,
        ]
    }

    /// Display label, also used on the inference request wire.
    pub fn label(self) -> &'static str {
        match self {
            Self::BrandingIdentity => "Branding Identity",
            Self::SocialMediaCampaign => "Social Media Campaign",
            Self::WebsiteDesign => "Website Design",
            Self::PrintMaterial => "Print Material",
        }
    }

    /// Cycle to the next category (select widget behavior).
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scope fields collected in step 1 of the wizard.
///
/// Dates are kept as the raw strings the user entered; they are only
/// parsed when building a request or projecting the calendar view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectContext {
    pub name: String,
    pub project_type: ProjectType,
    /// Start date, `YYYY-MM-DD`
    pub start_date: String,
    /// End date, `YYYY-MM-DD`
    pub end_date: String,
}

/// Deliverable parameters collected in step 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverableSpec {
    /// Target asset count, clamped to `MIN_QUANTITY..=MAX_QUANTITY`
    pub quantity: u32,

    /// Required file-format tags; unique, order-insignificant
    pub file_types: Vec<String>,

    /// Free-text content/copy brief
    pub content_brief: String,
}

impl Default for DeliverableSpec {
    fn default() -> Self {
        Self { quantity: 10, file_types: Vec::new(), content_brief: String::new() }
    }
}

impl DeliverableSpec {
    /// Set the quantity, clamping to the allowed range.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
    }

    /// Toggle a file-type tag on or off.
    pub fn toggle_file_type(&mut self, file_type: &str) {
        if let Some(pos) = self.file_types.iter().position(|t| t == file_type) {
            self.file_types.remove(pos);
        } else {
            self.file_types.push(file_type.to_string());
        }
    }

    /// Whether a file-type tag is currently selected.
    pub fn has_file_type(&self, file_type: &str) -> bool {
        self.file_types.iter().any(|t| t == file_type)
    }
}

/// Design-DNA parameters collected in step 3. All optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub palette: String,
    pub typography: String,
    pub graphic_elements: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_cycle_wraps() {
        let mut ty = ProjectType::default();
        for _ in 0..ProjectType::all().len() {
            ty = ty.next();
        }
        assert_eq!(ty, ProjectType::BrandingIdentity);
    }

    #[test]
    fn test_project_type_wire_label() {
        let json = serde_json::to_string(&ProjectType::SocialMediaCampaign).unwrap();
        assert_eq!(json, "\"Social Media Campaign\"");
    }

    #[test]
    fn test_quantity_clamped() {
        let mut spec = DeliverableSpec::default();
        spec.set_quantity(0);
        assert_eq!(spec.quantity, MIN_QUANTITY);
        spec.set_quantity(500);
        assert_eq!(spec.quantity, MAX_QUANTITY);
        spec.set_quantity(25);
        assert_eq!(spec.quantity, 25);
    }

    #[test]
    fn test_file_type_toggle() {
        let mut spec = DeliverableSpec::default();
        spec.toggle_file_type("PDF");
        spec.toggle_file_type("SVG");
        assert!(spec.has_file_type("PDF"));

        // Toggling again removes, leaving no duplicates behind.
        spec.toggle_file_type("PDF");
        assert!(!spec.has_file_type("PDF"));
        assert_eq!(spec.file_types, vec!["SVG".to_string()]);
    }
}
