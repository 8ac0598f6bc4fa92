//! The intake step panels.
//!
//! Five panels covering the portfolio brief: who the client is, how their
//! brand should feel, their professional background, their project history
//! (repeatable entries), and the website wrap-up questions.

use super::schema::{FieldKind, FieldSpec};

/// One visually exclusive panel of the multi-panel form.
#[derive(Debug, Clone)]
pub struct StepPanel {
    /// Short identifier used in logs.
    pub key: &'static str,
    /// Title shown in the panel border and indicator row.
    pub title: &'static str,
    /// One-line hint shown under the title.
    pub hint: &'static str,
    /// Fixed fields rendered on this panel.
    pub fields: Vec<FieldSpec>,
    /// Whether this panel hosts the repeatable project-entry container.
    pub collects_projects: bool,
}

impl StepPanel {
    fn new(key: &'static str, title: &'static str, hint: &'static str) -> Self {
        Self {
            key,
            title,
            hint,
            fields: Vec::new(),
            collects_projects: false,
        }
    }

    fn with_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    fn collecting_projects(mut self) -> Self {
        self.collects_projects = true;
        self
    }
}

/// Build the intake step sequence. Fixed for the life of the form.
pub fn intake_steps() -> Vec<StepPanel> {
    vec![
        StepPanel::new("about", "About You", "The basics we put front and center")
            .with_fields(vec![
                FieldSpec::new("fullName", "Full Name", FieldKind::Text).required(),
                FieldSpec::new("preferredName", "Preferred Name", FieldKind::Text),
                FieldSpec::new("profession", "Profession", FieldKind::Text)
                    .required()
                    .placeholder("e.g. Data Analyst, Web Developer"),
                FieldSpec::new("tagline", "Tagline", FieldKind::Text)
                    .placeholder("One line that sums you up"),
                FieldSpec::new("email", "Email", FieldKind::Text)
                    .required()
                    .placeholder("you@example.com"),
                FieldSpec::new("phone", "Phone", FieldKind::Text),
                FieldSpec::new("location", "Location", FieldKind::Text),
                FieldSpec::new("timeZone", "Time Zone", FieldKind::Text),
            ]),
        StepPanel::new("brand", "Brand & Style", "How the site should look and feel")
            .with_fields(vec![
                FieldSpec::new("websitePurpose", "Website Purpose", FieldKind::Text)
                    .placeholder("e.g. win freelance clients, land a job"),
                FieldSpec::new("targetAudience", "Target Audience", FieldKind::TextArea),
                FieldSpec::new("toneStyle", "Tone & Style", FieldKind::Text)
                    .placeholder("e.g. minimal, playful, corporate"),
                FieldSpec::new("brandKeywords", "Brand Keywords", FieldKind::TextArea),
                FieldSpec::new("colorPrefs", "Color Preferences", FieldKind::Text),
                FieldSpec::new("inspiration", "Inspiration Sites", FieldKind::TextArea),
                FieldSpec::new("existingWebsite", "Existing Website", FieldKind::Url)
                    .placeholder("https://"),
            ]),
        StepPanel::new("background", "Background", "Experience, skills, and services")
            .with_fields(vec![
                FieldSpec::new("bioShort", "Short Bio", FieldKind::TextArea).required(),
                FieldSpec::new("bioLong", "Long Bio", FieldKind::TextArea),
                FieldSpec::new("experience", "Experience", FieldKind::TextArea),
                FieldSpec::new("education", "Education", FieldKind::TextArea),
                FieldSpec::new("skills", "Skills", FieldKind::TextArea)
                    .placeholder("Comma-separated list"),
                FieldSpec::new("servicesOffered", "Services Offered", FieldKind::TextArea),
                FieldSpec::new("achievements", "Achievements", FieldKind::TextArea),
            ]),
        StepPanel::new("projects", "Projects", "Add as many project entries as you like")
            .collecting_projects(),
        StepPanel::new("wrapup", "Website & Wrap-up", "Calls to action, budget, and links")
            .with_fields(vec![
                FieldSpec::new("primaryCta", "Primary Call to Action", FieldKind::Text)
                    .placeholder("e.g. Hire Me, Book a Call"),
                FieldSpec::new("secondaryCta", "Secondary Call to Action", FieldKind::Text),
                FieldSpec::new("preferredContact", "Preferred Contact Method", FieldKind::Text),
                FieldSpec::new("linkedin", "LinkedIn", FieldKind::Url).placeholder("https://"),
                FieldSpec::new("github", "GitHub", FieldKind::Url).placeholder("https://"),
                FieldSpec::new("budgetRange", "Budget Range", FieldKind::Text),
                FieldSpec::new("deadline", "Deadline", FieldKind::Text)
                    .placeholder("YYYY-MM-DD"),
                FieldSpec::new("contentReady", "Is Your Content Ready?", FieldKind::TextArea),
                FieldSpec::new("otherNotes", "Anything Else?", FieldKind::TextArea),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_step_sequence() {
        let steps = intake_steps();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0].key, "about");
        assert_eq!(steps[4].key, "wrapup");
    }

    #[test]
    fn test_exactly_one_panel_collects_projects() {
        let steps = intake_steps();
        let collectors: Vec<_> = steps.iter().filter(|s| s.collects_projects).collect();
        assert_eq!(collectors.len(), 1);
        assert_eq!(collectors[0].key, "projects");
        assert!(collectors[0].fields.is_empty());
    }

    #[test]
    fn test_contact_essentials_are_required() {
        let steps = intake_steps();
        let about = &steps[0];
        for name in ["fullName", "profession", "email"] {
            let field = about
                .fields
                .iter()
                .find(|f| f.name == name)
                .unwrap_or_else(|| panic!("missing field {name}"));
            assert!(field.required, "{name} should be required");
        }
    }

    #[test]
    fn test_field_names_are_unique_across_panels() {
        let steps = intake_steps();
        let mut seen = std::collections::HashSet::new();
        for step in &steps {
            for field in &step.fields {
                assert!(seen.insert(field.name.clone()), "duplicate {}", field.name);
            }
        }
    }
}
