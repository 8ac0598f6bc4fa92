//! Repeatable project-entry blocks.
//!
//! Each block is a typed descriptor of seven labeled inputs. The attachment
//! group name embeds a discriminator derived from the block count at creation
//! time, which keeps file-upload groups distinct as long as blocks are only
//! ever appended. There is no removal.

use super::schema::{FieldKind, FieldSpec};

/// One project entry: a structured sub-form the user can repeat.
#[derive(Debug, Clone)]
pub struct ProjectBlock {
    /// Value embedded in the attachment group name to keep it unique.
    pub discriminator: usize,
    /// The seven input controls, in display order.
    pub fields: Vec<FieldSpec>,
}

impl ProjectBlock {
    fn new(discriminator: usize) -> Self {
        let fields = vec![
            FieldSpec::new("projectTitle[]", "Project Title", FieldKind::Text).required(),
            FieldSpec::new("projectRole[]", "Your Role", FieldKind::Text)
                .placeholder("e.g. Lead Developer, Data Analyst"),
            FieldSpec::new("projectDesc[]", "Project Description", FieldKind::TextArea)
                .required(),
            FieldSpec::new("projectTech[]", "Tech Stack", FieldKind::Text)
                .placeholder("React, Flask, PostgreSQL, Power BI"),
            FieldSpec::new("projectResults[]", "Results / Impact", FieldKind::TextArea)
                .placeholder("e.g. +15% revenue, -40% processing time"),
            FieldSpec::new("projectUrl[]", "Live URL / Demo", FieldKind::Url)
                .placeholder("https://"),
            FieldSpec::new(
                format!("projectFiles_{discriminator}"),
                "Upload Screenshots",
                FieldKind::File,
            ),
        ];
        Self {
            discriminator,
            fields,
        }
    }

    /// Name of the attachment group, e.g. `projectFiles_0`.
    pub fn attachment_group(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::File)
            .map_or("", |f| f.name.as_str())
    }
}

/// Append-only container for project blocks.
#[derive(Debug, Clone, Default)]
pub struct ProjectContainer {
    blocks: Vec<ProjectBlock>,
}

impl ProjectContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[ProjectBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Append a new project block to the container.
///
/// The new block's discriminator is the count of blocks already present.
/// When the container is absent the call is a guarded no-op: the repeatable
/// feature may be missing from a form without breaking anything else.
///
/// Returns the discriminator of the appended block, or `None` when skipped.
pub fn create_block(container: Option<&mut ProjectContainer>) -> Option<usize> {
    let Some(container) = container else {
        tracing::debug!("project container absent, skipping add");
        return None;
    };
    let discriminator = container.blocks.len();
    container.blocks.push(ProjectBlock::new(discriminator));
    tracing::debug!(discriminator, "appended project block");
    Some(discriminator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_block_appends_exactly_one() {
        let mut container = ProjectContainer::new();
        assert_eq!(create_block(Some(&mut container)), Some(0));
        assert_eq!(container.len(), 1);
        assert_eq!(create_block(Some(&mut container)), Some(1));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_discriminators_follow_creation_order() {
        let mut container = ProjectContainer::new();
        for _ in 0..5 {
            create_block(Some(&mut container));
        }
        let discriminators: Vec<_> =
            container.blocks().iter().map(|b| b.discriminator).collect();
        assert_eq!(discriminators, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_attachment_groups_do_not_collide() {
        let mut container = ProjectContainer::new();
        create_block(Some(&mut container));
        create_block(Some(&mut container));
        let first = container.blocks()[0].attachment_group();
        let second = container.blocks()[1].attachment_group();
        assert_eq!(first, "projectFiles_0");
        assert_eq!(second, "projectFiles_1");
        assert_ne!(first, second);
    }

    #[test]
    fn test_absent_container_is_a_guarded_noop() {
        assert_eq!(create_block(None), None);
    }

    #[test]
    fn test_block_shape() {
        let mut container = ProjectContainer::new();
        create_block(Some(&mut container));
        let block = &container.blocks()[0];
        assert_eq!(block.fields.len(), 7);

        let required: Vec<_> = block
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["projectTitle[]", "projectDesc[]"]);
    }
}
