//! Application wiring: builds the form, binds keys to the navigator and the
//! block factory, and runs the draw loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::form::{
    create_block, intake_steps, FieldSpec, ProjectContainer, StepNavigator, StepPanel,
};
use crate::submit::{IntakePayload, JsonFileSink, ProjectEntry, SubmitSink};
use crate::ui::form_field::FormField;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

pub struct IntakeApp {
    pub(crate) config: Config,
    pub(crate) navigator: StepNavigator,
    pub(crate) panels: Vec<StepPanel>,
    /// Input widgets per panel, parallel to each panel's field list.
    pub(crate) fields: Vec<Vec<FormField>>,
    /// Focused field index per panel. On the projects panel the index runs
    /// over all block widgets, block-major.
    pub(crate) focus: Vec<usize>,
    /// Present iff some panel hosts the repeatable project feature.
    pub(crate) container: Option<ProjectContainer>,
    /// Input widgets per project block, parallel to the container.
    pub(crate) project_fields: Vec<Vec<FormField>>,
    pub(crate) status: Option<String>,
    sink: Box<dyn SubmitSink>,
    should_quit: bool,
}

impl IntakeApp {
    /// Wire up the intake form with the default JSON file sink.
    pub fn new(config: Config) -> Self {
        let sink = Box::new(JsonFileSink::new(config.output_path()));
        Self::with_sink(config, sink)
    }

    /// Wire up the intake form with a custom submission sink.
    pub fn with_sink(config: Config, sink: Box<dyn SubmitSink>) -> Self {
        let panels = intake_steps();
        // Initial render happens at construction, before any user action
        let navigator = StepNavigator::new(panels.len());
        let fields: Vec<Vec<FormField>> = panels
            .iter()
            .map(|p| p.fields.iter().map(FormField::from_spec).collect())
            .collect();
        let focus = vec![0; panels.len()];
        let container = panels
            .iter()
            .any(|p| p.collects_projects)
            .then(ProjectContainer::new);

        tracing::info!(steps = panels.len(), "intake form wired");

        Self {
            config,
            navigator,
            panels,
            fields,
            focus,
            container,
            project_fields: Vec::new(),
            status: None,
            sink,
            should_quit: false,
        }
    }

    /// Run the TUI until the user quits.
    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let _guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Dispatch one key press. Navigation and form-level commands are
    /// handled here; everything else goes to the focused input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('a') => self.add_project_block(),
                KeyCode::Char('s') => self.submit(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.navigator.advance();
            }
            KeyCode::BackTab => {
                self.navigator.retreat();
            }
            KeyCode::Down => self.focus_next_field(),
            KeyCode::Up => self.focus_prev_field(),
            code => {
                if let Some(field) = self.focused_field_mut() {
                    field.handle_key(code);
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Append a project block and materialize widgets for it.
    pub fn add_project_block(&mut self) {
        if create_block(self.container.as_mut()).is_none() {
            return;
        }
        if let Some(block) = self
            .container
            .as_ref()
            .and_then(|c| c.blocks().last())
        {
            self.project_fields
                .push(block.fields.iter().map(FormField::from_spec).collect());
            self.status = Some(format!("Added project entry {}", block.discriminator + 1));
        }
    }

    /// Hand the assembled payload to the sink, untouched.
    pub fn submit(&mut self) {
        let payload = self.assemble_payload();
        match self.sink.submit(&payload) {
            Ok(()) => {
                tracing::info!(projects = payload.projects.len(), "form submitted");
                self.status = Some("Form submitted".to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, "submission failed");
                self.status = Some(format!("Submission failed: {err}"));
            }
        }
    }

    /// Collect every field value and project entry into a payload.
    pub fn assemble_payload(&self) -> IntakePayload {
        let mut values = BTreeMap::new();
        for (panel, widgets) in self.panels.iter().zip(&self.fields) {
            for (spec, widget) in panel.fields.iter().zip(widgets) {
                values.insert(spec.name.clone(), widget.value());
            }
        }

        let projects = self
            .container
            .as_ref()
            .map(|container| {
                container
                    .blocks()
                    .iter()
                    .zip(&self.project_fields)
                    .map(|(block, widgets)| ProjectEntry {
                        title: value_of(&block.fields, widgets, "projectTitle[]"),
                        role: value_of(&block.fields, widgets, "projectRole[]"),
                        description: value_of(&block.fields, widgets, "projectDesc[]"),
                        tech_stack: value_of(&block.fields, widgets, "projectTech[]"),
                        results: value_of(&block.fields, widgets, "projectResults[]"),
                        demo_url: value_of(&block.fields, widgets, "projectUrl[]"),
                        attachment_group: block.attachment_group().to_string(),
                        attachments: widgets
                            .iter()
                            .find_map(FormField::attachments)
                            .unwrap_or_default()
                            .to_vec(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        IntakePayload::new(values, projects)
    }

    fn focusable_count(&self) -> usize {
        let i = self.navigator.current();
        if self.panels[i].collects_projects {
            self.project_fields.iter().map(Vec::len).sum()
        } else {
            self.fields[i].len()
        }
    }

    fn focus_next_field(&mut self) {
        let count = self.focusable_count();
        let i = self.navigator.current();
        if count > 0 {
            self.focus[i] = (self.focus[i] + 1).min(count - 1);
        }
    }

    fn focus_prev_field(&mut self) {
        let i = self.navigator.current();
        self.focus[i] = self.focus[i].saturating_sub(1);
    }

    fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        let i = self.navigator.current();
        let focus = self.focus[i];
        if self.panels[i].collects_projects {
            let mut offset = focus;
            for block in &mut self.project_fields {
                if offset < block.len() {
                    return block.get_mut(offset);
                }
                offset -= block.len();
            }
            None
        } else {
            self.fields[i].get_mut(focus)
        }
    }
}

fn value_of(specs: &[FieldSpec], widgets: &[FormField], name: &str) -> String {
    specs
        .iter()
        .position(|s| s.name == name)
        .and_then(|i| widgets.get(i))
        .map_or_else(String::new, FormField::value)
}
