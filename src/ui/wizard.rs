//! Renderers for the step wizard: indicator row, progress fill, the active
//! step panel, and the key-hint footer. Everything here is a deterministic
//! function of app state; no state lives in this module.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::IntakeApp;
use crate::form::{ProjectContainer, StepPanel, StepView};
use crate::ui::form_field::FormField;

impl IntakeApp {
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // step indicators
                Constraint::Length(1), // progress fill
                Constraint::Min(6),    // active step panel
                Constraint::Length(1), // status line
                Constraint::Length(1), // key hints
            ])
            .split(frame.area());

        let view = self.navigator.view().clone();
        render_title(frame, chunks[0]);
        render_indicators(frame, chunks[1], &view, &self.panels);
        render_progress(frame, chunks[2], &view);

        let i = view.active;
        let panel = &self.panels[i];
        let focus = self.focus[i];
        if panel.collects_projects {
            render_projects(
                frame,
                chunks[3],
                panel,
                self.container.as_ref(),
                &mut self.project_fields,
                focus,
            );
        } else {
            render_fields(frame, chunks[3], panel, &mut self.fields[i], focus);
        }

        render_status(frame, chunks[4], self.status.as_deref());
        render_footer(frame, chunks[5]);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Portfolio Intake",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  tell us about yourself and your work",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_indicators(frame: &mut Frame, area: Rect, view: &StepView, panels: &[StepPanel]) {
    let mut spans = Vec::new();
    for (idx, panel) in panels.iter().enumerate() {
        let active = view.is_active(idx);
        let marker = if active { "●" } else { "○" };
        let style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {marker} {} ", panel.title), style));
    }
    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(line, area);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &StepView) {
    let ratio = (view.progress_percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!(
            "Step {} of {} ({:.0}%)",
            view.active + 1,
            view.total,
            view.progress_percent
        ));
    frame.render_widget(gauge, area);
}

fn render_fields(
    frame: &mut Frame,
    area: Rect,
    panel: &StepPanel,
    widgets: &mut [FormField],
    focus: usize,
) {
    let inner = panel_block(frame, area, panel);

    let mut y = inner.y;
    for (idx, (spec, widget)) in panel.fields.iter().zip(widgets.iter_mut()).enumerate() {
        let height = widget.render_height();
        if y + 1 + height > inner.bottom() {
            break;
        }

        let focused = idx == focus;
        let marker = if spec.required { " *" } else { "" };
        let missing = !widget.is_valid(spec.required);
        let label = Paragraph::new(Line::from(Span::styled(
            format!("{}{marker}", spec.label),
            label_style(focused, missing),
        )));
        frame.render_widget(label, Rect::new(inner.x, y, inner.width, 1));

        widget.render(
            frame,
            Rect::new(inner.x + 2, y + 1, inner.width.saturating_sub(2), height),
            focused,
        );
        y += 1 + height + 1;
    }
}

fn render_projects(
    frame: &mut Frame,
    area: Rect,
    panel: &StepPanel,
    container: Option<&ProjectContainer>,
    block_widgets: &mut [Vec<FormField>],
    focus: usize,
) {
    let inner = panel_block(frame, area, panel);

    let Some(container) = container else {
        let note = Paragraph::new(Span::styled(
            "Project entries are not available on this form.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(note, inner);
        return;
    };

    if container.is_empty() {
        let note = Paragraph::new(Span::styled(
            "No project entries yet. Ctrl+A adds one.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(note, inner);
        return;
    }

    let mut y = inner.y;
    let mut widget_index = 0;
    for (block, widgets) in container.blocks().iter().zip(block_widgets.iter_mut()) {
        let body_height = block_body_height(widgets);
        let card_height = body_height
            .saturating_add(2)
            .min(inner.bottom().saturating_sub(y));
        if card_height < 3 {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, card_height);
        let card = Block::default()
            .title(format!(" Project {} ", block.discriminator + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let card_inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let mut field_y = card_inner.y;
        for (spec, widget) in block.fields.iter().zip(widgets.iter_mut()) {
            let height = widget.render_height();
            if field_y + 1 + height > card_inner.bottom() {
                widget_index += 1;
                continue;
            }
            let focused = widget_index == focus;
            let marker = if spec.required { " *" } else { "" };
            let missing = !widget.is_valid(spec.required);
            let label = Paragraph::new(Span::styled(
                format!("{}{marker}", spec.label),
                label_style(focused, missing),
            ));
            frame.render_widget(label, Rect::new(card_inner.x, field_y, card_inner.width, 1));
            widget.render(
                frame,
                Rect::new(
                    card_inner.x + 2,
                    field_y + 1,
                    card_inner.width.saturating_sub(2),
                    height,
                ),
                focused,
            );
            field_y += 1 + height + 1;
            widget_index += 1;
        }
        y += card_height;
    }
}

/// Rows a block's widgets need, labels and spacers included. Saturating:
/// the block count is unbounded, the viewport is not.
fn block_body_height(widgets: &[FormField]) -> u16 {
    widgets
        .iter()
        .fold(0u16, |acc, w| acc.saturating_add(w.render_height() + 2))
}

/// Field label styling: focused wins, then a missing required value.
fn label_style(focused: bool, missing: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if missing {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn panel_block(frame: &mut Frame, area: Rect, panel: &StepPanel) -> Rect {
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                panel.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} ", panel.hint), Style::default().fg(Color::DarkGray)),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>) {
    if let Some(message) = status {
        let para = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Green),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(para, area);
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hint = |key: &str, action: &str| {
        vec![
            Span::styled(key.to_string(), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {action}  ")),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(hint("Tab", "next"));
    spans.extend(hint("Shift+Tab", "prev"));
    spans.extend(hint("Up/Down", "field"));
    spans.extend(hint("Ctrl+A", "add project"));
    spans.extend(hint("Ctrl+S", "submit"));
    spans.extend(hint("Esc", "quit"));
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::form::{FieldKind, FieldSpec};
    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    #[test]
    fn test_label_style_precedence() {
        // Focus wins over the missing-required highlight
        assert_eq!(label_style(true, true).fg, Some(Color::Cyan));
        assert_eq!(label_style(true, false).fg, Some(Color::Cyan));
        assert_eq!(label_style(false, true).fg, Some(Color::Red));
        assert_eq!(label_style(false, false).fg, Some(Color::Gray));
    }

    #[test]
    fn test_block_body_height_saturates_on_many_widgets() {
        let spec = FieldSpec::new("projectTitle[]", "Project Title", FieldKind::Text);
        let widgets: Vec<FormField> = (0..30_000).map(|_| FormField::from_spec(&spec)).collect();
        assert_eq!(block_body_height(&widgets), u16::MAX);
    }

    #[test]
    fn test_first_panel_marks_empty_required_fields() {
        let mut app = IntakeApp::new(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("About You"));
        assert!(text.contains("Full Name *"));

        // Empty required fields get the missing-value label color. The first
        // field holds focus, so the red cells come from profession and email.
        let red_cells = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.fg == Color::Red)
            .count();
        assert!(red_cells > 0);
    }

    #[test]
    fn test_projects_panel_renders_cards() {
        let mut app = IntakeApp::new(Config::default());
        app.add_project_block();
        app.add_project_block();
        while !app.panels[app.navigator.current()].collects_projects {
            app.navigator.advance();
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Project 1"));
        assert!(text.contains("Project Title *"));
    }
}
