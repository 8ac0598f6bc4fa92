//! Input widgets for form fields.
//!
//! Widgets hold the live input state for one [`FieldSpec`]; the spec stays
//! the source of truth for labels, required markers, and payload names.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::form::{FieldKind, FieldSpec};

/// A form input widget.
pub enum FormField {
    /// Single-line input, used for text and URL fields.
    TextInput {
        value: String,
        cursor_pos: usize,
        placeholder: String,
    },
    /// Multi-line input backed by tui-textarea.
    TextArea {
        textarea: Box<TextArea<'static>>,
        placeholder: String,
    },
    /// File attachment group: type a path, Enter appends it to the group.
    FileGroup {
        /// Group name carrying the block discriminator.
        group: String,
        paths: Vec<String>,
        input: String,
        cursor_pos: usize,
    },
}

impl FormField {
    pub fn from_spec(spec: &FieldSpec) -> Self {
        let placeholder = spec.placeholder.clone().unwrap_or_default();
        match spec.kind {
            FieldKind::Text | FieldKind::Url => FormField::TextInput {
                value: String::new(),
                cursor_pos: 0,
                placeholder,
            },
            FieldKind::TextArea => FormField::TextArea {
                textarea: Box::new(TextArea::default()),
                placeholder,
            },
            FieldKind::File => FormField::FileGroup {
                group: spec.name.clone(),
                paths: Vec::new(),
                input: String::new(),
                cursor_pos: 0,
            },
        }
    }

    /// Current value as a string. File groups report their pending input;
    /// use [`FormField::attachments`] for the collected paths.
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::TextArea { textarea, .. } => textarea.lines().join("\n"),
            FormField::FileGroup { input, .. } => input.clone(),
        }
    }

    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => {
                *value = new_value.to_string();
                *cursor_pos = value.chars().count();
            }
            FormField::TextArea { textarea, .. } => {
                textarea.select_all();
                textarea.cut();
                textarea.insert_str(new_value);
            }
            FormField::FileGroup {
                input, cursor_pos, ..
            } => {
                *input = new_value.to_string();
                *cursor_pos = input.chars().count();
            }
        }
    }

    /// Attached paths, for file groups only.
    pub fn attachments(&self) -> Option<&[String]> {
        match self {
            FormField::FileGroup { paths, .. } => Some(paths),
            _ => None,
        }
    }

    /// Presence check for required fields. Not content validation.
    pub fn is_valid(&self, required: bool) -> bool {
        if !required {
            return true;
        }
        match self {
            FormField::TextInput { value, .. } => !value.trim().is_empty(),
            FormField::TextArea { textarea, .. } => {
                !textarea.lines().iter().all(|l| l.trim().is_empty())
            }
            FormField::FileGroup { paths, .. } => !paths.is_empty(),
        }
    }

    /// Handle a key event, returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => edit_line(value, cursor_pos, key),
            FormField::TextArea { textarea, .. } => {
                textarea.input(crossterm::event::KeyEvent::new(
                    key,
                    crossterm::event::KeyModifiers::NONE,
                ));
                true
            }
            FormField::FileGroup {
                paths,
                input,
                cursor_pos,
                ..
            } => match key {
                KeyCode::Enter => {
                    let path = input.trim().to_string();
                    if !path.is_empty() {
                        paths.push(path);
                        input.clear();
                        *cursor_pos = 0;
                    }
                    true
                }
                other => edit_line(input, cursor_pos, other),
            },
        }
    }

    /// Rows this field needs below its label.
    pub fn render_height(&self) -> u16 {
        match self {
            FormField::TextInput { .. } => 1,
            FormField::TextArea { .. } => 4,
            FormField::FileGroup { paths, .. } => 1 + (paths.len() as u16).min(3),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                placeholder,
            } => {
                let line = line_with_cursor(value, *cursor_pos, placeholder, focused);
                let para = Paragraph::new(line).style(input_style(focused));
                frame.render_widget(para, area);
            }
            FormField::TextArea {
                textarea,
                placeholder,
            } => {
                textarea.set_cursor_line_style(Style::default());
                textarea.set_cursor_style(if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
                textarea.set_block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(if focused {
                            Color::Cyan
                        } else {
                            Color::DarkGray
                        })),
                );
                if textarea.lines().iter().all(|l| l.is_empty()) && !focused {
                    textarea.set_placeholder_text(placeholder.clone());
                    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
                }
                frame.render_widget(&**textarea, area);
            }
            FormField::FileGroup {
                paths,
                input,
                cursor_pos,
                ..
            } => {
                let mut lines =
                    vec![line_with_cursor(input, *cursor_pos, "path/to/file", focused)];
                for path in paths.iter().rev().take(3) {
                    lines.push(Line::from(vec![
                        Span::styled("  + ", Style::default().fg(Color::Green)),
                        Span::styled(path.clone(), Style::default().fg(Color::Gray)),
                    ]));
                }
                let para = Paragraph::new(lines).style(input_style(focused));
                frame.render_widget(para, area);
            }
        }
    }
}

fn input_style(focused: bool) -> Style {
    Style::default().fg(if focused { Color::White } else { Color::Gray })
}

fn line_with_cursor(value: &str, cursor_pos: usize, placeholder: &str, focused: bool) -> Line<'static> {
    if value.is_empty() && !focused {
        return Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut text = value.to_string();
    if focused {
        let at = byte_offset(&text, cursor_pos);
        text.insert(at, '|');
    }
    Line::from(text)
}

/// Byte offset of the `char_pos`-th character, or the string's length when
/// the cursor sits past the end.
fn byte_offset(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map_or(value.len(), |(i, _)| i)
}

/// Shared single-line editing for text inputs and the file path input.
///
/// The cursor is a character index; `byte_offset` converts it wherever the
/// string is actually mutated, so multibyte input stays on char boundaries.
fn edit_line(value: &mut String, cursor_pos: &mut usize, key: KeyCode) -> bool {
    let char_count = value.chars().count();
    match key {
        KeyCode::Char(c) => {
            let at = byte_offset(value, *cursor_pos);
            value.insert(at, c);
            *cursor_pos += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor_pos > 0 {
                *cursor_pos -= 1;
                let at = byte_offset(value, *cursor_pos);
                value.remove(at);
            }
            true
        }
        KeyCode::Delete => {
            if *cursor_pos < char_count {
                let at = byte_offset(value, *cursor_pos);
                value.remove(at);
            }
            true
        }
        KeyCode::Left => {
            if *cursor_pos > 0 {
                *cursor_pos -= 1;
            }
            true
        }
        KeyCode::Right => {
            if *cursor_pos < char_count {
                *cursor_pos += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor_pos = 0;
            true
        }
        KeyCode::End => {
            *cursor_pos = char_count;
            true
        }
        _ => false,
    }
}
