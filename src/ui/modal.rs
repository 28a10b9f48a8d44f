// Modal UI components.
// Create-collection dialog drawn on top of the listings view.

use ratatui::{prelude::*, widgets::*};

use crate::state::{CreateForm, FormField, Visibility};

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

fn text_line(value: &str, focused: bool) -> Line<'_> {
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Draw the create form modal on top of the current view.
pub fn draw_create_form(frame: &mut Frame, form: &CreateForm) {
    let area = frame.area();

    // Create centered modal
    let modal_width = area.width.min(60);
    let modal_height = area.height.min(17);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Create a new collection ");
    let inner = outer.inner(modal_area);
    frame.render_widget(outer, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Validation message
            Constraint::Length(3), // Description
            Constraint::Length(3), // Visibility
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let title_focused = form.focus == FormField::Title;
    let title_widget = Paragraph::new(text_line(&form.title, title_focused))
        .block(field_block(" Title * ", title_focused));
    frame.render_widget(title_widget, chunks[0]);

    if let Some(message) = form.title_error {
        let error = Paragraph::new(message).style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[1]);
    }

    let description_focused = form.focus == FormField::Description;
    let description_widget = Paragraph::new(text_line(&form.description, description_focused))
        .block(field_block(" Description ", description_focused));
    frame.render_widget(description_widget, chunks[2]);

    let modifier_focused = form.focus == FormField::Modifier;
    let radio = |option: Visibility| {
        let marker = if form.modifier == option { "(•)" } else { "( )" };
        let style = if form.modifier == option {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("{} {}   ", marker, option.label()), style)
    };
    let radio_widget = Paragraph::new(Line::from(vec![
        radio(Visibility::Public),
        radio(Visibility::Private),
    ]))
    .block(field_block(" Visibility ", modifier_focused));
    frame.render_widget(radio_widget, chunks[3]);

    // Instructions
    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Create  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" = Next field  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[5]);
}
