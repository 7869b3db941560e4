//! List contacts screen rendering

use crate::contacts::Contact;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Renders the screen

pub fn render_list_contacts(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.list_contacts_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Contact list
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new(format!("Lista de contactos ({})", app.store.len()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Contact list
        if app.store.is_empty() {
            let empty_msg = Paragraph::new("No se encontraron contactos.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Contactos"));
            f.render_widget(empty_msg, chunks[1]);
        } else {
            let contact_items: Vec<ListItem> = app
                .store
                .all()
                .iter()
                .enumerate()
                .map(|(i, contact)| {
                    let label = format!("{} {}", contact.name, contact.phone);
                    let content = if i == screen.selected_index {
                        Line::from(vec![
                            Span::styled("→ ", Style::default().fg(Color::Cyan)),
                            Span::styled(
                                label,
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ])
                    } else {
                        Line::from(vec![
                            Span::raw("  "),
                            Span::styled(label, Style::default().fg(Color::White)),
                        ])
                    };
                    ListItem::new(content)
                })
                .collect();

            let contact_list = List::new(contact_items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Contactos")
                    .style(Style::default()),
            );
            f.render_widget(contact_list, chunks[1]);
        }

        // Status message
        let status_text = screen
            .status_message
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or("");
        let status_widget = Paragraph::new(status_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Estado"));
        f.render_widget(status_widget, chunks[2]);

        // Help text
        let help_text = "↑↓/j/k: Navegar | d/Supr: Eliminar | b/Esc: Volver | q: Salir";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);

        // Render confirmation popup if a deletion is pending
        if let Some(contact) = &screen.pending_delete {
            render_delete_confirmation_popup(f, size, contact);
        }
    }
}

fn render_delete_confirmation_popup(f: &mut Frame, area: ratatui::layout::Rect, contact: &Contact) {
    // Create a centered popup area
    let popup_width = 60;
    let popup_height = 10;

    let popup_area = ratatui::layout::Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    // Create the popup layout
    let popup_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Message
            Constraint::Length(2), // Buttons
        ])
        .split(popup_area);

    // Clear the popup area with a background block
    let background = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    f.render_widget(background, popup_area);

    // Title
    let title = Paragraph::new("Confirmar eliminación")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, popup_chunks[0]);

    // Message
    let message_text = vec![Line::from(vec![
        Span::raw("¿Seguro que deseas eliminar a "),
        Span::styled(&contact.name, Style::default().fg(Color::Cyan)),
        Span::raw("?"),
    ])];

    let message = Paragraph::new(message_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(message, popup_chunks[1]);

    // Buttons
    let buttons = Paragraph::new(Line::from(vec![
        Span::styled(
            "[Y]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Eliminar  "),
        Span::styled(
            "[N]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Cancelar"),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, popup_chunks[2]);
}
