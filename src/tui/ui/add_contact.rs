//! Add contact screen rendering

use crate::tui::app::App;
use crate::tui::screens::AddContactField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the screen

pub fn render_add_contact(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.add_contact_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Name field
                Constraint::Length(3), // Phone field
                Constraint::Length(3), // Status message
                Constraint::Min(3),    // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("Agregar contacto")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Name field, highlighted when focused
        let name_style = if screen.focus == AddContactField::Name {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let name_widget = Paragraph::new(screen.name.as_str())
            .style(name_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(name_style)
                    .title("Nombre"),
            );
        f.render_widget(name_widget, chunks[1]);

        // Phone field, highlighted when focused
        let phone_style = if screen.focus == AddContactField::Phone {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let phone_widget = Paragraph::new(screen.phone.as_str())
            .style(phone_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(phone_style)
                    .title("Teléfono"),
            );
        f.render_widget(phone_widget, chunks[2]);

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
        f.render_widget(status_widget, chunks[3]);

        // Help text
        let help_text = "Tab/↑↓: Cambiar campo | Enter: Guardar | Esc: Volver";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[4]);
    }
}
