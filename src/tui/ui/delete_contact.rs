//! Delete contact screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the screen

pub fn render_delete_contact(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.delete_contact_screen {
        // Create layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Query input
                Constraint::Min(5),    // Results
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let title = Paragraph::new("Eliminar contacto")
            .style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Query input
        let query_widget = Paragraph::new(screen.query.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Buscar"));
        f.render_widget(query_widget, chunks[1]);

        // Filtered rows; the selected one carries the delete action
        let rows: Vec<ListItem> = app
            .store
            .filter(&screen.query)
            .enumerate()
            .map(|(i, contact)| {
                let label = format!("{} {}", contact.name, contact.phone);
                let content = if i == screen.selected_index {
                    Line::from(vec![
                        Span::styled("→ ", Style::default().fg(Color::Red)),
                        Span::styled(
                            label,
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
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

        if rows.is_empty() {
            let empty_msg = Paragraph::new("No se encontraron contactos.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Resultados"));
            f.render_widget(empty_msg, chunks[2]);
        } else {
            let row_list = List::new(rows).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Resultados")
                    .style(Style::default()),
            );
            f.render_widget(row_list, chunks[2]);
        }

        // Help text
        let help_text = "Escribir para filtrar | ↑↓: Seleccionar | Enter/Supr: Eliminar | Esc: Volver";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
