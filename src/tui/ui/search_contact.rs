//! Search contact screen rendering

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the screen

pub fn render_search_contact(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.search_contact_screen {
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
        let title = Paragraph::new("Buscar contacto")
            .style(
                Style::default()
                    .fg(Color::Cyan)
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

        // Results, derived from the store at render time
        let results: Vec<ListItem> = app
            .store
            .filter(&screen.query)
            .map(|contact| {
                ListItem::new(format!("{} {}", contact.name, contact.phone))
                    .style(Style::default().fg(Color::White))
            })
            .collect();

        if results.is_empty() {
            let empty_msg = Paragraph::new("No se encontraron contactos.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Resultados"));
            f.render_widget(empty_msg, chunks[2]);
        } else {
            let result_list = List::new(results).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Resultados")
                    .style(Style::default()),
            );
            f.render_widget(result_list, chunks[2]);
        }

        // Help text
        let help_text = "Escribir para filtrar | Esc: Volver";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
