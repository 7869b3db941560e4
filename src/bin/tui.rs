//! Agenda TUI (Terminal User Interface)
//!
//! A terminal contact book: add, search, delete and list contacts.

use agenda::router::Route;
use agenda::tui::{ui::ui, App};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> agenda::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new();

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.current_route() {
                    Route::MainMenu => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.next();
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.previous();
                        }
                        KeyCode::Enter => {
                            app.select();
                        }
                        // Quick access hotkeys
                        KeyCode::Char('a') => {
                            app.show_add_contact_screen();
                        }
                        KeyCode::Char('b') => {
                            app.show_search_contact_screen();
                        }
                        KeyCode::Char('e') => {
                            app.show_delete_contact_screen();
                        }
                        KeyCode::Char('l') => {
                            app.show_list_contacts_screen();
                        }
                        _ => {}
                    },
                    Route::AddContact => match key.code {
                        KeyCode::Esc => {
                            app.back_to_main_menu();
                        }
                        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                            if let Some(screen) = &mut app.add_contact_screen {
                                screen.toggle_focus();
                            }
                        }
                        KeyCode::Enter => {
                            app.save_contact();
                        }
                        KeyCode::Backspace => {
                            if let Some(screen) = &mut app.add_contact_screen {
                                screen.backspace();
                            }
                        }
                        KeyCode::Char(c) if !c.is_control() => {
                            if let Some(screen) = &mut app.add_contact_screen {
                                screen.add_char(c);
                            }
                        }
                        _ => {}
                    },
                    Route::SearchContact => match key.code {
                        KeyCode::Esc => {
                            app.back_to_main_menu();
                        }
                        KeyCode::Backspace => {
                            if let Some(screen) = &mut app.search_contact_screen {
                                screen.backspace();
                            }
                        }
                        KeyCode::Char(c) if !c.is_control() => {
                            if let Some(screen) = &mut app.search_contact_screen {
                                screen.add_char(c);
                            }
                        }
                        _ => {}
                    },
                    Route::DeleteContact => match key.code {
                        KeyCode::Esc => {
                            app.back_to_main_menu();
                        }
                        KeyCode::Down => {
                            let rows = app.delete_screen_rows().len();
                            if let Some(screen) = &mut app.delete_contact_screen {
                                screen.next(rows);
                            }
                        }
                        KeyCode::Up => {
                            let rows = app.delete_screen_rows().len();
                            if let Some(screen) = &mut app.delete_contact_screen {
                                screen.previous(rows);
                            }
                        }
                        KeyCode::Enter | KeyCode::Delete => {
                            app.delete_filtered_selected();
                        }
                        KeyCode::Backspace => {
                            if let Some(screen) = &mut app.delete_contact_screen {
                                screen.backspace();
                            }
                        }
                        KeyCode::Char(c) if !c.is_control() => {
                            if let Some(screen) = &mut app.delete_contact_screen {
                                screen.add_char(c);
                            }
                        }
                        _ => {}
                    },
                    Route::ListContacts => {
                        // Check if delete confirmation popup is shown
                        if let Some(screen) = &app.list_contacts_screen {
                            if screen.confirming() {
                                // Handle popup navigation
                                match key.code {
                                    KeyCode::Char('y') | KeyCode::Enter => {
                                        app.confirm_delete();
                                    }
                                    KeyCode::Char('n') | KeyCode::Esc => {
                                        app.cancel_delete();
                                    }
                                    _ => {}
                                }
                                continue; // Don't process other keys while popup is shown
                            }
                        }

                        // Normal list navigation
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('b') => {
                                app.back_to_main_menu();
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                let rows = app.store.len();
                                if let Some(screen) = &mut app.list_contacts_screen {
                                    screen.next(rows);
                                }
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                let rows = app.store.len();
                                if let Some(screen) = &mut app.list_contacts_screen {
                                    screen.previous(rows);
                                }
                            }
                            KeyCode::Char('d') | KeyCode::Delete => {
                                app.request_delete_selected();
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
