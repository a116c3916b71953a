// event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::tui::app::{App, Mode, Panel, Popup};

pub enum Action {
    None,
    Quit,
    Submit { seq: u64, query: String },
    SetEndpoint(String),
    Export,
}

pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => Action::None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // global keys (work in any mode)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::Quit;
        }
        _ => {}
    }

    // handle popups first
    match app.popup {
        Popup::Themes => return handle_theme_popup(app, key),
        Popup::QueryTypes => return handle_query_type_popup(app, key),
        Popup::Endpoint => return handle_endpoint_popup(app, key),
        Popup::None => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::Insert => handle_insert_key(app, key),
    }
}

fn handle_theme_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_popup();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_scroll_up();
            Action::None
        }
        KeyCode::Enter => {
            app.select_theme();
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_query_type_popup(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_popup();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.query_type_scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.query_type_scroll_up();
            Action::None
        }
        KeyCode::Enter => {
            app.select_query_type();
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_endpoint_popup(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => {
                app.endpoint_move_start();
                Action::None
            }
            KeyCode::Char('e') => {
                app.endpoint_move_end();
                Action::None
            }
            KeyCode::Char('u') => {
                app.endpoint_clear();
                Action::None
            }
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => {
            app.close_popup();
            Action::None
        }
        KeyCode::Enter => {
            if let Some(url) = app.submit_endpoint() {
                Action::SetEndpoint(url)
            } else {
                Action::None
            }
        }
        KeyCode::Char(c) => {
            app.endpoint_insert_char(c);
            Action::None
        }
        KeyCode::Backspace => {
            app.endpoint_delete_char();
            Action::None
        }
        KeyCode::Delete => {
            app.endpoint_delete_char_forward();
            Action::None
        }
        KeyCode::Left => {
            app.endpoint_move_left();
            Action::None
        }
        KeyCode::Right => {
            app.endpoint_move_right();
            Action::None
        }
        KeyCode::Home => {
            app.endpoint_move_start();
            Action::None
        }
        KeyCode::End => {
            app.endpoint_move_end();
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        // quit
        KeyCode::Char('q') => Action::Quit,

        // enter insert mode
        KeyCode::Char('i') => {
            app.enter_insert();
            Action::None
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.move_cursor_end();
            app.enter_insert();
            Action::None
        }
        KeyCode::Char('I') => {
            app.move_cursor_start();
            app.enter_insert();
            Action::None
        }

        // panel navigation
        KeyCode::Tab => {
            app.cycle_panel();
            Action::None
        }

        // intent tag popup
        KeyCode::Char('c') => {
            app.open_query_type_popup();
            Action::None
        }

        // theme popup
        KeyCode::Char('t') => {
            app.open_theme_popup();
            Action::None
        }

        // endpoint popup
        KeyCode::Char('e') => {
            app.open_endpoint_popup();
            Action::None
        }

        // export report
        KeyCode::Char('x') => Action::Export,

        // scrolling / drug selection
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
            Action::None
        }
        KeyCode::Char('J') => {
            app.result_scroll_down();
            Action::None
        }
        KeyCode::Char('K') => {
            app.result_scroll_up();
            Action::None
        }

        // history
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.history_up();
            Action::None
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.history_down();
            Action::None
        }

        // expand/collapse in the results panel, submit elsewhere
        KeyCode::Enter => {
            if app.panel == Panel::Results {
                app.toggle_expanded();
                Action::None
            } else if let Some((seq, query)) = app.submit() {
                Action::Submit { seq, query }
            } else {
                Action::None
            }
        }

        _ => Action::None,
    }
}

fn handle_insert_key(app: &mut App, key: KeyEvent) -> Action {
    // check control keys first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => {
                app.move_cursor_start();
                Action::None
            }
            KeyCode::Char('e') => {
                app.move_cursor_end();
                Action::None
            }
            KeyCode::Char('u') => {
                app.clear_query();
                Action::None
            }
            KeyCode::Char('p') => {
                app.history_up();
                Action::None
            }
            KeyCode::Char('n') => {
                app.history_down();
                Action::None
            }
            KeyCode::Enter => {
                // ctrl+enter for newline
                app.insert_newline();
                Action::None
            }
            _ => Action::None,
        };
    }

    // shift+enter for newline
    if key.modifiers.contains(KeyModifiers::SHIFT) && key.code == KeyCode::Enter {
        app.insert_newline();
        return Action::None;
    }

    match key.code {
        // exit insert mode
        KeyCode::Esc => {
            app.exit_insert();
            Action::None
        }

        // submit
        KeyCode::Enter => {
            app.exit_insert();
            if let Some((seq, query)) = app.submit() {
                Action::Submit { seq, query }
            } else {
                Action::None
            }
        }

        // editing
        KeyCode::Char(c) => {
            app.insert_char(c);
            Action::None
        }
        KeyCode::Backspace => {
            app.delete_char();
            Action::None
        }
        KeyCode::Delete => {
            app.delete_char_forward();
            Action::None
        }

        // cursor movement
        KeyCode::Left => {
            app.move_cursor_left();
            Action::None
        }
        KeyCode::Right => {
            app.move_cursor_right();
            Action::None
        }
        KeyCode::Home => {
            app.move_cursor_start();
            Action::None
        }
        KeyCode::End => {
            app.move_cursor_end();
            Action::None
        }

        // history
        KeyCode::Up => {
            app.history_up();
            Action::None
        }
        KeyCode::Down => {
            app.history_down();
            Action::None
        }

        _ => Action::None,
    }
}
