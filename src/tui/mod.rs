// terminal ui

mod app;
mod ascii;
mod event;
mod theme;
mod ui;

pub use app::{App, Phase};
pub use theme::ThemeKind;

use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

use crate::core::{ApiClient, DrugQuery, QueryType};
use crate::output::render_report;
use crate::Error;
use app::{LogLevel, Mode};
use event::{Action, handle_event, poll_event};

pub async fn run(client: ApiClient, query_type: QueryType) -> Result<(), Error> {
    // setup terminal
    enable_raw_mode().map_err(|e| Error::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| Error::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| Error::Terminal(e.to_string()))?;

    // run app
    let result = run_app(&mut terminal, client, query_type).await;

    // restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut client: ApiClient,
    query_type: QueryType,
) -> Result<(), Error> {
    let mut app = App::new(client.base_url().to_string(), query_type);
    let mut last_mode = app.mode;

    loop {
        // update cursor style before render
        if app.mode != last_mode {
            let cursor_style = match app.mode {
                Mode::Insert => SetCursorStyle::BlinkingBar,
                Mode::Normal => SetCursorStyle::BlinkingBlock,
            };
            execute!(terminal.backend_mut(), cursor_style).ok();
            last_mode = app.mode;
        }

        terminal
            .draw(|frame| ui::render(frame, &mut app))
            .map_err(|e| Error::Terminal(e.to_string()))?;

        // poll events
        if let Some(event) =
            poll_event(Duration::from_millis(100)).map_err(|e| Error::Terminal(e.to_string()))?
        {
            match handle_event(&mut app, event) {
                Action::Quit => break,
                Action::Submit { seq, query } => {
                    let request = DrugQuery::text(query, app.query_type);
                    app.log(LogLevel::Info, format!("sending {}", request.describe()));

                    // render the submitting state
                    terminal
                        .draw(|frame| ui::render(frame, &mut app))
                        .map_err(|e| Error::Terminal(e.to_string()))?;

                    // one best-effort call; the app decides whether the
                    // resolution is still current
                    match client.check_interactions(&request).await {
                        Ok(result) => app.set_result(seq, result),
                        Err(e) => app.set_error(seq, e.to_string()),
                    }
                }
                Action::SetEndpoint(url) => {
                    client = ApiClient::new(&url);
                    app.set_endpoint(client.base_url().to_string());
                }
                Action::Export => {
                    if let Some(result) = &app.result {
                        let filename = format!(
                            "medcheck_report_{}.txt",
                            chrono::Local::now().format("%Y%m%d_%H%M%S")
                        );
                        match std::fs::write(&filename, render_report(result)) {
                            Ok(_) => app.log(LogLevel::Ok, format!("exported to {filename}")),
                            Err(e) => app.log(LogLevel::Error, format!("export failed: {e}")),
                        }
                    } else {
                        app.log(LogLevel::Warn, "no results to export".to_string());
                    }
                }
                Action::None => {}
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
