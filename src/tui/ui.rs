// ui rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::core::QueryType;
use crate::core::presenter::{self, Tone};
use crate::tui::app::{App, LogLevel, Mode, Panel, Phase, Popup};
use crate::tui::ascii::MEDCHECK_LOGO;
use crate::tui::theme::ThemeKind;

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;

    // clear with bg color
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // main layout: header + content + footer
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // header with logo
            Constraint::Min(10),   // content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, main[0]);
    render_content(frame, app, main[1]);
    render_footer(frame, app, main[2]);

    // render popups on top
    match app.popup {
        Popup::Themes => render_theme_popup(frame, app),
        Popup::QueryTypes => render_query_type_popup(frame, app),
        Popup::Endpoint => render_endpoint_popup(frame, app),
        Popup::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    frame.render_widget(block, area);

    // split header: logo on left, info on right
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(20)])
        .margin(1)
        .split(area);

    // render ascii logo
    let logo_lines: Vec<Line> = MEDCHECK_LOGO
        .iter()
        .map(|&line| Line::styled(line, theme.accent()))
        .collect();

    let logo = Paragraph::new(logo_lines).style(theme.base());
    frame.render_widget(logo, inner[0]);

    // render info panel
    let latency = app
        .latency_ms
        .map(|ms| format!("{}ms", ms))
        .unwrap_or_else(|| "-".to_string());

    let mode_str = match app.mode {
        Mode::Normal => "normal",
        Mode::Insert => "insert",
    };

    let info_lines = vec![
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("medcheck", theme.accent()),
        ]),
        Line::from(vec![
            Span::styled("| API: ", theme.muted()),
            Span::styled(&app.api_url, theme.base()),
            Span::styled(" | ", theme.muted()),
            Span::styled(&latency, theme.accent()),
        ]),
        Line::from(vec![
            Span::styled("| Asking about: ", theme.muted()),
            Span::styled(app.query_type.label(), theme.accent()),
            Span::styled("  | Mode: ", theme.muted()),
            Span::styled(mode_str, theme.accent()),
        ]),
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("[Tab]", theme.accent()),
            Span::styled(" Panels  ", theme.muted()),
            Span::styled("[c]", theme.accent()),
            Span::styled(" Intent  ", theme.muted()),
            Span::styled("[q]", theme.accent()),
            Span::styled(" Quit", theme.muted()),
        ]),
    ];

    let info = Paragraph::new(info_lines).style(theme.base());
    frame.render_widget(info, inner[1]);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    // query + logs on the left, results on the right
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(cols[0]);

    render_query(frame, app, left[0]);
    render_logs(frame, app, left[1]);
    render_results(frame, app, cols[1]);
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    let parts = vec![
        Span::styled(" Enter ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" Ask ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("c ", theme.accent()),
        Span::styled("Intent ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("j/k ", theme.accent()),
        Span::styled("Select ", theme.muted()),
        Span::styled("Enter ", theme.accent()),
        Span::styled("Expand ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("x ", theme.accent()),
        Span::styled("Export ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("e ", theme.accent()),
        Span::styled("Endpoint ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("t ", theme.accent()),
        Span::styled("Theme ", theme.muted()),
        Span::styled("| ", theme.border()),
        Span::styled("q ", theme.accent()),
        Span::styled("Quit ", theme.muted()),
    ];

    let paragraph = Paragraph::new(Line::from(parts))
        .style(theme.base())
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_query(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Query;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let title = format!(" Query ({}) ", app.query_type.label());

    let block = Block::default()
        .title(Span::styled(title, theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    // intent-specific placeholder copy while the query is empty
    let content = if app.query.is_empty() && app.mode != Mode::Insert {
        vec![
            Line::styled(app.query_type.placeholder(), theme.muted()),
            Line::from(""),
            Line::styled("press 'i' to type your question...", theme.muted()),
        ]
    } else if app.query.is_empty() {
        vec![Line::styled(app.query_type.placeholder(), theme.muted())]
    } else {
        app.query
            .lines()
            .map(|l| Line::styled(l.to_string(), theme.base()))
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    // set cursor position when in insert mode
    if app.mode == Mode::Insert && active {
        let inner = area.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 1,
        });

        // the cursor is a byte offset; count chars on the line it sits on
        let (cursor_line, cursor_col) = {
            let before = &app.query[..app.query_cursor];
            let line = before.matches('\n').count();
            let col = before
                .rsplit('\n')
                .next()
                .map(|l| l.chars().count())
                .unwrap_or(0);
            (line, col)
        };

        let cursor_x =
            (inner.x + cursor_col as u16).min(inner.right().saturating_sub(1));
        let cursor_y = inner.y + cursor_line as u16;

        if cursor_y < inner.bottom() {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Results;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let title = match &app.result {
        Some(r) => format!(" Results ({} drugs) ", r.drugs.len()),
        None => " Results ".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(title, theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    let content = match app.phase {
        Phase::Submitting => vec![Line::styled("checking...", theme.muted())],
        Phase::Failed => {
            let err = app.error.as_deref().unwrap_or("request failed");
            vec![Line::styled(format!("error: {err}"), theme.error())]
        }
        _ => match &app.result {
            Some(result) => result_lines(app, result),
            None => vec![Line::styled(
                "submit a query to see results",
                theme.muted(),
            )],
        },
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn result_lines<'a>(
    app: &App,
    result: &crate::core::InteractionResult,
) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let active = app.panel == Panel::Results;

    // the summary sentence is derived from the drug count on every render
    let mut lines = vec![
        Line::styled(presenter::summary_line(result), theme.base()),
        Line::from(""),
    ];

    let verdict = presenter::verdict(result);
    let (marker, style) = match verdict.tone {
        Tone::Safe => ("[SAFE]", theme.success()),
        Tone::Caution => ("[CAUTION]", theme.warning()),
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), style),
        Span::styled(verdict.message, style),
    ]));
    lines.push(Line::from(""));

    for (i, section) in presenter::drug_sections(result).iter().enumerate() {
        let expanded = app.expanded.get(i).copied().unwrap_or(false);
        let marker = if expanded { "v" } else { ">" };
        let selected = active && i == app.drug_cursor;

        let name_style = if selected {
            theme.selected().fg(theme.accent)
        } else {
            theme.accent()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), theme.muted()),
            Span::styled(section.name.clone(), name_style),
        ]));

        if expanded {
            if let Some(callout) = &section.callout {
                lines.push(Line::from(vec![
                    Span::styled("  !! ", theme.warning()),
                    Span::styled(callout.clone(), theme.warning()),
                ]));
            }
            lines.push(detail_line("Description", &section.description, app));
            lines.push(detail_line("Side Effects", &section.side_effects, app));
            lines.push(detail_line("Warnings", &section.warnings, app));
            if let Some(precautions) = &section.precautions {
                lines.push(Line::from(vec![
                    Span::styled("  Precautions: ", theme.accent()),
                    Span::styled(precautions.clone(), theme.base()),
                ]));
            }
            lines.push(Line::from(""));
        }
    }

    lines
}

fn detail_line<'a>(label: &str, value: &str, app: &App) -> Line<'a> {
    let theme = &app.theme;
    Line::from(vec![
        Span::styled(format!("  {label}: "), theme.muted()),
        Span::styled(value.to_string(), theme.base()),
    ])
}

fn render_logs(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Logs;

    let border_style = if active {
        theme.accent()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(Span::styled(" Logs ", theme.title()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base());

    // keep the scroll within range for the panel's real height
    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = app.logs.len().saturating_sub(visible);
    if app.log_scroll > max_scroll {
        app.log_scroll = max_scroll;
    }

    let lines: Vec<Line> = app
        .logs
        .iter()
        .map(|entry| {
            let (prefix, style) = match entry.level {
                LogLevel::Ok => ("[OK]", theme.success()),
                LogLevel::Info => ("[--]", theme.muted()),
                LogLevel::Warn => ("[!!]", theme.warning()),
                LogLevel::Error => ("[ERR]", theme.error()),
            };
            Line::from(vec![
                Span::styled(format!("{} ", prefix), style),
                Span::styled(&entry.message, theme.base()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .scroll((app.log_scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

fn render_theme_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(40, 50, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" select theme ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let mut lines: Vec<Line> = ThemeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let name = kind.name();
            if i == app.theme_scroll {
                Line::from(vec![
                    Span::styled(" > ", theme.accent()),
                    Span::styled(name, theme.selected().fg(theme.accent)),
                ])
            } else {
                Line::from(vec![Span::styled(format!("   {name}"), theme.base())])
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" j/k ", theme.accent()),
        Span::styled("navigate  ", theme.muted()),
        Span::styled("enter ", theme.accent()),
        Span::styled("select  ", theme.muted()),
        Span::styled("esc ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]));

    let paragraph = Paragraph::new(lines).block(block).style(theme.base());
    frame.render_widget(paragraph, area);
}

fn render_query_type_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(50, 45, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" what do you want to know? ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let mut lines = vec![];

    for (i, query_type) in QueryType::ALL.iter().enumerate() {
        if i == app.query_type_scroll {
            lines.push(Line::from(vec![
                Span::styled(" > ", theme.accent()),
                Span::styled(query_type.label(), theme.selected().fg(theme.accent)),
            ]));
        } else {
            lines.push(Line::from(vec![Span::styled(
                format!("   {}", query_type.label()),
                theme.base(),
            )]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        QueryType::ALL[app.query_type_scroll].placeholder(),
        theme.muted(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("j/k ", theme.accent()),
        Span::styled("navigate  ", theme.muted()),
        Span::styled("enter ", theme.accent()),
        Span::styled("select  ", theme.muted()),
        Span::styled("esc ", theme.accent()),
        Span::styled("close", theme.muted()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_endpoint_popup(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(70, 30, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" edit endpoint ", theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .style(theme.base());

    let lines = vec![
        Line::styled("api base url:", theme.muted()),
        Line::from(""),
        Line::raw(app.endpoint_input.clone()),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("enter ", theme.accent()),
            Span::styled("apply  ", theme.muted()),
            Span::styled("esc ", theme.accent()),
            Span::styled("cancel  ", theme.muted()),
            Span::styled("ctrl+u ", theme.accent()),
            Span::styled("clear", theme.muted()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.base())
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    // cursor position in the url input
    let inner = area.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    });
    let cursor_col = app.endpoint_input[..app.endpoint_cursor].chars().count();
    let cursor_x = (inner.x + cursor_col as u16).min(inner.right().saturating_sub(1));
    let cursor_y = inner.y + 2;

    frame.set_cursor_position((cursor_x, cursor_y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueryType;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app() -> App {
        App::new(
            "http://localhost:8000".to_string(),
            QueryType::Interaction,
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_newest_log_entry_stays_visible_on_short_panel() {
        let mut app = test_app();
        for i in 0..50 {
            app.log(LogLevel::Info, format!("entry {i}"));
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let content = buffer_text(&terminal);
        assert!(
            content.contains("entry 49"),
            "log panel scrolled past the newest entry"
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds_with_long_multibyte_input() {
        let mut app = test_app();
        app.enter_insert();
        for c in "übermäßig lange Anfrage über Wechselwirkungen von Medikamenten".chars() {
            app.insert_char(c);
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let pos = terminal.get_cursor_position().unwrap();
        assert!(pos.x < 60, "cursor drawn outside the terminal");
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
