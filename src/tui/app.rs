// app state for the tui

use crate::core::{InteractionResult, QueryType};
use crate::tui::theme::{Theme, ThemeKind, detect_theme};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Query,
    Results,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Themes,
    QueryTypes,
    Endpoint,
}

/// One submission cycle. Idle is both entry and re-entry; Success and Failed
/// resolve to no pending call, so a new submission is allowed from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Ok,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

pub struct App {
    pub running: bool,
    pub mode: Mode,
    pub panel: Panel,
    pub popup: Popup,
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub api_url: String,

    // query input (multi-line)
    pub query: String,
    pub query_cursor: usize,
    pub query_type: QueryType,

    // endpoint editor
    pub endpoint_input: String,
    pub endpoint_cursor: usize,

    // submission cycle
    pub phase: Phase,
    pub request_seq: u64,
    pub query_start: Option<Instant>,
    pub latency_ms: Option<u64>,

    // last outcome - an error never coexists with a result
    pub result: Option<InteractionResult>,
    pub error: Option<String>,

    // results navigation
    pub drug_cursor: usize,
    pub expanded: Vec<bool>,

    // logs
    pub logs: Vec<LogEntry>,

    // scroll
    pub result_scroll: usize,
    pub log_scroll: usize,
    pub theme_scroll: usize,
    pub query_type_scroll: usize,

    // history
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl App {
    pub fn new(api_url: String, query_type: QueryType) -> Self {
        let theme_kind = detect_theme();

        let mut app = Self {
            running: true,
            mode: Mode::Normal,
            panel: Panel::Query,
            popup: Popup::None,
            theme_kind,
            theme: Theme::from_kind(theme_kind),
            api_url: api_url.clone(),
            query: String::new(),
            query_cursor: 0,
            query_type,
            endpoint_input: api_url.clone(),
            endpoint_cursor: 0,
            phase: Phase::Idle,
            request_seq: 0,
            query_start: None,
            latency_ms: None,
            result: None,
            error: None,
            drug_cursor: 0,
            expanded: Vec::new(),
            logs: Vec::new(),
            result_scroll: 0,
            log_scroll: 0,
            theme_scroll: theme_kind.index(),
            query_type_scroll: query_type.index(),
            history: Vec::new(),
            history_index: None,
        };

        // initial log
        app.log(LogLevel::Ok, format!("endpoint {api_url}"));
        app.log(
            LogLevel::Info,
            format!("intent: {}", app.query_type.label()),
        );

        app
    }

    pub fn log(&mut self, level: LogLevel, message: String) {
        self.logs.push(LogEntry { level, message });
        // request the newest entry; the render pass clamps this against
        // the actual panel height
        self.log_scroll = self.logs.len();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Gate for one submission cycle. Inert when the trimmed query is empty,
    /// and explicitly rejected while another call is in flight so the
    /// guarantee does not rest on UI disablement alone. On success returns
    /// the dispatched sequence number and the query text.
    pub fn submit(&mut self) -> Option<(u64, String)> {
        if self.is_submitting() {
            return None;
        }
        if self.query.trim().is_empty() {
            return None;
        }

        let query = self.query.clone();
        self.history.push(query.clone());
        self.history_index = None;
        self.clear_query();

        self.phase = Phase::Submitting;
        self.error = None;
        self.result = None;
        self.expanded.clear();
        self.request_seq += 1;
        self.query_start = Some(Instant::now());

        Some((self.request_seq, query))
    }

    /// Apply a successful response. Resolutions from a call that is no longer
    /// the current one are ignored rather than corrupting displayed state.
    pub fn set_result(&mut self, seq: u64, result: InteractionResult) {
        if seq != self.request_seq {
            self.log(LogLevel::Warn, "ignoring stale response".to_string());
            return;
        }
        if let Some(start) = self.query_start.take() {
            self.latency_ms = Some(start.elapsed().as_millis() as u64);
        }
        self.expanded = vec![false; result.drugs.len()];
        self.drug_cursor = 0;
        self.result_scroll = 0;
        self.log(
            LogLevel::Ok,
            format!(
                "received {} drug(s), safe={}",
                result.drugs.len(),
                result.safe
            ),
        );
        self.result = Some(result);
        self.error = None;
        self.phase = Phase::Success;
    }

    /// Apply a failure. Any previously rendered result is cleared; the error
    /// message is the only thing shown.
    pub fn set_error(&mut self, seq: u64, err: String) {
        if seq != self.request_seq {
            self.log(LogLevel::Warn, "ignoring stale error".to_string());
            return;
        }
        if let Some(start) = self.query_start.take() {
            self.latency_ms = Some(start.elapsed().as_millis() as u64);
        }
        self.result = None;
        self.expanded.clear();
        self.drug_cursor = 0;
        self.error = Some(err.clone());
        self.phase = Phase::Failed;
        self.log(LogLevel::Error, err);
    }

    // query type selection
    pub fn open_query_type_popup(&mut self) {
        self.popup = Popup::QueryTypes;
        self.query_type_scroll = self.query_type.index();
    }

    pub fn query_type_scroll_up(&mut self) {
        if self.query_type_scroll > 0 {
            self.query_type_scroll -= 1;
        }
    }

    pub fn query_type_scroll_down(&mut self) {
        if self.query_type_scroll < QueryType::ALL.len() - 1 {
            self.query_type_scroll += 1;
        }
    }

    pub fn select_query_type(&mut self) {
        self.query_type = QueryType::ALL[self.query_type_scroll];
        self.log(
            LogLevel::Info,
            format!("intent: {}", self.query_type.label()),
        );
        self.close_popup();
    }

    // theme selection
    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::from_kind(kind);
        self.theme_scroll = kind.index();
    }

    pub fn open_theme_popup(&mut self) {
        self.popup = Popup::Themes;
        self.theme_scroll = self.theme_kind.index();
    }

    pub fn theme_scroll_up(&mut self) {
        if self.theme_scroll > 0 {
            self.theme_scroll -= 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn theme_scroll_down(&mut self) {
        if self.theme_scroll < ThemeKind::ALL.len() - 1 {
            self.theme_scroll += 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn select_theme(&mut self) {
        self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        self.close_popup();
    }

    // endpoint editor
    pub fn open_endpoint_popup(&mut self) {
        self.popup = Popup::Endpoint;
        self.endpoint_input = self.api_url.clone();
        self.endpoint_cursor = self.endpoint_input.len();
    }

    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
    }

    pub fn endpoint_insert_char(&mut self, c: char) {
        self.endpoint_input.insert(self.endpoint_cursor, c);
        self.endpoint_cursor += c.len_utf8();
    }

    pub fn endpoint_delete_char(&mut self) {
        if let Some((idx, _)) = self.endpoint_input[..self.endpoint_cursor]
            .char_indices()
            .next_back()
        {
            self.endpoint_input.remove(idx);
            self.endpoint_cursor = idx;
        }
    }

    pub fn endpoint_delete_char_forward(&mut self) {
        if self.endpoint_cursor < self.endpoint_input.len() {
            self.endpoint_input.remove(self.endpoint_cursor);
        }
    }

    pub fn endpoint_move_left(&mut self) {
        if let Some((idx, _)) = self.endpoint_input[..self.endpoint_cursor]
            .char_indices()
            .next_back()
        {
            self.endpoint_cursor = idx;
        }
    }

    pub fn endpoint_move_right(&mut self) {
        if let Some(c) = self.endpoint_input[self.endpoint_cursor..].chars().next() {
            self.endpoint_cursor += c.len_utf8();
        }
    }

    pub fn endpoint_move_start(&mut self) {
        self.endpoint_cursor = 0;
    }

    pub fn endpoint_move_end(&mut self) {
        self.endpoint_cursor = self.endpoint_input.len();
    }

    pub fn endpoint_clear(&mut self) {
        self.endpoint_input.clear();
        self.endpoint_cursor = 0;
    }

    pub fn submit_endpoint(&mut self) -> Option<String> {
        if self.endpoint_input.trim().is_empty() {
            return None;
        }
        let url = self.endpoint_input.clone();
        self.popup = Popup::None;
        Some(url)
    }

    pub fn set_endpoint(&mut self, url: String) {
        self.log(LogLevel::Ok, format!("endpoint {url}"));
        self.api_url = url;
    }

    pub fn cycle_panel(&mut self) {
        self.panel = match self.panel {
            Panel::Query => Panel::Results,
            Panel::Results => Panel::Logs,
            Panel::Logs => Panel::Query,
        };
    }

    pub fn enter_insert(&mut self) {
        self.panel = Panel::Query;
        self.mode = Mode::Insert;
    }

    pub fn exit_insert(&mut self) {
        self.mode = Mode::Normal;
    }

    // query editing - the cursor is a byte offset and always sits on a
    // char boundary
    pub fn insert_char(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.query.insert(self.query_cursor, '\n');
        self.query_cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if let Some((idx, _)) = self.query[..self.query_cursor].char_indices().next_back() {
            self.query.remove(idx);
            self.query_cursor = idx;
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some((idx, _)) = self.query[..self.query_cursor].char_indices().next_back() {
            self.query_cursor = idx;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.query_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.query_cursor = self.query.len();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    // history navigation
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => {
                self.history_index = Some(self.history.len() - 1);
            }
            Some(i) if i > 0 => {
                self.history_index = Some(i - 1);
            }
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.query = self.history[i].clone();
            self.query_cursor = self.query.len();
        }
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i < self.history.len() - 1 => {
                self.history_index = Some(i + 1);
                self.query = self.history[i + 1].clone();
                self.query_cursor = self.query.len();
            }
            Some(_) => {
                self.history_index = None;
                self.clear_query();
            }
            None => {}
        }
    }

    // results navigation
    pub fn drug_count(&self) -> usize {
        self.result.as_ref().map(|r| r.drugs.len()).unwrap_or(0)
    }

    pub fn drug_up(&mut self) {
        self.drug_cursor = self.drug_cursor.saturating_sub(1);
    }

    pub fn drug_down(&mut self) {
        let count = self.drug_count();
        if count > 0 && self.drug_cursor < count - 1 {
            self.drug_cursor += 1;
        }
    }

    pub fn toggle_expanded(&mut self) {
        if let Some(flag) = self.expanded.get_mut(self.drug_cursor) {
            *flag = !*flag;
        }
    }

    pub fn result_scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn result_scroll_down(&mut self) {
        self.result_scroll += 1;
    }

    pub fn scroll_up(&mut self) {
        match self.panel {
            Panel::Results => self.drug_up(),
            Panel::Logs => self.log_scroll = self.log_scroll.saturating_sub(1),
            Panel::Query => {}
        }
    }

    pub fn scroll_down(&mut self) {
        match self.panel {
            Panel::Results => self.drug_down(),
            Panel::Logs => self.log_scroll += 1,
            Panel::Query => {}
        }
    }
}
