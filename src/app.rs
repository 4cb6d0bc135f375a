use std::io::Write;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::runtime::Handle;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::clipboard::{Clipboard, CopyReceipt};
use crate::config::NOTICE_TTL_SECS;
use crate::error::{PokekaError, Result};
use crate::lookup::{build_options, filter_options, resolve, search_url};
use crate::types::*;

const TITLE: &str = "ポケカサーチャー";
const PLACEHOLDER: &str = "検索したいポケモンを入力してください";
const NO_SELECTION_NOTICE: &str = "何かポケモンを選択してください";
const NOT_FOUND_NOTICE: &str = "ポケモンを選択してください";
const OPENED_NOTICE: &str = "ブラウザで開きました";

/// A clipboard write still in flight.
pub struct PendingCopy {
    pub label: &'static str,
    pub receipt: CopyReceipt,
}

pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    catalog: Catalog,
    clipboard: Clipboard,
    runtime: Handle,
    pending_copies: Vec<PendingCopy>,
    // OSC 52 payloads waiting for the next gap between frames
    terminal_copies: Vec<(&'static str, String)>,
}

impl App {
    pub fn new(catalog: Catalog, lang_mode: LangMode, clipboard: Clipboard, runtime: Handle) -> Self {
        let state = AppState {
            lang_mode,
            options: build_options(&catalog, lang_mode),
            ..AppState::default()
        };
        info!(mode = %lang_mode, entries = catalog.len(), "App initialized");

        Self {
            state,
            should_quit: false,
            catalog,
            clipboard,
            runtime,
            pending_copies: Vec::new(),
            terminal_copies: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rebuild the options for `mode` and drop the now meaningless selection.
    pub fn switch_mode(&mut self, mode: LangMode) {
        self.state.options = build_options(&self.catalog, mode);
        self.state.lang_mode = mode;
        self.state.selected = None;
        self.state.query.clear();
        self.state.highlighted = 0;
        info!(mode = %mode, options = self.state.options.len(), "Switched language mode");
    }

    pub fn toggle_mode(&mut self) {
        self.switch_mode(self.state.lang_mode.toggled());
    }

    pub fn visible_options(&self) -> Vec<&SelectOption> {
        filter_options(&self.state.options, &self.state.query)
    }

    pub fn handle_input(&mut self, c: char) {
        self.state.query.push(c);
        self.state.highlighted = 0;
    }

    pub fn handle_backspace(&mut self) {
        self.state.query.pop();
        self.state.highlighted = 0;
    }

    pub fn move_highlight(&mut self, delta: isize) {
        let count = self.visible_options().len();
        if count == 0 {
            self.state.highlighted = 0;
            return;
        }
        let next = self.state.highlighted as isize + delta;
        self.state.highlighted = next.clamp(0, count as isize - 1) as usize;
    }

    /// Take the highlighted option as the current selection.
    pub fn handle_enter(&mut self) {
        let picked = self
            .visible_options()
            .get(self.state.highlighted)
            .map(|option| (*option).clone());

        match picked {
            Some(option) => {
                debug!(label = %option.label, value = %option.value, "Option selected");
                self.state.selected = Some(option);
                self.state.query.clear();
                self.state.highlighted = 0;
            }
            None => debug!(query = %self.state.query, "Nothing to select"),
        }
    }

    /// Resolve the selected option under the active mode and store both
    /// names. Results are left untouched on error.
    pub fn search(&mut self) -> Result<()> {
        let selected = self.state.selected.as_ref().ok_or(PokekaError::NoSelection)?;
        let entity = resolve(&self.catalog, self.state.lang_mode, &selected.label)?;

        self.state.ja_result = entity.name_ja.clone();
        self.state.en_result = entity.name_en.clone();
        info!(ja = %entity.name_ja, en = %entity.name_en, "Search resolved");
        Ok(())
    }

    /// Run [`search`](Self::search) and turn a failure into a notice.
    pub fn submit_search(&mut self) {
        match self.search() {
            Ok(()) => self.state.notice = None,
            Err(PokekaError::NoSelection) => {
                debug!("Search submitted without a selection");
                self.state.notice = Some(Notice::warning(NO_SELECTION_NOTICE));
            }
            Err(e) => {
                warn!(error = %e, "Search failed");
                self.state.notice = Some(Notice::warning(NOT_FOUND_NOTICE));
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
        self.state.query.clear();
        self.state.highlighted = 0;
    }

    pub fn copy_ja_result(&mut self) {
        let text = self.state.ja_result.clone();
        self.copy_to_clipboard("ja", text);
    }

    pub fn copy_en_result(&mut self) {
        let text = self.state.en_result.clone();
        self.copy_to_clipboard("en", text);
    }

    fn copy_to_clipboard(&mut self, label: &'static str, text: String) {
        if self.clipboard.writes_to_terminal() {
            self.terminal_copies.push((label, text));
        } else {
            let receipt = self.clipboard.copy(&self.runtime, text);
            self.pending_copies.push(PendingCopy { label, receipt });
        }
    }

    pub fn pending_copies(&self) -> usize {
        self.pending_copies.len() + self.terminal_copies.len()
    }

    /// Write queued OSC 52 copies through the terminal's writer. Call
    /// between draws so the sequence never splits a frame.
    pub fn flush_terminal_clipboard(&mut self, writer: &mut impl Write) {
        for (label, text) in self.terminal_copies.drain(..) {
            match self.clipboard.set_osc52(&text, writer) {
                Ok(()) => info!(result = label, "Copying to clipboard was successful"),
                Err(e) => error!(result = label, error = %e, "Could not copy text"),
            }
        }
    }

    pub fn search_page_url(&self) -> String {
        search_url(&self.state.ja_result)
    }

    pub fn open_search_page(&mut self) {
        let url = self.search_page_url();
        let result = opener::open(&url).map_err(|e| PokekaError::Browser(e.to_string()));
        self.report_open(&url, result);
    }

    fn report_open(&mut self, url: &str, result: Result<()>) {
        match result {
            Ok(()) => {
                info!(url, "Opened card search");
                self.state.notice = Some(Notice::info(OPENED_NOTICE));
            }
            Err(e) => {
                error!(error = %e, url, "Could not open card search");
                self.state.notice = Some(Notice::warning(e.to_string()));
            }
        }
    }

    /// Dispatch one key press. Ctrl combinations are commands; AltGr
    /// (Ctrl+Alt) characters go to the query like plain typing.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let command = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        if command {
            match key.code {
                KeyCode::Char('s') => self.submit_search(),
                KeyCode::Char('l') => self.clear_selection(),
                KeyCode::Char('y') => self.copy_ja_result(),
                KeyCode::Char('e') => self.copy_en_result(),
                KeyCode::Char('o') => self.open_search_page(),
                KeyCode::Char('c') => self.should_quit = true,
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Char(c) => self.handle_input(c),
                KeyCode::Backspace => self.handle_backspace(),
                KeyCode::Up => self.move_highlight(-1),
                KeyCode::Down => self.move_highlight(1),
                KeyCode::Enter => self.handle_enter(),
                KeyCode::Tab => self.toggle_mode(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
        }
    }

    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        self.poll_clipboard();

        if self
            .state
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now, NOTICE_TTL_SECS))
        {
            self.state.notice = None;
        }
    }

    /// Log finished clipboard writes. Outcomes never touch lookup state.
    pub fn poll_clipboard(&mut self) {
        self.pending_copies
            .retain_mut(|pending| match pending.receipt.try_recv() {
                Ok(Ok(())) => {
                    info!(result = pending.label, "Copying to clipboard was successful");
                    false
                }
                Ok(Err(e)) => {
                    error!(result = pending.label, error = %e, "Could not copy text");
                    false
                }
                Err(TryRecvError::Empty) => true,
                Err(TryRecvError::Closed) => {
                    warn!(result = pending.label, "Clipboard task ended without reporting");
                    false
                }
            });
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Mode radio
                Constraint::Length(3), // Query input
                Constraint::Min(5),    // Option list
                Constraint::Length(3), // Current selection
                Constraint::Length(4), // Results
                Constraint::Length(3), // Search link
                Constraint::Length(1), // Notice
                Constraint::Length(3), // Help
            ])
            .split(f.area());

        self.render_title(f, chunks[0]);
        self.render_mode(f, chunks[1]);
        self.render_query(f, chunks[2]);
        self.render_options(f, chunks[3]);
        self.render_selection(f, chunks[4]);
        self.render_results(f, chunks[5]);
        self.render_link(f, chunks[6]);
        self.render_notice(f, chunks[7]);
        self.render_help(f, chunks[8]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

        f.render_widget(title, area);
    }

    fn render_mode(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = [LangMode::Ja, LangMode::En]
            .into_iter()
            .map(|mode| {
                let checked = mode == self.state.lang_mode;
                let marker = if checked { "(●) " } else { "( ) " };
                let style = if checked {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![Span::styled(marker, style), Span::styled(mode.caption(), style)])
            })
            .collect();

        let radio = Paragraph::new(lines)
            .block(Block::default().title("Mode (Tab)").borders(Borders::ALL));
        f.render_widget(radio, area);
    }

    fn render_query(&self, f: &mut Frame, area: Rect) {
        let line = if self.state.query.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(Span::raw(self.state.query.as_str()))
        };

        let input = Paragraph::new(line)
            .block(Block::default().title("カード名").borders(Borders::ALL));
        f.render_widget(input, area);
    }

    fn render_options(&self, f: &mut Frame, area: Rect) {
        let options = self.visible_options();
        let rows = area.height.saturating_sub(2).max(1) as usize;
        let start = if self.state.highlighted >= rows {
            self.state.highlighted + 1 - rows
        } else {
            0
        };

        let lines: Vec<Line> = if options.is_empty() {
            vec![Line::from(Span::styled(
                "No options",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            options
                .iter()
                .enumerate()
                .skip(start)
                .take(rows)
                .map(|(idx, option)| {
                    if idx == self.state.highlighted {
                        Line::from(Span::styled(
                            format!("> {}", option.label),
                            Style::default().add_modifier(Modifier::REVERSED),
                        ))
                    } else {
                        Line::from(Span::raw(format!("  {}", option.label)))
                    }
                })
                .collect()
        };

        let title = format!("Options ({}/{})", options.len(), self.state.options.len());
        f.render_widget(
            Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
            area,
        );
    }

    fn render_selection(&self, f: &mut Frame, area: Rect) {
        let text = match &self.state.selected {
            Some(option) => Span::styled(option.label.as_str(), Style::default().fg(Color::Cyan)),
            None => Span::styled("-", Style::default().fg(Color::DarkGray)),
        };

        f.render_widget(
            Paragraph::new(Line::from(text))
                .block(Block::default().title("Selected").borders(Borders::ALL)),
            area,
        );
    }

    fn render_results(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::raw("日本語："),
                Span::styled(self.state.ja_result.as_str(), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::raw("英語："),
                Span::styled(self.state.en_result.as_str(), Style::default().fg(Color::Green)),
            ]),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().title("Result").borders(Borders::ALL)),
            area,
        );
    }

    fn render_link(&self, f: &mut Frame, area: Rect) {
        let link = Paragraph::new(Line::from(Span::styled(
            self.search_page_url(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )))
        .block(Block::default().title("トレーナーズウェブサイト (Ctrl+O)").borders(Borders::ALL));

        f.render_widget(link, area);
    }

    fn render_notice(&self, f: &mut Frame, area: Rect) {
        let Some(notice) = &self.state.notice else {
            return;
        };
        let color = match notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Warning => Color::Yellow,
        };

        f.render_widget(
            Paragraph::new(Span::styled(notice.text.as_str(), Style::default().fg(color)))
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![Span::raw(
            "Enter select | Ctrl+S search | Ctrl+L clear | Ctrl+Y/Ctrl+E copy ja/en | Tab mode | ESC quit",
        )]);

        let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }
}
