//! Main application state, input handling and rendering

use crate::data::*;
use crate::game::accusation::{AccusationDraft, Verdict};
use crate::game::case::Case;
use crate::game::scheduler::{Scheduler, TimerEvent};
use crate::game::GameState;
use crate::persistence::SaveFile;
use crate::tui::widgets::{StampBox, TestProgress};
use crate::tui::{
    category_color, centered_rect, create_main_layout, create_split_layout, styled_block, Theme,
    HELP_TEXT, LOGO, SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// Which panel has focus on the interviews view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterviewFocus {
    Suspects,
    Questions,
}

/// Rows of the indictment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormRow {
    Suspect,
    Method,
    Motive,
    Time,
    Evidence,
    Submit,
}

impl FormRow {
    const ORDER: [FormRow; 6] = [
        FormRow::Suspect,
        FormRow::Method,
        FormRow::Motive,
        FormRow::Time,
        FormRow::Evidence,
        FormRow::Submit,
    ];

    fn next(&self) -> FormRow {
        let idx = Self::ORDER.iter().position(|r| r == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(&self) -> FormRow {
        let idx = Self::ORDER.iter().position(|r| r == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Application state
pub struct App {
    pub case: Case,
    pub game: GameState,
    pub scheduler: Scheduler,
    pub save: SaveFile,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    /// Transient feedback modal; any key dismisses it.
    pub feedback: Option<String>,
    pub save_error: Option<String>,
    pub draft: AccusationDraft,
    pub accusation_error: Option<String>,

    scene_cursor: usize,
    suspect_cursor: usize,
    question_cursor: usize,
    interview_focus: InterviewFocus,
    board_cursor: usize,
    lab_cursor: usize,
    research_cursor: usize,
    form_row: FormRow,
    exhibit_cursor: usize,
}

impl App {
    pub fn new() -> Self {
        Self::with_save(SaveFile::default_location())
    }

    /// Build the app around a specific save location. Loads an existing
    /// record if there is one; a corrupted record starts a fresh case but
    /// tells the player rather than silently discarding their file.
    pub fn with_save(save: SaveFile) -> Self {
        let case = Case::midnight_manuscript();
        let (game, load_note) = match save.load() {
            Ok(Some(state)) => (state, None),
            Ok(None) => (GameState::new(&case), None),
            Err(err) => (
                GameState::new(&case),
                Some(format!("SAVE FILE UNREADABLE ({err}). STARTING A FRESH CASE.")),
            ),
        };

        // Tests persisted mid-run get their countdown re-armed at full
        // duration; the Running guard absorbs any duplicate completion.
        let mut scheduler = Scheduler::new();
        for test in &game.lab_tests {
            if test.status == LabStatus::Running {
                scheduler.schedule_lab(test.id, Duration::from_secs(test.duration_secs));
            }
        }

        Self {
            case,
            game,
            scheduler,
            save,
            theme: Theme::default(),
            running: true,
            show_help: false,
            feedback: load_note,
            save_error: None,
            draft: AccusationDraft::default(),
            accusation_error: None,
            scene_cursor: 0,
            suspect_cursor: 0,
            question_cursor: 0,
            interview_focus: InterviewFocus::Suspects,
            board_cursor: 0,
            lab_cursor: 0,
            research_cursor: 0,
            form_row: FormRow::Suspect,
            exhibit_cursor: 0,
        }
    }

    /// Overwrite the save record after a state change.
    fn persist(&mut self) {
        match self.save.save(&mut self.game) {
            Ok(()) => self.save_error = None,
            Err(err) => self.save_error = Some(err.to_string()),
        }
    }

    /// Wipe the save and restart from the content catalog.
    fn reset(&mut self) {
        if let Err(err) = self.save.reset() {
            self.save_error = Some(err.to_string());
        }
        self.game = GameState::new(&self.case);
        self.scheduler = Scheduler::new();
        self.draft = AccusationDraft::default();
        self.accusation_error = None;
        self.scene_cursor = 0;
        self.suspect_cursor = 0;
        self.question_cursor = 0;
        self.interview_focus = InterviewFocus::Suspects;
        self.board_cursor = 0;
        self.lab_cursor = 0;
        self.research_cursor = 0;
        self.form_row = FormRow::Suspect;
        self.exhibit_cursor = 0;
        self.persist();
        self.feedback = Some("CASE FILE WIPED. A NEW INVESTIGATION BEGINS.".to_string());
    }

    /// Drain expired timers and apply their completions.
    pub fn tick(&mut self) {
        for event in self.scheduler.due(Instant::now()) {
            match event {
                TimerEvent::LabFinished(id) => {
                    if let Some(findings) = self.game.complete_lab_test(id) {
                        self.persist();
                        self.feedback = Some(format!(
                            "FORENSIC REPORT GENERATED\n\n\"{}\"",
                            findings.result
                        ));
                    }
                }
                TimerEvent::ResearchFinished(suspect) => {
                    if let Some(outcome) = self.game.complete_research(suspect) {
                        self.persist();
                        let msg = match outcome.verdict {
                            ResearchVerdict::RecordsFound => {
                                let name = self
                                    .case
                                    .suspect(suspect)
                                    .map(|s| s.name.to_uppercase())
                                    .unwrap_or_default();
                                format!("RECORDS FOUND FOR {}", name)
                            }
                            ResearchVerdict::CleanRecord => {
                                "NO CRIMINAL OR FINANCIAL RECORDS FOUND".to_string()
                            }
                        };
                        self.feedback = Some(msg);
                    }
                }
            }
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if self.game.current_tab != tab {
            self.game.select_tab(tab);
            self.persist();
        }
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                // Feedback modal eats the first key press.
                if self.feedback.is_some() {
                    self.feedback = None;
                    return Ok(true);
                }

                if self.show_help {
                    if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                        self.show_help = false;
                    }
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('q') if self.game.current_tab == Tab::Home => {
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Char('?') => self.show_help = true,
                    KeyCode::Char('R') if self.game.current_tab == Tab::Home => self.reset(),
                    KeyCode::Esc => self.select_tab(Tab::Home),
                    KeyCode::Tab => {
                        let next = self.game.current_tab.next();
                        self.select_tab(next);
                    }
                    KeyCode::BackTab => {
                        let prev = self.game.current_tab.prev();
                        self.select_tab(prev);
                    }
                    KeyCode::Char(c @ '1'..='7') => {
                        let idx = c as usize - '1' as usize;
                        self.select_tab(Tab::ALL[idx]);
                    }
                    KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
                    | KeyCode::Enter => self.handle_view_key(key.code),
                    _ => {}
                }
            }
        }
        Ok(true)
    }

    fn handle_view_key(&mut self, code: KeyCode) {
        match self.game.current_tab {
            Tab::Home => {
                if code == KeyCode::Enter {
                    self.select_tab(Tab::CrimeScene);
                }
            }
            Tab::CrimeScene => self.handle_scene_key(code),
            Tab::Interviews => self.handle_interview_key(code),
            Tab::EvidenceBoard => self.handle_board_key(code),
            Tab::Lab => self.handle_lab_key(code),
            Tab::Background => self.handle_research_key(code),
            Tab::Accusation => self.handle_accusation_key(code),
        }
    }

    // --- Crime scene ---

    fn scene_len(&self) -> usize {
        self.game
            .evidence
            .iter()
            .filter(|e| e.location.is_some())
            .count()
    }

    fn handle_scene_key(&mut self, code: KeyCode) {
        let len = self.scene_len();
        match code {
            KeyCode::Up => self.scene_cursor = self.scene_cursor.saturating_sub(1),
            KeyCode::Down if len > 0 => {
                self.scene_cursor = (self.scene_cursor + 1).min(len - 1)
            }
            KeyCode::Enter => {
                let id = self
                    .game
                    .evidence
                    .iter()
                    .filter(|e| e.location.is_some())
                    .nth(self.scene_cursor)
                    .map(|e| e.id);
                if let Some(id) = id {
                    // Scene exploration logs evidence silently - the detail
                    // panel opening up is notification enough.
                    if self.game.collect_evidence(id) {
                        self.persist();
                    }
                }
            }
            _ => {}
        }
    }

    // --- Interviews ---

    fn handle_interview_key(&mut self, code: KeyCode) {
        let suspect = SuspectId::ALL[self.suspect_cursor];
        let question_count = self.case.dialogues_for(suspect).count();
        match code {
            KeyCode::Left => self.interview_focus = InterviewFocus::Suspects,
            KeyCode::Right => self.interview_focus = InterviewFocus::Questions,
            KeyCode::Up => match self.interview_focus {
                InterviewFocus::Suspects => {
                    self.suspect_cursor = self.suspect_cursor.saturating_sub(1);
                    self.question_cursor = 0;
                }
                InterviewFocus::Questions => {
                    self.question_cursor = self.question_cursor.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.interview_focus {
                InterviewFocus::Suspects => {
                    self.suspect_cursor = (self.suspect_cursor + 1).min(SuspectId::ALL.len() - 1);
                    self.question_cursor = 0;
                }
                InterviewFocus::Questions if question_count > 0 => {
                    self.question_cursor = (self.question_cursor + 1).min(question_count - 1)
                }
                InterviewFocus::Questions => {}
            },
            KeyCode::Enter => match self.interview_focus {
                InterviewFocus::Suspects => self.interview_focus = InterviewFocus::Questions,
                InterviewFocus::Questions => {
                    let question = self
                        .case
                        .dialogues_for(suspect)
                        .nth(self.question_cursor)
                        .map(|d| d.id);
                    if let Some(question) = question {
                        if let Some(asked) =
                            self.game.ask_question(&self.case, suspect, question)
                        {
                            self.persist();
                            if asked.unlocked.is_some() {
                                self.feedback =
                                    Some("NEW TESTIMONY ADDED TO FILE".to_string());
                            }
                        }
                    }
                }
            },
            _ => {}
        }
    }

    // --- Evidence board ---

    fn handle_board_key(&mut self, code: KeyCode) {
        let len = self.game.collected_evidence().count();
        match code {
            KeyCode::Up => self.board_cursor = self.board_cursor.saturating_sub(1),
            KeyCode::Down if len > 0 => {
                self.board_cursor = (self.board_cursor + 1).min(len - 1)
            }
            _ => {}
        }
    }

    // --- Lab ---

    fn handle_lab_key(&mut self, code: KeyCode) {
        let len = self.game.lab_tests.len();
        match code {
            KeyCode::Up => self.lab_cursor = self.lab_cursor.saturating_sub(1),
            KeyCode::Down if len > 0 => self.lab_cursor = (self.lab_cursor + 1).min(len - 1),
            KeyCode::Enter => {
                let target = self
                    .game
                    .lab_tests
                    .get(self.lab_cursor)
                    .map(|t| (t.id, t.duration_secs));
                if let Some((id, duration)) = target {
                    if self.game.run_lab_test(id) {
                        self.scheduler.schedule_lab(id, Duration::from_secs(duration));
                        self.persist();
                    }
                }
            }
            _ => {}
        }
    }

    // --- Background research ---

    fn handle_research_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.research_cursor = self.research_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.research_cursor = (self.research_cursor + 1).min(SuspectId::ALL.len() - 1)
            }
            KeyCode::Enter => {
                let suspect = SuspectId::ALL[self.research_cursor];
                if self.game.research_verdict(suspect).is_none() {
                    // One records search at a time; the button simply does
                    // nothing while the archives are busy.
                    self.scheduler.schedule_research(suspect);
                }
            }
            _ => {}
        }
    }

    // --- Accusation ---

    fn cycle_suspect(&mut self, forward: bool) {
        let all = &SuspectId::ALL;
        let idx = match self.draft.suspect {
            Some(current) => {
                let i = all.iter().position(|s| *s == current).unwrap_or(0);
                if forward {
                    (i + 1) % all.len()
                } else {
                    (i + all.len() - 1) % all.len()
                }
            }
            None => 0,
        };
        self.draft.suspect = Some(all[idx]);
    }

    fn cycle_method(&mut self, forward: bool) {
        let all = &MethodId::ALL;
        let idx = match self.draft.method {
            Some(current) => {
                let i = all.iter().position(|m| *m == current).unwrap_or(0);
                if forward {
                    (i + 1) % all.len()
                } else {
                    (i + all.len() - 1) % all.len()
                }
            }
            None => 0,
        };
        self.draft.method = Some(all[idx]);
    }

    fn cycle_motive(&mut self, forward: bool) {
        let all = &MotiveId::ALL;
        let idx = match self.draft.motive {
            Some(current) => {
                let i = all.iter().position(|m| *m == current).unwrap_or(0);
                if forward {
                    (i + 1) % all.len()
                } else {
                    (i + all.len() - 1) % all.len()
                }
            }
            None => 0,
        };
        self.draft.motive = Some(all[idx]);
    }

    fn cycle_time(&mut self, forward: bool) {
        let all = &TimeOfDeath::ALL;
        let idx = match self.draft.time {
            Some(current) => {
                let i = all.iter().position(|t| *t == current).unwrap_or(0);
                if forward {
                    (i + 1) % all.len()
                } else {
                    (i + all.len() - 1) % all.len()
                }
            }
            None => 0,
        };
        self.draft.time = Some(all[idx]);
    }

    fn handle_accusation_key(&mut self, code: KeyCode) {
        if self.game.solved {
            return;
        }
        let exhibit_count = self.game.collected_evidence().count();
        match code {
            KeyCode::Up => self.form_row = self.form_row.prev(),
            KeyCode::Down => self.form_row = self.form_row.next(),
            KeyCode::Left | KeyCode::Right => {
                let forward = code == KeyCode::Right;
                match self.form_row {
                    FormRow::Suspect => self.cycle_suspect(forward),
                    FormRow::Method => self.cycle_method(forward),
                    FormRow::Motive => self.cycle_motive(forward),
                    FormRow::Time => self.cycle_time(forward),
                    FormRow::Evidence if exhibit_count > 0 => {
                        if forward {
                            self.exhibit_cursor =
                                (self.exhibit_cursor + 1).min(exhibit_count - 1);
                        } else {
                            self.exhibit_cursor = self.exhibit_cursor.saturating_sub(1);
                        }
                    }
                    _ => {}
                }
            }
            KeyCode::Enter => match self.form_row {
                FormRow::Evidence => {
                    let id = self
                        .game
                        .collected_evidence()
                        .nth(self.exhibit_cursor)
                        .map(|e| e.id);
                    if let Some(id) = id {
                        if !self.draft.toggle_evidence(id) {
                            self.accusation_error = Some(format!(
                                "EXHIBIT LIMIT REACHED. MAX {} ITEMS.",
                                AccusationDraft::MAX_EXHIBITS
                            ));
                        } else {
                            self.accusation_error = None;
                        }
                    }
                }
                FormRow::Submit => self.submit_accusation(),
                _ => self.form_row = self.form_row.next(),
            },
            _ => {}
        }
    }

    fn submit_accusation(&mut self) {
        match self.draft.validate() {
            Ok(accusation) => {
                self.accusation_error = None;
                match self.game.submit_accusation(&self.case, &accusation) {
                    Verdict::CaseClosed => {
                        self.persist();
                        self.feedback =
                            Some("ACCUSATION VERIFIED. SUSPECT APPREHENDED.".to_string());
                    }
                    Verdict::Rejected(hint) => {
                        let mut msg = String::from("THEORY REJECTED BY D.A.");
                        if let Some(hint) = hint {
                            msg.push(' ');
                            msg.push_str(hint.detail());
                        }
                        self.feedback = Some(msg);
                    }
                    Verdict::AlreadyClosed => {}
                }
            }
            Err(err) => self.accusation_error = Some(err.to_string()),
        }
    }

    // --- Rendering ---

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.size());
        self.render_header(frame, chunks[0]);
        match self.game.current_tab {
            Tab::Home => self.render_home(frame, chunks[1]),
            Tab::CrimeScene => self.render_crime_scene(frame, chunks[1]),
            Tab::Interviews => self.render_interviews(frame, chunks[1]),
            Tab::EvidenceBoard => self.render_board(frame, chunks[1]),
            Tab::Lab => self.render_lab(frame, chunks[1]),
            Tab::Background => self.render_background(frame, chunks[1]),
            Tab::Accusation => self.render_accusation(frame, chunks[1]),
        }
        self.render_status(frame, chunks[2]);

        if self.show_help {
            let area = centered_rect(64, 70, frame.size());
            frame.render_widget(Clear, area);
            let help = Paragraph::new(HELP_TEXT)
                .alignment(Alignment::Center)
                .block(styled_block("Help", &self.theme));
            frame.render_widget(help, area);
        }

        if let Some(msg) = self.feedback.clone() {
            self.render_feedback(frame, &msg);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = vec![
            Span::styled(
                SMALL_LOGO,
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (idx, tab) in Tab::ALL.iter().enumerate() {
            let style = if *tab == self.game.current_tab {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.theme.dim)
            };
            spans.push(Span::styled(format!(" {} {} ", idx + 1, tab.title()), style));
        }
        let header = Paragraph::new(Line::from(spans))
            .block(styled_block("Investigations Unit", &self.theme));
        frame.render_widget(header, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let collected = self.game.collected_evidence().count();
        let completed_tests = self
            .game
            .lab_tests
            .iter()
            .filter(|t| t.status == LabStatus::Completed)
            .count();
        let mut text = format!(
            "Evidence: {}/{} | Tests done: {}/{} | Checks run: {}/{}",
            collected,
            self.game.evidence.len(),
            completed_tests,
            self.game.lab_tests.len(),
            self.game.research.len(),
            SuspectId::ALL.len(),
        );
        if self.game.solved {
            text.push_str(" | CASE CLOSED");
        }
        if let Some(err) = &self.save_error {
            text.push_str(&format!(" | SAVE FAILED: {}", err));
        }
        let style = if self.save_error.is_some() {
            Style::default().fg(self.theme.alert)
        } else {
            Style::default().fg(self.theme.fg)
        };
        let status = Paragraph::new(text)
            .style(style)
            .block(styled_block("Status", &self.theme));
        frame.render_widget(status, area);
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(13), Constraint::Min(6)])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.header));
        frame.render_widget(logo, rows[0]);

        let lines = vec![
            Line::from(vec![
                Span::styled("Victim:   ", Style::default().fg(self.theme.dim)),
                Span::raw(self.case.victim.clone()),
            ]),
            Line::from(vec![
                Span::styled("Location: ", Style::default().fg(self.theme.dim)),
                Span::raw(self.case.location.clone()),
            ]),
            Line::from(vec![
                Span::styled("Found at: ", Style::default().fg(self.theme.dim)),
                Span::raw(self.case.discovered_at.clone()),
            ]),
            Line::raw(""),
            Line::styled("DIRECTIVES", Style::default().fg(self.theme.accent)),
            Line::raw("  • Secure the crime scene"),
            Line::raw("  • Interrogate all witnesses"),
            Line::raw("  • Cross-reference background records"),
            Line::raw("  • Analyze forensic trace evidence"),
            Line::raw(""),
            Line::styled(
                "Press Enter (or 2) to open the crime scene. Press ? for help.",
                Style::default().fg(self.theme.dim),
            ),
        ];
        let details =
            Paragraph::new(lines).block(styled_block("Case Details", &self.theme));
        frame.render_widget(details, rows[1]);
    }

    fn render_crime_scene(&self, frame: &mut Frame, area: Rect) {
        let panes = create_split_layout(area);
        let items: Vec<&Evidence> = self
            .game
            .evidence
            .iter()
            .filter(|e| e.location.is_some())
            .collect();

        let mut lines = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            let marker = if item.collected { "■" } else { "□" };
            let style = if idx == self.scene_cursor {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if item.collected {
                Style::default().fg(self.theme.success)
            } else {
                Style::default().fg(self.theme.fg)
            };
            lines.push(Line::styled(
                format!(
                    " {} {} — {}",
                    marker,
                    item.name,
                    item.location.as_deref().unwrap_or("")
                ),
                style,
            ));
        }
        let list =
            Paragraph::new(lines).block(styled_block("Library - Ashford Manor", &self.theme));
        frame.render_widget(list, panes[0]);

        let detail = match items.get(self.scene_cursor) {
            Some(item) if item.collected => vec![
                Line::styled(
                    item.name.clone(),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("[{}] — LOGGED", item.category),
                    Style::default().fg(category_color(&item.category)),
                ),
                Line::raw(""),
                Line::raw(item.description.clone()),
            ],
            Some(item) => vec![
                Line::styled(
                    item.name.clone(),
                    Style::default().fg(self.theme.fg),
                ),
                Line::raw(""),
                Line::styled(
                    "Not yet examined. Press Enter to log it as evidence.",
                    Style::default().fg(self.theme.dim),
                ),
            ],
            None => vec![Line::raw("Nothing here.")],
        };
        let panel = Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(styled_block("Examination", &self.theme));
        frame.render_widget(panel, panes[1]);
    }

    fn render_interviews(&self, frame: &mut Frame, area: Rect) {
        let panes = create_split_layout(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(panes[1]);

        // Suspect roster
        let mut roster = Vec::new();
        for (idx, id) in SuspectId::ALL.iter().enumerate() {
            if let Some(suspect) = self.case.suspect(*id) {
                let selected = idx == self.suspect_cursor;
                let style = if selected && self.interview_focus == InterviewFocus::Suspects {
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else if selected {
                    Style::default().fg(self.theme.accent)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                roster.push(Line::styled(
                    format!(" {} ({})", suspect.name, suspect.role),
                    style,
                ));
                roster.push(Line::styled(
                    format!("   alibi: {}", suspect.alibi),
                    Style::default().fg(self.theme.dim),
                ));
            }
        }
        frame.render_widget(
            Paragraph::new(roster).block(styled_block("Suspects", &self.theme)),
            panes[0],
        );

        // Questions for the selected suspect
        let suspect = SuspectId::ALL[self.suspect_cursor];
        let mut questions = Vec::new();
        for (idx, option) in self.case.dialogues_for(suspect).enumerate() {
            let asked = self.game.asked(suspect, option.id);
            let locked = option
                .requires_evidence
                .map_or(false, |req| !self.game.is_collected(req));
            let selected =
                idx == self.question_cursor && self.interview_focus == InterviewFocus::Questions;

            let (prefix, mut style) = if asked {
                ("✓", Style::default().fg(self.theme.dim))
            } else if locked {
                ("▒", Style::default().fg(self.theme.dim))
            } else {
                ("›", Style::default().fg(self.theme.fg))
            };
            if selected {
                style = style.add_modifier(Modifier::BOLD).fg(self.theme.accent);
            }
            let suffix = if locked { "  [REQUIRES EVIDENCE]" } else { "" };
            questions.push(Line::styled(
                format!(" {} {}{}", prefix, option.text, suffix),
                style,
            ));
        }
        frame.render_widget(
            Paragraph::new(questions).block(styled_block("Questions", &self.theme)),
            right[0],
        );

        // Transcript, in asked order
        let mut transcript = Vec::new();
        if let Some(history) = self.game.dialogue_history.get(&suspect) {
            for question in history {
                if let Some(option) = self.case.dialogue(*question) {
                    transcript.push(Line::styled(
                        format!("YOU: {}", option.text),
                        Style::default().fg(self.theme.accent),
                    ));
                    transcript.push(Line::raw(format!("     \"{}\"", option.response)));
                }
            }
        }
        if transcript.is_empty() {
            transcript.push(Line::styled(
                "No questions asked yet.",
                Style::default().fg(self.theme.dim),
            ));
        }
        frame.render_widget(
            Paragraph::new(transcript)
                .wrap(Wrap { trim: false })
                .block(styled_block("Transcript", &self.theme)),
            right[1],
        );
    }

    fn render_board(&self, frame: &mut Frame, area: Rect) {
        let panes = create_split_layout(area);
        let collected: Vec<&Evidence> = self.game.collected_evidence().collect();

        let mut lines = Vec::new();
        for (idx, item) in collected.iter().enumerate() {
            let style = if idx == self.board_cursor {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(category_color(&item.category))
            };
            lines.push(Line::styled(format!(" {}", item.brief()), style));
        }
        if lines.is_empty() {
            lines.push(Line::styled(
                "Evidence locker empty.",
                Style::default().fg(self.theme.dim),
            ));
        }
        frame.render_widget(
            Paragraph::new(lines).block(styled_block("Evidence Board", &self.theme)),
            panes[0],
        );

        let detail = match collected.get(self.board_cursor) {
            Some(item) => {
                let mut lines = vec![
                    Line::styled(
                        item.name.clone(),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        format!("[{}]", item.category),
                        Style::default().fg(category_color(&item.category)),
                    ),
                ];
                if let Some(location) = &item.location {
                    lines.push(Line::styled(
                        format!("Found: {}", location),
                        Style::default().fg(self.theme.dim),
                    ));
                }
                lines.push(Line::raw(""));
                lines.push(Line::raw(item.description.clone()));
                lines
            }
            None => vec![Line::styled(
                "Collect evidence at the scene, in interviews, the lab, or the archives.",
                Style::default().fg(self.theme.dim),
            )],
        };
        frame.render_widget(
            Paragraph::new(detail)
                .wrap(Wrap { trim: true })
                .block(styled_block("Exhibit Detail", &self.theme)),
            panes[1],
        );
    }

    fn render_lab(&self, frame: &mut Frame, area: Rect) {
        let count = self.game.lab_tests.len().max(1);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(6); count])
            .split(area);
        let now = Instant::now();

        for (idx, test) in self.game.lab_tests.iter().enumerate() {
            let Some(row) = rows.get(idx) else { break };
            let selected = idx == self.lab_cursor;
            let block_style = if selected {
                Style::default().fg(self.theme.accent)
            } else {
                Style::default().fg(self.theme.border)
            };
            let block = styled_block(&test.name, &self.theme).border_style(block_style);
            let inner = block.inner(*row);
            frame.render_widget(block, *row);

            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(20), Constraint::Length(16)])
                .split(inner);

            let gated = !self.game.is_collected(test.required_evidence);
            let mut lines = vec![Line::raw(test.description.clone())];
            match test.status {
                LabStatus::Available if gated => lines.push(Line::styled(
                    "⚠ EVIDENCE REQUIRED",
                    Style::default().fg(self.theme.alert),
                )),
                LabStatus::Available => lines.push(Line::styled(
                    "Ready. Press Enter to run.",
                    Style::default().fg(self.theme.success),
                )),
                LabStatus::Running => lines.push(Line::styled(
                    "Processing...",
                    Style::default().fg(self.theme.warning),
                )),
                LabStatus::Completed => lines.push(Line::styled(
                    format!("Findings: \"{}\"", test.result_description),
                    Style::default().fg(self.theme.success),
                )),
            }
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), cols[0]);

            let elapsed = match self.scheduler.lab_remaining(test.id, now) {
                Some(remaining) if test.duration_secs > 0 => {
                    1.0 - remaining.as_secs_f64() / test.duration_secs as f64
                }
                _ => 0.0,
            };
            frame.render_widget(TestProgress::new(test.status, elapsed), cols[1]);
        }
    }

    fn render_background(&self, frame: &mut Frame, area: Rect) {
        let panes = create_split_layout(area);
        let in_flight = self.scheduler.research_in_flight();

        let mut lines = Vec::new();
        for (idx, id) in SuspectId::ALL.iter().enumerate() {
            let Some(suspect) = self.case.suspect(*id) else { continue };
            let status = if in_flight == Some(*id) {
                ("ACCESSING...", self.theme.warning)
            } else {
                match self.game.research_verdict(*id) {
                    Some(ResearchVerdict::RecordsFound) => ("VERIFIED — RECORDS FILED", self.theme.success),
                    Some(ResearchVerdict::CleanRecord) => ("VERIFIED — CLEAN", self.theme.success),
                    None => ("NOT SEARCHED", self.theme.dim),
                }
            };
            let style = if idx == self.research_cursor {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.fg)
            };
            lines.push(Line::styled(format!(" {}", suspect.name), style));
            lines.push(Line::styled(
                format!("   {}", status.0),
                Style::default().fg(status.1),
            ));
        }
        frame.render_widget(
            Paragraph::new(lines).block(styled_block("Archives & Records", &self.theme)),
            panes[0],
        );

        let id = SuspectId::ALL[self.research_cursor];
        let detail = match self.case.suspect(id) {
            Some(suspect) => vec![
                Line::styled(
                    format!("{}, {} ({})", suspect.name, suspect.age, suspect.role),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw(suspect.description.clone()),
                Line::raw(""),
                Line::styled(
                    format!("Stated alibi: {}", suspect.alibi),
                    Style::default().fg(self.theme.dim),
                ),
                Line::raw(""),
                Line::styled(
                    "> SYSTEM NOTE: Processing background checks utilizes precinct",
                    Style::default().fg(self.theme.dim),
                ),
                Line::styled(
                    "> resources. Expect delays. Searches may reveal financial debts,",
                    Style::default().fg(self.theme.dim),
                ),
                Line::styled(
                    "> criminal history, or verify alibis.",
                    Style::default().fg(self.theme.dim),
                ),
            ],
            None => vec![],
        };
        frame.render_widget(
            Paragraph::new(detail)
                .wrap(Wrap { trim: true })
                .block(styled_block("Dossier", &self.theme)),
            panes[1],
        );
    }

    fn render_accusation(&self, frame: &mut Frame, area: Rect) {
        if self.game.solved {
            let center = centered_rect(60, 50, area);
            let lines = vec![
                Line::raw(""),
                Line::styled(
                    "JUSTICE SERVED",
                    Style::default()
                        .fg(self.theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw("Excellent work, Detective. Thomas Garrett has been"),
                Line::raw("apprehended. The evidence you gathered was irrefutable."),
                Line::raw(""),
                Line::styled(
                    "STATUS: SOLVED // FILE ARCHIVED",
                    Style::default().fg(self.theme.success),
                ),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(styled_block("Case Closed", &self.theme)),
                center,
            );
            let stamp_area = Rect {
                x: center.x + 2,
                y: center.y.saturating_sub(1),
                width: 20,
                height: 3,
            };
            frame.render_widget(StampBox::new("CASE CLOSED", self.theme.success), stamp_area);
            return;
        }

        let panes = create_split_layout(area);

        let row_style = |row: FormRow, theme: &Theme| {
            if row == self.form_row {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            }
        };
        let suspect_name = self
            .draft
            .suspect
            .and_then(|id| self.case.suspect(id))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "— select —".to_string());

        let mut form = vec![
            Line::styled(
                " OFFICIAL INDICTMENT",
                Style::default()
                    .fg(self.theme.alert)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                format!(" 1. Primary Suspect:  ◄ {} ►", suspect_name),
                row_style(FormRow::Suspect, &self.theme),
            ),
            Line::styled(
                format!(
                    " 2. Method:           ◄ {} ►",
                    self.draft.method.map_or("— select —", |m| m.label())
                ),
                row_style(FormRow::Method, &self.theme),
            ),
            Line::styled(
                format!(
                    " 3. Motive:           ◄ {} ►",
                    self.draft.motive.map_or("— select —", |m| m.label())
                ),
                row_style(FormRow::Motive, &self.theme),
            ),
            Line::styled(
                format!(
                    " 4. Time of Incident: ◄ {} ►",
                    self.draft.time.map_or("— select —", |t| t.label())
                ),
                row_style(FormRow::Time, &self.theme),
            ),
            Line::raw(""),
            Line::styled(
                format!(
                    " [ ISSUE WARRANT ]  ({}/{} exhibits attached, min {})",
                    self.draft.evidence.len(),
                    AccusationDraft::MAX_EXHIBITS,
                    AccusationDraft::MIN_EXHIBITS
                ),
                row_style(FormRow::Submit, &self.theme),
            ),
        ];
        if let Some(err) = &self.accusation_error {
            form.push(Line::raw(""));
            form.push(Line::styled(
                format!(" ERROR: {}", err),
                Style::default().fg(self.theme.alert),
            ));
        }
        frame.render_widget(
            Paragraph::new(form).block(styled_block("Your Theory", &self.theme)),
            panes[0],
        );

        // Supporting exhibits from the evidence locker
        let collected: Vec<&Evidence> = self.game.collected_evidence().collect();
        let mut lines = Vec::new();
        for (idx, item) in collected.iter().enumerate() {
            let attached = self.draft.has_evidence(item.id);
            let marker = if attached { "■" } else { "□" };
            let selected = self.form_row == FormRow::Evidence && idx == self.exhibit_cursor;
            let mut style = if attached {
                Style::default().fg(self.theme.success)
            } else {
                Style::default().fg(self.theme.fg)
            };
            if selected {
                style = style.add_modifier(Modifier::BOLD).fg(self.theme.accent);
            }
            lines.push(Line::styled(format!(" {} {}", marker, item.name), style));
        }
        if lines.is_empty() {
            lines.push(Line::styled(
                "Evidence locker empty.",
                Style::default().fg(self.theme.dim),
            ));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            " * Minimum 3 exhibits required, maximum 5.",
            Style::default().fg(self.theme.dim),
        ));
        frame.render_widget(
            Paragraph::new(lines).block(styled_block("Supporting Exhibits", &self.theme)),
            panes[1],
        );
    }

    fn render_feedback(&self, frame: &mut Frame, msg: &str) {
        let area = centered_rect(50, 30, frame.size());
        frame.render_widget(Clear, area);
        let mut lines = vec![Line::raw("")];
        for part in msg.lines() {
            lines.push(Line::styled(
                part.to_string(),
                Style::default().fg(self.theme.fg),
            ));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "[ Press any key to acknowledge ]",
            Style::default().fg(self.theme.dim),
        ));
        let modal = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styled_block("Case Update", &self.theme));
        frame.render_widget(modal, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
