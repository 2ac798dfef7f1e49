//! Rendering for the TUI dashboard.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::Severity;
use crate::features::videos::Subject;
use crate::tui::app::{App, Pane};

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header);

    let [timer, notes, videos] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .areas(main);

    render_timer(frame, app, timer);
    render_notes(frame, app, notes);
    render_videos(frame, app, videos);
    render_footer(frame, app, footer);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" studytube ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("— "),
        Span::styled(
            format!("{} phase", app.timer.phase()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(
            " · {} session(s) done",
            app.timer.completed_focus_sessions()
        )),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_timer(frame: &mut Frame, app: &App, area: Rect) {
    let block = titled_block("Timer", app.pane == Pane::Timer);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [readout, gauge] =
        Layout::vertical([Constraint::Min(4), Constraint::Length(1)]).areas(inner);

    let state = if app.timer.is_running() {
        Span::styled("Running", Style::default().fg(Color::Green))
    } else {
        Span::styled("Paused", Style::default().fg(Color::Yellow))
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            app.timer.phase().display_name(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            app.timer.format_remaining(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(state).centered(),
        Line::from(format!(
            "Sessions: {}",
            app.timer.completed_focus_sessions()
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), readout);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(app.timer.progress())
            .label(""),
        gauge,
    );
}

fn render_notes(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.editing {
        "Notes (editing, Esc to stop)".to_string()
    } else {
        format!("Notes ({} chars)", app.notes.text().chars().count())
    };

    let block = titled_block(&title, app.pane == Pane::Notes);
    let text = if app.notes.text().is_empty() && !app.editing {
        Paragraph::new("Press i to start writing...".dark_gray())
    } else {
        Paragraph::new(app.notes.text().to_string())
    };

    frame.render_widget(text.block(block).wrap(Wrap { trim: false }), area);
}

fn render_videos(frame: &mut Frame, app: &App, area: Rect) {
    let title = app.subject_filter.map_or_else(
        || format!("Videos ({})", app.history.len()),
        |subject| format!("Videos — {} ({})", subject, app.history.len()),
    );
    let block = titled_block(&title, app.pane == Pane::Videos);

    if app.history.is_empty() {
        let hint = if app.subject_filter.is_some() {
            "No videos for this subject"
        } else {
            "No videos watched yet"
        };
        frame.render_widget(Paragraph::new(hint.dark_gray()).block(block), area);
        return;
    }

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|video| {
            ListItem::new(Line::from(vec![
                Span::raw(video.title.clone()),
                Span::raw(" "),
                Span::styled(
                    format!("#{}", video.subject.slug()),
                    Style::default().fg(subject_color(video.subject)),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    // The newest toast wins the footer; fall back to the status line.
    let line = app.toasts.latest().map_or_else(
        || {
            Line::from(
                app.status
                    .clone()
                    .unwrap_or_else(|| "Press ? for help".to_string())
                    .dark_gray(),
            )
        },
        |toast| {
            let color = match toast.notification.severity {
                Severity::Success => Color::Green,
                Severity::Warning => Color::Yellow,
                Severity::Info => Color::Cyan,
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", toast.notification.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(toast.notification.description.clone()),
            ])
        },
    );

    frame.render_widget(Paragraph::new(line), area);
}

fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let block = Block::bordered().title(title.to_string());
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

/// Terminal color for a subject tag, matching the CLI badge colors.
const fn subject_color(subject: Subject) -> Color {
    match subject {
        Subject::Math | Subject::Science => Color::Blue,
        Subject::Portuguese | Subject::Chemistry => Color::Green,
        Subject::History | Subject::English => Color::Yellow,
        Subject::Geography | Subject::Literature => Color::Magenta,
        Subject::Physics => Color::Red,
        Subject::Biology => Color::Cyan,
        Subject::General => Color::White,
    }
}
