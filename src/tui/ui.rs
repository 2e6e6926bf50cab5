//! UI rendering for the TUI.
//!
//! Handles layout and widget rendering using ratatui. Each demo screen has
//! its own draw function; all of them read state only, never mutate it.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

use crate::core::Screen;
use crate::App;

/// Spinner frames for the processing animation.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Scripted analysis steps shown while processing.
const PROCESSING_STEPS: [&str; 3] = [
    "🔍 Determining jurisdiction requirements",
    "📋 Identifying required permits",
    "📄 Fetching current forms",
];

/// Draw the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Paint the themed background before anything else.
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        frame.area(),
    );

    match app.screen() {
        Screen::Intro => draw_intro(frame, app),
        Screen::Processing => draw_processing(frame, app),
        Screen::Results => draw_results(frame, app),
    }
}

/// Header bar: product name plus the demo-mode badge.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let title = Line::from(vec![
        Span::styled(
            " 🏛  PermitPro ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("AI-Powered Permit Discovery", Style::default().fg(theme.text_dim)),
        Span::raw("  "),
        Span::styled(
            " ✨ DEMO MODE ",
            Style::default().fg(theme.background).bg(theme.warning).add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border));
    frame.render_widget(header, area);
}

/// One-line banner reminding the visitor everything is fictional.
fn draw_demo_notice(frame: &mut Frame, app: &App, area: Rect) {
    let notice = Paragraph::new(Line::from(vec![
        Span::styled("⚠ Demo version: ", Style::default().fg(app.theme.warning)),
        Span::styled(
            "fictional data from \"Demo City, ST\" - not usable for real permit applications.",
            Style::default().fg(app.theme.text_dim),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}

/// Key hints at the bottom of the screen.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect, hints: &str) {
    let text = app.status_message.as_deref().unwrap_or(hints);
    let footer =
        Paragraph::new(Span::styled(text, Style::default().fg(app.theme.text_muted)))
            .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Intro screen: headline, demo location, and the project cards.
fn draw_intro(frame: &mut Frame, app: &App) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Demo notice
            Constraint::Length(2), // Headline
            Constraint::Length(4), // Demo location card
            Constraint::Length(1), // Section title
            Constraint::Min(10),   // Project cards
            Constraint::Length(2), // Features preview
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_demo_notice(frame, app, chunks[1]);

    let headline = Paragraph::new(Line::from(Span::styled(
        "Get Your Permits in Minutes, Not Days",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(headline, chunks[2]);

    let location = Paragraph::new(vec![
        Line::from(Span::styled("📍 Demo Location", Style::default().fg(theme.text_muted))),
        Line::from(Span::styled(
            app.config.demo.location.as_str(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(theme.border));
    frame.render_widget(location, centered(chunks[3], 60));

    let section = Paragraph::new(Span::styled(
        "Choose a Demo Project",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(section, chunks[4]);

    draw_project_cards(frame, app, chunks[5]);

    let features = Paragraph::new(Line::from(Span::styled(
        "Full version: ✓ Smart Discovery   ✓ Auto-Fill Forms   ✓ Status Tracking",
        Style::default().fg(theme.text_dim),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(features, chunks[6]);

    draw_footer(
        frame,
        app,
        chunks[7],
        "↑/↓ select · enter try demo · 1-4 quick pick · t theme · q quit",
    );
}

/// The 2x2 grid of selectable project cards.
fn draw_project_cards(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, project) in app.catalog.projects().iter().enumerate() {
        let row = rows[i / 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        let cell = cols[i % 2];

        let selected = i == app.intro_selected;
        let border_style = if selected {
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", project.icon)),
                Span::styled(
                    project.label.as_str(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                project.description.as_str(),
                Style::default().fg(theme.text_dim),
            )),
        ];
        if selected {
            lines.push(Line::from(Span::styled(
                "Try Demo →",
                Style::default().fg(theme.primary),
            )));
        }

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(theme.panel_bg)),
        );
        frame.render_widget(card, cell);
    }
}

/// Processing screen: spinner, scripted steps, and a progress gauge.
fn draw_processing(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let progress = app.session.processing_progress(Instant::now()).unwrap_or(0.0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    let spinner = SPINNER[app.tick_count % SPINNER.len()];
    let active_step =
        ((progress * PROCESSING_STEPS.len() as f64) as usize).min(PROCESSING_STEPS.len() - 1);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{spinner} Analyzing Your Project..."),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (i, step) in PROCESSING_STEPS.iter().enumerate() {
        let style = if i == active_step {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else if i < active_step {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        lines.push(Line::from(Span::styled(*step, style)));
    }

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, chunks[2]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(theme.border))
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(progress.clamp(0.0, 1.0))
        .label(Span::styled("analyzing", Style::default().fg(theme.text)));
    frame.render_widget(gauge, centered(chunks[3], 50));

    draw_footer(frame, app, chunks[5], "t theme · q quit");
}

/// Results screen: summary cards and the scrollable permit report.
fn draw_results(frame: &mut Frame, app: &App) {
    let Some(fixture) = app.current_fixture() else {
        // Unset selection renders nothing rather than failing.
        return;
    };
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(5), // Summary cards
            Constraint::Min(5),    // Report body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    // Summary cards: permit count, total fees, timeline
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);
    let summaries = [
        ("📄 Required Permits", fixture.permits.len().to_string()),
        ("💰 Total Fees", fixture.total_cost.clone()),
        ("⏱ Est. Timeline", fixture.total_time.clone()),
    ];
    for (cell, (label, value)) in cards.iter().zip(summaries) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(theme.text_dim))),
            Line::from(Span::styled(
                value,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(theme.panel_bg)),
        );
        frame.render_widget(card, *cell);
    }

    let report = Paragraph::new(report_lines(app))
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0))
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(report, chunks[2]);

    draw_footer(
        frame,
        app,
        chunks[3],
        "←/→ forms · enter preview · ↑/↓ scroll · r try another project · q quit",
    );
}

/// Build the scrollable report body for the results screen.
fn report_lines(app: &App) -> Vec<Line<'static>> {
    let theme = app.theme.clone();
    let Some(fixture) = app.current_fixture() else {
        return Vec::new();
    };

    let heading = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.text_dim);
    let mut lines = Vec::new();

    // Permits with their forms
    lines.push(Line::from(Span::styled("Required Permits", heading)));
    let mut form_index = 0usize;
    for permit in &fixture.permits {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(theme.success)),
            Span::styled(
                permit.name.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    Fee: {} · Processing: {}", permit.fee, permit.processing_time),
            dim,
        )));

        let mut chips: Vec<Span<'static>> = vec![Span::styled("    Forms: ".to_string(), dim)];
        for form in &permit.forms {
            let highlighted = form_index == app.form_cursor;
            let previewed = app.session.selected_form() == Some(form.as_str());
            let style = if highlighted {
                Style::default().fg(theme.background).bg(theme.primary)
            } else if previewed {
                Style::default().fg(theme.primary).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.primary)
            };
            chips.push(Span::styled(format!(" 📄 {form} "), style));
            chips.push(Span::raw(" "));
            form_index += 1;
        }
        lines.push(Line::from(chips));
        lines.push(Line::default());
    }

    // Inspection schedule
    lines.push(Line::from(Span::styled("Inspection Schedule", heading)));
    let schedule = fixture
        .inspections
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("   ");
    lines.push(Line::from(Span::styled(
        format!("  {schedule}"),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::default());

    // Related building codes
    lines.push(Line::from(Span::styled("Related Building Codes to Review", heading)));
    for code in app.catalog.related_codes(&fixture.id) {
        lines.push(Line::from(vec![
            Span::styled("  ▪ ".to_string(), Style::default().fg(theme.primary)),
            Span::styled(
                code.title.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", code.code_citation), Style::default().fg(theme.accent)),
        ]));
        lines.push(Line::from(Span::styled(format!("    {}", code.description), dim)));
    }
    lines.push(Line::from(Span::styled(
        "  ⚠ Demo note: code references are simplified for demonstration.",
        Style::default().fg(theme.warning),
    )));
    lines.push(Line::default());

    // Locked form preview panel
    if let Some(form) = app.session.selected_form() {
        lines.push(Line::from(vec![
            Span::styled("🔒 ".to_string(), Style::default().fg(theme.text_muted)),
            Span::styled(
                form.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            "    ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒",
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "    Form preview locked in demo mode. Upgrade to access real forms \
             with AI auto-fill.",
            dim,
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Ready for real permits? The full version adds real jurisdiction data, \
         auto-filled forms, and status tracking.",
        Style::default().fg(theme.text_dim).add_modifier(Modifier::ITALIC),
    )));

    lines
}

/// Center a rect horizontally at `percent` of the available width.
fn centered(area: Rect, percent: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent) / 2),
            Constraint::Percentage(percent),
            Constraint::Percentage((100 - percent) / 2),
        ])
        .split(area);
    chunks[1]
}
