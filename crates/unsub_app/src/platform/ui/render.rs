use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;
use unsub_core::{AppViewModel, ConfirmView, RowAction, StatsView, SubscriptionRowView};

use super::layout::centered_rect;
use super::theme;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view);
    render_stats(frame, chunks[1], &view.stats);
    render_list(frame, chunks[2], view);
    render_hints(frame, chunks[3], view);

    if let Some(confirm) = &view.confirm {
        render_confirm(frame, confirm);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let status = if view.scanning {
        Span::styled("  🔍 Scan en cours...", theme::badge_style(unsub_core::BadgeColor::Yellow))
    } else {
        Span::raw("")
    };
    let header = Paragraph::new(Line::from(vec![Span::raw(theme::TITLE), status]))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &StatsView) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_stat_card(frame, cards[0], "📧 Total", stats.total);
    render_stat_card(frame, cards[1], "🔍 Détectés", stats.detected);
    render_stat_card(frame, cards[2], "📤 Envoyés", stats.sent);
    render_stat_card(frame, cards[3], "✅ Désinscris", stats.unsubscribed);
}

fn render_stat_card(frame: &mut Frame, area: Rect, label: &str, value: usize) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(label.to_string(), theme::stat_label_style())),
        Line::from(Span::styled(value.to_string(), theme::stat_value_style())),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

fn render_list(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Abonnements détectés ({})", view.stats.total));

    if view.loading {
        let loading = Paragraph::new("Chargement...")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if view.rows.is_empty() {
        frame.render_widget(empty_state(block), area);
        return;
    }

    let header = Row::new(vec!["Service", "Expéditeur", "Détecté le", "Statut", "Action"])
        .style(theme::stat_label_style());
    let rows: Vec<Row> = view.rows.iter().map(table_row).collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(24),
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .row_highlight_style(theme::selected_row_style())
    .block(block);

    let mut table_state = TableState::default().with_selected(Some(view.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn table_row(row: &SubscriptionRowView) -> Row<'_> {
    let action = match row.action {
        Some(RowAction::GenerateEmail) => Cell::from("Générer email"),
        Some(RowAction::MarkUnsubscribed) => Cell::from("Marquer comme désinscrit"),
        None if row.completed => Cell::from(Span::styled("✅ Terminé", theme::completed_style())),
        None => Cell::from(""),
    };

    Row::new(vec![
        Cell::from(row.service_name.as_str()),
        Cell::from(row.sender_email.as_str()),
        Cell::from(row.detected_on.as_str()),
        Cell::from(Span::styled(
            row.status_label.as_str(),
            theme::badge_style(row.badge),
        )),
        action,
    ])
}

fn empty_state(block: Block<'_>) -> Paragraph<'_> {
    let lines = vec![
        Line::from(""),
        Line::from("Aucun abonnement détecté"),
        Line::from(Span::styled(
            "Appuyez sur « s » pour scanner vos emails",
            theme::muted_style(),
        )),
        Line::from(""),
        Line::from("🚀 Comment commencer"),
        Line::from("1. Connectez-vous à votre compte Gmail (OAuth sécurisé)"),
        Line::from("2. Appuyez sur « s » pour détecter automatiquement les abonnements"),
        Line::from("3. Générez et envoyez des emails de désinscription personnalisés"),
        Line::from("4. Suivez le statut de vos demandes de désinscription"),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
}

fn render_hints(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let hints = if view.confirm.is_some() {
        "o : envoyer · n : annuler"
    } else {
        "s : scanner · r : actualiser · ↑/↓ : naviguer · Entrée : action · q : quitter"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, theme::muted_style())),
        area,
    );
}

fn render_confirm(frame: &mut Frame, confirm: &ConfirmView) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(format!("À : {}", confirm.to)),
        Line::from(format!("Objet : {}", confirm.subject)),
        Line::from(""),
    ];
    lines.extend(confirm.body.lines().map(|line| Line::from(line.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[o] Envoyer    [n] Annuler",
        theme::stat_value_style(),
    )));

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Envoyer cet email de désinscription ?"),
        );
    frame.render_widget(popup, area);
}
