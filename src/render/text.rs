use colored::Colorize;

use super::view::{MatchCard, ScoreView, ViewContent, ViewModel};

/// Terminal listing of a view model
pub fn to_text(view: &ViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.date_label.bold()));

    match &view.content {
        ViewContent::Cards { cards } => {
            for card in cards {
                out.push('\n');
                write_card(&mut out, card);
            }
        }
        ViewContent::Empty { message } => {
            out.push_str(&format!("{}\n", message.dimmed()));
        }
        ViewContent::Loading => {
            out.push_str(&format!("{}\n", "Carregando jogos...".dimmed()));
        }
        ViewContent::Failed { message } => {
            out.push_str(&format!("{}\n", message.red()));
        }
    }

    out
}

fn write_card(out: &mut String, card: &MatchCard) {
    let live = if card.live {
        format!("  {}", "AO VIVO".red().bold())
    } else {
        String::new()
    };
    let score = match card.score {
        ScoreView::Score { .. } => card.score.label().bold().to_string(),
        ScoreView::Versus => card.score.label().dimmed().to_string(),
    };
    let channels = if card.broadcasts.is_empty() {
        "-".to_string()
    } else {
        card.broadcasts
            .iter()
            .map(|badge| badge.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    out.push_str(&format!(
        "{}  {}{}\n       {} {} {}\n       Onde Assistir: {}\n       {}\n",
        card.time.cyan(),
        card.tournament.name,
        live,
        card.home.name,
        score,
        card.away.name,
        channels,
        card.detail_url.dimmed()
    ));
}
