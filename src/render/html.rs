use super::view::{BroadcastBadge, MatchCard, ScoreView, TeamView, ViewContent, ViewModel};

const LOADING_MESSAGE: &str = "Carregando jogos...";

/// Page fragment: the date label followed by the cards or the current state
pub fn to_html(view: &ViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<h2 id=\"currentDate\" class=\"current-date\">{}</h2>\n",
        escape(&view.date_label)
    ));

    match &view.content {
        ViewContent::Cards { cards } => {
            out.push_str("<section id=\"matchesContainer\" class=\"matches\">\n");
            for card in cards {
                out.push_str(&card_html(card));
            }
            out.push_str("</section>\n");
        }
        ViewContent::Empty { message } => {
            out.push_str(&format!(
                "<div id=\"emptyState\" class=\"empty-state\"><p>{}</p></div>\n",
                escape(message)
            ));
        }
        ViewContent::Loading => {
            out.push_str(&format!(
                "<div id=\"loadingState\" class=\"loading-state\"><p>{}</p></div>\n",
                LOADING_MESSAGE
            ));
        }
        ViewContent::Failed { message } => {
            out.push_str(&format!(
                "<div id=\"errorState\" class=\"error-state\" role=\"alert\"><p>{}</p></div>\n",
                escape(message)
            ));
        }
    }

    out
}

/// One clickable match card
pub fn card_html(card: &MatchCard) -> String {
    let live_class = if card.live { " live" } else { "" };
    let live_indicator = if card.live {
        "\n      <div class=\"live-indicator\"><span class=\"live-dot\"></span>AO VIVO</div>"
    } else {
        ""
    };
    let badges: String = card.broadcasts.iter().map(badge_html).collect();

    format!(
        r#"<a class="match-link" href="{url}">
  <article class="match-card{live_class}" data-match-id="{id}">
    <div class="match-header">
      <div class="match-time">
        <span class="time">{time}</span>
        <span class="league">{league}</span>
      </div>{live_indicator}
    </div>
    <div class="match-teams">
      {home}
      {score}
      {away}
    </div>
    <div class="match-broadcast">
      <span class="broadcast-label">Onde Assistir:</span>
      <div class="channels">{badges}</div>
    </div>
  </article>
</a>
"#,
        url = escape(&card.detail_url),
        id = escape(card.id.as_str()),
        time = escape(&card.time),
        league = escape(&card.tournament.name),
        home = team_html(&card.home),
        score = score_html(&card.score),
        away = team_html(&card.away),
    )
}

fn team_html(team: &TeamView) -> String {
    let name = escape(&team.name);
    let logo = team
        .logo
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="{}" class="team-logo">"#, escape(src), name))
        .unwrap_or_default();

    format!(r#"<div class="team">{}<span class="team-name">{}</span></div>"#, logo, name)
}

fn score_html(score: &ScoreView) -> String {
    match score {
        ScoreView::Score { .. } => format!(r#"<span class="score">{}</span>"#, score.label()),
        ScoreView::Versus => r#"<span class="vs">VS</span>"#.to_string(),
    }
}

fn badge_html(badge: &BroadcastBadge) -> String {
    let name = escape(&badge.name);
    let logo = badge
        .logo
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="{}" class="channel-logo">"#, escape(src), name))
        .unwrap_or_default();

    format!(r#"<span class="channel-badge">{}{}</span>"#, logo, name)
}

/// Escape text and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
