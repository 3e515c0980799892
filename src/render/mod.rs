//! HTML rendering of computed standings.
//!
//! Pure string building: the computation happens in `calculate` and this
//! module only formats its output. The page has three sections (standings
//! table, completed-match cards, upcoming-match cards) behind a nav that
//! shows one section at a time, plus a per-team expandable match history.
//! The section and history toggles are the only client-side scripting.

use crate::models::{MatchRecord, Standings, TeamStats};

const STYLES: &str = r#"
body { font-family: sans-serif; margin: 0; background: #f4f4f4; }
header { background: #1a3c6e; color: #fff; padding: 16px; text-align: center; }
nav { display: flex; justify-content: center; gap: 8px; background: #12294b; padding: 8px; }
nav button { border: 0; padding: 8px 16px; cursor: pointer; background: #1a3c6e; color: #fff; }
nav button.active { background: #e8a33d; color: #12294b; }
main { max-width: 860px; margin: 16px auto; padding: 0 8px; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 8px; text-align: center; border-bottom: 1px solid #ddd; }
td.team-name-cell { text-align: left; cursor: pointer; }
.hidden { display: none; }
.details-container { text-align: left; padding: 8px; background: #fafafa; }
.history-item { display: flex; justify-content: space-between; padding: 4px 8px; }
.history-item.WON { border-left: 3px solid #2e7d32; }
.history-item.LOST { border-left: 3px solid #c62828; }
.match-card { background: #fff; margin: 8px 0; padding: 12px; border-left: 4px solid #1a3c6e; }
.match-card.upcoming { border-left-color: #e8a33d; }
.match-number { color: #777; font-size: 0.8em; }
.match-score { font-size: 1.4em; font-weight: bold; }
.error-box { text-align: center; padding: 20px; color: #c62828; }
"#;

const SCRIPT: &str = r#"
function showSection(sectionId) {
    document.querySelectorAll('.view-section').forEach(sec => sec.classList.add('hidden'));
    document.querySelectorAll('nav button').forEach(btn => btn.classList.remove('active'));
    const section = document.getElementById(sectionId);
    if (section) section.classList.remove('hidden');
    const btn = document.getElementById('btn-' + sectionId);
    if (btn) btn.classList.add('active');
}
function toggleDetails(teamId) {
    const row = document.getElementById('details-' + teamId);
    if (row) row.classList.toggle('hidden');
}
"#;

/// Escape a string for safe interpolation into HTML text and attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// DOM-id-safe version of a team name ("Silent Kings" -> "silent-kings").
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Render the full dashboard document.
pub fn render_page(standings: &Standings) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>League Standings</title>\n");
    page.push_str(&format!("<style>{}</style>\n", STYLES));
    page.push_str("</head>\n<body>\n");
    page.push_str("<header><h1>League Standings</h1></header>\n");
    page.push_str(&render_nav());
    page.push_str("<main>\n");

    // Standings visible by default; the other two sections start hidden.
    page.push_str("<section id=\"standings\" class=\"view-section\">\n");
    page.push_str(&render_standings_table(&standings.teams));
    page.push_str("</section>\n");

    page.push_str("<section id=\"results\" class=\"view-section hidden\">\n");
    page.push_str(&render_card_list(&standings.results, "No results yet."));
    page.push_str("</section>\n");

    page.push_str("<section id=\"upcoming\" class=\"view-section hidden\">\n");
    page.push_str(&render_card_list(&standings.upcoming, "No upcoming matches."));
    page.push_str("</section>\n");

    page.push_str("</main>\n");
    page.push_str(&format!("<script>{}</script>\n", SCRIPT));
    page.push_str("</body>\n</html>\n");
    page
}

/// Render the page shell with the main content replaced by an error block.
///
/// Used when the match data cannot be loaded; the header and nav stay
/// intact, only the content region is swapped out.
pub fn render_error_page(message: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<title>League Standings</title>\n");
    page.push_str(&format!("<style>{}</style>\n", STYLES));
    page.push_str("</head>\n<body>\n");
    page.push_str("<header><h1>League Standings</h1></header>\n");
    page.push_str("<main>\n<div class=\"error-box\">\n");
    page.push_str("<h3>Error Loading Data</h3>\n");
    page.push_str(&format!("<p>{}</p>\n", escape_html(message)));
    page.push_str("</div>\n</main>\n");
    page.push_str("</body>\n</html>\n");
    page
}

fn render_nav() -> String {
    let mut nav = String::from("<nav>\n");
    for (id, label) in [
        ("standings", "Standings"),
        ("results", "Results"),
        ("upcoming", "Upcoming"),
    ] {
        let active = if id == "standings" { " class=\"active\"" } else { "" };
        nav.push_str(&format!(
            "<button id=\"btn-{id}\"{active} onclick=\"showSection('{id}')\">{label}</button>\n"
        ));
    }
    nav.push_str("</nav>\n");
    nav
}

/// Render the ranked table, one main row plus one hidden history row per
/// team.
pub fn render_standings_table(teams: &[TeamStats]) -> String {
    let mut html = String::from(
        "<table id=\"standings-table\">\n<thead>\n<tr>\
         <th>#</th><th>Team</th><th>P</th><th>W</th><th>L</th>\
         <th>Pts</th><th>Diff</th><th>Sets</th></tr>\n</thead>\n<tbody>\n",
    );

    for (rank, team) in teams.iter().enumerate() {
        let slug = slugify(&team.name);
        let name = escape_html(&team.name);

        html.push_str(&format!(
            "<tr class=\"main-row\">\
             <td>{rank}</td>\
             <td class=\"team-name-cell\" onclick=\"toggleDetails('{slug}')\">{name} <span class=\"toggle-icon\">&#9660;</span></td>\
             <td>{matches}</td><td>{won}</td><td>{lost}</td>\
             <td><strong>{points}</strong></td>\
             <td>{diff}</td>\
             <td>{sets_for} / {sets_against}</td></tr>\n",
            rank = rank + 1,
            matches = team.matches,
            won = team.won,
            lost = team.lost,
            points = team.points,
            diff = team.signed_difference(),
            sets_for = team.sets_for,
            sets_against = team.sets_against,
        ));

        html.push_str(&format!(
            "<tr id=\"details-{slug}\" class=\"details-row hidden\"><td colspan=\"8\">\
             <div class=\"details-container\"><strong>Match History:</strong>\n{}\
             </div></td></tr>\n",
            render_history(team),
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_history(team: &TeamStats) -> String {
    if team.history.is_empty() {
        return "<div class=\"no-history\">No matches played yet.</div>\n".to_string();
    }

    let mut html = String::new();
    for entry in &team.history {
        html.push_str(&format!(
            "<div class=\"history-item {outcome}\">\
             <span>M{id} vs <strong>{opponent}</strong></span>\
             <span>{own}-{opp} ({outcome})</span></div>\n",
            outcome = entry.outcome,
            id = entry.match_id,
            opponent = escape_html(&entry.opponent),
            own = entry.score_own,
            opp = entry.score_opp,
        ));
    }
    html
}

fn render_card_list(matches: &[MatchRecord], empty_message: &str) -> String {
    if matches.is_empty() {
        return format!("<p class=\"empty-list\">{}</p>\n", escape_html(empty_message));
    }
    matches.iter().map(render_match_card).collect()
}

/// Render one match summary card.
///
/// Completed matches show both scores and the winner; scheduled matches
/// show only the participants.
pub fn render_match_card(m: &MatchRecord) -> String {
    let t1 = escape_html(&m.t1);
    let t2 = escape_html(&m.t2);

    match m.winner() {
        Some(winner) => format!(
            "<div class=\"match-card\">\
             <div class=\"match-number\">Match {id}</div>\
             <div class=\"match-teams\">{t1} vs {t2}</div>\
             <div class=\"match-score\">{s1} - {s2}</div>\
             <div class=\"match-summary\">Winner: <strong>{winner}</strong>. ({t1}: {s1}, {t2}: {s2})</div>\
             </div>\n",
            id = m.id,
            s1 = m.s1,
            s2 = m.s2,
            winner = escape_html(winner),
        ),
        None => format!(
            "<div class=\"match-card upcoming\">\
             <div class=\"match-number\">Match {id}</div>\
             <div class=\"match-teams\">{t1} vs {t2}</div>\
             <div class=\"match-summary\">Scheduled</div>\
             </div>\n",
            id = m.id,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::compute_standings;
    use crate::models::Roster;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Legends"), "legends");
        assert_eq!(slugify("Silent Kings"), "silent-kings");
        assert_eq!(slugify("  Prince   Warriors "), "prince-warriors");
    }

    #[test]
    fn test_played_card_shows_winner() {
        let card = render_match_card(&MatchRecord::played(3, "Legends", "Baasha", 3, 1));
        assert!(card.contains("Match 3"));
        assert!(card.contains("Legends vs Baasha"));
        assert!(card.contains("3 - 1"));
        assert!(card.contains("Winner: <strong>Legends</strong>"));
    }

    #[test]
    fn test_scheduled_card_has_no_score() {
        let card = render_match_card(&MatchRecord::scheduled(8, "Legends", "Baasha"));
        assert!(card.contains("upcoming"));
        assert!(card.contains("Scheduled"));
        assert!(!card.contains("Winner"));
    }

    #[test]
    fn test_table_row_contents() {
        let standings = compute_standings(
            &Roster::from(["A", "B"].as_slice()),
            &[MatchRecord::played(1, "A", "B", 3, 1)],
        );
        let table = render_standings_table(&standings.teams);

        // Winner row: rank 1, 2 points, +2 differential, 3 / 1 sets.
        assert!(table.contains("<strong>2</strong>"));
        assert!(table.contains("<td>+2</td>"));
        assert!(table.contains("<td>3 / 1</td>"));
        assert!(table.contains("toggleDetails('a')"));
    }

    #[test]
    fn test_history_rows_hidden_by_default() {
        let standings = compute_standings(
            &Roster::from(["A", "B"].as_slice()),
            &[MatchRecord::played(1, "A", "B", 3, 1)],
        );
        let table = render_standings_table(&standings.teams);
        assert!(table.contains("id=\"details-a\" class=\"details-row hidden\""));
        assert!(table.contains("M1 vs <strong>B</strong>"));
        assert!(table.contains("3-1 (WON)"));
    }

    #[test]
    fn test_team_without_matches_gets_placeholder() {
        let standings = compute_standings(&Roster::from(["A"].as_slice()), &[]);
        let table = render_standings_table(&standings.teams);
        assert!(table.contains("No matches played yet."));
    }

    #[test]
    fn test_team_names_are_escaped() {
        let standings = compute_standings(
            &Roster::from(["<script>alert(1)</script>"].as_slice()),
            &[],
        );
        let table = render_standings_table(&standings.teams);
        assert!(!table.contains("<script>alert(1)</script>"));
        assert!(table.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_full_page_has_three_sections() {
        let standings = compute_standings(
            &Roster::from(["A", "B"].as_slice()),
            &[
                MatchRecord::played(1, "A", "B", 3, 1),
                MatchRecord::scheduled(2, "B", "A"),
            ],
        );
        let page = render_page(&standings);

        assert!(page.contains("id=\"standings\" class=\"view-section\""));
        assert!(page.contains("id=\"results\" class=\"view-section hidden\""));
        assert!(page.contains("id=\"upcoming\" class=\"view-section hidden\""));
        assert!(page.contains("btn-standings"));
        assert!(page.contains("showSection"));
    }

    #[test]
    fn test_error_page_carries_message() {
        let page = render_error_page("Could not load matches.json");
        assert!(page.contains("Error Loading Data"));
        assert!(page.contains("Could not load matches.json"));
        // Page chrome stays in place.
        assert!(page.contains("<header>"));
    }
}
