use ff_core::{AssignmentMode, Lineup, LineupEntry, LineupSection, RosterPlayer, TeamSummary};

/// Formats a player with team tag and status
pub fn format_player(player: &RosterPlayer) -> String {
    let mut out = match player.team.as_deref() {
        Some(team) if !team.is_empty() => format!("[{}] {}", team, player.name),
        _ => player.name.clone(),
    };
    out.push_str(&format!(" (ID: {})", player.id));
    if let Some(points) = player.projected_points {
        out.push_str(&format!(" proj {:.1}", points));
    }
    if let Some(status) = player.injury_status.as_deref().filter(|s| !s.trim().is_empty()) {
        out.push(' ');
        out.push_str(&status.to_uppercase());
    }
    out
}

fn format_entry(entry: &LineupEntry) -> String {
    match &entry.player {
        Some(player) => format!("  {:<10} {}\n", entry.slot, format_player(player)),
        None => format!("  {:<10} [EMPTY]\n", entry.slot),
    }
}

fn section_header(section: LineupSection) -> Option<&'static str> {
    match section {
        LineupSection::Overflow => Some("--- Unslotted starters ---\n"),
        LineupSection::Bench => Some("--- Bench ---\n"),
        LineupSection::Starter | LineupSection::Passthrough => None,
    }
}

/// Renders a lineup in readable table form
pub fn render_table(title: &str, lineup: &Lineup, summary: &TeamSummary) -> String {
    let mode = match lineup.mode {
        AssignmentMode::Template => "template",
        AssignmentMode::Passthrough => "no slot template",
    };
    let mut out = format!("=== {} ({}) ===\n", title, mode);

    let mut current: Option<LineupSection> = None;
    for entry in &lineup.entries {
        if current != Some(entry.section) {
            if let Some(header) = section_header(entry.section) {
                out.push_str(header);
            }
            current = Some(entry.section);
        }
        out.push_str(&format_entry(entry));
    }

    out.push_str(&format!(
        "\nPlayers: {} | Starters: {} | Bench: {} | Empty slots: {} | Health: {:?}\n",
        summary.total_players,
        summary.starters,
        summary.bench_players,
        summary.empty_slots,
        summary.team_health
    ));
    if let Some(points) = summary.projected_points {
        out.push_str(&format!("Projected starter points: {:.1}\n", points));
    }
    if let Some(points) = summary.actual_points {
        out.push_str(&format!("Actual starter points: {:.1}\n", points));
    }
    out
}
