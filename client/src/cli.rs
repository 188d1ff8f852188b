//! Command-line surface of the `courtside` binary.
//!
//! Each subcommand maps onto one client operation: the auth lifecycle, one
//! paginated list per collection, detail views with their sub-resources,
//! and the three prediction calls. Rendering is plain text; write failures
//! surface with their taxonomy kind through the error return.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use pagination::{Page, PageNumber};

use crate::Courtside;
use crate::domain::auth::{LoginCredentials, Registration};
use crate::domain::resources::{
    MatchFilters, PlayerFilters, PlayerStatsFilters, TeamFilters, TeamStatsFilters,
};
use crate::domain::session::AuthState;

/// Courtside basketball statistics client.
#[derive(Debug, Parser)]
#[command(name = "courtside", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations the binary can perform.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and persist the session token.
    Login {
        /// Account username.
        username: String,
        /// Account password.
        #[arg(long, env = "COURTSIDE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Drop the session and the persisted token.
    Logout,
    /// Create an account.
    Register {
        /// Requested username.
        username: String,
        /// Account email.
        email: String,
        /// Chosen password.
        #[arg(long, env = "COURTSIDE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Password confirmation.
        #[arg(long)]
        confirm: String,
    },
    /// Show the current session, if any.
    Whoami,
    /// List teams.
    Teams {
        /// Restrict to one conference.
        #[arg(long)]
        conference: Option<String>,
        /// Restrict to one division.
        #[arg(long)]
        division: Option<String>,
        /// Free-text search.
        #[arg(long)]
        search: Option<String>,
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// List players.
    Players {
        /// Restrict to one team id.
        #[arg(long)]
        team: Option<i64>,
        /// Restrict to one position code.
        #[arg(long)]
        position: Option<String>,
        /// Restrict by roster status.
        #[arg(long)]
        active: Option<bool>,
        /// Free-text search.
        #[arg(long)]
        search: Option<String>,
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// List matches.
    Matches {
        /// Restrict to fixtures hosted by one team id.
        #[arg(long)]
        home_team: Option<i64>,
        /// Restrict to fixtures visited by one team id.
        #[arg(long)]
        away_team: Option<i64>,
        /// Restrict to one season label.
        #[arg(long)]
        season: Option<String>,
        /// Restrict by playoff status.
        #[arg(long)]
        playoff: Option<bool>,
        /// Restrict by completion.
        #[arg(long)]
        completed: Option<bool>,
        /// Free-text search.
        #[arg(long)]
        search: Option<String>,
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// List per-player box scores.
    PlayerStats {
        /// Restrict to one player id.
        #[arg(long)]
        player: Option<i64>,
        /// Restrict to one match id.
        #[arg(long = "match")]
        match_id: Option<i64>,
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// List per-team totals.
    TeamStats {
        /// Restrict to one team id.
        #[arg(long)]
        team: Option<i64>,
        /// Restrict to one match id.
        #[arg(long = "match")]
        match_id: Option<i64>,
        /// Page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    /// Show one team with its roster and recent fixtures.
    Team {
        /// Team id.
        id: i64,
    },
    /// Show one player with recent box scores.
    Player {
        /// Player id.
        id: i64,
    },
    /// Show one match with both stat sheets.
    Match {
        /// Match id.
        id: i64,
    },
    /// Predict a player's stat line for a match.
    PredictPlayer {
        /// Player id.
        player: i64,
        /// Match id.
        #[arg(long = "match")]
        match_id: i64,
    },
    /// Predict a match outcome.
    PredictMatch {
        /// Match id.
        match_id: i64,
    },
    /// Compare two players' averaged stat lines.
    ComparePlayers {
        /// First player id.
        player1: i64,
        /// Second player id.
        player2: i64,
    },
}

/// Dispatch one parsed command against the assembled client.
pub async fn run(command: Command, client: &Courtside) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let credentials = LoginCredentials::try_from_parts(&username, &password)?;
            let session = client.auth().login(&credentials).await?;
            println!("Logged in as {} <{}>", session.username(), session.email());
        }
        Command::Logout => {
            client.auth().logout();
            println!("Logged out.");
        }
        Command::Register {
            username,
            email,
            password,
            confirm,
        } => {
            let registration = Registration::try_from_parts(&username, &email, &password, &confirm)?;
            let account = client.auth().register(&registration).await?;
            println!("Registered {} (id {}). You can now log in.", account.username, account.id);
        }
        Command::Whoami => match client.auth().state() {
            AuthState::Authenticated { session } => {
                println!("{} <{}> (user {})", session.username(), session.email(), session.user_id());
            }
            AuthState::PendingVerification { .. } => {
                println!("Session restored, not yet verified.");
            }
            AuthState::Unauthenticated => println!("Not logged in."),
        },
        Command::Teams {
            conference,
            division,
            search,
            page,
        } => {
            let filters = TeamFilters {
                conference,
                division,
                search,
            };
            let listing = client.teams(&filters, parse_page(page)?).await;
            render_page_header(&listing);
            for team in listing.items() {
                println!(
                    "{:>5}  {:<24} {:<14} {:<4} {:<8} {}",
                    team.id, team.name, team.city, team.abbreviation, team.conference,
                    team.division
                );
            }
        }
        Command::Players {
            team,
            position,
            active,
            search,
            page,
        } => {
            let filters = PlayerFilters {
                team,
                position,
                is_active: active,
                search,
            };
            let listing = client.players(&filters, parse_page(page)?).await;
            render_page_header(&listing);
            for player in listing.items() {
                println!(
                    "{:>5}  {:<28} {:<20} {:<3} #{:<3} {:.2}m {:.0}kg age {}",
                    player.id,
                    player.full_name,
                    player.team_name,
                    player.position,
                    player.jersey_number,
                    player.height,
                    player.weight,
                    player.age
                );
            }
        }
        Command::Matches {
            home_team,
            away_team,
            season,
            playoff,
            completed,
            search,
            page,
        } => {
            let filters = MatchFilters {
                home_team,
                away_team,
                season,
                is_playoff: playoff,
                is_completed: completed,
                search,
            };
            let listing = client.matches(&filters, parse_page(page)?).await;
            render_page_header(&listing);
            for fixture in listing.items() {
                println!(
                    "{:>5}  {}  {:<22} vs {:<22} {:<9} {}",
                    fixture.id,
                    fixture.date.format("%Y-%m-%d"),
                    fixture.home_team_name,
                    fixture.away_team_name,
                    fixture.score_line(),
                    fixture.season
                );
            }
        }
        Command::PlayerStats {
            player,
            match_id,
            page,
        } => {
            let filters = PlayerStatsFilters { player, match_id };
            let listing = client.player_stats(&filters, parse_page(page)?).await;
            render_page_header(&listing);
            for line in listing.items() {
                println!(
                    "{:<24} {:<32} {:>3}p {:>3}r {:>3}a {:>2}s {:>2}b  FG {:>5.1}%  3P {:>5.1}%  FT {:>5.1}%",
                    line.player_name,
                    line.match_info,
                    line.points,
                    line.rebounds,
                    line.assists,
                    line.steals,
                    line.blocks,
                    line.field_goal_percentage,
                    line.three_point_percentage,
                    line.free_throw_percentage
                );
            }
        }
        Command::TeamStats {
            team,
            match_id,
            page,
        } => {
            let filters = TeamStatsFilters { team, match_id };
            let listing = client.team_stats(&filters, parse_page(page)?).await;
            render_page_header(&listing);
            for line in listing.items() {
                println!(
                    "{:<22} {:<32} {:>3}p {:>3}r {:>3}a {:>2}s {:>2}b  FG {:>5.1}%  3P {:>5.1}%  FT {:>5.1}%",
                    line.team_name,
                    line.match_info,
                    line.points,
                    line.rebounds,
                    line.assists,
                    line.steals,
                    line.blocks,
                    line.field_goal_percentage,
                    line.three_point_percentage,
                    line.free_throw_percentage
                );
            }
        }
        Command::Team { id } => {
            let team = client.team(id).await?;
            println!("{} {} ({})", team.city, team.name, team.abbreviation);
            println!("{} / {}", team.conference, team.division);
            let roster = client.team_players(id).await?;
            println!("\nRoster ({}):", roster.len());
            for player in &roster {
                println!("  {:<28} {:<3} #{}", player.full_name, player.position, player.jersey_number);
            }
            let fixtures = client.team_matches(id).await?;
            println!("\nRecent matches:");
            for fixture in fixtures.iter().take(5) {
                println!(
                    "  {}  {} vs {}  {}",
                    fixture.date.format("%Y-%m-%d"),
                    fixture.home_team_name,
                    fixture.away_team_name,
                    fixture.score_line()
                );
            }
        }
        Command::Player { id } => {
            let player = client.player(id).await?;
            println!(
                "{} — {} #{} ({})",
                player.full_name, player.team_name, player.jersey_number, player.position
            );
            println!(
                "{:.2}m, {:.0}kg, born {} (age {})",
                player.height, player.weight, player.date_of_birth, player.age
            );
            let history = client.player_stat_history(id).await?;
            println!("\nRecent box scores:");
            for line in history.iter().take(5) {
                println!(
                    "  {:<32} {:>3}p {:>3}r {:>3}a",
                    line.match_info, line.points, line.rebounds, line.assists
                );
            }
        }
        Command::Match { id } => {
            let fixture = client.match_detail(id).await?;
            println!(
                "{} vs {}  {}  ({})",
                fixture.home_team_name,
                fixture.away_team_name,
                fixture.score_line(),
                fixture.date.format("%Y-%m-%d")
            );
            let team_sheets = client.match_team_stats(id).await?;
            println!("\nTeam totals:");
            for sheet in &team_sheets {
                println!(
                    "  {:<22} {:>3}p {:>3}r {:>3}a  FG {:>5.1}%",
                    sheet.team_name, sheet.points, sheet.rebounds, sheet.assists,
                    sheet.field_goal_percentage
                );
            }
            let player_sheets = client.match_player_stats(id).await?;
            println!("\nPlayer lines:");
            for sheet in &player_sheets {
                println!(
                    "  {:<24} {:>3}p {:>3}r {:>3}a {:>2}s {:>2}b",
                    sheet.player_name, sheet.points, sheet.rebounds, sheet.assists,
                    sheet.steals, sheet.blocks
                );
            }
        }
        Command::PredictPlayer { player, match_id } => {
            let predicted = client.predictions().player_performance(player, match_id).await?;
            println!("Confidence: {:.1}%", predicted.confidence * 100.0);
            let line = &predicted.payload;
            println!(
                "Points {:.1}, rebounds {:.1}, assists {:.1}, steals {:.1}, blocks {:.1}",
                line.points, line.rebounds, line.assists, line.steals, line.blocks
            );
            println!(
                "FG {:.1}%, 3P {:.1}%, FT {:.1}%",
                line.field_goal_percentage * 100.0,
                line.three_point_percentage * 100.0,
                line.free_throw_percentage * 100.0
            );
        }
        Command::PredictMatch { match_id } => {
            let predicted = client.predictions().match_outcome(match_id).await?;
            let outcome = &predicted.payload;
            println!("Confidence: {:.1}%", predicted.confidence * 100.0);
            println!("Predicted winner: {}", outcome.winner_name);
            println!(
                "Predicted score: {} {:.0} - {:.0} {}",
                outcome.home_team_name,
                outcome.home_team_score,
                outcome.away_team_score,
                outcome.away_team_name
            );
            println!("Margin: {:.1}", outcome.point_difference.abs());
        }
        Command::ComparePlayers { player1, player2 } => {
            let predicted = client.predictions().compare_players(player1, player2).await?;
            let comparison = &predicted.payload;
            println!(
                "{:<12} {:>10} {:>10} {:>10}",
                "Statistic", comparison.player1_name, comparison.player2_name, "Diff"
            );
            render_comparison_row("Points", comparison.player1_stats.points, comparison.player2_stats.points);
            render_comparison_row("Rebounds", comparison.player1_stats.rebounds, comparison.player2_stats.rebounds);
            render_comparison_row("Assists", comparison.player1_stats.assists, comparison.player2_stats.assists);
            render_comparison_row("Steals", comparison.player1_stats.steals, comparison.player2_stats.steals);
            render_comparison_row("Blocks", comparison.player1_stats.blocks, comparison.player2_stats.blocks);
            println!("\n{}", comparison.summary);
        }
    }
    Ok(())
}

fn parse_page(page: u64) -> Result<PageNumber> {
    PageNumber::new(page).map_err(|err| eyre!("--page {page}: {err}"))
}

fn render_page_header<T>(page: &Page<T>) {
    println!(
        "page {} of {} ({} total)",
        page.current_page(),
        page.total_pages().max(1),
        page.total_count()
    );
}

fn render_comparison_row(label: &str, first: f64, second: f64) {
    println!(
        "{label:<12} {first:>10.1} {second:>10.1} {:>10.1}",
        first - second
    );
}
