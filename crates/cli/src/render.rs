//! Terminal table output for query results.
//!
//! Layout is computed on plain text first; styling (bold titles, colored
//! vote counts) is applied to already padded cells so ANSI codes never
//! affect column widths.

use colored::Colorize;
use data_loader::Movie;

/// Shown for any missing value
pub const PLACEHOLDER: &str = "-";

/// Display tier for a vote count. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTier {
    /// Fewer than 2,000 votes: the rating is dubious
    Low,
    /// 2,000 up to 4,999 votes
    Medium,
    /// 5,000 votes or more
    High,
}

impl VoteTier {
    pub fn from_votes(votes: u64) -> Self {
        match votes {
            0..2_000 => VoteTier::Low,
            2_000..5_000 => VoteTier::Medium,
            _ => VoteTier::High,
        }
    }
}

/// "Action,Crime" -> "Action, Crime"
pub fn format_genres(genres: &str) -> String {
    genres.replace(',', ", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const HEADERS: [(&str, Align); 5] = [
    ("", Align::Right),
    ("Title", Align::Left),
    ("Rating", Align::Right),
    ("Num of votes", Align::Right),
    ("Genres", Align::Left),
];

const TITLE_COL: usize = 1;
const VOTES_COL: usize = 3;

/// One formatted result row
struct Row {
    cells: [String; 5],
    tier: Option<VoteTier>,
}

impl Row {
    fn new(rank: usize, movie: &Movie) -> Self {
        let or_placeholder = |value: Option<String>| value.unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            cells: [
                rank.to_string(),
                or_placeholder(movie.title.clone()),
                or_placeholder(movie.rating.map(|r| format!("{:.1}", r))),
                or_placeholder(movie.num_votes.map(|v| v.to_string())),
                or_placeholder(movie.genres.as_deref().map(format_genres)),
            ],
            tier: movie.num_votes.map(VoteTier::from_votes),
        }
    }
}

/// Renders movies as a boxed table with one separator line between rows
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    styled: bool,
}

impl TableRenderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Render `movies` under `title`. An empty slice gives a header-only table.
    pub fn render(&self, title: &str, movies: &[&Movie]) -> String {
        let rows: Vec<Row> = movies
            .iter()
            .enumerate()
            .map(|(idx, movie)| Row::new(idx + 1, movie))
            .collect();

        let mut widths: Vec<usize> = HEADERS.iter().map(|(h, _)| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let total_width: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let mut out = Vec::new();

        let title_padding = total_width.saturating_sub(title.chars().count()) / 2;
        let centered = format!("{}{}", " ".repeat(title_padding), title);
        out.push(if self.styled {
            centered.italic().to_string()
        } else {
            centered
        });

        out.push(border(&widths, '┌', '┬', '┐'));
        let header_cells: Vec<String> = HEADERS
            .iter()
            .zip(&widths)
            .map(|((header, align), width)| {
                let cell = pad(header, *width, *align);
                if self.styled {
                    cell.bold().to_string()
                } else {
                    cell
                }
            })
            .collect();
        out.push(line(&header_cells));
        out.push(border(&widths, '├', '┼', '┤'));

        for (idx, row) in rows.iter().enumerate() {
            if idx > 0 {
                out.push(border(&widths, '├', '┼', '┤'));
            }
            let cells: Vec<String> = row
                .cells
                .iter()
                .zip(HEADERS.iter().zip(&widths))
                .enumerate()
                .map(|(col, (cell, ((_, align), width)))| {
                    self.style(col, pad(cell, *width, *align), row.tier)
                })
                .collect();
            out.push(line(&cells));
        }

        out.push(border(&widths, '└', '┴', '┘'));
        out.join("\n")
    }

    fn style(&self, col: usize, cell: String, tier: Option<VoteTier>) -> String {
        if !self.styled {
            return cell;
        }
        match (col, tier) {
            (TITLE_COL, _) => cell.bold().to_string(),
            (VOTES_COL, Some(VoteTier::Low)) => cell.red().to_string(),
            (VOTES_COL, Some(VoteTier::Medium)) => cell.yellow().to_string(),
            (VOTES_COL, Some(VoteTier::High)) => cell.green().to_string(),
            _ => cell,
        }
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn line(cells: &[String]) -> String {
    format!("│ {} │", cells.join(" │ "))
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}
