//! Plain-text help table.

use super::{CyclicResolver, MoveSet};

/// Padding added after the widest cell of each column
pub const COLUMN_PADDING: usize = 2;

/// Header of the first column
pub const CORNER_LABEL: &str = "Move";

/// Help table listing the player's result for every pairing.
///
/// Rows are the committed (computer) move, columns the player's move, so
/// cell (r, c) is `resolve(c, r)`.
pub fn help_table(moves: &MoveSet) -> String {
    let matrix = CyclicResolver::outcome_matrix(moves);

    let mut table = Vec::with_capacity(moves.len() + 1);
    let mut header = vec![CORNER_LABEL.to_string()];
    header.extend(moves.iter().map(str::to_string));
    table.push(header);

    for (committed, label) in moves.iter().enumerate() {
        let mut row = vec![label.to_string()];
        for player in 0..moves.len() {
            let cell = matrix.get(player, committed).map(|o| o.as_str()).unwrap_or("");
            row.push(cell.to_string());
        }
        table.push(row);
    }

    format_table(&table)
}

/// Left-align every cell, padding each column to its widest cell plus
/// [`COLUMN_PADDING`]. Rows are joined with `\n`.
pub fn format_table<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.as_ref().chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<w$}", cell.as_ref(), w = width + COLUMN_PADDING))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_help_table() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let table = help_table(&moves);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Move      rock  paper  scissors  ");
        assert_eq!(lines[1], "rock      Draw  Win    Lose      ");
        assert_eq!(lines[2], "paper     Lose  Draw   Win       ");
        assert_eq!(lines[3], "scissors  Win   Lose   Draw      ");
    }

    #[test]
    fn test_rows_have_equal_width() {
        let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
        let table = help_table(&moves);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_format_table_padding() {
        let rows = vec![vec!["a", "bbb"], vec!["cc", "d"]];
        assert_eq!(format_table(&rows), "a   bbb  \ncc  d    ");
    }

    #[test]
    fn test_format_empty() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(format_table(&rows), "");
    }
}
