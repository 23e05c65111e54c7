//! Plain-text rendering of the score sheet.
//!
//! Rows are combinations and columns are players, like a paper score sheet.
//! Column widths are measured in terminal cells so Cyrillic names line up.

use dicevoice_core::{Combination, ScoreSheet};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const TOTAL_LABEL: &str = "итого";
const EMPTY_CELL: &str = "·";

pub fn render_sheet(sheet: &ScoreSheet) -> String {
    let mut out = String::new();

    if sheet.players.is_empty() {
        out.push_str("No players yet. Add one with /add <name>.\n");
    } else {
        render_table(sheet, &mut out);
    }

    let _ = writeln!(
        out,
        "undo: {}  redo: {}  listening: {}",
        sheet.undo_depth,
        sheet.redo_depth,
        if sheet.listening { "yes" } else { "no" }
    );
    if let Some(raw) = &sheet.last_raw {
        let _ = write!(out, "last heard: \"{}\"", raw);
        match &sheet.last_resolved {
            Some(resolved) => {
                let _ = writeln!(out, "  last recorded: {}", resolved);
            }
            None => out.push('\n'),
        }
    }
    if let Some(notice) = &sheet.notice {
        let _ = writeln!(out, "! {}", notice);
    }
    out
}

fn render_table(sheet: &ScoreSheet, out: &mut String) {
    let label_width = Combination::ALL
        .iter()
        .map(|combination| combination.label().width())
        .chain(std::iter::once(TOTAL_LABEL.width()))
        .max()
        .unwrap_or(0);

    let columns: Vec<(String, Vec<String>, String)> = sheet
        .players
        .iter()
        .map(|row| {
            let cells = row
                .scores
                .iter()
                .map(|cell| {
                    cell.points
                        .map_or_else(|| EMPTY_CELL.to_string(), |points| points.to_string())
                })
                .collect();
            (row.name.clone(), cells, row.total.to_string())
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|(name, cells, total)| {
            cells
                .iter()
                .chain([name, total])
                .map(|text| text.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    out.push_str(&pad_right("", label_width));
    for ((name, _, _), width) in columns.iter().zip(&widths) {
        out.push_str(" | ");
        out.push_str(&pad_left(name, *width));
    }
    out.push('\n');

    let rule_width = label_width + widths.iter().map(|w| w + 3).sum::<usize>();
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for combination in Combination::ALL {
        out.push_str(&pad_right(combination.label(), label_width));
        for ((_, cells, _), width) in columns.iter().zip(&widths) {
            out.push_str(" | ");
            out.push_str(&pad_left(&cells[combination.index()], *width));
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    out.push_str(&pad_right(TOTAL_LABEL, label_width));
    for ((_, _, total), width) in columns.iter().zip(&widths) {
        out.push_str(" | ");
        out.push_str(&pad_left(total, *width));
    }
    out.push('\n');
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicevoice_core::{ChannelRecognizer, ScoreKeeper, Vocabulary};

    fn sheet_for(commands: &[&str], players: &[&str]) -> ScoreSheet {
        let mut keeper = ScoreKeeper::new(
            Vocabulary::builtin(),
            Box::new(ChannelRecognizer::new(true)),
        );
        for name in players {
            keeper.add_player(name).unwrap();
        }
        for command in commands {
            keeper.apply_command(command);
        }
        keeper.sheet()
    }

    #[test]
    fn test_empty_sheet_hint() {
        let rendered = render_sheet(&sheet_for(&[], &[]));
        assert!(rendered.contains("No players yet"));
        assert!(rendered.contains("undo: 0  redo: 0  listening: no"));
    }

    #[test]
    fn test_rows_align_by_display_width() {
        let rendered = render_sheet(&sheet_for(
            &["Дима каре 25", "Андрей единицы 3"],
            &["Дима", "Андрей"],
        ));
        let table_lines: Vec<&str> = rendered.lines().filter(|line| line.contains(" | ")).collect();
        // header + 12 combinations + total
        assert_eq!(table_lines.len(), 14);
        let width = table_lines[0].width();
        for line in &table_lines {
            assert_eq!(line.width(), width, "misaligned line: {line}");
        }
        assert!(rendered.contains("итого"));
        assert!(rendered.contains("25"));
    }

    #[test]
    fn test_feedback_lines() {
        let rendered = render_sheet(&sheet_for(&["Дима покер 50", "Вася покер 50"], &["Дима"]));
        assert!(rendered.contains("last heard: \"Вася покер 50\""));
        assert!(rendered.contains("last recorded: Дима покер 50"));
    }
}
