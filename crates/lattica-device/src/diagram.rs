//! Text rendering of a device grid.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::topology::Topology;

/// Write a human-readable diagram of the topology: qubit labels joined by
/// `───` for horizontal edges and `│` for vertical edges.
pub(crate) fn write_grid(topology: &Topology, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if topology.is_empty() {
        return Ok(());
    }

    let qubits = topology.sorted();
    let min_row = qubits.iter().map(|q| q.row).min().unwrap_or(0);
    let max_row = qubits.iter().map(|q| q.row).max().unwrap_or(0);
    let min_col = qubits.iter().map(|q| q.col).min().unwrap_or(0);
    let max_col = qubits.iter().map(|q| q.col).max().unwrap_or(0);

    // Column widths sized to the widest label in each column.
    let mut widths: FxHashMap<i32, usize> = FxHashMap::default();
    for q in &qubits {
        let len = q.to_string().chars().count();
        let entry = widths.entry(q.col).or_default();
        *entry = (*entry).max(len);
    }

    let mut lines: Vec<String> = vec![];
    for row in min_row..=max_row {
        let mut label_line = String::new();
        let mut link_line = String::new();

        for col in min_col..=max_col {
            let width = widths.get(&col).copied().unwrap_or(0);
            let here = topology.at(row, col);
            let right = topology.at(row, col + 1);
            let below = topology.at(row + 1, col);

            match here {
                Some(q) => {
                    let label = q.to_string();
                    label_line.push_str(&label);
                    let pad = width - label.chars().count();
                    let filler = if right.is_some() { '─' } else { ' ' };
                    label_line.extend(std::iter::repeat_n(filler, pad));

                    if below.is_some() {
                        link_line.push('│');
                        link_line.extend(std::iter::repeat_n(' ', width.saturating_sub(1)));
                    } else {
                        link_line.extend(std::iter::repeat_n(' ', width));
                    }
                }
                None => {
                    label_line.extend(std::iter::repeat_n(' ', width));
                    link_line.extend(std::iter::repeat_n(' ', width));
                }
            }

            if col < max_col {
                let joined = here.is_some() && right.is_some();
                label_line.push_str(if joined { "───" } else { "   " });
                link_line.push_str("   ");
            }
        }

        lines.push(label_line.trim_end().to_owned());
        if row < max_row {
            lines.push(link_line.trim_end().to_owned());
        }
    }

    write!(f, "{}", lines.join("\n"))
}
