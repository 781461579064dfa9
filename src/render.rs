//! Grid table rendering for `list`.

use crate::task::Task;

const HEADERS: [&str; 5] = ["description", "id", "status", "createdAt", "updatedAt"];
const ALIGNS: [Align; 5] = [Align::Left, Align::Left, Align::Center, Align::Left, Align::Right];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Renders tasks as a bordered grid, one row per task, in the given order.
///
/// ```text
/// +-------------+----+--------+-----------------------------+-----------------------------+
/// | description | id | status | createdAt                   |                   updatedAt |
/// +=============+====+========+=============================+=============================+
/// | buy milk    | 1  |  todo  | 2024-06-15T10:30:00.000000Z | 2024-06-15T10:30:00.000000Z |
/// +-------------+----+--------+-----------------------------+-----------------------------+
/// ```
#[must_use]
pub fn task_table(tasks: &[Task]) -> String {
    let rows: Vec<[String; 5]> = tasks.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&rule(&widths, '-'));
    out.push_str(&line(&HEADERS.map(String::from), &widths));
    out.push_str(&rule(&widths, '='));
    for cells in &rows {
        out.push_str(&line(cells, &widths));
        out.push_str(&rule(&widths, '-'));
    }
    out
}

fn row(task: &Task) -> [String; 5] {
    [
        task.description.clone(),
        task.id.to_string(),
        task.status.to_string(),
        task.created_at_display(),
        task.updated_at_display(),
    ]
}

fn rule(widths: &[usize; 5], fill: char) -> String {
    let mut out = String::from("+");
    for &width in widths {
        out.extend(std::iter::repeat(fill).take(width + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut out = String::from("|");
    for ((cell, &width), align) in cells.iter().zip(widths).zip(ALIGNS) {
        out.push(' ');
        out.push_str(&pad(cell, width, align));
        out.push_str(" |");
    }
    out.push('\n');
    out
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(cell.chars().count());
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{cell}{}", " ".repeat(left), " ".repeat(right))
}
