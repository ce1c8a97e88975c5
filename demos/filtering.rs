//! Demo: Filtering the Board
//!
//! This demo builds a board, adds a few tasks and narrows the visible view
//! with status, priority and search filters.
//!
//! Run with: cargo run --example filtering

use eyre::Result;
use taskboard::filter::Selection;
use taskboard::{Board, TaskDraft, TaskPriority, TaskStatus, models::parse_date};

fn main() -> Result<()> {
    println!("Taskboard Filtering Demo");
    println!("========================\n");

    let mut board = Board::seeded();

    println!("Adding tasks...\n");
    let drafts = vec![
        TaskDraft {
            title: "Write report".to_string(),
            description: "Quarterly numbers for the board meeting".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: parse_date("2025-06-01")?,
        },
        TaskDraft {
            title: "Buy milk".to_string(),
            description: "Semi-skimmed, two litres".to_string(),
            status: TaskStatus::Completed,
            priority: TaskPriority::Low,
            due_date: parse_date("2025-05-28")?,
        },
    ];
    for draft in drafts {
        let id = board.tasks.add(draft);
        println!("  added {}", id);
    }

    print_view("All tasks", &board);

    board.filter.set_status(Selection::Only(TaskStatus::Pending));
    print_view("Pending only", &board);

    board.filter.clear();
    board.filter.set_priority(Selection::Only(TaskPriority::High));
    print_view("High priority", &board);

    board.filter.clear();
    board.filter.set_search_term("REPORT");
    print_view("Search \"REPORT\"", &board);

    let milk = board.tasks.list().iter().find(|t| t.title == "Buy milk").map(|t| t.id.clone());
    if let Some(id) = milk {
        board.tasks.remove(&id);
        // Second removal is a no-op
        println!("\nremove again -> {}", board.tasks.remove(&id));
    }

    board.filter.clear();
    print_view("After removing milk", &board);

    Ok(())
}

fn print_view(label: &str, board: &Board) {
    let visible = board.visible();
    println!("\n{} ({}):", label, visible.len());
    for task in visible {
        println!(
            "  [{}] {} ({}, due {})",
            task.status.label(),
            task.title,
            task.priority.label(),
            task.due_date
        );
    }
}
