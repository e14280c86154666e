use ontop_core::TargetWindow;

pub fn print_targets_table(targets: &[TargetWindow]) {
    let name_width = targets
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(7)
        .clamp(7, 30);
    let pid_width = 7;
    let window_width = 12;
    let title_width = targets
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 50);
    let topmost_width = 7;

    println!(
        "┌{}┬{}┬{}┬{}┬{}┐",
        "─".repeat(name_width + 2),
        "─".repeat(pid_width + 2),
        "─".repeat(window_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(topmost_width + 2),
    );
    println!(
        "│ {:<name_width$} │ {:<pid_width$} │ {:<window_width$} │ {:<title_width$} │ {:<topmost_width$} │",
        "Process", "PID", "Window", "Title", "On top",
    );
    println!(
        "├{}┼{}┼{}┼{}┼{}┤",
        "─".repeat(name_width + 2),
        "─".repeat(pid_width + 2),
        "─".repeat(window_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(topmost_width + 2),
    );

    for target in targets {
        println!(
            "│ {:<name_width$} │ {:<pid_width$} │ {:<window_width$} │ {:<title_width$} │ {:<topmost_width$} │",
            truncate(&target.name, name_width),
            target.pid,
            truncate(&target.window.to_string(), window_width),
            truncate(&target.title, title_width),
            if target.topmost { "yes" } else { "no" },
        );
    }

    println!(
        "└{}┴{}┴{}┴{}┴{}┘",
        "─".repeat(name_width + 2),
        "─".repeat(pid_width + 2),
        "─".repeat(window_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(topmost_width + 2),
    );
}

/// Truncate a string to a maximum display width, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
