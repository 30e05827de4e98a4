use tabled::{
    builder::Builder,
    settings::{object::Rows, Color, Style},
};

use trak_types::Task;

pub fn print_task_table(tasks: Vec<Task>) {
    let mut builder = Builder::new();
    builder.push_record([
        "ID",
        "Title",
        "Priority",
        "Status",
        "Description",
        "Deadline",
        "Created",
        "Updated",
    ]);

    for task in tasks {
        builder.push_record([
            task.id.to_string(),
            task.title,
            task.priority.to_string(),
            task.status.to_string(),
            task.description.unwrap_or_default(),
            task.deadline
                .map(|deadline| deadline.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "none".into()),
            task.created_at.format("%Y-%m-%d %H:%M").to_string(),
            task.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .modify(Rows::first(), Color::FG_WHITE | Color::BOLD);
    println!("{table}");
}
