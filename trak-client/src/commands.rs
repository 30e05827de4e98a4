use crate::{client::TrakClient, table::print_task_table, util::Compact};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use trak_types::{CreateTask, TaskId, TaskPriority, UpdateTask};

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[clap(long, help = "Task title")]
    title: String,

    #[clap(long, help = "Task description")]
    description: Option<String>,

    #[clap(long, help = "Task priority: low, medium or high")]
    priority: TaskPriority,

    #[clap(long, help = "Task deadline, RFC 3339")]
    deadline: Option<DateTime<Utc>>,
}

pub async fn create_command(args: CreateArgs, client: TrakClient) -> anyhow::Result<()> {
    let task = client
        .create(&CreateTask {
            title: args.title,
            description: args.description,
            priority: args.priority,
            deadline: args.deadline,
        })
        .await?;

    println!(
        "{} Created task {}",
        "✓".green().bold(),
        task.id.to_string().bright_black().italic()
    );

    Ok(())
}

pub async fn list_command(client: TrakClient) -> anyhow::Result<()> {
    let mut tasks = client.list().await?;

    tasks.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id)));

    print_task_table(tasks);
    Ok(())
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[clap(required = true, help = "Tasks to show")]
    ids: Vec<TaskId>,
}

pub async fn show_command(args: ShowArgs, client: TrakClient) -> anyhow::Result<()> {
    let tasks = futures::future::join_all(args.ids.compact().into_iter().map(|id| client.find(id)))
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    print_task_table(tasks);
    Ok(())
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[clap(required = true, help = "Task to update")]
    id: TaskId,

    #[clap(long, help = "New description")]
    description: Option<String>,

    #[clap(long, help = "New priority: low, medium or high")]
    priority: Option<TaskPriority>,

    #[clap(long, help = "New deadline, RFC 3339")]
    deadline: Option<DateTime<Utc>>,
}

pub async fn update_command(args: UpdateArgs, client: TrakClient) -> anyhow::Result<()> {
    let task = client
        .update(
            args.id,
            &UpdateTask {
                description: args.description,
                priority: args.priority,
                deadline: args.deadline,
            },
        )
        .await?;

    println!(
        "{} Updated task {}",
        "✓".green().bold(),
        task.id.to_string().bright_black().italic()
    );

    Ok(())
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[clap(required = true, help = "Tasks to delete")]
    ids: Vec<TaskId>,
}

pub async fn delete_command(args: DeleteArgs, client: TrakClient) -> anyhow::Result<()> {
    let client = &client;
    let results = futures::future::join_all(
        args.ids
            .compact()
            .into_iter()
            .map(|id| async move { client.delete(id).await.map(|_| id) }),
    )
    .await;

    for result in results {
        match result {
            Ok(id) => println!(
                "{} Deleted task {}",
                "✓".green().bold(),
                id.to_string().bright_black().italic()
            ),
            Err(error) => println!("{} {}", "✖".red().bold(), error),
        }
    }

    Ok(())
}
