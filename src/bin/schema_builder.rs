use clap::Parser;
use colored::Colorize;
use schema_builder::client::{SchemaApiClient, DEFAULT_SERVER_URL};
use schema_builder::editor::command::HELP;
use schema_builder::editor::render::render_colored;
use schema_builder::editor::{EditorCommand, SchemaEditor};
use schema_builder::logging::{self, LogConfig};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive editor for composing a schema and saving it to the service.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the schema service
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut log_config = LogConfig {
        default_level: "WARN".to_string(),
        ..Default::default()
    };
    log_config.apply_overrides(|key| std::env::var(key).ok());
    logging::init_with_config(&log_config).ok();

    let Cli { server } = Cli::parse();
    let client = SchemaApiClient::new(server);
    let mut editor = SchemaEditor::new();

    println!("{}", "JSON Schema Builder".bold());
    println!("Saving to {} (type help for commands)", client.base_url());
    print_state(&editor);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ">".cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.trim_end().parse::<EditorCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };

        match command {
            EditorCommand::Quit => break,
            EditorCommand::Help => println!("{}", HELP),
            EditorCommand::Show => print_state(&editor),
            EditorCommand::List => match client.list_schemas().await {
                Ok(records) => {
                    for record in records {
                        println!("{}  {}  {}", record.id, record.title.bold(), record.schema_json);
                    }
                }
                Err(e) => alert(&e.to_string()),
            },
            EditorCommand::Submit => match editor.submit(&client).await {
                Ok(_) => {
                    alert("Schema saved successfully!");
                    print_state(&editor);
                }
                Err(e) => alert(&e.to_string()),
            },
            EditorCommand::Edit(action) => match action.apply(&mut editor) {
                Ok(()) => print_state(&editor),
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
        }
    }

    Ok(())
}

fn alert(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}

fn print_state(editor: &SchemaEditor) {
    println!();
    println!("{} {}", "Title:".bold(), editor.title());
    println!("{} {}", "Description:".bold(), editor.description());
    println!("{}", "Fields".bold());
    print!("{}", render_colored(editor.forest()));
    println!("{}", "JSON Preview".bold());
    println!("{}", editor.preview_pretty());
}
