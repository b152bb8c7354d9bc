use clap::Parser;
use roster::core::PageView;
use roster::utils::{logger, validation::Validate};
use roster::{CliConfig, HttpRecordSource, LocalStorage, TableSession};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  show              render the current page
  next / prev       move between pages
  import <file>     replace the table with rows from a .csv file
  export-csv        stage a CSV artifact of the full table
  export-xlsx       stage an xlsx artifact of the full table
  download          save the staged artifact to the download directory
  help              show this text
  quit              exit";

fn render(view: &PageView<'_>) {
    println!(
        "{:<30} {:<25} {:<12}",
        "Name", "Mobile Number", "Date of Birth"
    );
    println!("{}", "-".repeat(69));
    for row in view.rows {
        println!(
            "{:<30} {:<25} {:<12}",
            row.name, row.mobile_number, row.dob
        );
    }
    println!(
        "Page {} of {} ({} records)",
        view.current_page, view.total_pages, view.total_records
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roster session");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = HttpRecordSource::new(config.api_endpoint.clone());
    let store = LocalStorage::new(".".to_string());
    let mut session = TableSession::new(source, store, config);

    // One fetch at startup; a failure leaves the (empty) table usable.
    match session.refresh().await {
        Ok(count) => tracing::info!("📥 Loaded {} records", count),
        Err(e) => eprintln!("❌ Initial fetch failed: {}", e),
    }
    render(&session.page_view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).unwrap_or_default();

        match command {
            "" => {}
            "show" => render(&session.page_view()),
            "next" => {
                if session.next_page() {
                    render(&session.page_view());
                } else {
                    println!("Already on the last page");
                }
            }
            "prev" => {
                if session.previous_page() {
                    render(&session.page_view());
                } else {
                    println!("Already on the first page");
                }
            }
            "import" => {
                if argument.is_empty() {
                    eprintln!("❌ Usage: import <file.csv>");
                    continue;
                }
                match session.import_csv(argument).await {
                    Ok(count) => {
                        println!("✅ Imported {} records from {}", count, argument);
                        render(&session.page_view());
                    }
                    Err(e) => eprintln!("❌ Import failed: {}", e),
                }
            }
            "export-csv" => match session.export_csv() {
                Ok(size) => println!("✅ Staged CSV artifact ({} bytes); run `download` to save", size),
                Err(e) => eprintln!("❌ Export failed: {}", e),
            },
            "export-xlsx" => match session.export_xlsx() {
                Ok(size) => println!("✅ Staged xlsx artifact ({} bytes); run `download` to save", size),
                Err(e) => eprintln!("❌ Export failed: {}", e),
            },
            "download" => match session.download().await {
                Ok(Some(path)) => println!("📁 Saved to {}", path),
                Ok(None) => println!("Nothing staged; run `export-csv` or `export-xlsx` first"),
                Err(e) => eprintln!("❌ Download failed: {}", e),
            },
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try `help`)", other),
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
