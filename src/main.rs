use clap::Parser;
use doc_summarizer::{cli, client, config, error, picker, summarize};
use cli::{Cli, Commands};
use client::HttpTransport;
use config::Config;
use error::Result;
use std::process::ExitCode;

fn init_tracing(verbose: bool) {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| if verbose { "debug" } else { "warn" }.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let server_url = cli.server.clone().unwrap_or_else(|| config.server_url());

    match cli.command {
        Commands::Summarize { file, media_type, format, output } => {
            println!("📄 doc-summarizer - 文書要約\n");

            let path = match file {
                Some(path) => Some(path),
                None => picker::select_document_interactive(&std::env::current_dir()?)?,
            };

            let transport = HttpTransport::new(&server_url, &config.upload_path)?;
            let mut controller = summarize::CliController::new();
            summarize::select_path(&mut controller, path.as_deref(), media_type.as_deref())?;

            if let Some(selected) = controller.selected() {
                println!("{}", controller.file_label().text);
                println!("  送信先: {}\n", transport.upload_url()?);
                tracing::debug!(bytes = selected.payload.len(), "payload size");
            }

            let state = summarize::submit(&mut controller, &transport, true).await;

            // Error状態は SummaryFailed として返り、終了コード1になる
            let rendered = summarize::render(&state, format)?;
            println!("{}", rendered);
            if let Some(output) = output {
                std::fs::write(&output, &rendered)?;
                println!("\n✔ 要約を保存: {}", output.display());
            }
        }

        Commands::Health => {
            let transport = HttpTransport::new(&server_url, &config.upload_path)?;
            let health = transport.health().await?;
            println!("✔ {} ({})", health.status, server_url);
            if !health.message.is_empty() {
                println!("  {}", health.message);
            }
        }

        Commands::Config { set_server, set_upload_path, show } => {
            let mut config = config;
            let changed = set_server.is_some() || set_upload_path.is_some();

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                println!("✔ サーバーURLを設定しました");
            }

            if let Some(path) = set_upload_path {
                config.set_upload_path(path)?;
                println!("✔ アップロード先パスを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  サーバーURL: {}", config.server_url);
                println!("  アップロード先: {}", config.upload_path);
                if std::env::var(config::SERVER_ENV).is_ok() {
                    println!("  ({} により {} を使用)", config::SERVER_ENV, config.server_url());
                }
            }
        }
    }

    Ok(())
}
