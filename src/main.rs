use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use visionestate::{annotate, cli, client, config, error, report, scanner};
use visionestate_common::{run_analysis, AnalysisSession, UploadedFile};
use cli::{Cli, Commands};
use config::Config;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "visionestate=debug,visionestate_common=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut config = Config::load().context("設定の読み込みに失敗")?;

    match cli.command {
        Commands::Analyze { folder, unit, endpoint, output, annotate: annotate_dir, recursive } => {
            println!("🏠 visionestate - 空間解析\n");

            let unit = unit.unwrap_or(config.default_unit);
            let endpoint = config.resolve_endpoint(endpoint.as_deref());

            // 1. 画像スキャン
            println!("[1/3] 写真をスキャン中...");
            let images = scanner::scan_folder(&folder, recursive)?;
            if images.is_empty() {
                return Err(error::VisionError::NoImagesFound(folder.display().to_string()).into());
            }
            println!("✔ {}枚の写真を検出\n", images.len());

            let mut session = AnalysisSession::<PathBuf>::new();
            session.set_unit(unit);
            session.add_files(
                images
                    .into_iter()
                    .map(|img| {
                        let preview = img.path.display().to_string();
                        UploadedFile::new(img.file_name, img.mime_type, preview, img.path)
                    })
                    .collect(),
            );

            // 2. 解析サービスに送信
            println!("[2/3] 解析中... ({})", endpoint);
            let client = client::HttpClient::new(endpoint, config.timeout_seconds)?;
            let pb = spinner(&session.trigger_label());
            let notification = run_analysis(&mut session, &client).await;
            pb.finish_and_clear();

            if notification.is_error() {
                anyhow::bail!("{}", notification.message);
            }
            println!("✔ {}\n", notification.message);

            let result = session
                .result()
                .cloned()
                .context("解析結果がありません")?;
            let names: Vec<String> = session.files().iter().map(|f| f.name.clone()).collect();
            let report = report::Report::new(names, unit, result);
            println!("{}", report.summary());

            // 3. 結果保存
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| folder.join("visionestate.json"));
            report.save(&output)?;
            println!("✔ 結果を保存: {}", output.display());

            if let Some(dir) = annotate_dir {
                let count = session.files().len();
                for (index, file) in session.files().iter().enumerate() {
                    let detections = report.result.detections_for_image(index, count);
                    let (path, drawn) = annotate::annotate_image(index, &file.payload, &detections, &dir)
                        .with_context(|| format!("{} への描画に失敗", file.name))?;
                    println!("✔ {}個の枠を描画: {}", drawn, path.display());
                }
            }

            println!("\n✅ 解析完了");
        }

        Commands::Report { path, unit } => {
            let mut report = report::Report::load(&path)
                .with_context(|| format!("{} の読み込みに失敗", path.display()))?;
            if let Some(unit) = unit {
                report.unit = unit;
            }
            println!("解析日時: {}\n", report.analyzed_at);
            println!("{}", report.summary());
        }

        Commands::Config { set_endpoint, set_unit, set_timeout, show } => {
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(&endpoint)?;
                changed = true;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(unit) = set_unit {
                config.default_unit = unit;
                changed = true;
                println!("✔ 表示単位を設定しました");
            }

            if let Some(secs) = set_timeout {
                config.timeout_seconds = (secs > 0).then_some(secs);
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.resolve_endpoint(None));
                println!("  表示単位: {}", config.default_unit);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(())
}
