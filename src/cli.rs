use clap::{Parser, Subcommand};
use std::path::PathBuf;
use visionestate_common::DisplayUnit;

#[derive(Parser)]
#[command(name = "visionestate")]
#[command(about = "部屋写真から寸法と検出結果を取得するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダを解析サービスに送信して結果を表示
    Analyze {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 表示単位 (m/cm/in/ft、省略時は設定値)
        #[arg(short, long)]
        unit: Option<DisplayUnit>,

        /// 解析サービスのURL（設定・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/visionestate.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 検出ボックスを描いた画像の出力先
        #[arg(short, long)]
        annotate: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 保存済みの解析結果を再表示
    Report {
        /// 結果JSONファイルのパス
        #[arg(required = true)]
        path: PathBuf,

        /// 表示単位 (m/cm/in/ft、省略時は保存時の単位)
        #[arg(short, long)]
        unit: Option<DisplayUnit>,
    },

    /// 設定を表示/編集
    Config {
        /// 解析サービスのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 既定の表示単位を設定
        #[arg(long)]
        set_unit: Option<DisplayUnit>,

        /// タイムアウト秒数を設定（0で無効）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
