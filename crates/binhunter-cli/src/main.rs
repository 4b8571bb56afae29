use anyhow::{Context, Result};
use binhunter_core::{load_config, parse_threads, resolve_root, scan, FileConfig, ScanOptions, ScanResult};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "binhunter", version, about = "递归扫描 EXE/DLL 并计算 MD5 与 SHA-256")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描目录并输出每个文件的哈希与汇总
    Scan {
        /// 扫描根；缺省依次取 BINHUNTER_ROOT、配置文件、平台默认根
        root: Option<PathBuf>,

        /// 线程数（"auto"=CPU 核心数，1=串行）；缺省取配置文件，再缺省为 auto
        #[arg(long)]
        threads: Option<String>,

        /// 输出格式：text（逐行进度 + 汇总）或 json（结束后输出完整结果）
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// 配置文件路径（TOML）
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { root, threads, format, config } => {
            let file_cfg = match &config {
                Some(path) => load_config(path).context("load config")?,
                None => FileConfig::default(),
            };

            let root = resolve_root(root, file_cfg.root, |k| std::env::var(k).ok());
            // 命令行显式给出时覆盖配置文件
            let threads = match threads {
                Some(t) => parse_threads(&t),
                None => file_cfg.threads,
            };
            info!(?root, ?config, format = %format, "resolved scan settings");

            let opts = ScanOptions::new(&root).with_threads(threads);
            let stdout = io::stdout();
            let mut out = stdout.lock();

            if format == "json" {
                let result = scan(&opts, &mut io::sink())
                    .with_context(|| format!("scan failed: {}", root.display()))?;
                write_json(&mut out, &result)?;
            } else {
                scan(&opts, &mut out).with_context(|| format!("scan failed: {}", root.display()))?;
            }
            out.flush().context("flush stdout")?;
        }
    }

    Ok(())
}

/// 以 pretty JSON 输出完整扫描结果
fn write_json(out: &mut dyn Write, result: &ScanResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result).context("write json")?;
    writeln!(out).context("write json")?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写 stderr，stdout 只留给扫描结果
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
