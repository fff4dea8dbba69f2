// ============================================================================
// CLI 入口：解析参数 → 定位构建输出 → 过滤打包 → 输出结果
// ============================================================================

use std::path::PathBuf;

use clap::Parser;

use dotnet_scan_packager::logging;
use dotnet_scan_packager::services::{locator, packer};
use dotnet_scan_packager::utils::error::{AppError, AppResult};

#[derive(Parser, Debug)]
#[command(
    name = "dotnet-scan-packager",
    version,
    about = "把 .NET 构建产物过滤打包为可上传静态分析平台的 ZIP"
)]
struct Cli {
    /// 待打包的 .NET 项目根目录
    #[arg(short, long)]
    source: PathBuf,

    /// 输出 ZIP 的存放目录
    #[arg(short, long, default_value = ".")]
    target: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    log::info!("=================================================");
    log::info!("  .NET 构建产物打包工具（静态分析上传用）");
    log::info!("=================================================");
    log::info!("参数：");
    log::info!("\t`--source` 待打包目录：{}", cli.source.display());
    log::info!("\t`--target` 输出目录：{}", cli.target.display());

    if let Err(err) = run(&cli) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    if !cli.source.is_dir() {
        return Err(AppError::ValidationError(format!(
            "`--source` 路径不存在或不是目录：{}",
            cli.source.display()
        )));
    }

    let zip_path = packer::output_zip_path(&cli.target)?;

    let layout = locator::resolve_layout(&cli.source);
    let source_root = layout.effective_root();

    log::info!("开始打包（按规则跳过分析无关的文件）…");
    let result = packer::pack_build_output(&source_root, &zip_path)?;

    log::info!(
        "打包完成：写入 {} 个条目，排除 {} 个条目",
        result.entry_count,
        result.excluded_count
    );
    log::info!("压缩包已写出：{}", result.zip_path);
    log::info!("请将该压缩包上传至静态分析平台");

    Ok(())
}
