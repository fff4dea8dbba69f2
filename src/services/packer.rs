// ============================================================================
// 打包服务：把解析出的构建输出根目录过滤打包为 ZIP
// 纯 Rust 函数，方便单元测试
// ============================================================================

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use time::format_description;
use time::OffsetDateTime;

use crate::models::dtos::PackResult;
use crate::services::policy::{classify, ExclusionNotices};
use crate::services::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::utils::error::{AppError, AppResult};

/// 计算输出 ZIP 的完整路径：`<target>/vc-output_<年>-<月缩写>-<日>.zip`
///
/// 日期取本地时区，取不到时区偏移时退回 UTC。
pub fn output_zip_path(target: &Path) -> AppResult<PathBuf> {
    let format = format_description::parse("[year]-[month repr:short]-[day]")
        .map_err(|e| AppError::PackError(format!("日期格式定义无效：{}", e)))?;
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let date = now
        .format(&format)
        .map_err(|e| AppError::PackError(format!("日期格式化失败：{}", e)))?;

    Ok(target.join(format!("{}_{}{}", OUTPUT_PREFIX, date, OUTPUT_EXTENSION)))
}

/// 把构建输出根目录过滤打包为 ZIP 文件
///
/// 遍历 `source_root` 下的所有条目，逐条询问收录策略：
/// 命中排除规则的条目整体跳过（不写占位条目），其余条目按相对路径写入。
/// 通过的目录写成尾带 `/` 的空条目，文件以 Deflated 压缩流式写入。
/// 发现阶段的宽容到此为止：打包遍历中的任何读写错误都中止整个过程上报，
/// 已写出的不完整 ZIP 不做清理。
pub fn pack_build_output(source_root: &Path, zip_path: &Path) -> AppResult<PackResult> {
    if !source_root.is_dir() {
        return Err(AppError::PackError(format!(
            "打包源目录不存在或不可读取：{}",
            source_root.display()
        )));
    }

    let file = std::fs::File::create(zip_path)
        .map_err(|e| AppError::PackError(format!("无法创建 ZIP 文件：{}", e)))?;
    let mut zip_writer = zip::ZipWriter::new(file);

    // 设置 ZIP 压缩选项（使用 Deflated 压缩）
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    let mut notices = ExclusionNotices::new();
    let mut entry_count = 0usize;
    let mut excluded_count = 0usize;

    for entry in walkdir::WalkDir::new(source_root) {
        let entry =
            entry.map_err(|e| AppError::PackError(format!("遍历目录失败：{}", e)))?;
        let path = entry.path();

        // 跳过一切以输出扩展名结尾的路径，包括本次正在生成的 ZIP 和
        // 此前运行留下的产物，避免把输出打进输出里
        if path.to_string_lossy().ends_with(OUTPUT_EXTENSION) {
            continue;
        }

        let relative = path
            .strip_prefix(source_root)
            .map_err(|e| AppError::PackError(format!("路径处理失败：{}", e)))?;

        // 跳过根目录本身
        if relative.as_os_str().is_empty() {
            continue;
        }

        // 收录策略作用在相对路径上：根目录之上的路径段不参与判定
        if let Some(category) = classify(relative) {
            notices.record(category);
            excluded_count += 1;
            continue;
        }

        // 统一使用正斜杠作为 ZIP 内路径分隔符
        let zip_entry_name = relative.to_string_lossy().replace('\\', "/");

        if path.is_dir() {
            zip_writer
                .add_directory(format!("{}/", zip_entry_name), options)
                .map_err(|e| AppError::PackError(format!("添加目录失败：{}", e)))?;
        } else {
            zip_writer
                .start_file(zip_entry_name.as_str(), options)
                .map_err(|e| AppError::PackError(format!("添加文件失败：{}", e)))?;
            // 流式写入：分块读取文件，避免大文件一次性加载到内存
            let mut file = std::fs::File::open(path)
                .map_err(|e| AppError::PackError(format!("读取文件失败：{}", e)))?;
            let mut buf = [0u8; 64 * 1024]; // 64KB 缓冲区
            loop {
                let n = file
                    .read(&mut buf)
                    .map_err(|e| AppError::PackError(format!("读取文件失败：{}", e)))?;
                if n == 0 {
                    break;
                }
                zip_writer
                    .write_all(&buf[..n])
                    .map_err(|e| AppError::PackError(format!("写入文件失败：{}", e)))?;
            }
        }
        entry_count += 1;
    }

    zip_writer
        .finish()
        .map_err(|e| AppError::PackError(format!("完成写入失败：{}", e)))?;

    notices.log_summary();

    Ok(PackResult {
        zip_path: zip_path.to_string_lossy().to_string(),
        entry_count,
        excluded_count,
    })
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_zip_entries(zip_path: &Path) -> Vec<String> {
        let file = fs::File::open(zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entries = Vec::new();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            entries.push(entry.name().to_string());
        }
        entries
    }

    fn read_zip_file_bytes(zip_path: &Path, name: &str) -> Vec<u8> {
        let file = fs::File::open(zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pack_basic_preserves_nesting_and_content() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("source");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("app.dll"), b"binary content").unwrap();
        fs::create_dir(src.join("deps")).unwrap();
        fs::write(src.join("deps").join("lib.dll"), b"nested").unwrap();

        let zip_path = dir.path().join("vc-output_2026-Aug-06.zip");
        let result = pack_build_output(&src, &zip_path).unwrap();
        assert!(zip_path.exists());
        assert_eq!(result.entry_count, 3); // app.dll + deps/ + deps/lib.dll

        let entries = read_zip_entries(&zip_path);
        assert!(entries.contains(&"app.dll".to_string()));
        assert!(entries.contains(&"deps/".to_string()));
        assert!(entries.contains(&"deps/lib.dll".to_string()));

        // 往返校验：解包内容与源文件逐字节一致
        assert_eq!(read_zip_file_bytes(&zip_path, "app.dll"), b"binary content");
        assert_eq!(read_zip_file_bytes(&zip_path, "deps/lib.dll"), b"nested");
    }

    #[test]
    fn test_pack_applies_exclusion_policy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("source");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("app.dll"), b"keep").unwrap();
        fs::write(src.join("app.pdb"), b"keep too").unwrap();
        fs::write(src.join("logo.png"), b"image").unwrap();
        fs::write(src.join("README.md"), b"doc").unwrap();
        fs::create_dir(src.join("wwwroot")).unwrap();
        fs::write(src.join("wwwroot").join("site.css"), b"css").unwrap();
        fs::create_dir(src.join("de")).unwrap();
        fs::write(src.join("de").join("app.resources.dll"), b"l10n").unwrap();

        let zip_path = dir.path().join("out.zip");
        let result = pack_build_output(&src, &zip_path).unwrap();

        let entries = read_zip_entries(&zip_path);
        assert!(entries.contains(&"app.dll".to_string()));
        // .pdb 不在任何排除列表中，默认收录
        assert!(entries.contains(&"app.pdb".to_string()));
        assert!(!entries.iter().any(|n| n.contains("logo.png")));
        assert!(!entries.iter().any(|n| n.contains("README.md")));
        assert!(!entries.iter().any(|n| n.contains("wwwroot")));
        assert!(!entries.iter().any(|n| n.contains("de/")));
        // 被排除的目录本身及其内部文件逐条计数：
        // logo.png、README.md、wwwroot/、wwwroot/site.css、de/、de/app.resources.dll
        assert_eq!(result.entry_count, 2);
        assert_eq!(result.excluded_count, 6);
    }

    #[test]
    fn test_pack_skips_own_output_extension() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("source");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("app.dll"), b"keep").unwrap();
        // 此前运行留下的产物不得再次进包
        fs::write(src.join("vc-output_2026-Jan-01.zip"), b"old run").unwrap();

        // 输出写到源目录内部，也不得把自己打进去
        let zip_path = src.join("vc-output_2026-Aug-06.zip");
        pack_build_output(&src, &zip_path).unwrap();

        let entries = read_zip_entries(&zip_path);
        assert_eq!(entries, vec!["app.dll".to_string()]);
    }

    #[test]
    fn test_pack_fails_on_missing_source_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nonexistent");
        let zip_path = dir.path().join("out.zip");

        let result = pack_build_output(&missing, &zip_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("打包源目录不存在"));
    }

    #[test]
    fn test_pack_fails_on_empty_resolved_root() {
        // 定位器一无所获时给出的空路径必须报打包错误，而非产出空 ZIP
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("out.zip");

        let result = pack_build_output(Path::new(""), &zip_path);
        assert!(result.is_err());
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_pack_fails_on_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("source");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("app.dll"), b"x").unwrap();

        // 输出目录不存在 ⇒ 创建 ZIP 失败
        let zip_path = dir.path().join("no-such-dir").join("out.zip");
        let result = pack_build_output(&src, &zip_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("无法创建 ZIP 文件"));
    }

    #[test]
    fn test_pack_resolved_publish_root_end_to_end() {
        use crate::services::locator;

        // 典型项目树：publish 下的产物进包，publish 之外的兄弟文件不进包
        let dir = TempDir::new().unwrap();
        let net6 = dir.path().join("App").join("bin").join("Debug").join("net6.0");
        let publish = net6.join("publish");
        fs::create_dir_all(&publish).unwrap();
        fs::write(net6.join("app.pdb"), b"outside publish").unwrap();
        fs::write(publish.join("app.dll"), b"app").unwrap();
        fs::write(publish.join("app.pdb"), b"symbols").unwrap();
        fs::write(publish.join("appsettings.xml"), b"<cfg/>").unwrap();

        let layout = locator::resolve_layout(dir.path());
        let root = layout.effective_root();
        assert_eq!(root, publish);

        let zip_path = dir.path().join("out.zip");
        pack_build_output(&root, &zip_path).unwrap();

        let entries = read_zip_entries(&zip_path);
        // 条目名以 publish 为基准，.pdb 未命中任何规则默认收录
        assert!(entries.contains(&"app.dll".to_string()));
        assert!(entries.contains(&"app.pdb".to_string()));
        // publish 之外的同名文件没有进包（包内只有一个 app.pdb）
        assert_eq!(entries.iter().filter(|n| n.contains("app.pdb")).count(), 1);
        // .xml 在文档排除列表中
        assert!(!entries.iter().any(|n| n.contains("appsettings.xml")));
    }

    #[test]
    fn test_output_zip_path_shape() {
        let target = Path::new("/tmp/some-target");
        let path = output_zip_path(target).unwrap();

        assert_eq!(path.parent(), Some(target));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("vc-output_"));
        assert!(name.ends_with(".zip"));
        // 形如 vc-output_2026-Aug-06.zip：日期段为 年-月缩写-日
        let date = name
            .trim_start_matches("vc-output_")
            .trim_end_matches(".zip");
        let parts: Vec<&str> = date.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 2);
    }
}
