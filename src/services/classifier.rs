// ============================================================================
// 路径分类器：识别对静态分析无用的文件/目录类别
// 纯谓词函数，无日志、无状态，方便单元测试
// ============================================================================
//
// 每个类别对应一个谓词：给定路径，判断它是否属于该类别。
// 目录类规则按"路径段"精确匹配（段等于目标名才算命中，不做子串匹配），
// 扩展名类规则按文件名后缀匹配，大小写敏感，列表按原样维护。

use std::path::{Component, Path};

/// 排除类别枚举
///
/// 每个变体对应一条排除规则，并携带一条提示文案，
/// 供打包结束后按类别汇总输出（见 `policy::ExclusionNotices`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExclusionCategory {
    /// 编译器中间产物目录（Roslyn）
    CompilerArtifact,
    /// 异平台运行时载荷目录（runtimes）
    ForeignRuntime,
    /// 运行时标识目录（win-x64 等）
    RuntimeIdentifier,
    /// 静态 Web 资源根目录（wwwroot）
    WebRoot,
    /// 本地化资源目录（de、zh-Hans 等语言文化码）
    LocalizedResource,
    /// 图片文件
    Image,
    /// 文档文件
    Document,
    /// 视频文件
    Video,
    /// 字体文件
    Font,
    /// 树内嵌套的压缩包
    NestedArchive,
}

impl ExclusionCategory {
    /// 该类别的一次性提示文案
    pub fn notice(&self) -> &'static str {
        match self {
            ExclusionCategory::CompilerArtifact => "忽略整个 `Roslyn` 目录",
            ExclusionCategory::ForeignRuntime => "忽略整个 `runtimes` 目录",
            ExclusionCategory::RuntimeIdentifier => "忽略运行时标识目录（如 `win-x64`）",
            ExclusionCategory::WebRoot => "忽略整个 `wwwroot` 目录",
            ExclusionCategory::LocalizedResource => "忽略本地化资源目录（如 `de`）",
            ExclusionCategory::Image => "忽略图片文件（如 `.jpg`）",
            ExclusionCategory::Document => "忽略文档文件（如 `.pdf`、`.docx`）",
            ExclusionCategory::Video => "忽略视频文件（如 `.mp4`）",
            ExclusionCategory::Font => "忽略字体文件（如 `.woff`）",
            ExclusionCategory::NestedArchive => "忽略树内嵌套的压缩包（如 `.tar.gz`）",
        }
    }
}

// ============================================================================
// 规则常量
// ============================================================================

/// 编译器中间产物目录名
const COMPILER_ARTIFACT_DIR: &str = "Roslyn";

/// 运行时载荷目录名（NuGet 还原的各平台原生二进制所在目录）
const FOREIGN_RUNTIME_DIR: &str = "runtimes";

/// 静态 Web 资源根目录名
const WEB_ROOT_DIR: &str = "wwwroot";

/// 运行时标识（RID）目录名列表
/// https://learn.microsoft.com/en-us/dotnet/core/rid-catalog
const RID_DIRS: &[&str] = &["win-x64", "win-x86"];

/// 本地化资源目录使用的语言文化码列表
/// https://lonewolfonline.net/list-net-culture-country-codes/
const LANGUAGE_DIRS: &[&str] = &[
    "cs", "da", "de", "es", "es-MX", "fa", "fi", "fr", "it", "ja", "ko", "nb", "nl", "pl", "pt",
    "pt-BR", "ro", "ru", "ru-ru", "sl", "sv", "tr", "uk", "zh-Hans", "zh-Hant",
];

/// 图片扩展名列表
const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".png", ".jpeg", ".gif", ".svg", ".bmp", ".ico", ".icns",
];

/// 文档扩展名列表
/// 参考 https://en.wikipedia.org/wiki/List_of_Microsoft_Office_filename_extensions
/// 另加 `.md` 与 `.xml`
#[rustfmt::skip]
const DOCUMENT_EXTENSIONS: &[&str] = &[
    ".pdf",
    ".md",
    ".doc", ".dot", ".wbk", ".docx", ".docm", ".dotx", ".dotm", ".docb", ".wll", ".wwl",
    ".xls", ".xlt", ".xlm", ".xll_", ".xla_", ".xla5", ".xla8",
    ".xlsx", ".xlsm", ".xltx", ".xltm",
    ".ppt", ".pot", ".pps", ".pptx", ".pptm", ".potx", ".potm",
    ".one", ".ecf",
    ".ACCDA", ".ACCDB", ".ACCDE", ".ACCDT", ".MDA", ".MDE", ".xml",
];

/// 视频扩展名列表
/// 参考 https://en.wikipedia.org/wiki/Video_file_format
#[rustfmt::skip]
const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".webm", ".mkv", ".flv", ".vob", ".ogv", ".drc", ".gifv", ".mng", ".avi", ".mov",
    ".qt", ".mts", ".wmv", ".amv", ".svi", ".m4v", ".mpg",
];

/// 字体扩展名列表
const FONT_EXTENSIONS: &[&str] = &[".ttf", ".otf", ".woff", ".woff2"];

/// 嵌套压缩包扩展名列表
const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".zip", ".jar", ".war", ".tar", ".tar.gz", ".tgz", ".gz", ".7z", ".rar",
];

// ============================================================================
// 类别谓词
// ============================================================================

/// 路径是否位于编译器中间产物目录（Roslyn）下
pub fn is_compiler_artifact_folder(path: &Path) -> bool {
    has_segment(path, COMPILER_ARTIFACT_DIR)
}

/// 路径是否位于运行时载荷目录（runtimes）下
pub fn is_foreign_runtime_folder(path: &Path) -> bool {
    has_segment(path, FOREIGN_RUNTIME_DIR)
}

/// 路径是否为运行时标识目录本身，或位于其下
pub fn is_runtime_identifier_folder(path: &Path) -> bool {
    RID_DIRS.iter().any(|rid| has_segment(path, rid))
}

/// 路径是否位于静态 Web 资源根目录（wwwroot）下
pub fn is_web_root_folder(path: &Path) -> bool {
    has_segment(path, WEB_ROOT_DIR)
}

/// 路径是否为本地化资源目录本身，或位于其下
pub fn is_localized_resource_folder(path: &Path) -> bool {
    LANGUAGE_DIRS.iter().any(|lang| has_segment(path, lang))
}

/// 文件名是否带图片扩展名
pub fn is_image(path: &Path) -> bool {
    has_extension_in(path, IMAGE_EXTENSIONS)
}

/// 文件名是否带文档扩展名
pub fn is_document(path: &Path) -> bool {
    has_extension_in(path, DOCUMENT_EXTENSIONS)
}

/// 文件名是否带视频扩展名
pub fn is_video(path: &Path) -> bool {
    has_extension_in(path, VIDEO_EXTENSIONS)
}

/// 文件名是否带字体扩展名
pub fn is_font(path: &Path) -> bool {
    has_extension_in(path, FONT_EXTENSIONS)
}

/// 文件名是否带压缩包扩展名（树内遇到的历史压缩包不进入上传包）
pub fn is_nested_archive(path: &Path) -> bool {
    has_extension_in(path, ARCHIVE_EXTENSIONS)
}

// ============================================================================
// 匹配辅助函数
// ============================================================================

/// 路径中是否存在与 `segment` 完全相等的路径段
///
/// 段级精确匹配：`de` 命中 `de` 和 `de/res.dll`，不会命中 `demo/`。
fn has_segment(path: &Path, segment: &str) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == segment))
}

/// 文件名是否以列表中任一扩展名结尾（大小写敏感）
fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| name.ends_with(ext))
}

// ============================================================================
// 单元测试
// ============================================================================
