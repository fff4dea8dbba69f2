// ============================================================================
// 收录策略：所有排除规则的析取
// ============================================================================
//
// 一个路径只要命中任意一条排除规则就不进入上传包；
// 一条规则都没命中的路径默认收录（未知文件类型视为分析相关）。

use std::collections::BTreeSet;
use std::path::Path;

use crate::services::classifier::{
    is_compiler_artifact_folder, is_document, is_font, is_foreign_runtime_folder, is_image,
    is_localized_resource_folder, is_nested_archive, is_runtime_identifier_folder, is_video,
    is_web_root_folder, ExclusionCategory,
};

/// 判断路径命中的排除类别
///
/// 按规则的自然审阅顺序逐条检查，返回第一个命中的类别；
/// 规则之间是纯析取关系，顺序不影响"是否收录"的结果。
pub fn classify(path: &Path) -> Option<ExclusionCategory> {
    if is_compiler_artifact_folder(path) {
        Some(ExclusionCategory::CompilerArtifact)
    } else if is_foreign_runtime_folder(path) {
        Some(ExclusionCategory::ForeignRuntime)
    } else if is_runtime_identifier_folder(path) {
        Some(ExclusionCategory::RuntimeIdentifier)
    } else if is_web_root_folder(path) {
        Some(ExclusionCategory::WebRoot)
    } else if is_localized_resource_folder(path) {
        Some(ExclusionCategory::LocalizedResource)
    } else if is_image(path) {
        Some(ExclusionCategory::Image)
    } else if is_document(path) {
        Some(ExclusionCategory::Document)
    } else if is_video(path) {
        Some(ExclusionCategory::Video)
    } else if is_font(path) {
        Some(ExclusionCategory::Font)
    } else if is_nested_archive(path) {
        Some(ExclusionCategory::NestedArchive)
    } else {
        None
    }
}

/// 路径是否应收录进上传包
pub fn is_included(path: &Path) -> bool {
    classify(path).is_none()
}

/// 一次打包运行中实际触发过的排除类别集合
///
/// 谓词本身不做日志；打包遍历把命中的类别记到这里，
/// 遍历结束后按类别各输出一条提示，避免逐文件刷屏。
#[derive(Debug, Default)]
pub struct ExclusionNotices {
    triggered: BTreeSet<ExclusionCategory>,
}

impl ExclusionNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次类别命中（重复命中只记一次）
    pub fn record(&mut self, category: ExclusionCategory) {
        self.triggered.insert(category);
    }

    pub fn is_empty(&self) -> bool {
        self.triggered.is_empty()
    }

    /// 每个触发过的类别输出一条提示
    pub fn log_summary(&self) {
        for category in &self.triggered {
            log::info!("\t{}", category.notice());
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
