// ============================================================================
// 目录定位：在源码树中找到待打包的构建输出根目录
// ============================================================================
//
// 三段发现流程：bin/Debug 构建输出根 → 目标框架子目录 → publish 目录。
// 发现阶段是尽力而为：遍历中不可读的条目当作"没找到"跳过，未命中只降级
// 并记日志，不报错。最终根目录不可用时由打包阶段报错。

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::models::framework::TargetFramework;

/// 构建输出根目录的标志性路径段（`bin/Debug` 结尾）
const DEBUG_DIR_SUFFIX: &[&str] = &["bin", "Debug"];

/// 发布目录名
const PUBLISH_DIR: &str = "publish";

/// 目录定位结果
///
/// 三个字段各自可缺失；`effective_root` 按固定优先级给出最终打包根。
#[derive(Debug, Clone)]
pub struct ResolvedLayout {
    /// `bin/Debug` 构建输出根目录
    pub debug_root: Option<PathBuf>,
    /// 构建输出根下识别到的最新目标框架
    pub framework: Option<TargetFramework>,
    /// 发布目录（识别到框架时要求直接位于框架目录下）
    pub publish: Option<PathBuf>,
}

impl ResolvedLayout {
    /// 最终用作打包根的目录
    ///
    /// 优先级：publish 目录 > 构建输出根 + 框架目录 > 构建输出根。
    /// 三者皆无时返回空路径，由打包阶段以"打包失败"上报。
    /// 结果在一次运行中只计算一次，遍历过程中不再变化。
    pub fn effective_root(&self) -> PathBuf {
        if let Some(publish) = &self.publish {
            return publish.clone();
        }
        match (&self.debug_root, &self.framework) {
            (Some(root), Some(framework)) => root.join(framework.token()),
            (Some(root), None) => root.clone(),
            (None, _) => PathBuf::new(),
        }
    }
}

/// 在源目录下完成全部三段发现并输出发现日志
pub fn resolve_layout(source: &Path) -> ResolvedLayout {
    let debug_root = find_debug_root(source);
    match &debug_root {
        Some(root) => log::info!("找到 Debug 输出目录：{}", root.display()),
        // 没有 bin/Debug 是最常见的打包问题征兆，这里先行提示
        None => log::warn!("未找到 bin/Debug 目录，请确认项目已执行过 Debug 构建"),
    }

    let framework = debug_root.as_deref().and_then(find_framework);
    match &framework {
        Some(framework) => log::info!("识别到 .NET 目标框架：{}", framework),
        None => log::info!("Debug 输出下未识别到目标框架子目录"),
    }

    let publish = debug_root
        .as_deref()
        .and_then(|root| find_publish_dir(root, framework.as_ref()));
    if let Some(publish) = &publish {
        log::info!("找到 publish 发布目录：{}", publish.display());
    }

    ResolvedLayout {
        debug_root,
        framework,
        publish,
    }
}

/// 查找以 `bin/Debug` 结尾的目录
///
/// 多个候选（多子项目的解决方案）时取最深的一个；
/// 深度相同时保留遍历序中先出现的候选。
fn find_debug_root(source: &Path) -> Option<PathBuf> {
    let mut best: Option<(usize, PathBuf)> = None;

    for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        if !ends_with_segments(entry.path(), DEBUG_DIR_SUFFIX) {
            continue;
        }
        let depth = entry.depth();
        if best.as_ref().map_or(true, |(d, _)| depth > *d) {
            best = Some((depth, entry.path().to_path_buf()));
        }
    }

    best.map(|(_, path)| path)
}

/// 在构建输出根的直接子目录中识别目标框架，取最新版本
fn find_framework(debug_root: &Path) -> Option<TargetFramework> {
    WalkDir::new(debug_root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| e.file_name().to_str().and_then(TargetFramework::parse))
        .max()
}

/// 在构建输出根下查找 publish 目录
///
/// 识别到目标框架时要求 publish 直接位于该框架目录下；
/// 多个候选时同样取最深的一个。
fn find_publish_dir(debug_root: &Path, framework: Option<&TargetFramework>) -> Option<PathBuf> {
    let mut best: Option<(usize, PathBuf)> = None;

    for entry in WalkDir::new(debug_root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let is_candidate = match framework {
            Some(framework) => ends_with_segments(path, &[framework.token(), PUBLISH_DIR]),
            None => ends_with_segments(path, &[PUBLISH_DIR]),
        };
        if !is_candidate {
            continue;
        }
        let depth = entry.depth();
        if best.as_ref().map_or(true, |(d, _)| depth > *d) {
            best = Some((depth, path.to_path_buf()));
        }
    }

    best.map(|(_, path)| path)
}

/// 路径的末尾路径段是否依次等于 `suffix`
fn ends_with_segments(path: &Path, suffix: &[&str]) -> bool {
    let mut components = path.components().rev();
    suffix.iter().rev().all(|want| {
        matches!(components.next(), Some(Component::Normal(name)) if name == *want)
    })
}

// ============================================================================
// 单元测试
// ============================================================================
