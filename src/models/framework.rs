// ============================================================================
// .NET 目标框架标识（TFM）解析与比较
// ============================================================================
//
// 构建输出目录下的框架子目录名（如 net6.0、netcoreapp3.1、net48）来自一份
// 固定目录表。目录表本身不承诺"越靠前越新"，因此"取最新"不依赖表内顺序，
// 而是把 token 解析成 (家族, 数值版本) 键后数值比较。

use regex::Regex;

/// 已知目标框架目录名总表
///
/// 取自 https://learn.microsoft.com/en-us/dotnet/standard/frameworks 。
/// 只有出现在表内的目录名才会被识别为框架目录。
pub const FRAMEWORK_CATALOG: &[&str] = &[
    "net7.0",
    "net6.0",
    "net5.0",
    "netcoreapp3.1",
    "netcoreapp3.0",
    "netcoreapp2.2",
    "netcoreapp2.1",
    "netcoreapp2.0",
    "netcoreapp1.1",
    "netcoreapp1.0",
    "netstandard2.1",
    "netstandard2.0",
    "netstandard1.6",
    "netstandard1.5",
    "netstandard1.4",
    "netstandard1.3",
    "netstandard1.2",
    "netstandard1.1",
    "netstandard1.0",
    "net48",
    "net472",
    "net471",
    "net47",
    "net462",
    "net461",
    "net46",
    "net452",
    "net451",
    "net45",
    "net403",
    "net40",
    "net35",
    "net20",
    "net11",
];

/// 框架家族，按"新旧程度"升序排列（派生 Ord 直接给出家族优先级）
///
/// 跨家族比较时家族优先：现代 .NET（net5.0+）新于 .NET Core，
/// .NET Core 新于 .NET Standard，.NET Framework（net4x 等无点号写法）最旧。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrameworkFamily {
    NetFramework,
    NetStandard,
    NetCoreApp,
    Net,
}

/// 一个已解析的目标框架目录名
///
/// 字段顺序即派生 Ord 的比较顺序：先比家族，再比数值版本。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetFramework {
    family: FrameworkFamily,
    version: (u8, u8, u8),
    token: String,
}

impl TargetFramework {
    /// 把目录名解析为可比较的目标框架
    ///
    /// 不在 [`FRAMEWORK_CATALOG`] 中的名字一律返回 `None`。
    pub fn parse(name: &str) -> Option<Self> {
        if !FRAMEWORK_CATALOG.contains(&name) {
            return None;
        }

        let re = Regex::new(r"^(netstandard|netcoreapp|net)(\d+)(?:\.(\d+))?$").ok()?;
        let caps = re.captures(name)?;

        let prefix = caps.get(1)?.as_str();
        let digits = caps.get(2)?.as_str();
        let dotted_minor = caps.get(3).map(|m| m.as_str());

        let (family, version) = match (prefix, dotted_minor) {
            ("netstandard", Some(minor)) => (
                FrameworkFamily::NetStandard,
                (digits.parse().ok()?, minor.parse().ok()?, 0),
            ),
            ("netcoreapp", Some(minor)) => (
                FrameworkFamily::NetCoreApp,
                (digits.parse().ok()?, minor.parse().ok()?, 0),
            ),
            // net5.0 起的现代 .NET 写法带点号
            ("net", Some(minor)) => (
                FrameworkFamily::Net,
                (digits.parse().ok()?, minor.parse().ok()?, 0),
            ),
            // 无点号的 .NET Framework 写法：net48 = 4.8，net472 = 4.7.2
            ("net", None) => (FrameworkFamily::NetFramework, parse_compact_digits(digits)?),
            _ => return None,
        };

        Some(TargetFramework {
            family,
            version,
            token: name.to_string(),
        })
    }

    /// 原始目录名（用于拼接路径和日志输出）
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

/// 把 "48"、"472" 这类紧凑数字串展开为 (主, 次, 修订) 版本号
fn parse_compact_digits(digits: &str) -> Option<(u8, u8, u8)> {
    let mut parts = digits.chars().map(|c| c.to_digit(10).map(|d| d as u8));
    let major = parts.next()??;
    let minor = parts.next().flatten().unwrap_or(0);
    let patch = parts.next().flatten().unwrap_or(0);
    Some((major, minor, patch))
}

// ============================================================================
// 单元测试
// ============================================================================
