//! Localization support
//!
//! UI strings are addressed by a closed [`MessageKey`] enum and resolved
//! against per-language tables. Both tables are exhaustive `match` arms, so
//! a missing translation is a compile error rather than a runtime fallback.
//!
//! The language is always passed explicitly; there is no ambient locale
//! singleton. Derivation helpers that need locale-aware phrasing (the cron
//! description) take a [`Language`] parameter directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese (default)
    #[default]
    Zh,
    /// English
    En,
}

impl Language {
    /// All supported languages, in selector order
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    /// Native display name for the language selector
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Zh => write!(f, "zh"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Language::Zh),
            "en" | "en-us" | "english" => Ok(Language::En),
            other => Err(format!("unsupported language: '{}'", other)),
        }
    }
}

/// Closed set of translatable UI messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    // Navigation
    NavTitle,
    NavHome,
    NavCron,
    NavRegex,
    NavDocs,

    // Home page
    HomeTitle,
    HomeSubtitle,
    HomeCronTitle,
    HomeCronDesc,
    HomeRegexTitle,
    HomeRegexDesc,
    HomeOpen,

    // Documentation page
    DocsTitle,
    DocsDesc,

    // Cron generator
    CronTitle,
    CronSubtitle,
    CronBuilderHeading,
    CronTemplatesHeading,
    CronPreviewHeading,
    CronExpressionLabel,
    CronDescriptionLabel,
    CronFormatHeading,
    CronFormatFields,
    CronSpecialChars,
    FieldMinute,
    FieldHour,
    FieldDay,
    FieldMonth,
    FieldWeekday,
    ResetButton,

    // Regex generator
    RegexTitle,
    RegexSubtitle,
    RegexTemplatesHeading,
    RegexCustomHeading,
    RegexPatternLabel,
    RegexPatternPlaceholder,
    RegexActiveLabel,
    RegexNoneSelected,
    RegexInvalidInline,
    RegexInvalidBanner,
    RegexEmptyHint,
    RegexSyntaxHeading,
    RegexTestHeading,
    RegexTestLabel,
    RegexTestPlaceholder,
    RegexResultsLabel,
    RegexMatchesPrefix,
    RegexSummary,
    ExampleLabel,
    ClearButton,

    // Shared
    CopyTooltip,

    // Toasts
    ToastCopied,
    ToastCopyFailed,
    ToastNothingToCopy,
    ToastTemplateLoaded,
    ToastReset,
    ToastCleared,
}

/// Look up a message in the given language
pub fn tr(lang: Language, key: MessageKey) -> &'static str {
    match lang {
        Language::Zh => zh(key),
        Language::En => en(key),
    }
}

/// Look up a message and substitute `{name}`-style placeholders
pub fn tr_with(lang: Language, key: MessageKey, args: &[(&str, &str)]) -> String {
    let mut text = tr(lang, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

fn zh(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        NavTitle => "开发者工具箱",
        NavHome => "首页",
        NavCron => "Cron生成器",
        NavRegex => "正则生成器",
        NavDocs => "文档",

        HomeTitle => "开发者工具箱",
        HomeSubtitle => "简洁实用的桌面工具，为开发者和技术人员提供高效的表达式生成服务",
        HomeCronTitle => "Cron表达式生成器",
        HomeCronDesc => "通过可视化界面轻松生成cron表达式，支持常用模板和自定义设置，实时预览执行时间。",
        HomeRegexTitle => "正则表达式生成器",
        HomeRegexDesc => "提供常用正则表达式模板，支持自定义构建和实时测试验证，让正则表达式编写变得简单。",
        HomeOpen => "打开",

        DocsTitle => "项目文档",
        DocsDesc => "查看完整的项目介绍和使用说明",

        CronTitle => "Cron表达式生成器",
        CronSubtitle => "通过可视化界面轻松生成cron表达式，支持实时预览和常用模板",
        CronBuilderHeading => "可视化构建器",
        CronTemplatesHeading => "常用模板",
        CronPreviewHeading => "表达式预览",
        CronExpressionLabel => "Cron表达式",
        CronDescriptionLabel => "执行说明",
        CronFormatHeading => "Cron格式说明",
        CronFormatFields => "分钟 小时 日期 月份 星期",
        CronSpecialChars => "特殊字符",
        FieldMinute => "分钟 (0-59)",
        FieldHour => "小时 (0-23)",
        FieldDay => "日期 (1-31)",
        FieldMonth => "月份 (1-12)",
        FieldWeekday => "星期 (0-6, 0=周日)",
        ResetButton => "重置",

        RegexTitle => "正则表达式生成器",
        RegexSubtitle => "提供常用正则表达式模板，支持自定义构建和实时测试验证",
        RegexTemplatesHeading => "常用模板",
        RegexCustomHeading => "自定义构建",
        RegexPatternLabel => "正则表达式",
        RegexPatternPlaceholder => "输入自定义正则表达式...",
        RegexActiveLabel => "当前使用的表达式",
        RegexNoneSelected => "未选择",
        RegexInvalidInline => "正则表达式格式错误",
        RegexInvalidBanner => "正则表达式无效，请检查语法",
        RegexEmptyHint => "请选择模板或输入自定义正则表达式",
        RegexSyntaxHeading => "常用语法",
        RegexTestHeading => "测试验证",
        RegexTestLabel => "测试文本 (每行一个)",
        RegexTestPlaceholder => "输入要测试的文本，每行一个...",
        RegexResultsLabel => "测试结果",
        RegexMatchesPrefix => "匹配: ",
        RegexSummary => "总计: {total} 个测试，{matched} 个匹配，{unmatched} 个不匹配",
        ExampleLabel => "示例",
        ClearButton => "清空",

        CopyTooltip => "复制到剪贴板",

        ToastCopied => "已复制到剪贴板",
        ToastCopyFailed => "复制失败，请手动复制",
        ToastNothingToCopy => "没有可复制的内容",
        ToastTemplateLoaded => "已加载模板：{name}",
        ToastReset => "已重置配置",
        ToastCleared => "已清空所有内容",
    }
}

fn en(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        NavTitle => "Developer Toolbox",
        NavHome => "Home",
        NavCron => "Cron Generator",
        NavRegex => "Regex Generator",
        NavDocs => "Documentation",

        HomeTitle => "Developer Toolbox",
        HomeSubtitle => "Concise and practical desktop tools providing efficient expression generation for developers",
        HomeCronTitle => "Cron Expression Generator",
        HomeCronDesc => "Easily generate cron expressions through a visual interface with common templates and a live preview of the schedule.",
        HomeRegexTitle => "Regular Expression Generator",
        HomeRegexDesc => "Common regex templates plus custom building and live match testing, making regex writing simple.",
        HomeOpen => "Open",

        DocsTitle => "Project Documentation",
        DocsDesc => "View the complete project introduction and usage instructions",

        CronTitle => "Cron Expression Generator",
        CronSubtitle => "Generate cron expressions through a visual interface with live preview and common templates",
        CronBuilderHeading => "Visual Builder",
        CronTemplatesHeading => "Common Templates",
        CronPreviewHeading => "Expression Preview",
        CronExpressionLabel => "Cron Expression",
        CronDescriptionLabel => "Schedule Description",
        CronFormatHeading => "Cron Format Reference",
        CronFormatFields => "minute hour day month weekday",
        CronSpecialChars => "Special characters",
        FieldMinute => "Minute (0-59)",
        FieldHour => "Hour (0-23)",
        FieldDay => "Day (1-31)",
        FieldMonth => "Month (1-12)",
        FieldWeekday => "Weekday (0-6, 0=Sunday)",
        ResetButton => "Reset",

        RegexTitle => "Regular Expression Generator",
        RegexSubtitle => "Common regex templates with custom building and live match testing",
        RegexTemplatesHeading => "Common Templates",
        RegexCustomHeading => "Custom Builder",
        RegexPatternLabel => "Regular Expression",
        RegexPatternPlaceholder => "Enter a custom regular expression...",
        RegexActiveLabel => "Active Expression",
        RegexNoneSelected => "none selected",
        RegexInvalidInline => "Invalid regular expression syntax",
        RegexInvalidBanner => "The regular expression is invalid, please check the syntax",
        RegexEmptyHint => "Select a template or enter a custom regular expression",
        RegexSyntaxHeading => "Common Syntax",
        RegexTestHeading => "Test & Verify",
        RegexTestLabel => "Test text (one per line)",
        RegexTestPlaceholder => "Enter text to test, one entry per line...",
        RegexResultsLabel => "Test Results",
        RegexMatchesPrefix => "Matched: ",
        RegexSummary => "Total: {total} tested, {matched} matched, {unmatched} did not match",
        ExampleLabel => "Example",
        ClearButton => "Clear",

        CopyTooltip => "Copy to clipboard",

        ToastCopied => "Copied to clipboard",
        ToastCopyFailed => "Copy failed, please copy manually",
        ToastNothingToCopy => "Nothing to copy",
        ToastTemplateLoaded => "Loaded template: {name}",
        ToastReset => "Configuration reset",
        ToastCleared => "All content cleared",
    }
}
