//! Template and option catalogs
//!
//! Fixed, read-only data behind both generators: the cron template
//! presets, the per-field cron option vocabularies, and the regex
//! template presets. The catalogs are trusted data; a malformed entry is
//! a bug, not a runtime condition, and the test below holds that line.
//!
//! Display strings carry one value per supported language. The regex
//! patterns are written in the dialect of the `regex` crate, which is the
//! engine every pattern in this application is compiled with.

use crate::i18n::Language;
use crate::models::CronField;

/// A display string with one value per supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub zh: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    /// Resolve the text for a language
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Zh => self.zh,
            Language::En => self.en,
        }
    }
}

/// A named cron preset with its canonical five-field expression
#[derive(Debug, Clone, Copy)]
pub struct CronTemplate {
    pub name: LocalizedText,
    pub expression: &'static str,
    pub description: LocalizedText,
}

/// A named regex preset with a sample input that matches it
#[derive(Debug, Clone, Copy)]
pub struct RegexTemplate {
    pub name: LocalizedText,
    pub pattern: &'static str,
    pub description: LocalizedText,
    pub example: &'static str,
}

/// One entry of a cron field's constrained vocabulary
#[derive(Debug, Clone, Copy)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: LocalizedText,
}

macro_rules! lt {
    ($zh:expr, $en:expr) => {
        LocalizedText { zh: $zh, en: $en }
    };
}

static CRON_TEMPLATES: &[CronTemplate] = &[
    CronTemplate {
        name: lt!("每分钟", "Every minute"),
        expression: "* * * * *",
        description: lt!("每分钟执行一次", "Runs once every minute"),
    },
    CronTemplate {
        name: lt!("每小时", "Every hour"),
        expression: "0 * * * *",
        description: lt!("每小时的第0分钟执行", "Runs at minute 0 of every hour"),
    },
    CronTemplate {
        name: lt!("每天午夜", "Daily at midnight"),
        expression: "0 0 * * *",
        description: lt!("每天凌晨0点执行", "Runs every day at 00:00"),
    },
    CronTemplate {
        name: lt!("每天上午9点", "Daily at 9 AM"),
        expression: "0 9 * * *",
        description: lt!("每天上午9点执行", "Runs every day at 09:00"),
    },
    CronTemplate {
        name: lt!("每周一上午9点", "Mondays at 9 AM"),
        expression: "0 9 * * 1",
        description: lt!("每周一上午9点执行", "Runs every Monday at 09:00"),
    },
    CronTemplate {
        name: lt!("每月1号凌晨", "Monthly on the 1st"),
        expression: "0 0 1 * *",
        description: lt!("每月1号凌晨0点执行", "Runs on the 1st of every month at 00:00"),
    },
    CronTemplate {
        name: lt!("工作日上午9点", "Weekdays at 9 AM"),
        expression: "0 9 * * 1-5",
        description: lt!("周一到周五上午9点执行", "Runs Monday through Friday at 09:00"),
    },
    CronTemplate {
        name: lt!("每15分钟", "Every 15 minutes"),
        expression: "*/15 * * * *",
        description: lt!("每15分钟执行一次", "Runs once every 15 minutes"),
    },
];

static MINUTE_OPTIONS: &[FieldOption] = &[
    FieldOption { value: "*", label: lt!("每分钟", "Every minute") },
    FieldOption { value: "0", label: lt!("第0分钟", "Minute 0") },
    FieldOption { value: "*/5", label: lt!("每5分钟", "Every 5 minutes") },
    FieldOption { value: "*/10", label: lt!("每10分钟", "Every 10 minutes") },
    FieldOption { value: "*/15", label: lt!("每15分钟", "Every 15 minutes") },
    FieldOption { value: "*/30", label: lt!("每30分钟", "Every 30 minutes") },
];

static HOUR_OPTIONS: &[FieldOption] = &[
    FieldOption { value: "*", label: lt!("每小时", "Every hour") },
    FieldOption { value: "0", label: lt!("凌晨0点", "Midnight (0:00)") },
    FieldOption { value: "9", label: lt!("上午9点", "9 AM") },
    FieldOption { value: "12", label: lt!("中午12点", "Noon (12:00)") },
    FieldOption { value: "18", label: lt!("下午6点", "6 PM") },
    FieldOption { value: "*/2", label: lt!("每2小时", "Every 2 hours") },
    FieldOption { value: "*/6", label: lt!("每6小时", "Every 6 hours") },
];

static DAY_OPTIONS: &[FieldOption] = &[
    FieldOption { value: "*", label: lt!("每天", "Every day") },
    FieldOption { value: "1", label: lt!("每月1号", "1st of the month") },
    FieldOption { value: "15", label: lt!("每月15号", "15th of the month") },
    FieldOption { value: "*/7", label: lt!("每7天", "Every 7 days") },
];

static MONTH_OPTIONS: &[FieldOption] = &[
    FieldOption { value: "*", label: lt!("每月", "Every month") },
    FieldOption { value: "1", label: lt!("1月", "January") },
    FieldOption { value: "6", label: lt!("6月", "June") },
    FieldOption { value: "12", label: lt!("12月", "December") },
];

static WEEKDAY_OPTIONS: &[FieldOption] = &[
    FieldOption { value: "*", label: lt!("每天", "Every day") },
    FieldOption { value: "0", label: lt!("周日", "Sunday") },
    FieldOption { value: "1", label: lt!("周一", "Monday") },
    FieldOption { value: "2", label: lt!("周二", "Tuesday") },
    FieldOption { value: "3", label: lt!("周三", "Wednesday") },
    FieldOption { value: "4", label: lt!("周四", "Thursday") },
    FieldOption { value: "5", label: lt!("周五", "Friday") },
    FieldOption { value: "6", label: lt!("周六", "Saturday") },
    FieldOption { value: "1-5", label: lt!("工作日", "Weekdays") },
    FieldOption { value: "0,6", label: lt!("周末", "Weekends") },
];

static REGEX_TEMPLATES: &[RegexTemplate] = &[
    RegexTemplate {
        name: lt!("邮箱地址", "Email address"),
        pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        description: lt!("匹配标准邮箱地址格式", "Matches a standard email address"),
        example: "user@example.com",
    },
    RegexTemplate {
        name: lt!("手机号码", "Mobile number (CN)"),
        pattern: r"^(\+?86)?1[3-9]\d{9}$",
        description: lt!(
            "匹配中国大陆手机号码，支持+86或86前缀",
            "Matches a mainland China mobile number, with optional +86/86 prefix"
        ),
        example: "+8613812345678",
    },
    RegexTemplate {
        name: lt!("身份证号", "ID card number (CN)"),
        pattern: r"^[1-9]\d{5}(18|19|20)\d{2}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])\d{3}[\dXx]$",
        description: lt!("匹配18位身份证号码", "Matches an 18-digit national ID number"),
        example: "110101199001011234",
    },
    RegexTemplate {
        name: lt!("IP地址", "IP address"),
        pattern: r"^((25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(25[0-5]|2[0-4]\d|[01]?\d\d?)$",
        description: lt!("匹配IPv4地址", "Matches an IPv4 address"),
        example: "192.168.1.1",
    },
    RegexTemplate {
        name: lt!("URL链接", "URL"),
        pattern: r"^https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)$",
        description: lt!("匹配HTTP/HTTPS URL", "Matches an HTTP/HTTPS URL"),
        example: "https://www.example.com",
    },
    RegexTemplate {
        name: lt!("中文字符", "Chinese characters"),
        pattern: r"^[\x{4e00}-\x{9fa5}]+$",
        description: lt!("匹配纯中文字符", "Matches CJK characters only"),
        example: "中文测试",
    },
    RegexTemplate {
        name: lt!("数字", "Digits"),
        pattern: r"^\d+$",
        description: lt!("匹配纯数字", "Matches digits only"),
        example: "12345",
    },
    RegexTemplate {
        name: lt!("字母数字", "Alphanumeric"),
        pattern: r"^[a-zA-Z0-9]+$",
        description: lt!("匹配字母和数字组合", "Matches letters and digits"),
        example: "abc123",
    },
    // A password-strength preset would need lookahead, which the regex
    // crate does not support.
    RegexTemplate {
        name: lt!("十六进制颜色", "Hex color"),
        pattern: r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$",
        description: lt!("匹配3位或6位十六进制颜色值", "Matches a 3- or 6-digit hex color value"),
        example: "#1e90ff",
    },
    RegexTemplate {
        name: lt!("日期格式", "Date (ISO)"),
        pattern: r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$",
        description: lt!("匹配YYYY-MM-DD格式日期", "Matches a YYYY-MM-DD date"),
        example: "2024-01-15",
    },
];

/// The cron template presets, in fixed display order
pub fn cron_templates() -> &'static [CronTemplate] {
    CRON_TEMPLATES
}

/// The regex template presets, in fixed display order
pub fn regex_templates() -> &'static [RegexTemplate] {
    REGEX_TEMPLATES
}

/// The constrained option vocabulary offered for one cron field
pub fn field_options(field: CronField) -> &'static [FieldOption] {
    match field {
        CronField::Minute => MINUTE_OPTIONS,
        CronField::Hour => HOUR_OPTIONS,
        CronField::Day => DAY_OPTIONS,
        CronField::Month => MONTH_OPTIONS,
        CronField::Weekday => WEEKDAY_OPTIONS,
    }
}
