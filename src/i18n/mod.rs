//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Language code stored in the config file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Parse a language code or tag ("zh", "zh-CN", "en_US"); unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "zh" => Locale::ZhCN,
            _ => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Exam Admin", "考试管理"));

    // Navigation
    map.insert("nav-dashboard", ("Dashboard", "概览"));
    map.insert("nav-streams", ("Streams", "方向"));
    map.insert("nav-subjects", ("Subjects", "科目"));
    map.insert("nav-students", ("Students", "学生"));
    map.insert("nav-exams", ("Exams", "考试"));

    // Roles
    map.insert("role-super-admin", ("Super Admin", "超级管理员"));
    map.insert("role-admin", ("Admin", "管理员"));
    map.insert("role-teacher", ("Teacher", "教师"));
    map.insert("role-student", ("Student", "学生"));
    map.insert("role-parent", ("Parent", "家长"));

    // Actions
    map.insert("action-refresh", ("Refresh", "刷新"));

    // Dashboard
    map.insert("dashboard-welcome", ("Welcome back", "欢迎回来"));
    map.insert("dashboard-records", ("records", "条记录"));

    // Table columns
    map.insert("col-id", ("ID", "编号"));
    map.insert("col-name", ("Name", "名称"));
    map.insert("col-code", ("Code", "代码"));
    map.insert("col-description", ("Description", "描述"));
    map.insert("col-active", ("Active", "启用"));
    map.insert("col-stream", ("Stream", "方向"));
    map.insert("col-credits", ("Credits", "学分"));
    map.insert("col-roll-no", ("Roll No", "学号"));
    map.insert("col-email", ("Email", "邮箱"));
    map.insert("col-guardian-phone", ("Guardian Phone", "监护人电话"));
    map.insert("col-enrolled-on", ("Enrolled", "入学日期"));
    map.insert("col-title", ("Title", "标题"));
    map.insert("col-subject", ("Subject", "科目"));
    map.insert("col-scheduled-on", ("Date", "日期"));
    map.insert("col-duration", ("Minutes", "时长(分钟)"));
    map.insert("col-max-marks", ("Max Marks", "满分"));
    map.insert("col-status", ("Status", "状态"));

    // Values
    map.insert("value-yes", ("Yes", "是"));
    map.insert("value-no", ("No", "否"));
    map.insert("status-draft", ("Draft", "草稿"));
    map.insert("status-scheduled", ("Scheduled", "已排期"));
    map.insert("status-ongoing", ("Ongoing", "进行中"));
    map.insert("status-completed", ("Completed", "已完成"));

    // Table
    map.insert("table-no-data", ("No data", "无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-of", ("of", "共"));
    map.insert("table-filter-placeholder", ("Search...", "搜索..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
