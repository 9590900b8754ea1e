//! Navigation - Pages and Role Layouts
//!
//! Defines the pages of the console and which of them each role sees.

use serde::{Deserialize, Serialize};

use crate::domain::role::Role;

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Record counts overview
    #[default]
    Dashboard,
    Streams,
    Subjects,
    Students,
    Exams,
}

impl ActivePage {
    /// Get the icon glyph for the page
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "▦",
            ActivePage::Streams => "≋",
            ActivePage::Subjects => "☰",
            ActivePage::Students => "☺",
            ActivePage::Exams => "✎",
        }
    }

    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "nav-dashboard",
            ActivePage::Streams => "nav-streams",
            ActivePage::Subjects => "nav-subjects",
            ActivePage::Students => "nav-students",
            ActivePage::Exams => "nav-exams",
        }
    }
}

/// A role and the pages its sidebar offers, in order.
///
/// Built once from configuration and handed to the workspace; views never
/// look the mapping up themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLayout {
    role: Role,
    pages: Vec<ActivePage>,
}

impl RoleLayout {
    /// Default page set of a role
    pub fn for_role(role: Role) -> Self {
        use ActivePage::*;

        let pages = match role {
            Role::SuperAdmin => vec![Dashboard, Streams, Subjects, Students, Exams],
            Role::Admin => vec![Dashboard, Subjects, Students, Exams],
            Role::Teacher => vec![Dashboard, Students, Exams],
            Role::Student | Role::Parent => vec![Dashboard, Exams],
        };
        Self { role, pages }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn pages(&self) -> &[ActivePage] {
        &self.pages
    }

    pub fn allows(&self, page: ActivePage) -> bool {
        self.pages.contains(&page)
    }

    /// Page shown when nothing else is selected
    pub fn home(&self) -> ActivePage {
        self.pages.first().copied().unwrap_or_default()
    }
}
