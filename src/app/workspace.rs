//! Workspace - Main Shell with Layout
//!
//! The workspace holds the header, the sidebar and the content area, and
//! creates page views the first time they are opened.

use gpui::{
    AnyElement, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
    div,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::domain::exam::Exam;
use crate::domain::stream::Stream;
use crate::domain::student::Student;
use crate::domain::subject::Subject;
use crate::features::dashboard::page::DashboardPage;
use crate::features::records::page::RecordsPage;
use crate::services::Catalog;
use crate::theme::colors::AdminColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    catalog: Catalog,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Page views (created lazily, then cached)
    dashboard_page: Option<Entity<DashboardPage>>,
    streams_page: Option<Entity<RecordsPage<Stream>>>,
    subjects_page: Option<Entity<RecordsPage<Subject>>>,
    students_page: Option<Entity<RecordsPage<Student>>>,
    exams_page: Option<Entity<RecordsPage<Exam>>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, catalog: Catalog, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Observe navigation for page changes
        cx.observe(&entities.navigation, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            catalog,
            header,
            sidebar,
            dashboard_page: None,
            streams_page: None,
            subjects_page: None,
            students_page: None,
            exams_page: None,
        }
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        let catalog = self.catalog.clone();

        match page {
            ActivePage::Dashboard => self
                .dashboard_page
                .get_or_insert_with(|| cx.new(|cx| DashboardPage::new(entities, catalog, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Streams => self
                .streams_page
                .get_or_insert_with(|| cx.new(|cx| RecordsPage::new(entities, &catalog, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Subjects => self
                .subjects_page
                .get_or_insert_with(|| cx.new(|cx| RecordsPage::new(entities, &catalog, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Students => self
                .students_page
                .get_or_insert_with(|| cx.new(|cx| RecordsPage::new(entities, &catalog, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Exams => self
                .exams_page
                .get_or_insert_with(|| cx.new(|cx| RecordsPage::new(entities, &catalog, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.navigation.read(cx).active_page;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AdminColors::background())
            .child(self.header.clone())
            .child(
                // Main content area
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(AdminColors::content_bg())
                            .child(content),
                    ),
            )
    }
}
