use crate::domain::configs::ui::list::ConfigsPage;
use crate::domain::dashboard::ui::DashboardPage;
use crate::domain::logs::ui::list::LogsPage;
use crate::layout::footer::Footer;
use crate::layout::navbar::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="page">
                <Routes fallback=|| {
                    view! {
                        <div class="no-data">
                            <p>"Страница не найдена"</p>
                        </div>
                    }
                }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/logs") view=LogsPage />
                    <Route path=path!("/configs") view=ConfigsPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
