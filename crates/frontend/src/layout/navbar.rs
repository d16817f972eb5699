use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__links">
                <A href="/">"Главная"</A>
                <A href="/logs">"Логи"</A>
                <A href="/configs">"Конфигурации"</A>
            </div>
        </nav>
    }
}
