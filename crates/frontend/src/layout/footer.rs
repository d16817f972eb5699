use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__text">"Панель наблюдения за обработкой файлов"</p>
        </footer>
    }
}
