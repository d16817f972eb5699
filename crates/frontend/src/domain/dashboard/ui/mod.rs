use contracts::domain::log_entry::aggregate::LogEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::logs::api;
use crate::shared::date_utils::format_datetime;

/// Сколько записей показывает сводка на главной странице
const RECENT_LIMIT: usize = 4;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (recent, set_recent) = signal::<Vec<LogEntry>>(Vec::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_recent_logs(RECENT_LIMIT).await {
            Ok(v) => set_recent.set(v),
            Err(e) => log::error!("Ошибка загрузки последних логов: {}", e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="content dashboard-page">
            <div class="dashboard__recent">
                <p class="section-title">"Последние логи"</p>
                {move || {
                    if loading.get() {
                        view! {
                            <div class="dashboard__row">
                                <p>"Загрузка..."</p>
                            </div>
                        }
                            .into_any()
                    } else if recent.get().is_empty() {
                        view! {
                            <div class="dashboard__row">
                                <p>"Нет данных"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        recent
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let line = format!(
                                    "{} - {}: {} - {}",
                                    format_datetime(&entry.datetime),
                                    entry.level.as_str(),
                                    entry.info,
                                    if entry.check { "Успешно" } else { "Ошибка" },
                                );
                                view! {
                                    <div class="dashboard__row">
                                        <p>{line}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <div class="dashboard__info">
                <div class="section-title">"Информация"</div>
                <p>
                    "Журнал операций обработки файлов, фильтры по архиву и настройка конфигураций запуска."
                </p>
            </div>
        </div>
    }
}
