use contracts::domain::log_entry::aggregate::{LogEntry, LogLevel};
use contracts::query::log_query::{LevelFilter, LogFilter, SuccessFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::AddLogForm;
use crate::domain::logs::api;
use crate::shared::date_utils::{format_datetime, format_size};

#[component]
pub fn LogsPage() -> impl IntoView {
    let filters = RwSignal::new(LogFilter::default());
    let (items, set_items) = signal::<Vec<LogEntry>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_adding, set_is_adding) = signal(false);
    // Номер последнего отправленного запроса. Применяется только его
    // ответ: при быстрой смене фильтров устаревшие ответы отбрасываются.
    let fetch_seq = StoredValue::new(0u64);

    // Любое изменение фильтров запускает новую загрузку
    Effect::new(move |_| {
        let filter = filters.get();
        let seq = fetch_seq.with_value(|v| *v + 1);
        fetch_seq.set_value(seq);
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_logs(&filter).await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Ошибка загрузки логов: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let handle_reset = move |_| filters.set(LogFilter::default());

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Вы уверены, что хотите удалить эту запись?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_log(&id).await {
                Ok(()) => {
                    set_items.update(|list| list.retain(|entry| entry.to_string_id() != id));
                }
                Err(e) if e.is_not_found() => {
                    // Записи на сервере уже нет, из списка она тоже уходит
                    set_items.update(|list| list.retain(|entry| entry.to_string_id() != id));
                }
                Err(e) => {
                    log::error!("Ошибка удаления: {}", e);
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(&format!("Ошибка удаления: {}", e));
                    }
                }
            }
        });
    };

    let on_created = Callback::new(move |entry: LogEntry| {
        set_items.update(|list| list.insert(0, entry));
        set_is_adding.set(false);
    });
    let on_close = Callback::new(move |_: ()| set_is_adding.set(false));

    view! {
        <div class="content logs-page">
            <div class="header">
                <h2>"Архив логов"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=handle_reset>
                        "Сбросить фильтры"
                    </button>
                    <button class="button button--primary" on:click=move |_| set_is_adding.set(true)>
                        "Добавить лог"
                    </button>
                </div>
            </div>

            <div class="filters">
                <div class="filter-group">
                    <label for="filter-datetime">"Дата и время"</label>
                    <input
                        type="text"
                        id="filter-datetime"
                        prop:value=move || filters.get().datetime
                        on:input=move |ev| filters.update(|f| f.datetime = event_target_value(&ev))
                        placeholder="гггг-мм-дд"
                    />
                </div>

                <div class="filter-group">
                    <label for="filter-type">"Тип"</label>
                    <select
                        id="filter-type"
                        prop:value=move || filters.get().level.as_code().to_string()
                        on:change=move |ev| {
                            filters.update(|f| f.level = LevelFilter::from_code(&event_target_value(&ev)))
                        }
                    >
                        <option value="all">"Все типы"</option>
                        {LogLevel::all()
                            .into_iter()
                            .map(|level| {
                                view! { <option value=level.as_str()>{level.display_name()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="filter-group">
                    <label for="filter-success">"Статус"</label>
                    <select
                        id="filter-success"
                        prop:value=move || filters.get().success.as_code().to_string()
                        on:change=move |ev| {
                            filters.update(|f| f.success = SuccessFilter::from_code(&event_target_value(&ev)))
                        }
                    >
                        <option value="all">"Все статусы"</option>
                        <option value="success">"Успешно"</option>
                        <option value="error">"Ошибка"</option>
                    </select>
                </div>

                <div class="filter-group">
                    <label for="filter-input">"Входной файл"</label>
                    <input
                        type="text"
                        id="filter-input"
                        prop:value=move || filters.get().input
                        on:input=move |ev| filters.update(|f| f.input = event_target_value(&ev))
                        placeholder="Путь к файлу"
                    />
                </div>

                <div class="filter-group">
                    <label for="filter-output">"Выходной файл"</label>
                    <input
                        type="text"
                        id="filter-output"
                        prop:value=move || filters.get().output
                        on:input=move |ev| filters.update(|f| f.output = event_target_value(&ev))
                        placeholder="Путь к файлу"
                    />
                </div>

                <div class="filter-group">
                    <label>"Размер (байты)"</label>
                    <div class="filter-range">
                        <input
                            type="number"
                            min="0"
                            prop:value=move || filters.get().min_size
                            on:input=move |ev| filters.update(|f| f.min_size = event_target_value(&ev))
                            placeholder="Мин."
                        />
                        <span>"-"</span>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || filters.get().max_size
                            on:input=move |ev| filters.update(|f| f.max_size = event_target_value(&ev))
                            placeholder="Макс."
                        />
                    </div>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                {move || {
                    if loading.get() {
                        view! {
                            <div class="loading">
                                <p>"Загрузка данных..."</p>
                            </div>
                        }
                            .into_any()
                    } else if items.get().is_empty() {
                        view! {
                            <div class="no-data">
                                <p>"Нет данных для отображения"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Дата и время"</th>
                                        <th class="table__header-cell">"Тип"</th>
                                        <th class="table__header-cell">"Input"</th>
                                        <th class="table__header-cell">"Output"</th>
                                        <th class="table__header-cell">"Info"</th>
                                        <th class="table__header-cell">"Размер"</th>
                                        <th class="table__header-cell">"Check"</th>
                                        <th class="table__header-cell"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .get()
                                        .into_iter()
                                        .map(|entry| {
                                            let id = entry.to_string_id();
                                            let datetime = format_datetime(&entry.datetime);
                                            let size = format_size(entry.size);
                                            let level = entry.level;
                                            let LogEntry { input, output, info, check, .. } = entry;
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{datetime}</td>
                                                    <td class="table__cell">
                                                        <span class=format!("log-type log-type--{}", level.as_str())>
                                                            {level.as_str()}
                                                        </span>
                                                    </td>
                                                    <td class="table__cell">{input}</td>
                                                    <td class="table__cell">{output}</td>
                                                    <td class="table__cell">{info}</td>
                                                    <td class="table__cell">{size} " байт"</td>
                                                    <td class="table__cell">
                                                        <span class=if check {
                                                            "status status--success"
                                                        } else {
                                                            "status status--error"
                                                        }>{if check { "1" } else { "0" }}</span>
                                                    </td>
                                                    <td class="table__cell">
                                                        <button
                                                            class="button button--secondary"
                                                            on:click=move |_| handle_delete(id.clone())
                                                        >
                                                            "Удалить"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || is_adding.get()>
                <AddLogForm on_created=on_created on_close=on_close />
            </Show>
        </div>
    }
}
