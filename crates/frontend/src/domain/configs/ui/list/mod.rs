use contracts::domain::processing_config::aggregate::{ProcessingConfig, ProcessingConfigDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::ConfigForm;
use crate::domain::configs::api;

#[component]
pub fn ConfigsPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProcessingConfig>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    // None: форма закрыта. Some(dto): форма открыта, dto.id заполнен
    // при редактировании существующей конфигурации.
    let (editing, set_editing) = signal::<Option<ProcessingConfigDto>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_configs().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Ошибка загрузки конфигураций: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let handle_create_new = move |_| set_editing.set(Some(ProcessingConfigDto::default()));

    let handle_edit = move |config: &ProcessingConfig| {
        set_editing.set(Some(ProcessingConfigDto::from_entity(config)));
    };

    let on_created = Callback::new(move |created: ProcessingConfig| {
        set_items.update(|list| list.insert(0, created));
        set_editing.set(None);
    });

    // Сервер не возвращает тело при обновлении: отправленные поля
    // вливаются в локальную копию по id.
    let on_updated = Callback::new(move |dto: ProcessingConfigDto| {
        set_items.update(|list| {
            if let Some(existing) = list.iter_mut().find(|c| Some(c.to_string_id()) == dto.id) {
                existing.input = dto.input.clone();
                existing.output = dto.output.clone();
                existing.args = dto.args.clone();
            }
        });
        set_editing.set(None);
    });

    let on_cancel = Callback::new(move |_: ()| set_editing.set(None));

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Вы уверены, что хотите удалить эту конфигурацию?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_config(&id).await {
                Ok(()) => {
                    set_items.update(|list| list.retain(|c| c.to_string_id() != id));
                }
                Err(e) if e.is_not_found() => {
                    set_items.update(|list| list.retain(|c| c.to_string_id() != id));
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

    view! {
        <div class="content configs-page">
            <div class="header">
                <h2>"Настройка конфигураций"</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=handle_create_new
                        disabled=move || editing.get().is_some()
                    >
                        "Добавить объект"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Обновить"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                editing
                    .get()
                    .map(|dto| {
                        view! {
                            <ConfigForm
                                initial=dto
                                on_created=on_created
                                on_updated=on_updated
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}

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
                                <p>"Нет конфигураций для отображения"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"ID"</th>
                                        <th class="table__header-cell">"Input"</th>
                                        <th class="table__header-cell">"Output"</th>
                                        <th class="table__header-cell">"Args"</th>
                                        <th class="table__header-cell"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .get()
                                        .into_iter()
                                        .map(|config| {
                                            let id = config.to_string_id();
                                            let id_short = format!("{:.8}", id);
                                            let id_for_delete = id.clone();
                                            let config_for_edit = config.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--id">{id_short}</td>
                                                    <td class="table__cell">{config.input.clone()}</td>
                                                    <td class="table__cell">{config.output.clone()}</td>
                                                    <td class="table__cell">
                                                        <div class="args-list">
                                                            {config
                                                                .args
                                                                .iter()
                                                                .map(|arg| {
                                                                    view! { <span class="arg-tag">{arg.clone()}</span> }
                                                                })
                                                                .collect_view()}
                                                        </div>
                                                    </td>
                                                    <td class="table__cell">
                                                        <button
                                                            class="button button--secondary"
                                                            on:click=move |_| handle_edit(&config_for_edit)
                                                        >
                                                            "Редактировать"
                                                        </button>
                                                        <button
                                                            class="button button--secondary"
                                                            on:click=move |_| handle_delete(id_for_delete.clone())
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
        </div>
    }
}
