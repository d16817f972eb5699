use contracts::domain::processing_config::aggregate::{ProcessingConfig, ProcessingConfigDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::configs::api;

/// Форма добавления и редактирования конфигурации.
///
/// С заполненным `initial.id` отправляет обновление и отдаёт
/// наружу сами отправленные поля; без id создаёт новую запись и
/// отдаёт сущность, которую вернул сервер.
#[component]
pub fn ConfigForm(
    initial: ProcessingConfigDto,
    on_created: Callback<ProcessingConfig>,
    on_updated: Callback<ProcessingConfigDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.id.is_some();
    let form = RwSignal::new(initial);
    let (new_arg, set_new_arg) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_add_arg = move |_| {
        let raw = new_arg.get();
        let mut added = false;
        form.update(|f| added = f.add_arg(&raw));
        if added {
            set_new_arg.set(String::new());
        }
    };

    let handle_remove_arg = move |index: usize| {
        form.update(|f| f.remove_arg(index));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = form.get();
        if let Err(msg) = dto.validate() {
            set_error_message.set(Some(msg));
            return;
        }

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match dto.id.clone() {
                Some(id) => match api::update_config(&id, &dto).await {
                    Ok(()) => on_updated.run(dto),
                    Err(e) => {
                        set_error_message.set(Some(format!("Ошибка сохранения: {}", e)));
                        set_is_saving.set(false);
                    }
                },
                None => match api::create_config(&dto).await {
                    Ok(created) => on_created.run(created),
                    Err(e) => {
                        set_error_message.set(Some(format!("Ошибка сохранения: {}", e)));
                        set_is_saving.set(false);
                    }
                },
            }
        });
    };

    view! {
        <div class="config-form">
            <h3>
                {if is_edit {
                    "Редактирование конфигурации"
                } else {
                    "Добавление новой конфигурации"
                }}
            </h3>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="config-input">"Input:"</label>
                    <input
                        type="text"
                        id="config-input"
                        prop:value=move || form.get().input
                        on:input=move |ev| form.update(|f| f.input = event_target_value(&ev))
                        placeholder="/path/to/input/folder"
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="config-output">"Output:"</label>
                    <input
                        type="text"
                        id="config-output"
                        prop:value=move || form.get().output
                        on:input=move |ev| form.update(|f| f.output = event_target_value(&ev))
                        placeholder="/path/to/output/folder"
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label>"Аргументы:"</label>
                    <div class="args-editor">
                        <div class="args-list">
                            {move || {
                                form.get()
                                    .args
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, arg)| {
                                        view! {
                                            <span class="arg-tag">
                                                {arg}
                                                <button
                                                    type="button"
                                                    class="arg-tag__remove"
                                                    on:click=move |_| handle_remove_arg(index)
                                                >
                                                    "×"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <div class="args-editor__add">
                            <input
                                type="text"
                                prop:value=move || new_arg.get()
                                on:input=move |ev| set_new_arg.set(event_target_value(&ev))
                                placeholder="Новый аргумент"
                                disabled=move || is_saving.get()
                            />
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=handle_add_arg
                                disabled=move || is_saving.get()
                            >
                                "Добавить"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| on_cancel.run(())
                        disabled=move || is_saving.get()
                    >
                        "Отмена"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                        {move || {
                            if is_saving.get() {
                                "Сохранение..."
                            } else if is_edit {
                                "Обновить"
                            } else {
                                "Добавить"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
