use contracts::domain::log_entry::aggregate::{LogEntry, LogLevel, NewLogEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::logs::api;

/// Модальная форма добавления записи журнала.
///
/// При ошибке сохранения форма остаётся открытой и введённые
/// значения не теряются.
#[component]
pub fn AddLogForm(on_created: Callback<LogEntry>, on_close: Callback<()>) -> impl IntoView {
    let (level, set_level) = signal(LogLevel::Info);
    let (input, set_input) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let (info, set_info) = signal(String::new());
    let (size, set_size) = signal(String::new());
    let (check, set_check) = signal(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let size_value = match size.get().trim().parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                set_error_message
                    .set(Some("Размер должен быть целым неотрицательным числом".to_string()));
                return;
            }
        };
        let dto = NewLogEntry {
            level: level.get(),
            input: input.get(),
            output: output.get(),
            info: info.get(),
            size: size_value,
            check: check.get(),
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::create_log(&dto).await {
                Ok(created) => on_created.run(created),
                Err(e) => {
                    set_error_message.set(Some(format!("Ошибка при добавлении лога: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Добавить новый лог"</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="log-type">"Тип:"</label>
                        <select
                            id="log-type"
                            prop:value=move || level.get().as_str().to_string()
                            on:change=move |ev| {
                                if let Some(v) = LogLevel::from_code(&event_target_value(&ev)) {
                                    set_level.set(v);
                                }
                            }
                            disabled=move || is_saving.get()
                        >
                            {LogLevel::all()
                                .into_iter()
                                .map(|l| {
                                    view! { <option value=l.as_str()>{l.display_name()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="log-input">"Input:"</label>
                        <input
                            type="text"
                            id="log-input"
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            placeholder="/path/to/input/file.txt"
                            required
                            disabled=move || is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="log-output">"Output:"</label>
                        <input
                            type="text"
                            id="log-output"
                            prop:value=move || output.get()
                            on:input=move |ev| set_output.set(event_target_value(&ev))
                            placeholder="/path/to/output/file.txt"
                            required
                            disabled=move || is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="log-info">"Info:"</label>
                        <textarea
                            id="log-info"
                            prop:value=move || info.get()
                            on:input=move |ev| set_info.set(event_target_value(&ev))
                            placeholder="Описание операции"
                            rows="3"
                            required
                            disabled=move || is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="log-size">"Size:"</label>
                        <input
                            type="number"
                            id="log-size"
                            min="0"
                            prop:value=move || size.get()
                            on:input=move |ev| set_size.set(event_target_value(&ev))
                            required
                            disabled=move || is_saving.get()
                        />
                    </div>

                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                type="checkbox"
                                checked=move || check.get()
                                on:change=move |ev| set_check.set(event_target_checked(&ev))
                                disabled=move || is_saving.get()
                            />
                            " Check (успешное выполнение)"
                        </label>
                    </div>

                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| on_close.run(())
                            disabled=move || is_saving.get()
                        >
                            "Отмена"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Сохранение..." } else { "Добавить" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
