//! List + add dialog for any record type.
//!
//! The dialog is laid out from the record's field schema; submitting runs
//! the same schema as validation. A rejected form keeps the dialog open with
//! one message under each offending input.

use crate::bridge;
use crate::cards::CardView;
use crate::state::{use_book, Storage, Toasts};
use leptos::ev::SubmitEvent;
use leptos::*;
use recovery_core::{FieldErrors, FieldKind, FieldSpec, FormData};

pub fn record_manager<E: CardView>() -> impl IntoView {
    let kind = E::KIND;
    let book = use_book::<E>();
    let storage = store_value(expect_context::<Storage>());
    let toasts = expect_context::<Toasts>();

    let open = create_rw_signal(false);
    let form = create_rw_signal(FormData::default());
    let errors = create_rw_signal(FieldErrors::default());

    let close = move || {
        open.set(false);
        form.update(FormData::clear);
        errors.set(FieldErrors::default());
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let data = form.get_untracked();
        let mut next = book.get_untracked();
        if let Err(invalid) = next.submit(&data, bridge::now()) {
            log::debug!("rejected {} form: {invalid}", kind.slug());
            errors.set(invalid);
            return;
        }

        let saved = storage.with_value(|s| s.persist(&next));
        book.set(next);
        close();
        match saved {
            Ok(()) => toasts.success(kind.success_message()),
            Err(err) => {
                log::error!("failed to save {}: {err}", kind.slug());
                toasts.error(format!("{} could not be saved: {err}", kind.singular()));
            }
        }
    };

    view! {
        <section class=format!("records {}", kind.slug())>
            <header class="page-header">
                <div>
                    <h1>{kind.title()}</h1>
                    <p class="muted">{kind.description()}</p>
                </div>
                <button class="primary" on:click=move |_| open.set(true)>
                    "+ " {kind.add_label()}
                </button>
            </header>

            <div class="card-grid">
                <For
                    each=move || book.with(|b| b.records().to_vec())
                    key=|record| record.id().to_string()
                    children=|record| record.card()
                />
            </div>

            <Show when=move || open.get()>
                <div class="dialog-backdrop" on:click=move |_| close()>
                    <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Add New " {kind.singular()}</h2>
                        <form novalidate=true on:submit=submit>
                            {E::FIELDS
                                .iter()
                                .map(|spec| field_input(*spec, form, errors))
                                .collect_view()}
                            <div class="dialog-actions">
                                <button type="button" on:click=move |_| close()>"Cancel"</button>
                                <button type="submit" class="primary">"Create"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </section>
    }
}

fn field_input(
    spec: FieldSpec,
    form: RwSignal<FormData>,
    errors: RwSignal<FieldErrors>,
) -> View {
    let name = spec.name;
    let error = move || errors.with(|e| e.get(name).map(str::to_string));
    let current = move || form.with(|f| f.raw(name).to_string());

    let control = match spec.kind {
        FieldKind::Select(_) => view! {
            <select
                id=name
                name=name
                prop:value=current
                on:change=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            >
                <option value="" disabled=true>
                    {format!("Select {}", spec.label.to_lowercase())}
                </option>
                {spec
                    .options()
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        kind => view! {
            <input
                id=name
                name=name
                type=kind.input_type()
                placeholder=spec.placeholder
                min=(kind == FieldKind::Number).then_some("0")
                prop:value=current
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            />
        }
        .into_view(),
    };

    view! {
        <div class="field" class:invalid=move || error().is_some()>
            <label for=name>
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
    .into_view()
}
