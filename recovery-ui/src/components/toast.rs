use crate::state::Toasts;
use leptos::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" class:error=toast.error on:click=move |_| toasts.dismiss(id)>
                            <strong>{toast.title}</strong>
                            <p>{toast.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
