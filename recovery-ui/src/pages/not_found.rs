use leptos::*;
use leptos_router::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    log::warn!(
        "404: no page for {}",
        location.pathname.get_untracked()
    );

    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a href="/">"Return to Home"</a>
        </section>
    }
}
