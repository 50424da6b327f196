use leptos::*;
use leptos_router::use_location;
use recovery_core::Page;

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="brand">
                <h1>"DR System"</h1>
                <p>"Business Continuity"</p>
            </div>
            <nav>
                {Page::NAVIGATION
                    .into_iter()
                    .map(|page| {
                        let active = move || location.pathname.with(|path| page.is_active(path));
                        view! {
                            <a href=page.path() class="nav-link" class:active=active>
                                {page.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
