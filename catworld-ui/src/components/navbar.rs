use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Upload Cat", "/upload")];

#[component]
pub fn Navbar() -> impl IntoView {
    let drawer_open = RwSignal::new(false);

    view! {
        <header class="navbar">
            <button
                class="navbar__menu"
                aria-label="menu"
                on:click=move |_| drawer_open.set(true)
            >
                "☰"
            </button>
            <span class="navbar__title">"Joe's Cat World"</span>
        </header>
        <Show when=move || drawer_open.get()>
            // Any click inside the drawer, link or backdrop, closes it
            <div class="drawer" on:click=move |_| drawer_open.set(false)>
                <nav class="drawer__panel">
                    <ul class="drawer__list">
                        {NAV_LINKS
                            .iter()
                            .map(|(text, href)| view! {
                                <li class="drawer__item">
                                    <a href=*href class="drawer__link">{*text}</a>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
            </div>
        </Show>
    }
}
