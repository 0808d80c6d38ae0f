pub mod components;
pub mod pages;
pub mod remote;
pub mod server_fns;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use components::{Navbar, SnackbarProvider};
use pages::{HomePage, UploadPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Joe's Cat World"/>
        <Meta name="description" content="Browse, vote on and favourite cats, or upload your own"/>

        <SnackbarProvider>
            <Router>
                <Navbar/>
                <main class="container">
                    <Routes fallback=|| "Page not found">
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/upload") view=UploadPage/>
                    </Routes>
                </main>
            </Router>
        </SnackbarProvider>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
