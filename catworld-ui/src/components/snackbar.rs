use catworld_app::domain::Notice;
use leptos::prelude::*;
use std::time::Duration;

const AUTO_HIDE: Duration = Duration::from_millis(3000);

/// Handle to the single, app-wide notification slot.
#[derive(Clone, Copy)]
pub struct Snackbar {
    current: RwSignal<Option<Notice>>,
    shown: RwSignal<u64>,
}

impl Snackbar {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            shown: RwSignal::new(0),
        }
    }

    /// Shows `notice`, replacing whatever is on screen and restarting the timer.
    pub fn show(&self, notice: Notice) {
        let generation = self.shown.get_untracked() + 1;
        self.shown.set(generation);
        self.current.set(Some(notice));

        let snackbar = *self;
        set_timeout(
            move || {
                if snackbar.shown.get_untracked() == generation {
                    snackbar.close();
                }
            },
            AUTO_HIDE,
        );
    }

    pub fn close(&self) {
        self.current.set(None);
    }
}

pub fn use_snackbar() -> Snackbar {
    expect_context::<Snackbar>()
}

#[component]
pub fn SnackbarProvider(children: Children) -> impl IntoView {
    let snackbar = Snackbar::new();
    provide_context(snackbar);

    view! {
        {children()}
        {move || {
            snackbar.current.get().map(|notice| {
                let class = format!("snackbar snackbar--{}", notice.severity.as_str());
                view! {
                    <div class=class role="alert">
                        <span class="snackbar__message">{notice.message}</span>
                        <button
                            class="snackbar__close"
                            aria-label="close"
                            on:click=move |_| snackbar.close()
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
