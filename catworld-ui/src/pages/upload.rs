use crate::components::{use_snackbar, Backdrop};
use crate::remote::ServerFnApi;
use catworld_app::application::upload::{self, UploadForm};
use catworld_app::domain::{ImageUpload, Notice, SelectedFile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, Url};

async fn read_selected_file(file: File) -> Result<SelectedFile, JsValue> {
    let preview_url = Url::create_object_url_with_blob(&file)?;
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());

    Ok(SelectedFile {
        upload: ImageUpload::new(file.name(), content_type, bytes),
        preview_url,
    })
}

fn release_preview(file: SelectedFile) {
    if let Err(err) = Url::revoke_object_url(&file.preview_url) {
        tracing::warn!("could not release preview: {:?}", err);
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let api = ServerFnApi;
    let snackbar = use_snackbar();
    let navigate = use_navigate();
    let form = RwSignal::new(UploadForm::new());
    let uploading = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match read_selected_file(file).await {
                Ok(selected) => {
                    let mut replaced = None;
                    form.update(|f| replaced = f.select(selected));
                    if let Some(previous) = replaced {
                        release_preview(previous);
                    }
                }
                Err(err) => {
                    tracing::warn!("could not read selected file: {:?}", err);
                    snackbar.show(Notice::error("Could not read the selected file"));
                }
            }
        });
    };

    let on_upload = move |_| {
        if !form.with_untracked(UploadForm::can_submit) {
            return;
        }
        uploading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let snapshot = form.get_untracked();
            let Some(result) = upload::submit(&api, &snapshot).await else {
                uploading.set(false);
                return;
            };
            let mut outcome = None;
            form.update(|f| outcome = Some(f.finish(result)));
            uploading.set(false);

            if let Some(outcome) = outcome {
                let return_to_listing = outcome.return_to_listing();
                snackbar.show(outcome.notice);
                if let Some(released) = outcome.released {
                    release_preview(released);
                }
                if return_to_listing {
                    navigate("/", Default::default());
                }
            }
        });
    };

    view! {
        <div class="upload">
            <h1 class="upload__title">"Upload a Cat"</h1>
            <div class="upload__panel">
                <input
                    id="cat-file"
                    class="upload__input"
                    type="file"
                    accept="image/*"
                    on:change=on_file_change
                />
                <label for="cat-file" class="upload__button upload__button--select">
                    "Select Image"
                </label>
                {move || {
                    form.with(|f| f.preview_url().map(str::to_string))
                        .map(|src| view! {
                            <div class="upload__preview">
                                <img src=src alt="Preview" class="upload__preview-image"/>
                            </div>
                        })
                }}
                <button
                    class="upload__button upload__button--submit"
                    prop:disabled=move || !form.with(UploadForm::can_submit)
                    on:click=on_upload
                >
                    "Upload"
                </button>
            </div>
            <Backdrop open=uploading/>
        </div>
    }
}
