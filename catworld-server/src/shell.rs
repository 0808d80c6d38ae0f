use catworld_ui::App;
use leptos::prelude::*;
use leptos_meta::MetaTags;

const CSS: &str = r#"
    :root {
        --base: #faf4ed;
        --surface: #fffaf3;
        --overlay: #f2e9e1;
        --muted: #9893a5;
        --subtle: #797593;
        --text: #575279;
        --love: #b4637a;
        --gold: #ea9d34;
        --pine: #286983;
        --foam: #56949f;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
        font-family: 'Inter', -apple-system, sans-serif;
        background: var(--base);
        color: var(--text);
        min-height: 100vh;
    }
    .container { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
    .navbar { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); }
    .navbar__menu { background: none; border: none; color: inherit; font-size: 1.5rem; cursor: pointer; }
    .navbar__title { font-size: 1.25rem; font-weight: 700; }
    .drawer { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); z-index: 20; }
    .drawer__panel { width: 240px; height: 100%; background: var(--surface); padding: 1rem 0; }
    .drawer__list { list-style: none; }
    .drawer__link { display: block; padding: 0.75rem 1.5rem; color: var(--text); text-decoration: none; }
    .drawer__link:hover { background: var(--overlay); }
    .gallery { display: flex; flex-direction: column; align-items: center; }
    .gallery__title, .upload__title { font-size: 2.25rem; font-weight: 800; color: var(--love); margin: 1rem 0 1.5rem; }
    .gallery__grid { display: grid; width: 100%; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); }
    .card { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; overflow: hidden; }
    .card__image { display: block; width: 100%; height: 16rem; object-fit: cover; }
    .card__actions { display: flex; align-items: center; justify-content: space-between; padding: 0.5rem; }
    .card__votes { display: flex; align-items: center; gap: 0.5rem; }
    .card__button { background: var(--base); border: 1px solid var(--overlay); border-radius: 50%; width: 2.25rem; height: 2.25rem; cursor: pointer; font-size: 1.1rem; }
    .card__score { min-width: 1.5rem; text-align: center; font-weight: 600; }
    .card__favourite--active { color: var(--love); }
    .pagination { display: flex; gap: 2rem; margin: 1.5rem 0; }
    .pagination__button, .upload__button {
        padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base);
        border: none; border-radius: 8px; font-weight: 600; cursor: pointer;
    }
    .pagination__button:disabled, .upload__button:disabled { background: var(--muted); cursor: not-allowed; }
    .upload { display: flex; flex-direction: column; align-items: center; margin-top: 2rem; }
    .upload__panel { width: 100%; max-width: 28rem; display: flex; flex-direction: column; gap: 1rem; }
    .upload__input { display: none; }
    .upload__button { display: block; width: 100%; text-align: center; }
    .upload__button--submit { background: var(--love); }
    .upload__preview-image { width: 100%; height: 16rem; object-fit: cover; border-radius: 8px; }
    .loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
    .loading__spinner {
        width: 50px; height: 50px; border: 4px solid var(--overlay);
        border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
    .backdrop { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5); z-index: 30; }
    .snackbar {
        position: fixed; top: 1rem; left: 50%; transform: translateX(-50%); z-index: 40;
        display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.25rem;
        border-radius: 6px; color: var(--base); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
    }
    .snackbar--success { background: var(--pine); }
    .snackbar--error { background: var(--love); }
    .snackbar__close { background: none; border: none; color: inherit; font-size: 1.25rem; cursor: pointer; }
"#;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🐱</text></svg>"/>
                <style>{CSS}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
