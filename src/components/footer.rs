use leptos::prelude::*;

use crate::web::router::Link;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-6 bg-base-200 text-base-content mt-8">
            <aside>
                <p class="font-bold">"Joinly"</p>
                <p class="text-sm opacity-70">"Organisez et rejoignez des événements près de chez vous."</p>
                <Link to="/legal" class="link link-hover text-sm">"Mentions légales"</Link>
            </aside>
        </footer>
    }
}
