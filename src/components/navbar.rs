//! Top navigation: brand, role-driven menus, avatar dropdown.

use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::web::router::{Link, use_router};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let state = ctx.state;

    let is_authenticated = move || state.get().is_authenticated;
    let manages_events = move || state.get().can_manage_events();
    let is_participant = move || is_authenticated() && !manages_events();
    let firstname = move || state.get().firstname;
    let avatar = move || state.get().avatar_url;

    let on_logout = move |_| {
        logout(&ctx);
        router.navigate_path("/");
    };

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1 gap-2">
                <Link to="/" class="btn btn-ghost text-xl">"Joinly"</Link>
                <Link to="/eventlist" class="btn btn-ghost btn-sm">"Événements"</Link>
                <Link to="/search" class="btn btn-ghost btn-sm">"Recherche"</Link>
                <Show when=manages_events>
                    <Link to="/my-events" class="btn btn-ghost btn-sm">"Mes événements"</Link>
                    <Link to="/eventform" class="btn btn-ghost btn-sm">"Créer un événement"</Link>
                    <Link to="/organizer" class="btn btn-ghost btn-sm">"Demandes reçues"</Link>
                </Show>
                <Show when=is_participant>
                    <Link to="/participant" class="btn btn-ghost btn-sm">"Mes réservations"</Link>
                </Show>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=is_authenticated
                    fallback=move || {
                        view! {
                            <Link to="/signin" class="btn btn-ghost btn-sm">"Connexion"</Link>
                            <Link to="/signup" class="btn btn-primary btn-sm">"Inscription"</Link>
                        }
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            {move || match avatar() {
                                Some(src) => view! {
                                    <div class="avatar">
                                        <div class="w-8 rounded-full">
                                            <img src=src alt="avatar" />
                                        </div>
                                    </div>
                                }
                                .into_any(),
                                None => view! {
                                    <div class="avatar placeholder">
                                        <div class="bg-neutral text-neutral-content w-8 rounded-full">
                                            <span>
                                                {move || {
                                                    firstname().chars().next().unwrap_or('?').to_string()
                                                }}
                                            </span>
                                        </div>
                                    </div>
                                }
                                .into_any(),
                            }}
                            <span class="hidden md:inline">{firstname}</span>
                        </div>
                        <ul
                            tabindex="0"
                            class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52"
                        >
                            <li>
                                <Link to="/my_profile">"Mon profil"</Link>
                            </li>
                            <li>
                                <a on:click=on_logout>"Déconnexion"</a>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
