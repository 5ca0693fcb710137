use leptos::prelude::*;

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-4 prose">
            <h1>"Mentions légales"</h1>
            <h2>"Éditeur"</h2>
            <p>
                "Joinly est une plateforme de gestion d'événements éditée à des fins "
                "de démonstration."
            </p>
            <h2>"Données personnelles"</h2>
            <p>
                "Les informations collectées (nom, prénom, adresse email) servent "
                "uniquement au fonctionnement du service : création de compte, "
                "organisation et réservation d'événements. Vous pouvez supprimer "
                "votre compte et l'ensemble de vos données depuis votre profil."
            </p>
            <h2>"Cookies et stockage"</h2>
            <p>
                "Le site n'utilise pas de cookies de suivi. Les jetons de session "
                "sont conservés dans le stockage local de votre navigateur."
            </p>
        </div>
    }
}
