//! General statistics row, shared by the home and my-events pages.

use leptos::prelude::*;

use crate::models::event::EventStatistics;

#[component]
pub fn StatsRow(stats: EventStatistics) -> impl IntoView {
    view! {
        <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100">
            <div class="stat">
                <div class="stat-title">"Événements"</div>
                <div class="stat-value text-primary">{stats.total_events}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Participants"</div>
                <div class="stat-value">{stats.total_participants}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Événements actifs"</div>
                <div class="stat-value text-secondary">{stats.active_events}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Remplissage moyen"</div>
                <div class="stat-value">{format!("{:.0}%", stats.average_fill_rate)}</div>
            </div>
        </div>
    }
}
