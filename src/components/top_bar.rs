//! Top Bar Component
//!
//! Dark navigation bar holding the search box.

use leptos::prelude::*;

use crate::components::SearchBox;

#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <nav class="navbar is-dark" role="navigation" aria-label="main navigation">
            <div class="container">
                <div class="navbar-menu">
                    <div class="navbar-item column">
                        <SearchBox />
                    </div>
                </div>
            </div>
        </nav>
    }
}
